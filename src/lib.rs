//! # Cache Currency - consensus core
//!
//! The arithmetic every node of the currency must agree on, bundled behind a
//! sealed [`Currency`] value built once by [`CurrencyBuilder`].
//!
//! ## What lives here
//! - **Emission**: base reward schedule, block size penalty, growing size limit
//! - **Deposits**: interest on locked deposits and interest-aware fees
//! - **Outputs**: canonical amount decomposition and fusion recognition
//! - **Coinbase**: miner transaction construction paying stealth outputs
//! - **Difficulty**: LWMA-3 next-difficulty estimation
//! - **Genesis**: deterministic genesis block and its hash
//!
//! ## Layout
//! - `core/`: the transaction and block model and every consensus rule
//! - `wallet/`: account public addresses and their base58 form
//! - `config/`: fixed parameters plus TOML/environment overrides
//! - `utils/`: hashing, blob encoding and stealth key primitives
//! - `cli/`: argument parsing for the inspection binary
//!
//! A built `Currency` is immutable and can be shared across threads behind
//! an `Arc`.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;
pub mod wallet;

// Re-export commonly used types for convenience
pub use cli::{Command, HistoryEntryArg, Opt};
pub use config::{CurrencySettings, ENV_SETTINGS};
pub use core::{
    calculate_interest, calculate_merkle_root, check_hash, decompose_amount, format_amount,
    format_signed_amount, parse_amount, penalized_amount, Amount, Block, BlockReward, Checkpoints,
    Currency, CurrencyBuilder, Difficulty, DifficultyEstimator, ProofOfWorkHasher, Sha256LongHash,
    Transaction, TransactionInput, TransactionOutput, PRETTY_AMOUNTS,
};
pub use error::{CurrencyError, Result};
pub use utils::{base58_decode, base58_encode, generate_key_pair, sha256_digest, Hash, KeyPair};
pub use wallet::{decode_address, encode_address, AccountPublicAddress, ADDRESS_CHECK_SUM_LEN};
