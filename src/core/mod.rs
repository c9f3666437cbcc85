//! Consensus rules
//!
//! The transaction and block model plus every rule a node evaluates against
//! it: emission, size penalty, interest, fees, decomposition, fusion
//! recognition, coinbase construction, difficulty and genesis.

pub mod amount;
pub mod block;
pub mod checkpoints;
pub mod currency;
pub mod decompose;
pub mod difficulty;
pub mod extra;
pub mod fees;
pub mod fusion;
pub mod genesis;
pub mod interest;
pub mod merkle;
pub mod miner_tx;
pub mod proof_of_work;
pub mod reward;
pub mod transaction;

pub use amount::{format_amount, format_signed_amount, parse_amount};
pub use block::Block;
pub use checkpoints::Checkpoints;
pub use currency::{Currency, CurrencyBuilder};
pub use decompose::{decompose_amount, pretty_amount_index, PRETTY_AMOUNTS};
pub use difficulty::DifficultyEstimator;
pub use interest::calculate_interest;
pub use merkle::calculate_merkle_root;
pub use proof_of_work::{check_hash, ProofOfWorkHasher, Sha256LongHash};
pub use reward::{penalized_amount, BlockReward};
pub use transaction::{Amount, Difficulty, Transaction, TransactionInput, TransactionOutput};
