//! Account addresses
//!
//! The public address a miner is paid to and its base58 string form.

pub mod address;

pub use address::{decode_address, encode_address, AccountPublicAddress, ADDRESS_CHECK_SUM_LEN};
