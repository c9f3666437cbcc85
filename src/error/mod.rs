//! Error handling for the currency core
//!
//! Validation rejections (oversized blocks, malformed amounts, unbalanced
//! transactions) and configuration misuse share one error type so callers can
//! propagate either with `?`.

use std::fmt;

/// Result type alias for currency operations
pub type Result<T> = std::result::Result<T, CurrencyError>;

/// Error types for currency operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurrencyError {
    /// Invalid consensus configuration, raised by the builder
    Config(String),
    /// Decimal amount string could not be parsed
    InvalidAmount(String),
    /// Block is larger than twice the effective median size
    BlockTooBig { size: usize, limit: usize },
    /// Transaction failed a balance or structure check
    InvalidTransaction(String),
    /// Coinbase transaction could not be assembled
    MinerTx(String),
    /// Invalid address format or network prefix
    InvalidAddress(String),
    /// Key derivation or point decoding errors
    Crypto(String),
    /// Serialization/deserialization errors
    Serialization(String),
    /// Block construction or validation errors
    InvalidBlock(String),
    /// File I/O errors
    Io(String),
}

impl fmt::Display for CurrencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurrencyError::Config(msg) => write!(f, "Configuration error: {msg}"),
            CurrencyError::InvalidAmount(msg) => write!(f, "Invalid amount: {msg}"),
            CurrencyError::BlockTooBig { size, limit } => {
                write!(
                    f,
                    "Block cumulative size is too big: {size}, expected less than {limit}"
                )
            }
            CurrencyError::InvalidTransaction(msg) => write!(f, "Invalid transaction: {msg}"),
            CurrencyError::MinerTx(msg) => write!(f, "Miner transaction error: {msg}"),
            CurrencyError::InvalidAddress(msg) => write!(f, "Invalid address: {msg}"),
            CurrencyError::Crypto(msg) => write!(f, "Cryptographic error: {msg}"),
            CurrencyError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            CurrencyError::InvalidBlock(msg) => write!(f, "Invalid block: {msg}"),
            CurrencyError::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for CurrencyError {}

impl From<std::io::Error> for CurrencyError {
    fn from(err: std::io::Error) -> Self {
        CurrencyError::Io(err.to_string())
    }
}

impl From<bincode::error::EncodeError> for CurrencyError {
    fn from(err: bincode::error::EncodeError) -> Self {
        CurrencyError::Serialization(err.to_string())
    }
}

impl From<bincode::error::DecodeError> for CurrencyError {
    fn from(err: bincode::error::DecodeError) -> Self {
        CurrencyError::Serialization(err.to_string())
    }
}

impl From<data_encoding::DecodeError> for CurrencyError {
    fn from(err: data_encoding::DecodeError) -> Self {
        CurrencyError::Serialization(format!("Invalid hex: {err}"))
    }
}

impl From<toml::de::Error> for CurrencyError {
    fn from(err: toml::de::Error) -> Self {
        CurrencyError::Config(err.to_string())
    }
}
