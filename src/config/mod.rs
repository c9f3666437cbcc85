//! Configuration management
//!
//! `parameters` is the fixed consensus table every node shares;
//! `settings` holds the optional per-deployment overrides read from a TOML
//! file and the environment.

pub mod parameters;
pub mod settings;

pub use settings::{CurrencySettings, ENV_SETTINGS};
