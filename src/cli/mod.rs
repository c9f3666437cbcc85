//! Command-line interface
//!
//! Argument parsing for the `cache-currency` binary.

pub mod commands;

pub use commands::{Command, HistoryEntryArg, Opt};
