use crate::core::CurrencyBuilder;
use crate::error::Result;
use log::warn;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Settings taken from the process environment, read once
pub static ENV_SETTINGS: Lazy<CurrencySettings> = Lazy::new(CurrencySettings::from_env);

const TESTNET_KEY: &str = "CACHE_TESTNET";

/// Optional overrides applied on top of the consensus parameters.
///
/// Only values that legitimately differ between deployments (test networks,
/// private chains) are exposed; anything left unset keeps its parameter
/// default. Loaded from TOML, e.g.
///
/// ```toml
/// testnet = true
/// difficulty_target = 60
/// default_dust_threshold = 100
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CurrencySettings {
    pub testnet: Option<bool>,
    pub difficulty_target: Option<u64>,
    pub difficulty_window: Option<usize>,
    pub default_dust_threshold: Option<u64>,
    pub minimum_fee: Option<u64>,
    pub number_of_decimal_places: Option<usize>,
    pub mined_money_unlock_window: Option<u32>,
    pub block_granted_full_reward_zone: Option<usize>,
    pub public_address_base58_prefix: Option<u64>,
    pub fusion_tx_max_size: Option<usize>,
    pub fusion_tx_min_input_count: Option<usize>,
    pub fusion_tx_min_in_out_count_ratio: Option<usize>,
    pub upgrade_height_v2: Option<u32>,
    pub upgrade_voting_threshold: Option<u32>,
    pub upgrade_voting_window: Option<u32>,
    pub upgrade_window: Option<u32>,
}

impl CurrencySettings {
    pub fn from_toml_str(contents: &str) -> Result<CurrencySettings> {
        Ok(toml::from_str(contents)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<CurrencySettings> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_env() -> CurrencySettings {
        let mut settings = CurrencySettings::default();
        if let Ok(value) = env::var(TESTNET_KEY) {
            settings.testnet = parse_flag(&value);
            if settings.testnet.is_none() {
                warn!("Ignoring {TESTNET_KEY}={value}: expected true/false or 1/0");
            }
        }
        settings
    }

    /// Overlay `other` on `self`; values set in `other` win
    pub fn merge(self, other: CurrencySettings) -> CurrencySettings {
        CurrencySettings {
            testnet: other.testnet.or(self.testnet),
            difficulty_target: other.difficulty_target.or(self.difficulty_target),
            difficulty_window: other.difficulty_window.or(self.difficulty_window),
            default_dust_threshold: other.default_dust_threshold.or(self.default_dust_threshold),
            minimum_fee: other.minimum_fee.or(self.minimum_fee),
            number_of_decimal_places: other
                .number_of_decimal_places
                .or(self.number_of_decimal_places),
            mined_money_unlock_window: other
                .mined_money_unlock_window
                .or(self.mined_money_unlock_window),
            block_granted_full_reward_zone: other
                .block_granted_full_reward_zone
                .or(self.block_granted_full_reward_zone),
            public_address_base58_prefix: other
                .public_address_base58_prefix
                .or(self.public_address_base58_prefix),
            fusion_tx_max_size: other.fusion_tx_max_size.or(self.fusion_tx_max_size),
            fusion_tx_min_input_count: other
                .fusion_tx_min_input_count
                .or(self.fusion_tx_min_input_count),
            fusion_tx_min_in_out_count_ratio: other
                .fusion_tx_min_in_out_count_ratio
                .or(self.fusion_tx_min_in_out_count_ratio),
            upgrade_height_v2: other.upgrade_height_v2.or(self.upgrade_height_v2),
            upgrade_voting_threshold: other
                .upgrade_voting_threshold
                .or(self.upgrade_voting_threshold),
            upgrade_voting_window: other.upgrade_voting_window.or(self.upgrade_voting_window),
            upgrade_window: other.upgrade_window.or(self.upgrade_window),
        }
    }

    /// Push every set value through the builder's setters, so the builder's
    /// validation applies to file and environment values alike
    pub fn apply(&self, builder: CurrencyBuilder) -> Result<CurrencyBuilder> {
        let mut builder = builder;

        if let Some(val) = self.testnet {
            builder = builder.testnet(val);
        }
        if let Some(val) = self.difficulty_target {
            builder = builder.difficulty_target(val)?;
        }
        if let Some(val) = self.difficulty_window {
            builder = builder.difficulty_window(val)?;
        }
        if let Some(val) = self.default_dust_threshold {
            builder = builder.default_dust_threshold(val);
        }
        if let Some(val) = self.minimum_fee {
            builder = builder.minimum_fee(val);
        }
        if let Some(val) = self.number_of_decimal_places {
            builder = builder.number_of_decimal_places(val)?;
        }
        if let Some(val) = self.mined_money_unlock_window {
            builder = builder.mined_money_unlock_window(val);
        }
        if let Some(val) = self.block_granted_full_reward_zone {
            builder = builder.block_granted_full_reward_zone(val);
        }
        if let Some(val) = self.public_address_base58_prefix {
            builder = builder.public_address_base58_prefix(val);
        }
        if let Some(val) = self.fusion_tx_max_size {
            builder = builder.fusion_tx_max_size(val);
        }
        if let Some(val) = self.fusion_tx_min_input_count {
            builder = builder.fusion_tx_min_input_count(val);
        }
        if let Some(val) = self.fusion_tx_min_in_out_count_ratio {
            builder = builder.fusion_tx_min_in_out_count_ratio(val)?;
        }
        if let Some(val) = self.upgrade_height_v2 {
            builder = builder.upgrade_height_v2(val);
        }
        if let Some(val) = self.upgrade_voting_threshold {
            builder = builder.upgrade_voting_threshold(val)?;
        }
        if let Some(val) = self.upgrade_voting_window {
            builder = builder.upgrade_voting_window(val);
        }
        if let Some(val) = self.upgrade_window {
            builder = builder.upgrade_window(val)?;
        }

        Ok(builder)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
