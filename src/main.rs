// Entry point of the cache-currency CLI.
// Builds the sealed currency from parameters, optional TOML overrides, the
// environment and --testnet, then evaluates one rule and prints JSON.
use cache_currency::{
    decompose_amount, Command, Currency, CurrencyBuilder, CurrencySettings, Opt, ENV_SETTINGS,
};
use clap::Parser;
use log::{error, LevelFilter};
use serde_json::json;
use std::process;

fn main() {
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let opt = Opt::parse();

    if let Err(e) = run(opt) {
        error!("Error: {e}");
        process::exit(1);
    }
}

fn build_currency(opt: &Opt) -> Result<Currency, Box<dyn std::error::Error>> {
    let mut settings = ENV_SETTINGS.clone();
    if let Some(path) = &opt.config {
        settings = settings.merge(CurrencySettings::load(path)?);
    }
    if opt.testnet {
        settings.testnet = Some(true);
    }

    let builder = settings.apply(CurrencyBuilder::new())?;
    Ok(builder.build()?)
}

fn run(opt: Opt) -> Result<(), Box<dyn std::error::Error>> {
    let currency = build_currency(&opt)?;

    let output = match opt.command {
        Command::FormatAmount { amount } => json!({
            "amount": amount,
            "formatted": currency.format_signed_amount(amount),
        }),
        Command::ParseAmount { amount } => json!({
            "input": amount,
            "amount": currency.parse_amount(&amount)?,
        }),
        Command::BlockReward {
            height,
            median_size,
            block_size,
            already_generated,
            fee,
        } => {
            let reward =
                currency.block_reward(median_size, block_size, already_generated, fee, height)?;
            json!({
                "height": height,
                "base_reward": currency.base_reward(already_generated, height),
                "reward": reward.reward,
                "emission_change": reward.emission_change,
                "formatted": currency.format_amount(reward.reward),
            })
        }
        Command::Interest { amount, term } => {
            let interest = currency.calculate_interest(amount, term);
            json!({
                "amount": amount,
                "term": term,
                "interest": interest,
                "formatted": currency.format_amount(interest),
            })
        }
        Command::Decompose {
            amount,
            dust_threshold,
        } => {
            let dust_threshold = dust_threshold.unwrap_or(currency.default_dust_threshold());
            json!({
                "amount": amount,
                "dust_threshold": dust_threshold,
                "chunks": decompose_amount(amount, dust_threshold),
            })
        }
        Command::NextDifficulty { history } => {
            let timestamps: Vec<u64> = history.iter().map(|entry| entry.timestamp).collect();
            let cumulative: Vec<u64> = history
                .iter()
                .map(|entry| entry.cumulative_difficulty)
                .collect();
            let difficulty = currency.next_difficulty(&timestamps, &cumulative)?;
            json!({
                "blocks": history.len(),
                "next_difficulty": difficulty,
            })
        }
        Command::Genesis => {
            let genesis = currency.genesis_block();
            json!({
                "testnet": currency.is_testnet(),
                "hash": currency.genesis_block_hash().to_hex(),
                "major_version": genesis.major_version,
                "minor_version": genesis.minor_version,
                "timestamp": genesis.timestamp,
                "nonce": genesis.nonce,
                "coinbase": genesis.base_transaction.to_hex()?,
            })
        }
        Command::FusionInput { amount, threshold } => {
            let power = currency.is_amount_applicable_in_fusion_transaction_input(amount, threshold);
            json!({
                "amount": amount,
                "threshold": threshold,
                "applicable": power.is_some(),
                "power_of_ten": power,
            })
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
