use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

/// One block of difficulty history given as `timestamp:cumulative_difficulty`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntryArg {
    pub timestamp: u64,
    pub cumulative_difficulty: u64,
}

impl FromStr for HistoryEntryArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (timestamp, cumulative) = s
            .split_once(':')
            .ok_or_else(|| format!("Invalid history entry: {s}. Use timestamp:cumulative_difficulty"))?;
        let timestamp = timestamp
            .trim()
            .parse::<u64>()
            .map_err(|e| format!("Invalid timestamp in {s}: {e}"))?;
        let cumulative_difficulty = cumulative
            .trim()
            .parse::<u64>()
            .map_err(|e| format!("Invalid cumulative difficulty in {s}: {e}"))?;
        Ok(HistoryEntryArg {
            timestamp,
            cumulative_difficulty,
        })
    }
}

impl std::fmt::Display for HistoryEntryArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.timestamp, self.cumulative_difficulty)
    }
}

#[derive(Debug, Parser)]
#[command(name = "cache-currency", about = "Evaluate the currency's consensus rules")]
pub struct Opt {
    #[arg(long = "config", global = true, help = "TOML file with currency overrides")]
    pub config: Option<PathBuf>,
    #[arg(long = "testnet", global = true, help = "Use the test network parameters")]
    pub testnet: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(name = "format-amount", about = "Render atomic units as a decimal amount")]
    FormatAmount {
        #[arg(help = "Amount in atomic units", allow_hyphen_values = true)]
        amount: i64,
    },
    #[command(name = "parse-amount", about = "Parse a decimal amount into atomic units")]
    ParseAmount {
        #[arg(help = "Decimal amount, e.g. 12.5")]
        amount: String,
    },
    #[command(name = "block-reward", about = "Compute the reward of a candidate block")]
    BlockReward {
        #[arg(help = "Block height")]
        height: u32,
        #[arg(long, default_value_t = 0, help = "Median size of recent blocks")]
        median_size: usize,
        #[arg(long, default_value_t = 0, help = "Cumulative size of the candidate block")]
        block_size: usize,
        #[arg(long, default_value_t = 0, help = "Coins generated before this block")]
        already_generated: u64,
        #[arg(long, default_value_t = 0, help = "Total fees in the block")]
        fee: u64,
    },
    #[command(name = "interest", about = "Interest earned by a deposit")]
    Interest {
        #[arg(help = "Deposit amount in atomic units")]
        amount: u64,
        #[arg(help = "Deposit term in blocks")]
        term: u32,
    },
    #[command(name = "decompose", about = "Split an amount into canonical chunks")]
    Decompose {
        #[arg(help = "Amount in atomic units")]
        amount: u64,
        #[arg(long, help = "Dust threshold (defaults to the currency's)")]
        dust_threshold: Option<u64>,
    },
    #[command(name = "next-difficulty", about = "Run the LWMA-3 difficulty estimator")]
    NextDifficulty {
        #[arg(help = "History entries, oldest first, as timestamp:cumulative_difficulty")]
        history: Vec<HistoryEntryArg>,
    },
    #[command(name = "genesis", about = "Show the genesis block and its hash")]
    Genesis,
    #[command(
        name = "fusion-input",
        about = "Check whether an amount may be used as a fusion input"
    )]
    FusionInput {
        #[arg(help = "Amount in atomic units")]
        amount: u64,
        #[arg(help = "Upper bound the amount must stay below")]
        threshold: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_entry_parsing() {
        let entry: HistoryEntryArg = "1700000000:4200".parse().unwrap();
        assert_eq!(entry.timestamp, 1_700_000_000);
        assert_eq!(entry.cumulative_difficulty, 4_200);
        assert_eq!(entry.to_string(), "1700000000:4200");
        assert!("1700000000".parse::<HistoryEntryArg>().is_err());
        assert!("a:1".parse::<HistoryEntryArg>().is_err());
    }

    #[test]
    fn test_global_flags() {
        let opt = Opt::parse_from(["cache-currency", "interest", "100000000", "21900", "--testnet"]);
        assert!(opt.testnet);
        assert!(matches!(
            opt.command,
            Command::Interest {
                amount: 100_000_000,
                term: 21_900
            }
        ));
    }

    #[test]
    fn test_negative_amount_argument() {
        let opt = Opt::parse_from(["cache-currency", "format-amount", "-1234"]);
        assert!(matches!(opt.command, Command::FormatAmount { amount: -1234 }));
    }
}
