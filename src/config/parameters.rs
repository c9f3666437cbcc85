/// Consensus parameters
///
/// The fixed table of named constants a `CurrencyBuilder` starts from. Every
/// node on a network must run with the same values, so they live here rather
/// than in a runtime settings file; `CurrencySettings` can only override the
/// subset that differs between test deployments.
///
/// ## Monetary Units
/// - **Atomic unit**: the smallest indivisible amount
/// - **Coin**: 100,000 atomic units (5 decimal places)
/// - **Foundation trust**: one-time allocation paid by block 1
///
/// Number of decimal places shown when formatting amounts
pub const DECIMAL_POINT: usize = 5;

/// Atomic units in one coin
pub const COIN: u64 = 100_000;

/// Hard cap on the total amount ever emitted
pub const MONEY_SUPPLY: u64 = 100_000_000 * COIN;

/// One-time allocation issued at height 1
pub const FOUNDATION_TRUST: u64 = 5_000_000 * COIN;

/// Base block subsidy before the reward curve is applied
pub const BLOCK_REWARD: u64 = COIN;

/// Ceiling on the block subsidy whatever the reward curve says
pub const STATIC_BLOCK_REWARD: u64 = 3 * COIN;

/// Blocks between two steps of the reward curve
pub const REWARD_INCREASE_INTERVAL: u32 = 264_000;

/// Additive subsidy increase per reward interval, indexed by
/// `height / REWARD_INCREASE_INTERVAL`
pub const REWARD_INCREASING_FACTOR: [u64; 9] = [
    0, 25_000, 50_000, 75_000, 100_000, 125_000, 150_000, 175_000, 200_000,
];

pub const MAX_BLOCK_NUMBER: u32 = 500_000_000;
pub const MAX_BLOCK_BLOB_SIZE: usize = 500_000_000;
pub const MAX_TX_SIZE: usize = 1_000_000_000;
pub const PUBLIC_ADDRESS_BASE58_PREFIX: u64 = 0x7ad4;

/// Blocks a coinbase output must mature before it can be spent
pub const MINED_MONEY_UNLOCK_WINDOW: u32 = 10;

pub const BLOCKCHAIN_TIMESTAMP_CHECK_WINDOW: usize = 60;
pub const BLOCK_FUTURE_TIME_LIMIT: u64 = 60 * 60 * 2;

pub const REWARD_BLOCKS_WINDOW: usize = 100;

/// Blocks up to this size never have their reward penalised
pub const BLOCK_GRANTED_FULL_REWARD_ZONE: usize = 100_000;
pub const COINBASE_BLOB_RESERVED_SIZE: usize = 600;

/// Minimum transaction fee (0.0001 coins)
pub const MINIMUM_FEE: u64 = 10;
pub const MINIMUM_FEE_BANKING: u64 = 1_000;

/// Amounts at or below this are swept into a single dust chunk
pub const DEFAULT_DUST_THRESHOLD: u64 = 10;

/// Target solve time in seconds
pub const DIFFICULTY_TARGET: u64 = 120;

/// Number of solve times the LWMA-3 estimator weighs
pub const DIFFICULTY_WINDOW: usize = 60;

/// Difficulty returned while the chain has ten blocks or fewer
pub const DIFFICULTY_GUESS: u64 = 100;

/// Deposit terms are counted in 30-day months of two-minute blocks
pub const DEPOSIT_TERM_MONTH: u32 = 21_900;
pub const DEPOSIT_MIN_AMOUNT: u64 = COIN;
pub const DEPOSIT_MIN_TERM: u32 = DEPOSIT_TERM_MONTH;
pub const DEPOSIT_MAX_TERM: u32 = 12 * DEPOSIT_TERM_MONTH;

/// Divisor turning atomic units into the whole-coin brackets interest
/// rates are chosen by
pub const INTEREST_AMOUNT_UNIT: u64 = 100_000;

pub const MAX_BLOCK_SIZE_INITIAL: usize = 100 * 1024;
pub const MAX_BLOCK_SIZE_GROWTH_SPEED_NUMERATOR: u64 = 100 * 1024;
pub const MAX_BLOCK_SIZE_GROWTH_SPEED_DENOMINATOR: u64 = 365 * 24 * 60 * 60 / DIFFICULTY_TARGET;

pub const LOCKED_TX_ALLOWED_DELTA_BLOCKS: usize = 1;
pub const LOCKED_TX_ALLOWED_DELTA_SECONDS: u64 =
    DIFFICULTY_TARGET * LOCKED_TX_ALLOWED_DELTA_BLOCKS as u64;

pub const MEMPOOL_TX_LIVETIME: u64 = 60 * 60 * 24;
pub const MEMPOOL_TX_FROM_ALT_BLOCK_LIVETIME: u64 = 60 * 60 * 24 * 7;
pub const NUMBER_OF_PERIODS_TO_FORGET_TX_DELETED_FROM_POOL: u64 = 7;

pub const UPGRADE_HEIGHT_V2: u32 = 1;
pub const UPGRADE_VOTING_THRESHOLD: u32 = 90;
pub const UPGRADE_VOTING_WINDOW: u32 = 720;
pub const UPGRADE_WINDOW: u32 = 720;

pub const MAX_TX_SIZE_LIMIT: usize = BLOCK_GRANTED_FULL_REWARD_ZONE - COINBASE_BLOB_RESERVED_SIZE;
pub const FUSION_TX_MAX_SIZE: usize = BLOCK_GRANTED_FULL_REWARD_ZONE * 30 / 100;
pub const FUSION_TX_MIN_INPUT_COUNT: usize = 12;
pub const FUSION_TX_MIN_IN_OUT_COUNT_RATIO: usize = 4;

pub const BLOCK_MAJOR_VERSION_1: u8 = 1;
pub const BLOCK_MAJOR_VERSION_2: u8 = 2;
pub const BLOCK_MINOR_VERSION_0: u8 = 0;
pub const TRANSACTION_VERSION_1: u8 = 1;

pub const GENESIS_TIMESTAMP: u64 = 1_527_078_920;
pub const GENESIS_NONCE: u32 = 70;

/// Coinbase transaction of block 0, encoded as a legacy bincode blob.
///
/// Never regenerate this at runtime: the coinbase builder draws a random
/// transaction key, and every node has to agree on the genesis hash.
pub const GENESIS_COINBASE_TX_HEX: &str = concat!(
    "01",
    "0a00000000000000",
    "0100000000000000",
    "00000000",
    "00000000",
    "0100000000000000",
    "a086010000000000",
    "4fc7a1b3d2e5908c6a3f1e2d7b8c9a0e5d4c3b2a1908f7e6d5c4b3a29180f7e6",
    "2100000000000000",
    "01",
    "e6f78091a2b3c4d5e6f708192a3b4c5d6e7f8091a2b3c4d5e6f708192a3b4c5d",
);

/// Id of the mainnet genesis block built from the constants above
pub const GENESIS_BLOCK_HASH: &str =
    "61b2c1e2ac818e23714741dbe16a467df687b9e3420b87ed4b9ec2ce04517ec3";

/// Id of the testnet genesis block (nonce one higher)
pub const TESTNET_GENESIS_BLOCK_HASH: &str =
    "7e9ea6d7fffad4dd386fd9144bf6d65a95a24432f60a01cd0aaba242198c08f1";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monetary_constants() {
        assert_eq!(COIN, 10u64.pow(DECIMAL_POINT as u32));
        const _: () = assert!(FOUNDATION_TRUST < MONEY_SUPPLY);
        const _: () = assert!(BLOCK_REWARD <= STATIC_BLOCK_REWARD);
        const _: () = assert!(MINIMUM_FEE < MINIMUM_FEE_BANKING);
    }

    #[test]
    fn test_reward_curve_is_increasing() {
        assert!(REWARD_INCREASING_FACTOR.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(REWARD_INCREASING_FACTOR[0], 0);
    }

    #[test]
    fn test_genesis_blob_layout() {
        // version + unlock + inputs + outputs + extra
        assert_eq!(GENESIS_COINBASE_TX_HEX.len(), 2 * 114);
    }
}
