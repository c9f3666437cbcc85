//! Sealed consensus configuration
//!
//! A `Currency` is assembled once through [`CurrencyBuilder`] and is read-only
//! afterwards: it exposes getters and pure rule evaluations only, so a single
//! instance can be shared across validation threads behind `&` or `Arc`.
//!
//! The rule evaluations themselves live next to their algorithms (`reward`,
//! `interest`, `fees`, `fusion`, `miner_tx`, `difficulty`, `genesis`) as
//! further `impl Currency` blocks.

use crate::config::parameters;
use crate::core::genesis::build_genesis_block;
use crate::core::proof_of_work::{check_hash, ProofOfWorkHasher};
use crate::core::{Amount, Block, Difficulty};
use crate::error::{CurrencyError, Result};
use crate::utils::Hash;
use crate::wallet::{decode_address, encode_address, AccountPublicAddress};
use log::{debug, info};

/// Largest decimal place count whose coin value still fits in a `u64`
const MAX_DECIMAL_PLACES: usize = 19;

#[derive(Debug, Clone)]
pub struct Currency {
    pub(crate) max_block_number: u32,
    pub(crate) max_block_blob_size: usize,
    pub(crate) max_tx_size: usize,
    pub(crate) public_address_base58_prefix: u64,
    pub(crate) mined_money_unlock_window: u32,

    pub(crate) timestamp_check_window: usize,
    pub(crate) block_future_time_limit: u64,

    pub(crate) money_supply: Amount,
    pub(crate) foundation_trust: Amount,
    pub(crate) base_block_reward: Amount,
    pub(crate) max_block_reward: Amount,
    pub(crate) reward_increase_interval: u32,

    pub(crate) reward_blocks_window: usize,
    pub(crate) block_granted_full_reward_zone: usize,
    pub(crate) miner_tx_blob_reserved_size: usize,

    pub(crate) number_of_decimal_places: usize,
    pub(crate) coin: Amount,

    pub(crate) minimum_fee: Amount,
    pub(crate) minimum_fee_banking: Amount,
    pub(crate) default_dust_threshold: Amount,

    pub(crate) difficulty_target: u64,
    pub(crate) difficulty_window: usize,

    pub(crate) deposit_min_amount: Amount,
    pub(crate) deposit_min_term: u32,
    pub(crate) deposit_max_term: u32,

    pub(crate) max_block_size_initial: usize,
    pub(crate) max_block_size_growth_speed_numerator: u64,
    pub(crate) max_block_size_growth_speed_denominator: u64,

    pub(crate) locked_tx_allowed_delta_seconds: u64,
    pub(crate) locked_tx_allowed_delta_blocks: usize,

    pub(crate) mempool_tx_live_time: u64,
    pub(crate) mempool_tx_from_alt_block_live_time: u64,
    pub(crate) number_of_periods_to_forget_tx_deleted_from_pool: u64,

    pub(crate) upgrade_height_v2: u32,
    pub(crate) upgrade_voting_threshold: u32,
    pub(crate) upgrade_voting_window: u32,
    pub(crate) upgrade_window: u32,

    pub(crate) transaction_max_size: usize,
    pub(crate) fusion_tx_max_size: usize,
    pub(crate) fusion_tx_min_input_count: usize,
    pub(crate) fusion_tx_min_in_out_count_ratio: usize,

    pub(crate) genesis_coinbase_tx_hex: String,
    pub(crate) genesis_timestamp: u64,
    pub(crate) genesis_nonce: u32,

    pub(crate) testnet: bool,

    pub(crate) genesis_block: Block,
    pub(crate) genesis_block_hash: Hash,
}

impl Currency {
    pub fn max_block_height(&self) -> u32 {
        self.max_block_number
    }

    pub fn max_block_blob_size(&self) -> usize {
        self.max_block_blob_size
    }

    pub fn max_tx_size(&self) -> usize {
        self.max_tx_size
    }

    pub fn public_address_base58_prefix(&self) -> u64 {
        self.public_address_base58_prefix
    }

    pub fn mined_money_unlock_window(&self) -> u32 {
        self.mined_money_unlock_window
    }

    pub fn timestamp_check_window(&self) -> usize {
        self.timestamp_check_window
    }

    pub fn block_future_time_limit(&self) -> u64 {
        self.block_future_time_limit
    }

    pub fn money_supply(&self) -> Amount {
        self.money_supply
    }

    pub fn foundation_trust(&self) -> Amount {
        self.foundation_trust
    }

    pub fn base_block_reward(&self) -> Amount {
        self.base_block_reward
    }

    pub fn max_block_reward(&self) -> Amount {
        self.max_block_reward
    }

    pub fn reward_increase_interval(&self) -> u32 {
        self.reward_increase_interval
    }

    pub fn reward_blocks_window(&self) -> usize {
        self.reward_blocks_window
    }

    pub fn block_granted_full_reward_zone(&self) -> usize {
        self.block_granted_full_reward_zone
    }

    pub fn miner_tx_blob_reserved_size(&self) -> usize {
        self.miner_tx_blob_reserved_size
    }

    pub fn number_of_decimal_places(&self) -> usize {
        self.number_of_decimal_places
    }

    /// Atomic units in one whole coin, `10^number_of_decimal_places`
    pub fn coin(&self) -> Amount {
        self.coin
    }

    pub fn minimum_fee(&self) -> Amount {
        self.minimum_fee
    }

    pub fn minimum_fee_banking(&self) -> Amount {
        self.minimum_fee_banking
    }

    pub fn default_dust_threshold(&self) -> Amount {
        self.default_dust_threshold
    }

    pub fn difficulty_target(&self) -> u64 {
        self.difficulty_target
    }

    pub fn difficulty_window(&self) -> usize {
        self.difficulty_window
    }

    /// Number of (timestamp, cumulative difficulty) samples the estimator
    /// wants: the window plus the block before it
    pub fn difficulty_blocks_count(&self) -> usize {
        self.difficulty_window + 1
    }

    pub fn deposit_min_amount(&self) -> Amount {
        self.deposit_min_amount
    }

    pub fn deposit_min_term(&self) -> u32 {
        self.deposit_min_term
    }

    pub fn deposit_max_term(&self) -> u32 {
        self.deposit_max_term
    }

    pub fn max_block_size_initial(&self) -> usize {
        self.max_block_size_initial
    }

    pub fn locked_tx_allowed_delta_seconds(&self) -> u64 {
        self.locked_tx_allowed_delta_seconds
    }

    pub fn locked_tx_allowed_delta_blocks(&self) -> usize {
        self.locked_tx_allowed_delta_blocks
    }

    pub fn mempool_tx_live_time(&self) -> u64 {
        self.mempool_tx_live_time
    }

    pub fn mempool_tx_from_alt_block_live_time(&self) -> u64 {
        self.mempool_tx_from_alt_block_live_time
    }

    pub fn number_of_periods_to_forget_tx_deleted_from_pool(&self) -> u64 {
        self.number_of_periods_to_forget_tx_deleted_from_pool
    }

    pub fn upgrade_voting_threshold(&self) -> u32 {
        self.upgrade_voting_threshold
    }

    pub fn upgrade_voting_window(&self) -> u32 {
        self.upgrade_voting_window
    }

    pub fn upgrade_window(&self) -> u32 {
        self.upgrade_window
    }

    pub fn transaction_max_size(&self) -> usize {
        self.transaction_max_size
    }

    pub fn fusion_tx_max_size(&self) -> usize {
        self.fusion_tx_max_size
    }

    pub fn fusion_tx_min_input_count(&self) -> usize {
        self.fusion_tx_min_input_count
    }

    pub fn fusion_tx_min_in_out_count_ratio(&self) -> usize {
        self.fusion_tx_min_in_out_count_ratio
    }

    pub fn is_testnet(&self) -> bool {
        self.testnet
    }

    pub fn genesis_block(&self) -> &Block {
        &self.genesis_block
    }

    pub fn genesis_block_hash(&self) -> Hash {
        self.genesis_block_hash
    }

    /// Activation height of a block major version; versions without a
    /// scheduled upgrade never activate.
    pub fn upgrade_height(&self, major_version: u8) -> u32 {
        if major_version == parameters::BLOCK_MAJOR_VERSION_2 {
            self.upgrade_height_v2
        } else {
            u32::MAX
        }
    }

    pub fn min_number_voting_blocks(&self) -> u32 {
        let votes = u64::from(self.upgrade_voting_window) * u64::from(self.upgrade_voting_threshold);
        votes.div_ceil(100) as u32
    }

    pub fn max_upgrade_distance(&self) -> u32 {
        self.upgrade_window.saturating_mul(7)
    }

    pub fn calculate_upgrade_height(&self, vote_complete_height: u32) -> u32 {
        vote_complete_height.saturating_add(self.upgrade_window)
    }

    /// Hard block size cap, growing linearly with height
    pub fn max_block_cumulative_size(&self, height: u64) -> usize {
        let growth = u128::from(height) * u128::from(self.max_block_size_growth_speed_numerator)
            / u128::from(self.max_block_size_growth_speed_denominator);
        let max_size = self.max_block_size_initial as u128 + growth;
        usize::try_from(max_size).unwrap_or(usize::MAX)
    }

    /// Rough upper bound on how many ring inputs fit into a transaction of
    /// `transaction_size` bytes with `output_count` outputs
    pub fn approximate_maximum_input_count(
        &self,
        transaction_size: usize,
        output_count: usize,
        mixin_count: usize,
    ) -> usize {
        const KEY_IMAGE_SIZE: usize = 32;
        const OUTPUT_KEY_SIZE: usize = 32;
        const AMOUNT_SIZE: usize = 8 + 2;
        const GLOBAL_INDEXES_VECTOR_SIZE_SIZE: usize = 1;
        const GLOBAL_INDEXES_INITIAL_VALUE_SIZE: usize = 4;
        const GLOBAL_INDEXES_DIFFERENCE_SIZE: usize = 4;
        const SIGNATURE_SIZE: usize = 64;
        const EXTRA_TAG_SIZE: usize = 1;
        const INPUT_TAG_SIZE: usize = 1;
        const OUTPUT_TAG_SIZE: usize = 1;
        const PUBLIC_KEY_SIZE: usize = 32;
        const TRANSACTION_VERSION_SIZE: usize = 1;
        const TRANSACTION_UNLOCK_TIME_SIZE: usize = 8;

        let outputs_size = output_count * (OUTPUT_TAG_SIZE + OUTPUT_KEY_SIZE + AMOUNT_SIZE);
        let header_size =
            TRANSACTION_VERSION_SIZE + TRANSACTION_UNLOCK_TIME_SIZE + EXTRA_TAG_SIZE + PUBLIC_KEY_SIZE;
        let input_size = INPUT_TAG_SIZE
            + AMOUNT_SIZE
            + KEY_IMAGE_SIZE
            + SIGNATURE_SIZE
            + GLOBAL_INDEXES_VECTOR_SIZE_SIZE
            + GLOBAL_INDEXES_INITIAL_VALUE_SIZE
            + mixin_count * (GLOBAL_INDEXES_DIFFERENCE_SIZE + SIGNATURE_SIZE);

        transaction_size
            .saturating_sub(header_size)
            .saturating_sub(outputs_size)
            / input_size
    }

    pub fn account_address_as_string(&self, address: &AccountPublicAddress) -> String {
        encode_address(self.public_address_base58_prefix, address)
    }

    pub fn parse_account_address_string(&self, encoded: &str) -> Result<AccountPublicAddress> {
        let (prefix, address) = decode_address(encoded)?;
        if prefix != self.public_address_base58_prefix {
            debug!(
                "Wrong address prefix: {prefix}, expected {}",
                self.public_address_base58_prefix
            );
            return Err(CurrencyError::InvalidAddress(format!(
                "Wrong address prefix {prefix:#x}"
            )));
        }
        Ok(address)
    }

    /// Long-hash `block` and check it against `difficulty`, returning the
    /// proof-of-work hash when it passes
    pub fn check_proof_of_work(
        &self,
        hasher: &dyn ProofOfWorkHasher,
        block: &Block,
        difficulty: Difficulty,
    ) -> Result<Hash> {
        let proof_of_work = hasher.long_hash(block)?;
        if !check_hash(&proof_of_work, difficulty) {
            return Err(CurrencyError::InvalidBlock(format!(
                "Proof of work {proof_of_work} does not meet difficulty {difficulty}"
            )));
        }
        Ok(proof_of_work)
    }
}

/// Staged construction of a [`Currency`]
///
/// Starts from the constants in `config::parameters`. Setters that can break
/// a rule evaluation (a zero divisor, an empty window) validate on assignment
/// and return `Result<Self>`; `build` validates the whole set again before
/// sealing.
#[derive(Debug, Clone)]
pub struct CurrencyBuilder {
    currency: Currency,
}

impl Default for CurrencyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CurrencyBuilder {
    pub fn new() -> CurrencyBuilder {
        CurrencyBuilder {
            currency: Currency {
                max_block_number: parameters::MAX_BLOCK_NUMBER,
                max_block_blob_size: parameters::MAX_BLOCK_BLOB_SIZE,
                max_tx_size: parameters::MAX_TX_SIZE,
                public_address_base58_prefix: parameters::PUBLIC_ADDRESS_BASE58_PREFIX,
                mined_money_unlock_window: parameters::MINED_MONEY_UNLOCK_WINDOW,
                timestamp_check_window: parameters::BLOCKCHAIN_TIMESTAMP_CHECK_WINDOW,
                block_future_time_limit: parameters::BLOCK_FUTURE_TIME_LIMIT,
                money_supply: parameters::MONEY_SUPPLY,
                foundation_trust: parameters::FOUNDATION_TRUST,
                base_block_reward: parameters::BLOCK_REWARD,
                max_block_reward: parameters::STATIC_BLOCK_REWARD,
                reward_increase_interval: parameters::REWARD_INCREASE_INTERVAL,
                reward_blocks_window: parameters::REWARD_BLOCKS_WINDOW,
                block_granted_full_reward_zone: parameters::BLOCK_GRANTED_FULL_REWARD_ZONE,
                miner_tx_blob_reserved_size: parameters::COINBASE_BLOB_RESERVED_SIZE,
                number_of_decimal_places: parameters::DECIMAL_POINT,
                coin: parameters::COIN,
                minimum_fee: parameters::MINIMUM_FEE,
                minimum_fee_banking: parameters::MINIMUM_FEE_BANKING,
                default_dust_threshold: parameters::DEFAULT_DUST_THRESHOLD,
                difficulty_target: parameters::DIFFICULTY_TARGET,
                difficulty_window: parameters::DIFFICULTY_WINDOW,
                deposit_min_amount: parameters::DEPOSIT_MIN_AMOUNT,
                deposit_min_term: parameters::DEPOSIT_MIN_TERM,
                deposit_max_term: parameters::DEPOSIT_MAX_TERM,
                max_block_size_initial: parameters::MAX_BLOCK_SIZE_INITIAL,
                max_block_size_growth_speed_numerator: parameters::MAX_BLOCK_SIZE_GROWTH_SPEED_NUMERATOR,
                max_block_size_growth_speed_denominator:
                    parameters::MAX_BLOCK_SIZE_GROWTH_SPEED_DENOMINATOR,
                locked_tx_allowed_delta_seconds: parameters::LOCKED_TX_ALLOWED_DELTA_SECONDS,
                locked_tx_allowed_delta_blocks: parameters::LOCKED_TX_ALLOWED_DELTA_BLOCKS,
                mempool_tx_live_time: parameters::MEMPOOL_TX_LIVETIME,
                mempool_tx_from_alt_block_live_time: parameters::MEMPOOL_TX_FROM_ALT_BLOCK_LIVETIME,
                number_of_periods_to_forget_tx_deleted_from_pool:
                    parameters::NUMBER_OF_PERIODS_TO_FORGET_TX_DELETED_FROM_POOL,
                upgrade_height_v2: parameters::UPGRADE_HEIGHT_V2,
                upgrade_voting_threshold: parameters::UPGRADE_VOTING_THRESHOLD,
                upgrade_voting_window: parameters::UPGRADE_VOTING_WINDOW,
                upgrade_window: parameters::UPGRADE_WINDOW,
                transaction_max_size: parameters::MAX_TX_SIZE_LIMIT,
                fusion_tx_max_size: parameters::FUSION_TX_MAX_SIZE,
                fusion_tx_min_input_count: parameters::FUSION_TX_MIN_INPUT_COUNT,
                fusion_tx_min_in_out_count_ratio: parameters::FUSION_TX_MIN_IN_OUT_COUNT_RATIO,
                genesis_coinbase_tx_hex: parameters::GENESIS_COINBASE_TX_HEX.to_string(),
                genesis_timestamp: parameters::GENESIS_TIMESTAMP,
                genesis_nonce: parameters::GENESIS_NONCE,
                testnet: false,
                genesis_block: Block::default(),
                genesis_block_hash: Hash::default(),
            },
        }
    }

    /// Validate, apply network-mode adjustments, build the genesis block and
    /// seal the configuration.
    pub fn build(self) -> Result<Currency> {
        let mut currency = self.currency;
        validate(&currency)?;

        if currency.testnet {
            currency.upgrade_height_v2 = 0;
        }

        currency.genesis_block = build_genesis_block(
            &currency.genesis_coinbase_tx_hex,
            currency.genesis_timestamp,
            currency.genesis_nonce,
            currency.testnet,
        )?;
        currency.genesis_block_hash = currency.genesis_block.hash()?;

        info!(
            "Currency sealed ({}), genesis block hash {}",
            if currency.testnet { "testnet" } else { "mainnet" },
            currency.genesis_block_hash
        );
        Ok(currency)
    }

    pub fn testnet(mut self, val: bool) -> Self {
        self.currency.testnet = val;
        self
    }

    pub fn max_block_number(mut self, val: u32) -> Self {
        self.currency.max_block_number = val;
        self
    }

    pub fn max_block_blob_size(mut self, val: usize) -> Self {
        self.currency.max_block_blob_size = val;
        self
    }

    pub fn max_tx_size(mut self, val: usize) -> Self {
        self.currency.max_tx_size = val;
        self
    }

    pub fn public_address_base58_prefix(mut self, val: u64) -> Self {
        self.currency.public_address_base58_prefix = val;
        self
    }

    pub fn mined_money_unlock_window(mut self, val: u32) -> Self {
        self.currency.mined_money_unlock_window = val;
        self
    }

    pub fn timestamp_check_window(mut self, val: usize) -> Self {
        self.currency.timestamp_check_window = val;
        self
    }

    pub fn block_future_time_limit(mut self, val: u64) -> Self {
        self.currency.block_future_time_limit = val;
        self
    }

    pub fn money_supply(mut self, val: Amount) -> Result<Self> {
        if val == 0 {
            return Err(config_error("money supply must be positive"));
        }
        self.currency.money_supply = val;
        Ok(self)
    }

    pub fn foundation_trust(mut self, val: Amount) -> Self {
        self.currency.foundation_trust = val;
        self
    }

    pub fn base_block_reward(mut self, val: Amount) -> Self {
        self.currency.base_block_reward = val;
        self
    }

    pub fn max_block_reward(mut self, val: Amount) -> Self {
        self.currency.max_block_reward = val;
        self
    }

    pub fn reward_increase_interval(mut self, val: u32) -> Result<Self> {
        if val == 0 {
            return Err(config_error("reward increase interval must be positive"));
        }
        self.currency.reward_increase_interval = val;
        Ok(self)
    }

    pub fn reward_blocks_window(mut self, val: usize) -> Self {
        self.currency.reward_blocks_window = val;
        self
    }

    pub fn block_granted_full_reward_zone(mut self, val: usize) -> Self {
        self.currency.block_granted_full_reward_zone = val;
        self
    }

    pub fn miner_tx_blob_reserved_size(mut self, val: usize) -> Self {
        self.currency.miner_tx_blob_reserved_size = val;
        self
    }

    pub fn number_of_decimal_places(mut self, val: usize) -> Result<Self> {
        if val > MAX_DECIMAL_PLACES {
            return Err(config_error(&format!(
                "number of decimal places must be at most {MAX_DECIMAL_PLACES}, got {val}"
            )));
        }
        self.currency.number_of_decimal_places = val;
        self.currency.coin = 10u64.pow(val as u32);
        Ok(self)
    }

    pub fn minimum_fee(mut self, val: Amount) -> Self {
        self.currency.minimum_fee = val;
        self
    }

    pub fn minimum_fee_banking(mut self, val: Amount) -> Self {
        self.currency.minimum_fee_banking = val;
        self
    }

    pub fn default_dust_threshold(mut self, val: Amount) -> Self {
        self.currency.default_dust_threshold = val;
        self
    }

    pub fn difficulty_target(mut self, val: u64) -> Result<Self> {
        if val == 0 {
            return Err(config_error("difficulty target must be positive"));
        }
        self.currency.difficulty_target = val;
        Ok(self)
    }

    pub fn difficulty_window(mut self, val: usize) -> Result<Self> {
        if val < 2 {
            return Err(config_error(&format!(
                "difficulty window must be at least 2, got {val}"
            )));
        }
        self.currency.difficulty_window = val;
        Ok(self)
    }

    pub fn deposit_min_amount(mut self, val: Amount) -> Self {
        self.currency.deposit_min_amount = val;
        self
    }

    pub fn deposit_min_term(mut self, val: u32) -> Self {
        self.currency.deposit_min_term = val;
        self
    }

    pub fn deposit_max_term(mut self, val: u32) -> Self {
        self.currency.deposit_max_term = val;
        self
    }

    pub fn max_block_size_initial(mut self, val: usize) -> Self {
        self.currency.max_block_size_initial = val;
        self
    }

    pub fn max_block_size_growth_speed_numerator(mut self, val: u64) -> Self {
        self.currency.max_block_size_growth_speed_numerator = val;
        self
    }

    pub fn max_block_size_growth_speed_denominator(mut self, val: u64) -> Result<Self> {
        if val == 0 {
            return Err(config_error("block size growth denominator must be positive"));
        }
        self.currency.max_block_size_growth_speed_denominator = val;
        Ok(self)
    }

    pub fn locked_tx_allowed_delta_seconds(mut self, val: u64) -> Self {
        self.currency.locked_tx_allowed_delta_seconds = val;
        self
    }

    pub fn locked_tx_allowed_delta_blocks(mut self, val: usize) -> Self {
        self.currency.locked_tx_allowed_delta_blocks = val;
        self
    }

    pub fn mempool_tx_live_time(mut self, val: u64) -> Self {
        self.currency.mempool_tx_live_time = val;
        self
    }

    pub fn mempool_tx_from_alt_block_live_time(mut self, val: u64) -> Self {
        self.currency.mempool_tx_from_alt_block_live_time = val;
        self
    }

    pub fn number_of_periods_to_forget_tx_deleted_from_pool(mut self, val: u64) -> Self {
        self.currency.number_of_periods_to_forget_tx_deleted_from_pool = val;
        self
    }

    pub fn upgrade_height_v2(mut self, val: u32) -> Self {
        self.currency.upgrade_height_v2 = val;
        self
    }

    pub fn upgrade_voting_threshold(mut self, val: u32) -> Result<Self> {
        if !(1..=100).contains(&val) {
            return Err(config_error(&format!(
                "upgrade voting threshold must be in [1, 100], got {val}"
            )));
        }
        self.currency.upgrade_voting_threshold = val;
        Ok(self)
    }

    pub fn upgrade_voting_window(mut self, val: u32) -> Self {
        self.currency.upgrade_voting_window = val;
        self
    }

    pub fn upgrade_window(mut self, val: u32) -> Result<Self> {
        if val == 0 {
            return Err(config_error("upgrade window must be positive"));
        }
        self.currency.upgrade_window = val;
        Ok(self)
    }

    pub fn transaction_max_size(mut self, val: usize) -> Self {
        self.currency.transaction_max_size = val;
        self
    }

    pub fn fusion_tx_max_size(mut self, val: usize) -> Self {
        self.currency.fusion_tx_max_size = val;
        self
    }

    pub fn fusion_tx_min_input_count(mut self, val: usize) -> Self {
        self.currency.fusion_tx_min_input_count = val;
        self
    }

    pub fn fusion_tx_min_in_out_count_ratio(mut self, val: usize) -> Result<Self> {
        if val == 0 {
            return Err(config_error("fusion input/output ratio must be positive"));
        }
        self.currency.fusion_tx_min_in_out_count_ratio = val;
        Ok(self)
    }

    pub fn genesis_coinbase_tx_hex(mut self, val: &str) -> Self {
        self.currency.genesis_coinbase_tx_hex = val.to_string();
        self
    }

    pub fn genesis_timestamp(mut self, val: u64) -> Self {
        self.currency.genesis_timestamp = val;
        self
    }

    pub fn genesis_nonce(mut self, val: u32) -> Self {
        self.currency.genesis_nonce = val;
        self
    }

    /// The currency as configured so far, before genesis is built
    pub fn currency(&self) -> &Currency {
        &self.currency
    }
}

fn config_error(msg: &str) -> CurrencyError {
    CurrencyError::Config(msg.to_string())
}

fn validate(currency: &Currency) -> Result<()> {
    if currency.money_supply == 0 {
        return Err(config_error("money supply must be positive"));
    }
    if currency.reward_increase_interval == 0 {
        return Err(config_error("reward increase interval must be positive"));
    }
    if currency.number_of_decimal_places > MAX_DECIMAL_PLACES {
        return Err(config_error("too many decimal places"));
    }
    if currency.difficulty_target == 0 {
        return Err(config_error("difficulty target must be positive"));
    }
    if currency.difficulty_window < 2 {
        return Err(config_error("difficulty window must be at least 2"));
    }
    if currency.max_block_size_growth_speed_denominator == 0 {
        return Err(config_error("block size growth denominator must be positive"));
    }
    if !(1..=100).contains(&currency.upgrade_voting_threshold) {
        return Err(config_error("upgrade voting threshold must be in [1, 100]"));
    }
    if currency.upgrade_window == 0 {
        return Err(config_error("upgrade window must be positive"));
    }
    if currency.fusion_tx_min_in_out_count_ratio == 0 {
        return Err(config_error("fusion input/output ratio must be positive"));
    }
    Ok(())
}
