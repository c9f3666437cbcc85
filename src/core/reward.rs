// Emission schedule and block-size penalty.
use crate::config::parameters::REWARD_INCREASING_FACTOR;
use crate::core::{Amount, Currency};
use crate::error::{CurrencyError, Result};
use log::trace;
use serde::Serialize;

/// Outcome of a successful reward computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BlockReward {
    /// Coinbase total: penalized subsidy plus penalized fees
    pub reward: Amount,
    /// Net change of the circulating supply: penalized subsidy minus the
    /// part of the fees burnt by the penalty
    pub emission_change: i64,
}

/// Scale `amount` down for a block larger than the median.
///
/// `amount * size * (2 * median - size) / median^2`, computed in 128 bits.
/// A block of twice the median or more earns nothing.
pub fn penalized_amount(amount: Amount, median_size: usize, block_size: usize) -> Amount {
    if amount == 0 {
        return 0;
    }
    if block_size <= median_size {
        return amount;
    }

    let median = median_size as u128;
    let size = block_size as u128;
    if size >= 2 * median {
        return 0;
    }
    let multiplicand = size * (2 * median - size);
    let penalized = u128::from(amount) * multiplicand / median / median;

    penalized as Amount
}

impl Currency {
    /// Subsidy for the block at `height` before any size penalty
    pub fn base_reward(&self, already_generated_coins: Amount, height: u32) -> Amount {
        if height == 1 {
            return self.foundation_trust;
        }

        let interval = (height / self.reward_increase_interval) as usize;
        let index = interval.min(REWARD_INCREASING_FACTOR.len() - 1);
        let base_reward = self
            .base_block_reward
            .saturating_add(REWARD_INCREASING_FACTOR[index]);

        base_reward
            .min(self.max_block_reward)
            .min(self.money_supply.saturating_sub(already_generated_coins))
    }

    /// Reward and emission change for a block of `block_size` bytes.
    ///
    /// Rejects blocks larger than twice the effective median, where the
    /// effective median never drops below the full reward zone.
    pub fn block_reward(
        &self,
        median_size: usize,
        block_size: usize,
        already_generated_coins: Amount,
        fee: Amount,
        height: u32,
    ) -> Result<BlockReward> {
        let base_reward = self.base_reward(already_generated_coins, height);

        let median_size = median_size.max(self.block_granted_full_reward_zone);
        let limit = median_size.saturating_mul(2);
        if block_size > limit {
            trace!("Block cumulative size is too big: {block_size}, expected less than {limit}");
            return Err(CurrencyError::BlockTooBig {
                size: block_size,
                limit,
            });
        }

        let penalized_base_reward = penalized_amount(base_reward, median_size, block_size);
        let penalized_fee = penalized_amount(fee, median_size, block_size);

        let emission_change =
            penalized_base_reward.wrapping_sub(fee - penalized_fee) as i64;
        let reward = penalized_base_reward.wrapping_add(penalized_fee);

        Ok(BlockReward {
            reward,
            emission_change,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parameters::{COIN, FOUNDATION_TRUST, MONEY_SUPPLY};
    use crate::core::CurrencyBuilder;

    fn currency() -> Currency {
        CurrencyBuilder::new().build().unwrap()
    }

    #[test]
    fn test_foundation_trust_at_height_one() {
        let currency = currency();
        assert_eq!(currency.base_reward(0, 1), FOUNDATION_TRUST);
        assert_eq!(currency.base_reward(MONEY_SUPPLY, 1), FOUNDATION_TRUST);
    }

    #[test]
    fn test_reward_curve_steps() {
        let currency = currency();
        assert_eq!(currency.base_reward(0, 0), COIN);
        assert_eq!(currency.base_reward(0, 263_999), COIN);
        assert_eq!(currency.base_reward(0, 264_000), COIN + 25_000);
        assert_eq!(currency.base_reward(0, 8 * 264_000), COIN + 200_000);
    }

    #[test]
    fn test_curve_index_saturates() {
        let currency = currency();
        assert_eq!(currency.base_reward(0, u32::MAX), COIN + 200_000);
    }

    #[test]
    fn test_never_exceeds_remaining_supply() {
        let currency = currency();
        assert_eq!(currency.base_reward(MONEY_SUPPLY - 10, 5), 10);
        assert_eq!(currency.base_reward(MONEY_SUPPLY, 5), 0);
    }

    #[test]
    fn test_max_block_reward_caps_curve() {
        let currency = CurrencyBuilder::new()
            .max_block_reward(COIN + 10_000)
            .build()
            .unwrap();
        assert_eq!(currency.base_reward(0, 264_000), COIN + 10_000);
    }

    #[test]
    fn test_penalized_amount() {
        assert_eq!(penalized_amount(100_000, 100_000, 100_000), 100_000);
        assert_eq!(penalized_amount(100_000, 100_000, 150_000), 75_000);
        assert_eq!(penalized_amount(100_000, 100_000, 200_000), 0);
        assert_eq!(penalized_amount(0, 100_000, 150_000), 0);
        assert_eq!(penalized_amount(u64::MAX, 100_000, 100_001), u64::MAX - 1_844_674_408);
    }

    #[test]
    fn test_penalized_amount_beyond_limit() {
        assert_eq!(penalized_amount(1, 0, 1), 0);
        assert_eq!(penalized_amount(100_000, 100_000, 250_000), 0);
        assert_eq!(penalized_amount(100_000, 0, 0), 100_000);
    }

    #[test]
    fn test_block_reward_with_penalty() {
        let currency = currency();
        let reward = currency.block_reward(0, 150_000, 0, 1_000, 10).unwrap();
        assert_eq!(reward.reward, 75_750);
        assert_eq!(reward.emission_change, 74_750);
    }

    #[test]
    fn test_block_reward_without_penalty() {
        let currency = currency();
        let reward = currency.block_reward(50_000, 90_000, 0, 500, 10).unwrap();
        assert_eq!(reward.reward, COIN + 500);
        assert_eq!(reward.emission_change, COIN as i64);
    }

    #[test]
    fn test_block_too_big() {
        let currency = currency();
        assert!(currency.block_reward(0, 200_000, 0, 0, 10).is_ok());
        assert_eq!(
            currency.block_reward(0, 200_001, 0, 0, 10),
            Err(CurrencyError::BlockTooBig {
                size: 200_001,
                limit: 200_000
            })
        );
        // a larger median lifts the limit
        assert!(currency.block_reward(150_000, 250_000, 0, 0, 10).is_ok());
    }
}
