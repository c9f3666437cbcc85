use crate::config::parameters::DIFFICULTY_GUESS;
use crate::core::{Currency, Difficulty};
use crate::error::{CurrencyError, Result};
use log::debug;

/// Histories this short are still in the startup phase
const STARTUP_BLOCKS: usize = 10;

/// Linearly weighted moving average difficulty (LWMA-3)
pub struct DifficultyEstimator;

impl DifficultyEstimator {
    /// Next block difficulty from the last `window + 1` blocks.
    ///
    /// `timestamps` and `cumulative_difficulties` are oldest first and must
    /// have the same length. Longer histories are cut to their most recent
    /// `window + 1` entries. All products wrap and every division truncates in
    /// the order written; changing either changes the result.
    pub fn next_difficulty_lwma3(
        timestamps: &[u64],
        cumulative_difficulties: &[Difficulty],
        target_seconds: u64,
        window: usize,
    ) -> Result<Difficulty> {
        if timestamps.len() != cumulative_difficulties.len() {
            return Err(CurrencyError::InvalidBlock(format!(
                "Difficulty history mismatch: {} timestamps, {} cumulative difficulties",
                timestamps.len(),
                cumulative_difficulties.len()
            )));
        }

        let skip = timestamps.len().saturating_sub(window.saturating_add(1));
        let timestamps = &timestamps[skip..];
        let cumulative_difficulties = &cumulative_difficulties[skip..];

        let length = timestamps.len();
        if length <= 1 {
            return Ok(1);
        }
        if length <= STARTUP_BLOCKS {
            return Ok(DIFFICULTY_GUESS);
        }

        let t = target_seconds;
        let n = window.min(length - 1);

        let mut weighted_solve_times: u64 = 0;
        let mut sum_last_3_solve_times: u64 = 0;
        let mut previous_timestamp = timestamps[0];
        for (i, timestamp) in timestamps.iter().enumerate().take(n + 1).skip(1) {
            let this_timestamp = if *timestamp > previous_timestamp {
                *timestamp
            } else {
                previous_timestamp.wrapping_add(1)
            };
            let solve_time = t
                .wrapping_mul(6)
                .min(this_timestamp.wrapping_sub(previous_timestamp));
            previous_timestamp = this_timestamp;

            weighted_solve_times =
                weighted_solve_times.wrapping_add(solve_time.wrapping_mul(i as u64));
            if i + 3 > n {
                sum_last_3_solve_times = sum_last_3_solve_times.wrapping_add(solve_time);
            }
        }

        let divisor = 200u64.wrapping_mul(weighted_solve_times);
        if divisor == 0 {
            return Err(CurrencyError::InvalidBlock(
                "Difficulty history has no measurable solve time".to_string(),
            ));
        }

        let span = cumulative_difficulties[n].wrapping_sub(cumulative_difficulties[0]);
        let mut next_difficulty = span
            .wrapping_mul(t)
            .wrapping_mul(n as u64 + 1)
            .wrapping_mul(99)
            / divisor;

        let prev_difficulty = cumulative_difficulties[n].wrapping_sub(cumulative_difficulties[n - 1]);
        next_difficulty = (prev_difficulty.wrapping_mul(67) / 100)
            .max(next_difficulty.min(prev_difficulty.wrapping_mul(150) / 100));

        // three fast blocks in a row look like a hashrate jump
        if sum_last_3_solve_times < t.wrapping_mul(8) / 10 {
            next_difficulty = next_difficulty.max(prev_difficulty.wrapping_mul(108) / 100);
        }

        debug!("LWMA-3 over {n} blocks: previous {prev_difficulty}, next {next_difficulty}");
        Ok(next_difficulty.max(1))
    }
}

impl Currency {
    /// Next difficulty using the configured target and window
    pub fn next_difficulty(
        &self,
        timestamps: &[u64],
        cumulative_difficulties: &[Difficulty],
    ) -> Result<Difficulty> {
        DifficultyEstimator::next_difficulty_lwma3(
            timestamps,
            cumulative_difficulties,
            self.difficulty_target,
            self.difficulty_window,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: u64 = 120;
    const N: usize = 60;

    fn history(spacing: u64, count: usize) -> (Vec<u64>, Vec<Difficulty>) {
        let timestamps = (0..count as u64).map(|i| 1_000_000 + i * spacing).collect();
        let cumulative = (0..count as u64).map(|i| i * 1_000).collect();
        (timestamps, cumulative)
    }

    fn next(timestamps: &[u64], cumulative: &[Difficulty]) -> Difficulty {
        DifficultyEstimator::next_difficulty_lwma3(timestamps, cumulative, T, N).unwrap()
    }

    #[test]
    fn test_bootstrap_values() {
        assert_eq!(next(&[], &[]), 1);
        assert_eq!(next(&[5], &[5]), 1);
        let (ts, cd) = history(120, 10);
        assert_eq!(next(&ts, &cd), 100);
    }

    #[test]
    fn test_on_target() {
        let (ts, cd) = history(120, 61);
        assert_eq!(next(&ts, &cd), 990);

        let (ts, cd) = history(120, 11);
        assert_eq!(next(&ts, &cd), 990);
    }

    #[test]
    fn test_clamped_to_bounds() {
        let (ts, cd) = history(10, 61);
        assert_eq!(next(&ts, &cd), 1_500);

        let (ts, cd) = history(1_000, 61);
        assert_eq!(next(&ts, &cd), 670);
    }

    #[test]
    fn test_identical_timestamps() {
        let (_, cd) = history(0, 61);
        let ts = vec![5_000; 61];
        assert_eq!(next(&ts, &cd), 1_500);
    }

    #[test]
    fn test_jump_rule() {
        let (mut ts, cd) = history(120, 61);
        let base = ts[57];
        ts[58] = base + 20;
        ts[59] = base + 40;
        ts[60] = base + 60;
        assert_eq!(next(&ts, &cd), 1_080);
    }

    #[test]
    fn test_out_of_order_timestamp() {
        let (mut ts, cd) = history(120, 61);
        ts[30] = 0;
        assert_eq!(next(&ts, &cd), 989);
    }

    #[test]
    fn test_long_history_uses_most_recent_window() {
        let (ts, cd) = history(120, 61);
        let mut long_ts = vec![1, 2, 3];
        long_ts.extend_from_slice(&ts);
        let mut long_cd = vec![0, 0, 0];
        long_cd.extend_from_slice(&cd);
        assert_eq!(next(&long_ts, &long_cd), 990);
    }

    #[test]
    fn test_length_mismatch() {
        let (ts, cd) = history(120, 20);
        assert!(DifficultyEstimator::next_difficulty_lwma3(&ts, &cd[1..], T, N).is_err());
    }
}
