use crate::core::Amount;
use once_cell::sync::Lazy;

/// Round amounts: `d * 10^k` for digits 1..=9 and every power of ten that
/// fits in a `u64`, ascending. Index `i` belongs to power `i / 9`.
pub static PRETTY_AMOUNTS: Lazy<Vec<Amount>> = Lazy::new(|| {
    let mut amounts = Vec::with_capacity(9 * 19 + 1);
    let mut order: Amount = 1;
    for power in 0..19 {
        for digit in 1..=9 {
            amounts.push(digit * order);
        }
        if power < 18 {
            order *= 10;
        }
    }
    amounts.push(10_000_000_000_000_000_000);
    amounts
});

/// Position of `amount` in [`PRETTY_AMOUNTS`], if it is a round amount
pub fn pretty_amount_index(amount: Amount) -> Option<usize> {
    PRETTY_AMOUNTS.binary_search(&amount).ok()
}

/// Split `amount` into round chunks plus at most one dust chunk.
///
/// Digits are consumed from the least significant end. Low digits keep
/// collecting into the dust chunk while the running total stays within
/// `dust_threshold`; every digit after that becomes its own chunk. The
/// result lists the chunks from most to least significant and the dust chunk,
/// if any, last. A zero amount yields nothing.
pub fn decompose_amount(amount: Amount, dust_threshold: Amount) -> Vec<Amount> {
    let mut chunks = Vec::new();
    let mut dust: Amount = 0;
    let mut dust_closed = false;

    let mut rest = amount;
    let mut order: Amount = 1;
    while rest != 0 {
        let chunk = (rest % 10) * order;
        rest /= 10;
        order = order.wrapping_mul(10);

        if !dust_closed && u128::from(dust) + u128::from(chunk) <= u128::from(dust_threshold) {
            dust += chunk;
        } else {
            dust_closed = true;
            if chunk != 0 {
                chunks.push(chunk);
            }
        }
    }

    chunks.reverse();
    if dust != 0 {
        chunks.push(dust);
    }
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pretty_amounts_table() {
        assert_eq!(PRETTY_AMOUNTS.len(), 172);
        assert_eq!(PRETTY_AMOUNTS[0], 1);
        assert_eq!(PRETTY_AMOUNTS[9], 10);
        assert_eq!(*PRETTY_AMOUNTS.last().unwrap(), 10_000_000_000_000_000_000);
        assert!(PRETTY_AMOUNTS.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(pretty_amount_index(300), Some(20));
        assert_eq!(pretty_amount_index(310), None);
    }

    #[test]
    fn test_decompose_without_dust() {
        assert_eq!(decompose_amount(1_234_567, 0), vec![1_000_000, 200_000, 30_000, 4_000, 500, 60, 7]);
        assert_eq!(decompose_amount(100_000, 10), vec![100_000]);
        assert!(decompose_amount(0, 10).is_empty());
    }

    #[test]
    fn test_decompose_with_dust() {
        assert_eq!(decompose_amount(1_234_567, 100), vec![1_000_000, 200_000, 30_000, 4_000, 500, 67]);
        assert_eq!(decompose_amount(9, 10), vec![9]);
        assert_eq!(decompose_amount(1_234_567, 1_000), vec![1_000_000, 200_000, 30_000, 4_000, 567]);
    }

    #[test]
    fn test_zero_digits_are_skipped() {
        assert_eq!(decompose_amount(105_065, 10), vec![100_000, 5_000, 60, 5]);
    }

    #[test]
    fn test_chunks_sum_to_amount() {
        for amount in [1, 9, 10, 11, 999, 1_000_001, 123_456_789_012, u64::MAX] {
            for dust in [0, 10, 1_000, u64::MAX] {
                let chunks = decompose_amount(amount, dust);
                let total: u128 = chunks.iter().map(|c| u128::from(*c)).sum();
                assert_eq!(total, u128::from(amount), "amount {amount} dust {dust}");
            }
        }
    }

    #[test]
    fn test_redecomposition_is_stable() {
        let mut first = decompose_amount(987_654_321, 1_000);
        let mut second = decompose_amount(first.iter().sum(), 1_000);
        first.sort_unstable();
        second.sort_unstable();
        assert_eq!(first, second);
    }
}
