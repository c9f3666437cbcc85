//! Deposit interest
//!
//! Interest feeds straight into the fee of a withdrawal and from there into
//! the coinbase sum, so every node has to agree on it to the atomic unit.
//! The rate arithmetic is therefore pinned to single precision with the
//! exact sequence of roundings below; do not "simplify" it to `f64` or to
//! fixed point.

use crate::config::parameters::{DEPOSIT_TERM_MONTH, INTEREST_AMOUNT_UNIT};
use crate::core::{Amount, Currency, Transaction, TransactionInput};

/// Annual base rate for an amount, bracketed by whole coins
fn base_interest_rate(amount: Amount) -> f32 {
    match amount / INTEREST_AMOUNT_UNIT {
        0..=4_999 => 0.049,
        5_000..=9_999 => 0.054,
        10_000..=14_999 => 0.059,
        15_000..=19_999 => 0.064,
        _ => 0.069,
    }
}

/// Interest earned by `amount` locked for `term` blocks
pub fn calculate_interest(amount: Amount, term: u32) -> Amount {
    let base_interest = base_interest_rate(amount);
    let months = ((term / DEPOSIT_TERM_MONTH) as f32).min(12.0);

    // the bonus is added in double precision, then narrowed once
    let ear = (f64::from(base_interest) + f64::from(months - 1.0) * 0.001) as f32;
    let eir = (ear / 12.0) * months;

    (amount as f32 * eir) as Amount
}

impl Currency {
    pub fn calculate_interest(&self, amount: Amount, term: u32) -> Amount {
        calculate_interest(amount, term)
    }

    /// Interest over all matured deposit withdrawals in `tx`
    pub fn calculate_total_transaction_interest(&self, tx: &Transaction) -> Amount {
        tx.inputs
            .iter()
            .filter_map(|input| match input {
                TransactionInput::DepositWithdrawal { amount, term, .. } if *term != 0 => {
                    Some(calculate_interest(*amount, *term))
                }
                _ => None,
            })
            .fold(0, Amount::wrapping_add)
    }
}
