//! Transaction fee rules
//!
//! The fee of an ordinary transaction is its input value minus its output
//! value. Deposit withdrawals are the exception: their outputs carry the
//! accrued interest, so the outputs can exceed the face value of the inputs.
//! Such a transaction pays the flat minimum fee instead.

use crate::core::interest::calculate_interest;
use crate::core::{Amount, Currency, Transaction, TransactionInput};
use crate::error::{CurrencyError, Result};
use log::info;

impl Currency {
    /// Value an input contributes, interest included
    pub fn transaction_input_amount(&self, input: &TransactionInput) -> Amount {
        match input {
            TransactionInput::Coinbase { .. } => 0,
            TransactionInput::Spend { amount, .. } => *amount,
            TransactionInput::DepositWithdrawal { amount, term, .. } => {
                if *term == 0 {
                    *amount
                } else {
                    amount.wrapping_add(calculate_interest(*amount, *term))
                }
            }
        }
    }

    pub fn transaction_all_inputs_amount(&self, tx: &Transaction) -> Amount {
        tx.inputs
            .iter()
            .map(|input| self.transaction_input_amount(input))
            .fold(0, Amount::wrapping_add)
    }

    /// Face values of spend and deposit inputs, without interest
    pub fn inputs_amounts(&self, tx: &Transaction) -> Vec<Amount> {
        tx.input_amounts()
    }

    /// Face value of all inputs, without interest
    pub fn all_inputs_amount(&self, tx: &Transaction) -> Amount {
        tx.input_amounts().into_iter().fold(0, Amount::wrapping_add)
    }

    /// Input value (interest included) minus output value.
    ///
    /// When the outputs exceed the inputs, the transaction is charged
    /// `minimum_fee` only if both sides are non-empty and the outputs exceed
    /// `inputs + minimum_fee`; a smaller excess is rejected.
    pub fn transaction_fee(&self, tx: &Transaction) -> Result<Amount> {
        let amount_in = self.transaction_all_inputs_amount(tx);
        let amount_out = tx
            .outputs
            .iter()
            .map(|out| out.amount)
            .fold(0, Amount::wrapping_add);

        if amount_out <= amount_in {
            return Ok(amount_in - amount_out);
        }

        let pays_interest = !tx.inputs.is_empty()
            && !tx.outputs.is_empty()
            && amount_out > amount_in.wrapping_add(self.minimum_fee);
        if pays_interest {
            info!(
                "Outputs {amount_out} exceed inputs {amount_in}, charging the minimum fee {}",
                self.minimum_fee
            );
            return Ok(self.minimum_fee);
        }

        Err(CurrencyError::InvalidTransaction(format!(
            "Outputs {amount_out} exceed inputs {amount_in}"
        )))
    }

    /// [`Currency::transaction_fee`] with rejections reported as a zero fee.
    ///
    /// Kept for callers that only want a number to display or sort by; it
    /// cannot tell an invalid transaction from a free one.
    pub fn transaction_fee_or_zero(&self, tx: &Transaction) -> Amount {
        self.transaction_fee(tx).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CurrencyBuilder, TransactionOutput};
    use crate::utils::PublicKey;

    fn currency() -> Currency {
        CurrencyBuilder::new().build().unwrap()
    }

    fn tx(inputs: Vec<TransactionInput>, outputs: &[Amount]) -> Transaction {
        Transaction {
            version: 1,
            inputs,
            outputs: outputs
                .iter()
                .map(|amount| TransactionOutput {
                    amount: *amount,
                    key: PublicKey::default(),
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_input_amounts() {
        let currency = currency();
        assert_eq!(
            currency.transaction_input_amount(&TransactionInput::Coinbase { height: 4 }),
            0
        );
        assert_eq!(currency.transaction_input_amount(&TransactionInput::spend(77)), 77);
        assert_eq!(
            currency.transaction_input_amount(&TransactionInput::deposit_withdrawal(100_000_000, 0)),
            100_000_000
        );
        assert_eq!(
            currency.transaction_input_amount(&TransactionInput::deposit_withdrawal(
                100_000_000,
                262_800
            )),
            106_000_000
        );
    }

    #[test]
    fn test_plain_fee() {
        let currency = currency();
        let tx = tx(vec![TransactionInput::spend(1_000), TransactionInput::spend(500)], &[1_400]);
        assert_eq!(currency.transaction_fee(&tx).unwrap(), 100);
        assert_eq!(currency.all_inputs_amount(&tx), 1_500);
        assert_eq!(currency.inputs_amounts(&tx), vec![1_000, 500]);
    }

    #[test]
    fn test_withdrawal_interest_is_counted() {
        let currency = currency();
        let tx = tx(
            vec![TransactionInput::deposit_withdrawal(100_000_000, 262_800)],
            &[105_999_990],
        );
        assert_eq!(currency.transaction_fee(&tx).unwrap(), 10);
    }

    #[test]
    fn test_excess_outputs_fall_back_to_minimum_fee() {
        let currency = currency();
        let tx = tx(vec![TransactionInput::spend(1_000)], &[1_011]);
        assert_eq!(currency.transaction_fee(&tx).unwrap(), currency.minimum_fee());
    }

    #[test]
    fn test_small_excess_rejected() {
        let currency = currency();
        let tx = tx(vec![TransactionInput::spend(1_000)], &[1_010]);
        assert!(matches!(
            currency.transaction_fee(&tx),
            Err(CurrencyError::InvalidTransaction(_))
        ));
        assert_eq!(currency.transaction_fee_or_zero(&tx), 0);
    }

    #[test]
    fn test_outputs_without_inputs_rejected() {
        let currency = currency();
        let tx = tx(vec![], &[1_000]);
        assert!(currency.transaction_fee(&tx).is_err());
    }
}
