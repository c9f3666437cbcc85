use crate::core::decompose::{decompose_amount, pretty_amount_index};
use crate::core::{Amount, Currency, Transaction};
use crate::error::Result;

impl Currency {
    /// Whether the amounts describe a fee-free consolidation.
    ///
    /// A fusion transaction has enough inputs, none of them dust, and its
    /// outputs are exactly the canonical decomposition of the input total.
    pub fn is_fusion_transaction_amounts(
        &self,
        inputs_amounts: &[Amount],
        outputs_amounts: &[Amount],
        size: usize,
    ) -> bool {
        if size > self.fusion_tx_max_size {
            return false;
        }

        if inputs_amounts.len() < self.fusion_tx_min_input_count {
            return false;
        }

        if inputs_amounts.len()
            < outputs_amounts
                .len()
                .saturating_mul(self.fusion_tx_min_in_out_count_ratio)
        {
            return false;
        }

        let mut input_amount: Amount = 0;
        for amount in inputs_amounts {
            if *amount < self.default_dust_threshold {
                return false;
            }
            input_amount = match input_amount.checked_add(*amount) {
                Some(total) => total,
                None => return false,
            };
        }

        let mut expected_outputs = decompose_amount(input_amount, self.default_dust_threshold);
        expected_outputs.sort_unstable();

        let mut outputs = outputs_amounts.to_vec();
        outputs.sort_unstable();

        expected_outputs == outputs
    }

    pub fn is_fusion_transaction_with_size(&self, tx: &Transaction, size: usize) -> bool {
        self.is_fusion_transaction_amounts(&tx.input_amounts(), &tx.output_amounts(), size)
    }

    pub fn is_fusion_transaction(&self, tx: &Transaction) -> Result<bool> {
        Ok(self.is_fusion_transaction_with_size(tx, tx.binary_size()?))
    }

    /// Whether `amount` may be used as a fusion input below `threshold`.
    ///
    /// Returns the power of ten of the amount when it is a round amount
    /// within `[dust threshold, threshold)`.
    pub fn is_amount_applicable_in_fusion_transaction_input(
        &self,
        amount: Amount,
        threshold: Amount,
    ) -> Option<u8> {
        if amount >= threshold || amount < self.default_dust_threshold {
            return None;
        }

        pretty_amount_index(amount).map(|index| (index / 9) as u8)
    }
}
