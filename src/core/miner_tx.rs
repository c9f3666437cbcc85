use crate::config::parameters::TRANSACTION_VERSION_1;
use crate::core::decompose::decompose_amount;
use crate::core::extra::{add_extra_nonce_to_transaction_extra, add_transaction_public_key_to_extra};
use crate::core::{Amount, Currency, Transaction, TransactionInput, TransactionOutput};
use crate::error::{CurrencyError, Result};
use crate::utils::{derive_public_key, generate_key_derivation, generate_key_pair, KeyPair};
use crate::wallet::AccountPublicAddress;
use log::{error, info};

impl Currency {
    /// Assemble the coinbase transaction for a block at `height`.
    ///
    /// The reward is split into its canonical decomposition, then merged from
    /// the smallest chunk upwards until at most `max_outs` outputs remain.
    /// Each output pays a one-time key derived for `miner_address`.
    #[allow(clippy::too_many_arguments)]
    pub fn construct_miner_tx(
        &self,
        height: u32,
        median_size: usize,
        already_generated_coins: Amount,
        current_block_size: usize,
        fee: Amount,
        miner_address: &AccountPublicAddress,
        extra_nonce: &[u8],
        max_outs: usize,
    ) -> Result<Transaction> {
        let tx_key = generate_key_pair();
        self.construct_miner_tx_with_key(
            height,
            median_size,
            already_generated_coins,
            current_block_size,
            fee,
            miner_address,
            extra_nonce,
            max_outs,
            &tx_key,
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn construct_miner_tx_with_key(
        &self,
        height: u32,
        median_size: usize,
        already_generated_coins: Amount,
        current_block_size: usize,
        fee: Amount,
        miner_address: &AccountPublicAddress,
        extra_nonce: &[u8],
        max_outs: usize,
        tx_key: &KeyPair,
    ) -> Result<Transaction> {
        let mut extra = Vec::new();
        add_transaction_public_key_to_extra(&mut extra, &tx_key.public_key);
        if !extra_nonce.is_empty() {
            add_extra_nonce_to_transaction_extra(&mut extra, extra_nonce)?;
        }

        let block_reward = match self.block_reward(
            median_size,
            current_block_size,
            already_generated_coins,
            fee,
            height,
        ) {
            Ok(reward) => reward.reward,
            Err(err) => {
                info!("Block is too big");
                return Err(err);
            }
        };

        let mut out_amounts = decompose_amount(block_reward, self.default_dust_threshold);

        if max_outs == 0 {
            error!("max_out must be non-zero");
            return Err(CurrencyError::MinerTx("Output limit must be non-zero".to_string()));
        }
        while out_amounts.len() > max_outs {
            if let Some(last) = out_amounts.pop() {
                let previous = out_amounts.len() - 1;
                out_amounts[previous] += last;
            }
        }

        let derivation =
            generate_key_derivation(&miner_address.view_public_key, &tx_key.secret_key).map_err(
                |err| {
                    error!(
                        "While creating outputs: failed to generate_key_derivation({}, <tx secret>)",
                        miner_address.view_public_key
                    );
                    CurrencyError::MinerTx(err.to_string())
                },
            )?;

        let mut outputs = Vec::with_capacity(out_amounts.len());
        let mut summary_amounts: Amount = 0;
        for (index, amount) in out_amounts.into_iter().enumerate() {
            let key = derive_public_key(&derivation, index, &miner_address.spend_public_key)
                .map_err(|err| {
                    error!(
                        "While creating outputs: failed to derive_public_key(<derivation>, {index}, {})",
                        miner_address.spend_public_key
                    );
                    CurrencyError::MinerTx(err.to_string())
                })?;

            summary_amounts = summary_amounts.wrapping_add(amount);
            outputs.push(TransactionOutput { amount, key });
        }

        if summary_amounts != block_reward {
            error!(
                "Failed to construct miner tx, summary_amounts = {summary_amounts} not equal block_reward = {block_reward}"
            );
            return Err(CurrencyError::MinerTx(format!(
                "Outputs sum to {summary_amounts}, expected {block_reward}"
            )));
        }

        Ok(Transaction {
            version: TRANSACTION_VERSION_1,
            unlock_time: u64::from(height) + u64::from(self.mined_money_unlock_window),
            inputs: vec![TransactionInput::Coinbase { height }],
            outputs,
            extra,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::extra::{get_extra_nonce_from_extra, get_transaction_public_key_from_extra};
    use crate::core::CurrencyBuilder;
    use crate::utils::{derive_secret_key, secret_key_to_public_key};

    fn currency() -> Currency {
        CurrencyBuilder::new().build().unwrap()
    }

    fn miner() -> (AccountPublicAddress, KeyPair, KeyPair) {
        let spend = generate_key_pair();
        let view = generate_key_pair();
        let address = AccountPublicAddress {
            spend_public_key: spend.public_key,
            view_public_key: view.public_key,
        };
        (address, spend, view)
    }

    #[test]
    fn test_single_output_pays_full_reward() {
        let currency = currency();
        let (address, _, _) = miner();
        let tx = currency
            .construct_miner_tx(100, 0, 0, 1_000, 1_234, &address, &[], 1)
            .unwrap();

        assert!(tx.is_coinbase());
        assert_eq!(tx.inputs[0], TransactionInput::Coinbase { height: 100 });
        assert_eq!(tx.unlock_time, 110);
        assert_eq!(tx.outputs.len(), 1);
        assert_eq!(tx.outputs[0].amount, 100_000 + 1_234);
    }

    #[test]
    fn test_outputs_capped_and_summed() {
        let currency = currency();
        let (address, _, _) = miner();
        let fee = 1_234_567;
        let reward = currency.block_reward(0, 1_000, 0, fee, 100).unwrap().reward;

        for max_outs in [1, 2, 3, 10, 100] {
            let tx = currency
                .construct_miner_tx(100, 0, 0, 1_000, fee, &address, &[], max_outs)
                .unwrap();
            assert!(tx.outputs.len() <= max_outs);
            assert_eq!(tx.output_amounts().iter().sum::<u64>(), reward);
        }

        let tx = currency
            .construct_miner_tx(100, 0, 0, 1_000, fee, &address, &[], 3)
            .unwrap();
        // 1_334_567: the tail merges into the third chunk
        assert_eq!(tx.output_amounts(), vec![1_000_000, 300_000, 34_567]);
    }

    #[test]
    fn test_zero_output_limit_rejected() {
        let currency = currency();
        let (address, _, _) = miner();
        let result = currency.construct_miner_tx(100, 0, 0, 1_000, 1_234, &address, &[], 0);
        assert!(matches!(result, Err(CurrencyError::MinerTx(_))));
    }

    #[test]
    fn test_extra_carries_key_and_nonce() {
        let currency = currency();
        let (address, _, _) = miner();
        let tx_key = generate_key_pair();
        let tx = currency
            .construct_miner_tx_with_key(5, 0, 0, 0, 0, &address, b"nonce", 1, &tx_key)
            .unwrap();

        assert_eq!(get_transaction_public_key_from_extra(&tx.extra), Some(tx_key.public_key));
        assert_eq!(get_extra_nonce_from_extra(&tx.extra), Some(b"nonce".to_vec()));
    }

    #[test]
    fn test_recipient_owns_outputs() {
        let currency = currency();
        let (address, spend, view) = miner();
        let tx = currency
            .construct_miner_tx(100, 0, 0, 1_000, 1_234_567, &address, &[], 4)
            .unwrap();

        let tx_public_key = get_transaction_public_key_from_extra(&tx.extra).unwrap();
        let derivation = generate_key_derivation(&tx_public_key, &view.secret_key).unwrap();
        for (index, output) in tx.outputs.iter().enumerate() {
            let secret = derive_secret_key(&derivation, index, &spend.secret_key).unwrap();
            assert_eq!(secret_key_to_public_key(&secret).unwrap(), output.key);
        }
    }

    #[test]
    fn test_oversized_block_rejected() {
        let currency = currency();
        let (address, _, _) = miner();
        let result = currency.construct_miner_tx(100, 0, 0, 200_001, 0, &address, &[], 1);
        assert!(matches!(result, Err(CurrencyError::BlockTooBig { .. })));
    }

    #[test]
    fn test_nonce_too_long_rejected() {
        let currency = currency();
        let (address, _, _) = miner();
        let nonce = vec![0u8; 256];
        assert!(currency
            .construct_miner_tx(100, 0, 0, 0, 0, &address, &nonce, 1)
            .is_err());
    }
}
