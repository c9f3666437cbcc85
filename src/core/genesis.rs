use crate::config::parameters::{BLOCK_MAJOR_VERSION_1, BLOCK_MINOR_VERSION_0};
use crate::core::{Block, Currency, Transaction};
use crate::error::Result;
use crate::utils::Hash;
use crate::wallet::AccountPublicAddress;

/// Build block 0 from the hard-coded coinbase blob.
///
/// The testnet genesis differs from mainnet only by a nonce one higher, which
/// gives it a distinct but still fixed hash.
pub fn build_genesis_block(
    coinbase_tx_hex: &str,
    timestamp: u64,
    nonce: u32,
    testnet: bool,
) -> Result<Block> {
    let base_transaction = Transaction::from_hex(coinbase_tx_hex)?;

    Ok(Block {
        major_version: BLOCK_MAJOR_VERSION_1,
        minor_version: BLOCK_MINOR_VERSION_0,
        timestamp,
        previous_block_hash: Hash::default(),
        nonce: if testnet { nonce.wrapping_add(1) } else { nonce },
        base_transaction,
        transaction_hashes: vec![],
    })
}

impl Currency {
    /// Fresh coinbase for height 0 paying the zero address.
    ///
    /// This is how a new genesis blob is minted; the result carries a random
    /// transaction key, so it is printed once and pinned as
    /// `GENESIS_COINBASE_TX_HEX` rather than used at startup.
    pub fn generate_genesis_transaction(&self) -> Result<Transaction> {
        self.construct_miner_tx(0, 0, 0, 0, 0, &AccountPublicAddress::default(), &[], 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parameters::{
        GENESIS_BLOCK_HASH, GENESIS_COINBASE_TX_HEX, GENESIS_NONCE, GENESIS_TIMESTAMP,
        TESTNET_GENESIS_BLOCK_HASH,
    };
    use crate::core::{CurrencyBuilder, TransactionInput};

    #[test]
    fn test_genesis_is_deterministic() {
        let a = build_genesis_block(GENESIS_COINBASE_TX_HEX, GENESIS_TIMESTAMP, GENESIS_NONCE, false)
            .unwrap();
        let b = build_genesis_block(GENESIS_COINBASE_TX_HEX, GENESIS_TIMESTAMP, GENESIS_NONCE, false)
            .unwrap();
        assert_eq!(a.hash().unwrap(), b.hash().unwrap());
        assert_eq!(a.nonce, GENESIS_NONCE);
        assert_eq!(a.timestamp, GENESIS_TIMESTAMP);
    }

    #[test]
    fn test_genesis_hash_is_pinned() {
        let mainnet = CurrencyBuilder::new().build().unwrap();
        assert_eq!(mainnet.genesis_block_hash().to_hex(), GENESIS_BLOCK_HASH);

        let testnet = CurrencyBuilder::new().testnet(true).build().unwrap();
        assert_eq!(testnet.genesis_block_hash().to_hex(), TESTNET_GENESIS_BLOCK_HASH);
    }

    #[test]
    fn test_genesis_coinbase_pays_first_reward() {
        let currency = CurrencyBuilder::new().build().unwrap();
        let coinbase = &currency.genesis_block().base_transaction;

        assert!(coinbase.is_coinbase());
        assert_eq!(coinbase.inputs[0], TransactionInput::Coinbase { height: 0 });
        assert_eq!(
            coinbase.output_amounts().iter().sum::<u64>(),
            currency.base_reward(0, 0)
        );
        assert_eq!(coinbase.unlock_time, u64::from(currency.mined_money_unlock_window()));
    }

    #[test]
    fn test_bad_blob_rejected() {
        assert!(build_genesis_block("01ff", GENESIS_TIMESTAMP, GENESIS_NONCE, false).is_err());
        assert!(build_genesis_block("zz", GENESIS_TIMESTAMP, GENESIS_NONCE, false).is_err());
    }

    #[test]
    fn test_generated_genesis_transaction() {
        let currency = CurrencyBuilder::new().build().unwrap();
        let tx = currency.generate_genesis_transaction().unwrap();
        assert!(tx.is_coinbase());
        assert_eq!(tx.outputs.len(), 1);
        assert_eq!(tx.outputs[0].amount, currency.base_reward(0, 0));
    }
}
