// Transaction model shared by the fee, fusion and coinbase rules.

use crate::error::Result;
use crate::utils::{deserialize, from_hex, serialize, sha256_digest, to_hex, Hash, KeyImage, PublicKey};
use serde::{Deserialize, Serialize};

pub type Amount = u64;
pub type Difficulty = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, bincode::Encode, bincode::Decode)]
pub enum TransactionInput {
    /// Newly minted coins; references the height of the block it belongs to
    Coinbase { height: u32 },
    /// Spend of a previous output, hidden among `key_offsets` decoys
    Spend {
        amount: Amount,
        key_offsets: Vec<u32>,
        key_image: KeyImage,
    },
    /// Withdrawal of a time-locked deposit; `term == 0` spends a plain
    /// multisignature output without interest
    DepositWithdrawal {
        amount: Amount,
        signature_count: u8,
        output_index: u32,
        term: u32,
    },
}

impl TransactionInput {
    pub fn spend(amount: Amount) -> TransactionInput {
        TransactionInput::Spend {
            amount,
            key_offsets: vec![],
            key_image: KeyImage::default(),
        }
    }

    pub fn deposit_withdrawal(amount: Amount, term: u32) -> TransactionInput {
        TransactionInput::DepositWithdrawal {
            amount,
            signature_count: 1,
            output_index: 0,
            term,
        }
    }

    /// Face value of the input, `None` for coinbase inputs
    pub fn amount(&self) -> Option<Amount> {
        match self {
            TransactionInput::Coinbase { .. } => None,
            TransactionInput::Spend { amount, .. } => Some(*amount),
            TransactionInput::DepositWithdrawal { amount, .. } => Some(*amount),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, bincode::Encode, bincode::Decode)]
pub struct TransactionOutput {
    pub amount: Amount,
    /// One-time destination key
    pub key: PublicKey,
}

#[derive(
    Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, bincode::Encode, bincode::Decode,
)]
pub struct Transaction {
    pub version: u8,
    /// Height (or timestamp) after which the outputs become spendable
    pub unlock_time: u64,
    pub inputs: Vec<TransactionInput>,
    pub outputs: Vec<TransactionOutput>,
    /// Transaction public key and optional nonce, see `core::extra`
    pub extra: Vec<u8>,
}

impl Transaction {
    pub fn from_blob(blob: &[u8]) -> Result<Transaction> {
        deserialize::<Transaction>(blob)
    }

    pub fn from_hex(hex: &str) -> Result<Transaction> {
        Self::from_blob(&from_hex(hex)?)
    }

    pub fn to_blob(&self) -> Result<Vec<u8>> {
        serialize(self)
    }

    pub fn to_hex(&self) -> Result<String> {
        Ok(to_hex(&self.to_blob()?))
    }

    pub fn binary_size(&self) -> Result<usize> {
        Ok(self.to_blob()?.len())
    }

    pub fn hash(&self) -> Result<Hash> {
        Ok(sha256_digest(&self.to_blob()?))
    }

    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1 && matches!(self.inputs[0], TransactionInput::Coinbase { .. })
    }

    pub fn output_amounts(&self) -> Vec<Amount> {
        self.outputs.iter().map(|out| out.amount).collect()
    }

    /// Face values of all non-coinbase inputs, in input order
    pub fn input_amounts(&self) -> Vec<Amount> {
        self.inputs.iter().filter_map(TransactionInput::amount).collect()
    }
}
