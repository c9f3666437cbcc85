use crate::core::merkle::calculate_merkle_root;
use crate::core::Transaction;
use crate::error::Result;
use crate::utils::{deserialize, serialize, sha256_digest, write_varint, Hash};
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, bincode::Encode, bincode::Decode,
)]
pub struct Block {
    pub major_version: u8,
    pub minor_version: u8,
    pub timestamp: u64,
    pub previous_block_hash: Hash,
    pub nonce: u32,
    /// Coinbase transaction paying the block reward
    pub base_transaction: Transaction,
    /// Hashes of the ordinary transactions in the block body
    pub transaction_hashes: Vec<Hash>,
}

impl Block {
    pub fn deserialize(bytes: &[u8]) -> Result<Block> {
        deserialize::<Block>(bytes)
    }

    pub fn serialize(&self) -> Result<Vec<u8>> {
        serialize(self)
    }

    /// Merkle root over the coinbase hash followed by the body hashes
    pub fn merkle_root(&self) -> Result<Hash> {
        let mut hashes = Vec::with_capacity(1 + self.transaction_hashes.len());
        hashes.push(self.base_transaction.hash()?);
        hashes.extend_from_slice(&self.transaction_hashes);
        calculate_merkle_root(&hashes)
    }

    /// Header fields, merkle root and transaction count; this is what gets
    /// hashed for the block id and for proof of work.
    pub fn hashing_blob(&self) -> Result<Vec<u8>> {
        let header = (
            self.major_version,
            self.minor_version,
            self.timestamp,
            self.previous_block_hash,
            self.nonce,
        );
        let mut blob = serialize(&header)?;
        blob.extend_from_slice(self.merkle_root()?.as_bytes());
        write_varint(&mut blob, 1 + self.transaction_hashes.len() as u64);
        Ok(blob)
    }

    pub fn hash(&self) -> Result<Hash> {
        Ok(sha256_digest(&self.hashing_blob()?))
    }
}
