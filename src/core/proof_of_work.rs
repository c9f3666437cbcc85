use crate::core::{Block, Difficulty};
use crate::error::Result;
use crate::utils::{sha256_digest, Hash};
use num_bigint::BigUint;

/// Supplies the slow proof-of-work hash of a block
pub trait ProofOfWorkHasher {
    fn long_hash(&self, block: &Block) -> Result<Hash>;
}

/// SHA-256 over the block hashing blob
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256LongHash;

impl ProofOfWorkHasher for Sha256LongHash {
    fn long_hash(&self, block: &Block) -> Result<Hash> {
        Ok(sha256_digest(&block.hashing_blob()?))
    }
}

/// Accept `hash` at `difficulty` iff `hash * difficulty` fits in 256 bits,
/// reading the hash as a little-endian integer.
pub fn check_hash(hash: &Hash, difficulty: Difficulty) -> bool {
    let hash_int = BigUint::from_bytes_le(hash.as_bytes());
    let product = hash_int * BigUint::from(difficulty);
    product.bits() <= 256
}
