use crate::error::{CurrencyError, Result};
use crate::utils::{sha256_digest, Hash, HASH_SIZE};

/// Merkle root over transaction hashes
///
/// Pairs are combined with double SHA-256. A level with an odd count pairs its
/// last hash with itself, and a single hash is paired with itself too, so the
/// root never equals a leaf.
pub fn calculate_merkle_root(transaction_hashes: &[Hash]) -> Result<Hash> {
    if transaction_hashes.is_empty() {
        return Err(CurrencyError::InvalidBlock(
            "Cannot calculate Merkle root from empty transaction list".to_string(),
        ));
    }

    if transaction_hashes.len() == 1 {
        return Ok(hash_pair(&transaction_hashes[0], &transaction_hashes[0]));
    }

    let mut current_level = transaction_hashes.to_vec();

    while current_level.len() > 1 {
        current_level = current_level
            .chunks(2)
            .map(|pair| hash_pair(&pair[0], pair.get(1).unwrap_or(&pair[0])))
            .collect();
    }

    Ok(current_level[0])
}

fn hash_pair(left: &Hash, right: &Hash) -> Hash {
    let mut combined = Vec::with_capacity(2 * HASH_SIZE);
    combined.extend_from_slice(left.as_bytes());
    combined.extend_from_slice(right.as_bytes());

    let first_hash = sha256_digest(&combined);
    sha256_digest(first_hash.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(byte: u8) -> Hash {
        Hash([byte; HASH_SIZE])
    }

    #[test]
    fn test_single_transaction_merkle_root() {
        let root = calculate_merkle_root(&[leaf(1)]).unwrap();
        assert_eq!(root, hash_pair(&leaf(1), &leaf(1)));
        assert_ne!(root, leaf(1));
    }

    #[test]
    fn test_odd_level_duplicates_last() {
        let three = calculate_merkle_root(&[leaf(1), leaf(2), leaf(3)]).unwrap();
        let expected = hash_pair(&hash_pair(&leaf(1), &leaf(2)), &hash_pair(&leaf(3), &leaf(3)));
        assert_eq!(three, expected);
    }

    #[test]
    fn test_order_matters() {
        let a = calculate_merkle_root(&[leaf(1), leaf(2)]).unwrap();
        let b = calculate_merkle_root(&[leaf(2), leaf(1)]).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_empty_transaction_list() {
        assert!(calculate_merkle_root(&[]).is_err());
    }
}
