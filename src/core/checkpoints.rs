use crate::error::{CurrencyError, Result};
use crate::utils::Hash;
use log::{info, warn};
use std::collections::BTreeMap;

/// Known `(height, block hash)` pairs of a network
#[derive(Debug, Clone, Default)]
pub struct Checkpoints {
    points: BTreeMap<u32, Hash>,
}

impl Checkpoints {
    pub fn new() -> Checkpoints {
        Checkpoints::default()
    }

    /// Load a static table of `(height, hex hash)` entries
    pub fn from_entries(entries: &[(u32, &str)]) -> Result<Checkpoints> {
        let mut checkpoints = Checkpoints::new();
        for (height, hash) in entries {
            checkpoints.add_checkpoint(*height, Hash::from_hex(hash)?)?;
        }
        Ok(checkpoints)
    }

    pub fn add_checkpoint(&mut self, height: u32, hash: Hash) -> Result<()> {
        if self.points.contains_key(&height) {
            return Err(CurrencyError::InvalidBlock(format!(
                "Checkpoint at height {height} already exists"
            )));
        }
        self.points.insert(height, hash);
        Ok(())
    }

    pub fn is_in_checkpoint_zone(&self, height: u32) -> bool {
        self.points
            .last_key_value()
            .is_some_and(|(last, _)| height <= *last)
    }

    /// `true` when there is no checkpoint at `height` or `hash` matches it
    pub fn check_block(&self, height: u32, hash: &Hash) -> bool {
        match self.points.get(&height) {
            None => true,
            Some(expected) if expected == hash => {
                info!("Checkpoint passed for height {height} {hash}");
                true
            }
            Some(expected) => {
                warn!("Checkpoint failed for height {height}. Expected hash: {expected}, fetched hash: {hash}");
                false
            }
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parameters::GENESIS_BLOCK_HASH;
    use crate::core::CurrencyBuilder;

    #[test]
    fn test_genesis_checkpoint() {
        let currency = CurrencyBuilder::new().build().unwrap();
        let checkpoints = Checkpoints::from_entries(&[(0, GENESIS_BLOCK_HASH)]).unwrap();

        assert!(checkpoints.check_block(0, &currency.genesis_block_hash()));
        assert!(!checkpoints.check_block(0, &Hash([1; 32])));
        assert!(checkpoints.check_block(1, &Hash([1; 32])));
    }

    #[test]
    fn test_testnet_genesis_fails_mainnet_checkpoint() {
        let main = CurrencyBuilder::new().build().unwrap();
        let test = CurrencyBuilder::new().testnet(true).build().unwrap();
        let mut checkpoints = Checkpoints::new();
        checkpoints.add_checkpoint(0, main.genesis_block_hash()).unwrap();
        assert!(!checkpoints.check_block(0, &test.genesis_block_hash()));
    }

    #[test]
    fn test_zone_and_duplicates() {
        let mut checkpoints = Checkpoints::new();
        assert!(!checkpoints.is_in_checkpoint_zone(0));
        checkpoints.add_checkpoint(100, Hash([2; 32])).unwrap();
        assert!(checkpoints.add_checkpoint(100, Hash([3; 32])).is_err());
        assert!(checkpoints.is_in_checkpoint_zone(100));
        assert!(!checkpoints.is_in_checkpoint_zone(101));
        assert_eq!(checkpoints.len(), 1);
    }

    #[test]
    fn test_bad_hex_rejected() {
        assert!(Checkpoints::from_entries(&[(0, "not-a-hash")]).is_err());
    }
}
