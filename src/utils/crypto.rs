use crate::error::{CurrencyError, Result};
use data_encoding::HEXLOWER;
use ring::digest::{Context, SHA256};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const HASH_SIZE: usize = 32;

/// 32-byte digest used for transaction, block and proof-of-work hashes
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    bincode::Encode,
    bincode::Decode,
)]
pub struct Hash(pub [u8; HASH_SIZE]);

impl Hash {
    pub fn from_hex(hex: &str) -> Result<Hash> {
        let bytes = HEXLOWER.decode(hex.trim().to_ascii_lowercase().as_bytes())?;
        if bytes.len() != HASH_SIZE {
            return Err(CurrencyError::Serialization(format!(
                "Hash must be {HASH_SIZE} bytes, got {}",
                bytes.len()
            )));
        }
        let mut out = [0u8; HASH_SIZE];
        out.copy_from_slice(&bytes);
        Ok(Hash(out))
    }

    pub fn to_hex(&self) -> String {
        HEXLOWER.encode(&self.0)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Hash {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self> {
        Hash::from_hex(s)
    }
}

pub fn sha256_digest(data: &[u8]) -> Hash {
    let mut context = Context::new(&SHA256);
    context.update(data);
    let digest = context.finish();
    let mut out = [0u8; HASH_SIZE];
    out.copy_from_slice(digest.as_ref());
    Hash(out)
}

pub fn base58_encode(data: &[u8]) -> String {
    bs58::encode(data).into_string()
}

pub fn base58_decode(data: &str) -> Result<Vec<u8>> {
    bs58::decode(data)
        .into_vec()
        .map_err(|e| CurrencyError::InvalidAddress(format!("Invalid base58 encoding: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_known_vector() {
        assert_eq!(
            sha256_digest(b"abc").to_hex(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_hash_hex_round_trip() {
        let hash = sha256_digest(b"cache");
        let parsed: Hash = hash.to_hex().parse().unwrap();
        assert_eq!(parsed, hash);
    }

    #[test]
    fn test_base58() {
        assert_eq!(base58_encode(b"hello"), "Cn8eVZg");
        assert_eq!(base58_decode("Cn8eVZg").unwrap(), b"hello");
        assert!(base58_decode("0OIl").is_err());
    }

    #[test]
    fn test_hash_rejects_wrong_length() {
        assert!(Hash::from_hex("abcd").is_err());
        assert!(Hash::from_hex("zz").is_err());
    }
}
