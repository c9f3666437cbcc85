//! One-time (stealth) output keys.
//!
//! A sender with a fresh transaction key pair `(r, R)` pays a recipient with
//! view key `V = vG` and spend key `B = bG`:
//!
//! 1. Derivation: `D = 8·r·V` (the recipient computes the same value as `8·v·R`)
//! 2. Per-output scalar: `Hs = H(D || varint(index))`
//! 3. One-time destination key: `P = Hs·G + B`
//!
//! Only the holder of `v` can recognise `P`, and only the holder of `b` can
//! spend it with the secret `x = Hs + b`.

use crate::error::{CurrencyError, Result};
use crate::utils::serialization::write_varint;
use blake2::{Blake2b512, Digest};
use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint};
use curve25519_dalek::scalar::Scalar;
use data_encoding::HEXLOWER;
use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

pub const KEY_SIZE: usize = 32;

const DERIVATION_DOMAIN_TAG: &[u8] = b"cache-key-derivation-v1";

/// Compressed Ed25519 point
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    bincode::Encode,
    bincode::Decode,
)]
pub struct PublicKey(pub [u8; KEY_SIZE]);

impl PublicKey {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    fn decompress(&self) -> Result<EdwardsPoint> {
        CompressedEdwardsY(self.0)
            .decompress()
            .ok_or_else(|| CurrencyError::Crypto("Public key is not a valid point".to_string()))
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&HEXLOWER.encode(&self.0))
    }
}

/// Canonical scalar, wiped on drop
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey([u8; KEY_SIZE]);

impl SecretKey {
    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Result<SecretKey> {
        let key = SecretKey(bytes);
        key.to_scalar()?;
        Ok(key)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    fn to_scalar(&self) -> Result<Scalar> {
        Option::<Scalar>::from(Scalar::from_canonical_bytes(self.0))
            .ok_or_else(|| CurrencyError::Crypto("Secret key is not a canonical scalar".to_string()))
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(<redacted>)")
    }
}

/// Spent-output marker carried by spend inputs
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    bincode::Encode,
    bincode::Decode,
)]
pub struct KeyImage(pub [u8; KEY_SIZE]);

/// Shared secret `8·r·V` between a transaction key and a view key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyDerivation([u8; KEY_SIZE]);

impl KeyDerivation {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

#[derive(Debug, Clone)]
pub struct KeyPair {
    pub public_key: PublicKey,
    pub secret_key: SecretKey,
}

pub fn generate_key_pair() -> KeyPair {
    let secret = Scalar::random(&mut rand::thread_rng());
    KeyPair {
        public_key: PublicKey(EdwardsPoint::mul_base(&secret).compress().to_bytes()),
        secret_key: SecretKey(secret.to_bytes()),
    }
}

pub fn secret_key_to_public_key(secret_key: &SecretKey) -> Result<PublicKey> {
    let scalar = secret_key.to_scalar()?;
    Ok(PublicKey(EdwardsPoint::mul_base(&scalar).compress().to_bytes()))
}

pub fn generate_key_derivation(public_key: &PublicKey, secret_key: &SecretKey) -> Result<KeyDerivation> {
    let point = public_key.decompress()?;
    let scalar = secret_key.to_scalar()?;
    let shared = (scalar * point).mul_by_cofactor();
    Ok(KeyDerivation(shared.compress().to_bytes()))
}

fn derivation_to_scalar(derivation: &KeyDerivation, output_index: usize) -> Scalar {
    let mut index = Vec::with_capacity(10);
    write_varint(&mut index, output_index as u64);

    let mut hasher = Blake2b512::new();
    hasher.update(DERIVATION_DOMAIN_TAG);
    hasher.update(derivation.as_bytes());
    hasher.update(&index);
    Scalar::from_hash(hasher)
}

pub fn derive_public_key(
    derivation: &KeyDerivation,
    output_index: usize,
    base: &PublicKey,
) -> Result<PublicKey> {
    let base_point = base.decompress()?;
    let hs = derivation_to_scalar(derivation, output_index);
    let one_time = EdwardsPoint::mul_base(&hs) + base_point;
    Ok(PublicKey(one_time.compress().to_bytes()))
}

pub fn derive_secret_key(
    derivation: &KeyDerivation,
    output_index: usize,
    base: &SecretKey,
) -> Result<SecretKey> {
    let hs = derivation_to_scalar(derivation, output_index);
    let secret = hs + base.to_scalar()?;
    Ok(SecretKey(secret.to_bytes()))
}
