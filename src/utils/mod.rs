//! Utility functions and helpers
//!
//! Hashing, blob encoding and the stealth key primitives the coinbase builder
//! and address codec rely on.

pub mod crypto;
pub mod keys;
pub mod serialization;

pub use crypto::{base58_decode, base58_encode, sha256_digest, Hash, HASH_SIZE};
pub use keys::{
    derive_public_key, derive_secret_key, generate_key_derivation, generate_key_pair,
    secret_key_to_public_key, KeyDerivation, KeyImage, KeyPair, PublicKey, SecretKey, KEY_SIZE,
};
pub use serialization::{deserialize, from_hex, read_varint, serialize, to_hex, write_varint};
