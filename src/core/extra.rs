//! Transaction extra field
//!
//! The extra field is a sequence of tagged entries. The coinbase builder writes
//! the transaction public key (`0x01`) and, when a miner supplies one, an extra
//! nonce (`0x02`, one length byte, then the nonce bytes).

use crate::error::{CurrencyError, Result};
use crate::utils::{PublicKey, KEY_SIZE};

pub const TX_EXTRA_TAG_PADDING: u8 = 0x00;
pub const TX_EXTRA_TAG_PUBKEY: u8 = 0x01;
pub const TX_EXTRA_NONCE: u8 = 0x02;
pub const TX_EXTRA_NONCE_MAX_COUNT: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtraField {
    Padding(usize),
    PublicKey(PublicKey),
    Nonce(Vec<u8>),
}

pub fn add_transaction_public_key_to_extra(extra: &mut Vec<u8>, key: &PublicKey) {
    extra.push(TX_EXTRA_TAG_PUBKEY);
    extra.extend_from_slice(key.as_bytes());
}

pub fn add_extra_nonce_to_transaction_extra(extra: &mut Vec<u8>, nonce: &[u8]) -> Result<()> {
    if nonce.len() > TX_EXTRA_NONCE_MAX_COUNT {
        return Err(CurrencyError::InvalidTransaction(format!(
            "Extra nonce is {} bytes, at most {TX_EXTRA_NONCE_MAX_COUNT} allowed",
            nonce.len()
        )));
    }

    extra.push(TX_EXTRA_NONCE);
    extra.push(nonce.len() as u8);
    extra.extend_from_slice(nonce);
    Ok(())
}

/// Split an extra field into its entries
pub fn parse_extra(extra: &[u8]) -> Result<Vec<ExtraField>> {
    let mut fields = Vec::new();
    let mut pos = 0;

    while pos < extra.len() {
        match extra[pos] {
            TX_EXTRA_TAG_PADDING => {
                let rest = &extra[pos..];
                if rest.iter().any(|b| *b != 0) {
                    return Err(CurrencyError::InvalidTransaction(
                        "Non-zero byte inside extra padding".to_string(),
                    ));
                }
                fields.push(ExtraField::Padding(rest.len()));
                pos = extra.len();
            }
            TX_EXTRA_TAG_PUBKEY => {
                let end = pos + 1 + KEY_SIZE;
                if end > extra.len() {
                    return Err(CurrencyError::InvalidTransaction(
                        "Truncated public key in extra".to_string(),
                    ));
                }
                let mut key = [0u8; KEY_SIZE];
                key.copy_from_slice(&extra[pos + 1..end]);
                fields.push(ExtraField::PublicKey(PublicKey(key)));
                pos = end;
            }
            TX_EXTRA_NONCE => {
                let len = *extra.get(pos + 1).ok_or_else(|| {
                    CurrencyError::InvalidTransaction("Missing nonce length in extra".to_string())
                })? as usize;
                let end = pos + 2 + len;
                if end > extra.len() {
                    return Err(CurrencyError::InvalidTransaction(
                        "Truncated nonce in extra".to_string(),
                    ));
                }
                fields.push(ExtraField::Nonce(extra[pos + 2..end].to_vec()));
                pos = end;
            }
            tag => {
                return Err(CurrencyError::InvalidTransaction(format!(
                    "Unknown extra tag {tag:#04x}"
                )))
            }
        }
    }

    Ok(fields)
}

pub fn get_transaction_public_key_from_extra(extra: &[u8]) -> Option<PublicKey> {
    parse_extra(extra).ok()?.into_iter().find_map(|field| match field {
        ExtraField::PublicKey(key) => Some(key),
        _ => None,
    })
}

pub fn get_extra_nonce_from_extra(extra: &[u8]) -> Option<Vec<u8>> {
    parse_extra(extra).ok()?.into_iter().find_map(|field| match field {
        ExtraField::Nonce(nonce) => Some(nonce),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_key_and_nonce() {
        let key = PublicKey([9; KEY_SIZE]);
        let mut extra = Vec::new();
        add_transaction_public_key_to_extra(&mut extra, &key);
        add_extra_nonce_to_transaction_extra(&mut extra, b"pool-42").unwrap();

        assert_eq!(extra.len(), 1 + KEY_SIZE + 2 + 7);
        assert_eq!(get_transaction_public_key_from_extra(&extra), Some(key));
        assert_eq!(get_extra_nonce_from_extra(&extra), Some(b"pool-42".to_vec()));
    }

    #[test]
    fn test_nonce_too_long() {
        let mut extra = Vec::new();
        assert!(add_extra_nonce_to_transaction_extra(&mut extra, &[0u8; 256]).is_err());
        assert!(extra.is_empty());
        assert!(add_extra_nonce_to_transaction_extra(&mut extra, &[0u8; 255]).is_ok());
    }

    #[test]
    fn test_truncated_extra() {
        assert!(parse_extra(&[TX_EXTRA_TAG_PUBKEY, 1, 2]).is_err());
        assert!(parse_extra(&[TX_EXTRA_NONCE, 5, 1]).is_err());
        assert!(parse_extra(&[0x7f]).is_err());
        assert_eq!(parse_extra(&[0, 0, 0]).unwrap(), vec![ExtraField::Padding(3)]);
    }
}
