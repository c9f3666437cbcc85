use crate::error::{CurrencyError, Result};
use crate::utils::{
    base58_decode, base58_encode, read_varint, sha256_digest, write_varint, PublicKey, KEY_SIZE,
};
use serde::{Deserialize, Serialize};

pub const ADDRESS_CHECK_SUM_LEN: usize = 4;

/// Public half of an account: where coinbase and transfers are paid to
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    bincode::Encode,
    bincode::Decode,
)]
pub struct AccountPublicAddress {
    pub spend_public_key: PublicKey,
    pub view_public_key: PublicKey,
}

fn checksum(payload: &[u8]) -> [u8; ADDRESS_CHECK_SUM_LEN] {
    let hash = sha256_digest(payload);
    let mut out = [0u8; ADDRESS_CHECK_SUM_LEN];
    out.copy_from_slice(&hash.as_bytes()[..ADDRESS_CHECK_SUM_LEN]);
    out
}

/// `base58(varint(prefix) || spend || view || checksum)`
pub fn encode_address(prefix: u64, address: &AccountPublicAddress) -> String {
    let mut payload = Vec::with_capacity(10 + 2 * KEY_SIZE + ADDRESS_CHECK_SUM_LEN);
    write_varint(&mut payload, prefix);
    payload.extend_from_slice(address.spend_public_key.as_bytes());
    payload.extend_from_slice(address.view_public_key.as_bytes());
    let checksum = checksum(&payload);
    payload.extend_from_slice(&checksum);
    base58_encode(&payload)
}

/// Decode an address string into its network prefix and keys
pub fn decode_address(encoded: &str) -> Result<(u64, AccountPublicAddress)> {
    let payload = base58_decode(encoded.trim())?;
    if payload.len() < ADDRESS_CHECK_SUM_LEN {
        return Err(CurrencyError::InvalidAddress("Address is too short".to_string()));
    }

    let (body, actual_checksum) = payload.split_at(payload.len() - ADDRESS_CHECK_SUM_LEN);
    if checksum(body).as_slice() != actual_checksum {
        return Err(CurrencyError::InvalidAddress("Checksum mismatch".to_string()));
    }

    let (prefix, prefix_len) = read_varint(body)
        .ok_or_else(|| CurrencyError::InvalidAddress("Malformed address prefix".to_string()))?;
    let keys = &body[prefix_len..];
    if keys.len() != 2 * KEY_SIZE {
        return Err(CurrencyError::InvalidAddress(format!(
            "Expected {} key bytes, got {}",
            2 * KEY_SIZE,
            keys.len()
        )));
    }

    let mut spend = [0u8; KEY_SIZE];
    let mut view = [0u8; KEY_SIZE];
    spend.copy_from_slice(&keys[..KEY_SIZE]);
    view.copy_from_slice(&keys[KEY_SIZE..]);

    Ok((
        prefix,
        AccountPublicAddress {
            spend_public_key: PublicKey(spend),
            view_public_key: PublicKey(view),
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parameters::PUBLIC_ADDRESS_BASE58_PREFIX;
    use crate::core::CurrencyBuilder;
    use crate::utils::generate_key_pair;

    fn address() -> AccountPublicAddress {
        AccountPublicAddress {
            spend_public_key: generate_key_pair().public_key,
            view_public_key: generate_key_pair().public_key,
        }
    }

    #[test]
    fn test_encode_decode() {
        let address = address();
        let encoded = encode_address(PUBLIC_ADDRESS_BASE58_PREFIX, &address);
        let (prefix, decoded) = decode_address(&encoded).unwrap();
        assert_eq!(prefix, PUBLIC_ADDRESS_BASE58_PREFIX);
        assert_eq!(decoded, address);
    }

    #[test]
    fn test_corrupted_address() {
        let encoded = encode_address(PUBLIC_ADDRESS_BASE58_PREFIX, &address());
        let mut chars: Vec<char> = encoded.chars().collect();
        let last = chars.len() - 1;
        chars[last] = if chars[last] == '1' { '2' } else { '1' };
        let corrupted: String = chars.into_iter().collect();
        assert!(decode_address(&corrupted).is_err());
        assert!(decode_address("").is_err());
    }

    #[test]
    fn test_currency_checks_prefix() {
        let currency = CurrencyBuilder::new().build().unwrap();
        let address = address();

        let encoded = currency.account_address_as_string(&address);
        assert_eq!(currency.parse_account_address_string(&encoded).unwrap(), address);

        let foreign = encode_address(0x1234, &address);
        assert!(matches!(
            currency.parse_account_address_string(&foreign),
            Err(CurrencyError::InvalidAddress(_))
        ));
    }
}
