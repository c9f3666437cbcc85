// Blob encoding for consensus objects.
//
// Blobs use the legacy bincode layout: fixed-width little-endian integers,
// u64 length prefixes and u32 enum tags. The hard-coded genesis coinbase blob
// is written in this layout, so changing the configuration changes the
// genesis hash.
use crate::error::{CurrencyError, Result};
use data_encoding::HEXLOWER;

/// Encode a value into its canonical binary blob
pub fn serialize<T: bincode::Encode>(data: &T) -> Result<Vec<u8>> {
    let config = bincode::config::legacy();
    bincode::encode_to_vec(data, config)
        .map_err(|e| CurrencyError::Serialization(format!("Serialization failed: {e}")))
}

/// Decode a value from a blob, rejecting trailing bytes
pub fn deserialize<T>(bytes: &[u8]) -> Result<T>
where
    T: bincode::Decode<()>,
{
    let config = bincode::config::legacy();
    let (data, read) = bincode::decode_from_slice(bytes, config)
        .map_err(|e| CurrencyError::Serialization(format!("Deserialization failed: {e}")))?;
    if read != bytes.len() {
        return Err(CurrencyError::Serialization(format!(
            "Deserialization left {} trailing bytes",
            bytes.len() - read
        )));
    }
    Ok(data)
}

pub fn to_hex(bytes: &[u8]) -> String {
    HEXLOWER.encode(bytes)
}

pub fn from_hex(hex: &str) -> Result<Vec<u8>> {
    Ok(HEXLOWER.decode(hex.trim().to_ascii_lowercase().as_bytes())?)
}

/// Append `value` as an unsigned LEB128 varint
pub fn write_varint(out: &mut Vec<u8>, mut value: u64) {
    while value >= 0x80 {
        out.push((value as u8 & 0x7f) | 0x80);
        value >>= 7;
    }
    out.push(value as u8);
}

/// Read an unsigned LEB128 varint, returning the value and the bytes consumed
pub fn read_varint(bytes: &[u8]) -> Option<(u64, usize)> {
    let mut value: u64 = 0;
    for (i, byte) in bytes.iter().enumerate().take(10) {
        let part = u64::from(byte & 0x7f);
        let shift = 7 * i as u32;
        if shift == 63 && part > 1 {
            return None;
        }
        value |= part << shift;
        if byte & 0x80 == 0 {
            return Some((value, i + 1));
        }
    }
    None
}
