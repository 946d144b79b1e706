//! Hex normalization for key/IV transport.
//!
//! The registry contract returns key material as hex strings, sometimes
//! `0x`-prefixed depending on which client wrote it. Both forms decode
//! to the same bytes; any other encoding is rejected.

use crate::error::{CryptoError, CryptoResult};

/// Strips a leading `0x`/`0X` if present.
pub fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

/// Decodes hex into an exact-size array, stripping an optional `0x`
/// prefix first. Wrong stripped length or non-hex characters are
/// `InvalidKeyMaterial`.
pub fn decode_fixed<const N: usize>(what: &str, s: &str) -> CryptoResult<[u8; N]> {
    let stripped = strip_hex_prefix(s);
    if stripped.len() != N * 2 {
        return Err(CryptoError::InvalidKeyMaterial(format!(
            "{what}: expected {} hex chars, got {}",
            N * 2,
            stripped.len()
        )));
    }

    let mut out = [0u8; N];
    hex::decode_to_slice(stripped, &mut out)
        .map_err(|e| CryptoError::InvalidKeyMaterial(format!("{what}: {e}")))?;
    Ok(out)
}
