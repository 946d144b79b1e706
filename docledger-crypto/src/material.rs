//! Per-document key material.

use crate::encoding::decode_fixed;
use crate::error::{CryptoError, CryptoResult};
use crate::{IV_SIZE, KEY_SIZE};
use rand::TryRngCore;
use rand::rngs::OsRng;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// The (key, IV) pair that seals exactly one document.
///
/// Generated once at seal time and re-obtained from the registry at
/// unseal time; a regenerated pair can never open an existing sealed
/// file. Both fields are wiped on drop and never serialized.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeyMaterial {
    key: [u8; KEY_SIZE],
    iv: [u8; IV_SIZE],
}

impl KeyMaterial {
    /// Draws a fresh key and IV from the OS entropy source.
    ///
    /// Fails with [`CryptoError::EntropyUnavailable`] if the source
    /// cannot be read; there is no non-cryptographic fallback.
    pub fn generate() -> CryptoResult<Self> {
        let mut key = [0u8; KEY_SIZE];
        let mut iv = [0u8; IV_SIZE];
        OsRng
            .try_fill_bytes(&mut key)
            .map_err(|_| CryptoError::EntropyUnavailable)?;
        OsRng
            .try_fill_bytes(&mut iv)
            .map_err(|_| CryptoError::EntropyUnavailable)?;
        Ok(Self { key, iv })
    }

    /// Builds key material from raw bytes, validating lengths.
    pub fn from_raw(key: &[u8], iv: &[u8]) -> CryptoResult<Self> {
        let key: [u8; KEY_SIZE] = key.try_into().map_err(|_| {
            CryptoError::InvalidKeyMaterial(format!(
                "key: expected {KEY_SIZE} bytes, got {}",
                key.len()
            ))
        })?;
        let iv: [u8; IV_SIZE] = iv.try_into().map_err(|_| {
            CryptoError::InvalidKeyMaterial(format!(
                "iv: expected {IV_SIZE} bytes, got {}",
                iv.len()
            ))
        })?;
        Ok(Self { key, iv })
    }

    /// Builds key material from hex strings, each with an optional
    /// `0x` prefix.
    pub fn from_hex(key_hex: &str, iv_hex: &str) -> CryptoResult<Self> {
        Ok(Self {
            key: decode_fixed::<KEY_SIZE>("key", key_hex)?,
            iv: decode_fixed::<IV_SIZE>("iv", iv_hex)?,
        })
    }

    pub fn key(&self) -> &[u8; KEY_SIZE] {
        &self.key
    }

    pub fn iv(&self) -> &[u8; IV_SIZE] {
        &self.iv
    }

    /// Lowercase hex of the key, unprefixed, the form written to the
    /// registry at registration.
    pub fn key_hex(&self) -> String {
        hex::encode(self.key)
    }

    /// Lowercase hex of the IV, unprefixed.
    pub fn iv_hex(&self) -> String {
        hex::encode(self.iv)
    }
}

// Key bytes must never reach logs.
impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("KeyMaterial(..)")
    }
}
