//! AES-256-CBC with PKCS#7 padding.
//!
//! Pure functions over their inputs: no internal randomness, no I/O.
//! Lengths are validated before the transform so malformed inputs
//! (`InvalidKeyMaterial`) never masquerade as a wrong secret
//! (`DecryptionFailed`).

use crate::error::{CryptoError, CryptoResult};
use crate::{BLOCK_SIZE, IV_SIZE, KEY_SIZE};
use aes::Aes256;
use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

fn check_material(key: &[u8], iv: &[u8]) -> CryptoResult<()> {
    if key.len() != KEY_SIZE {
        return Err(CryptoError::InvalidKeyMaterial(format!(
            "key: expected {KEY_SIZE} bytes, got {}",
            key.len()
        )));
    }
    if iv.len() != IV_SIZE {
        return Err(CryptoError::InvalidKeyMaterial(format!(
            "iv: expected {IV_SIZE} bytes, got {}",
            iv.len()
        )));
    }
    Ok(())
}

/// Encrypts plaintext under AES-256-CBC with PKCS#7 padding.
///
/// Output length is the input rounded up to the next block boundary,
/// always at least one byte longer than the input.
pub fn encrypt(plaintext: &[u8], key: &[u8], iv: &[u8]) -> CryptoResult<Vec<u8>> {
    check_material(key, iv)?;
    let cipher = Aes256CbcEnc::new_from_slices(key, iv)
        .map_err(|e| CryptoError::InvalidKeyMaterial(e.to_string()))?;
    Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
}

/// Decrypts AES-256-CBC ciphertext and strips PKCS#7 padding.
///
/// Empty or non-block-aligned input, and padding that does not verify
/// after the transform (wrong key/IV, tampering), all report
/// [`CryptoError::DecryptionFailed`].
pub fn decrypt(ciphertext: &[u8], key: &[u8], iv: &[u8]) -> CryptoResult<Vec<u8>> {
    check_material(key, iv)?;
    if ciphertext.is_empty() {
        return Err(CryptoError::DecryptionFailed("empty ciphertext".into()));
    }
    if ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(CryptoError::DecryptionFailed(format!(
            "ciphertext length {} is not a multiple of the {BLOCK_SIZE}-byte block size",
            ciphertext.len()
        )));
    }

    let cipher = Aes256CbcDec::new_from_slices(key, iv)
        .map_err(|e| CryptoError::InvalidKeyMaterial(e.to_string()))?;
    cipher
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| {
            CryptoError::DecryptionFailed(
                "invalid padding: wrong key/IV or corrupted ciphertext".into(),
            )
        })
}

/// [`decrypt`] with key material supplied as hex text, each value
/// optionally `0x`-prefixed, as the registry hands them back.
pub fn decrypt_hex(ciphertext: &[u8], key_hex: &str, iv_hex: &str) -> CryptoResult<Vec<u8>> {
    let material = crate::KeyMaterial::from_hex(key_hex, iv_hex)?;
    decrypt(ciphertext, material.key(), material.iv())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::KeyMaterial;

    #[test]
    fn ciphertext_is_block_aligned_and_longer() {
        let material = KeyMaterial::generate().unwrap();
        for len in [0, 1, 15, 16, 17, 1000] {
            let plaintext = vec![0x5a; len];
            let ciphertext = encrypt(&plaintext, material.key(), material.iv()).unwrap();
            assert_eq!(ciphertext.len() % BLOCK_SIZE, 0);
            assert!(ciphertext.len() > plaintext.len());
        }
    }

    #[test]
    fn deterministic_for_identical_inputs() {
        let material = KeyMaterial::generate().unwrap();
        let a = encrypt(b"same input", material.key(), material.iv()).unwrap();
        let b = encrypt(b"same input", material.key(), material.iv()).unwrap();
        assert_eq!(a, b);
    }
}
