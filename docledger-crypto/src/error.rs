use thiserror::Error;

/// Result type for crypto operations.
pub type CryptoResult<T> = Result<T, CryptoError>;

/// Errors from key handling and the symmetric cipher.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// The platform's secure random source could not be read.
    #[error("system entropy source unavailable")]
    EntropyUnavailable,

    /// Malformed key or IV: wrong length, or hex that does not decode.
    /// Always a caller error, detected before any cipher work.
    #[error("invalid key material: {0}")]
    InvalidKeyMaterial(String),

    /// The transform ran and failed: wrong key/IV, corrupted
    /// ciphertext, or a ciphertext that is not block-aligned.
    #[error("decryption failed: {0}")]
    DecryptionFailed(String),
}
