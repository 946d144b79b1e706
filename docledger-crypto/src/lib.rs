//! Client-side sealing for DocLedger.
//!
//! Documents are encrypted in the client before they ever reach the
//! storage network, with AES-256-CBC + PKCS#7 padding. The (key, IV)
//! pair is generated once per document, registered with the on-chain
//! registry as hex, and re-obtained (never regenerated) when an
//! authorized party opens the document.
//!
//! # Key transport
//!
//! The contract boundary speaks hexadecimal, optionally `0x`-prefixed.
//! [`KeyMaterial::from_hex`] normalizes both forms; everything below
//! that boundary operates on raw bytes only.
//!
//! # Error discipline
//!
//! Malformed inputs (`InvalidKeyMaterial`) are detected before any
//! cipher work and stay distinguishable from a transform that ran and
//! failed (`DecryptionFailed`, i.e. wrong secret or corrupted
//! ciphertext). Entropy failure is its own fatal kind; there is no
//! fallback to a non-cryptographic generator.

mod cipher;
mod encoding;
mod error;
mod material;

pub use cipher::{decrypt, decrypt_hex, encrypt};
pub use encoding::strip_hex_prefix;
pub use error::{CryptoError, CryptoResult};
pub use material::KeyMaterial;

/// Symmetric key size in bytes (256-bit).
pub const KEY_SIZE: usize = 32;

/// Initialization vector size in bytes (one cipher block).
pub const IV_SIZE: usize = 16;

/// AES block size in bytes; ciphertext length is always a multiple.
pub const BLOCK_SIZE: usize = 16;
