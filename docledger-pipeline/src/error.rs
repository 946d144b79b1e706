//! Unified error taxonomy at the pipeline boundary.

use docledger_crypto::CryptoError;
use docledger_registry::RegistryError;
use docledger_storage::StoreError;
use thiserror::Error;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Every failure a caller of the pipelines can observe.
///
/// Retry guidance is part of the contract: only `Unavailable` is safe
/// to retry. `AccessDenied` and `DecryptionFailed` are deliberately
/// distinct so a user can tell "you may not" from "this key cannot".
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The platform's secure random source is inaccessible. Fatal.
    #[error("system entropy source unavailable")]
    EntropyUnavailable,

    /// Malformed key or IV. Caller error; never retried.
    #[error("invalid key material: {0}")]
    InvalidKeyMaterial(String),

    /// Wrong key/IV or corrupted ciphertext. Never retried.
    #[error("cannot decrypt: {0}")]
    DecryptionFailed(String),

    /// The contract refused access for this requester.
    #[error("access denied: {0}")]
    AccessDenied(String),

    /// No record for the requested token or content id.
    #[error("record not found: {0}")]
    RecordNotFound(String),

    /// A collaborator could not be reached. Safe to retry; the
    /// pipeline itself never does.
    #[error("{collaborator} unavailable: {reason}")]
    Unavailable {
        collaborator: &'static str,
        reason: String,
    },
}

impl From<CryptoError> for PipelineError {
    fn from(err: CryptoError) -> Self {
        match err {
            CryptoError::EntropyUnavailable => Self::EntropyUnavailable,
            CryptoError::InvalidKeyMaterial(msg) => Self::InvalidKeyMaterial(msg),
            CryptoError::DecryptionFailed(msg) => Self::DecryptionFailed(msg),
        }
    }
}

impl From<RegistryError> for PipelineError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::AccessDenied(msg) => Self::AccessDenied(msg),
            RegistryError::NotFound(msg) => Self::RecordNotFound(msg),
            RegistryError::Unavailable(reason) => Self::Unavailable {
                collaborator: "registry",
                reason,
            },
            // Integration faults sit in the transient class: the record
            // itself may be fine once the facade is fixed.
            RegistryError::MalformedResponse(msg) => Self::Unavailable {
                collaborator: "registry",
                reason: format!("integration fault: {msg}"),
            },
        }
    }
}

impl From<StoreError> for PipelineError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(msg) => Self::RecordNotFound(msg),
            StoreError::Unavailable(reason) => Self::Unavailable {
                collaborator: "storage",
                reason,
            },
            StoreError::MalformedResponse(msg) => Self::Unavailable {
                collaborator: "storage",
                reason: format!("integration fault: {msg}"),
            },
        }
    }
}
