//! Registry collaborator error types.

use thiserror::Error;

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors from the registry contract facade.
///
/// The split matters to callers: `Unavailable` is a transient transport
/// fault and safe to retry, `AccessDenied` is an authorization outcome
/// and must not be retried, and `MalformedResponse` is an integration
/// fault on the collaborator side.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The contract refused the call for this requester.
    #[error("access denied by registry: {0}")]
    AccessDenied(String),

    /// The registry facade could not be reached or answered 5xx.
    #[error("registry unavailable: {0}")]
    Unavailable(String),

    /// No record exists for the requested token or certificate.
    #[error("not found in registry: {0}")]
    NotFound(String),

    /// The facade answered with something the contract interface does
    /// not produce (wrong JSON shape, a transaction receipt where a hex
    /// scalar was expected, mis-sized key material).
    #[error("malformed registry response: {0}")]
    MalformedResponse(String),
}

impl RegistryError {
    /// Transport-level reqwest failures are all transient from the
    /// caller's point of view.
    pub(crate) fn transport(err: reqwest::Error) -> Self {
        Self::Unavailable(err.to_string())
    }
}
