//! Storage collaborator error types.

use thiserror::Error;

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from the content-addressed store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Neither the node RPC nor the gateway could serve the request.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// The store does not hold the requested content id.
    #[error("content not found: {0}")]
    NotFound(String),

    /// The node RPC answered with an unexpected body.
    #[error("malformed storage response: {0}")]
    MalformedResponse(String),
}

impl StoreError {
    pub(crate) fn transport(err: reqwest::Error) -> Self {
        Self::Unavailable(err.to_string())
    }
}
