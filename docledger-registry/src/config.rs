//! Registry client configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the registry contract facade.
///
/// Owned by the caller and passed in at client construction; there is
/// no shared global contract handle.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Base URL of the registry node's HTTP facade.
    pub api_base_url: String,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:8645".to_string(),
            request_timeout_secs: 30,
        }
    }
}
