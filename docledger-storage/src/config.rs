//! Storage client configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the content-addressed store.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the storage node's RPC endpoint.
    pub node_api_url: String,

    /// Base URL of the HTTP gateway used as a read fallback.
    pub gateway_url: String,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            node_api_url: "http://127.0.0.1:5001".to_string(),
            gateway_url: "http://127.0.0.1:8081".to_string(),
            request_timeout_secs: 60,
        }
    }
}
