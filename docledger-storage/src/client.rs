//! Node RPC and gateway access to the content-addressed store.

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use docledger_types::ContentId;
use reqwest::{Client, StatusCode, multipart};
use serde::Deserialize;
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

/// sha-256 hex digest of a byte sequence, as recorded for audit calls.
pub fn content_digest(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

#[derive(Deserialize)]
struct AddResponse {
    #[serde(rename = "Hash")]
    hash: String,
}

/// Client for the content-addressed storage network.
///
/// Writes go through the node RPC only; reads try the node RPC first
/// and fall back to the gateway, so a sealed document stays reachable
/// while the local node is down.
pub struct StoreClient {
    client: Client,
    config: StoreConfig,
}

impl StoreClient {
    pub fn new(config: StoreConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()
            .expect("failed to build HTTP client");

        Self { client, config }
    }

    /// Pins a blob to the store and returns its content id.
    pub async fn add(&self, bytes: Vec<u8>) -> StoreResult<ContentId> {
        let url = format!("{}/api/v0/add", self.config.node_api_url);
        let form = multipart::Form::new().part("file", multipart::Part::bytes(bytes));

        let resp = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(StoreError::transport)?;
        let resp = check_status(resp).await?;

        let added: AddResponse = resp
            .json()
            .await
            .map_err(|e| StoreError::MalformedResponse(e.to_string()))?;
        debug!("pinned blob as {}", added.hash);
        Ok(ContentId::new(added.hash))
    }

    /// Reads a blob through the node RPC.
    pub async fn cat(&self, cid: &ContentId) -> StoreResult<Vec<u8>> {
        let url = format!("{}/api/v0/cat", self.config.node_api_url);
        let resp = self
            .client
            .post(&url)
            .query(&[("arg", cid.as_str())])
            .send()
            .await
            .map_err(StoreError::transport)?;
        let resp = check_status(resp).await?;

        let bytes = resp.bytes().await.map_err(StoreError::transport)?;
        Ok(bytes.to_vec())
    }

    /// Reads a blob through the HTTP gateway.
    pub async fn fetch_via_gateway(&self, cid: &ContentId) -> StoreResult<Vec<u8>> {
        let url = format!("{}/ipfs/{}", self.config.gateway_url, cid);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(StoreError::transport)?;
        let resp = check_status(resp).await?;

        let bytes = resp.bytes().await.map_err(StoreError::transport)?;
        Ok(bytes.to_vec())
    }

    /// Fetches sealed content: node RPC first, gateway on any node
    /// failure. Reports failure only when both doors are closed.
    pub async fn fetch_sealed(&self, cid: &ContentId) -> StoreResult<Vec<u8>> {
        match self.cat(cid).await {
            Ok(bytes) => Ok(bytes),
            Err(primary) => {
                warn!("node RPC failed for {cid} ({primary}), trying gateway");
                self.fetch_via_gateway(cid).await.map_err(|fallback| {
                    StoreError::Unavailable(format!(
                        "node RPC: {primary}; gateway: {fallback}"
                    ))
                })
            }
        }
    }
}

async fn check_status(resp: reqwest::Response) -> StoreResult<reqwest::Response> {
    let status = resp.status();
    if status == StatusCode::NOT_FOUND {
        let body = resp.text().await.unwrap_or_default();
        return Err(StoreError::NotFound(if body.is_empty() {
            status.to_string()
        } else {
            body
        }));
    }
    if !status.is_success() {
        return Err(StoreError::Unavailable(format!(
            "store answered {status}"
        )));
    }
    Ok(resp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_lowercase_hex_of_sha256() {
        // sha-256 of the empty input.
        assert_eq!(
            content_digest(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
