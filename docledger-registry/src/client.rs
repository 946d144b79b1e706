//! HTTP client for the registry contract facade.
//!
//! One method per contract call. Reads return plain values; writes
//! return the transaction receipt the chain produced. Authorization is
//! enforced contract-side and arrives here as 401/403.

use crate::config::RegistryConfig;
use crate::error::{RegistryError, RegistryResult};
use docledger_types::{
    AccessStatus, AccountAddress, ContentId, DisputeRecord, FileSummary, RegistryCertificate,
    TokenId, TransactionReceipt, TransferRecord,
};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Registration payload for a freshly sealed document.
///
/// Key and IV travel as lowercase hex; the contract stores them behind
/// its access check and releases them through the obtain calls.
#[derive(Clone, Debug, Serialize)]
pub struct RegisterFileRequest {
    pub content_id: ContentId,
    pub title: String,
    pub description: String,
    pub key_hex: String,
    pub iv_hex: String,
    pub mime_type: String,
}

/// HTTP client for the registry contract facade.
pub struct RegistryClient {
    client: Client,
    config: RegistryConfig,
}

#[derive(Deserialize)]
struct KeyResponse {
    key: serde_json::Value,
}

#[derive(Deserialize)]
struct IvResponse {
    iv: serde_json::Value,
}

#[derive(Deserialize)]
struct MimeResponse {
    mime: String,
}

#[derive(Deserialize)]
struct OwnerResponse {
    owner: AccountAddress,
}

#[derive(Deserialize)]
struct AccessResponse {
    granted: bool,
}

#[derive(Deserialize)]
struct OwnershipResponse {
    verified: bool,
}

#[derive(Deserialize)]
struct AuditResponse {
    valid: bool,
}

impl RegistryClient {
    pub fn new(config: RegistryConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()
            .expect("failed to build HTTP client");

        Self { client, config }
    }

    // ── Key material lookups ──

    /// Fetches the decryption key for a token, gated on the requester
    /// being the owner or holding a valid access grant.
    pub async fn obtain_key(
        &self,
        token_id: TokenId,
        requester: &AccountAddress,
    ) -> RegistryResult<String> {
        let resp: KeyResponse = self
            .get(
                &format!("/api/registry/files/{token_id}/key"),
                &[("requester", requester.as_str())],
            )
            .await?;
        expect_hex_scalar("key", resp.key)
    }

    /// Fetches the IV recorded for a token. Not access-gated; the IV is
    /// useless without the key.
    pub async fn obtain_iv(&self, token_id: TokenId) -> RegistryResult<String> {
        let resp: IvResponse = self
            .get(&format!("/api/registry/files/{token_id}/iv"), &[])
            .await?;
        expect_hex_scalar("iv", resp.iv)
    }

    /// Fetches the MIME type recorded at registration, keyed by the
    /// recorded owner and the token.
    pub async fn obtain_mime_type(
        &self,
        owner: &AccountAddress,
        token_id: TokenId,
    ) -> RegistryResult<String> {
        let resp: MimeResponse = self
            .get(
                &format!("/api/registry/files/{token_id}/mime"),
                &[("owner", owner.as_str())],
            )
            .await?;
        Ok(resp.mime)
    }

    // ── Records ──

    /// Registers a sealed document, transferring its key material into
    /// the contract's custody.
    pub async fn register_file(
        &self,
        req: &RegisterFileRequest,
    ) -> RegistryResult<TransactionReceipt> {
        let receipt: TransactionReceipt = self.post("/api/registry/files", req).await?;
        info!(
            "registered {} as {}",
            req.content_id, receipt.tx_hash
        );
        Ok(receipt)
    }

    /// Lists every registered document.
    pub async fn list_files(&self) -> RegistryResult<Vec<FileSummary>> {
        self.get("/api/registry/files", &[]).await
    }

    /// Fetches one document's summary.
    pub async fn file(&self, token_id: TokenId) -> RegistryResult<FileSummary> {
        self.get(&format!("/api/registry/files/{token_id}"), &[])
            .await
    }

    pub async fn owner_of(&self, token_id: TokenId) -> RegistryResult<AccountAddress> {
        let resp: OwnerResponse = self
            .get(&format!("/api/registry/files/{token_id}/owner"), &[])
            .await?;
        Ok(resp.owner)
    }

    pub async fn verify_ownership(
        &self,
        token_id: TokenId,
        address: &AccountAddress,
    ) -> RegistryResult<bool> {
        let resp: OwnershipResponse = self
            .get(
                &format!("/api/registry/files/{token_id}/ownership"),
                &[("address", address.as_str())],
            )
            .await?;
        Ok(resp.verified)
    }

    pub async fn check_access(
        &self,
        token_id: TokenId,
        address: &AccountAddress,
    ) -> RegistryResult<bool> {
        let resp: AccessResponse = self
            .get(
                &format!("/api/registry/files/{token_id}/access"),
                &[("address", address.as_str())],
            )
            .await?;
        Ok(resp.granted)
    }

    /// Owner and effective access for one requester, fetched
    /// concurrently. Owners always have access.
    pub async fn access_status(
        &self,
        token_id: TokenId,
        address: &AccountAddress,
    ) -> RegistryResult<AccessStatus> {
        let (owner, granted) = tokio::try_join!(
            self.owner_of(token_id),
            self.check_access(token_id, address),
        )?;
        let is_owner = &owner == address;
        Ok(AccessStatus {
            owner,
            is_owner,
            has_access: is_owner || granted,
        })
    }

    // ── Grants & licenses ──

    pub async fn grant_access(
        &self,
        token_id: TokenId,
        grantee: &AccountAddress,
    ) -> RegistryResult<TransactionReceipt> {
        let receipt: TransactionReceipt = self
            .post(
                &format!("/api/registry/files/{token_id}/access"),
                &serde_json::json!({ "grantee": grantee }),
            )
            .await?;
        info!("granted access on token {token_id} to {grantee}");
        Ok(receipt)
    }

    pub async fn revoke_access(
        &self,
        token_id: TokenId,
        grantee: &AccountAddress,
    ) -> RegistryResult<TransactionReceipt> {
        let url = format!(
            "{}/api/registry/files/{token_id}/access",
            self.config.api_base_url
        );
        let resp = self
            .client
            .delete(&url)
            .query(&[("grantee", grantee.as_str())])
            .send()
            .await
            .map_err(RegistryError::transport)?;
        let receipt: TransactionReceipt = decode(resp).await?;
        info!("revoked access on token {token_id} from {grantee}");
        Ok(receipt)
    }

    /// Grants a time-limited license. Expiry is enforced by the
    /// contract; the duration passes through opaquely.
    pub async fn grant_license(
        &self,
        token_id: TokenId,
        grantee: &AccountAddress,
        duration_secs: u64,
    ) -> RegistryResult<TransactionReceipt> {
        let receipt: TransactionReceipt = self
            .post(
                &format!("/api/registry/files/{token_id}/license"),
                &serde_json::json!({ "grantee": grantee, "duration_secs": duration_secs }),
            )
            .await?;
        info!("licensed token {token_id} to {grantee} for {duration_secs}s");
        Ok(receipt)
    }

    // ── Transfers ──

    pub async fn transfer_ownership(
        &self,
        token_id: TokenId,
        new_owner: &AccountAddress,
    ) -> RegistryResult<TransactionReceipt> {
        let receipt: TransactionReceipt = self
            .post(
                &format!("/api/registry/files/{token_id}/transfer"),
                &serde_json::json!({ "new_owner": new_owner }),
            )
            .await?;
        info!("transferred token {token_id} to {new_owner}");
        Ok(receipt)
    }

    pub async fn transfer_history(
        &self,
        token_id: TokenId,
    ) -> RegistryResult<Vec<TransferRecord>> {
        self.get(&format!("/api/registry/files/{token_id}/transfers"), &[])
            .await
    }

    // ── Audit & certificates ──

    /// Checks whether a content id is registered to the given address.
    pub async fn file_audit(
        &self,
        address: &AccountAddress,
        content_id: &ContentId,
    ) -> RegistryResult<bool> {
        let resp: AuditResponse = self
            .get(
                "/api/registry/audit",
                &[
                    ("address", address.as_str()),
                    ("content_id", content_id.as_str()),
                ],
            )
            .await?;
        Ok(resp.valid)
    }

    pub async fn registry_certificate(
        &self,
        address: &AccountAddress,
        content_id: &ContentId,
    ) -> RegistryResult<RegistryCertificate> {
        self.get(
            "/api/registry/certificate",
            &[
                ("address", address.as_str()),
                ("content_id", content_id.as_str()),
            ],
        )
        .await
    }

    // ── Disputes ──

    pub async fn register_dispute(
        &self,
        token_id: TokenId,
        reason: &str,
    ) -> RegistryResult<TransactionReceipt> {
        let receipt: TransactionReceipt = self
            .post(
                &format!("/api/registry/files/{token_id}/disputes"),
                &serde_json::json!({ "reason": reason }),
            )
            .await?;
        info!("registered dispute on token {token_id}");
        Ok(receipt)
    }

    pub async fn list_disputes(&self, token_id: TokenId) -> RegistryResult<Vec<DisputeRecord>> {
        self.get(&format!("/api/registry/files/{token_id}/disputes"), &[])
            .await
    }

    // ── Plumbing ──

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> RegistryResult<T> {
        let url = format!("{}{path}", self.config.api_base_url);
        debug!("GET {path}");
        let resp = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(RegistryError::transport)?;
        decode(resp).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> RegistryResult<T> {
        let url = format!("{}{path}", self.config.api_base_url);
        debug!("POST {path}");
        let resp = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(RegistryError::transport)?;
        decode(resp).await
    }
}

/// Maps the facade's status codes onto the error taxonomy, then
/// deserializes the body.
async fn decode<T: DeserializeOwned>(resp: Response) -> RegistryResult<T> {
    let status = resp.status();
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        let body = resp.text().await.unwrap_or_default();
        return Err(RegistryError::AccessDenied(if body.is_empty() {
            status.to_string()
        } else {
            body
        }));
    }
    if status == StatusCode::NOT_FOUND {
        let body = resp.text().await.unwrap_or_default();
        return Err(RegistryError::NotFound(if body.is_empty() {
            status.to_string()
        } else {
            body
        }));
    }
    if !status.is_success() {
        return Err(RegistryError::Unavailable(format!(
            "registry answered {status}"
        )));
    }

    resp.json::<T>()
        .await
        .map_err(|e| RegistryError::MalformedResponse(e.to_string()))
}

/// The obtain calls return hex scalars. Anything else (notably a
/// transaction-receipt-shaped object) is an integration fault and is
/// never parsed for key bytes.
fn expect_hex_scalar(what: &str, value: serde_json::Value) -> RegistryResult<String> {
    match value {
        serde_json::Value::String(s) => Ok(s),
        other => {
            let shape = match other {
                serde_json::Value::Object(_) => "object",
                serde_json::Value::Array(_) => "array",
                serde_json::Value::Number(_) => "number",
                serde_json::Value::Bool(_) => "bool",
                _ => "null",
            };
            Err(RegistryError::MalformedResponse(format!(
                "{what} lookup returned a {shape}, expected a hex string"
            )))
        }
    }
}
