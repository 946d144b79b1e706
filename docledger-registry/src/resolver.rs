//! Key material resolution for the unseal path.

use crate::client::RegistryClient;
use crate::error::{RegistryError, RegistryResult};
use docledger_crypto::KeyMaterial;
use docledger_types::{AccountAddress, TokenId};
use std::sync::Arc;
use tracing::debug;

/// Everything needed to unseal one document: the normalized key/IV pair
/// and the MIME type recorded at registration.
#[derive(Debug)]
pub struct ResolvedMaterial {
    pub material: KeyMaterial,
    pub mime: String,
}

/// Obtains key material for a sealed document from the registry.
///
/// Resolution is all-or-nothing: the key, IV, and MIME lookups run
/// concurrently, and the first failure fails the whole resolution.
/// Partial material never escapes; in particular MIME is never
/// defaulted when its lookup fails. Dropping the returned future
/// abandons any in-flight lookups.
pub struct KeyMaterialResolver {
    registry: Arc<RegistryClient>,
}

impl KeyMaterialResolver {
    pub fn new(registry: Arc<RegistryClient>) -> Self {
        Self { registry }
    }

    /// Resolves the key, IV, and MIME type for `token_id` on behalf of
    /// `requester`.
    ///
    /// The MIME lookup is keyed by the recorded owner, so the owner is
    /// read first; the three material lookups then fan out and join.
    /// `AccessDenied` means the contract refused the requester;
    /// `Unavailable` and `MalformedResponse` are collaborator faults.
    pub async fn resolve(
        &self,
        token_id: TokenId,
        requester: &AccountAddress,
    ) -> RegistryResult<ResolvedMaterial> {
        let owner = self.registry.owner_of(token_id).await?;

        let (key_hex, iv_hex, mime) = tokio::try_join!(
            self.registry.obtain_key(token_id, requester),
            self.registry.obtain_iv(token_id),
            self.registry.obtain_mime_type(&owner, token_id),
        )?;

        // The contract stores what registration wrote; mis-sized hex
        // here means the record is corrupt, not that the caller erred.
        let material = KeyMaterial::from_hex(&key_hex, &iv_hex)
            .map_err(|e| RegistryError::MalformedResponse(e.to_string()))?;

        debug!("resolved key material for token {token_id}");
        Ok(ResolvedMaterial { material, mime })
    }
}
