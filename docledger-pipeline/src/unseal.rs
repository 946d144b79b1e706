//! The access direction: fetch, resolve, decrypt, classify.

use crate::error::PipelineResult;
use crate::render::{Disposition, disposition_for, resolve_mime};
use docledger_crypto::decrypt;
use docledger_registry::{KeyMaterialResolver, RegistryClient};
use docledger_storage::StoreClient;
use docledger_types::{AccountAddress, TokenId};
use std::sync::Arc;
use tokio::task;
use tracing::info;

/// A decrypted document with its effective MIME type.
#[derive(Clone, Debug)]
pub struct UnsealedDocument {
    pub bytes: Vec<u8>,
    pub mime: String,
}

/// An unsealed document plus its presentation decision.
#[derive(Clone, Debug)]
pub struct OpenedDocument {
    pub bytes: Vec<u8>,
    pub mime: String,
    pub disposition: Disposition,
}

/// Resolves key material for `token_id` and decrypts `ciphertext`.
///
/// Fails fast on the first sub-failure (a denial, an unreachable
/// collaborator, or a cipher error) and never yields partially
/// decrypted bytes. When the recorded MIME type is absent or generic,
/// the magic-byte fallback refines it.
pub async fn unseal_for_access(
    resolver: &KeyMaterialResolver,
    ciphertext: Vec<u8>,
    token_id: TokenId,
    requester: &AccountAddress,
) -> PipelineResult<UnsealedDocument> {
    let resolved = resolver.resolve(token_id, requester).await?;

    let material = resolved.material;
    let bytes =
        task::spawn_blocking(move || decrypt(&ciphertext, material.key(), material.iv()))
            .await
            .expect("decryption task panicked")?;

    let mime = resolve_mime(Some(&resolved.mime), &bytes);
    Ok(UnsealedDocument { bytes, mime })
}

/// Composes the full access path: record lookup → sealed fetch (with
/// gateway fallback) → resolve → decrypt → classify.
pub struct AccessPipeline {
    registry: Arc<RegistryClient>,
    store: Arc<StoreClient>,
    resolver: KeyMaterialResolver,
}

impl AccessPipeline {
    pub fn new(registry: Arc<RegistryClient>, store: Arc<StoreClient>) -> Self {
        let resolver = KeyMaterialResolver::new(Arc::clone(&registry));
        Self {
            registry,
            store,
            resolver,
        }
    }

    /// Opens a registered document on behalf of `requester`.
    pub async fn open_document(
        &self,
        token_id: TokenId,
        requester: &AccountAddress,
    ) -> PipelineResult<OpenedDocument> {
        let summary = self.registry.file(token_id).await?;
        let sealed = self.store.fetch_sealed(&summary.content_id).await?;

        let unsealed = unseal_for_access(&self.resolver, sealed, token_id, requester).await?;

        let disposition = disposition_for(&unsealed.mime);
        info!("opened token {token_id} as {}", unsealed.mime);
        Ok(OpenedDocument {
            bytes: unsealed.bytes,
            mime: unsealed.mime,
            disposition,
        })
    }
}
