//! The upload direction: seal, pin, register.

use crate::error::PipelineResult;
use docledger_crypto::{KeyMaterial, encrypt};
use docledger_registry::{RegisterFileRequest, RegistryClient};
use docledger_storage::{StoreClient, content_digest};
use docledger_types::{ContentId, TransactionReceipt};
use std::sync::Arc;
use tokio::task;
use tracing::info;

/// A file as read from the user's selection: raw bytes plus the MIME
/// type the picker reported. Consumed by sealing and not retained.
#[derive(Clone, Debug)]
pub struct PlaintextFile {
    pub bytes: Vec<u8>,
    pub mime: String,
}

/// Output of the seal step: ciphertext plus the material that sealed
/// it. The material's only legitimate destination is the registry.
pub struct SealedDocument {
    pub ciphertext: Vec<u8>,
    pub material: KeyMaterial,
}

/// Outcome of a completed upload.
#[derive(Clone, Debug)]
pub struct RegisteredDocument {
    pub content_id: ContentId,
    pub receipt: TransactionReceipt,
    /// sha-256 of the sealed bytes, as used by the contract's audit
    /// call.
    pub sealed_digest: String,
}

/// Generates fresh key material and encrypts `plaintext` under it.
///
/// Each call draws independent material, so sealing the same bytes
/// twice yields two distinct, equally valid sealed files. The cipher
/// runs on a blocking worker.
pub async fn seal_for_upload(plaintext: Vec<u8>) -> PipelineResult<SealedDocument> {
    let material = KeyMaterial::generate()?;
    let worker = material.clone();
    let ciphertext =
        task::spawn_blocking(move || encrypt(&plaintext, worker.key(), worker.iv()))
            .await
            .expect("encryption task panicked")?;
    Ok(SealedDocument {
        ciphertext,
        material,
    })
}

/// Composes the full upload path: seal → pin → register.
pub struct UploadPipeline {
    registry: Arc<RegistryClient>,
    store: Arc<StoreClient>,
}

impl UploadPipeline {
    pub fn new(registry: Arc<RegistryClient>, store: Arc<StoreClient>) -> Self {
        Self { registry, store }
    }

    /// Seals `file`, pins the ciphertext, and registers the record.
    ///
    /// The key material is handed to the contract inside the
    /// registration call and dropped (wiped) when this returns; after
    /// that, the contract's access check is the only way back to it.
    pub async fn register_document(
        &self,
        file: PlaintextFile,
        title: &str,
        description: &str,
    ) -> PipelineResult<RegisteredDocument> {
        let sealed = seal_for_upload(file.bytes).await?;
        let sealed_digest = content_digest(&sealed.ciphertext);

        let content_id = self.store.add(sealed.ciphertext).await?;

        let receipt = self
            .registry
            .register_file(&RegisterFileRequest {
                content_id: content_id.clone(),
                title: title.to_string(),
                description: description.to_string(),
                key_hex: sealed.material.key_hex(),
                iv_hex: sealed.material.iv_hex(),
                mime_type: file.mime,
            })
            .await?;

        info!("sealed and registered {content_id}");
        Ok(RegisteredDocument {
            content_id,
            receipt,
            sealed_digest,
        })
    }
}
