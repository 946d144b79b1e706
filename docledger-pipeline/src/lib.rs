//! Seal/unseal orchestration for DocLedger.
//!
//! Two directions through the same machinery:
//! - **upload**: generate key material, encrypt, pin the ciphertext,
//!   register the record (with its key material) on the contract;
//! - **access**: fetch the ciphertext, resolve key material through the
//!   contract's access check, decrypt, classify the content type.
//!
//! Cipher work runs on a blocking worker so large documents do not
//! stall the caller's event loop. Every failure is translated into one
//! [`PipelineError`] kind before it reaches the caller; no cipher or
//! transport error leaks through raw. All failures are fail-fast:
//! partially decrypted content is never surfaced.

pub mod error;
pub mod render;
pub mod seal;
pub mod unseal;

pub use error::{PipelineError, PipelineResult};
pub use render::{ContentKind, Disposition, data_url, disposition_for, resolve_mime};
pub use seal::{PlaintextFile, RegisteredDocument, SealedDocument, UploadPipeline, seal_for_upload};
pub use unseal::{AccessPipeline, OpenedDocument, UnsealedDocument, unseal_for_access};
