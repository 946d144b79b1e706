//! Registry contract collaborator for DocLedger.
//!
//! The on-chain registry tracks ownership, access grants, licenses,
//! disputes, and transfer history for sealed documents. This crate
//! consumes its call interface over a JSON HTTP facade:
//! - [`RegistryClient`]: one method per contract call, reads and
//!   transaction-producing writes
//! - [`KeyMaterialResolver`]: the all-or-nothing key/IV/MIME lookup
//!   needed to unseal a document
//!
//! The contract's state machine and access policy are not implemented
//! here; authorization outcomes arrive as HTTP statuses and are mapped
//! onto [`RegistryError`] so callers can tell a denial apart from a
//! transport fault.

pub mod client;
pub mod config;
pub mod error;
pub mod resolver;

pub use client::{RegisterFileRequest, RegistryClient};
pub use config::RegistryConfig;
pub use error::{RegistryError, RegistryResult};
pub use resolver::{KeyMaterialResolver, ResolvedMaterial};
