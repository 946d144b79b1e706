//! Content-addressed storage client for DocLedger.
//!
//! Sealed documents are pinned to a content-addressed storage network.
//! The network is consumed through two doors:
//! - the node's HTTP RPC (`add` / `cat`), used when a local or trusted
//!   node is reachable;
//! - a plain HTTP gateway (`GET /ipfs/{cid}`), used as a read-only
//!   fallback when the node RPC is not.
//!
//! Only ciphertext ever crosses this boundary; plaintext is sealed
//! before upload and unsealed after download, both elsewhere.

pub mod client;
pub mod config;
pub mod error;

pub use client::{StoreClient, content_digest};
pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
