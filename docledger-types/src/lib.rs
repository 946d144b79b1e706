//! Shared types for the DocLedger client core.
//!
//! Identifiers and record shapes that cross crate boundaries: token ids
//! minted by the registry contract, account addresses, content ids from
//! the storage network, and the read models returned by the contract's
//! listing, history, audit, and dispute calls.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// On-chain identifier of one registered document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenId(pub u64);

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// An account address on the registry chain, `0x`-prefixed hex.
///
/// Stored lowercase so addresses compare consistently regardless of the
/// checksum casing a wallet produced; deserialization normalizes too.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct AccountAddress(String);

impl AccountAddress {
    pub fn new(addr: impl Into<String>) -> Self {
        Self(addr.into().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AccountAddress {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for AccountAddress {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<AccountAddress> for String {
    fn from(addr: AccountAddress) -> Self {
        addr.0
    }
}

/// Hash-derived address of a blob on the content-addressed storage
/// network.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentId(String);

impl ContentId {
    pub fn new(cid: impl Into<String>) -> Self {
        Self(cid.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry from the registry's file listing.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FileSummary {
    pub token_id: TokenId,
    pub title: String,
    pub description: String,
    pub content_id: ContentId,
    pub registered_at: DateTime<Utc>,
}

/// Access decoration for a listed file, as seen by one requester.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AccessStatus {
    pub owner: AccountAddress,
    pub is_owner: bool,
    pub has_access: bool,
}

/// One hop in a token's ownership history.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TransferRecord {
    pub from: AccountAddress,
    pub to: AccountAddress,
    pub timestamp: DateTime<Utc>,
}

/// A dispute filed against a registered document.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DisputeRecord {
    pub complainant: AccountAddress,
    pub reason: String,
    pub filed_at: DateTime<Utc>,
}

/// Provenance certificate for a (owner, content id) pair.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegistryCertificate {
    pub title: String,
    pub description: String,
    pub content_id: ContentId,
    pub registered_at: DateTime<Utc>,
}

/// Receipt returned by the contract's write calls.
///
/// The client never inspects receipts beyond surfacing the hash; in
/// particular key material is never read out of a receipt.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TransactionReceipt {
    pub tx_hash: String,
    #[serde(default)]
    pub block_number: Option<u64>,
}
