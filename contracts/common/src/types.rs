//! Core Types for the Merits Protocol
//!
//! Fundamental data structures shared by the ledger and catalog contracts.

use crate::String;
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Type alias for account identifiers (32-byte hash)
pub type AccountId = [u8; 32];

/// Type alias for catalog item identifiers
///
/// Positive, assigned sequentially starting at
/// [`crate::constants::catalog::FIRST_ITEM_ID`], never reused. A retired
/// identifier keeps referring to the same logical slot forever.
pub type ItemId = u64;

/// Derive a deterministic 32-byte account identifier from seed bytes.
///
/// The environment owns real identity; this helper gives environments and
/// tests a stable way to produce well-formed identifiers from readable
/// labels or key material.
pub fn derive_account_id(seed: &[u8]) -> AccountId {
    let mut hasher = Sha256::new();
    hasher.update(seed);
    hasher.finalize().into()
}

// ============ Catalog Types ============

/// Lifecycle status of a catalog item
///
/// Transitions: `Active` (on add) -> `Active` (on update) -> `Retired`
/// (on retire, terminal). A retired item is never reactivated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub enum ItemStatus {
    /// Item is redeemable and visible in listings
    #[default]
    Active,
    /// Item has been retired; the record is kept for history but the
    /// identifier behaves as nonexistent for all external lookups
    Retired,
}

/// A redeemable catalog item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct Item {
    /// Unique identifier for this item
    pub id: ItemId,
    /// Display name (duplicates across items are allowed)
    pub name: String,
    /// Redemption cost in merit points
    pub cost: u64,
    /// Current lifecycle status
    pub status: ItemStatus,
}

impl Item {
    /// Creates a new active item
    pub fn new(id: ItemId, name: String, cost: u64) -> Self {
        Self {
            id,
            name,
            cost,
            status: ItemStatus::Active,
        }
    }

    /// Check whether the item is still redeemable
    pub fn is_available(&self) -> bool {
        self.status == ItemStatus::Active
    }
}
