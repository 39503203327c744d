//! Protocol Events for Merits
//!
//! Every successful mutating operation emits exactly one notification
//! record. The surrounding environment drains the log after each call and
//! forwards the records to external observers (indexers, UIs, audit).

use crate::types::{AccountId, ItemId};
use crate::{String, Vec};
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

/// Event types for indexing and filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
#[borsh(use_discriminant = true)]
#[repr(u8)]
pub enum EventType {
    // Ledger Events (0x01 - 0x1F)
    PointsMinted = 0x01,
    PointsTransferred = 0x02,
    PointsBurned = 0x03,

    // Catalog Events (0x20 - 0x3F)
    ItemAdded = 0x20,
    ItemUpdated = 0x21,
    ItemRemoved = 0x22,
    ItemRedeemed = 0x23,
}

/// Main event enum containing all protocol events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub enum MeritsEvent {
    // ============ Ledger Events ============

    /// Emitted when new points are minted to an account
    PointsMinted {
        to: AccountId,
        amount: u64,
        new_total_supply: u64,
    },

    /// Emitted on a point transfer between accounts
    PointsTransferred {
        from: AccountId,
        to: AccountId,
        amount: u64,
    },

    /// Emitted when points are destroyed, including burns triggered by
    /// redemption
    PointsBurned {
        from: AccountId,
        amount: u64,
        new_total_supply: u64,
    },

    // ============ Catalog Events ============

    /// Emitted when a new item enters the catalog
    ItemAdded {
        id: ItemId,
        name: String,
        cost: u64,
    },

    /// Emitted when an item's name or cost is replaced
    ItemUpdated {
        id: ItemId,
        name: String,
        cost: u64,
    },

    /// Emitted when an item is retired from the catalog
    ItemRemoved { id: ItemId },

    /// Emitted when an account redeems an item, after the cost has been
    /// burned
    ItemRedeemed {
        account: AccountId,
        id: ItemId,
        cost: u64,
    },
}

impl MeritsEvent {
    /// Get the event type for filtering
    pub fn event_type(&self) -> EventType {
        match self {
            Self::PointsMinted { .. } => EventType::PointsMinted,
            Self::PointsTransferred { .. } => EventType::PointsTransferred,
            Self::PointsBurned { .. } => EventType::PointsBurned,
            Self::ItemAdded { .. } => EventType::ItemAdded,
            Self::ItemUpdated { .. } => EventType::ItemUpdated,
            Self::ItemRemoved { .. } => EventType::ItemRemoved,
            Self::ItemRedeemed { .. } => EventType::ItemRedeemed,
        }
    }

    /// Serialize event to bytes for storage/transmission
    pub fn to_bytes(&self) -> Vec<u8> {
        borsh::to_vec(self).unwrap_or_default()
    }

    /// Deserialize event from bytes
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        borsh::from_slice(bytes).ok()
    }
}

/// Event log for collecting records during execution
///
/// The environment drains the log after each successful operation; a failed
/// operation emits nothing.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<MeritsEvent>,
}

impl EventLog {
    /// Create a new empty event log
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Emit an event (add to log)
    pub fn emit(&mut self, event: MeritsEvent) {
        self.events.push(event);
    }

    /// Get all events
    pub fn events(&self) -> &[MeritsEvent] {
        &self.events
    }

    /// Take ownership of all events
    pub fn into_events(self) -> Vec<MeritsEvent> {
        self.events
    }

    /// Filter events by type
    pub fn filter_by_type(&self, event_type: EventType) -> Vec<&MeritsEvent> {
        self.events
            .iter()
            .filter(|e| e.event_type() == event_type)
            .collect()
    }

    /// Check if any events were emitted
    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }

    /// Get number of events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Clear all events
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
