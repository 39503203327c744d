//! Merits Rewards Catalog Contract
//!
//! Redeemable-item catalog for the Merits protocol. Owns the item map and
//! the identifier counter; the administrator adds, updates, and retires
//! items, and any holder can redeem an active item by burning its cost.
//!
//! Redemption is the one cross-component operation: the catalog invokes
//! `Ledger::burn` as a synchronous sub-operation and only records the
//! redemption if the burn succeeded. A burn failure propagates unchanged
//! and the catalog writes nothing.
//!
//! Items are soft-deleted: retiring flips the status flag and keeps the
//! record, but a retired identifier behaves exactly like one that was
//! never assigned for every external lookup.

use std::collections::BTreeMap;

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use merits_common::{
    constants::catalog,
    errors::{MeritsError, MeritsResult},
    events::{EventLog, MeritsEvent},
    types::{AccountId, Item, ItemId, ItemStatus},
};
use merits_ledger::Ledger;


// ============ Catalog State ============

/// Rewards catalog state
///
/// `next_item_id` starts at [`catalog::FIRST_ITEM_ID`], increments on every
/// successful add, and is never decremented or reused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct Catalog {
    /// Item records by identifier, retired records included
    items: BTreeMap<ItemId, Item>,
    /// Next identifier to assign
    next_item_id: ItemId,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            items: BTreeMap::new(),
            next_item_id: catalog::FIRST_ITEM_ID,
        }
    }

    // ============ Read Operations ============

    /// Identifier the next successful add will assign
    pub fn next_item_id(&self) -> ItemId {
        self.next_item_id
    }

    /// Iterate over all records ever assigned, retired ones included
    pub fn items(&self) -> impl Iterator<Item = (&ItemId, &Item)> {
        self.items.iter()
    }

    /// Look up an active item; absent and retired are both `NotFound`
    pub fn get_item(&self, id: ItemId) -> MeritsResult<&Item> {
        self.active_item(id)
    }

    /// Snapshot of all active items, ascending by identifier
    pub fn list_available_items(&self) -> Vec<Item> {
        self.items
            .values()
            .filter(|item| item.is_available())
            .cloned()
            .collect()
    }

    // ============ Mutating Operations ============

    /// Add a new item and return its identifier. Administrator only.
    ///
    /// Duplicate names are allowed; every add gets a fresh identifier.
    pub fn add_item(
        &mut self,
        ledger: &Ledger,
        caller: AccountId,
        name: String,
        cost: u64,
        events: &mut EventLog,
    ) -> MeritsResult<ItemId> {
        ensure_admin(ledger, caller)?;

        let id = self.next_item_id;
        self.items.insert(id, Item::new(id, name.clone(), cost));
        self.next_item_id += 1;

        events.emit(MeritsEvent::ItemAdded { id, name, cost });

        Ok(id)
    }

    /// Replace an active item's name and cost. Administrator only.
    pub fn update_item(
        &mut self,
        ledger: &Ledger,
        caller: AccountId,
        id: ItemId,
        name: String,
        cost: u64,
        events: &mut EventLog,
    ) -> MeritsResult<()> {
        ensure_admin(ledger, caller)?;
        self.active_item(id)?;

        let item = self.items.get_mut(&id).ok_or(MeritsError::NotFound { item_id: id })?;
        item.name = name.clone();
        item.cost = cost;

        events.emit(MeritsEvent::ItemUpdated { id, name, cost });

        Ok(())
    }

    /// Retire an active item. Administrator only. Terminal: the record is
    /// kept for history but the identifier is excluded from all subsequent
    /// lookups and listings.
    pub fn retire_item(
        &mut self,
        ledger: &Ledger,
        caller: AccountId,
        id: ItemId,
        events: &mut EventLog,
    ) -> MeritsResult<()> {
        ensure_admin(ledger, caller)?;
        self.active_item(id)?;

        let item = self.items.get_mut(&id).ok_or(MeritsError::NotFound { item_id: id })?;
        item.status = ItemStatus::Retired;

        events.emit(MeritsEvent::ItemRemoved { id });

        Ok(())
    }

    /// Redeem an active item: burn its cost from `caller`, then record the
    /// redemption. Any caller with sufficient balance may redeem.
    pub fn redeem(
        &mut self,
        ledger: &mut Ledger,
        caller: AccountId,
        id: ItemId,
        events: &mut EventLog,
    ) -> MeritsResult<()> {
        let cost = self.active_item(id)?.cost;

        ledger.burn(caller, cost, events)?;

        events.emit(MeritsEvent::ItemRedeemed {
            account: caller,
            id,
            cost,
        });

        Ok(())
    }

    // ============ Internal ============

    /// Resolve an identifier to its active record
    fn active_item(&self, id: ItemId) -> MeritsResult<&Item> {
        self.items
            .get(&id)
            .filter(|item| item.is_available())
            .ok_or(MeritsError::NotFound { item_id: id })
    }
}

/// Check that `caller` is the current administrator
fn ensure_admin(ledger: &Ledger, caller: AccountId) -> MeritsResult<()> {
    if !ledger.is_admin(caller) {
        return Err(MeritsError::Unauthorized { caller });
    }
    Ok(())
}

// ============ Tests ============
