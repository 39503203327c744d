//! Merits Ledger Contract
//!
//! Fungible points ledger for the Merits protocol. Owns the account balance
//! map and the total supply counter; only the ledger ever writes balances.
//! The administrator mints new supply; any holder can transfer or burn.
//!
//! All mutating operations are atomic: every precondition is checked before
//! the first state write, so a failed call leaves the ledger untouched. The
//! environment serializes mutating calls and drains the event log after each
//! success.

use std::collections::BTreeMap;

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use merits_common::{
    constants::token,
    errors::{MeritsError, MeritsResult},
    events::{EventLog, MeritsEvent},
    types::AccountId,
};

// ============ Ledger State ============

/// Points ledger state
///
/// Invariant: the sum of all balances equals `total_supply` at all times.
/// An account absent from the map holds a zero balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct Ledger {
    /// Administrator account, the only caller allowed to mint
    admin: AccountId,
    /// Account balances; absence means zero
    balances: BTreeMap<AccountId, u64>,
    /// Total points in circulation
    total_supply: u64,
}

// NOTE: Default intentionally not implemented; a ledger must be created
// with an explicit administrator.

impl Ledger {
    /// Create an empty ledger with the given administrator
    pub fn new(admin: AccountId) -> Self {
        Self {
            admin,
            balances: BTreeMap::new(),
            total_supply: 0,
        }
    }

    // ============ Read Operations ============

    /// Current administrator account
    pub fn admin(&self) -> AccountId {
        self.admin
    }

    /// Check whether `caller` is the administrator
    pub fn is_admin(&self, caller: AccountId) -> bool {
        caller == self.admin
    }

    /// Total points in circulation
    pub fn total_supply(&self) -> u64 {
        self.total_supply
    }

    /// Balance of an account; an account never credited holds zero
    pub fn balance_of(&self, account: AccountId) -> u64 {
        self.balances.get(&account).copied().unwrap_or(0)
    }

    /// Iterate over all recorded accounts and their balances
    pub fn accounts(&self) -> impl Iterator<Item = (&AccountId, &u64)> {
        self.balances.iter()
    }

    /// Get token name
    pub fn name() -> &'static str {
        token::NAME
    }

    /// Get token symbol
    pub fn symbol() -> &'static str {
        token::SYMBOL
    }

    /// Get token decimals (zero: whole units only)
    pub fn decimals() -> u8 {
        token::DECIMALS
    }

    // ============ Mutating Operations ============

    /// Mint `amount` new points to `to`, increasing total supply.
    ///
    /// Administrator only. Zero-amount mints are rejected; an amount that
    /// would push the supply or the target balance past `u64::MAX` fails
    /// with `Overflow` instead of wrapping.
    pub fn mint(
        &mut self,
        caller: AccountId,
        to: AccountId,
        amount: u64,
        events: &mut EventLog,
    ) -> MeritsResult<()> {
        if caller != self.admin {
            return Err(MeritsError::Unauthorized { caller });
        }
        if amount == 0 {
            return Err(MeritsError::InvalidAmount { amount });
        }

        let new_supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(MeritsError::Overflow)?;
        let new_balance = self
            .balance_of(to)
            .checked_add(amount)
            .ok_or(MeritsError::Overflow)?;

        self.total_supply = new_supply;
        self.balances.insert(to, new_balance);

        events.emit(MeritsEvent::PointsMinted {
            to,
            amount,
            new_total_supply: new_supply,
        });

        Ok(())
    }

    /// Transfer `amount` points from `caller` to `to`; supply unchanged.
    ///
    /// A self-transfer is legal: the balance precondition is still checked
    /// and an event emitted, but balances stay as they are.
    pub fn transfer(
        &mut self,
        caller: AccountId,
        to: AccountId,
        amount: u64,
        events: &mut EventLog,
    ) -> MeritsResult<()> {
        let available = self.balance_of(caller);
        if available < amount {
            return Err(MeritsError::InsufficientBalance {
                available,
                requested: amount,
            });
        }

        if caller != to {
            let new_receiver = self
                .balance_of(to)
                .checked_add(amount)
                .ok_or(MeritsError::Overflow)?;
            self.balances.insert(caller, available - amount);
            self.balances.insert(to, new_receiver);
        }

        events.emit(MeritsEvent::PointsTransferred {
            from: caller,
            to,
            amount,
        });

        Ok(())
    }

    /// Destroy `amount` points from `caller`, decreasing total supply.
    pub fn burn(
        &mut self,
        caller: AccountId,
        amount: u64,
        events: &mut EventLog,
    ) -> MeritsResult<()> {
        let available = self.balance_of(caller);
        if available < amount {
            return Err(MeritsError::InsufficientBalance {
                available,
                requested: amount,
            });
        }

        self.balances.insert(caller, available - amount);
        self.total_supply -= amount;

        events.emit(MeritsEvent::PointsBurned {
            from: caller,
            amount,
            new_total_supply: self.total_supply,
        });

        Ok(())
    }
}

// ============ Tests ============

#[cfg(test)]
mod tests {
    use super::*;
    use merits_common::events::EventType;

    const ADMIN: AccountId = [1u8; 32];
    const ALICE: AccountId = [2u8; 32];
    const BOB: AccountId = [3u8; 32];

    fn assert_supply_invariant(ledger: &Ledger) {
        let sum: u64 = ledger.accounts().map(|(_, balance)| *balance).sum();
        assert_eq!(sum, ledger.total_supply(), "sum(balances) != total_supply");
    }

    #[test]
    fn test_mint_success() {
        let mut ledger = Ledger::new(ADMIN);
        let mut events = EventLog::new();

        ledger.mint(ADMIN, ALICE, 100, &mut events).unwrap();

        assert_eq!(ledger.balance_of(ALICE), 100);
        assert_eq!(ledger.total_supply(), 100);
        assert_supply_invariant(&ledger);
        assert_eq!(
            events.events(),
            &[MeritsEvent::PointsMinted {
                to: ALICE,
                amount: 100,
                new_total_supply: 100,
            }]
        );
    }

    #[test]
    fn test_mint_unauthorized() {
        let mut ledger = Ledger::new(ADMIN);
        let mut events = EventLog::new();

        let result = ledger.mint(ALICE, ALICE, 100, &mut events);

        assert_eq!(result, Err(MeritsError::Unauthorized { caller: ALICE }));
        assert_eq!(ledger.total_supply(), 0);
        assert!(events.is_empty());
    }

    #[test]
    fn test_mint_zero_rejected() {
        let mut ledger = Ledger::new(ADMIN);
        let mut events = EventLog::new();

        let result = ledger.mint(ADMIN, ALICE, 0, &mut events);

        assert_eq!(result, Err(MeritsError::InvalidAmount { amount: 0 }));
        assert!(events.is_empty());
    }

    #[test]
    fn test_mint_overflow() {
        let mut ledger = Ledger::new(ADMIN);
        let mut events = EventLog::new();

        ledger.mint(ADMIN, ALICE, u64::MAX, &mut events).unwrap();
        let result = ledger.mint(ADMIN, BOB, 1, &mut events);

        assert_eq!(result, Err(MeritsError::Overflow));
        assert_eq!(ledger.total_supply(), u64::MAX);
        assert_eq!(ledger.balance_of(BOB), 0);
        assert_supply_invariant(&ledger);
    }

    #[test]
    fn test_transfer_success() {
        let mut ledger = Ledger::new(ADMIN);
        let mut events = EventLog::new();

        ledger.mint(ADMIN, ALICE, 100, &mut events).unwrap();
        ledger.transfer(ALICE, BOB, 30, &mut events).unwrap();

        assert_eq!(ledger.balance_of(ALICE), 70);
        assert_eq!(ledger.balance_of(BOB), 30);
        assert_eq!(ledger.total_supply(), 100);
        assert_supply_invariant(&ledger);
    }

    #[test]
    fn test_transfer_insufficient_balance() {
        let mut ledger = Ledger::new(ADMIN);
        let mut events = EventLog::new();

        ledger.mint(ADMIN, ALICE, 10, &mut events).unwrap();
        let result = ledger.transfer(ALICE, BOB, 11, &mut events);

        assert_eq!(
            result,
            Err(MeritsError::InsufficientBalance {
                available: 10,
                requested: 11,
            })
        );
        assert_eq!(ledger.balance_of(ALICE), 10);
        assert_eq!(ledger.balance_of(BOB), 0);
    }

    #[test]
    fn test_transfer_from_unknown_account() {
        let mut ledger = Ledger::new(ADMIN);
        let mut events = EventLog::new();

        let result = ledger.transfer(ALICE, BOB, 1, &mut events);

        assert_eq!(
            result,
            Err(MeritsError::InsufficientBalance {
                available: 0,
                requested: 1,
            })
        );
    }

    #[test]
    fn test_self_transfer() {
        let mut ledger = Ledger::new(ADMIN);
        let mut events = EventLog::new();

        ledger.mint(ADMIN, ALICE, 50, &mut events).unwrap();
        ledger.transfer(ALICE, ALICE, 20, &mut events).unwrap();

        assert_eq!(ledger.balance_of(ALICE), 50);
        assert_eq!(ledger.total_supply(), 50);
        assert_eq!(events.filter_by_type(EventType::PointsTransferred).len(), 1);

        // Precondition still applies to self-transfers
        let result = ledger.transfer(ALICE, ALICE, 51, &mut events);
        assert!(matches!(
            result,
            Err(MeritsError::InsufficientBalance { .. })
        ));
    }

    #[test]
    fn test_burn_success() {
        let mut ledger = Ledger::new(ADMIN);
        let mut events = EventLog::new();

        ledger.mint(ADMIN, ALICE, 5, &mut events).unwrap();
        ledger.burn(ALICE, 5, &mut events).unwrap();

        assert_eq!(ledger.balance_of(ALICE), 0);
        assert_eq!(ledger.total_supply(), 0);
        assert_supply_invariant(&ledger);

        let result = ledger.burn(ALICE, 1, &mut events);
        assert_eq!(
            result,
            Err(MeritsError::InsufficientBalance {
                available: 0,
                requested: 1,
            })
        );
    }

    #[test]
    fn test_burn_partial() {
        let mut ledger = Ledger::new(ADMIN);
        let mut events = EventLog::new();

        ledger.mint(ADMIN, ALICE, 100, &mut events).unwrap();
        ledger.burn(ALICE, 40, &mut events).unwrap();

        assert_eq!(ledger.balance_of(ALICE), 60);
        assert_eq!(ledger.total_supply(), 60);
        assert_eq!(
            events.events().last(),
            Some(&MeritsEvent::PointsBurned {
                from: ALICE,
                amount: 40,
                new_total_supply: 60,
            })
        );
    }

    #[test]
    fn test_balance_of_absent_is_zero() {
        let ledger = Ledger::new(ADMIN);
        assert_eq!(ledger.balance_of(ALICE), 0);
    }

    #[test]
    fn test_token_metadata() {
        assert_eq!(Ledger::name(), "Merit Points");
        assert_eq!(Ledger::symbol(), "MERIT");
        assert_eq!(Ledger::decimals(), 0);
    }

    #[test]
    fn test_state_snapshot_roundtrip() {
        let mut ledger = Ledger::new(ADMIN);
        let mut events = EventLog::new();
        ledger.mint(ADMIN, ALICE, 100, &mut events).unwrap();
        ledger.transfer(ALICE, BOB, 25, &mut events).unwrap();

        let mut buf = Vec::new();
        ciborium::into_writer(&ledger, &mut buf).unwrap();
        let restored: Ledger = ciborium::from_reader(buf.as_slice()).unwrap();

        assert_eq!(ledger, restored);
        assert_eq!(restored.balance_of(BOB), 25);
    }
}
