//! Error Types for the Merits Protocol
//!
//! Typed errors for ledger and catalog operations. Every precondition
//! violation is a hard failure that aborts the operation before any state
//! is written; there is no warning tier and no partial effect.

use crate::types::{AccountId, ItemId};

/// Result type alias for Merits operations
pub type MeritsResult<T> = Result<T, MeritsError>;

/// Main error enum for all Merits protocol errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeritsError {
    /// Caller is not the administrator but attempted an
    /// administrator-only operation
    Unauthorized { caller: AccountId },

    /// Referenced item identifier is absent or retired. The two cases are
    /// deliberately indistinguishable: a retired identifier behaves exactly
    /// like one that was never assigned.
    NotFound { item_id: ItemId },

    /// Caller's balance cannot cover the requested transfer/burn/redeem
    InsufficientBalance { available: u64, requested: u64 },

    /// Invalid amount provided (zero-amount mint is rejected)
    InvalidAmount { amount: u64 },

    /// Supply or a balance would exceed the representable range
    Overflow,
}

impl MeritsError {
    /// Returns a stable error code for logging/debugging
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unauthorized { .. } => "E001_UNAUTHORIZED",
            Self::NotFound { .. } => "E002_NOT_FOUND",
            Self::InsufficientBalance { .. } => "E003_INSUFFICIENT_BALANCE",
            Self::InvalidAmount { .. } => "E004_INVALID_AMOUNT",
            Self::Overflow => "E005_OVERFLOW",
        }
    }

    /// Returns true if the caller can fix the error and retry
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InsufficientBalance { .. } | Self::InvalidAmount { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_error_codes_unique() {
        let errors = [
            MeritsError::Unauthorized { caller: [1u8; 32] },
            MeritsError::NotFound { item_id: 7 },
            MeritsError::InsufficientBalance {
                available: 5,
                requested: 10,
            },
            MeritsError::InvalidAmount { amount: 0 },
            MeritsError::Overflow,
        ];

        let codes: Vec<_> = errors.iter().map(|e| e.code()).collect();
        let unique: BTreeSet<_> = codes.iter().collect();
        assert_eq!(codes.len(), unique.len(), "Error codes must be unique");
    }

    #[test]
    fn test_recoverable() {
        let err = MeritsError::InsufficientBalance {
            available: 0,
            requested: 1,
        };
        assert!(err.is_recoverable());
        assert!(!MeritsError::Overflow.is_recoverable());
    }
}
