//! Protocol Constants
//!
//! Fixed configuration values for the Merits protocol.

/// Token Metadata
pub mod token {
    /// Token name
    pub const NAME: &str = "Merit Points";
    /// Token symbol
    pub const SYMBOL: &str = "MERIT";
    /// Decimal places. Merit points are whole units only; there is no
    /// fractional subdivision.
    pub const DECIMALS: u8 = 0;
    /// One whole unit in base units
    pub const ONE: u64 = 1;
}

/// Catalog Configuration
pub mod catalog {
    /// First item identifier handed out by the catalog. Identifiers are
    /// assigned sequentially from here and never reused.
    pub const FIRST_ITEM_ID: u64 = 1;
}
