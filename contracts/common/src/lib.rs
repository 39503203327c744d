//! Merits Common Library
//!
//! Shared types, constants, errors, and events for the Merits protocol:
//! a fungible points ledger paired with a redeemable rewards catalog.
//!
//! The protocol core is a pure in-memory state machine. The surrounding
//! execution environment authenticates the caller for every operation,
//! serializes mutating calls, durably commits state after each success,
//! and forwards emitted events to external observers.
//!
//! This crate is `no_std` compatible for embedded/WASM builds when the
//! `std` feature is disabled.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Re-export collection types for submodules based on feature
#[cfg(not(feature = "std"))]
pub use alloc::{string::String, vec::Vec};
#[cfg(feature = "std")]
pub use std::{string::String, vec::Vec};

pub mod constants;
pub mod errors;
pub mod events;
pub mod types;

// Re-exports for convenience
pub use constants::*;
pub use errors::*;
pub use events::*;
pub use types::*;
