//! Common types module for the pedidos client.
//!
//! This module defines the core data types shared by the composition
//! engine and the remote collaborators. It provides a centralized
//! location for shared types to ensure consistency across all crates.

/// Directory entities served by the customer/seller/product lookups.
pub mod directory;
/// Currency formatting and rounding helpers.
pub mod money;
/// Order entities, line items, and the creation wire payload.
pub mod order;
/// Operator roles and their visibility scope.
pub mod role;
/// Order status enumeration and its display metadata.
pub mod status;

// Re-export all types for convenient access
pub use directory::*;
pub use money::{format_currency, round_currency};
pub use order::*;
pub use role::*;
pub use status::*;
