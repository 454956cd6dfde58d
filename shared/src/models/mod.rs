//! Data models
//!
//! Shared between the backend transport and the adjustment ledger.
//! Wire field names are camelCase to match the backend contract.

pub mod product;

// Re-exports
pub use product::*;
