//! Shared types for the Stocktake inventory tool
//!
//! Domain models and the approximate text matcher used by both the
//! transport client and the adjustment ledger.

pub mod models;
pub mod search;

// Re-exports
pub use models::{Product, ProductUpdate};
pub use search::{fuzzy_match, product_matches};
pub use serde::{Deserialize, Serialize};
