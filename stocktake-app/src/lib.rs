//! Stocktake App - adjustment ledger core
//!
//! Holds the in-memory working set of selected products and their pending
//! stock deltas, and commits them against the backend with fan-out/fan-in
//! semantics. Catalog loads fall back to a fixed local dataset when the
//! backend is unreachable (degraded mode).

pub mod fallback;
pub mod ledger;

// Re-exports
pub use fallback::{FALLBACK_CATALOG_SIZE, fallback_catalog};
pub use ledger::{AdjustmentLedger, CONFIRMATION_DELAY, CommitStatus, SubmitOutcome};
