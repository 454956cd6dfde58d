//! Adjustment ledger
//!
//! In-memory state machine for staging stock-count deltas against a working
//! set of selected products and committing them to the backend. All mutation
//! goes through `&mut self` between await points, so no locks are needed;
//! the single-flight submit flag is the only mutual exclusion.

use crate::fallback::fallback_catalog;
use futures::future::join_all;
use shared::{Product, ProductUpdate, product_matches};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;
use stocktake_client::{ClientResult, InventoryApi, SessionProvider, UserInfo};

/// Delay between a successful commit and the workspace reset, so the user
/// sees the confirmation before selections disappear
pub const CONFIRMATION_DELAY: Duration = Duration::from_secs(2);

/// Outcome of the most recent commit, as surfaced to the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitOutcome {
    #[default]
    Idle,
    Success,
    Error,
}

/// Aggregate result of one `commit` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitStatus {
    /// A commit is already in flight; this call was ignored
    Rejected,
    /// No non-zero deltas; nothing was sent
    NothingToSend,
    /// Every update was accepted
    Success { updated: usize },
    /// At least one update failed. Confirmed records were still merged;
    /// selection and deltas are left in place for retry.
    Failed { merged: usize, failed: usize },
}

/// One entry of the ephemeral commit batch, computed fresh at commit time
/// from the live snapshot so staging and submission cannot drift apart.
#[derive(Debug, Clone)]
struct StockChange {
    id: String,
    sku: String,
    requested_stock: i64,
}

/// Clears the submit flag when dropped, so a commit future dropped at its
/// await point (timeout, select) cannot leave the ledger stuck submitting.
struct SubmitGuard<'a>(&'a mut bool);

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

/// Working state for one inventory adjustment session
pub struct AdjustmentLedger {
    api: Arc<dyn InventoryApi>,
    session: Arc<dyn SessionProvider>,
    catalog: Vec<Product>,
    selection: HashSet<String>,
    pending: HashMap<String, i64>,
    submitting: bool,
    outcome: SubmitOutcome,
    degraded: bool,
    load_generation: u64,
    confirmation_delay: Duration,
}

impl AdjustmentLedger {
    pub fn new(api: Arc<dyn InventoryApi>, session: Arc<dyn SessionProvider>) -> Self {
        Self {
            api,
            session,
            catalog: Vec::new(),
            selection: HashSet::new(),
            pending: HashMap::new(),
            submitting: false,
            outcome: SubmitOutcome::default(),
            degraded: false,
            load_generation: 0,
            confirmation_delay: CONFIRMATION_DELAY,
        }
    }

    /// Override the post-success confirmation delay (tests use zero)
    pub fn with_confirmation_delay(mut self, delay: Duration) -> Self {
        self.confirmation_delay = delay;
        self
    }

    // ==================== Catalog loading ====================

    /// Replace the catalog snapshot from the backend, or substitute the
    /// fixed fallback dataset when the fetch fails (degraded mode).
    pub async fn load_catalog(&mut self) {
        self.load_generation += 1;
        let generation = self.load_generation;

        let result = self.api.fetch_inventory().await;
        if generation != self.load_generation {
            // A newer load superseded this one while it was in flight.
            tracing::debug!(generation, "discarding stale catalog load");
            return;
        }

        match result {
            Ok(items) => {
                tracing::info!(count = items.len(), "catalog loaded");
                self.degraded = false;
                self.replace_catalog(items);
            }
            Err(err) => {
                tracing::warn!(error = %err, "catalog load failed, using fallback data");
                self.degraded = true;
                self.replace_catalog(fallback_catalog());
            }
        }
    }

    fn replace_catalog(&mut self, items: Vec<Product>) {
        self.catalog = items;
        // Prune selections that no longer resolve to a catalog entry, and
        // their deltas with them.
        let catalog = &self.catalog;
        self.selection.retain(|id| catalog.iter().any(|p| p.id == *id));
        let selection = &self.selection;
        self.pending.retain(|id, _| selection.contains(id));
    }

    // ==================== Working set ====================

    /// Add a product to the working set. Idempotent: re-selecting keeps the
    /// existing delta. Selecting a product that is not in the catalog
    /// snapshot is a caller-side logic error and is ignored, keeping the
    /// selection a subset of the snapshot at all times.
    pub fn select(&mut self, product: &Product) {
        if !self.catalog.iter().any(|p| p.id == product.id) {
            tracing::warn!(id = %product.id, "select called with id not in catalog, ignoring");
            return;
        }
        if self.selection.insert(product.id.clone()) {
            tracing::debug!(id = %product.id, "product selected");
        }
        self.pending.entry(product.id.clone()).or_insert(0);
    }

    /// Set the pending delta for a selected product (absolute replacement,
    /// not an increment). Calling this for an unselected id is a caller-side
    /// logic error and is ignored.
    ///
    /// No bounds are applied here; a negative final stock passes through to
    /// the backend, which is the authority on validity.
    pub fn adjust(&mut self, id: &str, delta: i64) {
        if !self.selection.contains(id) {
            tracing::warn!(id, "adjust called on unselected id, ignoring");
            return;
        }
        self.pending.insert(id.to_string(), delta);
    }

    /// Drop a product from the working set together with its delta
    pub fn remove(&mut self, id: &str) {
        self.selection.remove(id);
        self.pending.remove(id);
    }

    /// Empty the working set
    pub fn clear_all(&mut self) {
        self.selection.clear();
        self.pending.clear();
    }

    // ==================== Commit ====================

    /// Submit all non-zero pending deltas as one batch.
    ///
    /// Every update is issued concurrently and in flight before any result
    /// is awaited. Confirmed server records are merged into the snapshot
    /// even when sibling updates fail; a failed batch keeps the selection
    /// and deltas so the user can retry without re-entering them.
    pub async fn commit(&mut self) -> CommitStatus {
        if self.submitting {
            tracing::warn!("commit already in flight, ignoring re-entry");
            return CommitStatus::Rejected;
        }

        let batch = self.commit_batch();
        if batch.is_empty() {
            return CommitStatus::NothingToSend;
        }

        self.submitting = true;
        tracing::info!(changes = batch.len(), "submitting stock adjustments");

        // Fan out.
        let api = Arc::clone(&self.api);
        let calls = batch.into_iter().map(|change| {
            let api = Arc::clone(&api);
            async move {
                let update = ProductUpdate::stock(change.requested_stock);
                let result = api.update_stock(&change.sku, &update).await;
                (change, result)
            }
        });
        let settled = {
            let _submitting = SubmitGuard(&mut self.submitting);
            join_all(calls).await
        };

        // Fan in: merge whatever the server confirmed.
        let mut merged = 0usize;
        let mut failed = 0usize;
        for (change, result) in settled {
            match result {
                Ok(record) => {
                    self.merge_record(record);
                    merged += 1;
                }
                Err(err) => {
                    tracing::warn!(id = %change.id, sku = %change.sku, error = %err, "stock update failed");
                    failed += 1;
                }
            }
        }

        if failed > 0 {
            self.outcome = SubmitOutcome::Error;
            return CommitStatus::Failed { merged, failed };
        }

        self.outcome = SubmitOutcome::Success;
        // Let the confirmation linger before the workspace resets.
        tokio::time::sleep(self.confirmation_delay).await;
        self.clear_all();
        self.outcome = SubmitOutcome::Idle;
        CommitStatus::Success { updated: merged }
    }

    /// Build the batch from the live snapshot: one entry per selected id
    /// with a non-zero delta. Ids missing from the snapshot are skipped.
    fn commit_batch(&self) -> Vec<StockChange> {
        self.catalog
            .iter()
            .filter(|p| self.selection.contains(&p.id))
            .filter_map(|product| {
                let delta = self.pending.get(&product.id).copied().unwrap_or(0);
                if delta == 0 {
                    return None;
                }
                Some(StockChange {
                    id: product.id.clone(),
                    sku: product.sku.clone(),
                    requested_stock: product.current_stock + delta,
                })
            })
            .collect()
    }

    fn merge_record(&mut self, record: Product) {
        if let Some(slot) = self.catalog.iter_mut().find(|p| p.id == record.id) {
            tracing::debug!(id = %record.id, stock = record.current_stock, "merged authoritative record");
            *slot = record;
        }
    }

    // ==================== Read surface ====================

    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    pub fn selection(&self) -> &HashSet<String> {
        &self.selection
    }

    /// Pending delta for an id, present iff the id is selected
    pub fn pending_delta(&self, id: &str) -> Option<i64> {
        self.pending.get(id).copied()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn outcome(&self) -> SubmitOutcome {
        self.outcome
    }

    /// True when the catalog came from the local fallback dataset
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// Filtered view of the catalog for the current query. An empty query
    /// yields an empty list, not the whole catalog; hits follow catalog
    /// order.
    pub fn search(&self, query: &str) -> Vec<&Product> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        self.catalog
            .iter()
            .filter(|p| product_matches(query, p))
            .collect()
    }

    /// Selected products with their pending deltas, in catalog order
    pub fn selected_products(&self) -> Vec<(&Product, i64)> {
        self.catalog
            .iter()
            .filter(|p| self.selection.contains(&p.id))
            .map(|p| (p, self.pending.get(&p.id).copied().unwrap_or(0)))
            .collect()
    }

    /// Number of selected products with a non-zero delta
    pub fn pending_change_count(&self) -> usize {
        self.pending.values().filter(|delta| **delta != 0).count()
    }

    // ==================== Session passthrough ====================

    pub fn current_user(&self) -> Option<UserInfo> {
        self.session.current_user()
    }

    pub async fn sign_out(&self) -> ClientResult<()> {
        self.session.sign_out().await
    }
}
