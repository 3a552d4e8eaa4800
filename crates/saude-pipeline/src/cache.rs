//! Read-through cache for reconciliation outcomes.
//!
//! The reconciled table is produced once per session and reused. The cache
//! is owned by whatever context owns the resolver and pipeline; there is no
//! process-wide state. Entries are keyed by the identity of the connection
//! handle, so re-resolving the store yields a fresh computation while
//! repeated loads over the same handle hit the cache. Reconciliation is
//! cheap and idempotent; if two tasks race, one result simply wins the map
//! slot and both observe a consistent outcome.

use crate::reconcile::{ReconcileOutcome, Reconciler};
use saude_db::Resolution;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum CacheKey {
    /// Pointer identity of the connection handle.
    Handle(usize),
    /// All unavailable resolutions share one slot: the synthetic table and
    /// its status banner stay stable for the whole session.
    Unavailable,
}

impl CacheKey {
    fn for_source(source: &Resolution) -> Self {
        match source {
            Resolution::Available(db) => CacheKey::Handle(Arc::as_ptr(db) as *const () as usize),
            Resolution::Unavailable { .. } => CacheKey::Unavailable,
        }
    }
}

/// Session-scoped outcome cache.
#[derive(Default)]
pub struct ReconcileCache {
    entries: Mutex<HashMap<CacheKey, Arc<ReconcileOutcome>>>,
}

impl ReconcileCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached outcome for this source, reconciling on first use.
    pub async fn get_or_reconcile(
        &self,
        reconciler: &Reconciler,
        source: &Resolution,
    ) -> Arc<ReconcileOutcome> {
        let key = CacheKey::for_source(source);
        if let Some(hit) = self.entries.lock().unwrap().get(&key) {
            return Arc::clone(hit);
        }

        // Computed outside the lock; a concurrent duplicate is harmless and
        // the first insert wins.
        let outcome = Arc::new(reconciler.reconcile(source).await);
        Arc::clone(
            self.entries
                .lock()
                .unwrap()
                .entry(key)
                .or_insert(outcome),
        )
    }

    /// Drop every cached outcome (e.g. after re-resolving the store).
    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
#[path = "cache_test.rs"]
mod tests;
