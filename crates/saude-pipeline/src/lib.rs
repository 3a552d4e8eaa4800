//! saude-pipeline - Reconciliation pipeline for Saúde Municipal
//!
//! Given a resolved data source (or none), the pipeline produces one
//! canonical analytical table: the left-joined union of the four source
//! relations with derived per-capita indicators, or a deterministic
//! synthetic equivalent when the store is unavailable or any step fails.
//! Failures never cross the pipeline boundary: callers always receive a
//! table plus an explicit real-vs-fallback outcome.

pub mod cache;
pub mod error;
pub mod fallback;
pub mod join;
pub mod reconcile;

#[cfg(test)]
pub(crate) mod testutil;

pub use cache::ReconcileCache;
pub use error::{PipelineError, PipelineResult};
pub use fallback::synthesize;
pub use join::join_sources;
pub use reconcile::{ReconcileOutcome, Reconciler};
