//! Runtime context for CLI commands

use crate::cli::GlobalArgs;
use saude_core::PipelineOptions;
use saude_db::{resolve, Resolution};
use saude_pipeline::{ReconcileCache, ReconcileOutcome, Reconciler};
use std::sync::Arc;

/// Session-scoped wiring: one resolution, one reconciler, one outcome cache.
/// Constructed per invocation and passed by reference to consumers; the
/// cache lives here, not in any process-wide singleton.
pub struct SessionContext {
    pub resolution: Resolution,
    reconciler: Reconciler,
    cache: ReconcileCache,
    verbose: bool,
}

impl SessionContext {
    pub async fn new(global: &GlobalArgs) -> Self {
        let options = PipelineOptions {
            row_cap: global.row_cap,
            query_timeout_secs: global.timeout_secs,
            ..PipelineOptions::default()
        };
        let resolution = resolve().await;
        Self {
            resolution,
            reconciler: Reconciler::new(options),
            cache: ReconcileCache::new(),
            verbose: global.verbose,
        }
    }

    /// Reconcile through the session cache.
    pub async fn load(&self) -> Arc<ReconcileOutcome> {
        self.cache
            .get_or_reconcile(&self.reconciler, &self.resolution)
            .await
    }

    /// Print verbose output if enabled
    pub fn verbose(&self, msg: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", msg);
        }
    }
}
