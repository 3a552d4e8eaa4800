//! The reconciliation entry point.

use crate::error::{PipelineError, PipelineResult};
use crate::fallback::synthesize;
use crate::join::join_sources;
use saude_core::{MunicipalityTable, PipelineOptions};
use saude_db::{Database, DbResult, Resolution};
use std::future::Future;

/// The table plus which path produced it. Callers must match on the outcome
/// to learn whether real data loaded; there is no way to obtain the table
/// while ignoring the status.
#[derive(Debug, Clone, PartialEq)]
pub enum ReconcileOutcome {
    /// Reconciled from the external store.
    Real(MunicipalityTable),
    /// Synthetic data; `reason` says why the real path was not taken.
    Fallback {
        table: MunicipalityTable,
        reason: String,
    },
}

impl ReconcileOutcome {
    pub fn table(&self) -> &MunicipalityTable {
        match self {
            ReconcileOutcome::Real(table) => table,
            ReconcileOutcome::Fallback { table, .. } => table,
        }
    }

    pub fn into_table(self) -> MunicipalityTable {
        match self {
            ReconcileOutcome::Real(table) => table,
            ReconcileOutcome::Fallback { table, .. } => table,
        }
    }

    pub fn is_real(&self) -> bool {
        matches!(self, ReconcileOutcome::Real(_))
    }

    /// The fallback diagnostic; `None` when real data loaded.
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            ReconcileOutcome::Real(_) => None,
            ReconcileOutcome::Fallback { reason, .. } => Some(reason),
        }
    }
}

/// Runs the reconciliation pipeline: four bounded source queries, a left
/// join on `codigo_ibge`, and indicator derivation, or deterministic
/// synthesis when the store is unavailable or any step fails.
pub struct Reconciler {
    options: PipelineOptions,
}

impl Reconciler {
    pub fn new(options: PipelineOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    /// Produce the analytical table. Total: every failure inside the
    /// pipeline degrades to `Fallback` with a diagnostic; nothing is raised
    /// to the caller.
    pub async fn reconcile(&self, source: &Resolution) -> ReconcileOutcome {
        match source {
            Resolution::Unavailable { reason } => {
                let reason = format!("external store unavailable: {reason}");
                log::warn!("{reason}; serving synthetic data");
                self.fallback(reason)
            }
            Resolution::Available(db) => match self.load_real(db.as_ref()).await {
                Ok(table) => {
                    log::info!(
                        "reconciled {} municipalities from {}",
                        table.len(),
                        db.db_type()
                    );
                    ReconcileOutcome::Real(table)
                }
                Err(e) => {
                    let reason = e.to_string();
                    log::warn!("reconciliation failed: {reason}; serving synthetic data");
                    self.fallback(reason)
                }
            },
        }
    }

    async fn load_real(&self, db: &dyn Database) -> PipelineResult<MunicipalityTable> {
        let cap = self.options.row_cap;
        log::debug!("fetching source relations (cap {cap})");

        let population = self.bounded("censo", db.fetch_population(cap)).await?;
        let economic = self.bounded("pib_municipios", db.fetch_economic(cap)).await?;
        let hospitalization = self.bounded("sus_aih", db.fetch_hospitalization(cap)).await?;
        let procedures = self
            .bounded("sus_procedimento_ambulatorial", db.fetch_procedures(cap))
            .await?;

        join_sources(population, economic, hospitalization, procedures)
    }

    /// Apply the per-query timeout: fail fast into fallback instead of
    /// hanging on a stuck store.
    async fn bounded<T>(
        &self,
        relation: &'static str,
        fetch: impl Future<Output = DbResult<T>>,
    ) -> PipelineResult<T> {
        match tokio::time::timeout(self.options.query_timeout(), fetch).await {
            Ok(result) => Ok(result?),
            Err(_) => Err(PipelineError::Timeout {
                relation,
                seconds: self.options.query_timeout_secs,
            }),
        }
    }

    fn fallback(&self, reason: String) -> ReconcileOutcome {
        ReconcileOutcome::Fallback {
            table: synthesize(self.options.fallback_seed, self.options.fallback_rows),
            reason,
        }
    }
}

#[cfg(test)]
#[path = "reconcile_test.rs"]
mod tests;
