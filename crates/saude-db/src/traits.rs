//! Database trait definition

use crate::error::DbResult;
use async_trait::async_trait;
use saude_core::{EconomicRecord, HospitalizationAggregate, PopulationRecord, ProcedureAggregate};

/// Read-only access to the four source relations.
///
/// Every fetch is bounded by `cap` as a cost-control measure; the pipeline
/// owns the cap value. Queries are fixed projections/aggregations with no
/// user-supplied predicates; filtering happens downstream on the reconciled
/// table. Implementations must be Send + Sync for async operation.
#[async_trait]
pub trait Database: Send + Sync {
    /// Census population rows with `populacao_total > 0`, including the
    /// source-computed `percentual_idosos`.
    async fn fetch_population(&self, cap: u32) -> DbResult<Vec<PopulationRecord>>;

    /// Municipal PIB per capita.
    async fn fetch_economic(&self, cap: u32) -> DbResult<Vec<EconomicRecord>>;

    /// Hospital admissions aggregated per municipality: count + mean cost.
    async fn fetch_hospitalization(&self, cap: u32) -> DbResult<Vec<HospitalizationAggregate>>;

    /// Ambulatory procedures aggregated per municipality: count + mean cost.
    async fn fetch_procedures(&self, cap: u32) -> DbResult<Vec<ProcedureAggregate>>;

    /// Backend identifier for logging
    fn db_type(&self) -> &'static str;
}
