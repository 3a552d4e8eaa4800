//! In-memory `Database` fake for pipeline tests.

use async_trait::async_trait;
use saude_core::{EconomicRecord, HospitalizationAggregate, PopulationRecord, ProcedureAggregate};
use saude_db::{Database, DbError, DbResult};
use std::time::Duration;

/// A canned-response database. Optionally fails every fetch or sleeps before
/// answering (for timeout tests).
#[derive(Default)]
pub struct FakeDatabase {
    pub population: Vec<PopulationRecord>,
    pub economic: Vec<EconomicRecord>,
    pub hospitalization: Vec<HospitalizationAggregate>,
    pub procedures: Vec<ProcedureAggregate>,
    pub fail_with: Option<String>,
    pub delay: Option<Duration>,
}

impl FakeDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_population(mut self, rows: Vec<PopulationRecord>) -> Self {
        self.population = rows;
        self
    }

    pub fn with_economic(mut self, rows: Vec<EconomicRecord>) -> Self {
        self.economic = rows;
        self
    }

    pub fn with_hospitalization(mut self, rows: Vec<HospitalizationAggregate>) -> Self {
        self.hospitalization = rows;
        self
    }

    pub fn with_procedures(mut self, rows: Vec<ProcedureAggregate>) -> Self {
        self.procedures = rows;
        self
    }

    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    async fn gate(&self) -> DbResult<()> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.fail_with {
            Some(message) => Err(DbError::QueryError(message.clone())),
            None => Ok(()),
        }
    }
}

pub fn pop(codigo: i64, total: i64, idosos: i64) -> PopulationRecord {
    PopulationRecord {
        codigo_ibge: codigo,
        populacao_total: total,
        populacao_60_mais: idosos,
        percentual_idosos: idosos as f64 / total as f64 * 100.0,
    }
}

#[async_trait]
impl Database for FakeDatabase {
    async fn fetch_population(&self, _cap: u32) -> DbResult<Vec<PopulationRecord>> {
        self.gate().await?;
        Ok(self.population.clone())
    }

    async fn fetch_economic(&self, _cap: u32) -> DbResult<Vec<EconomicRecord>> {
        self.gate().await?;
        Ok(self.economic.clone())
    }

    async fn fetch_hospitalization(&self, _cap: u32) -> DbResult<Vec<HospitalizationAggregate>> {
        self.gate().await?;
        Ok(self.hospitalization.clone())
    }

    async fn fetch_procedures(&self, _cap: u32) -> DbResult<Vec<ProcedureAggregate>> {
        self.gate().await?;
        Ok(self.procedures.clone())
    }

    fn db_type(&self) -> &'static str {
        "fake"
    }
}
