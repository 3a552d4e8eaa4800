//! Postgres database backend implementation

use crate::error::{DbError, DbResult};
use crate::traits::Database;
use async_trait::async_trait;
use saude_core::{
    ConnectionSettings, EconomicRecord, HospitalizationAggregate, PopulationRecord,
    ProcedureAggregate,
};
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::Row;
use std::time::Duration;

/// Explicit casts keep the row shape stable regardless of how the upstream
/// loaders typed each column (int4 vs int8, numeric vs float).
const POPULATION_SQL: &str = "\
SELECT
    codigo_ibge::bigint AS codigo_ibge,
    populacao_total::bigint AS populacao_total,
    populacao_60_mais::bigint AS populacao_60_mais,
    (populacao_60_mais::float8 / populacao_total) * 100 AS percentual_idosos
FROM Censo_20222_Populacao_idade_Sexo
WHERE populacao_total > 0
LIMIT $1";

const ECONOMIC_SQL: &str = "\
SELECT
    codigo_ibge::bigint AS codigo_ibge,
    pib_per_capita::float8 AS pib_per_capita
FROM pib_municipios
LIMIT $1";

const HOSPITALIZATION_SQL: &str = "\
SELECT
    codigo_ibge_municipio::bigint AS codigo_ibge,
    COUNT(*)::bigint AS total_internacoes,
    AVG(valor_aih)::float8 AS valor_medio_internacao
FROM sus_aih
GROUP BY codigo_ibge_municipio
LIMIT $1";

const PROCEDURE_SQL: &str = "\
SELECT
    codigo_ibge_municipio::bigint AS codigo_ibge,
    COUNT(*)::bigint AS total_procedimentos,
    AVG(valor_procedimento)::float8 AS valor_medio_procedimento
FROM sus_procedimento_ambulatorial
GROUP BY codigo_ibge_municipio
LIMIT $1";

/// Postgres database backend over a bounded connection pool.
pub struct PostgresBackend {
    pool: PgPool,
}

impl PostgresBackend {
    /// Connect eagerly so that an unreachable or misconfigured store is
    /// reported at resolution time, not on the first query.
    pub async fn connect(settings: &ConnectionSettings) -> DbResult<Self> {
        log::debug!("connecting to {}", settings.masked_dsn());
        let pool = PgPoolOptions::new()
            .max_connections(4)
            .acquire_timeout(Duration::from_secs(5))
            .connect(&settings.dsn())
            .await
            .map_err(|e| DbError::ConnectionError(e.to_string()))?;
        Ok(Self { pool })
    }

    async fn fetch_rows(&self, sql: &str, cap: u32) -> DbResult<Vec<PgRow>> {
        let rows = sqlx::query(sql)
            .bind(i64::from(cap))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}

fn decode<T>(relation: &str, value: Result<T, sqlx::Error>) -> DbResult<T> {
    value.map_err(|e| DbError::DecodeError {
        relation: relation.to_string(),
        message: e.to_string(),
    })
}

#[async_trait]
impl Database for PostgresBackend {
    async fn fetch_population(&self, cap: u32) -> DbResult<Vec<PopulationRecord>> {
        self.fetch_rows(POPULATION_SQL, cap)
            .await?
            .iter()
            .map(|row| {
                Ok(PopulationRecord {
                    codigo_ibge: decode("censo", row.try_get("codigo_ibge"))?,
                    populacao_total: decode("censo", row.try_get("populacao_total"))?,
                    populacao_60_mais: decode("censo", row.try_get("populacao_60_mais"))?,
                    percentual_idosos: decode("censo", row.try_get("percentual_idosos"))?,
                })
            })
            .collect()
    }

    async fn fetch_economic(&self, cap: u32) -> DbResult<Vec<EconomicRecord>> {
        self.fetch_rows(ECONOMIC_SQL, cap)
            .await?
            .iter()
            .map(|row| {
                Ok(EconomicRecord {
                    codigo_ibge: decode("pib_municipios", row.try_get("codigo_ibge"))?,
                    pib_per_capita: decode("pib_municipios", row.try_get("pib_per_capita"))?,
                })
            })
            .collect()
    }

    async fn fetch_hospitalization(&self, cap: u32) -> DbResult<Vec<HospitalizationAggregate>> {
        self.fetch_rows(HOSPITALIZATION_SQL, cap)
            .await?
            .iter()
            .map(|row| {
                Ok(HospitalizationAggregate {
                    codigo_ibge: decode("sus_aih", row.try_get("codigo_ibge"))?,
                    total_internacoes: decode("sus_aih", row.try_get("total_internacoes"))?,
                    valor_medio_internacao: decode(
                        "sus_aih",
                        row.try_get("valor_medio_internacao"),
                    )?,
                })
            })
            .collect()
    }

    async fn fetch_procedures(&self, cap: u32) -> DbResult<Vec<ProcedureAggregate>> {
        self.fetch_rows(PROCEDURE_SQL, cap)
            .await?
            .iter()
            .map(|row| {
                Ok(ProcedureAggregate {
                    codigo_ibge: decode(
                        "sus_procedimento_ambulatorial",
                        row.try_get("codigo_ibge"),
                    )?,
                    total_procedimentos: decode(
                        "sus_procedimento_ambulatorial",
                        row.try_get("total_procedimentos"),
                    )?,
                    valor_medio_procedimento: decode(
                        "sus_procedimento_ambulatorial",
                        row.try_get("valor_medio_procedimento"),
                    )?,
                })
            })
            .collect()
    }

    fn db_type(&self) -> &'static str {
        "postgres"
    }
}
