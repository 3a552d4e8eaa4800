//! Domain records keyed by `codigo_ibge`.
//!
//! The four source records mirror the external relations consumed by the
//! reconciliation pipeline; `MunicipalityRow` is their left-joined union plus
//! the derived per-capita indicators. All derivation goes through
//! [`derive_indicators`] so the real path and the synthetic generator cannot
//! drift apart.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One row of `Censo_20222_Populacao_idade_Sexo`, restricted at the source to
/// `populacao_total > 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopulationRecord {
    pub codigo_ibge: i64,
    pub populacao_total: i64,
    pub populacao_60_mais: i64,
    /// Computed in the source query: `populacao_60_mais / populacao_total * 100`
    pub percentual_idosos: f64,
}

/// One row of `pib_municipios`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EconomicRecord {
    pub codigo_ibge: i64,
    pub pib_per_capita: f64,
}

/// Per-municipality aggregate over `sus_aih` (hospital admissions).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HospitalizationAggregate {
    pub codigo_ibge: i64,
    pub total_internacoes: i64,
    pub valor_medio_internacao: f64,
}

/// Per-municipality aggregate over `sus_procedimento_ambulatorial`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcedureAggregate {
    pub codigo_ibge: i64,
    pub total_procedimentos: i64,
    pub valor_medio_procedimento: f64,
}

/// Brazilian macro-region. Present on synthetic rows; the real source schema
/// carries no region column, so reconciled rows from the database leave it
/// unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Region {
    Norte,
    Nordeste,
    Sudeste,
    Sul,
    #[serde(rename = "Centro-Oeste")]
    CentroOeste,
}

impl Region {
    /// The five regions, in stable order.
    pub const ALL: [Region; 5] = [
        Region::Norte,
        Region::Nordeste,
        Region::Sudeste,
        Region::Sul,
        Region::CentroOeste,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Region::Norte => "Norte",
            Region::Nordeste => "Nordeste",
            Region::Sudeste => "Sudeste",
            Region::Sul => "Sul",
            Region::CentroOeste => "Centro-Oeste",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "norte" => Ok(Region::Norte),
            "nordeste" => Ok(Region::Nordeste),
            "sudeste" => Ok(Region::Sudeste),
            "sul" => Ok(Region::Sul),
            "centro-oeste" | "centrooeste" => Ok(Region::CentroOeste),
            other => Err(format!(
                "unknown region '{}', expected one of: norte, nordeste, sudeste, sul, centro-oeste",
                other
            )),
        }
    }
}

/// The reconciled analytical row: population left-joined with the economic,
/// hospitalization, and procedure relations. Fields from a relation with no
/// matching `codigo_ibge` are `None`, and `None` propagates into the derived
/// indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MunicipalityRow {
    pub codigo_ibge: i64,
    pub municipio: Option<String>,
    pub regiao: Option<Region>,
    pub populacao_total: i64,
    pub populacao_60_mais: i64,
    pub percentual_idosos: f64,
    pub pib_per_capita: Option<f64>,
    pub total_internacoes: Option<i64>,
    pub valor_medio_internacao: Option<f64>,
    pub total_procedimentos: Option<i64>,
    pub valor_medio_procedimento: Option<f64>,
    pub internacoes_por_1000: Option<f64>,
    pub procedimentos_por_1000: Option<f64>,
    pub gasto_internacao_per_capita: Option<f64>,
}

/// Derived per-capita indicators for one municipality.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedIndicators {
    pub percentual_idosos: f64,
    pub internacoes_por_1000: Option<f64>,
    pub procedimentos_por_1000: Option<f64>,
    pub gasto_internacao_per_capita: Option<f64>,
}

/// Compute the derived indicators for one municipality.
///
/// `populacao_total` must be positive; the source query guarantees it, and a
/// violation is reported instead of producing `inf`/`NaN`:
///
/// - `percentual_idosos = populacao_60_mais / populacao_total * 100`
/// - `internacoes_por_1000 = total_internacoes / populacao_total * 1000`
/// - `procedimentos_por_1000 = total_procedimentos / populacao_total * 1000`
/// - `gasto_internacao_per_capita = total_internacoes * valor_medio_internacao / populacao_total`
///
/// A `None` input yields `None` for every indicator that depends on it.
pub fn derive_indicators(
    codigo_ibge: i64,
    populacao_total: i64,
    populacao_60_mais: i64,
    total_internacoes: Option<i64>,
    valor_medio_internacao: Option<f64>,
    total_procedimentos: Option<i64>,
) -> CoreResult<DerivedIndicators> {
    if populacao_total <= 0 {
        return Err(CoreError::NonPositivePopulation {
            codigo_ibge,
            value: populacao_total,
        });
    }
    let pop = populacao_total as f64;

    let internacoes_por_1000 = total_internacoes.map(|n| n as f64 / pop * 1000.0);
    let procedimentos_por_1000 = total_procedimentos.map(|n| n as f64 / pop * 1000.0);
    let gasto_internacao_per_capita = match (total_internacoes, valor_medio_internacao) {
        (Some(n), Some(medio)) => Some(n as f64 * medio / pop),
        _ => None,
    };

    Ok(DerivedIndicators {
        percentual_idosos: populacao_60_mais as f64 / pop * 100.0,
        internacoes_por_1000,
        procedimentos_por_1000,
        gasto_internacao_per_capita,
    })
}

#[cfg(test)]
#[path = "record_test.rs"]
mod tests;
