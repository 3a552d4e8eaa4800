//! Presentation-layer filter contract.
//!
//! Filtering is a pure operation over the reconciled table: the pipeline
//! always produces the full (capped) universe of municipalities and the
//! consumer narrows it. Bounds are inclusive. A row whose filtered field is
//! absent passes the corresponding bound: a missing indicator cannot be
//! excluded by a range, and the full-range filter stays an identity on
//! tables containing unmatched left-join rows.

use crate::record::{MunicipalityRow, Region};
use crate::table::MunicipalityTable;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Region membership plus inclusive ranges over `percentual_idosos` and
/// `pib_per_capita`. `None` means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    #[serde(default)]
    pub regioes: Option<BTreeSet<Region>>,

    #[serde(default)]
    pub faixa_idosos: Option<(f64, f64)>,

    #[serde(default)]
    pub faixa_pib: Option<(f64, f64)>,
}

impl FilterSpec {
    /// A spec with no constraints; applying it is the identity.
    pub fn unconstrained() -> Self {
        Self::default()
    }

    /// The widest spec expressible from the table's observed values: every
    /// present region and the full observed range of each bound.
    pub fn full_range(table: &MunicipalityTable) -> Self {
        let regioes = table.regioes_presentes();
        Self {
            regioes: (!regioes.is_empty()).then_some(regioes),
            faixa_idosos: table.percentual_idosos_bounds(),
            faixa_pib: table.pib_per_capita_bounds(),
        }
    }

    /// Apply the filter, producing a new table. Row order is preserved.
    pub fn apply(&self, table: &MunicipalityTable) -> MunicipalityTable {
        MunicipalityTable::new(
            table
                .iter()
                .filter(|row| self.matches(row))
                .cloned()
                .collect(),
        )
    }

    fn matches(&self, row: &MunicipalityRow) -> bool {
        if let (Some(allowed), Some(regiao)) = (&self.regioes, row.regiao) {
            if !allowed.contains(&regiao) {
                return false;
            }
        }
        if let Some((lo, hi)) = self.faixa_idosos {
            if row.percentual_idosos < lo || row.percentual_idosos > hi {
                return false;
            }
        }
        if let (Some((lo, hi)), Some(pib)) = (self.faixa_pib, row.pib_per_capita) {
            if pib < lo || pib > hi {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;
