//! The reconciled municipality table.

use crate::record::{MunicipalityRow, Region};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// An in-memory table of reconciled municipality rows, in source order.
///
/// Produced once per session by the reconciliation pipeline and consumed
/// read-only by filters, statistics, and the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MunicipalityTable {
    rows: Vec<MunicipalityRow>,
}

impl MunicipalityTable {
    pub fn new(rows: Vec<MunicipalityRow>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[MunicipalityRow] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MunicipalityRow> {
        self.rows.iter()
    }

    /// Observed min/max of `percentual_idosos`, or `None` for an empty table.
    pub fn percentual_idosos_bounds(&self) -> Option<(f64, f64)> {
        min_max(self.rows.iter().map(|r| r.percentual_idosos))
    }

    /// Observed min/max of `pib_per_capita` over rows where it is present.
    pub fn pib_per_capita_bounds(&self) -> Option<(f64, f64)> {
        min_max(self.rows.iter().filter_map(|r| r.pib_per_capita))
    }

    /// The distinct regions present, in stable order.
    pub fn regioes_presentes(&self) -> BTreeSet<Region> {
        self.rows.iter().filter_map(|r| r.regiao).collect()
    }
}

impl IntoIterator for MunicipalityTable {
    type Item = MunicipalityRow;
    type IntoIter = std::vec::IntoIter<MunicipalityRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a MunicipalityTable {
    type Item = &'a MunicipalityRow;
    type IntoIter = std::slice::Iter<'a, MunicipalityRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let mut bounds: Option<(f64, f64)> = None;
    for v in values {
        if v.is_nan() {
            continue;
        }
        bounds = match bounds {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        };
    }
    bounds
}

#[cfg(test)]
#[path = "table_test.rs"]
mod tests;
