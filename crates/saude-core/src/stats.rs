//! Descriptive statistics over the reconciled table.
//!
//! These are consumers of the table, not part of the pipeline: the dashboard
//! headline metrics, the Pearson correlations shown next to the scatter
//! plots, and the per-region means. All means skip absent values.

use crate::record::{MunicipalityRow, Region};
use crate::table::MunicipalityTable;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Headline metrics for a (possibly filtered) table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSummary {
    pub municipios: usize,
    pub populacao_media: Option<f64>,
    pub percentual_idosos_medio: Option<f64>,
    pub pib_per_capita_medio: Option<f64>,
}

/// Per-region means over the indicator columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionSummary {
    pub municipios: usize,
    pub percentual_idosos_medio: Option<f64>,
    pub internacoes_por_1000_media: Option<f64>,
    pub procedimentos_por_1000_media: Option<f64>,
}

pub fn summarize(table: &MunicipalityTable) -> TableSummary {
    TableSummary {
        municipios: table.len(),
        populacao_media: mean(table.iter().map(|r| Some(r.populacao_total as f64))),
        percentual_idosos_medio: mean(table.iter().map(|r| Some(r.percentual_idosos))),
        pib_per_capita_medio: mean(table.iter().map(|r| r.pib_per_capita)),
    }
}

/// Pearson correlation coefficient between two columns, over the rows where
/// both are present. `None` with fewer than two complete pairs or when either
/// column has zero variance.
pub fn correlation<X, Y>(table: &MunicipalityTable, x: X, y: Y) -> Option<f64>
where
    X: Fn(&MunicipalityRow) -> Option<f64>,
    Y: Fn(&MunicipalityRow) -> Option<f64>,
{
    let pairs: Vec<(f64, f64)> = table
        .iter()
        .filter_map(|row| Some((x(row)?, y(row)?)))
        .collect();
    pearson(&pairs)
}

fn pearson(pairs: &[(f64, f64)]) -> Option<f64> {
    let n = pairs.len();
    if n < 2 {
        return None;
    }
    let nf = n as f64;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / nf;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / nf;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }
    Some(cov / (var_x * var_y).sqrt())
}

/// Group-by-region means. Rows without a region are omitted; an empty map
/// means the table carries no region information at all.
pub fn region_means(table: &MunicipalityTable) -> BTreeMap<Region, RegionSummary> {
    let mut groups: BTreeMap<Region, Vec<&MunicipalityRow>> = BTreeMap::new();
    for row in table {
        if let Some(regiao) = row.regiao {
            groups.entry(regiao).or_default().push(row);
        }
    }

    groups
        .into_iter()
        .map(|(regiao, rows)| {
            let summary = RegionSummary {
                municipios: rows.len(),
                percentual_idosos_medio: mean(rows.iter().map(|r| Some(r.percentual_idosos))),
                internacoes_por_1000_media: mean(rows.iter().map(|r| r.internacoes_por_1000)),
                procedimentos_por_1000_media: mean(rows.iter().map(|r| r.procedimentos_por_1000)),
            };
            (regiao, summary)
        })
        .collect()
}

fn mean(values: impl Iterator<Item = Option<f64>>) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for v in values.flatten() {
        sum += v;
        count += 1;
    }
    (count > 0).then(|| sum / count as f64)
}

#[cfg(test)]
#[path = "stats_test.rs"]
mod tests;
