//! Shared output helpers for CLI commands

use saude_core::{region_means, summarize, MunicipalityTable, TableSummary};
use saude_pipeline::ReconcileOutcome;
use serde::Serialize;

/// JSON payload for `load --output json`. Mirrors the pipeline's status
/// side channel: a table plus `real_data` and an optional diagnostic.
#[derive(Debug, Serialize)]
pub(crate) struct LoadReport {
    pub real_data: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<String>,
    pub municipios_totais: usize,
    pub municipios_filtrados: usize,
    pub summary: TableSummary,
    pub correlacao_idosos_internacoes: Option<f64>,
    pub correlacao_pib_gasto: Option<f64>,
    pub rows: MunicipalityTable,
}

/// The status line is always printed, never silently omitted: the reader
/// must be able to tell real data from synthetic.
pub(crate) fn print_status(outcome: &ReconcileOutcome) {
    match outcome.diagnostic() {
        None => println!("status: real data loaded from the external store"),
        Some(reason) => println!("status: fallback data in use ({})", reason),
    }
}

pub(crate) fn print_summary(table: &MunicipalityTable) {
    let summary = summarize(table);
    println!();
    println!("municipios:           {}", summary.municipios);
    println!(
        "populacao media:      {}",
        fmt_opt(summary.populacao_media, 0)
    );
    println!(
        "% idosos medio:       {}",
        fmt_opt(summary.percentual_idosos_medio, 1)
    );
    println!(
        "pib per capita medio: {}",
        fmt_opt(summary.pib_per_capita_medio, 0)
    );
}

pub(crate) fn print_region_means(table: &MunicipalityTable) {
    let means = region_means(table);
    if means.is_empty() {
        return;
    }
    println!();
    println!(
        "{:<14} {:>10} {:>12} {:>12} {:>12}",
        "regiao", "municipios", "% idosos", "int/1000", "proc/1000"
    );
    for (regiao, summary) in means {
        println!(
            "{:<14} {:>10} {:>12} {:>12} {:>12}",
            regiao.to_string(),
            summary.municipios,
            fmt_opt(summary.percentual_idosos_medio, 1),
            fmt_opt(summary.internacoes_por_1000_media, 1),
            fmt_opt(summary.procedimentos_por_1000_media, 1),
        );
    }
}

pub(crate) fn print_preview(table: &MunicipalityTable, limit: usize) {
    if table.is_empty() || limit == 0 {
        return;
    }
    println!();
    println!(
        "{:>10} {:>12} {:>9} {:>10} {:>9} {:>10}",
        "codigo", "populacao", "% idosos", "pib/hab", "int/1000", "gasto/hab"
    );
    for row in table.iter().take(limit) {
        println!(
            "{:>10} {:>12} {:>9.1} {:>10} {:>9} {:>10}",
            row.codigo_ibge,
            row.populacao_total,
            row.percentual_idosos,
            fmt_opt(row.pib_per_capita, 0),
            fmt_opt(row.internacoes_por_1000, 1),
            fmt_opt(row.gasto_internacao_per_capita, 2),
        );
    }
    if table.len() > limit {
        println!("... {} more rows", table.len() - limit);
    }
}

/// Format an optional value with fixed decimals, "-" when absent.
pub(crate) fn fmt_opt(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => format!("{:.*}", decimals, v),
        None => "-".to_string(),
    }
}

pub(crate) fn fmt_corr(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:+.3}", v),
        None => "n/a".to_string(),
    }
}
