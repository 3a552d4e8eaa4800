//! Load command implementation

use crate::cli::{GlobalArgs, LoadArgs, OutputFormat};
use crate::commands::common::{
    fmt_corr, print_preview, print_region_means, print_status, print_summary, LoadReport,
};
use crate::context::SessionContext;
use anyhow::{bail, Result};
use saude_core::{correlation, summarize, FilterSpec};

/// Execute the load command: reconcile through the session cache, narrow the
/// table with the requested filters, and print metrics or JSON.
pub async fn execute(args: &LoadArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = SessionContext::new(global).await;
    let outcome = ctx.load().await;
    ctx.verbose(&format!(
        "reconciled {} municipalities (real_data = {})",
        outcome.table().len(),
        outcome.is_real()
    ));

    let filter = filter_from_args(args)?;
    let filtered = filter.apply(outcome.table());

    let corr_idosos_internacoes = correlation(
        &filtered,
        |r| Some(r.percentual_idosos),
        |r| r.internacoes_por_1000,
    );
    let corr_pib_gasto = correlation(
        &filtered,
        |r| r.pib_per_capita,
        |r| r.gasto_internacao_per_capita,
    );

    match args.output {
        OutputFormat::Json => {
            let report = LoadReport {
                real_data: outcome.is_real(),
                diagnostic: outcome.diagnostic().map(String::from),
                municipios_totais: outcome.table().len(),
                municipios_filtrados: filtered.len(),
                summary: summarize(&filtered),
                correlacao_idosos_internacoes: corr_idosos_internacoes,
                correlacao_pib_gasto: corr_pib_gasto,
                rows: filtered,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Table => {
            print_status(&outcome);
            print_summary(&filtered);
            println!();
            println!(
                "corr(% idosos, internacoes/1000):   {}",
                fmt_corr(corr_idosos_internacoes)
            );
            println!(
                "corr(pib per capita, gasto/hab):    {}",
                fmt_corr(corr_pib_gasto)
            );
            print_region_means(&filtered);
            print_preview(&filtered, args.limit);
        }
    }
    Ok(())
}

fn filter_from_args(args: &LoadArgs) -> Result<FilterSpec> {
    Ok(FilterSpec {
        regioes: (!args.regioes.is_empty()).then(|| args.regioes.iter().copied().collect()),
        faixa_idosos: range_from(args.idosos.as_deref(), "--idosos")?,
        faixa_pib: range_from(args.pib.as_deref(), "--pib")?,
    })
}

fn range_from(bounds: Option<&[f64]>, flag: &str) -> Result<Option<(f64, f64)>> {
    match bounds {
        None => Ok(None),
        Some([lo, hi]) => {
            if lo > hi {
                bail!("{flag}: MIN ({lo}) must not exceed MAX ({hi})");
            }
            Ok(Some((*lo, *hi)))
        }
        // clap's num_args = 2 enforces arity; anything else is a bug here.
        Some(other) => bail!("{flag}: expected exactly two values, got {}", other.len()),
    }
}
