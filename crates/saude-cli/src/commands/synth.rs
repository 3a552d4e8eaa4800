//! Synth command implementation

use crate::cli::{GlobalArgs, OutputFormat, SynthArgs};
use crate::commands::common::{print_preview, print_region_means, print_summary};
use anyhow::Result;
use saude_pipeline::synthesize;

/// Execute the synth command: run the fallback generator directly, without
/// touching the external store.
pub async fn execute(args: &SynthArgs, _global: &GlobalArgs) -> Result<()> {
    let table = synthesize(args.seed, args.rows);
    log::debug!("synthesized {} rows from seed {}", table.len(), args.seed);

    match args.output {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&table)?);
        }
        OutputFormat::Table => {
            println!(
                "synthetic table: seed {}, {} municipalities",
                args.seed,
                table.len()
            );
            print_summary(&table);
            print_region_means(&table);
            print_preview(&table, args.limit);
        }
    }
    Ok(())
}
