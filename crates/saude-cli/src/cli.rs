//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};
use saude_core::Region;

/// Saúde Municipal - reconcile municipal public-health data and inspect the
/// PNAHP/PNAES indicators
#[derive(Parser, Debug)]
#[command(name = "saude")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Maximum rows fetched per source query (the historical default of 1000
    /// truncates national coverage)
    #[arg(long, global = true, default_value_t = 1000)]
    pub row_cap: u32,

    /// Per-query timeout in seconds; expiry falls back to synthetic data
    #[arg(long, global = true, default_value_t = 10)]
    pub timeout_secs: u64,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Test the connection to the external store
    Check,

    /// Reconcile the analytical table, apply filters, and print metrics
    Load(LoadArgs),

    /// Run the synthetic generator directly
    Synth(SynthArgs),
}

/// Arguments for the load command
#[derive(Args, Debug)]
pub struct LoadArgs {
    /// Restrict to a region (repeatable; default: all)
    #[arg(long = "regiao", value_name = "REGIAO")]
    pub regioes: Vec<Region>,

    /// Inclusive range of % population aged 60+
    #[arg(long, num_args = 2, value_names = ["MIN", "MAX"])]
    pub idosos: Option<Vec<f64>>,

    /// Inclusive range of PIB per capita (R$)
    #[arg(long, num_args = 2, value_names = ["MIN", "MAX"])]
    pub pib: Option<Vec<f64>>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: OutputFormat,

    /// Rows shown in the table preview
    #[arg(long, default_value_t = 10)]
    pub limit: usize,
}

/// Arguments for the synth command
#[derive(Args, Debug)]
pub struct SynthArgs {
    /// Generator seed
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Number of synthetic municipalities
    #[arg(long, default_value_t = 200)]
    pub rows: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: OutputFormat,

    /// Rows shown in the table preview
    #[arg(long, default_value_t = 10)]
    pub limit: usize,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Table,
    /// Machine-readable JSON
    Json,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
