//! Check command implementation

use crate::cli::GlobalArgs;
use anyhow::Result;
use saude_db::{resolve, Resolution};

/// Execute the check command: resolve the external store and report the
/// outcome. Unavailability is reported, not fatal: the pipeline would serve
/// fallback data in that state.
pub async fn execute(_global: &GlobalArgs) -> Result<()> {
    match resolve().await {
        Resolution::Available(db) => {
            println!("connection established ({})", db.db_type());
        }
        Resolution::Unavailable { reason } => {
            println!("connection unavailable: {}", reason);
            println!("loads will use synthetic fallback data until DB_* is configured");
        }
    }
    Ok(())
}
