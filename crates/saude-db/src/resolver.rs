//! Data source resolution.
//!
//! The resolver either hands back a usable database handle or reports
//! unavailability with a human-readable reason. Nothing escapes this
//! boundary: missing environment, a bad port, network or auth failures all
//! become `Resolution::Unavailable`, and the pipeline degrades to synthetic
//! data from there.

use crate::postgres::PostgresBackend;
use crate::traits::Database;
use saude_core::ConnectionSettings;
use std::sync::Arc;

/// Outcome of resolving the external relational store.
pub enum Resolution {
    /// A usable handle, shared across reconciliation calls.
    Available(Arc<dyn Database>),
    /// No usable store; `reason` is shown to the user alongside the
    /// fallback-data status.
    Unavailable { reason: String },
}

impl Resolution {
    pub fn is_available(&self) -> bool {
        matches!(self, Resolution::Available(_))
    }

    /// The diagnostic for an unavailable resolution.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Resolution::Available(_) => None,
            Resolution::Unavailable { reason } => Some(reason),
        }
    }
}

/// Resolve from the `DB_*` environment variables.
pub async fn resolve() -> Resolution {
    match ConnectionSettings::from_env() {
        Ok(settings) => resolve_with(&settings).await,
        Err(e) => {
            log::warn!("connection settings incomplete: {e}");
            Resolution::Unavailable {
                reason: e.to_string(),
            }
        }
    }
}

/// Resolve from explicit settings.
pub async fn resolve_with(settings: &ConnectionSettings) -> Resolution {
    match PostgresBackend::connect(settings).await {
        Ok(backend) => {
            log::info!("connected to {}", settings.masked_dsn());
            Resolution::Available(Arc::new(backend))
        }
        Err(e) => {
            log::warn!("could not reach {}: {e}", settings.masked_dsn());
            Resolution::Unavailable {
                reason: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
#[path = "resolver_test.rs"]
mod tests;
