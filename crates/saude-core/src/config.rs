//! Connection and pipeline configuration.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variables recognized by [`ConnectionSettings::from_env`].
pub const ENV_DB_HOST: &str = "DB_HOST";
pub const ENV_DB_PORT: &str = "DB_PORT";
pub const ENV_DB_USER: &str = "DB_USER";
pub const ENV_DB_PASSWORD: &str = "DB_PASSWORD";
pub const ENV_DB_NAME: &str = "DB_NAME";

/// Connection parameters for the external relational store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl ConnectionSettings {
    /// Read the five `DB_*` variables from the environment. Absence or
    /// invalidity of any one is an error; the resolver maps it to an
    /// `Unavailable` resolution rather than letting it propagate.
    pub fn from_env() -> CoreResult<Self> {
        let port_raw = required(ENV_DB_PORT)?;
        let port = port_raw.parse::<u16>().map_err(|_| CoreError::InvalidEnv {
            name: ENV_DB_PORT.to_string(),
            value: port_raw,
        })?;

        Ok(Self {
            host: required(ENV_DB_HOST)?,
            port,
            user: required(ENV_DB_USER)?,
            password: required(ENV_DB_PASSWORD)?,
            database: required(ENV_DB_NAME)?,
        })
    }

    /// Postgres DSN for this configuration. Contains the password; never log
    /// this, use [`masked_dsn`](Self::masked_dsn) instead.
    pub fn dsn(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.database
        )
    }

    /// DSN with the password elided, safe for logs and diagnostics.
    pub fn masked_dsn(&self) -> String {
        format!(
            "postgres://{}:****@{}:{}/{}",
            self.user, self.host, self.port, self.database
        )
    }
}

fn required(name: &str) -> CoreResult<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(CoreError::MissingEnv {
            name: name.to_string(),
        }),
    }
}

/// Tuning knobs for the reconciliation pipeline.
///
/// `row_cap` bounds every source query. The historical default of 1000 is a
/// cost-control measure that truncates national coverage (Brazil has ~5570
/// municipalities); raise it deliberately for full deployments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineOptions {
    /// Maximum rows fetched per source query
    #[serde(default = "default_row_cap")]
    pub row_cap: u32,

    /// Per-query timeout in seconds; expiry fails fast into fallback
    #[serde(default = "default_query_timeout_secs")]
    pub query_timeout_secs: u64,

    /// Seed for the synthetic fallback generator
    #[serde(default = "default_fallback_seed")]
    pub fallback_seed: u64,

    /// Number of synthetic municipalities generated on fallback
    #[serde(default = "default_fallback_rows")]
    pub fallback_rows: usize,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            row_cap: default_row_cap(),
            query_timeout_secs: default_query_timeout_secs(),
            fallback_seed: default_fallback_seed(),
            fallback_rows: default_fallback_rows(),
        }
    }
}

impl PipelineOptions {
    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout_secs)
    }
}

fn default_row_cap() -> u32 {
    1000
}

fn default_query_timeout_secs() -> u64 {
    10
}

fn default_fallback_seed() -> u64 {
    42
}

fn default_fallback_rows() -> usize {
    200
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
