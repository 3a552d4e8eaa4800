//! Error types for saude-core

use thiserror::Error;

/// Core error type for Saúde Municipal
#[derive(Error, Debug)]
pub enum CoreError {
    /// C001: Required environment variable is not set
    #[error("[C001] Missing environment variable: {name}")]
    MissingEnv { name: String },

    /// C002: Environment variable is set but unusable
    #[error("[C002] Invalid value for {name}: {value}")]
    InvalidEnv { name: String, value: String },

    /// C003: A row reached indicator derivation with a non-positive population.
    /// The upstream query filters these out; seeing one means the source
    /// contract was violated and the division must not proceed.
    #[error(
        "[C003] populacao_total must be positive, got {value} for municipality {codigo_ibge}"
    )]
    NonPositivePopulation { codigo_ibge: i64, value: i64 },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
