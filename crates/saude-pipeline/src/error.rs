//! Error types for saude-pipeline

use saude_db::DbError;
use thiserror::Error;

/// Pipeline failures. All of them are contained at the reconcile boundary:
/// every variant degrades to fallback synthesis with its message as the
/// diagnostic.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Query failure (P001)
    #[error("[P001] {0}")]
    Query(#[from] DbError),

    /// Query timeout (P002)
    #[error("[P002] Query against {relation} timed out after {seconds}s")]
    Timeout { relation: &'static str, seconds: u64 },

    /// Data shape violation (P003): duplicate join keys or an invalid
    /// population reaching indicator derivation.
    #[error("[P003] Data shape violation: {0}")]
    DataShape(String),
}

/// Result type alias for PipelineError
pub type PipelineResult<T> = Result<T, PipelineError>;

impl From<saude_core::CoreError> for PipelineError {
    fn from(err: saude_core::CoreError) -> Self {
        PipelineError::DataShape(err.to_string())
    }
}
