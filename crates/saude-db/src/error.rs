//! Error types for saude-db

use thiserror::Error;

/// Database operation errors
#[derive(Error, Debug)]
pub enum DbError {
    /// Connection error (D001)
    #[error("[D001] Database connection failed: {0}")]
    ConnectionError(String),

    /// Query execution error (D002)
    #[error("[D002] Query failed: {0}")]
    QueryError(String),

    /// Row decoding error (D003)
    #[error("[D003] Could not decode row from {relation}: {message}")]
    DecodeError { relation: String, message: String },
}

/// Result type alias for DbError
pub type DbResult<T> = Result<T, DbError>;

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        DbError::QueryError(err.to_string())
    }
}
