//! saude-db - Database abstraction layer for Saúde Municipal
//!
//! This crate provides the `Database` trait over the four source relations,
//! a Postgres implementation, and the environment-driven connection
//! resolver.

pub mod error;
pub mod postgres;
pub mod resolver;
pub mod traits;

pub use error::{DbError, DbResult};
pub use postgres::PostgresBackend;
pub use resolver::{resolve, resolve_with, Resolution};
pub use traits::Database;
