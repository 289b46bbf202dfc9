//! Errors produced by the data access layer.

use thiserror::Error;

/// Failure of a single data access operation.
///
/// Every store-level fault (connectivity, constraint violation, query
/// execution) is caught at the repository boundary and surfaced as a
/// `StoreError`. Absence of a row is never an error: it is reported as
/// `Ok(None)` or a zero affected-row count.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}
