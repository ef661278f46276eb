//! Repository Module
//!
//! Thin SQL layer: free functions over `&SqlitePool` issuing parameterized
//! statements against the `category`, `employee`, `dish` and `setmeal`
//! tables. Business rules live one layer up in [`crate::services`].

pub mod category;
pub mod dish;
pub mod employee;
pub mod setmeal;

#[cfg(test)]
pub(crate) mod test_support;

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    /// Unique-constraint violation (concurrent duplicate insert)
    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db_err) = err
            && db_err.is_unique_violation()
        {
            return RepoError::Duplicate(db_err.to_string());
        }
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Duplicate(msg) => {
                tracing::warn!(target: "database", error = %msg, "Unique constraint violated");
                AppError::new(ErrorCode::AlreadyExists)
            }
            RepoError::Database(msg) => {
                // Internal detail stays in the log; clients get the generic code
                tracing::error!(target: "database", error = %msg, "Database error occurred");
                AppError::new(ErrorCode::DatabaseError)
            }
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
