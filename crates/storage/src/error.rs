//! Typed error enum for the storage layer.
//!
//! All storage traits return `StorageError` instead of `anyhow::Result`,
//! so callers can match on specific failure modes (transient DB errors vs.
//! migration failures) instead of downcasting opaque boxes.

use thiserror::Error;

/// Storage-layer error. Every read path is idempotent, so callers may
/// retry transient failures with backoff.
#[derive(Debug, Error)]
pub enum StorageError {
    /// SQL / connection / timeout / row-decode failure.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration failure at connect time.
    #[error("migration error: {0}")]
    Migration(String),
}

impl StorageError {
    /// Whether this error is likely transient (worth retrying).
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Database(sqlx::Error::PoolTimedOut | sqlx::Error::Io(_)))
    }
}
