//! Typed error enum for the service layer.

use planforge_storage::StorageError;
use thiserror::Error;

/// Service-layer error for the dashboard projections.
///
/// Every projection is aggregate-or-nothing: a storage failure mid-way
/// discards the partial result and surfaces here.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A read failed while combining plan and section facts (stats or
    /// plan list); the partial computation is discarded.
    #[error("aggregation failed: {0}")]
    Aggregation(#[source] StorageError),

    /// A read failed while assembling the activity feed.
    #[error("activity feed fetch failed: {0}")]
    FeedFetch(#[source] StorageError),

    /// Caller provided invalid input (blank user id).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl ServiceError {
    /// Whether this error is likely transient (worth retrying).
    /// All underlying reads are idempotent.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Aggregation(e) | Self::FeedFetch(e) => e.is_transient(),
            Self::InvalidInput(_) => false,
        }
    }
}
