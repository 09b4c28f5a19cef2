use async_trait::async_trait;

use crate::error::StorageError;
use crate::types::ActivityWithPlanTitle;

/// Read access to the append-only activity log.
#[async_trait]
pub trait ActivityStore: Send + Sync {
    /// Count of the user's activities with the given type.
    async fn count_by_type(
        &self,
        user_id: &str,
        activity_type: &str,
    ) -> Result<u64, StorageError>;

    /// The user's most recent activities joined with the owning plan's
    /// title, newest first, capped at `limit`.
    async fn recent_with_plan_title(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<ActivityWithPlanTitle>, StorageError>;
}
