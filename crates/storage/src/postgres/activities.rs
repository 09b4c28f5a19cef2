//! ActivityStore implementation for PgStorage.

use super::*;

use crate::traits::ActivityStore;
use async_trait::async_trait;

#[async_trait]
impl ActivityStore for PgStorage {
    async fn count_by_type(
        &self,
        user_id: &str,
        activity_type: &str,
    ) -> Result<u64, StorageError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM user_activities WHERE user_id = $1 AND activity_type = $2",
        )
        .bind(user_id)
        .bind(activity_type)
        .fetch_one(self.pool())
        .await?;
        Ok(count_to_u64(count))
    }

    async fn recent_with_plan_title(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<ActivityWithPlanTitle>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {ACTIVITY_COLUMNS}, p.title AS plan_title
               FROM user_activities a
               LEFT JOIN business_plans p ON p.id = a.business_plan_id
              WHERE a.user_id = $1
              ORDER BY a.created_at DESC
              LIMIT $2"
        ))
        .bind(user_id)
        .bind(usize_to_i64(limit))
        .fetch_all(self.pool())
        .await?;
        rows.iter().map(row_to_activity_with_title).collect()
    }
}
