//! PlanStore implementation for PgStorage.

use super::*;

use crate::traits::PlanStore;
use crate::types::PlanSectionContents;
use async_trait::async_trait;

#[async_trait]
impl PlanStore for PgStorage {
    async fn count_plans(&self, user_id: &str) -> Result<u64, StorageError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM business_plans WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(self.pool())
            .await?;
        Ok(count_to_u64(count))
    }

    async fn plans_with_templates(
        &self,
        user_id: &str,
    ) -> Result<Vec<PlanWithTemplate>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {PLAN_TEMPLATE_COLUMNS}
               FROM business_plans p
               LEFT JOIN templates t ON t.id = p.template_id
              WHERE p.user_id = $1
              ORDER BY p.updated_at DESC, p.id"
        ))
        .bind(user_id)
        .fetch_all(self.pool())
        .await?;
        rows.iter().map(row_to_plan_with_template).collect()
    }

    async fn section_contents(&self, plan_id: &str) -> Result<Vec<Option<String>>, StorageError> {
        let contents: Vec<Option<String>> = sqlx::query_scalar(
            "SELECT content FROM plan_sections WHERE business_plan_id = $1 ORDER BY id",
        )
        .bind(plan_id)
        .fetch_all(self.pool())
        .await?;
        Ok(contents)
    }

    async fn section_contents_by_plan(
        &self,
        user_id: &str,
    ) -> Result<Vec<PlanSectionContents>, StorageError> {
        // LEFT JOIN keeps zero-section plans in the result: their single row
        // carries a NULL section id and contributes an empty group.
        let rows = sqlx::query(
            "SELECT p.id AS plan_id, s.id AS section_row_id, s.content
               FROM business_plans p
               LEFT JOIN plan_sections s ON s.business_plan_id = p.id
              WHERE p.user_id = $1
              ORDER BY p.id, s.id",
        )
        .bind(user_id)
        .fetch_all(self.pool())
        .await?;

        let mut grouped: Vec<PlanSectionContents> = Vec::new();
        for row in &rows {
            let plan_id: String = row.try_get("plan_id")?;
            let section_row_id: Option<String> = row.try_get("section_row_id")?;
            let content: Option<String> = row.try_get("content")?;
            if !grouped.last().is_some_and(|g| g.plan_id == plan_id) {
                grouped.push(PlanSectionContents { plan_id, contents: Vec::new() });
            }
            if section_row_id.is_some()
                && let Some(group) = grouped.last_mut()
            {
                group.contents.push(content);
            }
        }
        Ok(grouped)
    }
}
