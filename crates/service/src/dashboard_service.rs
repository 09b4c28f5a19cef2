use std::sync::Arc;

use planforge_core::{
    ACTIVITY_AI_GENERATION, ACTIVITY_FEED_LIMIT, ActivityEntry, PlanOverview, PlanProgress,
    PlanStatus, UNKNOWN_PLAN_TITLE, UserStats, compute_progress,
};
use planforge_storage::DataStore;

use crate::ServiceError;

/// Stateless per-request projections over the data store.
///
/// Each method runs a small sequence of read-only fetches with no snapshot
/// isolation: a write landing between two fetches of one computation can
/// skew that one response (accepted read-skew tradeoff, recomputed fresh on
/// the next request).
pub struct DashboardService {
    storage: Arc<dyn DataStore>,
}

impl DashboardService {
    #[must_use]
    pub fn new(storage: Arc<dyn DataStore>) -> Self {
        Self { storage }
    }

    /// Summary statistics across all of the user's plans.
    ///
    /// Section contents come back in one joined query grouped per plan, so
    /// the completed count and the average share a single read. Any fetch
    /// failure aborts the whole call; partial stats are never returned.
    pub async fn stats(&self, user_id: &str) -> Result<UserStats, ServiceError> {
        validate_user_id(user_id)?;

        let total_plans =
            self.storage.count_plans(user_id).await.map_err(ServiceError::Aggregation)?;
        let per_plan = self
            .storage
            .section_contents_by_plan(user_id)
            .await
            .map_err(ServiceError::Aggregation)?;

        let progress: Vec<PlanProgress> =
            per_plan.iter().map(|p| compute_progress(&p.contents)).collect();
        let completed_plans =
            progress.iter().filter(|p| p.status == PlanStatus::Completed).count() as u64;
        let avg_completion = average_percent(&progress);

        let ai_generations = self
            .storage
            .count_by_type(user_id, ACTIVITY_AI_GENERATION)
            .await
            .map_err(ServiceError::Aggregation)?;

        tracing::debug!(user_id, total_plans, completed_plans, avg_completion, "computed stats");
        Ok(UserStats { total_plans, completed_plans, ai_generations, avg_completion })
    }

    /// The user's plans, newest update first, each with joined template
    /// metadata and computed progress.
    ///
    /// Sections are fetched per plan (N+1 pattern, kept for per-plan
    /// grouping fidelity); a failure on any plan aborts the entire call.
    /// A missing template yields `None` fields, not an error.
    pub async fn plan_list(&self, user_id: &str) -> Result<Vec<PlanOverview>, ServiceError> {
        validate_user_id(user_id)?;

        let plans =
            self.storage.plans_with_templates(user_id).await.map_err(ServiceError::Aggregation)?;

        let mut overviews = Vec::with_capacity(plans.len());
        for entry in plans {
            let contents = self
                .storage
                .section_contents(&entry.plan.id)
                .await
                .map_err(ServiceError::Aggregation)?;
            let progress = compute_progress(&contents);
            overviews.push(PlanOverview {
                id: entry.plan.id,
                title: entry.plan.title,
                description: entry.plan.description,
                template_id: entry.plan.template_id,
                template_name: entry.template_name,
                template_description: entry.template_description,
                progress_percent: progress.percent,
                status: progress.status,
                created_at: entry.plan.created_at,
                updated_at: entry.plan.updated_at,
            });
        }
        Ok(overviews)
    }

    /// The user's most recent activities, newest first, capped at the feed
    /// limit. An activity whose plan was deleted keeps the "Unknown" title.
    pub async fn recent_activities(
        &self,
        user_id: &str,
    ) -> Result<Vec<ActivityEntry>, ServiceError> {
        validate_user_id(user_id)?;

        let rows = self
            .storage
            .recent_with_plan_title(user_id, ACTIVITY_FEED_LIMIT)
            .await
            .map_err(ServiceError::FeedFetch)?;

        Ok(rows
            .into_iter()
            .map(|row| ActivityEntry {
                id: row.activity.id,
                activity_type: row.activity.activity_type,
                description: row.activity.description,
                business_plan_title: row
                    .plan_title
                    .unwrap_or_else(|| UNKNOWN_PLAN_TITLE.to_owned()),
                created_at: row.activity.created_at,
            })
            .collect())
    }
}

fn validate_user_id(user_id: &str) -> Result<(), ServiceError> {
    if user_id.trim().is_empty() {
        return Err(ServiceError::InvalidInput("userId must not be empty".to_owned()));
    }
    Ok(())
}

/// Rounded (half-up) mean of per-plan percentages. Zero-section plans
/// contribute 0; zero plans yield 0.
fn average_percent(progress: &[PlanProgress]) -> u8 {
    if progress.is_empty() {
        return 0;
    }
    let sum: u32 = progress.iter().map(|p| u32::from(p.percent)).sum();
    #[allow(clippy::cast_precision_loss, reason = "plan counts are tiny")]
    #[allow(clippy::cast_possible_truncation, reason = "mean of 0..=100 values")]
    #[allow(clippy::cast_sign_loss, reason = "mean of 0..=100 values")]
    let avg = (f64::from(sum) / progress.len() as f64).round() as u8;
    avg
}
