//! Response types (Serialize)
//!
//! Wire shapes are camelCase; conversions from the core view models keep
//! the handlers to plain `.into()` calls.

use chrono::{DateTime, Utc};
use serde::Serialize;

use planforge_core::{ActivityEntry, PlanOverview, PlanStatus, UserStats};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_plans: u64,
    pub completed_plans: u64,
    pub ai_generations: u64,
    pub avg_completion: u8,
}

impl From<UserStats> for StatsResponse {
    fn from(stats: UserStats) -> Self {
        Self {
            total_plans: stats.total_plans,
            completed_plans: stats.completed_plans,
            ai_generations: stats.ai_generations,
            avg_completion: stats.avg_completion,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanView {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub template_id: Option<String>,
    pub template_name: Option<String>,
    pub template_description: Option<String>,
    pub progress_percent: u8,
    pub status: PlanStatus,
}

impl From<PlanOverview> for PlanView {
    fn from(plan: PlanOverview) -> Self {
        Self {
            id: plan.id,
            title: plan.title,
            description: plan.description,
            created_at: plan.created_at,
            updated_at: plan.updated_at,
            template_id: plan.template_id,
            template_name: plan.template_name,
            template_description: plan.template_description,
            progress_percent: plan.progress_percent,
            status: plan.status,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityView {
    pub id: String,
    #[serde(rename = "type")]
    pub activity_type: String,
    pub description: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub business_plan_title: String,
}

impl From<ActivityEntry> for ActivityView {
    fn from(entry: ActivityEntry) -> Self {
        Self {
            id: entry.id,
            activity_type: entry.activity_type,
            description: entry.description,
            timestamp: entry.created_at,
            business_plan_title: entry.business_plan_title,
        }
    }
}

#[derive(Debug, Serialize)]
#[non_exhaustive]
pub struct ReadinessResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

#[derive(Debug, Serialize)]
#[non_exhaustive]
pub struct VersionResponse {
    pub version: &'static str,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_response_camel_case_keys() {
        let body = serde_json::to_value(StatsResponse {
            total_plans: 2,
            completed_plans: 1,
            ai_generations: 3,
            avg_completion: 70,
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "totalPlans": 2,
                "completedPlans": 1,
                "aiGenerations": 3,
                "avgCompletion": 70,
            })
        );
    }

    #[test]
    fn test_activity_view_uses_type_and_timestamp_keys() {
        let entry = ActivityEntry {
            id: "a1".to_owned(),
            activity_type: "ai_generation".to_owned(),
            description: None,
            business_plan_title: "Unknown".to_owned(),
            created_at: Utc::now(),
        };
        let body = serde_json::to_value(ActivityView::from(entry)).unwrap();
        assert_eq!(body["type"], "ai_generation");
        assert_eq!(body["businessPlanTitle"], "Unknown");
        assert!(body.get("timestamp").is_some());
        assert!(body.get("activityType").is_none());
    }
}
