use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::progress::{PlanStatus, is_completed_content};

/// A business plan owned by one user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessPlan {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    pub template_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Catalog entry describing one possible part of a plan
/// (e.g. "Executive Summary"). Shared across plans.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
}

/// Binding of a catalog section to a specific plan, holding the
/// user-authored content for that section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSection {
    pub id: String,
    pub business_plan_id: String,
    pub section_id: String,
    pub content: Option<String>,
}

impl PlanSection {
    /// A section is completed when its content is non-null and non-empty.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        is_completed_content(self.content.as_deref())
    }
}

/// Plan row joined with its template catalog entry.
///
/// Template fields are `None` when the plan has no template or the
/// referenced template was deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanWithTemplate {
    pub plan: BusinessPlan,
    pub template_name: Option<String>,
    pub template_description: Option<String>,
}

/// One entry of the per-plan list view: plan fields, joined template
/// metadata, and the computed progress.
#[derive(Debug, Clone, Serialize)]
pub struct PlanOverview {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub template_id: Option<String>,
    pub template_name: Option<String>,
    pub template_description: Option<String>,
    pub progress_percent: u8,
    pub status: PlanStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Per-user summary statistics across all plans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UserStats {
    pub total_plans: u64,
    pub completed_plans: u64,
    pub ai_generations: u64,
    pub avg_completion: u8,
}
