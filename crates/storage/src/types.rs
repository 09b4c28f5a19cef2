//! Row-group types returned by the storage traits.

use planforge_core::UserActivity;

/// Section contents of one plan, grouped by the owning plan.
///
/// `contents` holds the raw per-section content column; a plan with no
/// sections has an empty vector (it still appears in grouped results).
#[derive(Debug, Clone)]
pub struct PlanSectionContents {
    pub plan_id: String,
    pub contents: Vec<Option<String>>,
}

/// Activity row joined with the owning plan's title.
///
/// `plan_title` is `None` when the referenced plan was deleted; the
/// service layer applies the "Unknown" fallback.
#[derive(Debug, Clone)]
pub struct ActivityWithPlanTitle {
    pub activity: UserActivity,
    pub plan_title: Option<String>,
}
