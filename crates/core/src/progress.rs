//! Plan completion math.

use serde::{Deserialize, Serialize};

/// Completion status of a plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    Completed,
    InProgress,
}

impl PlanStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::InProgress => "in_progress",
        }
    }
}

/// Computed progress of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlanProgress {
    pub percent: u8,
    pub status: PlanStatus,
}

/// A section counts as completed when its content is non-null and non-empty.
/// An empty string is incomplete.
#[must_use]
pub fn is_completed_content(content: Option<&str>) -> bool {
    content.is_some_and(|c| !c.is_empty())
}

/// Compute a plan's progress from its section contents.
///
/// `percent = round(100 × completed / total)`, rounded half-up
/// (`f64::round`, half away from zero — all inputs are non-negative).
/// A plan with no sections is 0% and never completed; otherwise the plan
/// is completed exactly when every section is.
#[must_use]
pub fn compute_progress(contents: &[Option<String>]) -> PlanProgress {
    let total = contents.len();
    if total == 0 {
        return PlanProgress { percent: 0, status: PlanStatus::InProgress };
    }
    let completed = contents.iter().filter(|c| is_completed_content(c.as_deref())).count();
    #[allow(clippy::cast_precision_loss, reason = "section counts are tiny")]
    #[allow(clippy::cast_possible_truncation, reason = "result is within 0..=100")]
    #[allow(clippy::cast_sign_loss, reason = "result is within 0..=100")]
    let percent = (completed as f64 / total as f64 * 100.0).round() as u8;
    let status = if percent == 100 { PlanStatus::Completed } else { PlanStatus::InProgress };
    PlanProgress { percent, status }
}
