use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Append-only log entry of a user action. Written by other subsystems;
/// planforge only reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserActivity {
    pub id: String,
    pub user_id: String,
    pub business_plan_id: String,
    pub activity_type: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// One entry of the recent-activity feed, with the owning plan's title
/// denormalized in. The title falls back to "Unknown" when the referenced
/// plan no longer exists.
#[derive(Debug, Clone, Serialize)]
pub struct ActivityEntry {
    pub id: String,
    pub activity_type: String,
    pub description: Option<String>,
    pub business_plan_title: String,
    pub created_at: DateTime<Utc>,
}
