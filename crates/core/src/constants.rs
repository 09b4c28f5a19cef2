//! Shared constants for planforge.
//!
//! Centralizes magic numbers so they are not duplicated across crates.

/// Number of entries returned by the recent-activity feed.
pub const ACTIVITY_FEED_LIMIT: usize = 10;

/// Activity type logged when AI content generation runs for a plan.
pub const ACTIVITY_AI_GENERATION: &str = "ai_generation";

/// Fallback title shown when an activity references a deleted plan.
pub const UNKNOWN_PLAN_TITLE: &str = "Unknown";

/// PostgreSQL connection pool: maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 20;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;
