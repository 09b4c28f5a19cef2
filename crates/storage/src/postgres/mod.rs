//! PostgreSQL storage backend using sqlx.
//!
//! Split into modular files by domain concern.

#![allow(
    clippy::arithmetic_side_effects,
    reason = "DB row counts are bounded by PostgreSQL limits"
)]

mod activities;
mod plans;

use chrono::{DateTime, Utc};
use planforge_core::{
    BusinessPlan, PG_POOL_ACQUIRE_TIMEOUT_SECS, PG_POOL_IDLE_TIMEOUT_SECS, PG_POOL_MAX_CONNECTIONS,
    PlanWithTemplate, UserActivity,
};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};

use crate::error::StorageError;
use crate::migrations::run_migrations;
use crate::types::ActivityWithPlanTitle;

#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(PG_POOL_MAX_CONNECTIONS)
            .acquire_timeout(std::time::Duration::from_secs(PG_POOL_ACQUIRE_TIMEOUT_SECS))
            .idle_timeout(std::time::Duration::from_secs(PG_POOL_IDLE_TIMEOUT_SECS))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;
        run_migrations(&pool).await.map_err(|e| StorageError::Migration(e.to_string()))?;
        tracing::info!("PgStorage initialized");
        Ok(Self { pool })
    }

    pub(crate) const fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Convert `usize` to `i64` for SQL LIMIT binds.
/// Saturates to `i64::MAX` on overflow (only possible on 128-bit targets).
pub(crate) fn usize_to_i64(val: usize) -> i64 {
    i64::try_from(val).unwrap_or(i64::MAX)
}

/// Convert a `COUNT(*)` result to `u64`. Postgres counts are never negative.
pub(crate) fn count_to_u64(count: i64) -> u64 {
    u64::try_from(count).unwrap_or(0)
}

pub(crate) fn row_to_plan_with_template(
    row: &sqlx::postgres::PgRow,
) -> Result<PlanWithTemplate, StorageError> {
    let created_at: DateTime<Utc> = row.try_get("created_at")?;
    let updated_at: DateTime<Utc> = row.try_get("updated_at")?;
    Ok(PlanWithTemplate {
        plan: BusinessPlan {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            template_id: row.try_get("template_id")?,
            created_at,
            updated_at,
        },
        template_name: row.try_get("template_name")?,
        template_description: row.try_get("template_description")?,
    })
}

pub(crate) fn row_to_activity_with_title(
    row: &sqlx::postgres::PgRow,
) -> Result<ActivityWithPlanTitle, StorageError> {
    let created_at: DateTime<Utc> = row.try_get("created_at")?;
    Ok(ActivityWithPlanTitle {
        activity: UserActivity {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            business_plan_id: row.try_get("business_plan_id")?,
            activity_type: row.try_get("activity_type")?,
            description: row.try_get("description")?,
            created_at,
        },
        plan_title: row.try_get("plan_title")?,
    })
}

pub(crate) const PLAN_TEMPLATE_COLUMNS: &str =
    "p.id, p.user_id, p.title, p.description, p.template_id, p.created_at, p.updated_at,
     t.name AS template_name, t.description AS template_description";

pub(crate) const ACTIVITY_COLUMNS: &str =
    "a.id, a.user_id, a.business_plan_id, a.activity_type, a.description, a.created_at";
