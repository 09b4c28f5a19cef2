//! Integration tests for PgStorage.
//! Run with: DATABASE_URL=... cargo test -p planforge-storage -- --ignored pg_

#![allow(clippy::unwrap_used, reason = "integration test code")]

use chrono::{Duration, Utc};
use planforge_core::{PlanSection, Section};
use planforge_storage::{ActivityStore, PgStorage, PlanStore};
use sqlx::PgPool;
use uuid::Uuid;

async fn create_pg_storage() -> PgStorage {
    let url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for PgStorage integration tests");
    PgStorage::new(&url).await.expect("Failed to connect to PostgreSQL")
}

/// Separate pool for seeding rows; planforge itself never writes.
async fn seed_pool() -> PgPool {
    let url = std::env::var("DATABASE_URL").unwrap();
    PgPool::connect(&url).await.expect("Failed to connect seed pool")
}

fn unique_id() -> String {
    format!("test-{}", Uuid::new_v4())
}

async fn insert_template(pool: &PgPool, id: &str, name: &str) {
    sqlx::query("INSERT INTO templates (id, name, description) VALUES ($1, $2, $3)")
        .bind(id)
        .bind(name)
        .bind("seeded template")
        .execute(pool)
        .await
        .unwrap();
}

async fn insert_plan(
    pool: &PgPool,
    id: &str,
    user_id: &str,
    title: &str,
    template_id: Option<&str>,
    updated_offset_secs: i64,
) {
    let now = Utc::now();
    sqlx::query(
        "INSERT INTO business_plans (id, user_id, title, description, template_id, created_at, updated_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7)",
    )
    .bind(id)
    .bind(user_id)
    .bind(title)
    .bind("seeded plan")
    .bind(template_id)
    .bind(now - Duration::seconds(3600))
    .bind(now - Duration::seconds(updated_offset_secs))
    .execute(pool)
    .await
    .unwrap();
}

async fn insert_catalog_section(pool: &PgPool, section: &Section) {
    sqlx::query("INSERT INTO sections (id, title, description) VALUES ($1, $2, $3)")
        .bind(&section.id)
        .bind(&section.title)
        .bind(&section.description)
        .execute(pool)
        .await
        .unwrap();
}

async fn insert_section(pool: &PgPool, plan_id: &str, content: Option<&str>) {
    let catalog = Section {
        id: unique_id(),
        title: "Executive Summary".to_owned(),
        description: None,
    };
    insert_catalog_section(pool, &catalog).await;
    let section = PlanSection {
        id: unique_id(),
        business_plan_id: plan_id.to_owned(),
        section_id: catalog.id,
        content: content.map(str::to_owned),
    };
    sqlx::query(
        "INSERT INTO plan_sections (id, business_plan_id, section_id, content)
         VALUES ($1, $2, $3, $4)",
    )
    .bind(&section.id)
    .bind(&section.business_plan_id)
    .bind(&section.section_id)
    .bind(&section.content)
    .execute(pool)
    .await
    .unwrap();
}

async fn insert_activity(
    pool: &PgPool,
    user_id: &str,
    plan_id: &str,
    activity_type: &str,
    age_secs: i64,
) -> String {
    let id = unique_id();
    sqlx::query(
        "INSERT INTO user_activities (id, user_id, business_plan_id, activity_type, description, created_at)
         VALUES ($1, $2, $3, $4, $5, $6)",
    )
    .bind(&id)
    .bind(user_id)
    .bind(plan_id)
    .bind(activity_type)
    .bind("seeded activity")
    .bind(Utc::now() - Duration::seconds(age_secs))
    .execute(pool)
    .await
    .unwrap();
    id
}

// ── Plan tests ───────────────────────────────────────────────────

#[tokio::test]
#[ignore]
async fn pg_count_plans_scoped_to_user() {
    let storage = create_pg_storage().await;
    let pool = seed_pool().await;
    let user = unique_id();
    let other = unique_id();

    insert_plan(&pool, &unique_id(), &user, "Plan A", None, 0).await;
    insert_plan(&pool, &unique_id(), &user, "Plan B", None, 10).await;
    insert_plan(&pool, &unique_id(), &other, "Other user's plan", None, 0).await;

    assert_eq!(storage.count_plans(&user).await.unwrap(), 2);
    assert_eq!(storage.count_plans(&unique_id()).await.unwrap(), 0);
}

#[tokio::test]
#[ignore]
async fn pg_plans_ordered_newest_update_first() {
    let storage = create_pg_storage().await;
    let pool = seed_pool().await;
    let user = unique_id();

    insert_plan(&pool, &unique_id(), &user, "oldest", None, 300).await;
    insert_plan(&pool, &unique_id(), &user, "newest", None, 0).await;
    insert_plan(&pool, &unique_id(), &user, "middle", None, 100).await;

    let plans = storage.plans_with_templates(&user).await.unwrap();
    let titles: Vec<&str> = plans.iter().map(|p| p.plan.title.as_str()).collect();
    assert_eq!(titles, ["newest", "middle", "oldest"]);
}

#[tokio::test]
#[ignore]
async fn pg_plans_join_template_metadata() {
    let storage = create_pg_storage().await;
    let pool = seed_pool().await;
    let user = unique_id();
    let template = unique_id();

    insert_template(&pool, &template, "Lean Canvas").await;
    insert_plan(&pool, &unique_id(), &user, "with template", Some(&template), 0).await;

    let plans = storage.plans_with_templates(&user).await.unwrap();
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].template_name.as_deref(), Some("Lean Canvas"));
    assert_eq!(plans[0].template_description.as_deref(), Some("seeded template"));
}

#[tokio::test]
#[ignore]
async fn pg_plans_missing_template_yields_none_fields() {
    let storage = create_pg_storage().await;
    let pool = seed_pool().await;
    let user = unique_id();

    // template_id points at a template that was never created (deleted)
    insert_plan(&pool, &unique_id(), &user, "dangling template", Some(&unique_id()), 0).await;

    let plans = storage.plans_with_templates(&user).await.unwrap();
    assert_eq!(plans.len(), 1);
    assert!(plans[0].plan.template_id.is_some());
    assert!(plans[0].template_name.is_none());
    assert!(plans[0].template_description.is_none());
}

#[tokio::test]
#[ignore]
async fn pg_section_contents_for_single_plan() {
    let storage = create_pg_storage().await;
    let pool = seed_pool().await;
    let user = unique_id();
    let plan = unique_id();

    insert_plan(&pool, &plan, &user, "sectioned", None, 0).await;
    insert_section(&pool, &plan, Some("filled in")).await;
    insert_section(&pool, &plan, Some("")).await;
    insert_section(&pool, &plan, None).await;

    let contents = storage.section_contents(&plan).await.unwrap();
    assert_eq!(contents.len(), 3);
    assert_eq!(contents.iter().filter(|c| c.is_none()).count(), 1);
}

#[tokio::test]
#[ignore]
async fn pg_section_contents_by_plan_keeps_empty_plans() {
    let storage = create_pg_storage().await;
    let pool = seed_pool().await;
    let user = unique_id();
    let with_sections = unique_id();
    let without_sections = unique_id();

    insert_plan(&pool, &with_sections, &user, "has sections", None, 0).await;
    insert_plan(&pool, &without_sections, &user, "no sections", None, 10).await;
    insert_section(&pool, &with_sections, Some("a")).await;
    insert_section(&pool, &with_sections, None).await;

    let grouped = storage.section_contents_by_plan(&user).await.unwrap();
    assert_eq!(grouped.len(), 2, "zero-section plan must still appear");

    let full = grouped.iter().find(|g| g.plan_id == with_sections).unwrap();
    assert_eq!(full.contents.len(), 2);
    let empty = grouped.iter().find(|g| g.plan_id == without_sections).unwrap();
    assert!(empty.contents.is_empty());
}

// ── Activity tests ───────────────────────────────────────────────

#[tokio::test]
#[ignore]
async fn pg_count_activities_by_type() {
    let storage = create_pg_storage().await;
    let pool = seed_pool().await;
    let user = unique_id();
    let plan = unique_id();

    insert_plan(&pool, &plan, &user, "plan", None, 0).await;
    for i in 0..3 {
        insert_activity(&pool, &user, &plan, "ai_generation", i).await;
    }
    insert_activity(&pool, &user, &plan, "plan_created", 100).await;

    assert_eq!(storage.count_by_type(&user, "ai_generation").await.unwrap(), 3);
    assert_eq!(storage.count_by_type(&user, "plan_created").await.unwrap(), 1);
    assert_eq!(storage.count_by_type(&user, "never_logged").await.unwrap(), 0);
}

#[tokio::test]
#[ignore]
async fn pg_recent_activities_limit_and_order() {
    let storage = create_pg_storage().await;
    let pool = seed_pool().await;
    let user = unique_id();
    let plan = unique_id();

    insert_plan(&pool, &plan, &user, "busy plan", None, 0).await;
    // 15 activities with distinct timestamps, oldest first
    let mut ids = Vec::new();
    for i in 0..15_i64 {
        ids.push(insert_activity(&pool, &user, &plan, "section_updated", 15 - i).await);
    }

    let feed = storage.recent_with_plan_title(&user, 10).await.unwrap();
    assert_eq!(feed.len(), 10, "feed must cap at the 10 most recent");

    // Most recent first: the last 10 inserted ids, reversed.
    let expected: Vec<&str> = ids.iter().rev().take(10).map(String::as_str).collect();
    let got: Vec<&str> = feed.iter().map(|a| a.activity.id.as_str()).collect();
    assert_eq!(got, expected);
    for window in feed.windows(2) {
        assert!(window[0].activity.created_at >= window[1].activity.created_at);
    }
}

#[tokio::test]
#[ignore]
async fn pg_recent_activities_join_plan_title() {
    let storage = create_pg_storage().await;
    let pool = seed_pool().await;
    let user = unique_id();
    let plan = unique_id();

    insert_plan(&pool, &plan, &user, "Bakery expansion", None, 0).await;
    insert_activity(&pool, &user, &plan, "ai_generation", 0).await;
    // Activity referencing a plan that no longer exists
    insert_activity(&pool, &user, &unique_id(), "ai_generation", 10).await;

    let feed = storage.recent_with_plan_title(&user, 10).await.unwrap();
    assert_eq!(feed.len(), 2);
    assert_eq!(feed[0].plan_title.as_deref(), Some("Bakery expansion"));
    assert!(feed[1].plan_title.is_none(), "deleted plan joins to NULL title");
}
