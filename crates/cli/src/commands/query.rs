//! Read-only inspection commands: print a dashboard view as pretty JSON
//! without going through HTTP.

use std::sync::Arc;

use anyhow::Result;
use planforge_service::DashboardService;
use planforge_storage::{DataStore, PgStorage};

use crate::get_database_url;

async fn dashboard_service() -> Result<DashboardService> {
    let storage: Arc<dyn DataStore> = Arc::new(PgStorage::new(&get_database_url()?).await?);
    Ok(DashboardService::new(storage))
}

pub(crate) async fn stats(user_id: &str) -> Result<()> {
    let stats = dashboard_service().await?.stats(user_id).await?;
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}

pub(crate) async fn plans(user_id: &str) -> Result<()> {
    let plans = dashboard_service().await?.plan_list(user_id).await?;
    println!("{}", serde_json::to_string_pretty(&plans)?);
    Ok(())
}

pub(crate) async fn activities(user_id: &str) -> Result<()> {
    let feed = dashboard_service().await?.recent_activities(user_id).await?;
    println!("{}", serde_json::to_string_pretty(&feed)?);
    Ok(())
}
