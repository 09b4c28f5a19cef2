use std::sync::Arc;

use anyhow::Result;
use planforge_http::{AppState, create_router};
use planforge_service::DashboardService;
use planforge_storage::{DataStore, PgStorage};

use crate::get_database_url;

pub(crate) async fn run(port: u16, host: String) -> Result<()> {
    let storage: Arc<dyn DataStore> = Arc::new(PgStorage::new(&get_database_url()?).await?);
    let dashboard_service = Arc::new(DashboardService::new(storage));

    let state = Arc::new(AppState { dashboard_service });
    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
