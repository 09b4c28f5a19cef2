use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
};

use crate::AppState;
use crate::api_error::ApiError;
use crate::query_types::UserQuery;
use crate::response_types::{ActivityView, PlanView, StatsResponse};

pub async fn get_stats(
    State(state): State<Arc<AppState>>,
    Query(query): Query<UserQuery>,
) -> Result<Json<StatsResponse>, ApiError> {
    let user_id = query.require_user_id()?;
    let stats = state.dashboard_service.stats(user_id).await?;
    Ok(Json(stats.into()))
}

pub async fn get_plans(
    State(state): State<Arc<AppState>>,
    Query(query): Query<UserQuery>,
) -> Result<Json<Vec<PlanView>>, ApiError> {
    let user_id = query.require_user_id()?;
    let plans = state.dashboard_service.plan_list(user_id).await?;
    Ok(Json(plans.into_iter().map(PlanView::from).collect()))
}

pub async fn get_activities(
    State(state): State<Arc<AppState>>,
    Query(query): Query<UserQuery>,
) -> Result<Json<Vec<ActivityView>>, ApiError> {
    let user_id = query.require_user_id()?;
    let feed = state.dashboard_service.recent_activities(user_id).await?;
    Ok(Json(feed.into_iter().map(ActivityView::from).collect()))
}
