//! Aggregate analytics endpoint

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::models::AnalyticsSummary;
use crate::services::DEFAULT_TOP_LABELS;
use crate::{ApiResult, AppState};

#[derive(Debug, Deserialize)]
pub struct AnalyticsParams {
    /// Number of labels to return (default 5)
    pub limit: Option<usize>,
}

/// GET /analytics?limit=N
pub async fn analytics(
    State(state): State<AppState>,
    Query(params): Query<AnalyticsParams>,
) -> ApiResult<Json<AnalyticsSummary>> {
    let limit = params.limit.unwrap_or(DEFAULT_TOP_LABELS);
    let summary = state.analytics.summary(limit).await?;
    Ok(Json(summary))
}

pub fn analytics_routes() -> Router<AppState> {
    Router::new().route("/analytics", get(analytics))
}
