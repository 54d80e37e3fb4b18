//! Session history endpoint

use axum::{extract::State, http::HeaderMap, routing::get, Json, Router};

use super::session::session_from_headers;
use crate::models::HistoryEntry;
use crate::{ApiError, ApiResult, AppState};

/// GET /history
///
/// Entries for the caller's session, most recent first. A request without
/// a valid session cookie has no history (404).
pub async fn session_history(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Json<Vec<HistoryEntry>>> {
    let session = session_from_headers(&headers, state.sessions.as_ref())
        .ok_or_else(|| ApiError::NotFound("No history found".to_string()))?;

    let entries = state.history.list_by_session(session.as_str()).await?;
    Ok(Json(entries))
}

pub fn history_routes() -> Router<AppState> {
    Router::new().route("/history", get(session_history))
}
