//! Label catalog endpoint

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct LabelEntry {
    pub index: usize,
    pub name: String,
}

/// GET /labels
///
/// The catalog the service was started with, in class index order.
pub async fn list_labels(State(state): State<AppState>) -> Json<Vec<LabelEntry>> {
    let labels = state
        .catalog
        .iter()
        .map(|(index, name)| LabelEntry {
            index,
            name: name.to_string(),
        })
        .collect();
    Json(labels)
}

pub fn label_routes() -> Router<AppState> {
    Router::new().route("/labels", get(list_labels))
}
