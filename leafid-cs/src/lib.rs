//! leafid-cs library interface
//!
//! Leaf image classification service: preprocessing, ONNX inference,
//! session-scoped history and aggregate analytics behind an axum router.

pub mod api;
pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod inference;
pub mod models;
pub mod services;

pub use crate::error::{ApiError, ApiResult};

use axum::{extract::DefaultBodyLimit, Router};
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::catalog::LabelCatalog;
use crate::config::DEFAULT_MAX_UPLOAD_BYTES;
use crate::db::HistoryStore;
use crate::inference::LeafClassifier;
use crate::services::{
    AnalyticsEngine, ClassificationService, RandomSessionProvider, SessionIdentityProvider,
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<LabelCatalog>,
    pub classification: Arc<ClassificationService>,
    pub history: HistoryStore,
    pub analytics: AnalyticsEngine,
    pub sessions: Arc<dyn SessionIdentityProvider>,
    /// Request body limit for uploads
    pub max_upload_bytes: usize,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(
        db: SqlitePool,
        catalog: Arc<LabelCatalog>,
        classifier: Arc<dyn LeafClassifier>,
    ) -> Self {
        let history = HistoryStore::new(db);
        let classification =
            ClassificationService::new(Arc::clone(&catalog), classifier, history.clone());

        Self {
            catalog,
            classification: Arc::new(classification),
            analytics: AnalyticsEngine::new(history.clone()),
            history,
            sessions: Arc::new(RandomSessionProvider),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            startup_time: Utc::now(),
        }
    }

    pub fn with_session_provider(mut self, sessions: Arc<dyn SessionIdentityProvider>) -> Self {
        self.sessions = sessions;
        self
    }

    pub fn with_max_upload_bytes(mut self, max_upload_bytes: usize) -> Self {
        self.max_upload_bytes = max_upload_bytes;
        self
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.max_upload_bytes);

    Router::new()
        .merge(api::classify_routes())
        .merge(api::history_routes())
        .merge(api::analytics_routes())
        .merge(api::label_routes())
        .merge(api::health_routes())
        .layer(body_limit)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
