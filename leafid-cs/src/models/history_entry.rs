//! Persisted classification event

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of the history log
///
/// Created once per successful classification and never modified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Assigned by the store; unique and increasing
    pub id: i64,
    /// Opaque session token that scopes history queries
    pub session_id: String,
    /// Upload filename exactly as supplied by the client
    pub image_name: String,
    /// Catalog label or "Unknown"
    pub predicted_label: String,
    /// Raw model score for the predicted class (not clamped)
    pub confidence: f64,
    /// Set by the store at insert time
    pub timestamp: DateTime<Utc>,
}
