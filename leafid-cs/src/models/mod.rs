//! Data models
//!
//! - `HistoryEntry`: one persisted classification event
//! - `Prediction`: interpreted model output
//! - `LabelCount` / `AnalyticsSummary`: aggregate analytics

pub mod analytics;
pub mod history_entry;
pub mod prediction;

pub use analytics::{AnalyticsSummary, LabelCount};
pub use history_entry::HistoryEntry;
pub use prediction::Prediction;
