//! Aggregate analytics over the history log

use serde::Serialize;

/// Occurrences of one predicted label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelCount {
    pub label: String,
    pub count: i64,
}

impl LabelCount {
    pub fn new(label: impl Into<String>, count: i64) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// Total count plus most frequent labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyticsSummary {
    pub total: i64,
    pub most_common: Vec<LabelCount>,
}
