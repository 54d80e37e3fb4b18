//! Aggregate statistics over the full history log
//!
//! Every call re-reads the history table; nothing is cached.

use leafid_common::Result;

use crate::db::HistoryStore;
use crate::models::{AnalyticsSummary, LabelCount};

/// Number of labels reported when the caller does not ask for a limit
pub const DEFAULT_TOP_LABELS: usize = 5;

/// Sort by count descending, then label ascending, and keep the first `n`
pub fn rank_labels(mut counts: Vec<LabelCount>, n: usize) -> Vec<LabelCount> {
    counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    counts.truncate(n);
    counts
}

/// Read-only view computing analytics from the history store
#[derive(Debug, Clone)]
pub struct AnalyticsEngine {
    history: HistoryStore,
}

impl AnalyticsEngine {
    pub fn new(history: HistoryStore) -> Self {
        Self { history }
    }

    /// Total classifications ever recorded
    pub async fn total_count(&self) -> Result<i64> {
        self.history.count_all().await
    }

    /// Most frequent predicted labels
    pub async fn top_labels(&self, n: usize) -> Result<Vec<LabelCount>> {
        let counts = self.history.label_counts().await?;
        Ok(rank_labels(counts, n))
    }

    pub async fn summary(&self, n: usize) -> Result<AnalyticsSummary> {
        Ok(AnalyticsSummary {
            total: self.total_count().await?,
            most_common: self.top_labels(n).await?,
        })
    }
}
