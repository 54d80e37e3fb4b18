//! Classification history store
//!
//! Append-only log of classification events. Ids come from SQLite
//! AUTOINCREMENT and timestamps from the store at insert time, so
//! concurrent appends rely on SQLite's atomic insert; there is no
//! locking here.

use leafid_common::time::{now, parse_db_timestamp, to_db_timestamp};
use leafid_common::Result;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

use crate::models::{HistoryEntry, LabelCount};

/// Owner of the `history` table
#[derive(Debug, Clone)]
pub struct HistoryStore {
    pool: SqlitePool,
}

impl HistoryStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Record one classification; assigns id and timestamp
    pub async fn append(
        &self,
        session_id: &str,
        image_name: &str,
        predicted_label: &str,
        confidence: f64,
    ) -> Result<HistoryEntry> {
        let timestamp = to_db_timestamp(&now());

        let result = sqlx::query(
            r#"
            INSERT INTO history (session_id, image_name, predicted_label, confidence, timestamp)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(session_id)
        .bind(image_name)
        .bind(predicted_label)
        .bind(confidence)
        .bind(&timestamp)
        .execute(&self.pool)
        .await?;

        Ok(HistoryEntry {
            id: result.last_insert_rowid(),
            session_id: session_id.to_string(),
            image_name: image_name.to_string(),
            predicted_label: predicted_label.to_string(),
            confidence,
            // Round-trip so the returned entry equals what a later read yields
            timestamp: parse_db_timestamp(&timestamp)?,
        })
    }

    /// Entries for one session, most recent first (id breaks timestamp ties)
    pub async fn list_by_session(&self, session_id: &str) -> Result<Vec<HistoryEntry>> {
        let rows = sqlx::query(
            r#"
            SELECT id, session_id, image_name, predicted_label, confidence, timestamp
            FROM history
            WHERE session_id = ?
            ORDER BY timestamp DESC, id DESC
            "#,
        )
        .bind(session_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(entry_from_row).collect()
    }

    /// Total entries across all sessions
    pub async fn count_all(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM history")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Occurrences per predicted label, unordered
    pub async fn label_counts(&self) -> Result<Vec<LabelCount>> {
        let rows: Vec<(String, i64)> = sqlx::query_as(
            "SELECT predicted_label, COUNT(*) FROM history GROUP BY predicted_label",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(label, count)| LabelCount::new(label, count))
            .collect())
    }
}

fn entry_from_row(row: &SqliteRow) -> Result<HistoryEntry> {
    let timestamp: String = row.try_get("timestamp")?;
    Ok(HistoryEntry {
        id: row.try_get("id")?,
        session_id: row.try_get("session_id")?,
        image_name: row.try_get("image_name")?,
        predicted_label: row.try_get("predicted_label")?,
        confidence: row.try_get("confidence")?,
        timestamp: parse_db_timestamp(&timestamp)?,
    })
}
