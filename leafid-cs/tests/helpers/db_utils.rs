//! In-memory database fixtures

use leafid_cs::db::HistoryStore;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// Fresh in-memory database with the history schema
///
/// Single connection: every pooled `:memory:` connection would otherwise
/// see its own empty database.
pub async fn memory_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    leafid_common::db::create_history_table(&pool).await.unwrap();
    pool
}

pub async fn memory_store() -> HistoryStore {
    HistoryStore::new(memory_pool().await)
}
