//! HTTP API handlers for leafid-cs
//!
//! Thin I/O over the classification pipeline. Handlers only translate
//! requests and errors; all behavior lives in `services` and `db`.

pub mod analytics;
pub mod classify;
pub mod health;
pub mod history;
pub mod labels;
pub mod session;

pub use analytics::analytics_routes;
pub use classify::classify_routes;
pub use health::health_routes;
pub use history::history_routes;
pub use labels::label_routes;
