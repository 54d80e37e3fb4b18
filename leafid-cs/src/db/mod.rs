//! Database access for leafid-cs
//!
//! Schema creation lives in `leafid_common::db`; this module owns the
//! queries against it.

pub mod history;

pub use history::HistoryStore;
