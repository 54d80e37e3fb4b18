//! # LeafID Common Library
//!
//! Shared code for LeafID services including:
//! - Error and result types
//! - Bootstrap configuration (TOML, root folder resolution)
//! - Database initialization (history table)
//! - Timestamp helpers

pub mod config;
#[cfg(feature = "sqlx")]
pub mod db;
pub mod error;
pub mod time;

pub use error::{Error, Result};
