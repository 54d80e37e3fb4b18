//! Test helper utilities
//!
//! Shared fixtures for leafid-cs integration tests

#![allow(dead_code)]

pub mod classifiers;
pub mod db_utils;
pub mod images;

pub use classifiers::{EmptyClassifier, FailingClassifier, FixedClassifier};
pub use db_utils::{memory_pool, memory_store};
pub use images::{multipart_body, png_bytes, MULTIPART_BOUNDARY};
