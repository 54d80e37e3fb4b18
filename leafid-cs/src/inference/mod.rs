//! Model boundary
//!
//! The classifier is an injected capability: anything that turns a
//! `(1, 224, 224, 3)` tensor into a score vector. Implementations must be
//! safe to call from several requests at once.

mod tract;

pub use tract::{TractClassifier, MODEL_INPUT_SHAPE};

use ndarray::Array4;

use crate::error::ClassifyError;

/// Leaf image classifier
pub trait LeafClassifier: Send + Sync {
    /// Run inference, returning one score per class in catalog order
    ///
    /// Blocking; callers on the async runtime go through
    /// `tokio::task::spawn_blocking`.
    fn predict(&self, tensor: &Array4<f32>) -> Result<Vec<f32>, ClassifyError>;
}
