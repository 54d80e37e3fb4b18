//! Interpreted classifier output

use serde::Serialize;

/// Winning class of a score vector
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    /// Argmax index into the score vector
    pub index: usize,
    pub label: String,
    /// Raw score at `index`, passed through without renormalization
    pub confidence: f32,
}
