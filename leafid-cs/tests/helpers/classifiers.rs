//! Deterministic stand-ins for the ONNX model

use leafid_cs::error::ClassifyError;
use leafid_cs::inference::{LeafClassifier, MODEL_INPUT_SHAPE};
use ndarray::Array4;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Returns the same score vector for every call
pub struct FixedClassifier {
    scores: Vec<f32>,
    calls: AtomicUsize,
}

impl FixedClassifier {
    pub fn new(scores: Vec<f32>) -> Self {
        Self {
            scores,
            calls: AtomicUsize::new(0),
        }
    }

    /// 30 small scores with `confidence` at `index`
    pub fn winning(index: usize, confidence: f32) -> Self {
        let mut scores = vec![0.01; 30];
        scores[index] = confidence;
        Self::new(scores)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl LeafClassifier for FixedClassifier {
    fn predict(&self, tensor: &Array4<f32>) -> Result<Vec<f32>, ClassifyError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if tensor.shape() != MODEL_INPUT_SHAPE {
            return Err(ClassifyError::Inference(format!(
                "unexpected input shape {:?}",
                tensor.shape()
            )));
        }
        Ok(self.scores.clone())
    }
}

/// Always fails inference
pub struct FailingClassifier;

impl LeafClassifier for FailingClassifier {
    fn predict(&self, _tensor: &Array4<f32>) -> Result<Vec<f32>, ClassifyError> {
        Err(ClassifyError::Inference("model crashed".to_string()))
    }
}

/// Violates the score vector contract
pub struct EmptyClassifier;

impl LeafClassifier for EmptyClassifier {
    fn predict(&self, _tensor: &Array4<f32>) -> Result<Vec<f32>, ClassifyError> {
        Ok(Vec::new())
    }
}
