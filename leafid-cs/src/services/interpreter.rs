//! Score vector → (label, confidence)

use std::sync::Arc;
use tracing::warn;

use crate::catalog::LabelCatalog;
use crate::error::ClassifyError;
use crate::models::Prediction;

/// Index of the highest score, first occurrence winning ties
///
/// NaN scores never win over a real score. Returns `None` for an empty
/// slice.
pub fn argmax(scores: &[f32]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, &score) in scores.iter().enumerate() {
        match best {
            None => best = Some((i, score)),
            Some((_, current)) if score > current || (current.is_nan() && !score.is_nan()) => {
                best = Some((i, score))
            }
            _ => {}
        }
    }
    best.map(|(i, _)| i)
}

/// Maps raw classifier output onto catalog labels
#[derive(Debug, Clone)]
pub struct PredictionInterpreter {
    catalog: Arc<LabelCatalog>,
}

impl PredictionInterpreter {
    pub fn new(catalog: Arc<LabelCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &LabelCatalog {
        &self.catalog
    }

    /// Pick the winning class; confidence is the raw score at that index
    ///
    /// A non-finite winning score (all-NaN vector, infinity) breaks the
    /// model contract and is reported as an inference failure.
    pub fn interpret(&self, scores: &[f32]) -> Result<Prediction, ClassifyError> {
        let index = argmax(scores).ok_or(ClassifyError::EmptyPrediction)?;
        let confidence = scores[index];
        if !confidence.is_finite() {
            return Err(ClassifyError::Inference(format!(
                "Model returned non-finite score {} at index {}",
                confidence, index
            )));
        }

        if scores.len() != self.catalog.len() {
            warn!(
                scores = scores.len(),
                labels = self.catalog.len(),
                "Model output size does not match label catalog"
            );
        }

        Ok(Prediction {
            index,
            label: self.catalog.name_for(index).to_string(),
            confidence,
        })
    }
}
