//! ONNX backend using tract
//!
//! Loads an ONNX export of the trained leaf model. The input fact is pinned
//! to `f32 [1, 224, 224, 3]` (NHWC, as exported from Keras).

use ndarray::Array4;
use std::path::{Path, PathBuf};
use tract_onnx::prelude::*;
use tracing::{debug, info};

use super::LeafClassifier;
use crate::error::ClassifyError;

/// Input shape the model is optimized for
pub const MODEL_INPUT_SHAPE: [usize; 4] = [1, 224, 224, 3];

type OnnxPlan = SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>;

/// Classifier backed by an optimized tract plan
pub struct TractClassifier {
    plan: OnnxPlan,
    model_path: PathBuf,
}

impl TractClassifier {
    /// Load and optimize the model at `model_path`
    pub fn load(model_path: &Path) -> Result<Self, ClassifyError> {
        if !model_path.exists() {
            return Err(ClassifyError::Inference(format!(
                "Model file not found: {}",
                model_path.display()
            )));
        }

        let model = optimized_model(model_path).map_err(|e| {
            ClassifyError::Inference(format!(
                "Failed to load model {}: {}",
                model_path.display(),
                e
            ))
        })?;

        info!("Loaded ONNX model: {}", model_path.display());
        Self::from_model(model, model_path.to_path_buf())
    }

    /// Wrap an already built typed graph
    ///
    /// The graph must take one `f32 [1, 224, 224, 3]` input.
    pub fn from_model(model: TypedModel, model_path: PathBuf) -> Result<Self, ClassifyError> {
        let plan = model
            .into_runnable()
            .map_err(|e| ClassifyError::Inference(format!("Failed to plan model: {}", e)))?;
        Ok(Self { plan, model_path })
    }

    pub fn model_path(&self) -> &Path {
        &self.model_path
    }
}

fn optimized_model(model_path: &Path) -> TractResult<TypedModel> {
    tract_onnx::onnx()
        .model_for_path(model_path)?
        .with_input_fact(0, f32::fact(MODEL_INPUT_SHAPE).into())?
        .into_optimized()
}

impl LeafClassifier for TractClassifier {
    fn predict(&self, tensor: &Array4<f32>) -> Result<Vec<f32>, ClassifyError> {
        if tensor.shape() != MODEL_INPUT_SHAPE {
            return Err(ClassifyError::Inference(format!(
                "Input shape {:?} does not match model input {:?}",
                tensor.shape(),
                MODEL_INPUT_SHAPE
            )));
        }

        let contiguous = tensor.as_standard_layout();
        let data = contiguous
            .as_slice()
            .ok_or_else(|| ClassifyError::Inference("Input tensor is not contiguous".to_string()))?;
        let input = Tensor::from_shape(tensor.shape(), data)
            .map_err(|e| ClassifyError::Inference(e.to_string()))?;

        let outputs = self
            .plan
            .run(tvec!(input.into_tvalue()))
            .map_err(|e| ClassifyError::Inference(e.to_string()))?;

        let output = outputs
            .first()
            .ok_or_else(|| ClassifyError::Inference("Model produced no outputs".to_string()))?;
        let scores: Vec<f32> = output
            .to_array_view::<f32>()
            .map_err(|e| ClassifyError::Inference(e.to_string()))?
            .iter()
            .copied()
            .collect();

        debug!(classes = scores.len(), "Inference complete");
        Ok(scores)
    }
}
