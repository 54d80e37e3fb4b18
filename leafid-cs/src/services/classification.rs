//! Classification orchestration
//!
//! decode → preprocess → predict → interpret → append. Any failing step
//! aborts the request; only a fully successful run touches the store.

use std::sync::Arc;
use tracing::{debug, info};

use crate::catalog::LabelCatalog;
use crate::db::HistoryStore;
use crate::error::ClassifyError;
use crate::inference::LeafClassifier;
use crate::models::HistoryEntry;
use crate::services::interpreter::PredictionInterpreter;
use crate::services::preprocessor::ImagePreprocessor;
use crate::services::session::SessionId;

/// Runs one classification request end to end
#[derive(Clone)]
pub struct ClassificationService {
    preprocessor: ImagePreprocessor,
    classifier: Arc<dyn LeafClassifier>,
    interpreter: PredictionInterpreter,
    history: HistoryStore,
}

impl ClassificationService {
    pub fn new(
        catalog: Arc<LabelCatalog>,
        classifier: Arc<dyn LeafClassifier>,
        history: HistoryStore,
    ) -> Self {
        Self {
            preprocessor: ImagePreprocessor::default(),
            classifier,
            interpreter: PredictionInterpreter::new(catalog),
            history,
        }
    }

    /// Classify an uploaded image and record the result for `session`
    ///
    /// Returns the persisted entry. Nothing is persisted on error.
    pub async fn classify(
        &self,
        session: &SessionId,
        image_bytes: Vec<u8>,
        filename: &str,
    ) -> Result<HistoryEntry, ClassifyError> {
        let scores = self.score(image_bytes).await?;
        let prediction = self.interpreter.interpret(&scores)?;

        debug!(
            index = prediction.index,
            classes = scores.len(),
            "Interpreted model output"
        );

        let entry = self
            .history
            .append(
                session.as_str(),
                filename,
                &prediction.label,
                f64::from(prediction.confidence),
            )
            .await?;

        info!(
            id = entry.id,
            session_id = %session,
            image_name = %entry.image_name,
            label = %entry.predicted_label,
            confidence = entry.confidence,
            "Classified image"
        );

        Ok(entry)
    }

    /// Decode, preprocess and run the model off the async runtime
    async fn score(&self, image_bytes: Vec<u8>) -> Result<Vec<f32>, ClassifyError> {
        let preprocessor = self.preprocessor;
        let classifier = Arc::clone(&self.classifier);

        tokio::task::spawn_blocking(move || {
            let tensor = preprocessor.preprocess_bytes(&image_bytes)?;
            classifier.predict(&tensor)
        })
        .await
        .map_err(|e| ClassifyError::Inference(format!("Inference task failed: {}", e)))?
    }
}
