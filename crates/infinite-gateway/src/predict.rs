//! Prediction seam.
//!
//! `Predictor` is what `/predict` calls once the body has been accepted. The
//! only implementation is a placeholder that answers with fixed literals.

use async_trait::async_trait;
use serde_json::{Map, Value};

use infinite_core::error::Result;
use infinite_core::protocol::predict::Prediction;
use infinite_core::protocol::SERVICE_VERSION;

#[async_trait]
pub trait Predictor: Send + Sync {
    /// Value of the `model` label on `predictions_total`.
    fn model_label(&self) -> &str;
    async fn predict(&self, input: &Map<String, Value>) -> Result<Prediction>;
}

/// Fixed-answer predictor.
pub struct PlaceholderPredictor {
    model_path: String,
}

impl PlaceholderPredictor {
    pub fn new(model_path: impl Into<String>) -> Self {
        Self {
            model_path: model_path.into(),
        }
    }
}

#[async_trait]
impl Predictor for PlaceholderPredictor {
    fn model_label(&self) -> &str {
        "v1"
    }

    async fn predict(&self, input: &Map<String, Value>) -> Result<Prediction> {
        tracing::debug!(
            fields = input.len(),
            model_path = %self.model_path,
            "placeholder prediction"
        );
        Ok(Prediction {
            prediction: Value::String("example_result".into()),
            confidence: 0.95,
            model_version: SERVICE_VERSION.to_string(),
        })
    }
}
