//! Prediction result and error envelope.

use serde::{Deserialize, Serialize};

/// Message returned when `/predict` receives no usable JSON object.
pub const NO_INPUT_MESSAGE: &str = "No input data provided";

/// Message returned for any unexpected failure; detail stays in the logs.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Output of a predictor, before it is stamped with a timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub prediction: serde_json::Value,
    /// Always within `[0, 1]`.
    pub confidence: f64,
    pub model_version: String,
}

/// `POST /predict` success body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    pub prediction: serde_json::Value,
    pub confidence: f64,
    pub model_version: String,
    pub timestamp: String,
}

impl From<Prediction> for PredictResponse {
    fn from(p: Prediction) -> Self {
        Self {
            prediction: p.prediction,
            confidence: p.confidence.clamp(0.0, 1.0),
            model_version: p.model_version,
            timestamp: super::timestamp_now(),
        }
    }
}

/// `{ "error": "..." }` body used by every failing API response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { error: msg.into() }
    }
}
