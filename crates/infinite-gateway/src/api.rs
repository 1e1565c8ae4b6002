//! Public API endpoints: the service directory and the prediction call.

use std::panic::AssertUnwindSafe;

use axum::{extract::State, http::StatusCode, Json};
use bytes::Bytes;
use futures_util::FutureExt;
use serde_json::{Map, Value};

use infinite_core::error::{InfiniteError, Result};
use infinite_core::protocol::ops::IndexResponse;
use infinite_core::protocol::predict::{ErrorBody, PredictResponse, NO_INPUT_MESSAGE};

use crate::app_state::AppState;
use crate::error::ApiError;

pub async fn index() -> Json<IndexResponse> {
    Json(IndexResponse::default())
}

/// Accept only a non-empty JSON object; absent, malformed, empty or
/// non-object bodies are all the same client error.
pub fn parse_input(body: &[u8]) -> Result<Map<String, Value>> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) if !map.is_empty() => Ok(map),
        _ => Err(InfiniteError::BadRequest(NO_INPUT_MESSAGE.into())),
    }
}

async fn run_prediction(state: &AppState, body: &[u8]) -> Result<PredictResponse> {
    let input = parse_input(body)?;
    tracing::info!("processing prediction request");

    let predictor = state.predictor();
    let prediction = predictor.predict(&input).await?;
    if !prediction.confidence.is_finite() {
        return Err(InfiniteError::Internal(format!(
            "predictor {} returned non-finite confidence",
            predictor.model_label()
        )));
    }
    state.metrics().record_prediction(predictor.model_label());
    Ok(prediction.into())
}

pub async fn predict(
    State(state): State<AppState>,
    body: Bytes,
) -> std::result::Result<Json<PredictResponse>, ApiError> {
    // A panicking predictor is answered like any other internal failure.
    let out = AssertUnwindSafe(run_prediction(&state, &body))
        .catch_unwind()
        .await
        .unwrap_or_else(|_| Err(InfiniteError::Internal("predictor panicked".into())));
    Ok(Json(out?))
}

pub async fn not_found() -> (StatusCode, Json<ErrorBody>) {
    (StatusCode::NOT_FOUND, Json(ErrorBody::new("Not found")))
}
