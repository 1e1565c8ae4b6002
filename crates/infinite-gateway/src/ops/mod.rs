//! Operational HTTP endpoints.
//!
//! - `/health`  : liveness, always 200
//! - `/ready`   : readiness (503 when any probe fails)
//! - `/metrics` : Prometheus text format

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use infinite_core::protocol::ops::{HealthResponse, ReadyResponse};

use crate::app_state::AppState;
use crate::obs::metrics::EXPOSITION_CONTENT_TYPE;

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::now())
}

pub async fn ready(State(state): State<AppState>) -> Response {
    let body = ReadyResponse::from_checks(state.readiness().evaluate().await);
    let status = if body.is_ready() {
        StatusCode::OK
    } else {
        tracing::warn!(checks = ?body.checks, "readiness check failed");
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(body)).into_response()
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    let body = state.metrics().render();

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, EXPOSITION_CONTENT_TYPE)],
        body,
    )
        .into_response()
}
