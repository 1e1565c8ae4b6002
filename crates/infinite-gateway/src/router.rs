//! Axum router wiring.
//!
//! Every route has a logical name used as the `endpoint` metric label.
//! Requests that match no route are labeled `unknown`.

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};

use crate::{api, app_state::AppState, obs::track, ops};

pub const UNKNOWN_ENDPOINT: &str = "unknown";
pub const METRICS_ENDPOINT: &str = "metrics";

const ROUTES: [(&str, &str); 5] = [
    ("/", "index"),
    ("/health", "health"),
    ("/ready", "ready"),
    ("/metrics", METRICS_ENDPOINT),
    ("/predict", "predict"),
];

/// Logical endpoint name for a matched route path.
pub fn endpoint_name(path: &str) -> &'static str {
    ROUTES
        .iter()
        .find(|(p, _)| *p == path)
        .map(|(_, name)| *name)
        .unwrap_or(UNKNOWN_ENDPOINT)
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::index))
        .route("/health", get(ops::health))
        .route("/ready", get(ops::ready))
        .route("/metrics", get(ops::metrics))
        // Prediction inputs are not size-capped.
        .route("/predict", post(api::predict).layer(DefaultBodyLimit::disable()))
        .fallback(api::not_found)
        .layer(middleware::from_fn_with_state(state.clone(), track::track_requests))
        .with_state(state)
}

/// Scrape-only router for the dedicated metrics listener.
pub fn build_metrics_router(state: AppState) -> Router {
    Router::new()
        .route("/metrics", get(ops::metrics))
        .with_state(state)
}
