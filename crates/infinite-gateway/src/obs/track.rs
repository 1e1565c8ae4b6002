//! Request tracking middleware.
//!
//! Wraps every routed request: starts a [`RequestContext`] before the handler
//! runs and consumes it once the response exists, recording the request
//! counter and the latency histogram. Scrapes of `/metrics` pass through
//! untracked so consecutive scrapes stay identical.

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request, State},
    http::{Method, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::app_state::AppState;
use crate::obs::metrics::ServiceMetrics;
use crate::router;

/// Per-request state. Created at entry, consumed by [`RequestContext::finish`].
#[derive(Debug)]
pub struct RequestContext {
    started: Instant,
    method: Method,
    endpoint: &'static str,
}

impl RequestContext {
    pub fn begin(method: Method, endpoint: &'static str) -> Self {
        Self {
            started: Instant::now(),
            method,
            endpoint,
        }
    }

    /// Record the finished request and drop the context.
    pub fn finish(self, status: StatusCode, metrics: &ServiceMetrics) {
        let elapsed = self.started.elapsed();
        metrics.record_request(self.method.as_str(), self.endpoint, status.as_u16(), elapsed);
        tracing::debug!(
            method = %self.method,
            endpoint = self.endpoint,
            status = status.as_u16(),
            elapsed_us = elapsed.as_micros() as u64,
            "request finished"
        );
    }
}

pub async fn track_requests(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let endpoint = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| router::endpoint_name(p.as_str()))
        .unwrap_or(router::UNKNOWN_ENDPOINT);

    if endpoint == router::METRICS_ENDPOINT {
        return next.run(req).await;
    }

    let ctx = RequestContext::begin(req.method().clone(), endpoint);
    let resp = next.run(req).await;
    ctx.finish(resp.status(), state.metrics());
    resp
}
