//! Bodies served by the operational endpoints.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// `GET /` directory of the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexResponse {
    pub service: String,
    pub version: String,
    pub endpoints: EndpointDirectory,
}

/// Paths advertised by `GET /`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointDirectory {
    pub health: String,
    pub ready: String,
    pub metrics: String,
    pub predict: String,
}

impl Default for IndexResponse {
    fn default() -> Self {
        Self {
            service: super::SERVICE_NAME.to_string(),
            version: super::SERVICE_VERSION.to_string(),
            endpoints: EndpointDirectory {
                health: "/health".into(),
                ready: "/ready".into(),
                metrics: "/metrics".into(),
                predict: "/predict (POST)".into(),
            },
        }
    }
}

/// `GET /health` body. Always `status = "healthy"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub version: String,
}

impl HealthResponse {
    pub fn now() -> Self {
        Self {
            status: "healthy".into(),
            timestamp: super::timestamp_now(),
            version: super::SERVICE_VERSION.into(),
        }
    }
}

/// Readiness verdict, serialized as `"ready"` / `"not ready"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadyStatus {
    #[serde(rename = "ready")]
    Ready,
    #[serde(rename = "not ready")]
    NotReady,
}

/// `GET /ready` body.
///
/// `checks` is ordered by probe name so the body is stable across calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadyResponse {
    pub status: ReadyStatus,
    pub checks: BTreeMap<String, bool>,
    pub timestamp: String,
}

impl ReadyResponse {
    /// Build a response whose status is derived from `checks` alone.
    pub fn from_checks(checks: BTreeMap<String, bool>) -> Self {
        let status = if checks.values().all(|ok| *ok) {
            ReadyStatus::Ready
        } else {
            ReadyStatus::NotReady
        };
        Self {
            status,
            checks,
            timestamp: super::timestamp_now(),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == ReadyStatus::Ready
    }
}
