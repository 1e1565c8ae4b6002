//! iNFINITE AI service library entry.
//!
//! Wires configuration, the metrics registry, readiness probes, the predictor
//! seam, and the HTTP handlers into one axum stack. Consumed by the binary
//! (`main.rs`) and by integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod error;
pub mod obs;
pub mod ops;
pub mod predict;
pub mod readiness;
pub mod router;
pub mod server;
