//! Observability: the metrics registry and the per-request tracker that feeds it.
//!
//! Metrics are kept in-process (DashMap + atomics) and rendered by the
//! `/metrics` handler in the Prometheus text exposition format.

pub mod metrics;
pub mod track;
