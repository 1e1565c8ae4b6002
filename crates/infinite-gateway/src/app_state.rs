//! Shared application state.
//!
//! Built once by the bootstrap and handed to every handler through axum
//! `State`. It owns the single metrics registry of the process.

use std::sync::Arc;

use crate::config::ServiceConfig;
use crate::obs::metrics::ServiceMetrics;
use crate::predict::{PlaceholderPredictor, Predictor};
use crate::readiness::ReadinessSet;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServiceConfig,
    metrics: ServiceMetrics,
    readiness: ReadinessSet,
    predictor: Arc<dyn Predictor>,
}

impl AppState {
    /// State with the default probes and the placeholder predictor.
    pub fn new(cfg: ServiceConfig) -> Self {
        let predictor = Arc::new(PlaceholderPredictor::new(cfg.model_path.clone()));
        Self::from_parts(cfg, ReadinessSet::defaults(), predictor)
    }

    pub fn from_parts(
        cfg: ServiceConfig,
        readiness: ReadinessSet,
        predictor: Arc<dyn Predictor>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                metrics: ServiceMetrics::default(),
                readiness,
                predictor,
            }),
        }
    }

    pub fn cfg(&self) -> &ServiceConfig {
        &self.inner.cfg
    }

    pub fn metrics(&self) -> &ServiceMetrics {
        &self.inner.metrics
    }

    pub fn readiness(&self) -> &ReadinessSet {
        &self.inner.readiness
    }

    pub fn predictor(&self) -> Arc<dyn Predictor> {
        Arc::clone(&self.inner.predictor)
    }
}
