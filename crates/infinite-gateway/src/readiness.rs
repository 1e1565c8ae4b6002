//! Readiness probes behind `GET /ready`.
//!
//! Each probe is a named boolean. The service is ready only when every probe
//! reports `true`; a failing probe is data (503), never an error.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;

/// A single named readiness check.
#[async_trait]
pub trait ReadinessProbe: Send + Sync {
    fn name(&self) -> &'static str;
    async fn check(&self) -> bool;
}

/// Probe with a fixed answer. The built-in checks are placeholders of this kind.
pub struct StaticProbe {
    name: &'static str,
    ok: bool,
}

impl StaticProbe {
    pub fn new(name: &'static str, ok: bool) -> Self {
        Self { name, ok }
    }
}

#[async_trait]
impl ReadinessProbe for StaticProbe {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn check(&self) -> bool {
        self.ok
    }
}

/// Ordered set of probes evaluated by the readiness endpoint.
#[derive(Clone, Default)]
pub struct ReadinessSet {
    probes: Vec<Arc<dyn ReadinessProbe>>,
}

impl ReadinessSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// `model_loaded` and `aws_connection`, both passing.
    pub fn defaults() -> Self {
        Self::new()
            .with(Arc::new(StaticProbe::new("model_loaded", true)))
            .with(Arc::new(StaticProbe::new("aws_connection", true)))
    }

    /// Add a probe. A later probe with the same name replaces the earlier one.
    pub fn with(mut self, probe: Arc<dyn ReadinessProbe>) -> Self {
        self.probes.retain(|p| p.name() != probe.name());
        self.probes.push(probe);
        self
    }

    /// Run every probe and collect `name -> ok`.
    pub async fn evaluate(&self) -> BTreeMap<String, bool> {
        let mut out = BTreeMap::new();
        for p in &self.probes {
            out.insert(p.name().to_string(), p.check().await);
        }
        out
    }
}
