use std::net::{Ipv4Addr, SocketAddr};

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default = "default_model_path")]
    pub model_path: String,

    #[serde(default = "default_aws_region")]
    pub aws_region: String,

    #[serde(default = "default_max_workers")]
    pub max_workers: usize,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_metrics_port")]
    pub metrics_port: u16,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            model_path: default_model_path(),
            aws_region: default_aws_region(),
            max_workers: default_max_workers(),
            port: default_port(),
            metrics_port: default_metrics_port(),
        }
    }
}

impl ServiceConfig {
    /// Runtime worker threads; never below one.
    pub fn workers(&self) -> usize {
        self.max_workers.max(1)
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }

    /// Separate scrape listener, only when it differs from the main port.
    pub fn metrics_addr(&self) -> Option<SocketAddr> {
        (self.metrics_port != self.port)
            .then(|| SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.metrics_port)))
    }

    /// `tracing` filter directive for `log_level`.
    ///
    /// Accepts the conventional level names (`DEBUG`, `INFO`, `WARNING`,
    /// `ERROR`, `CRITICAL`) case-insensitively; anything else is passed
    /// through so full `EnvFilter` directives also work.
    pub fn log_filter(&self) -> String {
        let lvl = self.log_level.trim();
        match lvl.to_ascii_uppercase().as_str() {
            "TRACE" => "trace".into(),
            "DEBUG" => "debug".into(),
            "INFO" | "" => "info".into(),
            "WARN" | "WARNING" => "warn".into(),
            "ERROR" | "CRITICAL" | "FATAL" => "error".into(),
            _ => lvl.to_string(),
        }
    }
}

fn default_log_level() -> String {
    "INFO".into()
}
fn default_model_path() -> String {
    "/models".into()
}
fn default_aws_region() -> String {
    "us-east-1".into()
}
fn default_max_workers() -> usize {
    4
}
fn default_port() -> u16 {
    8080
}
fn default_metrics_port() -> u16 {
    9090
}
