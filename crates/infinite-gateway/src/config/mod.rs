//! Service config loader.
//!
//! Sources, lowest precedence first:
//! 1. built-in defaults
//! 2. an optional YAML file named by `INFINITE_CONFIG` (strict parsing)
//! 3. the individual environment variables (`PORT`, `LOG_LEVEL`, ...)

pub mod schema;

use std::fs;

use infinite_core::error::{InfiniteError, Result};

pub use schema::ServiceConfig;

/// Env var naming an optional YAML config file.
pub const CONFIG_PATH_ENV: &str = "INFINITE_CONFIG";

pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";
pub const ENV_MODEL_PATH: &str = "AI_MODEL_PATH";
pub const ENV_AWS_REGION: &str = "AWS_REGION";
pub const ENV_MAX_WORKERS: &str = "MAX_WORKERS";
pub const ENV_PORT: &str = "PORT";
pub const ENV_METRICS_PORT: &str = "METRICS_PORT";

pub fn load_from_file(path: &str) -> Result<ServiceConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| InfiniteError::Config(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ServiceConfig> {
    serde_yaml::from_str(s).map_err(|e| InfiniteError::Config(format!("invalid yaml: {e}")))
}

/// Load from the process environment.
pub fn from_env() -> Result<ServiceConfig> {
    load(|k| std::env::var(k).ok())
}

/// Load through an arbitrary variable lookup (the process env in production).
pub fn load<F>(lookup: F) -> Result<ServiceConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let base = match lookup(CONFIG_PATH_ENV) {
        Some(path) if !path.trim().is_empty() => load_from_file(path.trim())?,
        _ => ServiceConfig::default(),
    };
    apply_overrides(base, lookup)
}

/// Overlay env vars on `base`. Only type coercion is checked.
pub fn apply_overrides<F>(mut cfg: ServiceConfig, lookup: F) -> Result<ServiceConfig>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(v) = lookup(ENV_LOG_LEVEL) {
        cfg.log_level = v;
    }
    if let Some(v) = lookup(ENV_MODEL_PATH) {
        cfg.model_path = v;
    }
    if let Some(v) = lookup(ENV_AWS_REGION) {
        cfg.aws_region = v;
    }
    if let Some(v) = lookup(ENV_MAX_WORKERS) {
        cfg.max_workers = parse_var(ENV_MAX_WORKERS, &v)?;
    }
    if let Some(v) = lookup(ENV_PORT) {
        cfg.port = parse_var(ENV_PORT, &v)?;
    }
    if let Some(v) = lookup(ENV_METRICS_PORT) {
        cfg.metrics_port = parse_var(ENV_METRICS_PORT, &v)?;
    }
    Ok(cfg)
}

fn parse_var<T>(name: &str, raw: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| InfiniteError::Config(format!("{name}={raw:?} is not a valid number: {e}")))
}
