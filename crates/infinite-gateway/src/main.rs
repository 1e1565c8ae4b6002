//! iNFINITE AI service binary.
//!
//! - Config from env (optionally a YAML base file via `INFINITE_CONFIG`)
//! - Runtime sized by `MAX_WORKERS`
//! - API on `PORT`, scrape listener on `METRICS_PORT`

use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use infinite_core::protocol::SERVICE_NAME;
use infinite_gateway::{app_state::AppState, config, server};

fn main() -> ExitCode {
    let cfg = match config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            fmt().with_env_filter(EnvFilter::new("info")).init();
            tracing::error!(error = %e, "config load failed");
            return ExitCode::FAILURE;
        }
    };

    // RUST_LOG wins over LOG_LEVEL when both are set.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.log_filter()));
    fmt().with_env_filter(filter).init();

    tracing::info!("starting {SERVICE_NAME}");
    tracing::info!(model_path = %cfg.model_path, "ai model path");
    tracing::info!(region = %cfg.aws_region, "aws region");
    tracing::info!(workers = cfg.workers(), "max workers");

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .worker_threads(cfg.workers())
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!(error = %e, "failed to build runtime");
            return ExitCode::FAILURE;
        }
    };

    let state = AppState::new(cfg);
    match runtime.block_on(server::run(state)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "server failed");
            ExitCode::FAILURE
        }
    }
}
