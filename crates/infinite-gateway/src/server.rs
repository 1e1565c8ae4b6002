//! Listener lifecycle: bind, serve, shut down on Ctrl-C.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use infinite_core::error::{InfiniteError, Result};

use crate::{app_state::AppState, router};

/// Serve the API on `PORT` and, if it differs, a scrape-only listener on
/// `METRICS_PORT`. Both share the registry held by `state`.
pub async fn run(state: AppState) -> Result<()> {
    let cfg = state.cfg();
    let api = serve(cfg.listen_addr(), router::build_router(state.clone()), "api");

    match cfg.metrics_addr() {
        Some(addr) => {
            let scrape = serve(addr, router::build_metrics_router(state.clone()), "metrics");
            futures_util::future::try_join(api, scrape).await.map(|_| ())
        }
        None => api.await,
    }
}

async fn serve(addr: SocketAddr, app: Router, role: &'static str) -> Result<()> {
    let listener = TcpListener::bind(addr).await.map_err(|e| {
        InfiniteError::Internal(format!("failed to bind {role} listener {addr}: {e}"))
    })?;

    tracing::info!(%addr, role, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| InfiniteError::Internal(format!("{role} server failed: {e}")))?;

    tracing::info!(role, "listener stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
