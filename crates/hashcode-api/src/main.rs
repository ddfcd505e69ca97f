//! # hashcode-api — Binary Entry Point
//!
//! Reads configuration from the environment, refuses to start on a missing
//! or empty `SECRET`, and serves the token API on `0.0.0.0:$PORT`
//! (default 8080).

use anyhow::Context;
use hashcode_api::config::AppConfig;
use hashcode_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env().map_err(|e| {
        tracing::error!("Configuration rejected: {e}");
        e
    })?;
    tracing::info!(
        port = config.port,
        algorithm = %config.secret.algorithm(),
        max_body_bytes = config.max_body_bytes,
        initial_requests = config.initial_requests,
        "configuration loaded"
    );

    let port = config.port;
    let app = hashcode_api::app(AppState::new(config));

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("hashcode API listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("shut down cleanly");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to install Ctrl-C handler: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
