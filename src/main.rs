// main.rs
mod config;
mod devices;
mod docs;
mod error;
mod handlers;
mod metrics;
mod middleware;
mod models;
mod routes;

use anyhow::Context;
use middleware::Pipeline;
use models::AppState;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = config::Settings::new()
        .inspect_err(|e| error!("Failed to load config: {e}"))
        .context("Failed to load config")?;

    if settings.metrics.enabled {
        metrics::setup_metrics(settings.metrics.port)
            .context("Failed to setup metrics")?;
        info!("Metrics exporter listening on {}", settings.metrics.port);
    }

    let state = Arc::new(AppState::new()?);
    let pipeline = Pipeline::standard(settings.server.latency());
    let app = routes::router(state, pipeline);

    let port = settings.server.port;
    let listener = match tokio::net::TcpListener::bind((settings.server.host.as_str(), port)).await
    {
        Ok(listener) => listener,
        Err(e) => {
            error!("Lighting service could not start on port {port}: {e}");
            return Err(e).context("Failed to bind address");
        }
    };

    info!("Lighting service is listening on {port}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
