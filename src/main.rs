mod api_doc;
mod config;
mod cors;
mod error;
mod handlers;
mod models;
mod routes;

use anyhow::Context;
use config::Config;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "nextstep_api=info,tower_http=info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before the log filter reads RUST_LOG
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    tracing::info!("nextstep-api starting");

    match dotenv {
        Ok(path) => tracing::info!("Loaded environment variables from {}", path.display()),
        Err(_) => tracing::info!("No .env file found, using system environment variables"),
    }

    let config = Config::from_env()?;
    config.log_startup();

    let app = routes::build_router(&config);

    let listener = bind(&config).await?;

    tracing::info!("HTTP server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Binds the configured listen address.
async fn bind(config: &Config) -> anyhow::Result<TcpListener> {
    let address = format!("{}:{}", config.service_host, config.service_port);

    match TcpListener::bind((config.service_host.as_str(), config.service_port)).await {
        Ok(listener) => Ok(listener),
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", address, e);
            Err(e).with_context(|| format!("failed to bind {}", address))
        }
    }
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            tracing::info!("Received terminate signal");
        },
    }

    tracing::info!("Shutting down gracefully...");
}
