//! Service startup
//!
//! Startup either ends with a bound listener serving a non-empty word bank,
//! or fails before the listener is bound. Nothing is retried.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::info;
use wordmix_common::config::ServiceConfig;
use wordmix_common::WordBank;

use crate::{build_router, AppState};

/// Fetch, parse and filter the configured word list
pub async fn load_word_bank(config: &ServiceConfig) -> Result<WordBank> {
    info!("Loading words from {}", config.source);

    let bytes = config
        .source
        .fetch()
        .await
        .with_context(|| format!("Failed to read word list from {}", config.source))?;

    let bank = WordBank::from_csv(&bytes)
        .with_context(|| format!("Failed to build word bank from {}", config.source))?;

    if config.debug {
        info!("Number of elements in list: {}", bank.candidate_count());
        info!("Number of elements in filtered list: {}", bank.len());
    }
    info!("✓ Word bank ready ({} eligible words)", bank.len());

    Ok(bank)
}

/// Load the word bank, then bind and serve until shutdown
pub async fn run(config: ServiceConfig) -> Result<()> {
    let bank = load_word_bank(&config).await?;
    let app = build_router(AppState::new(bank), &config.static_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("wordmix-server listening on http://{}", addr);
    info!("Static files served from {}", config.static_dir.display());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install terminate handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
