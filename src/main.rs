//! Strictly Guessing - Unified CLI
//!
//! Number guessing game playable in the terminal or over HTTP.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use strictly_guessing::{SessionManager, router, run_tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play => tokio::task::spawn_blocking(run_tui).await?,
        Command::Http { port, host } => run_http_server(host, port).await,
    }
}

/// Run the HTTP game server
#[instrument]
async fn run_http_server(host: String, port: u16) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,strictly_guessing=debug")),
        )
        .init();

    info!("Starting Strictly Guessing HTTP server");

    let app = router(SessionManager::new());

    let listener = tokio::net::TcpListener::bind((host.as_str(), port)).await?;
    info!("Server ready at http://{}:{}/", host, port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}
