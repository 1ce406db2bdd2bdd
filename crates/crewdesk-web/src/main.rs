// File: src/main.rs
// Purpose: Dashboard entry point: config, tracing, router

mod banner;
mod config;
mod handlers;
mod state;
mod views;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::load_default()?;
    let state = AppState::from_config(&config);
    let app = handlers::router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(%addr, "crewdesk dashboard listening");

    axum::serve(listener, app).await.context("server exited")?;
    Ok(())
}
