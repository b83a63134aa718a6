//! Approvals Gateway - Main Application Entry Point
//!
//! A small REST front for the core banking backend. It reshapes upstream
//! customer records into approval records and proxies single account lookups.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Upstream Client**: reqwest (one shared connection pool)
//! - **Format**: JSON requests/responses
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Create the upstream HTTP client
//! 3. Build HTTP router with routes and middleware
//! 4. Start server on configured port

use approvals_gateway::{config, state::AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = config::Config::from_env()?;
    tracing::info!("Configuration loaded");

    if config.customer_service_url().is_none() {
        tracing::warn!("CUSTOMER_SERVICE_API_URL is not set; /api/approvals will fail");
    }
    if config.account_query_url().is_none() {
        tracing::warn!("CUSTOMER_ACCOUNT_QUERY_URL is not set; /api/test/details will fail");
    }

    let addr = format!("0.0.0.0:{}", config.server_port);

    // Shared upstream client
    let state = AppState::new(config)?;
    tracing::info!("Upstream client created");

    let app = approvals_gateway::app(state);

    // Bind to network address and start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
