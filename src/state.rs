//! Shared application state and the upstream HTTP client.
//!
//! Handlers receive an `AppState` through axum's `State` extractor. It holds
//! the loaded configuration and a single `reqwest::Client`, whose connection
//! pool is reused across requests.

use std::sync::Arc;

use crate::config::Config;

/// State shared with every handler.
///
/// Cloning is cheap: the config sits behind an `Arc` and `reqwest::Client`
/// is itself a handle to a shared pool.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub client: reqwest::Client,
}

impl AppState {
    /// Build state from configuration, creating the upstream client.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        Ok(Self {
            config: Arc::new(config),
            client: create_client()?,
        })
    }
}

/// Create the HTTP client used for all upstream calls.
///
/// No client-wide timeout is set: the approvals call applies its own
/// per-request timeout and the details call waits for the upstream.
pub fn create_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
}
