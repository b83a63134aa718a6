//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to automatically deserialize environment variables into a type-safe struct.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 3000
/// - `CUSTOMER_SERVICE_API_URL`: upstream customer list used by the approvals endpoint
/// - `CUSTOMER_ACCOUNT_QUERY_URL`: base URL of the customer/account query service
/// - `APPROVALS_TIMEOUT_MS` (optional): approvals upstream timeout, defaults to 15000
/// - `UPSTREAM_ENTITY`, `UPSTREAM_SOURCE`, `UPSTREAM_USERID` (optional): static
///   headers sent to the account query service
///
/// The upstream URLs are not required at startup. Each handler checks for its
/// own URL and answers with a configuration error when it is missing.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub server_port: u16,

    #[serde(default)]
    pub customer_service_api_url: Option<String>,

    #[serde(default)]
    pub customer_account_query_url: Option<String>,

    #[serde(default = "default_approvals_timeout_ms")]
    pub approvals_timeout_ms: u64,

    #[serde(default = "default_entity")]
    pub upstream_entity: String,

    #[serde(default = "default_source")]
    pub upstream_source: String,

    #[serde(default = "default_userid")]
    pub upstream_userid: String,
}

/// Default port if SERVER_PORT environment variable is not set.
fn default_port() -> u16 {
    3000
}

fn default_approvals_timeout_ms() -> u64 {
    15_000
}

fn default_entity() -> String {
    "ENTITY_ID1".to_string()
}

fn default_source() -> String {
    "FCAT".to_string()
}

fn default_userid() -> String {
    "SYSTEM".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: default_port(),
            customer_service_api_url: None,
            customer_account_query_url: None,
            approvals_timeout_ms: default_approvals_timeout_ms(),
            upstream_entity: default_entity(),
            upstream_source: default_source(),
            upstream_userid: default_userid(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This method first attempts to load a `.env` file (which is optional),
    /// then reads environment variables and deserializes them into a Config struct.
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values cannot be parsed into
    /// expected types (e.g., a non-numeric `SERVER_PORT`).
    pub fn from_env() -> Result<Self, envy::Error> {
        // Try to load .env file if it exists (does nothing if not found)
        dotenvy::dotenv().ok();

        // Field names are automatically converted: server_port -> SERVER_PORT
        envy::from_env::<Config>()
    }

    /// Approvals upstream URL, treating an empty value as unset.
    pub fn customer_service_url(&self) -> Option<&str> {
        non_empty(&self.customer_service_api_url)
    }

    /// Account query base URL, treating an empty value as unset.
    pub fn account_query_url(&self) -> Option<&str> {
        non_empty(&self.customer_account_query_url)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
