//! Health check endpoint for service monitoring.

use crate::state::AppState;
use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Health check response.
///
/// Reports whether each upstream URL is configured. Upstreams are not contacted.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Overall service status
    pub status: String,

    /// `configured` or `missing`
    pub customer_service: String,

    /// `configured` or `missing`
    pub account_query: String,

    /// Current server timestamp
    pub timestamp: DateTime<Utc>,
}

/// Health check handler.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "status": "healthy",
///   "customerService": "configured",
///   "accountQuery": "missing",
///   "timestamp": "2026-01-15T10:30:00Z"
/// }
/// ```
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        customer_service: presence(state.config.customer_service_url()),
        account_query: presence(state.config.account_query_url()),
        timestamp: Utc::now(),
    })
}

fn presence(value: Option<&str>) -> String {
    match value {
        Some(_) => "configured".to_string(),
        None => "missing".to_string(),
    }
}
