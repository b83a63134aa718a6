//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// Every handler returns `Result<_, AppError>`; nothing here is fatal to the
/// process. Each variant maps to a status code and an error envelope.
///
/// # Error Categories
///
/// - **Configuration Errors**: an upstream URL is not configured
/// - **Validation Errors**: the request body is missing required fields
/// - **Upstream Errors**: the upstream was unreachable, timed out, or answered non-2xx
/// - **Mapping Errors**: the upstream payload could not be reshaped
/// - **Unexpected Errors**: body parsing or transport failures
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A required configuration value is absent.
    ///
    /// Returns HTTP 500. The String is the message shown to the caller.
    #[error("{0}")]
    Configuration(String),

    /// Request body is missing required fields.
    ///
    /// Returns HTTP 400.
    #[error("{0}")]
    InvalidRequest(String),

    /// Every upstream attempt failed.
    ///
    /// Returns HTTP 500 with the per-attempt diagnostics as `details`.
    #[error("Failed to fetch approval/customer data")]
    UpstreamUnavailable { details: Vec<String> },

    /// Upstream answered with a non-success status.
    ///
    /// The upstream status is propagated as the response status and the raw
    /// upstream body is returned as `details`.
    #[error("{message}")]
    UpstreamStatus {
        status: StatusCode,
        message: String,
        body: String,
    },

    /// Upstream payload did not have the expected shape.
    ///
    /// Returns HTTP 500. The String is logged, not shown to the caller.
    #[error("Failed to map data structure")]
    Mapping(String),

    /// Transport or response decoding failure.
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// Request body is not valid JSON for the expected shape.
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// ```json
/// { "error": "Human-readable error message", "details": ["optional"] }
/// ```
///
/// # Status Code Mapping
///
/// - `InvalidRequest` → 400 Bad Request
/// - `UpstreamStatus` → the upstream status
/// - everything else → 500 Internal Server Error
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.to_string();

        let (status, body) = match self {
            AppError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, json!({ "error": message })),
            AppError::UpstreamUnavailable { details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": message, "details": details }),
            ),
            AppError::UpstreamStatus { status, body, .. } => {
                (status, json!({ "error": message, "details": body }))
            }
            AppError::Configuration(_)
            | AppError::Mapping(_)
            | AppError::Http(_)
            | AppError::Json(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": message }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
