//! Approvals Gateway - library crate.
//!
//! Exposes the router and its building blocks so the binary and the
//! integration tests in `tests/` share one definition of the HTTP surface.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod state;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the HTTP router.
///
/// # Routes
///
/// - `GET /health` - liveness and configuration report
/// - `GET /api/approvals` - approvals derived from upstream customers
/// - `POST /api/test/details` - raw account record from the query service
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/api/approvals", get(handlers::approvals::list_approvals))
        .route("/api/test/details", post(handlers::details::fetch_details))
        // Add distributed tracing middleware for observability
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
