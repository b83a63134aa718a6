//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, shared state)
//! 2. Delegates the upstream call to a service
//! 3. Returns HTTP response (JSON, status code)

/// Approvals listing endpoint
pub mod approvals;
/// Account details endpoint
pub mod details;
/// Health check endpoint
pub mod health;
