//! Data models for upstream payloads and API request/response bodies.

/// Customer and approval records
pub mod approval;
/// Account details request and response
pub mod details;
