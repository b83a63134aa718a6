//! Upstream-facing services.
//!
//! Services hold the upstream call logic, separated from the HTTP handlers.

pub mod account_query_service;
pub mod approval_service;

use reqwest::StatusCode;

/// Render a status as `"<code> <reason>"`, e.g. `"404 Not Found"`.
pub(crate) fn status_line(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}
