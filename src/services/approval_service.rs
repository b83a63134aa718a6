//! Approval service - fetches customers upstream and reshapes them into approvals.
//!
//! # Flow
//!
//! 1. Resolve the customer service URL from configuration
//! 2. Make one GET attempt, bounded by the approvals timeout
//! 3. Map the customer array into approval records
//!
//! A failed attempt is reported with its diagnostic in `details`; a payload
//! of the wrong shape is reported as a mapping error.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::error::AppError;
use crate::models::approval::{ApprovalRecord, CustomerRecord, is_blank, json_kind};
use crate::services::status_line;
use crate::state::AppState;

/// Fetch customers from the upstream and convert them into approvals.
///
/// # Errors
///
/// - `Configuration`: `CUSTOMER_SERVICE_API_URL` is not set (no request is made)
/// - `UpstreamUnavailable`: the attempt failed, with its diagnostic
/// - `Mapping`: the upstream payload is not an array of objects
pub async fn fetch_approvals(state: &AppState) -> Result<Vec<ApprovalRecord>, AppError> {
    let Some(url) = state.config.customer_service_url() else {
        tracing::error!("CUSTOMER_SERVICE_API_URL is not defined in environment variables");
        return Err(AppError::Configuration(
            "Server configuration error".to_string(),
        ));
    };

    let timeout = Duration::from_millis(state.config.approvals_timeout_ms);

    let payload = match fetch_customers(&state.client, url, timeout).await {
        Ok(payload) => payload,
        Err(diagnostic) => {
            tracing::error!("All fetch attempts failed: {}", diagnostic);
            return Err(AppError::UpstreamUnavailable {
                details: vec![diagnostic],
            });
        }
    };

    // A blank body (`null`, `false`, `0`, `""`) is no data at all, not a bad shape.
    if is_blank(&payload) {
        tracing::error!("Upstream returned no customer data: {}", payload);
        return Err(AppError::UpstreamUnavailable {
            details: Vec::new(),
        });
    }

    map_approvals(payload, Utc::now()).inspect_err(|e| {
        if let AppError::Mapping(reason) = e {
            tracing::error!("Data mapping error: {}", reason);
        }
    })
}

/// Single GET attempt against the customer service.
///
/// Returns the parsed JSON body, or a diagnostic describing why the attempt
/// failed (timeout, transport error, non-2xx status, or undecodable body).
pub async fn fetch_customers(
    client: &reqwest::Client,
    url: &str,
    timeout: Duration,
) -> Result<Value, String> {
    tracing::info!("Attempting to fetch from: {}", url);

    let response = client
        .get(url)
        .timeout(timeout)
        .send()
        .await
        .map_err(|e| attempt_error(url, &e, timeout))?;

    let status = response.status();
    if !status.is_success() {
        let message = format!("Failed to fetch from {}: {}", url, status_line(status));
        tracing::warn!("{}", message);
        return Err(message);
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| attempt_error(url, &e, timeout))
}

/// Map an upstream payload into approval records.
///
/// `now` stamps records that carry no maker timestamp.
pub fn map_approvals(payload: Value, now: DateTime<Utc>) -> Result<Vec<ApprovalRecord>, AppError> {
    let entries = match payload {
        Value::Array(entries) => entries,
        other => {
            return Err(AppError::Mapping(format!(
                "expected an array of customers, got {}",
                json_kind(&other)
            )));
        }
    };

    entries
        .into_iter()
        .map(|entry| {
            CustomerRecord::try_from(entry)
                .map(|customer| ApprovalRecord::from_customer(&customer, now))
                .map_err(AppError::Mapping)
        })
        .collect()
}

fn attempt_error(url: &str, err: &reqwest::Error, timeout: Duration) -> String {
    let message = if err.is_timeout() {
        format!(
            "Error fetching from {}: request timed out after {}ms",
            url,
            timeout.as_millis()
        )
    } else {
        format!("Error fetching from {}: {}", url, err)
    };
    tracing::warn!("{}", message);
    message
}
