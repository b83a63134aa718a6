//! Account query service - fetches a single customer/account record upstream.
//!
//! The record is returned exactly as the upstream sends it; no field mapping
//! or shape validation is applied.

use serde_json::Value;
use url::Url;

use crate::error::AppError;
use crate::services::status_line;
use crate::state::AppState;

/// Fetch the record for a branch/account pair.
///
/// # Headers Sent
///
/// - `BRANCH: <brn>`
/// - `Entity`, `Source`, `Userid` from configuration
///
/// # Timeout
///
/// None. The call waits until the upstream answers or the transport fails.
///
/// # Errors
///
/// - `Configuration`: `CUSTOMER_ACCOUNT_QUERY_URL` is missing or not a usable base URL
/// - `UpstreamStatus`: non-2xx answer, carrying the upstream status and body text
/// - `Http`: transport failure or a body that is not JSON
pub async fn fetch_account_details(
    state: &AppState,
    brn: &str,
    acc: &str,
) -> Result<Value, AppError> {
    let base = state.config.account_query_url().ok_or_else(|| {
        AppError::Configuration(
            "Configuration Error: CUSTOMER_ACCOUNT_QUERY_URL missing".to_string(),
        )
    })?;

    let url = record_url(base, brn, acc)?;
    tracing::info!("Fetching details from: {}", url);

    let response = state
        .client
        .get(url.clone())
        .header("BRANCH", brn)
        .header("Entity", &state.config.upstream_entity)
        .header("Source", &state.config.upstream_source)
        .header("Userid", &state.config.upstream_userid)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await?;
        let message = format!("Failed to fetch record from {}: {}", url, status_line(status));
        tracing::error!("{} {}", message, body);
        return Err(AppError::UpstreamStatus {
            status,
            message,
            body,
        });
    }

    Ok(response.json::<Value>().await?)
}

/// Build `<base>/brn/<brn>/acc/<acc>`.
///
/// Branch and account are appended as percent-encoded path segments, so a
/// value containing `/` cannot change the upstream path.
pub fn record_url(base: &str, brn: &str, acc: &str) -> Result<Url, AppError> {
    let mut url = Url::parse(base).map_err(|e| {
        AppError::Configuration(format!(
            "Configuration Error: CUSTOMER_ACCOUNT_QUERY_URL is invalid: {}",
            e
        ))
    })?;

    url.path_segments_mut()
        .map_err(|_| {
            AppError::Configuration(
                "Configuration Error: CUSTOMER_ACCOUNT_QUERY_URL cannot be a base URL".to_string(),
            )
        })?
        .pop_if_empty()
        .extend(["brn", brn, "acc", acc]);

    Ok(url)
}
