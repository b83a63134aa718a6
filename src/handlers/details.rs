//! Account details HTTP handler.
//!
//! - POST /api/test/details - Fetch a raw customer/account record upstream

use axum::{Json, body::Bytes, extract::State};

use crate::{
    error::AppError,
    models::details::{DetailsRequest, DetailsResponse},
    services::account_query_service,
    state::AppState,
};

/// Fetch account details.
///
/// # Request Body
///
/// ```json
/// { "brn": "001", "acc": "123456" }
/// ```
///
/// The body is read as raw bytes and parsed here, so a malformed body is
/// answered with 500 and the parser message rather than axum's rejection.
///
/// # Response (200)
///
/// ```json
/// { "success": true, "data": { "...": "upstream record" } }
/// ```
///
/// # Errors
///
/// - 400 `{ "error": "Missing brn or acc" }`
/// - 500 `{ "error": "Configuration Error: CUSTOMER_ACCOUNT_QUERY_URL missing" }`
/// - upstream status `{ "error": "Failed to fetch record from ...", "details": "<upstream body>" }`
/// - 500 `{ "error": "<message>" }` for any other failure
pub async fn fetch_details(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<DetailsResponse>, AppError> {
    let result = details(&state, &body).await;

    if let Err(ref e) = result {
        if !matches!(e, AppError::UpstreamStatus { .. }) {
            tracing::error!("Details fetch error: {}", e);
        }
    }

    result.map(Json)
}

async fn details(state: &AppState, body: &[u8]) -> Result<DetailsResponse, AppError> {
    let request = DetailsRequest::from_body(body)?;
    tracing::debug!(brn = ?request.brn, acc = ?request.acc, "details request");

    let (brn, acc) = request
        .branch_and_account()
        .ok_or_else(|| AppError::InvalidRequest("Missing brn or acc".to_string()))?;

    let data = account_query_service::fetch_account_details(state, brn, acc).await?;

    Ok(DetailsResponse::new(data))
}
