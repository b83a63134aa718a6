//! Approvals HTTP handler.
//!
//! - GET /api/approvals - List pending approvals derived from upstream customers

use axum::{Json, extract::State};

use crate::{
    error::AppError, models::approval::ApprovalRecord, services::approval_service,
    state::AppState,
};

/// List approvals.
///
/// # Response (200)
///
/// ```json
/// [
///   {
///     "sourceSystem": "FCUBS",
///     "module": "CUSTOMER",
///     "txnId": "C1",
///     "accountNumber": "C1",
///     "customerName": "Jane",
///     "amount": 0,
///     "branch": "000",
///     "status": "U",
///     "ageMinutes": 5,
///     "priority": "Normal",
///     "initiator": "SYSTEM",
///     "timestamp": "2026-01-15T10:30:00.000Z"
///   }
/// ]
/// ```
///
/// # Errors (500)
///
/// - `{ "error": "Server configuration error" }` when the upstream URL is unset
/// - `{ "error": "Failed to fetch approval/customer data", "details": [...] }`
/// - `{ "error": "Failed to map data structure" }`
pub async fn list_approvals(
    State(state): State<AppState>,
) -> Result<Json<Vec<ApprovalRecord>>, AppError> {
    let approvals = approval_service::fetch_approvals(&state).await?;

    Ok(Json(approvals))
}
