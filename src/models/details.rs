//! Account details request/response types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body for `POST /api/test/details`.
///
/// # JSON Example
///
/// ```json
/// {
///   "brn": "001",
///   "acc": "123456"
/// }
/// ```
///
/// Both fields are required. They are optional here so that a missing field
/// is reported as a validation error (400) rather than a parse error.
#[derive(Debug, Deserialize)]
pub struct DetailsRequest {
    /// Branch code
    #[serde(default)]
    pub brn: Option<String>,

    /// Account number
    #[serde(default)]
    pub acc: Option<String>,
}

impl DetailsRequest {
    /// Parse a raw request body.
    ///
    /// Only a JSON object can carry `brn` and `acc`. Any other valid JSON
    /// (an array, a string, `null`) yields a request with neither field.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not JSON, or if `brn`/`acc` is present
    /// but not a string.
    pub fn from_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        match serde_json::from_slice::<Value>(body)? {
            fields @ Value::Object(_) => serde_json::from_value(fields),
            _ => Ok(Self {
                brn: None,
                acc: None,
            }),
        }
    }

    /// Branch and account, if both are present and non-empty.
    pub fn branch_and_account(&self) -> Option<(&str, &str)> {
        let brn = self.brn.as_deref().filter(|v| !v.is_empty())?;
        let acc = self.acc.as_deref().filter(|v| !v.is_empty())?;
        Some((brn, acc))
    }
}

/// Success envelope wrapping the upstream record verbatim.
///
/// ```json
/// { "success": true, "data": { "...": "upstream JSON" } }
/// ```
#[derive(Debug, Serialize)]
pub struct DetailsResponse {
    pub success: bool,
    pub data: Value,
}

impl DetailsResponse {
    pub fn new(data: Value) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
