//! Customer and approval data models.
//!
//! This module defines:
//! - `CustomerRecord`: an upstream customer entry, kept as an opaque JSON object
//! - `ApprovalRecord`: the simplified approval shape returned to clients

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

/// Core banking system every approval is attributed to.
pub const SOURCE_SYSTEM: &str = "FCUBS";

/// Module every approval is attributed to.
pub const MODULE: &str = "CUSTOMER";

/// Placeholder amount; customer records carry no monetary value.
pub const PLACEHOLDER_AMOUNT: i64 = 0;

/// Placeholder age in minutes.
pub const PLACEHOLDER_AGE_MINUTES: u32 = 5;

/// Placeholder priority.
pub const PLACEHOLDER_PRIORITY: &str = "Normal";

/// Customer record as returned by the upstream customer service.
///
/// The upstream owns this shape, so it is not modelled as a struct. Only
/// a handful of keys are ever read:
///
/// - `CUSTOMER_NO`
/// - `CUSTOMER_NAME1`
/// - `LOCAL_BRANCH`
/// - `AUTH_STAT`
/// - `MAKER_ID`
/// - `MAKER_DT_STAMP`
#[derive(Debug, Clone)]
pub struct CustomerRecord(Map<String, Value>);

impl CustomerRecord {
    /// Read a scalar field as text.
    ///
    /// Blank values (see [`is_blank`]) and arrays or objects read as `None`.
    /// Numbers and `true` are rendered as their JSON text.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            value if is_blank(value) => None,
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

impl TryFrom<Value> for CustomerRecord {
    type Error = String;

    /// Only `null` is rejected. Other non-object entries carry none of the
    /// customer keys and become an empty record.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Ok(Self(fields)),
            Value::Null => Err("expected a customer object, got null".to_string()),
            _ => Ok(Self(Map::new())),
        }
    }
}

/// `null`, `false`, `0` and `""` carry no usable value.
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Approval record returned by `GET /api/approvals`.
///
/// # JSON Example
///
/// ```json
/// {
///   "sourceSystem": "FCUBS",
///   "module": "CUSTOMER",
///   "txnId": "C1",
///   "accountNumber": "C1",
///   "customerName": "Jane",
///   "amount": 0,
///   "branch": "000",
///   "status": "U",
///   "ageMinutes": 5,
///   "priority": "Normal",
///   "initiator": "SYSTEM",
///   "timestamp": "2026-01-15T10:30:00.000Z"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalRecord {
    pub source_system: String,
    pub module: String,

    /// Customer number doubles as the transaction id
    pub txn_id: String,

    /// Customer number doubles as the account number
    pub account_number: String,

    pub customer_name: String,
    pub amount: i64,
    pub branch: String,

    /// Authorization status (`U` = unauthorized)
    pub status: String,

    pub age_minutes: u32,
    pub priority: String,
    pub initiator: String,

    /// Maker timestamp, or the mapping time when the upstream has none
    pub timestamp: String,
}

impl ApprovalRecord {
    /// Derive an approval from a customer record.
    ///
    /// `now` is used as the timestamp when the record has no `MAKER_DT_STAMP`.
    pub fn from_customer(customer: &CustomerRecord, now: DateTime<Utc>) -> Self {
        let customer_no = customer.text("CUSTOMER_NO");

        Self {
            source_system: SOURCE_SYSTEM.to_string(),
            module: MODULE.to_string(),
            txn_id: customer_no.clone().unwrap_or_else(|| "N/A".to_string()),
            account_number: customer_no.unwrap_or_else(|| "N/A".to_string()),
            customer_name: customer
                .text("CUSTOMER_NAME1")
                .unwrap_or_else(|| "Unknown".to_string()),
            amount: PLACEHOLDER_AMOUNT,
            branch: customer
                .text("LOCAL_BRANCH")
                .unwrap_or_else(|| "000".to_string()),
            status: customer
                .text("AUTH_STAT")
                .unwrap_or_else(|| "U".to_string()),
            age_minutes: PLACEHOLDER_AGE_MINUTES,
            priority: PLACEHOLDER_PRIORITY.to_string(),
            initiator: customer
                .text("MAKER_ID")
                .unwrap_or_else(|| "SYSTEM".to_string()),
            timestamp: customer
                .text("MAKER_DT_STAMP")
                .unwrap_or_else(|| now.to_rfc3339_opts(SecondsFormat::Millis, true)),
        }
    }
}

/// Short name of a JSON value's type, for diagnostics.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 4, 5, 6, 7).unwrap()
    }

    fn customer(value: Value) -> CustomerRecord {
        CustomerRecord::try_from(value).unwrap()
    }

    #[test]
    fn maps_every_source_field() {
        let record = ApprovalRecord::from_customer(
            &customer(json!({
                "CUSTOMER_NO": "000123",
                "CUSTOMER_NAME1": "Jane Doe",
                "LOCAL_BRANCH": "045",
                "AUTH_STAT": "A",
                "MAKER_ID": "TELLER7",
                "MAKER_DT_STAMP": "2025-11-02T09:15:00",
                "RECORD_STAT": "O"
            })),
            fixed_now(),
        );

        assert_eq!(record.source_system, "FCUBS");
        assert_eq!(record.module, "CUSTOMER");
        assert_eq!(record.txn_id, "000123");
        assert_eq!(record.account_number, "000123");
        assert_eq!(record.customer_name, "Jane Doe");
        assert_eq!(record.amount, 0);
        assert_eq!(record.branch, "045");
        assert_eq!(record.status, "A");
        assert_eq!(record.age_minutes, 5);
        assert_eq!(record.priority, "Normal");
        assert_eq!(record.initiator, "TELLER7");
        assert_eq!(record.timestamp, "2025-11-02T09:15:00");
    }

    #[test]
    fn applies_defaults_for_absent_fields() {
        let record = ApprovalRecord::from_customer(&customer(json!({})), fixed_now());

        assert_eq!(record.txn_id, "N/A");
        assert_eq!(record.account_number, "N/A");
        assert_eq!(record.customer_name, "Unknown");
        assert_eq!(record.branch, "000");
        assert_eq!(record.status, "U");
        assert_eq!(record.initiator, "SYSTEM");
        assert_eq!(record.timestamp, "2026-03-04T05:06:07.000Z");
    }

    #[test]
    fn treats_empty_and_null_as_absent() {
        let record = ApprovalRecord::from_customer(
            &customer(json!({
                "CUSTOMER_NO": "",
                "CUSTOMER_NAME1": null,
                "LOCAL_BRANCH": "",
                "AUTH_STAT": { "nested": true },
                "MAKER_ID": "",
                "MAKER_DT_STAMP": ""
            })),
            fixed_now(),
        );

        assert_eq!(record.txn_id, "N/A");
        assert_eq!(record.customer_name, "Unknown");
        assert_eq!(record.branch, "000");
        assert_eq!(record.status, "U");
        assert_eq!(record.initiator, "SYSTEM");
        assert_eq!(record.timestamp, "2026-03-04T05:06:07.000Z");
    }

    #[test]
    fn renders_numeric_customer_number() {
        let record =
            ApprovalRecord::from_customer(&customer(json!({ "CUSTOMER_NO": 42 })), fixed_now());

        assert_eq!(record.txn_id, "42");
        assert_eq!(record.account_number, "42");
    }

    #[test]
    fn serializes_in_camel_case() {
        let record = ApprovalRecord::from_customer(
            &customer(json!({ "CUSTOMER_NO": "C1", "CUSTOMER_NAME1": "Jane" })),
            fixed_now(),
        );

        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "sourceSystem": "FCUBS",
                "module": "CUSTOMER",
                "txnId": "C1",
                "accountNumber": "C1",
                "customerName": "Jane",
                "amount": 0,
                "branch": "000",
                "status": "U",
                "ageMinutes": 5,
                "priority": "Normal",
                "initiator": "SYSTEM",
                "timestamp": "2026-03-04T05:06:07.000Z"
            })
        );
    }

    #[test]
    fn zero_and_false_fall_back_to_defaults() {
        let record = ApprovalRecord::from_customer(
            &customer(json!({
                "CUSTOMER_NO": 0,
                "LOCAL_BRANCH": 0.0,
                "AUTH_STAT": false,
                "MAKER_ID": true
            })),
            fixed_now(),
        );

        assert_eq!(record.txn_id, "N/A");
        assert_eq!(record.account_number, "N/A");
        assert_eq!(record.branch, "000");
        assert_eq!(record.status, "U");
        assert_eq!(record.initiator, "true");
    }

    #[test]
    fn scalar_entries_map_to_default_records() {
        for entry in [json!(5), json!("x"), json!(false), json!([1, 2])] {
            let record = ApprovalRecord::from_customer(&customer(entry), fixed_now());

            assert_eq!(record.txn_id, "N/A");
            assert_eq!(record.customer_name, "Unknown");
            assert_eq!(record.branch, "000");
            assert_eq!(record.initiator, "SYSTEM");
        }
    }

    #[test]
    fn rejects_null_customer() {
        let err = CustomerRecord::try_from(json!(null)).unwrap_err();
        assert_eq!(err, "expected a customer object, got null");
    }

    #[test]
    fn blank_values() {
        assert!(is_blank(&json!(null)));
        assert!(is_blank(&json!(false)));
        assert!(is_blank(&json!(0)));
        assert!(is_blank(&json!("")));
        assert!(!is_blank(&json!("0")));
        assert!(!is_blank(&json!([])));
        assert!(!is_blank(&json!({})));
    }
}
