use crate::config::constants::compile_time::validation::{SUCCESS_STATUS_MAX, SUCCESS_STATUS_MIN};
use crate::types::common::value_as_integer;
use serde_json::Value;

/// HTTP-like status from `header.status`, accepting numeric strings
pub fn status(response: &Value) -> Option<i64> {
    response
        .get("header")?
        .get("status")
        .and_then(value_as_integer)
}

/// Status compared as a number, so fractional values keep their magnitude
fn numeric_status(response: &Value) -> Option<f64> {
    match response.get("header")?.get("status")? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// True iff a status is present and numerically within [200, 300)
pub fn is_success(response: &Value) -> bool {
    numeric_status(response).is_some_and(|status| {
        status >= SUCCESS_STATUS_MIN as f64 && status < SUCCESS_STATUS_MAX as f64
    })
}
