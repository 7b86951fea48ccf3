// src/response/classifier.rs
//! Classification of failed gateway responses
//!
//! The default message comes from the response code table. An explicit error
//! carried in the body overrides it, in this order:
//!
//! 1. `body.error` is a map or list: descend into the first entry until a
//!    non-container leaf is reached
//! 2. `body.error` is a string
//! 3. `body` is a JSON-encoded string whose `error` field yields a message
//!
//! Classification never fails. Anything that cannot be read degrades to the
//! table message or the undefined-error sentinel.

use super::codes as response_codes;
use super::validator;
use crate::config::constants::compile_time::classification::{
    MAX_ERROR_UNWRAP_DEPTH, UNDEFINED_ERROR_MESSAGE,
};
use crate::logging::codes;
use crate::resolution::Dispatcher;
use crate::types::common::value_as_integer;
use crate::types::{Dispatched, ErrorObject, ResourceKind};
use serde_json::Value;

/// Builds [`ErrorObject`]s from failed responses
pub struct ErrorClassifier<'d> {
    dispatcher: &'d Dispatcher,
}

impl<'d> ErrorClassifier<'d> {
    pub fn new(dispatcher: &'d Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Classify a response, reconstructing `body.data` as `kind` when given
    pub fn classify(&self, response: &Value, kind: Option<ResourceKind>) -> ErrorObject {
        let body = response.get("body");
        let data = body
            .and_then(|body| body.get("data"))
            .filter(|data| !data.is_null());
        let response_code = data
            .and_then(|data| data.get("response_code"))
            .and_then(value_as_integer);

        let error_message = message_override(body).unwrap_or_else(|| default_message(response_code));

        let raw_object = match (kind, data) {
            (Some(kind), Some(data)) => self.reconstruct(data, kind),
            _ => None,
        };

        let error = ErrorObject {
            http_status_code: validator::status(response),
            response_code,
            error_message,
            raw_object,
        };

        log_success!(
            codes::success::ERROR_CLASSIFIED,
            "Classified failed response",
            "status" => format_optional(error.http_status_code),
            "response_code" => format_optional(error.response_code),
            "message" => &error.error_message
        );

        error
    }

    fn reconstruct(&self, data: &Value, kind: ResourceKind) -> Option<Dispatched> {
        match self.dispatcher.try_dispatch_kind(data, kind) {
            Ok(dispatched) => Some(dispatched),
            Err(error) => {
                log_warning!(
                    codes::classification::RECONSTRUCTION_FAILED,
                    "Could not rebuild resource data attached to error",
                    "kind" => kind,
                    "error" => error
                );
                None
            }
        }
    }
}

/// Table description for a response code, or the undefined-error sentinel
pub fn default_message(response_code: Option<i64>) -> String {
    let Some(code) = response_code else {
        return UNDEFINED_ERROR_MESSAGE.to_string();
    };

    match response_codes::get_description(code) {
        Some(description) => description.to_string(),
        None => {
            log_warning!(
                codes::classification::UNKNOWN_RESPONSE_CODE,
                "Response code not in table",
                "response_code" => code
            );
            UNDEFINED_ERROR_MESSAGE.to_string()
        }
    }
}

/// Explicit error message carried by the body, if any
pub fn message_override(body: Option<&Value>) -> Option<String> {
    match body? {
        Value::Object(body) => body.get("error").and_then(explicit_error),
        Value::String(encoded) => match serde_json::from_str::<Value>(encoded) {
            Ok(decoded) => decoded.get("error").and_then(explicit_error),
            Err(error) => {
                log_warning!(
                    codes::classification::MALFORMED_ERROR_BODY,
                    "Error body is a string but not valid JSON",
                    "error" => error
                );
                None
            }
        },
        _ => None,
    }
}

fn explicit_error(error: &Value) -> Option<String> {
    match error {
        Value::String(message) => Some(message.clone()),
        Value::Object(_) | Value::Array(_) => first_leaf(error),
        _ => None,
    }
}

/// Walk the first entry of nested maps and lists down to a scalar
fn first_leaf(error: &Value) -> Option<String> {
    let mut current = error;

    for _ in 0..MAX_ERROR_UNWRAP_DEPTH {
        current = match current {
            Value::Object(map) => map.values().next()?,
            Value::Array(items) => items.first()?,
            Value::String(message) => return Some(message.clone()),
            Value::Number(number) => return Some(number.to_string()),
            Value::Bool(flag) => return Some(flag.to_string()),
            Value::Null => return None,
        };
    }

    log_warning!(
        codes::classification::MALFORMED_ERROR_BODY,
        "Nested error exceeds unwrap limit",
        "limit" => MAX_ERROR_UNWRAP_DEPTH
    );
    None
}

fn format_optional(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
