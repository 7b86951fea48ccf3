//! Raw response values and lenient field access
//!
//! Gateway payloads omit different keys depending on the operation that produced
//! them, so every read here yields `None` instead of failing when a key is missing
//! or carries an unexpected JSON type.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

/// Untyped response value as deserialized from the wire
pub type RawValue = Value;

/// Untyped response object
pub type RawMap = Map<String, Value>;

/// Read-only view over a raw object with type-tolerant accessors
#[derive(Debug, Clone, Copy)]
pub struct FieldReader<'a> {
    map: &'a RawMap,
}

impl<'a> FieldReader<'a> {
    pub fn new(map: &'a RawMap) -> Self {
        Self { map }
    }

    /// Raw value for a key, treating JSON null as absent
    pub fn value(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key).filter(|value| !value.is_null())
    }

    /// String field; numbers are rendered to their decimal form
    pub fn string(&self, key: &str) -> Option<String> {
        match self.value(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Integer field; numeric strings are accepted
    pub fn integer(&self, key: &str) -> Option<i64> {
        value_as_integer(self.value(key)?)
    }

    /// Boolean field; `"true"`/`"false"` strings are accepted
    pub fn boolean(&self, key: &str) -> Option<bool> {
        match self.value(key)? {
            Value::Bool(b) => Some(*b),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// List of strings, skipping non-string entries
    pub fn string_list(&self, key: &str) -> Option<Vec<String>> {
        match self.value(key)? {
            Value::Array(items) => Some(
                items
                    .iter()
                    .filter_map(|item| item.as_str().map(str::to_string))
                    .collect(),
            ),
            _ => None,
        }
    }

    /// Nested object
    pub fn object(&self, key: &str) -> Option<FieldReader<'a>> {
        self.value(key)?.as_object().map(FieldReader::new)
    }

    /// Raw copy of a field kept untyped (invoices, fees)
    pub fn raw(&self, key: &str) -> Option<Value> {
        self.value(key).cloned()
    }
}

/// Integer from a JSON number or numeric string
pub fn value_as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Fields shared by every resource
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResourceMeta {
    pub id: Option<String>,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
    pub app_id: Option<String>,
}

impl ResourceMeta {
    pub fn read(fields: &FieldReader<'_>) -> Self {
        Self {
            id: fields.string("id"),
            created_at: fields.integer("created_at"),
            updated_at: fields.integer("updated_at"),
            app_id: fields.string("app_id"),
        }
    }

    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        self.created_at.and_then(epoch_to_utc)
    }

    pub fn updated_at_utc(&self) -> Option<DateTime<Utc>> {
        self.updated_at.and_then(epoch_to_utc)
    }
}

/// Convert gateway epoch seconds to a UTC timestamp
pub fn epoch_to_utc(seconds: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(seconds, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> RawMap {
        match value {
            Value::Object(map) => map,
            _ => panic!("test fixture must be an object"),
        }
    }

    #[test]
    fn test_lenient_scalars() {
        let raw = map(json!({
            "amount": "4200",
            "origin_amount": 4200,
            "float_whole": 12.0,
            "float_frac": 12.5,
            "livemode": false,
            "flag_text": "true",
            "expire_month": 12,
            "description": null,
            "bogus": {"nested": true}
        }));
        let fields = FieldReader::new(&raw);

        assert_eq!(fields.integer("amount"), Some(4200));
        assert_eq!(fields.integer("origin_amount"), Some(4200));
        assert_eq!(fields.integer("float_whole"), Some(12));
        assert_eq!(fields.integer("float_frac"), None);
        assert_eq!(fields.boolean("livemode"), Some(false));
        assert_eq!(fields.boolean("flag_text"), Some(true));
        assert_eq!(fields.string("expire_month"), Some("12".to_string()));
        assert_eq!(fields.string("description"), None);
        assert_eq!(fields.string("bogus"), None);
        assert_eq!(fields.string("missing"), None);
        assert!(fields.object("bogus").is_some());
    }

    #[test]
    fn test_string_list_skips_non_strings() {
        let raw = map(json!({"event_types": ["transaction.succeeded", 7, "refund.succeeded"]}));
        let fields = FieldReader::new(&raw);
        assert_eq!(
            fields.string_list("event_types"),
            Some(vec![
                "transaction.succeeded".to_string(),
                "refund.succeeded".to_string()
            ])
        );
    }

    #[test]
    fn test_meta_and_timestamps() {
        let raw = map(json!({
            "id": "tran_1",
            "created_at": 1349946151,
            "updated_at": "1349946152",
            "app_id": null
        }));
        let meta = ResourceMeta::read(&FieldReader::new(&raw));

        assert_eq!(meta.id.as_deref(), Some("tran_1"));
        assert_eq!(meta.created_at, Some(1349946151));
        assert_eq!(meta.updated_at, Some(1349946152));
        assert_eq!(meta.app_id, None);
        assert_eq!(
            meta.created_at_utc().map(|t| t.to_rfc3339()),
            Some("2012-10-11T09:02:31+00:00".to_string())
        );
    }
}
