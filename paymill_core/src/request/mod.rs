//! Outbound request models
//!
//! Each model serializes the subset of its fields an operation needs into a
//! flat, ordered parameter map handed to the transport layer.

pub mod checksum;
pub mod error;
pub mod operation;
pub mod transaction;

pub use checksum::ChecksumRequest;
pub use error::RequestError;
pub use operation::Operation;
pub use transaction::{ShoppingCart, TransactionRequest};

use crate::types::ResourceKind;
use serde_json::{Map, Value};

/// Ordered request parameters
pub type Parameters = Map<String, Value>;

/// Serialization of a request model per operation
pub trait Parameterize {
    /// Resource the model is sent to
    fn resource_kind(&self) -> ResourceKind;

    /// Endpoint segment, e.g. `"Transactions/"`
    fn service_resource(&self) -> String {
        self.resource_kind().service_resource()
    }

    fn parameterize(&self, operation: Operation) -> Parameters;

    /// Parameterize by operation name
    fn parameterize_named(&self, operation: &str) -> Result<Parameters, RequestError> {
        Ok(self.parameterize(operation.parse()?))
    }
}

/// Parameters every model sends for a single-resource lookup
pub(crate) fn get_one_parameters() -> Parameters {
    let mut parameters = Parameters::new();
    parameters.insert("count".to_string(), Value::from(1));
    parameters.insert("offset".to_string(), Value::from(0));
    parameters
}

/// Insert `value` under `key` only when set
pub(crate) fn insert_if_set<T>(parameters: &mut Parameters, key: &str, value: Option<T>)
where
    T: Into<Value>,
{
    if let Some(value) = value {
        parameters.insert(key.to_string(), value.into());
    }
}
