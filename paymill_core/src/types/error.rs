use super::models::Dispatched;
use serde::Serialize;

/// Typed description of a failed gateway response
///
/// `error_message` is always populated; when neither the code table nor the
/// error body yields text it holds the undefined-error sentinel.
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
#[error("{error_message} (status: {http_status_code:?}, response code: {response_code:?})")]
pub struct ErrorObject {
    pub http_status_code: Option<i64>,
    pub response_code: Option<i64>,
    pub error_message: String,
    /// Best-effort reconstruction of resource data that accompanied the error
    pub raw_object: Option<Dispatched>,
}

impl ErrorObject {
    pub fn new(error_message: impl Into<String>) -> Self {
        Self {
            http_status_code: None,
            response_code: None,
            error_message: error_message.into(),
            raw_object: None,
        }
    }
}
