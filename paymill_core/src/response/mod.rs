//! Response validation, error classification and the handler facade

pub mod classifier;
pub mod codes;
pub mod handler;
pub mod validator;

pub use classifier::ErrorClassifier;
pub use codes::{ResponseCode, ResponseCodeCategory};
pub use handler::ResponseHandler;
pub use validator::is_success;
