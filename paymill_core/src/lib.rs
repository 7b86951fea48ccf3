//! Response normalization and error classification for the Paymill API
//!
//! Raw gateway responses are validated, then either rebuilt into typed resource
//! graphs ([`Dispatcher`]) or classified into an [`ErrorObject`]. Outbound
//! request models live in [`request`]. No module performs network I/O.

// Internal modules
#[macro_use]
pub mod logging;
pub mod config;
pub mod request;
pub mod resolution;
pub mod response;
pub mod types;

// Re-export key types for library consumers
pub use config::{ConfigError, EngineConfig};
pub use request::{Operation, Parameterize, RequestError};
pub use resolution::{DispatchError, Dispatcher};
pub use response::ResponseHandler;
pub use types::{Dispatched, DomainObject, ErrorObject, ResourceKind, Resolved};

pub mod prelude {
    pub use crate::config::{DispatchPreferences, EngineConfig, LoggingPreferences};
    pub use crate::request::{ChecksumRequest, Operation, Parameterize, TransactionRequest};
    pub use crate::resolution::{BuilderRegistry, Dispatcher};
    pub use crate::response::{ErrorClassifier, ResponseHandler};
    pub use crate::types::{
        Dispatched, DomainObject, ErrorObject, ResourceKind, Resolved, ResourceMeta,
    };
}
