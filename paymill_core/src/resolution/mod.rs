//! Recursive reconstruction of typed resource graphs from raw responses

pub mod builders;
pub mod dispatcher;
pub mod error;
pub mod field_resolver;
pub mod registry;

pub use dispatcher::{BuildContext, Dispatcher};
pub use error::{DispatchError, RegistryError};
pub use field_resolver::FieldResolver;
pub use registry::{BuildFn, BuilderRegistry, RegistryStatistics};
