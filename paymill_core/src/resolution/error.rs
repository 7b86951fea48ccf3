use crate::types::{ResourceKind, UnknownResourceKind};

/// Builder registry errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("Builder for resource kind '{kind}' is already registered")]
    DuplicateResourceKind { kind: ResourceKind },

    #[error("No builder registered for resource kind '{kind}'")]
    MissingBuilder { kind: ResourceKind },
}

/// Errors raised while building typed resources
///
/// The public dispatch entry points degrade these to pass-through values; they
/// only surface through the `try_*` variants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    #[error("Resource '{kind}' nested {depth} levels deep exceeds limit of {limit}")]
    DepthExceeded {
        kind: ResourceKind,
        depth: usize,
        limit: usize,
    },

    #[error(transparent)]
    UnknownResourceKind(#[from] UnknownResourceKind),

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),
}
