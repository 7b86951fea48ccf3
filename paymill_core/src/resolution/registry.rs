// src/resolution/registry.rs
//! Builder registry mapping each resource kind to its construction function
//!
//! Dispatch looks a builder up once per object instead of branching on the kind
//! at every recursive call site.

use super::builders;
use super::dispatcher::BuildContext;
use super::error::{DispatchError, RegistryError};
use crate::types::{DomainObject, FieldReader, ResourceKind};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

/// Pure construction function for one resource kind
pub type BuildFn =
    fn(&FieldReader<'_>, &BuildContext<'_>) -> Result<DomainObject, DispatchError>;

static DEFAULT_REGISTRY: OnceLock<Arc<BuilderRegistry>> = OnceLock::new();

/// Resource builder registry
#[derive(Clone)]
pub struct BuilderRegistry {
    builders: HashMap<ResourceKind, BuildFn>,

    /// Registry metadata and statistics
    metadata: RegistryMetadata,
}

#[derive(Debug, Clone)]
pub struct RegistryMetadata {
    pub creation_time: DateTime<Utc>,
    pub last_registration: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryStatistics {
    pub total_kinds: usize,
    pub missing_kinds: Vec<ResourceKind>,
}

impl RegistryStatistics {
    pub fn is_complete(&self) -> bool {
        self.missing_kinds.is_empty()
    }
}

impl BuilderRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            builders: HashMap::new(),
            metadata: RegistryMetadata {
                creation_time: Utc::now(),
                last_registration: None,
            },
        }
    }

    /// Create a registry holding the builder for every known kind
    pub fn with_default_builders() -> Self {
        let mut registry = Self::new();
        for kind in ResourceKind::ALL {
            registry.builders.insert(kind, builders::builder_for(kind));
        }
        registry.metadata.last_registration = Some(Utc::now());
        registry
    }

    /// Process-wide default registry, built on first use and never mutated
    pub fn global() -> Arc<BuilderRegistry> {
        DEFAULT_REGISTRY
            .get_or_init(|| Arc::new(Self::with_default_builders()))
            .clone()
    }

    /// Register a builder for a kind that has none yet
    pub fn register(&mut self, kind: ResourceKind, builder: BuildFn) -> Result<(), RegistryError> {
        if self.builders.contains_key(&kind) {
            return Err(RegistryError::DuplicateResourceKind { kind });
        }

        self.builders.insert(kind, builder);
        self.metadata.last_registration = Some(Utc::now());
        Ok(())
    }

    /// Replace the builder for a kind, returning the previous one
    pub fn replace(&mut self, kind: ResourceKind, builder: BuildFn) -> Option<BuildFn> {
        self.metadata.last_registration = Some(Utc::now());
        self.builders.insert(kind, builder)
    }

    /// Get builder for kind
    pub fn get_builder(&self, kind: ResourceKind) -> Result<BuildFn, RegistryError> {
        self.builders
            .get(&kind)
            .copied()
            .ok_or(RegistryError::MissingBuilder { kind })
    }

    pub fn has_kind(&self, kind: ResourceKind) -> bool {
        self.builders.contains_key(&kind)
    }

    /// List registered kinds in declaration order
    pub fn list_kinds(&self) -> Vec<ResourceKind> {
        let mut kinds: Vec<ResourceKind> = self.builders.keys().copied().collect();
        kinds.sort();
        kinds
    }

    pub fn metadata(&self) -> &RegistryMetadata {
        &self.metadata
    }

    /// Get registry statistics
    pub fn get_statistics(&self) -> RegistryStatistics {
        RegistryStatistics {
            total_kinds: self.builders.len(),
            missing_kinds: ResourceKind::ALL
                .into_iter()
                .filter(|kind| !self.has_kind(*kind))
                .collect(),
        }
    }
}

impl Default for BuilderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BuilderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuilderRegistry")
            .field("kinds", &self.list_kinds())
            .field("metadata", &self.metadata)
            .finish()
    }
}
