// src/resolution/dispatcher.rs
//! Polymorphic construction of typed resources from raw response maps
//!
//! `dispatch` keeps the never-raise contract of the response path: unknown kinds
//! yield `None`, non-object input passes through, and internal failures degrade
//! to a pass-through of the raw value after being logged. The `try_*` entry
//! points expose the underlying errors.

use super::error::DispatchError;
use super::field_resolver::FieldResolver;
use super::registry::BuilderRegistry;
use crate::config::DispatchPreferences;
use crate::logging::codes;
use crate::types::{
    Dispatched, DomainObject, FieldReader, RawMap, ResourceKind, Resolved,
};
use serde_json::Value;
use std::sync::Arc;

/// Key under which the gateway sometimes double-wraps a preauthorization
const PREAUTHORIZATION_WRAPPER: &str = "preauthorization";

/// Resource dispatcher holding a builder registry and depth preferences
#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: Arc<BuilderRegistry>,
    preferences: DispatchPreferences,
}

impl Dispatcher {
    /// Dispatcher over the process-wide default registry
    pub fn new(preferences: DispatchPreferences) -> Self {
        Self::with_registry(BuilderRegistry::global(), preferences)
    }

    pub fn with_registry(registry: Arc<BuilderRegistry>, preferences: DispatchPreferences) -> Self {
        Self {
            registry,
            preferences,
        }
    }

    pub fn registry(&self) -> &BuilderRegistry {
        &self.registry
    }

    pub fn preferences(&self) -> &DispatchPreferences {
        &self.preferences
    }

    /// Dispatch a raw value by resource tag (case-insensitive)
    ///
    /// Null, empty and non-object values come back unchanged whatever the tag.
    /// Otherwise returns `None` for an unrecognized tag. Never fails: a build
    /// error is logged and the raw value is returned unchanged.
    pub fn dispatch(&self, raw: &Value, tag: &str) -> Option<Dispatched> {
        if !is_buildable(raw) {
            return Some(Dispatched::PassThrough(raw.clone()));
        }

        let Some(kind) = ResourceKind::from_tag(tag) else {
            log_debug!(
                codes::dispatch::UNKNOWN_RESOURCE_KIND,
                "Dropping value for unknown resource kind",
                "tag" => tag
            );
            return None;
        };

        Some(self.dispatch_kind(raw, kind))
    }

    /// Dispatch a raw value by resource tag, surfacing build errors
    pub fn try_dispatch(&self, raw: &Value, tag: &str) -> Result<Option<Dispatched>, DispatchError> {
        if !is_buildable(raw) {
            return Ok(Some(Dispatched::PassThrough(raw.clone())));
        }

        match ResourceKind::from_tag(tag) {
            Some(kind) => self.try_dispatch_kind(raw, kind).map(Some),
            None => Ok(None),
        }
    }

    /// Dispatch a raw value as a known kind, degrading errors to pass-through
    pub fn dispatch_kind(&self, raw: &Value, kind: ResourceKind) -> Dispatched {
        match self.try_dispatch_kind(raw, kind) {
            Ok(dispatched) => dispatched,
            Err(error) => {
                let code = match error {
                    DispatchError::DepthExceeded { .. } => codes::dispatch::DEPTH_LIMIT_EXCEEDED,
                    DispatchError::Registry(_) => codes::dispatch::MISSING_BUILDER,
                    DispatchError::UnknownResourceKind(_) => {
                        codes::dispatch::UNKNOWN_RESOURCE_KIND
                    }
                };
                log_warning!(
                    code,
                    "Resource build failed, returning raw value",
                    "kind" => kind,
                    "error" => error
                );
                Dispatched::PassThrough(raw.clone())
            }
        }
    }

    /// Dispatch a raw value as a known kind from the top level
    pub fn try_dispatch_kind(
        &self,
        raw: &Value,
        kind: ResourceKind,
    ) -> Result<Dispatched, DispatchError> {
        let dispatched = self.dispatch_at(raw, kind, 0)?;

        if let Dispatched::Object(object) = &dispatched {
            log_debug!(
                codes::success::DISPATCH_COMPLETED,
                "Resource dispatched",
                "kind" => kind,
                "id" => object.id().unwrap_or("")
            );
        }

        Ok(dispatched)
    }

    /// Dispatch at a nesting depth; null, empty and non-object values pass through
    pub(crate) fn dispatch_at(
        &self,
        raw: &Value,
        kind: ResourceKind,
        depth: usize,
    ) -> Result<Dispatched, DispatchError> {
        match raw {
            Value::Object(map) if is_buildable(raw) => {
                self.build_object(map, kind, depth).map(Dispatched::Object)
            }
            _ => Ok(Dispatched::PassThrough(raw.clone())),
        }
    }

    /// Build one typed object, enforcing the depth guard
    pub(crate) fn build_object(
        &self,
        map: &RawMap,
        kind: ResourceKind,
        depth: usize,
    ) -> Result<DomainObject, DispatchError> {
        let limit = self.preferences.max_depth;
        if depth >= limit {
            return Err(DispatchError::DepthExceeded { kind, depth, limit });
        }

        let map = match (kind, map.get(PREAUTHORIZATION_WRAPPER)) {
            (ResourceKind::Preauthorization, Some(Value::Object(inner))) => inner,
            _ => map,
        };

        let builder = self.registry.get_builder(kind)?;
        let context = BuildContext {
            dispatcher: self,
            depth,
        };
        let object = builder(&FieldReader::new(map), &context)?;

        if self.preferences.trace_dispatch {
            log_debug!(
                codes::success::DISPATCH_COMPLETED,
                "Built resource",
                "kind" => kind,
                "depth" => depth,
                "id" => object.id().unwrap_or("")
            );
        }

        Ok(object)
    }
}

/// Only non-empty objects are built; everything else passes through
pub(crate) fn is_buildable(raw: &Value) -> bool {
    matches!(raw, Value::Object(map) if !map.is_empty())
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(DispatchPreferences::default())
    }
}

/// Handle given to builders for resolving their resource-typed fields
pub struct BuildContext<'d> {
    dispatcher: &'d Dispatcher,
    depth: usize,
}

impl<'d> BuildContext<'d> {
    /// Depth of the object being built (0 for the top level)
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Resolve `key` of `fields` as a nested resource one level deeper
    pub fn resolve(
        &self,
        fields: &FieldReader<'_>,
        key: &str,
        kind: ResourceKind,
    ) -> Result<Option<Resolved>, DispatchError> {
        FieldResolver::new(self.dispatcher).resolve(fields.value(key), kind, self.depth + 1)
    }
}
