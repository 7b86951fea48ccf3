use super::classifier::ErrorClassifier;
use super::validator;
use crate::config::{DispatchPreferences, EngineConfig};
use crate::logging::codes;
use crate::resolution::dispatcher::is_buildable;
use crate::resolution::Dispatcher;
use crate::types::{Dispatched, ErrorObject, ResourceKind};
use serde_json::Value;

/// Entry point used by the transport layer for every gateway response
#[derive(Debug, Clone, Default)]
pub struct ResponseHandler {
    dispatcher: Dispatcher,
}

impl ResponseHandler {
    pub fn new(preferences: DispatchPreferences) -> Self {
        Self::with_dispatcher(Dispatcher::new(preferences))
    }

    pub fn with_dispatcher(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.dispatch.clone())
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Build the resource returned by an endpoint such as `"Transactions/"`
    ///
    /// Null, empty and non-object data comes back unchanged. Otherwise returns
    /// `None` when the endpoint does not name a known resource.
    pub fn convert_response(&self, data: &Value, service_resource: &str) -> Option<Dispatched> {
        if !is_buildable(data) {
            return Some(Dispatched::PassThrough(data.clone()));
        }

        match ResourceKind::from_service_resource(service_resource) {
            Some(kind) => Some(self.dispatcher.dispatch_kind(data, kind)),
            None => {
                log_debug!(
                    codes::dispatch::UNKNOWN_RESOURCE_KIND,
                    "Endpoint does not map to a resource kind",
                    "service_resource" => service_resource
                );
                None
            }
        }
    }

    /// Classify a failed response, rebuilding its data for the endpoint's kind
    pub fn convert_error(&self, response: &Value, service_resource: Option<&str>) -> ErrorObject {
        let kind = service_resource.and_then(ResourceKind::from_service_resource);
        ErrorClassifier::new(&self.dispatcher).classify(response, kind)
    }

    pub fn validate_response(&self, response: &Value) -> bool {
        validator::is_success(response)
    }

    /// Validate then either dispatch `body.data` or classify the failure
    ///
    /// A successful response without data yields `Ok(None)`.
    pub fn handle(
        &self,
        response: &Value,
        kind: ResourceKind,
    ) -> Result<Option<Dispatched>, ErrorObject> {
        if !self.validate_response(response) {
            return Err(ErrorClassifier::new(&self.dispatcher).classify(response, Some(kind)));
        }

        let data = response
            .get("body")
            .and_then(|body| body.get("data"))
            .filter(|data| !data.is_null());

        Ok(data.map(|data| self.dispatcher.dispatch_kind(data, kind)))
    }
}
