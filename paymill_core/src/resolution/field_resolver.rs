use super::dispatcher::Dispatcher;
use super::error::DispatchError;
use crate::logging::codes;
use crate::types::{Dispatched, ResourceKind, Resolved};
use serde_json::Value;

/// Resolves one resource-typed field into a single object or a collection
///
/// The shape decision is syntactic: an object carrying an `id` key is one
/// resource, anything else that is not null is a sequence of resources. Every
/// builder goes through here so nested fields never drift in shape.
pub struct FieldResolver<'d> {
    dispatcher: &'d Dispatcher,
}

impl<'d> FieldResolver<'d> {
    pub fn new(dispatcher: &'d Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Resolve a raw field value as `kind` at the given nesting depth
    pub fn resolve(
        &self,
        raw: Option<&Value>,
        kind: ResourceKind,
        depth: usize,
    ) -> Result<Option<Resolved>, DispatchError> {
        let raw = match raw {
            None | Some(Value::Null) => return Ok(None),
            Some(raw) => raw,
        };

        let items: Vec<&Value> = match raw {
            Value::Object(map) if map.contains_key("id") => {
                let object = self.dispatcher.build_object(map, kind, depth)?;
                return Ok(Some(Resolved::Single(Box::new(object))));
            }
            Value::Object(map) => map.values().collect(),
            Value::Array(items) => items.iter().collect(),
            scalar => {
                log_debug!(
                    codes::dispatch::PASS_THROUGH,
                    "Scalar in resource field kept as one-element collection",
                    "kind" => kind
                );
                vec![scalar]
            }
        };

        let collection = items
            .into_iter()
            .map(|item| self.dispatcher.dispatch_at(item, kind, depth))
            .collect::<Result<Vec<Dispatched>, DispatchError>>()?;

        Ok(Some(Resolved::Collection(collection)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DomainObject;
    use serde_json::json;

    fn resolve(raw: Value, kind: ResourceKind) -> Option<Resolved> {
        let dispatcher = Dispatcher::default();
        FieldResolver::new(&dispatcher)
            .resolve(Some(&raw), kind, 1)
            .unwrap()
    }

    #[test]
    fn test_null_and_absent_resolve_to_none() {
        let dispatcher = Dispatcher::default();
        let resolver = FieldResolver::new(&dispatcher);

        assert_eq!(resolver.resolve(None, ResourceKind::Payment, 1), Ok(None));
        assert_eq!(
            resolver.resolve(Some(&Value::Null), ResourceKind::Payment, 1),
            Ok(None)
        );
    }

    #[test]
    fn test_object_with_id_is_single() {
        let resolved = resolve(json!({"id": "pay_1", "type": "debit"}), ResourceKind::Payment)
            .unwrap();

        let object = resolved.as_single().unwrap();
        assert_eq!(object.kind(), ResourceKind::Payment);
        assert_eq!(object.id(), Some("pay_1"));
    }

    #[test]
    fn test_array_preserves_order_and_length() {
        let resolved = resolve(
            json!([{"id": "refund_3"}, {"id": "refund_1"}, {"id": "refund_2"}]),
            ResourceKind::Refund,
        )
        .unwrap();

        let ids: Vec<Option<&str>> = resolved
            .as_collection()
            .unwrap()
            .iter()
            .map(|item| item.as_object().and_then(DomainObject::id))
            .collect();
        assert_eq!(ids, vec![Some("refund_3"), Some("refund_1"), Some("refund_2")]);
    }

    #[test]
    fn test_keyed_object_without_id_uses_values_in_order() {
        let resolved = resolve(
            json!({"b": {"id": "client_b"}, "a": {"id": "client_a"}}),
            ResourceKind::Client,
        )
        .unwrap();

        let items = resolved.as_collection().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].as_object().and_then(DomainObject::id), Some("client_b"));
        assert_eq!(items[1].as_object().and_then(DomainObject::id), Some("client_a"));
    }

    #[test]
    fn test_non_object_entries_pass_through() {
        let resolved = resolve(json!(["pay_1", {}, {"id": "pay_2"}]), ResourceKind::Payment)
            .unwrap();

        let items = resolved.as_collection().unwrap();
        assert_eq!(items[0], Dispatched::PassThrough(json!("pay_1")));
        assert_eq!(items[1], Dispatched::PassThrough(json!({})));
        assert!(items[2].as_object().is_some());
    }

    #[test]
    fn test_scalar_is_one_element_collection() {
        let resolved = resolve(json!("client_1"), ResourceKind::Client).unwrap();
        assert_eq!(
            resolved,
            Resolved::Collection(vec![Dispatched::PassThrough(json!("client_1"))])
        );
    }
}
