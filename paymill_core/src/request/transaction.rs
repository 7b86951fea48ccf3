use super::{get_one_parameters, insert_if_set, Operation, Parameterize, Parameters};
use crate::types::ResourceKind;
use serde_json::Value;

/// Optional shopping-cart details shared by transactions and checksums
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShoppingCart {
    pub shipping_address: Option<Value>,
    pub billing_address: Option<Value>,
    pub items: Option<Value>,
    pub shipping_amount: Option<i64>,
    pub handling_amount: Option<i64>,
}

impl ShoppingCart {
    pub(crate) fn write_to(&self, parameters: &mut Parameters) {
        insert_if_set(parameters, "shipping_address", self.shipping_address.clone());
        insert_if_set(parameters, "billing_address", self.billing_address.clone());
        insert_if_set(parameters, "items", self.items.clone());
        insert_if_set(parameters, "shipping_amount", self.shipping_amount);
        insert_if_set(parameters, "handling_amount", self.handling_amount);
    }
}

/// Transaction request model
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionRequest {
    pub id: Option<String>,
    pub amount: Option<i64>,
    pub currency: Option<String>,
    pub description: Option<String>,
    pub client: Option<String>,
    pub token: Option<String>,
    pub payment: Option<String>,
    pub preauthorization: Option<String>,
    pub fee_amount: Option<i64>,
    pub fee_payment: Option<String>,
    pub fee_currency: Option<String>,
    pub source: Option<String>,
    pub mandate_reference: Option<String>,
    pub cart: ShoppingCart,
    /// Filter sent verbatim for `getAll`
    pub filter: Option<Parameters>,
}

impl TransactionRequest {
    /// Payment source for `create`: preauthorization, then payment, then token
    fn payment_source(&self) -> (&'static str, Option<&String>) {
        if let Some(preauthorization) = &self.preauthorization {
            ("preauthorization", Some(preauthorization))
        } else if let Some(payment) = &self.payment {
            ("payment", Some(payment))
        } else {
            ("token", self.token.as_ref())
        }
    }
}

impl Parameterize for TransactionRequest {
    fn resource_kind(&self) -> ResourceKind {
        ResourceKind::Transaction
    }

    fn parameterize(&self, operation: Operation) -> Parameters {
        match operation {
            Operation::Create => {
                let mut parameters = Parameters::new();

                let (source_key, source) = self.payment_source();
                parameters.insert(source_key.to_string(), source.cloned().into());
                parameters.insert("amount".to_string(), self.amount.into());
                parameters.insert("currency".to_string(), self.currency.clone().into());
                parameters.insert("description".to_string(), self.description.clone().into());
                parameters.insert("client".to_string(), self.client.clone().into());

                insert_if_set(&mut parameters, "fee_amount", self.fee_amount);
                insert_if_set(&mut parameters, "fee_payment", self.fee_payment.clone());
                insert_if_set(&mut parameters, "fee_currency", self.fee_currency.clone());
                insert_if_set(&mut parameters, "source", self.source.clone());
                self.cart.write_to(&mut parameters);
                insert_if_set(&mut parameters, "mandate_reference", self.mandate_reference.clone());
                parameters
            }
            Operation::Update => {
                let mut parameters = Parameters::new();
                parameters.insert("description".to_string(), self.description.clone().into());
                parameters
            }
            Operation::GetAll => self.filter.clone().unwrap_or_default(),
            Operation::GetOne => get_one_parameters(),
            Operation::Delete => Parameters::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::RequestError;
    use serde_json::json;

    fn keys(parameters: &Parameters) -> Vec<&str> {
        parameters.keys().map(String::as_str).collect()
    }

    #[test]
    fn test_create_with_token() {
        let request = TransactionRequest {
            token: Some("098f6bcd4621d373cade4e832627b4f6".to_string()),
            amount: Some(4200),
            currency: Some("EUR".to_string()),
            description: Some("Test Transaction".to_string()),
            ..TransactionRequest::default()
        };

        let parameters = request.parameterize(Operation::Create);
        assert_eq!(
            keys(&parameters),
            vec!["token", "amount", "currency", "description", "client"]
        );
        assert_eq!(parameters["token"], "098f6bcd4621d373cade4e832627b4f6");
        assert_eq!(parameters["amount"], 4200);
        assert_eq!(parameters["client"], Value::Null);
    }

    #[test]
    fn test_create_source_precedence() {
        let request = TransactionRequest {
            token: Some("tok_1".to_string()),
            payment: Some("pay_1".to_string()),
            preauthorization: Some("preauth_1".to_string()),
            ..TransactionRequest::default()
        };
        let parameters = request.parameterize(Operation::Create);
        assert_eq!(parameters["preauthorization"], "preauth_1");
        assert!(!parameters.contains_key("payment"));
        assert!(!parameters.contains_key("token"));

        let request = TransactionRequest {
            preauthorization: None,
            ..request
        };
        let parameters = request.parameterize(Operation::Create);
        assert_eq!(parameters["payment"], "pay_1");
        assert!(!parameters.contains_key("token"));
    }

    #[test]
    fn test_create_optional_fields() {
        let request = TransactionRequest {
            payment: Some("pay_1".to_string()),
            amount: Some(100),
            client: Some("client_1".to_string()),
            fee_amount: Some(10),
            fee_payment: Some("pay_fee".to_string()),
            source: Some("shop".to_string()),
            mandate_reference: Some("MR-1".to_string()),
            cart: ShoppingCart {
                items: Some(json!([{"name": "Hat", "amount": 100, "quantity": 1}])),
                shipping_amount: Some(0),
                ..ShoppingCart::default()
            },
            ..TransactionRequest::default()
        };

        let parameters = request.parameterize(Operation::Create);
        assert_eq!(
            keys(&parameters),
            vec![
                "payment",
                "amount",
                "currency",
                "description",
                "client",
                "fee_amount",
                "fee_payment",
                "source",
                "items",
                "shipping_amount",
                "mandate_reference",
            ]
        );
        assert_eq!(parameters["shipping_amount"], 0);
        assert!(!parameters.contains_key("fee_currency"));
    }

    #[test]
    fn test_other_operations() {
        let mut filter = Parameters::new();
        filter.insert("count".to_string(), json!(5));
        filter.insert("order".to_string(), json!("created_at_desc"));

        let request = TransactionRequest {
            id: Some("tran_1".to_string()),
            description: Some("updated".to_string()),
            amount: Some(100),
            filter: Some(filter.clone()),
            ..TransactionRequest::default()
        };

        let update = request.parameterize(Operation::Update);
        assert_eq!(keys(&update), vec!["description"]);
        assert_eq!(update["description"], "updated");

        assert_eq!(request.parameterize(Operation::GetAll), filter);
        assert_eq!(
            request.parameterize(Operation::GetOne),
            json!({"count": 1, "offset": 0}).as_object().cloned().unwrap()
        );
        assert!(request.parameterize(Operation::Delete).is_empty());
        assert!(TransactionRequest::default()
            .parameterize(Operation::GetAll)
            .is_empty());
    }

    #[test]
    fn test_service_resource_and_named_operations() {
        let request = TransactionRequest::default();
        assert_eq!(request.service_resource(), "Transactions/");
        assert!(request.parameterize_named("getOne").is_ok());
        assert_eq!(
            request.parameterize_named("capture"),
            Err(RequestError::UnknownOperation("capture".to_string()))
        );
    }
}
