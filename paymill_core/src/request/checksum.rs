use super::transaction::ShoppingCart;
use super::{get_one_parameters, insert_if_set, Operation, Parameterize, Parameters};
use crate::types::ResourceKind;

/// Checksum request model used to sign hosted payment flows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChecksumRequest {
    pub id: Option<String>,
    /// Payment method the checksum is created for, e.g. `paypal`
    pub checksum_type: Option<String>,
    pub amount: Option<i64>,
    pub currency: Option<String>,
    pub description: Option<String>,
    pub return_url: Option<String>,
    pub cancel_url: Option<String>,
    pub cart: ShoppingCart,
    pub filter: Option<Parameters>,
}

impl Parameterize for ChecksumRequest {
    fn resource_kind(&self) -> ResourceKind {
        ResourceKind::Checksum
    }

    fn parameterize(&self, operation: Operation) -> Parameters {
        match operation {
            Operation::Create => {
                let mut parameters = Parameters::new();
                insert_if_set(&mut parameters, "checksum_type", self.checksum_type.clone());
                insert_if_set(&mut parameters, "amount", self.amount);
                insert_if_set(&mut parameters, "currency", self.currency.clone());
                insert_if_set(&mut parameters, "description", self.description.clone());
                insert_if_set(&mut parameters, "return_url", self.return_url.clone());
                insert_if_set(&mut parameters, "cancel_url", self.cancel_url.clone());
                self.cart.write_to(&mut parameters);
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
    use serde_json::json;

    fn paypal_checksum() -> ChecksumRequest {
        ChecksumRequest {
            checksum_type: Some("paypal".to_string()),
            amount: Some(200),
            currency: Some("EUR".to_string()),
            description: Some("A test description".to_string()),
            return_url: Some("https://testserver.de".to_string()),
            cancel_url: Some("https://www.google.de".to_string()),
            ..ChecksumRequest::default()
        }
    }

    #[test]
    fn test_parameterize_create() {
        let parameters = paypal_checksum().parameterize(Operation::Create);

        assert_eq!(
            serde_json::Value::Object(parameters),
            json!({
                "checksum_type": "paypal",
                "amount": 200,
                "currency": "EUR",
                "description": "A test description",
                "return_url": "https://testserver.de",
                "cancel_url": "https://www.google.de"
            })
        );
    }

    #[test]
    fn test_parameterize_create_with_cart() {
        let request = ChecksumRequest {
            cart: ShoppingCart {
                billing_address: Some(json!({"name": "Max Mustermann", "country": "DE"})),
                handling_amount: Some(50),
                ..ShoppingCart::default()
            },
            description: None,
            ..paypal_checksum()
        };

        let parameters = request.parameterize(Operation::Create);
        let keys: Vec<&str> = parameters.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec![
                "checksum_type",
                "amount",
                "currency",
                "return_url",
                "cancel_url",
                "billing_address",
                "handling_amount",
            ]
        );
    }

    #[test]
    fn test_parameterize_get_one() {
        let request = ChecksumRequest {
            id: Some("chk_2f82a672574647cd911d".to_string()),
            ..ChecksumRequest::default()
        };

        assert_eq!(
            serde_json::Value::Object(request.parameterize(Operation::GetOne)),
            json!({"count": 1, "offset": 0})
        );
        assert_eq!(request.service_resource(), "Checksums/");
    }

    #[test]
    fn test_parameterize_remaining_operations() {
        let request = paypal_checksum();
        assert_eq!(
            serde_json::Value::Object(request.parameterize(Operation::Update)),
            json!({"description": "A test description"})
        );
        assert!(request.parameterize(Operation::GetAll).is_empty());
        assert!(request.parameterize(Operation::Delete).is_empty());
    }
}
