pub mod common;
pub mod error;
pub mod models;
pub mod resource;

pub use common::{FieldReader, RawMap, RawValue, ResourceMeta};
pub use error::ErrorObject;
pub use models::{
    Checksum, Client, CreditCard, DebitAccount, Dispatched, DomainObject, Fraud, Offer, Payment,
    PaymentDetails, Preauthorization, Refund, Resolved, Subscription, SubscriptionCount,
    Transaction, Webhook, WebhookTarget,
};
pub use resource::{ResourceKind, UnknownResourceKind};
