//! Typed resource objects built from gateway responses
//!
//! Every field is optional: list and detail endpoints return different subsets
//! of keys, and a missing key must never prevent the object from being built.

use super::common::{RawValue, ResourceMeta};
use super::resource::ResourceKind;
use serde::Serialize;

// ============================================================================
// DISPATCH RESULTS
// ============================================================================

/// Outcome of dispatching one raw value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Dispatched {
    /// A typed resource built from a non-empty object
    Object(DomainObject),
    /// The input unchanged because it was null, empty, or not an object
    PassThrough(RawValue),
}

impl Dispatched {
    pub fn as_object(&self) -> Option<&DomainObject> {
        match self {
            Dispatched::Object(object) => Some(object),
            Dispatched::PassThrough(_) => None,
        }
    }

    pub fn into_object(self) -> Option<DomainObject> {
        match self {
            Dispatched::Object(object) => Some(object),
            Dispatched::PassThrough(_) => None,
        }
    }

    pub fn is_pass_through(&self) -> bool {
        matches!(self, Dispatched::PassThrough(_))
    }
}

/// A resource-typed field resolved to one object or an ordered collection
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Resolved {
    Single(Box<DomainObject>),
    Collection(Vec<Dispatched>),
}

impl Resolved {
    pub fn as_single(&self) -> Option<&DomainObject> {
        match self {
            Resolved::Single(object) => Some(object),
            Resolved::Collection(_) => None,
        }
    }

    pub fn as_collection(&self) -> Option<&[Dispatched]> {
        match self {
            Resolved::Single(_) => None,
            Resolved::Collection(items) => Some(items),
        }
    }

    /// Number of entries (1 for a single object)
    pub fn len(&self) -> usize {
        match self {
            Resolved::Single(_) => 1,
            Resolved::Collection(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============================================================================
// DOMAIN OBJECT
// ============================================================================

/// Typed resource tagged by the kind it was built as
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "resource", rename_all = "snake_case")]
pub enum DomainObject {
    Client(Client),
    Payment(Payment),
    Transaction(Transaction),
    Preauthorization(Preauthorization),
    Refund(Refund),
    Offer(Offer),
    Subscription(Subscription),
    Webhook(Webhook),
    Fraud(Fraud),
    Checksum(Checksum),
}

impl DomainObject {
    pub fn kind(&self) -> ResourceKind {
        match self {
            DomainObject::Client(_) => ResourceKind::Client,
            DomainObject::Payment(_) => ResourceKind::Payment,
            DomainObject::Transaction(_) => ResourceKind::Transaction,
            DomainObject::Preauthorization(_) => ResourceKind::Preauthorization,
            DomainObject::Refund(_) => ResourceKind::Refund,
            DomainObject::Offer(_) => ResourceKind::Offer,
            DomainObject::Subscription(_) => ResourceKind::Subscription,
            DomainObject::Webhook(_) => ResourceKind::Webhook,
            DomainObject::Fraud(_) => ResourceKind::Fraud,
            DomainObject::Checksum(_) => ResourceKind::Checksum,
        }
    }

    pub fn meta(&self) -> &ResourceMeta {
        match self {
            DomainObject::Client(m) => &m.meta,
            DomainObject::Payment(m) => &m.meta,
            DomainObject::Transaction(m) => &m.meta,
            DomainObject::Preauthorization(m) => &m.meta,
            DomainObject::Refund(m) => &m.meta,
            DomainObject::Offer(m) => &m.meta,
            DomainObject::Subscription(m) => &m.meta,
            DomainObject::Webhook(m) => &m.meta,
            DomainObject::Fraud(m) => &m.meta,
            DomainObject::Checksum(m) => &m.meta,
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.meta().id.as_deref()
    }
}

// ============================================================================
// RESOURCES
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Client {
    #[serde(flatten)]
    pub meta: ResourceMeta,
    pub email: Option<String>,
    pub description: Option<String>,
    pub subscription: Option<Resolved>,
    pub payment: Option<Resolved>,
}

/// Card or account payload selected by the payment `type` field
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentDetails {
    CreditCard(CreditCard),
    Debit(DebitAccount),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreditCard {
    pub card_type: Option<String>,
    pub country: Option<String>,
    pub expire_month: Option<String>,
    pub expire_year: Option<String>,
    pub card_holder: Option<String>,
    pub last_four: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DebitAccount {
    pub holder: Option<String>,
    pub code: Option<String>,
    pub account: Option<String>,
    pub bic: Option<String>,
    pub iban: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Payment {
    #[serde(flatten)]
    pub meta: ResourceMeta,
    #[serde(rename = "type")]
    pub payment_type: Option<String>,
    pub client: Option<Resolved>,
    /// Absent when `type` is neither `creditcard` nor `debit`
    pub details: Option<PaymentDetails>,
}

impl Payment {
    pub fn credit_card(&self) -> Option<&CreditCard> {
        match &self.details {
            Some(PaymentDetails::CreditCard(card)) => Some(card),
            _ => None,
        }
    }

    pub fn debit_account(&self) -> Option<&DebitAccount> {
        match &self.details {
            Some(PaymentDetails::Debit(account)) => Some(account),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Transaction {
    #[serde(flatten)]
    pub meta: ResourceMeta,
    pub amount: Option<i64>,
    pub origin_amount: Option<i64>,
    pub status: Option<String>,
    pub description: Option<String>,
    pub livemode: Option<bool>,
    pub refunds: Option<Resolved>,
    pub currency: Option<String>,
    pub response_code: Option<i64>,
    pub short_id: Option<String>,
    pub invoices: Option<RawValue>,
    pub payment: Option<Resolved>,
    pub client: Option<Resolved>,
    pub preauthorization: Option<Resolved>,
    pub fees: Option<RawValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Preauthorization {
    #[serde(flatten)]
    pub meta: ResourceMeta,
    pub amount: Option<i64>,
    pub currency: Option<String>,
    pub status: Option<String>,
    pub livemode: Option<bool>,
    pub payment: Option<Resolved>,
    pub client: Option<Resolved>,
    pub transaction: Option<Resolved>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Refund {
    #[serde(flatten)]
    pub meta: ResourceMeta,
    pub amount: Option<i64>,
    pub status: Option<String>,
    pub description: Option<String>,
    pub livemode: Option<bool>,
    pub response_code: Option<i64>,
    /// Missing on single-refund lookups
    pub transaction: Option<Resolved>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SubscriptionCount {
    pub active: Option<i64>,
    pub inactive: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Offer {
    #[serde(flatten)]
    pub meta: ResourceMeta,
    pub name: Option<String>,
    pub amount: Option<i64>,
    pub currency: Option<String>,
    pub interval: Option<String>,
    pub trial_period_days: Option<i64>,
    pub subscription_count: Option<SubscriptionCount>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Subscription {
    #[serde(flatten)]
    pub meta: ResourceMeta,
    pub offer: Option<Resolved>,
    pub livemode: Option<bool>,
    pub trial_start: Option<i64>,
    pub trial_end: Option<i64>,
    pub next_capture_at: Option<i64>,
    pub canceled_at: Option<i64>,
    pub payment: Option<Resolved>,
    pub client: Option<Resolved>,
    pub is_canceled: Option<bool>,
    pub is_deleted: Option<bool>,
    pub status: Option<String>,
    pub amount: Option<i64>,
    pub temp_amount: Option<i64>,
}

/// Where a webhook delivers events
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WebhookTarget {
    Url(String),
    Email(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Webhook {
    #[serde(flatten)]
    pub meta: ResourceMeta,
    pub target: Option<WebhookTarget>,
    pub livemode: Option<bool>,
    pub event_types: Option<Vec<String>>,
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Fraud {
    #[serde(flatten)]
    pub meta: ResourceMeta,
    pub livemode: Option<bool>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Checksum {
    #[serde(flatten)]
    pub meta: ResourceMeta,
    pub checksum: Option<String>,
    pub data: Option<String>,
    #[serde(rename = "type")]
    pub checksum_type: Option<String>,
    pub action: Option<String>,
}
