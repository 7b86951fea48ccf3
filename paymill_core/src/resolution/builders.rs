//! Per-kind construction of typed resources from raw objects
//!
//! Builders copy scalar fields through the lenient [`FieldReader`] accessors and
//! hand every resource-typed field to the dispatch context, so nested objects are
//! resolved the same way regardless of which parent they appear in.

use super::dispatcher::BuildContext;
use super::error::DispatchError;
use super::registry::BuildFn;
use crate::types::{
    Checksum, Client, CreditCard, DebitAccount, DomainObject, FieldReader, Fraud, Offer, Payment,
    PaymentDetails, Preauthorization, Refund, ResourceKind, ResourceMeta, Subscription,
    SubscriptionCount, Transaction, Webhook, WebhookTarget,
};

/// Builder function for a kind
pub fn builder_for(kind: ResourceKind) -> BuildFn {
    match kind {
        ResourceKind::Client => build_client,
        ResourceKind::Payment => build_payment,
        ResourceKind::Transaction => build_transaction,
        ResourceKind::Preauthorization => build_preauthorization,
        ResourceKind::Refund => build_refund,
        ResourceKind::Offer => build_offer,
        ResourceKind::Subscription => build_subscription,
        ResourceKind::Webhook => build_webhook,
        ResourceKind::Fraud => build_fraud,
        ResourceKind::Checksum => build_checksum,
    }
}

pub fn build_client(
    fields: &FieldReader<'_>,
    context: &BuildContext<'_>,
) -> Result<DomainObject, DispatchError> {
    Ok(DomainObject::Client(Client {
        meta: ResourceMeta::read(fields),
        email: fields.string("email"),
        description: fields.string("description"),
        subscription: context.resolve(fields, "subscription", ResourceKind::Subscription)?,
        payment: context.resolve(fields, "payment", ResourceKind::Payment)?,
    }))
}

pub fn build_payment(
    fields: &FieldReader<'_>,
    context: &BuildContext<'_>,
) -> Result<DomainObject, DispatchError> {
    let payment_type = fields.string("type");
    let details = match payment_type.as_deref() {
        Some("creditcard") => Some(PaymentDetails::CreditCard(CreditCard {
            card_type: fields.string("card_type"),
            country: fields.string("country"),
            expire_month: fields.string("expire_month"),
            expire_year: fields.string("expire_year"),
            card_holder: fields.string("card_holder"),
            last_four: fields.string("last4"),
        })),
        Some("debit") => Some(PaymentDetails::Debit(DebitAccount {
            holder: fields.string("holder"),
            code: fields.string("code"),
            account: fields.string("account"),
            bic: fields.string("bic"),
            iban: fields.string("iban"),
        })),
        _ => None,
    };

    Ok(DomainObject::Payment(Payment {
        meta: ResourceMeta::read(fields),
        payment_type,
        client: context.resolve(fields, "client", ResourceKind::Client)?,
        details,
    }))
}

pub fn build_transaction(
    fields: &FieldReader<'_>,
    context: &BuildContext<'_>,
) -> Result<DomainObject, DispatchError> {
    Ok(DomainObject::Transaction(Transaction {
        meta: ResourceMeta::read(fields),
        amount: fields.integer("amount"),
        origin_amount: fields.integer("origin_amount"),
        status: fields.string("status"),
        description: fields.string("description"),
        livemode: fields.boolean("livemode"),
        refunds: context.resolve(fields, "refunds", ResourceKind::Refund)?,
        currency: fields.string("currency"),
        response_code: fields.integer("response_code"),
        short_id: fields.string("short_id"),
        invoices: fields.raw("invoices"),
        payment: context.resolve(fields, "payment", ResourceKind::Payment)?,
        client: context.resolve(fields, "client", ResourceKind::Client)?,
        preauthorization: context.resolve(
            fields,
            "preauthorization",
            ResourceKind::Preauthorization,
        )?,
        fees: fields.raw("fees"),
    }))
}

pub fn build_preauthorization(
    fields: &FieldReader<'_>,
    context: &BuildContext<'_>,
) -> Result<DomainObject, DispatchError> {
    Ok(DomainObject::Preauthorization(Preauthorization {
        meta: ResourceMeta::read(fields),
        amount: fields.integer("amount"),
        currency: fields.string("currency"),
        status: fields.string("status"),
        livemode: fields.boolean("livemode"),
        payment: context.resolve(fields, "payment", ResourceKind::Payment)?,
        client: context.resolve(fields, "client", ResourceKind::Client)?,
        transaction: context.resolve(fields, "transaction", ResourceKind::Transaction)?,
        description: fields.string("description"),
    }))
}

pub fn build_refund(
    fields: &FieldReader<'_>,
    context: &BuildContext<'_>,
) -> Result<DomainObject, DispatchError> {
    Ok(DomainObject::Refund(Refund {
        meta: ResourceMeta::read(fields),
        amount: fields.integer("amount"),
        status: fields.string("status"),
        description: fields.string("description"),
        livemode: fields.boolean("livemode"),
        response_code: fields.integer("response_code"),
        transaction: context.resolve(fields, "transaction", ResourceKind::Transaction)?,
    }))
}

pub fn build_offer(
    fields: &FieldReader<'_>,
    _context: &BuildContext<'_>,
) -> Result<DomainObject, DispatchError> {
    let subscription_count = fields
        .object("subscription_count")
        .map(|count| SubscriptionCount {
            active: count.integer("active"),
            inactive: count.integer("inactive"),
        });

    Ok(DomainObject::Offer(Offer {
        meta: ResourceMeta::read(fields),
        name: fields.string("name"),
        amount: fields.integer("amount"),
        currency: fields.string("currency"),
        interval: fields.string("interval"),
        trial_period_days: fields.integer("trial_period_days"),
        subscription_count,
    }))
}

pub fn build_subscription(
    fields: &FieldReader<'_>,
    context: &BuildContext<'_>,
) -> Result<DomainObject, DispatchError> {
    Ok(DomainObject::Subscription(Subscription {
        meta: ResourceMeta::read(fields),
        offer: context.resolve(fields, "offer", ResourceKind::Offer)?,
        livemode: fields.boolean("livemode"),
        trial_start: fields.integer("trial_start"),
        trial_end: fields.integer("trial_end"),
        next_capture_at: fields.integer("next_capture_at"),
        canceled_at: fields.integer("canceled_at"),
        payment: context.resolve(fields, "payment", ResourceKind::Payment)?,
        client: context.resolve(fields, "client", ResourceKind::Client)?,
        is_canceled: fields.boolean("is_canceled"),
        is_deleted: fields.boolean("is_deleted"),
        status: fields.string("status"),
        amount: fields.integer("amount"),
        temp_amount: fields.integer("temp_amount"),
    }))
}

pub fn build_webhook(
    fields: &FieldReader<'_>,
    _context: &BuildContext<'_>,
) -> Result<DomainObject, DispatchError> {
    let target = fields
        .string("url")
        .map(WebhookTarget::Url)
        .or_else(|| fields.string("email").map(WebhookTarget::Email));

    Ok(DomainObject::Webhook(Webhook {
        meta: ResourceMeta::read(fields),
        target,
        livemode: fields.boolean("livemode"),
        event_types: fields.string_list("event_types"),
        active: fields.boolean("active"),
    }))
}

pub fn build_fraud(
    fields: &FieldReader<'_>,
    _context: &BuildContext<'_>,
) -> Result<DomainObject, DispatchError> {
    Ok(DomainObject::Fraud(Fraud {
        meta: ResourceMeta::read(fields),
        livemode: fields.boolean("livemode"),
        status: fields.string("status"),
    }))
}

pub fn build_checksum(
    fields: &FieldReader<'_>,
    _context: &BuildContext<'_>,
) -> Result<DomainObject, DispatchError> {
    Ok(DomainObject::Checksum(Checksum {
        meta: ResourceMeta::read(fields),
        checksum: fields.string("checksum"),
        data: fields.string("data"),
        checksum_type: fields.string("type"),
        action: fields.string("action"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolution::Dispatcher;
    use crate::types::{Dispatched, Resolved};
    use serde_json::{json, Value};

    fn build(kind: ResourceKind, raw: Value) -> DomainObject {
        Dispatcher::default()
            .try_dispatch_kind(&raw, kind)
            .unwrap()
            .into_object()
            .unwrap()
    }

    #[test]
    fn test_credit_card_payment() {
        let object = build(
            ResourceKind::Payment,
            json!({
                "id": "pay_917018675b21ca03c4fb",
                "type": "creditcard",
                "client": null,
                "card_type": "visa",
                "country": null,
                "expire_month": 12,
                "expire_year": 2015,
                "card_holder": null,
                "last4": "1111",
                "created_at": 1378472387,
                "updated_at": 1378472387,
                "app_id": null
            }),
        );

        let DomainObject::Payment(payment) = object else {
            panic!("expected payment");
        };
        assert_eq!(payment.payment_type.as_deref(), Some("creditcard"));
        assert!(payment.client.is_none());
        let card = payment.credit_card().unwrap();
        assert_eq!(card.card_type.as_deref(), Some("visa"));
        assert_eq!(card.expire_month.as_deref(), Some("12"));
        assert_eq!(card.last_four.as_deref(), Some("1111"));
        assert_eq!(payment.meta.created_at, Some(1378472387));
    }

    #[test]
    fn test_debit_payment_and_unknown_type() {
        let DomainObject::Payment(debit) = build(
            ResourceKind::Payment,
            json!({"id": "pay_1", "type": "debit", "iban": "DE89370400440532013000", "bic": "COBADEFF"}),
        ) else {
            panic!("expected payment");
        };
        let account = debit.debit_account().unwrap();
        assert_eq!(account.iban.as_deref(), Some("DE89370400440532013000"));
        assert_eq!(account.bic.as_deref(), Some("COBADEFF"));

        let DomainObject::Payment(other) = build(
            ResourceKind::Payment,
            json!({"id": "pay_2", "type": "paypal"}),
        ) else {
            panic!("expected payment");
        };
        assert!(other.details.is_none());
        assert_eq!(other.payment_type.as_deref(), Some("paypal"));
    }

    #[test]
    fn test_transaction_nested_resources() {
        let DomainObject::Transaction(transaction) = build(
            ResourceKind::Transaction,
            json!({
                "id": "tran_1",
                "amount": "4200",
                "origin_amount": 4200,
                "status": "closed",
                "livemode": false,
                "currency": "EUR",
                "response_code": 20000,
                "refunds": [{"id": "refund_1", "amount": 100}],
                "payment": {"id": "pay_1", "type": "creditcard", "last4": "1111"},
                "client": {"id": "client_1", "email": "a@b.c", "payment": []},
                "preauthorization": null,
                "invoices": [{"number": 1}],
                "fees": []
            }),
        ) else {
            panic!("expected transaction");
        };

        assert_eq!(transaction.amount, Some(4200));
        assert_eq!(transaction.response_code, Some(20000));
        assert!(transaction.preauthorization.is_none());
        assert_eq!(transaction.invoices, Some(json!([{"number": 1}])));
        assert_eq!(transaction.fees, Some(json!([])));

        let refunds = transaction.refunds.unwrap();
        let items = refunds.as_collection().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].as_object().and_then(DomainObject::id), Some("refund_1"));

        let payment = transaction.payment.unwrap();
        assert_eq!(payment.as_single().map(DomainObject::kind), Some(ResourceKind::Payment));

        let Some(Resolved::Single(client)) = transaction.client else {
            panic!("expected single client");
        };
        let DomainObject::Client(client) = *client else {
            panic!("expected client");
        };
        assert_eq!(client.payment, Some(Resolved::Collection(Vec::new())));
    }

    #[test]
    fn test_offer_subscription_count() {
        let DomainObject::Offer(offer) = build(
            ResourceKind::Offer,
            json!({
                "id": "offer_1",
                "name": "Monthly",
                "amount": 990,
                "interval": "1 MONTH",
                "trial_period_days": 0,
                "subscription_count": {"active": "3", "inactive": 0}
            }),
        ) else {
            panic!("expected offer");
        };

        assert_eq!(
            offer.subscription_count,
            Some(SubscriptionCount {
                active: Some(3),
                inactive: Some(0)
            })
        );
        assert_eq!(offer.trial_period_days, Some(0));
    }

    #[test]
    fn test_webhook_target_prefers_url() {
        let DomainObject::Webhook(url_hook) = build(
            ResourceKind::Webhook,
            json!({"id": "hook_1", "url": "https://example.com", "email": "x@y.z",
                   "event_types": ["transaction.succeeded", 7], "active": true}),
        ) else {
            panic!("expected webhook");
        };
        assert_eq!(
            url_hook.target,
            Some(WebhookTarget::Url("https://example.com".to_string()))
        );
        assert_eq!(
            url_hook.event_types,
            Some(vec!["transaction.succeeded".to_string()])
        );

        let DomainObject::Webhook(mail_hook) = build(
            ResourceKind::Webhook,
            json!({"id": "hook_2", "url": null, "email": "x@y.z"}),
        ) else {
            panic!("expected webhook");
        };
        assert_eq!(mail_hook.target, Some(WebhookTarget::Email("x@y.z".to_string())));
    }

    #[test]
    fn test_subscription_and_checksum() {
        let DomainObject::Subscription(subscription) = build(
            ResourceKind::Subscription,
            json!({
                "id": "sub_1",
                "offer": {"id": "offer_1", "name": "Monthly"},
                "next_capture_at": 1400000000,
                "is_canceled": false,
                "payment": "pay_1",
                "client": {}
            }),
        ) else {
            panic!("expected subscription");
        };
        assert_eq!(
            subscription.offer.as_ref().and_then(Resolved::as_single).and_then(DomainObject::id),
            Some("offer_1")
        );
        assert_eq!(
            subscription.payment,
            Some(Resolved::Collection(vec![Dispatched::PassThrough(json!("pay_1"))]))
        );
        assert_eq!(subscription.client, Some(Resolved::Collection(Vec::new())));
        assert_eq!(subscription.is_canceled, Some(false));

        let DomainObject::Checksum(checksum) = build(
            ResourceKind::Checksum,
            json!({"id": "chk_1", "checksum": "abc", "data": "amount=200", "type": "paypal", "action": "transaction"}),
        ) else {
            panic!("expected checksum");
        };
        assert_eq!(checksum.checksum_type.as_deref(), Some("paypal"));
        assert_eq!(checksum.action.as_deref(), Some("transaction"));
    }
}
