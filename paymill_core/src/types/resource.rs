//! Resource kinds known to the gateway

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Tag selecting which typed object a raw map is built into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Client,
    Payment,
    Transaction,
    Preauthorization,
    Refund,
    Offer,
    Subscription,
    Webhook,
    Fraud,
    Checksum,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 10] = [
        ResourceKind::Client,
        ResourceKind::Payment,
        ResourceKind::Transaction,
        ResourceKind::Preauthorization,
        ResourceKind::Refund,
        ResourceKind::Offer,
        ResourceKind::Subscription,
        ResourceKind::Webhook,
        ResourceKind::Fraud,
        ResourceKind::Checksum,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Client => "client",
            ResourceKind::Payment => "payment",
            ResourceKind::Transaction => "transaction",
            ResourceKind::Preauthorization => "preauthorization",
            ResourceKind::Refund => "refund",
            ResourceKind::Offer => "offer",
            ResourceKind::Subscription => "subscription",
            ResourceKind::Webhook => "webhook",
            ResourceKind::Fraud => "fraud",
            ResourceKind::Checksum => "checksum",
        }
    }

    /// Match a resource tag case-insensitively
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(tag))
    }

    /// Derive the kind from an endpoint segment such as `"Transactions/"`
    ///
    /// The endpoint name is the plural tag followed by a slash, so the last two
    /// characters are dropped before matching.
    pub fn from_service_resource(service_resource: &str) -> Option<Self> {
        let mut chars = service_resource.chars();
        chars.next_back()?;
        chars.next_back()?;
        Self::from_tag(chars.as_str())
    }

    /// Endpoint segment for this kind
    pub fn service_resource(&self) -> String {
        let tag = self.as_str();
        let mut resource = String::with_capacity(tag.len() + 2);
        let mut chars = tag.chars();
        if let Some(first) = chars.next() {
            resource.extend(first.to_uppercase());
        }
        resource.push_str(chars.as_str());
        resource.push_str("s/");
        resource
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error for tags outside the known set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown resource kind '{0}'")]
pub struct UnknownResourceKind(pub String);

impl FromStr for ResourceKind {
    type Err = UnknownResourceKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| UnknownResourceKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_match_case_insensitively() {
        assert_eq!(ResourceKind::from_tag("PAYMENT"), Some(ResourceKind::Payment));
        assert_eq!(
            ResourceKind::from_tag("PreAuthorization"),
            Some(ResourceKind::Preauthorization)
        );
        assert_eq!(ResourceKind::from_tag("invoice"), None);
        assert_eq!(ResourceKind::from_tag(""), None);
    }

    #[test]
    fn test_every_kind_round_trips_through_its_tag() {
        for kind in ResourceKind::ALL {
            assert_eq!(kind.as_str().parse::<ResourceKind>(), Ok(kind));
            assert_eq!(
                ResourceKind::from_service_resource(&kind.service_resource()),
                Some(kind)
            );
        }
    }

    #[test]
    fn test_service_resource_names() {
        assert_eq!(
            ResourceKind::from_service_resource("Transactions/"),
            Some(ResourceKind::Transaction)
        );
        assert_eq!(
            ResourceKind::from_service_resource("clients/"),
            Some(ResourceKind::Client)
        );
        assert_eq!(ResourceKind::Checksum.service_resource(), "Checksums/");
        assert_eq!(ResourceKind::from_service_resource("s/"), None);
        assert_eq!(ResourceKind::from_service_resource("/"), None);
    }

    #[test]
    fn test_unknown_tag_error() {
        let err = "invoice".parse::<ResourceKind>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown resource kind 'invoice'");
    }
}
