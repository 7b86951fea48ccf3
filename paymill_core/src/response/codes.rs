//! Gateway response codes and their documented descriptions
//!
//! The table is immutable and shared by every classification call. Codes are
//! grouped by their leading digit into a [`ResponseCodeCategory`].

use std::collections::HashMap;
use std::sync::OnceLock;

/// Response code category derived from the leading digit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResponseCodeCategory {
    Informational,
    Success,
    Pending,
    ClientData,
    Backend,
}

impl ResponseCodeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseCodeCategory::Informational => "Informational",
            ResponseCodeCategory::Success => "Success",
            ResponseCodeCategory::Pending => "Pending",
            ResponseCodeCategory::ClientData => "ClientData",
            ResponseCodeCategory::Backend => "Backend",
        }
    }

    /// Category for a five-digit code, `None` outside 10000..=59999
    pub fn of(code: i64) -> Option<Self> {
        match code / 10_000 {
            _ if !(10_000..60_000).contains(&code) => None,
            1 => Some(ResponseCodeCategory::Informational),
            2 => Some(ResponseCodeCategory::Success),
            3 => Some(ResponseCodeCategory::Pending),
            4 => Some(ResponseCodeCategory::ClientData),
            _ => Some(ResponseCodeCategory::Backend),
        }
    }
}

/// One documented gateway response code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseCode {
    pub code: i64,
    pub description: &'static str,
    pub category: ResponseCodeCategory,
}

const RESPONSE_CODES: &[(i64, &str)] = &[
    (10001, "General undefined response."),
    (10002, "Still waiting on something."),
    (11000, "Retry later"),
    (20000, "General success response."),
    (20100, "Funds held by acquirer."),
    (20101, "Funds held by acquirer because merchant is new."),
    (20200, "Transaction reversed."),
    (20201, "Reversed due to chargeback."),
    (20202, "Reversed due to money-back guarantee."),
    (20203, "Reversed due to complaint by buyer."),
    (20204, "Payment has been refunded."),
    (20300, "Reversal has been canceled."),
    (30000, "Transaction still in progress."),
    (30100, "Transaction has been accepted."),
    (31000, "Transaction pending."),
    (31100, "Pending due to address."),
    (31101, "Pending due to uncleared eCheck."),
    (31102, "Pending due to risk review."),
    (31103, "Pending due regulatory review."),
    (31104, "Pending due to unregistered/unconfirmed receiver."),
    (31200, "Pending due to unverified account, verify acquirer account."),
    (31201, "Pending due to uncaptured funds, capture funds first."),
    (31202, "Pending due to international account, accept manually."),
    (31203, "Pending due to currency conflict, accept manually."),
    (31204, "Pending due to fraud filters."),
    (40000, "General problem with data."),
    (40001, "General problem with payment data."),
    (40002, "Invalid checksum."),
    (40100, "Problem with credit card data."),
    (40101, "Problem with cvv."),
    (40102, "Card expired or not yet valid."),
    (40103, "Limit exceeded."),
    (40104, "Card invalid."),
    (40105, "Expiry date not valid."),
    (40106, "Credit card brand required."),
    (40200, "Problem with bank account data."),
    (40201, "Bank account data combination mismatch."),
    (40202, "User authentication failed."),
    (40300, "Problem with 3d secure data."),
    (40301, "Currency / amount mismatch"),
    (40400, "Problem with input data."),
    (40401, "Amount too low or zero."),
    (40402, "Usage field too long."),
    (40403, "Currency not allowed."),
    (40410, "Invalid shopping cart data."),
    (40420, "Invalid address data."),
    (40500, "Permission error."),
    (40510, "Rate limit."),
    (50000, "General problem with backend."),
    (50001, "Country blacklisted."),
    (50002, "IP-Address blacklisted"),
    (50003, "Anonymous IP proxy used"),
    (50004, "Live mode not allowed."),
    (50005, "Insufficient permissions (paymill accesskey)."),
    (50100, "Technical error with credit card."),
    (50101, "Error limit exceeded."),
    (50102, "Card declined by authorization system."),
    (50103, "Manipulation or stolen card."),
    (50104, "Card restricted."),
    (50105, "Invalid card configuration data."),
    (50200, "Technical error with bank account."),
    (50201, "Card blacklisted."),
    (50300, "Technical error with 3D secure."),
    (50400, "Decline because of risk issues."),
    (50401, "Checksum invalid."),
    (50402, "Bank account number invalid (format check)."),
    (50403, "Technical risk error."),
    (50404, "Unknown risk error."),
    (50405, "Invalid bank code."),
    (50406, "Open chargeback."),
    (50407, "Historic chargeback."),
    (50408, "Institution/Government bank account (NCA)."),
    (50409, "Fraud case."),
    (50410, "Personal Account Protection (PAP)."),
    (50420, "Rejected due to fraud settings."),
    (50430, "Rejected due to risk settings."),
    (50440, "Merchant account restriction."),
    (50500, "General timeout."),
    (50501, "Timeout on side of the acquirer."),
    (50502, "Risk management transaction timeout."),
    (50600, "Duplicate transaction."),
    (50700, "Transaction canceled by user."),
    (50710, "Failed due to funding source."),
    (50711, "Cannot pay with PayPal."),
    (50720, "Declined by acquirer."),
    (50730, "Transaction denied by merchant."),
    (50800, "capture preauthorization failed."),
    (50810, "Authorization has been voided."),
    (50820, "Authorization period expired."),
];

static CODE_TABLE: OnceLock<HashMap<i64, ResponseCode>> = OnceLock::new();

fn table() -> &'static HashMap<i64, ResponseCode> {
    CODE_TABLE.get_or_init(|| {
        RESPONSE_CODES
            .iter()
            .filter_map(|&(code, description)| {
                ResponseCodeCategory::of(code).map(|category| {
                    (
                        code,
                        ResponseCode {
                            code,
                            description,
                            category,
                        },
                    )
                })
            })
            .collect()
    })
}

pub fn get(code: i64) -> Option<&'static ResponseCode> {
    table().get(&code)
}

/// Documented description for a response code
pub fn get_description(code: i64) -> Option<&'static str> {
    get(code).map(|entry| entry.description)
}

pub fn get_category(code: i64) -> Option<ResponseCodeCategory> {
    get(code).map(|entry| entry.category)
}

pub fn is_known(code: i64) -> bool {
    table().contains_key(&code)
}

/// All known codes in a category, ascending
pub fn codes_in_category(category: ResponseCodeCategory) -> Vec<i64> {
    let mut codes: Vec<i64> = table()
        .values()
        .filter(|entry| entry.category == category)
        .map(|entry| entry.code)
        .collect();
    codes.sort_unstable();
    codes
}

pub fn len() -> usize {
    table().len()
}
