//! Test fixtures shared by the scenario suites

use crate::domain::notification::*;
use crate::{NotificationVerifier, PaymentRequest};

pub const RECEIVER: &str = "123456789012";
pub const SECRET: &str = "secret";

/// The minimal shop request used across scenarios
pub fn payment_request() -> PaymentRequest {
    PaymentRequest::with_options(RECEIVER, "Order #1", "10", "shop", "AC")
        .unwrap_or_else(|e| panic!("fixture request is invalid: {e}"))
}

/// Callback fields without `sha1_hash`
pub fn callback_fields() -> NotificationFields {
    [
        (NOTIFICATION_TYPE, "p2p-incoming"),
        (OPERATION_ID, "1"),
        (AMOUNT, "10.00"),
        (CURRENCY, "643"),
        (DATETIME, "2020-01-01T00:00:00Z"),
        (SENDER, ""),
        (CODEPRO, "false"),
        (LABEL, ""),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

/// Callback fields carrying `signature`
pub fn callback_with_signature(signature: &str) -> NotificationFields {
    let mut fields = callback_fields();
    fields.insert(SIGNATURE.to_string(), signature.to_string());
    fields
}

/// Callback fields signed with `secret`
pub fn signed_callback(fields: NotificationFields, secret: &str) -> NotificationFields {
    let signature = NotificationVerifier::sign(&fields, secret)
        .unwrap_or_else(|e| panic!("fixture fields cannot be signed: {e}"));
    let mut fields = fields;
    fields.insert(SIGNATURE.to_string(), signature);
    fields
}

/// Parse a query string back into ordered pairs
pub fn parse_query(query: &str) -> Vec<(String, String)> {
    url::form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect()
}
