//! Notification callback domain models

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::str::FromStr;

use crate::shared::error::NotificationError;

/// Callback fields as received from the gateway
pub type NotificationFields = HashMap<String, String>;

pub const NOTIFICATION_TYPE: &str = "notification_type";
pub const OPERATION_ID: &str = "operation_id";
pub const AMOUNT: &str = "amount";
pub const CURRENCY: &str = "currency";
pub const DATETIME: &str = "datetime";
pub const SENDER: &str = "sender";
pub const CODEPRO: &str = "codepro";
pub const LABEL: &str = "label";
pub const SIGNATURE: &str = "sha1_hash";
pub const WITHDRAW_AMOUNT: &str = "withdraw_amount";
pub const UNACCEPTED: &str = "unaccepted";
pub const TEST_NOTIFICATION: &str = "test_notification";

/// Fields signed before the secret, in signing order
pub const SIGNED_BEFORE_SECRET: [&str; 7] = [
    NOTIFICATION_TYPE,
    OPERATION_ID,
    AMOUNT,
    CURRENCY,
    DATETIME,
    SENDER,
    CODEPRO,
];

/// Fields signed after the secret
pub const SIGNED_AFTER_SECRET: [&str; 1] = [LABEL];

/// Every field a callback must carry to be verifiable
pub const REQUIRED_FIELDS: [&str; 9] = [
    NOTIFICATION_TYPE,
    OPERATION_ID,
    AMOUNT,
    CURRENCY,
    DATETIME,
    SENDER,
    CODEPRO,
    LABEL,
    SIGNATURE,
];

/// Kind of incoming transfer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationType {
    /// Transfer from a wallet
    P2pIncoming,
    /// Transfer from a bank card
    CardIncoming,
    Other(String),
}

impl NotificationType {
    pub fn as_str(&self) -> &str {
        match self {
            NotificationType::P2pIncoming => "p2p-incoming",
            NotificationType::CardIncoming => "card-incoming",
            NotificationType::Other(s) => s,
        }
    }
}

impl From<&str> for NotificationType {
    fn from(s: &str) -> Self {
        match s {
            "p2p-incoming" => NotificationType::P2pIncoming,
            "card-incoming" => NotificationType::CardIncoming,
            other => NotificationType::Other(other.to_string()),
        }
    }
}

/// Typed view over callback fields. Build it from fields that have already
/// passed signature verification.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub notification_type: NotificationType,
    pub operation_id: String,
    pub amount: Decimal,
    pub withdraw_amount: Option<Decimal>,
    /// ISO 4217 numeric code, "643" for rubles
    pub currency: String,
    pub datetime: DateTime<FixedOffset>,
    pub sender: String,
    /// Payment is protected by a protection code
    pub codepro: bool,
    pub label: String,
    /// Payment is frozen until the receiver accepts it
    pub unaccepted: bool,
    pub test_notification: bool,
}

fn required<'a>(fields: &'a NotificationFields, name: &'static str) -> Result<&'a str, NotificationError> {
    fields
        .get(name)
        .map(String::as_str)
        .ok_or(NotificationError::MissingField { field: name })
}

fn parse_flag(fields: &NotificationFields, name: &'static str) -> Result<bool, NotificationError> {
    match fields.get(name).map(String::as_str) {
        None | Some("") | Some("false") => Ok(false),
        Some("true") => Ok(true),
        Some(other) => Err(NotificationError::InvalidField {
            field: name,
            reason: format!("expected true or false, got {other:?}"),
        }),
    }
}

fn parse_decimal(value: &str, name: &'static str) -> Result<Decimal, NotificationError> {
    Decimal::from_str(value).map_err(|e| NotificationError::InvalidField {
        field: name,
        reason: e.to_string(),
    })
}

impl TryFrom<&NotificationFields> for Notification {
    type Error = NotificationError;

    fn try_from(fields: &NotificationFields) -> Result<Self, Self::Error> {
        let amount = parse_decimal(required(fields, AMOUNT)?, AMOUNT)?;
        let withdraw_amount = match fields.get(WITHDRAW_AMOUNT) {
            Some(value) if !value.is_empty() => Some(parse_decimal(value, WITHDRAW_AMOUNT)?),
            _ => None,
        };

        let datetime = DateTime::parse_from_rfc3339(required(fields, DATETIME)?).map_err(|e| {
            NotificationError::InvalidField {
                field: DATETIME,
                reason: e.to_string(),
            }
        })?;

        if !fields.contains_key(CODEPRO) {
            return Err(NotificationError::MissingField { field: CODEPRO });
        }

        Ok(Self {
            notification_type: required(fields, NOTIFICATION_TYPE)?.into(),
            operation_id: required(fields, OPERATION_ID)?.to_string(),
            amount,
            withdraw_amount,
            currency: required(fields, CURRENCY)?.to_string(),
            datetime,
            sender: required(fields, SENDER)?.to_string(),
            codepro: parse_flag(fields, CODEPRO)?,
            label: required(fields, LABEL)?.to_string(),
            unaccepted: parse_flag(fields, UNACCEPTED)?,
            test_notification: parse_flag(fields, TEST_NOTIFICATION)?,
        })
    }
}
