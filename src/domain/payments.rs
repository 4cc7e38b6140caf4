//! Payments domain models and types

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use crate::shared::error::ValidationError;
use crate::shared::validation::{RECEIVER_PATTERN, SUM_PATTERN};

/// Wire names of the payment parameters, in canonical order.
/// Both the query string and the hidden form use exactly this sequence.
pub const PARAMETER_NAMES: [&str; 14] = [
    "receiver",
    "targets",
    "sum",
    "quickpay-form",
    "paymentType",
    "formcomment",
    "short-dest",
    "label",
    "comment",
    "successURL",
    "need-fio",
    "need-email",
    "need-phone",
    "need-address",
];

/// Quickpay form kind
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FormKind {
    #[default]
    Shop,
    Small,
    Donate,
}

impl FormKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormKind::Shop => "shop",
            FormKind::Small => "small",
            FormKind::Donate => "donate",
        }
    }
}

impl FromStr for FormKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shop" => Ok(FormKind::Shop),
            "small" => Ok(FormKind::Small),
            "donate" => Ok(FormKind::Donate),
            _ => Err(ValidationError::InvalidFormKind(s.to_string())),
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the payer pays. Rendered with the gateway's two-letter codes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum PaymentType {
    #[default]
    #[serde(rename = "AC")]
    BankCard,
    #[serde(rename = "PC")]
    Wallet,
    #[serde(rename = "MC")]
    Mobile,
}

impl PaymentType {
    /// Gateway code
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentType::BankCard => "AC",
            PaymentType::Wallet => "PC",
            PaymentType::Mobile => "MC",
        }
    }
}

impl FromStr for PaymentType {
    type Err = ValidationError;

    /// Accepts the gateway codes and the descriptive names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AC" | "bank_card" => Ok(PaymentType::BankCard),
            "PC" | "wallet" => Ok(PaymentType::Wallet),
            "MC" | "mobile" => Ok(PaymentType::Mobile),
            _ => Err(ValidationError::InvalidPaymentType(s.to_string())),
        }
    }
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Positive payment sum, held at exactly two decimal places.
///
/// Inputs with more precision are rounded half away from zero
/// (`10.005` becomes `10.01`, `10.004` becomes `10.00`). An input that rounds
/// to zero is rejected, since the gateway cannot charge `0.00`, and so is one
/// too large for `Decimal` to hold with two fractional digits (1e27 and up).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, ValidationError> {
        let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        if rounded <= Decimal::ZERO {
            return Err(ValidationError::InvalidSum(value.to_string()));
        }
        rounded.rescale(2);
        if rounded.scale() != 2 {
            return Err(ValidationError::InvalidSum(value.to_string()));
        }
        Ok(Self(rounded))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Amount {
    /// Fixed-point with two fractional digits and a '.' separator
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Amount {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if !SUM_PATTERN.is_match(trimmed) {
            return Err(ValidationError::InvalidSum(s.to_string()));
        }
        let value = Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map_err(|_| ValidationError::InvalidSum(s.to_string()))?;
        Amount::new(value)
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = ValidationError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Amount::new(value)
    }
}

impl TryFrom<&str> for Amount {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for Amount {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<f64> for Amount {
    type Error = ValidationError;

    /// Goes through the shortest decimal representation of the float, so
    /// `10.005_f64` rounds like the literal `"10.005"`.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(ValidationError::InvalidSum(value.to_string()));
        }
        value.to_string().parse()
    }
}

impl TryFrom<i64> for Amount {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Amount::new(Decimal::from(value))
    }
}

fn default_form() -> String {
    FormKind::default().as_str().to_string()
}

fn default_payment_type() -> String {
    PaymentType::default().as_str().to_string()
}

fn validate_sum(sum: &str) -> Result<(), validator::ValidationError> {
    sum.parse::<Amount>()
        .map(|_| ())
        .map_err(|_| validator::ValidationError::new("positive_sum"))
}

fn validate_form_kind(form: &str) -> Result<(), validator::ValidationError> {
    form.parse::<FormKind>()
        .map(|_| ())
        .map_err(|_| validator::ValidationError::new("form_kind"))
}

fn validate_payment_type(payment_type: &str) -> Result<(), validator::ValidationError> {
    payment_type
        .parse::<PaymentType>()
        .map(|_| ())
        .map_err(|_| validator::ValidationError::new("payment_type"))
}

/// Untyped payment input as a host receives it (form post, config, JSON).
/// Field names follow the gateway's parameter names.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PaymentParams {
    #[validate(regex(path = *RECEIVER_PATTERN))]
    pub receiver: String,

    #[validate(length(min = 1, max = 150))]
    pub targets: String,

    #[validate(custom(function = "validate_sum"))]
    pub sum: String,

    #[serde(rename = "quickpay-form", default = "default_form")]
    #[validate(custom(function = "validate_form_kind"))]
    pub form: String,

    #[serde(rename = "paymentType", default = "default_payment_type")]
    #[validate(custom(function = "validate_payment_type"))]
    pub payment_type: String,

    #[serde(default)]
    pub formcomment: String,

    #[serde(rename = "short-dest", default)]
    pub short_dest: String,

    #[serde(default)]
    pub label: String,

    #[serde(default)]
    pub comment: String,

    #[serde(rename = "successURL", default)]
    pub success_url: String,

    #[serde(rename = "need-fio", default)]
    pub need_fio: bool,

    #[serde(rename = "need-email", default)]
    pub need_email: bool,

    #[serde(rename = "need-phone", default)]
    pub need_phone: bool,

    #[serde(rename = "need-address", default)]
    pub need_address: bool,
}

impl Default for PaymentParams {
    fn default() -> Self {
        Self {
            receiver: String::new(),
            targets: String::new(),
            sum: String::new(),
            form: default_form(),
            payment_type: default_payment_type(),
            formcomment: String::new(),
            short_dest: String::new(),
            label: String::new(),
            comment: String::new(),
            success_url: String::new(),
            need_fio: false,
            need_email: false,
            need_phone: false,
            need_address: false,
        }
    }
}

impl PaymentParams {
    /// Run the validator rules and report the first failing field as a
    /// typed error, checking fields in declaration order.
    pub fn check(&self) -> Result<(), ValidationError> {
        let Err(errors) = self.validate() else {
            return Ok(());
        };
        let failed = errors.field_errors();

        if failed.contains_key("receiver") {
            return Err(ValidationError::InvalidReceiver(self.receiver.clone()));
        }
        if failed.contains_key("targets") {
            return Err(ValidationError::InvalidTarget {
                length: self.targets.chars().count(),
                max: crate::shared::validation::MAX_TARGET_LENGTH,
            });
        }
        if failed.contains_key("sum") {
            return Err(ValidationError::InvalidSum(self.sum.clone()));
        }
        // validator keys renamed fields by their serde name
        if failed.contains_key("form") || failed.contains_key("quickpay-form") {
            return Err(ValidationError::InvalidFormKind(self.form.clone()));
        }
        Err(ValidationError::InvalidPaymentType(self.payment_type.clone()))
    }
}
