//! Error handling module
//!
//! This module provides centralized error handling for the crate.

use thiserror::Error;

/// Construction-time validation failures for a payment request
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid receiver {0:?}: expected 12 to 16 decimal digits")]
    InvalidReceiver(String),

    #[error("Invalid target: description is required and must not exceed {max} characters (got {length})")]
    InvalidTarget { length: usize, max: usize },

    #[error("Invalid sum {0:?}: must be a number greater than zero")]
    InvalidSum(String),

    #[error("Invalid form kind {0:?}: possible values are shop, small, donate")]
    InvalidFormKind(String),

    #[error("Invalid payment type {0:?}: possible values are AC (bank card), PC (wallet), MC (mobile)")]
    InvalidPaymentType(String),
}

/// Notification callback failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotificationError {
    #[error("Notification field missing: {field}")]
    MissingField { field: &'static str },

    #[error("Notification signature mismatch")]
    SignatureMismatch,

    #[error("Notification field {field} is malformed: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("Notification body cannot be decoded: {0}")]
    Decode(String),
}

/// Application error types
#[derive(Error, Debug, Clone)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Notification error: {0}")]
    Notification(#[from] NotificationError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// True for errors caused by caller input rather than the environment
    pub fn is_client_error(&self) -> bool {
        matches!(self, AppError::Validation(_) | AppError::Notification(_))
    }
}

/// Application result type
pub type AppResult<T> = Result<T, AppError>;

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::Config(err.to_string())
    }
}
