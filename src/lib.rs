//! Quickpay - payment links and notification verification for the Yandex
//! quickpay gateway
//!
//! Builds payment URLs and HTML forms from validated parameters and verifies
//! the SHA-1 signature of the gateway's payment notifications. The crate
//! performs no network I/O.
//!
//! ```no_run
//! use quickpay::PaymentRequest;
//!
//! let mut request = PaymentRequest::new("410011112222333", "Order #1", "10")?;
//! request.set_label("order-1").set_need_email(true);
//! let url = request.to_url();
//! # Ok::<(), quickpay::ValidationError>(())
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;

#[cfg(test)]
mod tests;

pub use application::{NotificationVerifier, PaymentRequest};
pub use crate::config::AppConfig;
pub use domain::{Amount, FormKind, Notification, NotificationFields, PaymentParams, PaymentType};
pub use infrastructure::Redirect;
pub use shared::error::{AppError, AppResult, NotificationError, ValidationError};

/// Application result type
pub type Result<T> = std::result::Result<T, shared::error::AppError>;
