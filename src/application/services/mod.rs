//! Application services
//!
//! `PaymentRequest` builds what the payer is sent to; `NotificationVerifier`
//! authenticates what the gateway sends back. They share nothing but
//! constants.

pub mod notification_verifier;
pub mod payment_request;

pub use notification_verifier::NotificationVerifier;
pub use payment_request::{PaymentRequest, DEFAULT_BUTTON_CLASS, DEFAULT_BUTTON_TEXT, QUICKPAY_ENDPOINT};
