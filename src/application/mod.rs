//! Application layer - payment link building and callback verification
//!
//! This module contains the two services hosts interact with.

pub mod services;

pub use services::{NotificationVerifier, PaymentRequest};
