//! Configuration management module
//!
//! Loading, validation and access to gateway, notification and logging
//! settings.

pub mod app_config;
pub mod validation;

pub use app_config::{AppConfig, GatewayConfig, LoggingConfig, NotificationConfig};
pub use validation::ConfigValidator;
