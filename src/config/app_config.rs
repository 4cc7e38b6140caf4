//! Application configuration structures
//!
//! This module contains the configuration a host needs to build payment
//! links and verify notifications.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::{NotificationVerifier, PaymentRequest, QUICKPAY_ENDPOINT};
use crate::config::validation::ConfigValidator;
use crate::domain::payments::{Amount, FormKind, PaymentType};
use crate::shared::error::{AppError, AppResult, ValidationError};
use crate::shared::validation::RECEIVER_PATTERN;

/// Gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GatewayConfig {
    /// Confirmation endpoint; override to target a mock gateway
    #[validate(url)]
    pub endpoint: String,

    /// Merchant wallet number used by [`AppConfig::payment_request`]
    #[validate(regex(path = *RECEIVER_PATTERN))]
    pub receiver: Option<String>,

    /// Form kind: shop, small or donate
    #[validate(length(min = 1))]
    pub default_form: String,

    /// Payment type code: AC, PC or MC
    #[validate(length(min = 1))]
    pub default_payment_type: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            endpoint: QUICKPAY_ENDPOINT.to_string(),
            receiver: None,
            default_form: FormKind::default().as_str().to_string(),
            default_payment_type: PaymentType::default().as_str().to_string(),
        }
    }
}

/// Notification configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct NotificationConfig {
    /// Shared secret from the wallet's notification settings
    #[validate(length(min = 1))]
    pub secret: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level
    #[validate(length(min = 1))]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Gateway configuration
    pub gateway: GatewayConfig,

    /// Notification configuration
    pub notifications: NotificationConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from an optional `Quickpay.{toml,yaml,json}` file and
    /// `QUICKPAY__*` environment variables
    pub fn load() -> crate::Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("Quickpay").required(false))
            .add_source(config::Environment::with_prefix("QUICKPAY").separator("__"))
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build configuration: {}", e)))?;

        let config: AppConfig = config
            .try_deserialize()
            .map_err(|e| AppError::Config(format!("Failed to deserialize configuration: {}", e)))?;

        config.checked()
    }

    /// Parse and validate an inline TOML document
    pub fn from_toml_str(document: &str) -> crate::Result<Self> {
        let config: AppConfig = toml::from_str(document)?;
        config.checked()
    }

    fn checked(self) -> crate::Result<Self> {
        self.validate_config()
            .map_err(|e| AppError::Config(format!("Configuration validation failed: {}", e)))?;
        ConfigValidator::validate_config(&self)?;
        Ok(self)
    }

    /// Validate the entire configuration
    pub fn validate_config(&self) -> Result<(), validator::ValidationErrors> {
        self.gateway.validate()?;
        self.notifications.validate()?;
        self.logging.validate()?;

        Ok(())
    }

    /// Payment request for the configured wallet with the configured
    /// defaults and endpoint
    pub fn payment_request<S>(&self, targets: impl Into<String>, sum: S) -> AppResult<PaymentRequest>
    where
        S: TryInto<Amount, Error = ValidationError>,
    {
        let receiver = self
            .gateway
            .receiver
            .as_deref()
            .ok_or_else(|| AppError::Config("gateway.receiver is not configured".to_string()))?;

        let mut request = PaymentRequest::with_options(
            receiver,
            targets,
            sum,
            &self.gateway.default_form,
            &self.gateway.default_payment_type,
        )?;
        request.set_endpoint(self.gateway.endpoint.as_str());
        Ok(request)
    }

    /// Verifier bound to the configured notification secret
    pub fn verifier(&self) -> AppResult<NotificationVerifier> {
        self.notifications
            .secret
            .as_deref()
            .map(NotificationVerifier::new)
            .ok_or_else(|| AppError::Config("notifications.secret is not configured".to_string()))
    }
}
