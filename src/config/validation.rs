//! Configuration validation module
//!
//! Checks that go beyond the validator crate's field rules.

use crate::config::app_config::{AppConfig, GatewayConfig};
use crate::domain::payments::{FormKind, PaymentType};
use crate::shared::error::AppError;
use crate::shared::validation::ValidationUtils;

/// Configuration validator for additional validation logic
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the complete configuration
    pub fn validate_config(config: &AppConfig) -> crate::Result<()> {
        Self::validate_gateway_config(&config.gateway)?;

        if config.notifications.secret.is_none() {
            tracing::warn!("No notification secret configured - callbacks cannot be verified");
        }

        Ok(())
    }

    /// Endpoint scheme and the default form/payment type
    fn validate_gateway_config(gateway: &GatewayConfig) -> crate::Result<()> {
        ValidationUtils::validate_endpoint(&gateway.endpoint).map_err(AppError::Config)?;
        gateway.default_form.parse::<FormKind>()?;
        gateway.default_payment_type.parse::<PaymentType>()?;
        Ok(())
    }
}
