//! Logging utilities module
//!
//! Subscriber setup for hosts plus structured events shared by the services.

use tracing::{debug, info, warn};

use crate::shared::error::AppError;

/// Logging utilities for the crate
pub struct LoggingUtils;

impl LoggingUtils {
    /// Install a global fmt subscriber. `RUST_LOG` wins over `level` when set.
    pub fn initialize(level: &str) -> crate::Result<()> {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(level));

        let subscriber = fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(false)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .finish();

        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| AppError::Internal(format!("Failed to initialize logging: {}", e)))?;

        Ok(())
    }

    /// Log a freshly validated payment request
    pub fn log_payment_created(receiver: &str, sum: &str, form: &str, payment_type: &str) {
        debug!(
            receiver = %receiver,
            sum = %sum,
            form = %form,
            payment_type = %payment_type,
            "Payment request created"
        );
    }

    /// Log a rendered payment link or form
    pub fn log_rendered(kind: &str, endpoint: &str, fields: usize) {
        debug!(kind = %kind, endpoint = %endpoint, fields = fields, "Payment request rendered");
    }

    /// Log an accepted notification. The signature and secret are never logged.
    pub fn log_notification_accepted(notification_type: &str, operation_id: &str, amount: &str) {
        info!(
            notification_type = %notification_type,
            operation_id = %operation_id,
            amount = %amount,
            "Notification accepted"
        );
    }

    /// Log a rejected notification
    pub fn log_notification_rejected(operation_id: Option<&str>, reason: &str) {
        warn!(operation_id = operation_id, reason = %reason, "Notification rejected");
    }
}
