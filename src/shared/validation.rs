//! Validation utilities module
//!
//! Field-level checks shared by the domain types and the config layer.

use regex::Regex;
use std::sync::LazyLock;
use url::{Host, Url};

use crate::shared::error::ValidationError;

/// Wallet number: 12 to 16 ASCII digits, nothing else
pub static RECEIVER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{12,16}$").unwrap_or_else(|e| panic!("receiver pattern is invalid: {e}"))
});

/// Decimal sum, plain or scientific; no digit separators
pub static SUM_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$")
        .unwrap_or_else(|e| panic!("sum pattern is invalid: {e}"))
});

/// Maximum length of the payment description, in characters
pub const MAX_TARGET_LENGTH: usize = 150;

/// Validation utilities
pub struct ValidationUtils;

impl ValidationUtils {
    /// Validate a receiver wallet number
    pub fn validate_receiver(receiver: &str) -> Result<(), ValidationError> {
        if !RECEIVER_PATTERN.is_match(receiver) {
            return Err(ValidationError::InvalidReceiver(receiver.to_string()));
        }
        Ok(())
    }

    /// Validate a payment description
    pub fn validate_target(target: &str) -> Result<(), ValidationError> {
        let length = target.chars().count();
        if length == 0 || length > MAX_TARGET_LENGTH {
            return Err(ValidationError::InvalidTarget {
                length,
                max: MAX_TARGET_LENGTH,
            });
        }
        Ok(())
    }

    /// Check that an endpoint uses http(s); only loopback hosts may use plain http
    pub fn validate_endpoint(url: &str) -> Result<(), String> {
        let parsed = Url::parse(url).map_err(|e| format!("Gateway endpoint is not a valid URL: {}", e))?;

        match parsed.scheme() {
            "https" => Ok(()),
            "http" if Self::is_loopback(&parsed) => Ok(()),
            "http" => Err("Production gateway endpoint must use HTTPS".to_string()),
            _ => Err("Gateway endpoint must start with http:// or https://".to_string()),
        }
    }

    fn is_loopback(url: &Url) -> bool {
        match url.host() {
            Some(Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
            Some(Host::Ipv4(ip)) => ip.is_loopback(),
            Some(Host::Ipv6(ip)) => ip.is_loopback(),
            None => false,
        }
    }
}
