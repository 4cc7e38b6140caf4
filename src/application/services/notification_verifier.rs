//! Notification signature verification
//!
//! The gateway signs a callback with SHA-1 over
//! `notification_type&operation_id&amount&currency&datetime&sender&codepro&secret&label`
//! and sends the lowercase hex digest as `sha1_hash`.

use percent_encoding::percent_decode_str;
use sha1::{Digest, Sha1};
use std::borrow::Cow;
use std::fmt;
use subtle::ConstantTimeEq;

use crate::domain::notification::{
    NotificationFields, AMOUNT, NOTIFICATION_TYPE, OPERATION_ID, SIGNATURE, SIGNED_AFTER_SECRET,
    SIGNED_BEFORE_SECRET,
};
use crate::shared::error::NotificationError;
use crate::shared::logging::LoggingUtils;

/// Verifies callbacks against the shared secret. Holds no mutable state.
#[derive(Clone)]
pub struct NotificationVerifier {
    secret: String,
}

impl fmt::Debug for NotificationVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationVerifier")
            .field("secret", &"<redacted>")
            .finish()
    }
}

impl NotificationVerifier {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Verify `fields` with the secret this verifier was built with
    pub fn verify(&self, fields: NotificationFields) -> Result<NotificationFields, NotificationError> {
        Self::validate(fields, &self.secret)
    }

    /// Verify a raw `application/x-www-form-urlencoded` callback body
    pub fn verify_form(&self, body: &str) -> Result<NotificationFields, NotificationError> {
        Self::validate_form(body, &self.secret)
    }

    /// Hand back `fields` untouched when the signature matches.
    ///
    /// Every one of the nine callback fields must be present; empty values
    /// are fine.
    pub fn validate(fields: NotificationFields, secret: &str) -> Result<NotificationFields, NotificationError> {
        let value = |name: &str| fields.get(name).map(String::as_str);

        if let Err(e) = Self::check(&fields, secret) {
            LoggingUtils::log_notification_rejected(value(OPERATION_ID), &e.to_string());
            return Err(e);
        }

        LoggingUtils::log_notification_accepted(
            value(NOTIFICATION_TYPE).unwrap_or_default(),
            value(OPERATION_ID).unwrap_or_default(),
            value(AMOUNT).unwrap_or_default(),
        );
        Ok(fields)
    }

    fn check(fields: &NotificationFields, secret: &str) -> Result<(), NotificationError> {
        let expected = Self::sign(fields, secret)?;
        let supplied = fields
            .get(SIGNATURE)
            .ok_or(NotificationError::MissingField { field: SIGNATURE })?;

        if !bool::from(expected.as_bytes().ct_eq(supplied.as_bytes())) {
            return Err(NotificationError::SignatureMismatch);
        }
        Ok(())
    }

    /// Decode a form-encoded body, then [`validate`](Self::validate) it.
    /// A repeated key keeps its last value.
    pub fn validate_form(body: &str, secret: &str) -> Result<NotificationFields, NotificationError> {
        let fields = match Self::decode_form(body) {
            Ok(fields) => fields,
            Err(e) => {
                LoggingUtils::log_notification_rejected(None, &e.to_string());
                return Err(e);
            }
        };
        Self::validate(fields, secret)
    }

    fn decode_form(body: &str) -> Result<NotificationFields, NotificationError> {
        let mut fields = NotificationFields::new();
        for pair in body.split('&').filter(|pair| !pair.is_empty()) {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            fields.insert(Self::decode_component(name)?, Self::decode_component(value)?);
        }
        Ok(fields)
    }

    /// `+` is a space; percent escapes must decode to UTF-8
    fn decode_component(raw: &str) -> Result<String, NotificationError> {
        let spaced = raw.replace('+', " ");
        percent_decode_str(&spaced)
            .decode_utf8()
            .map(Cow::into_owned)
            .map_err(|e| NotificationError::Decode(format!("{raw:?}: {e}")))
    }

    /// Lowercase hex SHA-1 the gateway is expected to send for `fields`
    pub fn sign(fields: &NotificationFields, secret: &str) -> Result<String, NotificationError> {
        let payload = Self::signing_string(fields, secret)?;
        let mut hasher = Sha1::new();
        hasher.update(payload.as_bytes());
        Ok(hex::encode(hasher.finalize()))
    }

    /// The `&`-joined string that gets hashed
    pub fn signing_string(fields: &NotificationFields, secret: &str) -> Result<String, NotificationError> {
        let value = |field: &'static str| {
            fields
                .get(field)
                .map(String::as_str)
                .ok_or(NotificationError::MissingField { field })
        };

        let mut parts = Vec::with_capacity(SIGNED_BEFORE_SECRET.len() + 1 + SIGNED_AFTER_SECRET.len());
        for field in SIGNED_BEFORE_SECRET {
            parts.push(value(field)?);
        }
        parts.push(secret);
        for field in SIGNED_AFTER_SECRET {
            parts.push(value(field)?);
        }
        Ok(parts.join("&"))
    }
}
