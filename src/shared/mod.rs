//! Shared utilities and common functionality
//!
//! Error handling, logging and field validation used across the crate.

pub mod error;
pub mod logging;
pub mod validation;

pub use error::{AppError, AppResult, NotificationError, ValidationError};
pub use logging::LoggingUtils;
pub use validation::ValidationUtils;
