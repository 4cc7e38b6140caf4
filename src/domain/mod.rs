//! Domain layer - value types of the quickpay contract
//!
//! Payment parameters and notification fields, independent of how they are
//! rendered or transported.

pub mod notification;
pub mod payments;

pub use notification::{Notification, NotificationFields, NotificationType};
pub use payments::{Amount, FormKind, PaymentParams, PaymentType, PARAMETER_NAMES};
