//! Redirect to the gateway
//!
//! The crate performs no I/O. `Redirect` carries what a host HTTP layer needs
//! to send the payer to the payment page.

/// A `302 Found` pointing at a payment URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    location: String,
}

impl Redirect {
    pub const STATUS: u16 = 302;

    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }

    pub fn status(&self) -> u16 {
        Self::STATUS
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// `("Location", url)` header pair
    pub fn header(&self) -> (&'static str, &str) {
        ("Location", &self.location)
    }

    pub fn into_location(self) -> String {
        self.location
    }
}
