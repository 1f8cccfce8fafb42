//! Donation value objects

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, ErrorCode};

/// A strictly positive amount in minor currency units (cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Money(i64);

impl Money {
    pub fn new(minor_units: i64) -> Result<Self, DomainError> {
        if minor_units <= 0 {
            return Err(DomainError::invalid_field(format!(
                "amount must be a positive integer of minor units, got {minor_units}"
            )));
        }
        Ok(Self(minor_units))
    }

    pub fn minor_units(self) -> i64 {
        self.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Money {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Money> for i64 {
    fn from(value: Money) -> Self {
        value.0
    }
}

/// ISO 4217-shaped currency code: exactly three ASCII letters, stored uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub const LENGTH: usize = 3;

    pub fn new(raw: &str) -> Result<Self, DomainError> {
        let normalized = raw.trim().to_ascii_uppercase();
        if normalized.len() != Self::LENGTH || !normalized.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(DomainError::invalid_field(format!(
                "currency must be {} letters, got '{}'",
                Self::LENGTH,
                raw.trim()
            )));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(&s)
    }
}

impl From<CurrencyCode> for String {
    fn from(value: CurrencyCode) -> Self {
        value.0
    }
}

closed_set! {
    DonationType, ErrorCode::InvalidField, "Donation type" {
        OneTime => "one_time",
        Monthly => "monthly",
    }
}

closed_set! {
    DonationStatus, ErrorCode::InvalidField, "Donation status" {
        Pending => "pending",
        Active => "active",
        Completed => "completed",
        Canceled => "canceled",
    }
}

define_text! {
    /// Payment provider handling the donation (e.g. `stripe`)
    PaymentProvider, ErrorCode::InvalidField, "Provider", min = 1, max = 50
}

define_text! {
    /// Opaque reference issued by the payment provider
    ProviderReference, ErrorCode::InvalidField, "Provider reference", min = 1, max = 255
}

impl PaymentProvider {
    pub const DEFAULT: &'static str = "stripe";
}
