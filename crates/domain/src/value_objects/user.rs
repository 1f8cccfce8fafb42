//! User account value objects

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use crate::error::{DomainError, ErrorCode};

static USERNAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_.\-]+$").expect("valid regex"));

/// A lower-cased, shape-checked email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub const MAX_LENGTH: usize = 254;

    /// Trims, lower-cases and validates an address.
    ///
    /// The error code is supplied by the caller: aggregate construction
    /// reports `DOMAIN.INVALID_USER_EMAIL`, boundary contracts report
    /// `PRESENTATION.INVALID_FIELD`.
    pub fn parse(raw: &str, code: ErrorCode) -> Result<Self, DomainError> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(DomainError::new(code, "Email cannot be empty"));
        }
        if normalized.len() > Self::MAX_LENGTH || !normalized.validate_email() {
            return Err(DomainError::new(
                code,
                format!("'{normalized}' is not a valid email address"),
            ));
        }
        Ok(Self(normalized))
    }

    pub fn new(raw: &str) -> Result<Self, DomainError> {
        Self::parse(raw, ErrorCode::InvalidUserEmail)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Email {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(&s)
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

/// Public handle: 3-25 characters of letters, digits, `_`, `-` or `.`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    pub const MIN_LENGTH: usize = 3;
    pub const MAX_LENGTH: usize = 25;

    pub fn new(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        let length = trimmed.chars().count();
        if !(Self::MIN_LENGTH..=Self::MAX_LENGTH).contains(&length) {
            return Err(DomainError::new(
                ErrorCode::InvalidUserUsername,
                format!(
                    "Username must be between {} and {} characters",
                    Self::MIN_LENGTH,
                    Self::MAX_LENGTH
                ),
            ));
        }
        if !USERNAME_PATTERN.is_match(trimmed) {
            return Err(DomainError::new(
                ErrorCode::InvalidUserUsername,
                "Username may only contain letters, digits, '_', '-' and '.'",
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Username {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(&s)
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

/// A stored password hash. Never hashed or verified here; only required to
/// be non-blank. `Debug` does not print the value.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    pub fn new(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(DomainError::new(
                ErrorCode::InvalidUserPassword,
                "Password hash cannot be empty",
            ));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(<redacted>)")
    }
}

/// A pending email verification code. `Debug` does not print the value.
#[derive(Clone, PartialEq, Eq)]
pub struct VerificationCode(String);

impl VerificationCode {
    pub const MAX_LENGTH: usize = 64;

    pub fn new(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.chars().count() > Self::MAX_LENGTH {
            return Err(DomainError::new(
                ErrorCode::InvalidUserVerificationCode,
                format!(
                    "Verification code must be 1 to {} characters",
                    Self::MAX_LENGTH
                ),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Compares against a submitted code after trimming it.
    pub fn matches(&self, submitted: &str) -> bool {
        self.0 == submitted.trim()
    }
}

impl fmt::Debug for VerificationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("VerificationCode(<redacted>)")
    }
}

closed_set! {
    /// Authorization role. Tokens are case-sensitive.
    Role, ErrorCode::InvalidUserRole, "Role" {
        User => "User",
        Admin => "Admin",
    }
}

impl Default for Role {
    fn default() -> Self {
        Self::User
    }
}

impl Role {
    pub fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}
