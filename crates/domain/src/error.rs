//! Unified error type for the domain layer
//!
//! Every validation failure raised by a value object, aggregate, mapper or
//! boundary contract is a [`DomainError`]. Callers branch on its
//! [`ErrorCode`]; the dot-namespaced string produced by `Display` on the code
//! is the stable wire representation existing clients depend on.

use std::fmt;

use thiserror::Error;

/// Namespace a code belongs to (the part before the first dot).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Invariant violation inside entity logic (`DOMAIN.*`)
    Domain,
    /// Field or payload rejected before it reaches aggregate invariants (`PRESENTATION.*`)
    Presentation,
    /// Named user lifecycle rule failure (`USERS.*`)
    Users,
    /// Named donation lifecycle rule failure (`DONATIONS.*`)
    Donations,
}

impl ErrorCategory {
    /// Returns the namespace prefix, without the trailing dot.
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Domain => "DOMAIN",
            Self::Presentation => "PRESENTATION",
            Self::Users => "USERS",
            Self::Donations => "DONATIONS",
        }
    }
}

macro_rules! error_codes {
    ($($variant:ident => ($category:ident, $code:literal)),+ $(,)?) => {
        /// Closed set of machine-readable error codes.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum ErrorCode {
            $($variant),+
        }

        impl ErrorCode {
            /// Every known code, in declaration order.
            pub const ALL: &'static [ErrorCode] = &[$(ErrorCode::$variant),+];

            /// Returns the dot-namespaced code string.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $code),+
                }
            }

            /// Returns the namespace this code belongs to.
            pub const fn category(self) -> ErrorCategory {
                match self {
                    $(Self::$variant => ErrorCategory::$category),+
                }
            }

            /// Looks a code up by its wire string.
            pub fn from_code(code: &str) -> Option<Self> {
                match code {
                    $($code => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

error_codes! {
    // Presentation
    InvalidField => (Presentation, "PRESENTATION.INVALID_FIELD"),
    InvalidPayload => (Presentation, "PRESENTATION.INVALID_PAYLOAD"),

    // System
    InvalidSystemName => (Domain, "DOMAIN.INVALID_SYSTEM_NAME"),
    InvalidSystemPosition => (Domain, "DOMAIN.INVALID_SYSTEM_POSITION"),
    InvalidSystemValue => (Domain, "DOMAIN.INVALID_SYSTEM_VALUE"),

    // Asteroid
    InvalidAsteroidName => (Domain, "DOMAIN.INVALID_ASTEROID_NAME"),
    InvalidAsteroidType => (Domain, "DOMAIN.INVALID_ASTEROID_TYPE"),
    InvalidAsteroidSize => (Domain, "DOMAIN.INVALID_ASTEROID_SIZE"),
    InvalidAsteroidOrbital => (Domain, "DOMAIN.INVALID_ASTEROID_ORBITAL"),
    InvalidAsteroidValue => (Domain, "DOMAIN.INVALID_ASTEROID_VALUE"),

    // Planet
    InvalidPlanetValue => (Domain, "DOMAIN.INVALID_PLANET_VALUE"),
    InvalidPlanetType => (Domain, "DOMAIN.INVALID_PLANET_TYPE"),
    InvalidPlanetSize => (Domain, "DOMAIN.INVALID_PLANET_SIZE"),
    InvalidPlanetBiome => (Domain, "DOMAIN.INVALID_PLANET_BIOME"),

    // Moon
    InvalidMoonName => (Domain, "DOMAIN.INVALID_MOON_NAME"),
    InvalidMoonSize => (Domain, "DOMAIN.INVALID_MOON_SIZE"),
    InvalidMoonOrbital => (Domain, "DOMAIN.INVALID_MOON_ORBITAL"),
    InvalidMoonValue => (Domain, "DOMAIN.INVALID_MOON_VALUE"),

    // Star
    InvalidStarValue => (Domain, "DOMAIN.INVALID_STAR_VALUE"),
    InvalidStarType => (Domain, "DOMAIN.INVALID_STAR_TYPE"),
    InvalidStarClass => (Domain, "DOMAIN.INVALID_STAR_CLASS"),
    InvalidStarColor => (Domain, "DOMAIN.INVALID_STAR_COLOR"),

    // User
    InvalidUserId => (Domain, "DOMAIN.INVALID_USER_ID"),
    InvalidUserEmail => (Domain, "DOMAIN.INVALID_USER_EMAIL"),
    InvalidUserUsername => (Domain, "DOMAIN.INVALID_USER_USERNAME"),
    InvalidUserPassword => (Domain, "DOMAIN.INVALID_USER_PASSWORD"),
    InvalidUserRole => (Domain, "DOMAIN.INVALID_USER_ROLE"),
    InvalidUserLifecycle => (Domain, "DOMAIN.INVALID_USER_LIFECYCLE"),
    InvalidUserVerificationCode => (Domain, "DOMAIN.INVALID_USER_VERIFICATION_CODE"),
    UserRestoreFailed => (Users, "USERS.RESTORE_FAILED"),
    UserDeleteFailed => (Users, "USERS.DELETE_FAILED"),
    UserArchiveFailed => (Users, "USERS.ARCHIVE_FAILED"),
    UserVerificationFailed => (Users, "USERS.VERIFICATION_FAILED"),

    // Donation
    DonationActivateFailed => (Donations, "DONATIONS.ACTIVATE_FAILED"),
    DonationCompleteFailed => (Donations, "DONATIONS.COMPLETE_FAILED"),
    DonationCancelFailed => (Donations, "DONATIONS.CANCEL_FAILED"),
    DonationRenewFailed => (Donations, "DONATIONS.RENEW_FAILED"),
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single failure kind of the domain layer.
///
/// Errors raised by value objects propagate unchanged through the aggregate
/// and mapper that invoked them; nothing in this crate re-codes an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}: {message}")]
pub struct DomainError {
    code: ErrorCode,
    message: String,
}

impl DomainError {
    /// Creates an error with an explicit code.
    ///
    /// # Example
    /// ```ignore
    /// if trimmed.chars().count() < MIN_NAME_LENGTH {
    ///     return Err(DomainError::new(ErrorCode::InvalidSystemName, "System name is too short"));
    /// }
    /// ```
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Create a `PRESENTATION.INVALID_FIELD` error
    pub fn invalid_field(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidField, message)
    }

    /// Create a `PRESENTATION.INVALID_PAYLOAD` error
    pub fn invalid_payload(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidPayload, message)
    }

    /// Machine-readable code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Namespace of the code.
    pub fn category(&self) -> ErrorCategory {
        self.code.category()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_display_is_wire_string() {
        assert_eq!(
            ErrorCode::InvalidStarClass.to_string(),
            "DOMAIN.INVALID_STAR_CLASS"
        );
        assert_eq!(ErrorCode::InvalidField.to_string(), "PRESENTATION.INVALID_FIELD");
        assert_eq!(ErrorCode::UserRestoreFailed.to_string(), "USERS.RESTORE_FAILED");
    }

    #[test]
    fn test_category_matches_prefix() {
        for code in ErrorCode::ALL {
            let prefix = code.category().prefix();
            assert!(
                code.as_str().starts_with(&format!("{prefix}.")),
                "{code} does not start with {prefix}"
            );
        }
    }

    #[test]
    fn test_codes_round_trip_through_wire_string() {
        for code in ErrorCode::ALL {
            assert_eq!(ErrorCode::from_code(code.as_str()), Some(*code));
        }
        assert_eq!(ErrorCode::from_code("DOMAIN.UNKNOWN"), None);
    }

    #[test]
    fn test_error_display_includes_code_and_message() {
        let err = DomainError::invalid_field("currency must be 3 letters");
        assert_eq!(err.code(), ErrorCode::InvalidField);
        assert_eq!(err.category(), ErrorCategory::Presentation);
        assert_eq!(
            err.to_string(),
            "PRESENTATION.INVALID_FIELD: currency must be 3 letters"
        );
    }
}
