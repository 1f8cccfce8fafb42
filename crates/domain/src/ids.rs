//! Typed identifiers
//!
//! Identifiers are opaque strings. Families that own their identity generate
//! UUID v4 strings; log and metric ids are assigned by storage and only ever
//! parsed. Parent references are stored as ids, never as object references.

use std::fmt;

use uuid::Uuid;

use crate::error::{DomainError, ErrorCode};

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            /// Generates a fresh UUID v4 identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Parses a raw identifier, rejecting blank input with `code`.
            ///
            /// The code is supplied by the caller because an id is validated
            /// on behalf of the aggregate that holds it.
            pub fn parse(raw: impl Into<String>, code: ErrorCode) -> Result<Self, DomainError> {
                let raw = raw.into();
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Err(DomainError::new(
                        code,
                        concat!(stringify!($name), " cannot be empty"),
                    ));
                }
                Ok(Self(trimmed.to_string()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

// Celestial IDs
define_id!(GalaxyId);
define_id!(SystemId);
define_id!(AsteroidId);
define_id!(PlanetId);
define_id!(MoonId);
define_id!(StarId);

// Account IDs
define_id!(UserId);
define_id!(DonationId);

// Storage-assigned IDs
define_id!(LogId);
define_id!(MetricId);

/// Parses an optional identifier, treating `None` as absent.
pub(crate) fn parse_optional<T>(
    raw: Option<String>,
    parse: impl FnOnce(String) -> Result<T, DomainError>,
) -> Result<Option<T>, DomainError> {
    raw.map(parse).transpose()
}
