//! Declarative builders for the two value object shapes that repeat across
//! every entity family: trimmed, length-bounded text and closed enumerations.

/// Defines a trimmed, length-bounded string newtype.
///
/// Length is measured in characters after trimming. Violations are reported
/// with the supplied error code.
macro_rules! define_text {
    (
        $(#[$meta:meta])*
        $name:ident, $code:expr, $label:literal, min = $min:expr, max = $max:expr
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Smallest accepted length, in characters.
            pub const MIN_LENGTH: usize = $min;
            /// Largest accepted length, in characters.
            pub const MAX_LENGTH: usize = $max;

            /// Trims and validates the raw value.
            ///
            /// # Errors
            ///
            /// Returns a `DomainError` if the trimmed value is shorter than
            /// `MIN_LENGTH` or longer than `MAX_LENGTH`.
            pub fn new(raw: impl Into<String>) -> Result<Self, $crate::error::DomainError> {
                let raw = raw.into();
                let trimmed = raw.trim();
                let length = $crate::common::char_len(trimmed);
                if trimmed.is_empty() {
                    return Err($crate::error::DomainError::new(
                        $code,
                        concat!($label, " cannot be empty"),
                    ));
                }
                if length < Self::MIN_LENGTH {
                    return Err($crate::error::DomainError::new(
                        $code,
                        format!(
                            "{} must be at least {} characters",
                            $label,
                            Self::MIN_LENGTH
                        ),
                    ));
                }
                if length > Self::MAX_LENGTH {
                    return Err($crate::error::DomainError::new(
                        $code,
                        format!("{} cannot exceed {} characters", $label, Self::MAX_LENGTH),
                    ));
                }
                Ok(Self(trimmed.to_string()))
            }

            /// Returns the normalized value.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = $crate::error::DomainError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                Self::new(s)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> String {
                value.0
            }
        }
    };
}

/// Defines a closed enumeration parsed from its wire token.
///
/// Input is trimmed (and passed through `normalize` when given) before it is
/// matched against the tokens; anything else is rejected with `code`.
macro_rules! closed_set {
    (
        $(#[$meta:meta])*
        $name:ident, $code:expr, $label:literal {
            $($(#[$vmeta:meta])* $variant:ident => $token:literal),+ $(,)?
        }
    ) => {
        closed_set! {
            $(#[$meta])*
            $name, $code, $label, normalize = |raw: &str| raw.to_string(), {
                $($(#[$vmeta])* $variant => $token),+
            }
        }
    };
    (
        $(#[$meta:meta])*
        $name:ident, $code:expr, $label:literal, normalize = $normalize:expr, {
            $($(#[$vmeta:meta])* $variant:ident => $token:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Every member of the set, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Parses a wire token.
            ///
            /// # Errors
            ///
            /// Returns a `DomainError` if the token is not a member of the set.
            pub fn new(raw: &str) -> Result<Self, $crate::error::DomainError> {
                let normalized: String = ($normalize)(raw.trim());
                match normalized.as_str() {
                    $($token => Ok(Self::$variant),)+
                    _ => Err($crate::error::DomainError::new(
                        $code,
                        format!(
                            "{} must be one of [{}], got '{}'",
                            $label,
                            [$($token),+].join(", "),
                            normalized
                        ),
                    )),
                }
            }

            /// Returns the wire token.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $token),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::DomainError;

            fn from_str(s: &str) -> Result<Self, $crate::error::DomainError> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = $crate::error::DomainError;

            fn try_from(s: String) -> Result<Self, $crate::error::DomainError> {
                Self::new(&s)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> String {
                value.as_str().to_string()
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorCode;

    closed_set! {
        Signal, ErrorCode::InvalidField, "Signal",
        normalize = |raw: &str| raw.to_ascii_lowercase(), {
            Clear => "clear",
            Error => "error",
        }
    }

    define_text! {
        Label, ErrorCode::InvalidField, "Label", min = 2, max = 5
    }

    #[test]
    fn test_closed_set_allows_error_variant() {
        assert_eq!(Signal::new(" ERROR ").unwrap(), Signal::Error);
        assert_eq!("clear".parse::<Signal>().unwrap(), Signal::Clear);
        assert_eq!(Signal::try_from("Error".to_string()).unwrap(), Signal::Error);
        assert_eq!(Signal::ALL, &[Signal::Clear, Signal::Error]);
    }

    #[test]
    fn test_closed_set_rejects_unknown_token() {
        let err = Signal::new("warn").unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidField);
        assert!(err.message().contains("clear, error"));
    }

    #[test]
    fn test_define_text_bounds() {
        assert_eq!(Label::new(" abc ").unwrap().as_str(), "abc");
        assert!(Label::new("a").is_err());
        assert!(Label::new("abcdef").is_err());
    }
}
