//! Audit and application log value objects

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, ErrorCode};

define_text! {
    /// Component that emitted the log entry
    LogSource, ErrorCode::InvalidField, "Log source", min = 1, max = 100
}

define_text! {
    LogMessage, ErrorCode::InvalidField, "Log message", min = 1, max = 5000
}

define_text! {
    /// A single free-form label attached to a log entry
    LogTag, ErrorCode::InvalidField, "Log tag", min = 1, max = 100
}

closed_set! {
    LogLevel, ErrorCode::InvalidField, "Log level" {
        Debug => "debug",
        Info => "info",
        Warn => "warn",
        Error => "error",
        Fatal => "fatal",
    }
}

closed_set! {
    LogCategory, ErrorCode::InvalidField, "Log category" {
        Application => "application",
        Audit => "audit",
        Security => "security",
        Infrastructure => "infrastructure",
    }
}

closed_set! {
    /// HTTP request method, accepted in any case
    HttpMethod, ErrorCode::InvalidField, "HTTP method",
    normalize = |raw: &str| raw.to_ascii_uppercase(), {
        Get => "GET",
        Post => "POST",
        Put => "PUT",
        Patch => "PATCH",
        Delete => "DELETE",
        Head => "HEAD",
        Options => "OPTIONS",
    }
}

/// HTTP response status in the 100-599 range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u16")]
pub struct HttpStatusCode(u16);

impl HttpStatusCode {
    pub const MIN: u16 = 100;
    pub const MAX: u16 = 599;

    pub fn new(raw: i64) -> Result<Self, DomainError> {
        match u16::try_from(raw) {
            Ok(code) if (Self::MIN..=Self::MAX).contains(&code) => Ok(Self(code)),
            _ => Err(DomainError::invalid_field(format!(
                "status code must be between {} and {}, got {raw}",
                Self::MIN,
                Self::MAX
            ))),
        }
    }

    pub fn value(self) -> u16 {
        self.0
    }

    pub fn is_error(self) -> bool {
        self.0 >= 400
    }
}

impl fmt::Display for HttpStatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for HttpStatusCode {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<HttpStatusCode> for u16 {
    fn from(value: HttpStatusCode) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_is_uppercased() {
        assert_eq!(HttpMethod::new("post").unwrap(), HttpMethod::Post);
        assert_eq!(HttpMethod::new(" Get ").unwrap().as_str(), "GET");
        assert!(HttpMethod::new("FETCH").is_err());
    }

    #[test]
    fn test_status_code_range() {
        assert_eq!(HttpStatusCode::new(100).unwrap().value(), 100);
        assert_eq!(HttpStatusCode::new(599).unwrap().value(), 599);
        assert!(HttpStatusCode::new(503).unwrap().is_error());

        for raw in [99, 600, -200, 70_000] {
            let err = HttpStatusCode::new(raw).unwrap_err();
            assert_eq!(err.code(), ErrorCode::InvalidField);
        }
    }

    #[test]
    fn test_message_bounds() {
        assert!(LogMessage::new("   ").is_err());
        assert!(LogMessage::new("x".repeat(5000)).is_ok());
        assert!(LogMessage::new("x".repeat(5001)).is_err());
    }

    #[test]
    fn test_source_trimmed() {
        assert_eq!(LogSource::new("  api-gateway ").unwrap().as_str(), "api-gateway");
        assert!(LogSource::new("s".repeat(101)).is_err());
    }

    #[test]
    fn test_level_and_category_tokens() {
        assert_eq!(LogLevel::new("fatal").unwrap(), LogLevel::Fatal);
        assert!(LogLevel::new("trace").is_err());
        assert_eq!(LogCategory::new("audit").unwrap().to_string(), "audit");
    }
}
