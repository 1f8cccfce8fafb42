//! Log aggregate - A persisted application or audit log entry
//!
//! Entries are immutable except for their resolution: an operator can mark an
//! entry resolved (again, overwriting the earlier resolution) or reopen it.

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::common::trimmed_or_none;
use crate::error::{DomainError, ErrorCode};
use crate::ids::{parse_optional, LogId, UserId};
use crate::value_objects::{
    HttpMethod, HttpStatusCode, JsonObject, LogCategory, LogLevel, LogMessage, LogSource, LogTag,
};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LogProps {
    pub id: Option<String>,
    pub source: String,
    pub level: String,
    pub category: String,
    pub message: String,
    pub context: Option<Value>,
    pub user_id: Option<String>,
    pub request_id: Option<String>,
    pub method: Option<String>,
    pub path: Option<String>,
    pub status_code: Option<i64>,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
    pub fingerprint: Option<String>,
    pub tags: Vec<String>,
    pub occurred_at: Option<DateTime<Utc>>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub resolved_by: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogSnapshot {
    pub id: Option<String>,
    pub source: String,
    pub level: LogLevel,
    pub category: LogCategory,
    pub message: String,
    pub context: Option<Value>,
    pub user_id: Option<String>,
    pub request_id: Option<String>,
    pub method: Option<HttpMethod>,
    pub path: Option<String>,
    pub status_code: Option<u16>,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
    pub fingerprint: Option<String>,
    pub tags: Vec<String>,
    pub occurred_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub resolved_by: Option<String>,
}

/// Who resolved an entry and when. Held as a pair so one cannot exist
/// without the other.
#[derive(Debug, Clone, PartialEq)]
struct Resolution {
    by: UserId,
    at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Log {
    id: Option<LogId>,
    source: LogSource,
    level: LogLevel,
    category: LogCategory,
    message: LogMessage,
    context: Option<JsonObject>,
    user_id: Option<UserId>,
    request_id: Option<String>,
    method: Option<HttpMethod>,
    path: Option<String>,
    status_code: Option<HttpStatusCode>,
    ip: Option<String>,
    user_agent: Option<String>,
    fingerprint: Option<String>,
    tags: Vec<LogTag>,
    occurred_at: DateTime<Utc>,
    resolution: Option<Resolution>,
}

impl Log {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Build a new entry; `occurred_at` defaults to `now`.
    pub fn create(props: LogProps, now: DateTime<Utc>) -> Result<Self, DomainError> {
        let occurred_at = props.occurred_at.unwrap_or(now);
        Self::build(occurred_at, props)
    }

    /// Rebuild a persisted entry. Id and `occurred_at` are required.
    pub fn rehydrate(props: LogProps) -> Result<Self, DomainError> {
        if trimmed_or_none(props.id.clone()).is_none() {
            return Err(DomainError::invalid_field("Persisted log has no id"));
        }
        let occurred_at = props
            .occurred_at
            .ok_or_else(|| DomainError::invalid_field("Persisted log has no occurred_at"))?;
        Self::build(occurred_at, props)
    }

    fn build(occurred_at: DateTime<Utc>, props: LogProps) -> Result<Self, DomainError> {
        let resolution = match (trimmed_or_none(props.resolved_by), props.resolved_at) {
            (Some(by), Some(at)) => Some(Resolution {
                by: UserId::parse(by, ErrorCode::InvalidField)?,
                at,
            }),
            (None, None) => None,
            _ => {
                return Err(DomainError::invalid_field(
                    "resolved_at and resolved_by must be set together",
                ));
            }
        };

        Ok(Self {
            id: parse_optional(trimmed_or_none(props.id), |raw| {
                LogId::parse(raw, ErrorCode::InvalidField)
            })?,
            source: LogSource::new(props.source)?,
            level: LogLevel::new(&props.level)?,
            category: LogCategory::new(&props.category)?,
            message: LogMessage::new(props.message)?,
            context: props.context.map(JsonObject::new).transpose()?,
            user_id: parse_optional(trimmed_or_none(props.user_id), |raw| {
                UserId::parse(raw, ErrorCode::InvalidField)
            })?,
            request_id: trimmed_or_none(props.request_id),
            method: trimmed_or_none(props.method)
                .map(|raw| HttpMethod::new(&raw))
                .transpose()?,
            path: trimmed_or_none(props.path),
            status_code: props.status_code.map(HttpStatusCode::new).transpose()?,
            ip: trimmed_or_none(props.ip),
            user_agent: trimmed_or_none(props.user_agent),
            fingerprint: trimmed_or_none(props.fingerprint),
            tags: props
                .tags
                .into_iter()
                .map(LogTag::new)
                .collect::<Result<Vec<_>, _>>()?,
            occurred_at,
            resolution,
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> Option<&LogId> {
        self.id.as_ref()
    }

    #[inline]
    pub fn source(&self) -> &LogSource {
        &self.source
    }

    #[inline]
    pub fn level(&self) -> LogLevel {
        self.level
    }

    #[inline]
    pub fn category(&self) -> LogCategory {
        self.category
    }

    #[inline]
    pub fn message(&self) -> &LogMessage {
        &self.message
    }

    #[inline]
    pub fn context(&self) -> Option<&JsonObject> {
        self.context.as_ref()
    }

    #[inline]
    pub fn user_id(&self) -> Option<&UserId> {
        self.user_id.as_ref()
    }

    #[inline]
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    #[inline]
    pub fn method(&self) -> Option<HttpMethod> {
        self.method
    }

    #[inline]
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    #[inline]
    pub fn status_code(&self) -> Option<HttpStatusCode> {
        self.status_code
    }

    #[inline]
    pub fn ip(&self) -> Option<&str> {
        self.ip.as_deref()
    }

    #[inline]
    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }

    #[inline]
    pub fn fingerprint(&self) -> Option<&str> {
        self.fingerprint.as_deref()
    }

    #[inline]
    pub fn tags(&self) -> &[LogTag] {
        &self.tags
    }

    #[inline]
    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    pub fn resolved_at(&self) -> Option<DateTime<Utc>> {
        self.resolution.as_ref().map(|resolution| resolution.at)
    }

    pub fn resolved_by(&self) -> Option<&UserId> {
        self.resolution.as_ref().map(|resolution| &resolution.by)
    }

    pub fn is_resolved(&self) -> bool {
        self.resolution.is_some()
    }

    // =========================================================================
    // Mutation Methods
    // =========================================================================

    /// Mark the entry resolved, replacing any earlier resolution.
    pub fn resolve(
        &mut self,
        resolved_by: &str,
        resolved_at: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        let by = UserId::parse(resolved_by, ErrorCode::InvalidField)?;
        self.resolution = Some(Resolution {
            by,
            at: resolved_at,
        });
        Ok(())
    }

    pub fn reopen(&mut self) {
        self.resolution = None;
    }

    // =========================================================================
    // Snapshot
    // =========================================================================

    pub fn to_snapshot(&self) -> LogSnapshot {
        LogSnapshot {
            id: self.id.as_ref().map(ToString::to_string),
            source: self.source.to_string(),
            level: self.level,
            category: self.category,
            message: self.message.to_string(),
            context: self.context.as_ref().map(JsonObject::to_value),
            user_id: self.user_id.as_ref().map(ToString::to_string),
            request_id: self.request_id.clone(),
            method: self.method,
            path: self.path.clone(),
            status_code: self.status_code.map(HttpStatusCode::value),
            ip: self.ip.clone(),
            user_agent: self.user_agent.clone(),
            fingerprint: self.fingerprint.clone(),
            tags: self.tags.iter().map(ToString::to_string).collect(),
            occurred_at: self.occurred_at,
            resolved_at: self.resolved_at(),
            resolved_by: self.resolved_by().map(ToString::to_string),
        }
    }
}

impl Serialize for Log {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_snapshot().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    const USER_ID: &str = "11111111-1111-4111-8111-111111111111";

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, day, 0, 0, 0).unwrap()
    }

    fn props() -> LogProps {
        LogProps {
            id: Some("10".to_string()),
            source: "api".to_string(),
            level: "error".to_string(),
            category: "application".to_string(),
            message: "Unhandled failure".to_string(),
            user_id: Some(USER_ID.to_string()),
            status_code: Some(500),
            ..LogProps::default()
        }
    }

    mod constructor {
        use super::*;

        #[test]
        fn test_create_defaults_occurred_at() {
            let log = Log::create(props(), at(24)).unwrap();
            assert_eq!(log.occurred_at(), at(24));
            assert!(!log.is_resolved());
            assert_eq!(log.status_code().map(HttpStatusCode::value), Some(500));
        }

        #[test]
        fn test_normalizes_optional_text() {
            let log = Log::create(
                LogProps {
                    method: Some(" get ".to_string()),
                    path: Some("  /systems ".to_string()),
                    request_id: Some("   ".to_string()),
                    tags: vec![" t1 ".to_string()],
                    ..props()
                },
                at(24),
            )
            .unwrap();

            assert_eq!(log.method(), Some(HttpMethod::Get));
            assert_eq!(log.path(), Some("/systems"));
            assert_eq!(log.request_id(), None);
            assert_eq!(log.tags()[0].as_str(), "t1");
        }

        #[test]
        fn test_invalid_status_code() {
            let err = Log::create(
                LogProps {
                    status_code: Some(700),
                    ..props()
                },
                at(24),
            )
            .unwrap_err();
            assert_eq!(err.code(), ErrorCode::InvalidField);
        }

        #[test]
        fn test_context_must_be_object() {
            let err = Log::create(
                LogProps {
                    context: Some(json!([1, 2])),
                    ..props()
                },
                at(24),
            )
            .unwrap_err();
            assert_eq!(err.code(), ErrorCode::InvalidField);
        }

        #[test]
        fn test_half_resolution_rejected() {
            let err = Log::rehydrate(LogProps {
                occurred_at: Some(at(24)),
                resolved_at: Some(at(25)),
                resolved_by: None,
                ..props()
            })
            .unwrap_err();
            assert_eq!(err.code(), ErrorCode::InvalidField);
        }

        #[test]
        fn test_rehydrate_requires_id() {
            let err = Log::rehydrate(LogProps {
                id: None,
                occurred_at: Some(at(24)),
                ..props()
            })
            .unwrap_err();
            assert_eq!(err.code(), ErrorCode::InvalidField);
        }
    }

    mod mutation {
        use super::*;

        #[test]
        fn test_resolve_and_reopen() {
            let mut log = Log::create(props(), at(24)).unwrap();

            log.resolve(USER_ID, at(25)).unwrap();
            assert_eq!(log.resolved_by().map(UserId::as_str), Some(USER_ID));
            assert_eq!(log.resolved_at(), Some(at(25)));

            log.resolve("operator-2", at(26)).unwrap();
            assert_eq!(log.resolved_by().map(UserId::as_str), Some("operator-2"));
            assert_eq!(log.resolved_at(), Some(at(26)));

            log.reopen();
            assert_eq!(log.resolved_at(), None);
            assert_eq!(log.resolved_by(), None);
        }

        #[test]
        fn test_failed_resolve_leaves_state_unchanged() {
            let mut log = Log::create(props(), at(24)).unwrap();
            let before = log.to_snapshot();

            assert!(log.resolve("  ", at(25)).is_err());
            assert_eq!(log.to_snapshot(), before);
        }
    }

    mod serde {
        use super::*;

        #[test]
        fn test_snapshot_keys() {
            let log = Log::create(
                LogProps {
                    context: Some(json!({ "zone": 1 })),
                    ..props()
                },
                at(24),
            )
            .unwrap();
            let json = serde_json::to_value(&log).unwrap();

            assert_eq!(json["statusCode"], 500);
            assert_eq!(json["context"], json!({ "zone": 1 }));
            assert!(json["resolvedAt"].is_null());
        }
    }
}
