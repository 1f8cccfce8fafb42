//! Metric aggregate - A single timing measurement. Immutable once created.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::common::trimmed_or_none;
use crate::error::{DomainError, ErrorCode};
use crate::ids::{parse_optional, MetricId, UserId};
use crate::value_objects::{
    DurationMs, JsonObject, MetricName, MetricSource, MetricTags, MetricType,
};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MetricProps {
    pub id: Option<String>,
    pub metric_name: String,
    pub metric_type: String,
    pub source: String,
    pub duration_ms: f64,
    /// Defaults to `true`.
    pub success: Option<bool>,
    pub user_id: Option<String>,
    pub request_id: Option<String>,
    pub tags: BTreeMap<String, String>,
    pub context: Option<Value>,
    pub occurred_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricSnapshot {
    pub id: Option<String>,
    pub metric_name: String,
    pub metric_type: MetricType,
    pub source: String,
    pub duration_ms: f64,
    pub success: bool,
    pub user_id: Option<String>,
    pub request_id: Option<String>,
    pub tags: BTreeMap<String, String>,
    pub context: Option<Value>,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    id: Option<MetricId>,
    metric_name: MetricName,
    metric_type: MetricType,
    source: MetricSource,
    duration: DurationMs,
    success: bool,
    user_id: Option<UserId>,
    request_id: Option<String>,
    tags: MetricTags,
    context: Option<JsonObject>,
    occurred_at: DateTime<Utc>,
}

impl Metric {
    /// Build a new metric; `occurred_at` defaults to `now` and `success` to true.
    pub fn create(props: MetricProps, now: DateTime<Utc>) -> Result<Self, DomainError> {
        let occurred_at = props.occurred_at.unwrap_or(now);
        Self::build(occurred_at, props)
    }

    /// Rebuild a persisted metric. Id and `occurred_at` are required.
    pub fn rehydrate(props: MetricProps) -> Result<Self, DomainError> {
        if trimmed_or_none(props.id.clone()).is_none() {
            return Err(DomainError::invalid_field("Persisted metric has no id"));
        }
        let occurred_at = props
            .occurred_at
            .ok_or_else(|| DomainError::invalid_field("Persisted metric has no occurred_at"))?;
        Self::build(occurred_at, props)
    }

    fn build(occurred_at: DateTime<Utc>, props: MetricProps) -> Result<Self, DomainError> {
        Ok(Self {
            id: parse_optional(trimmed_or_none(props.id), |raw| {
                MetricId::parse(raw, ErrorCode::InvalidField)
            })?,
            metric_name: MetricName::new(props.metric_name)?,
            metric_type: MetricType::new(&props.metric_type)?,
            source: MetricSource::new(props.source)?,
            duration: DurationMs::new(props.duration_ms)?,
            success: props.success.unwrap_or(true),
            user_id: parse_optional(trimmed_or_none(props.user_id), |raw| {
                UserId::parse(raw, ErrorCode::InvalidField)
            })?,
            request_id: trimmed_or_none(props.request_id),
            tags: MetricTags::new(props.tags)?,
            context: props.context.map(JsonObject::new).transpose()?,
            occurred_at,
        })
    }

    #[inline]
    pub fn id(&self) -> Option<&MetricId> {
        self.id.as_ref()
    }

    #[inline]
    pub fn metric_name(&self) -> &MetricName {
        &self.metric_name
    }

    #[inline]
    pub fn metric_type(&self) -> MetricType {
        self.metric_type
    }

    #[inline]
    pub fn source(&self) -> &MetricSource {
        &self.source
    }

    #[inline]
    pub fn duration(&self) -> DurationMs {
        self.duration
    }

    #[inline]
    pub fn success(&self) -> bool {
        self.success
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
    pub fn tags(&self) -> &MetricTags {
        &self.tags
    }

    #[inline]
    pub fn context(&self) -> Option<&JsonObject> {
        self.context.as_ref()
    }

    #[inline]
    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    pub fn to_snapshot(&self) -> MetricSnapshot {
        MetricSnapshot {
            id: self.id.as_ref().map(ToString::to_string),
            metric_name: self.metric_name.to_string(),
            metric_type: self.metric_type,
            source: self.source.to_string(),
            duration_ms: self.duration.millis(),
            success: self.success,
            user_id: self.user_id.as_ref().map(ToString::to_string),
            request_id: self.request_id.clone(),
            tags: self.tags.as_map().clone(),
            context: self.context.as_ref().map(JsonObject::to_value),
            occurred_at: self.occurred_at,
        }
    }
}

impl Serialize for Metric {
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

    fn props() -> MetricProps {
        MetricProps {
            id: Some("1".to_string()),
            metric_name: "query.systems".to_string(),
            metric_type: "use_case".to_string(),
            source: "systems.query".to_string(),
            duration_ms: 25.0,
            success: Some(true),
            user_id: Some(USER_ID.to_string()),
            request_id: Some("req-1".to_string()),
            tags: BTreeMap::from([("module".to_string(), "systems".to_string())]),
            context: Some(json!({ "page": 1 })),
            occurred_at: Some(at(25)),
        }
    }

    #[test]
    fn test_create_snapshot() {
        let metric = Metric::create(props(), at(1)).unwrap();
        assert_eq!(
            metric.to_snapshot(),
            MetricSnapshot {
                id: Some("1".to_string()),
                metric_name: "query.systems".to_string(),
                metric_type: MetricType::UseCase,
                source: "systems.query".to_string(),
                duration_ms: 25.0,
                success: true,
                user_id: Some(USER_ID.to_string()),
                request_id: Some("req-1".to_string()),
                tags: BTreeMap::from([("module".to_string(), "systems".to_string())]),
                context: Some(json!({ "page": 1 })),
                occurred_at: at(25),
            }
        );
    }

    #[test]
    fn test_defaults() {
        let metric = Metric::create(
            MetricProps {
                id: None,
                success: None,
                occurred_at: None,
                ..props()
            },
            at(3),
        )
        .unwrap();
        assert!(metric.success());
        assert_eq!(metric.occurred_at(), at(3));
        assert!(metric.id().is_none());
    }

    #[test]
    fn test_negative_duration_rejected() {
        let err = Metric::create(
            MetricProps {
                duration_ms: -1.0,
                ..props()
            },
            at(1),
        )
        .unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidField);
    }

    #[test]
    fn test_rehydrate_requires_occurred_at() {
        let err = Metric::rehydrate(MetricProps {
            occurred_at: None,
            ..props()
        })
        .unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidField);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(Metric::create(props(), at(1)).unwrap()).unwrap();
        assert_eq!(json["metricName"], "query.systems");
        assert_eq!(json["durationMs"], 25.0);
        assert_eq!(json["tags"]["module"], "systems");
    }
}
