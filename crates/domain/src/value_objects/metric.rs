//! Performance metric value objects

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, ErrorCode};

define_text! {
    MetricName, ErrorCode::InvalidField, "Metric name", min = 1, max = 200
}

define_text! {
    /// Component that recorded the measurement
    MetricSource, ErrorCode::InvalidField, "Metric source", min = 1, max = 200
}

closed_set! {
    MetricType, ErrorCode::InvalidField, "Metric type" {
        Http => "http",
        UseCase => "use_case",
        Db => "db",
        Cache => "cache",
        External => "external",
    }
}

/// Elapsed wall time in milliseconds (finite, non-negative).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct DurationMs(f64);

impl DurationMs {
    pub fn new(millis: f64) -> Result<Self, DomainError> {
        if !millis.is_finite() || millis < 0.0 {
            return Err(DomainError::invalid_field(format!(
                "duration must be a non-negative finite number of milliseconds, got {millis}"
            )));
        }
        Ok(Self(millis))
    }

    pub fn millis(self) -> f64 {
        self.0
    }
}

impl fmt::Display for DurationMs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

impl TryFrom<f64> for DurationMs {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DurationMs> for f64 {
    fn from(value: DurationMs) -> Self {
        value.0
    }
}

/// String-to-string labels. Keys are trimmed, must not be blank and must stay
/// distinct after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, String>", into = "BTreeMap<String, String>")]
pub struct MetricTags(BTreeMap<String, String>);

impl MetricTags {
    pub fn new(raw: BTreeMap<String, String>) -> Result<Self, DomainError> {
        let mut tags = BTreeMap::new();
        for (key, value) in raw {
            let key = key.trim();
            if key.is_empty() {
                return Err(DomainError::invalid_field("metric tag keys cannot be blank"));
            }
            if tags.insert(key.to_string(), value).is_some() {
                return Err(DomainError::invalid_field(format!(
                    "metric tag key '{key}' appears more than once after trimming"
                )));
            }
        }
        Ok(Self(tags))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.0
    }
}

impl TryFrom<BTreeMap<String, String>> for MetricTags {
    type Error = DomainError;

    fn try_from(value: BTreeMap<String, String>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MetricTags> for BTreeMap<String, String> {
    fn from(value: MetricTags) -> Self {
        value.0
    }
}
