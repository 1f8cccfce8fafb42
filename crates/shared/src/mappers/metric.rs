//! Metric mappers

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use starmap_domain::common::{format_datetime, parse_field_datetime};
use starmap_domain::{DomainError, Metric, MetricProps};

use super::{decode_payload, traced};

const FAMILY: &str = "metric";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricApi {
    pub id: String,
    pub metric_name: String,
    pub metric_type: String,
    pub source: String,
    pub duration_ms: f64,
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub tags: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub context: Option<Value>,
    pub occurred_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricDto {
    pub id: Option<String>,
    pub metric_name: String,
    pub metric_type: String,
    pub source: String,
    pub duration_ms: f64,
    pub success: bool,
    pub user_id: Option<String>,
    pub request_id: Option<String>,
    pub tags: BTreeMap<String, String>,
    pub context: Option<Value>,
    pub occurred_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricView {
    pub id: Option<String>,
    pub metric_name: String,
    pub metric_type: String,
    pub source: String,
    pub duration_ms: f64,
    pub success: bool,
    pub user_id: Option<String>,
    pub request_id: Option<String>,
    pub tags: BTreeMap<String, String>,
    pub context: Option<Value>,
    pub occurred_at: String,
}

pub fn decode_metric_api(payload: &Value) -> Result<MetricApi, DomainError> {
    decode_payload(FAMILY, payload)
}

pub fn map_metric_api_to_domain(api: MetricApi) -> Result<Metric, DomainError> {
    traced(FAMILY, metric_from_api(api))
}

fn metric_from_api(api: MetricApi) -> Result<Metric, DomainError> {
    let props = MetricProps {
        occurred_at: Some(parse_field_datetime("occurred_at", &api.occurred_at)?),
        id: Some(api.id),
        metric_name: api.metric_name,
        metric_type: api.metric_type,
        source: api.source,
        duration_ms: api.duration_ms,
        success: api.success,
        user_id: api.user_id,
        request_id: api.request_id,
        tags: api.tags.unwrap_or_default(),
        context: api.context,
    };
    Metric::rehydrate(props)
}

pub fn map_metric_domain_to_dto(metric: &Metric) -> MetricDto {
    MetricDto {
        id: metric.id().map(ToString::to_string),
        metric_name: metric.metric_name().to_string(),
        metric_type: metric.metric_type().to_string(),
        source: metric.source().to_string(),
        duration_ms: metric.duration().millis(),
        success: metric.success(),
        user_id: metric.user_id().map(ToString::to_string),
        request_id: metric.request_id().map(str::to_string),
        tags: metric.tags().as_map().clone(),
        context: metric.context().map(|context| context.to_value()),
        occurred_at: format_datetime(metric.occurred_at()),
    }
}

pub fn map_metric_domain_to_view(metric: &Metric) -> MetricView {
    MetricView {
        id: metric.id().map(ToString::to_string),
        metric_name: metric.metric_name().to_string(),
        metric_type: metric.metric_type().to_string(),
        source: metric.source().to_string(),
        duration_ms: metric.duration().millis(),
        success: metric.success(),
        user_id: metric.user_id().map(ToString::to_string),
        request_id: metric.request_id().map(str::to_string),
        tags: metric.tags().as_map().clone(),
        context: metric.context().map(|context| context.to_value()),
        occurred_at: format_datetime(metric.occurred_at()),
    }
}
