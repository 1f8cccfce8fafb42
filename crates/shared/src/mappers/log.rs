//! Log mappers

use serde::{Deserialize, Serialize};
use serde_json::Value;
use starmap_domain::common::{format_datetime, parse_field_datetime, parse_optional_field_datetime};
use starmap_domain::{DomainError, Log, LogProps};

use super::{decode_payload, traced};

const FAMILY: &str = "log";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogApi {
    pub id: String,
    pub source: String,
    pub level: String,
    pub category: String,
    pub message: String,
    #[serde(default)]
    pub context: Option<Value>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub status_code: Option<i64>,
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
    #[serde(default)]
    pub fingerprint: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    pub occurred_at: String,
    #[serde(default)]
    pub resolved_at: Option<String>,
    #[serde(default)]
    pub resolved_by: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogDto {
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
    pub status_code: Option<u16>,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
    pub fingerprint: Option<String>,
    pub tags: Vec<String>,
    pub occurred_at: String,
    pub resolved_at: Option<String>,
    pub resolved_by: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogView {
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
    pub status_code: Option<u16>,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
    pub fingerprint: Option<String>,
    pub tags: Vec<String>,
    pub occurred_at: String,
    pub resolved_at: Option<String>,
    pub resolved_by: Option<String>,
}

pub fn decode_log_api(payload: &Value) -> Result<LogApi, DomainError> {
    decode_payload(FAMILY, payload)
}

pub fn map_log_api_to_domain(api: LogApi) -> Result<Log, DomainError> {
    traced(FAMILY, log_from_api(api))
}

fn log_from_api(api: LogApi) -> Result<Log, DomainError> {
    let props = LogProps {
        occurred_at: Some(parse_field_datetime("occurred_at", &api.occurred_at)?),
        resolved_at: parse_optional_field_datetime("resolved_at", api.resolved_at.as_deref())?,
        id: Some(api.id),
        source: api.source,
        level: api.level,
        category: api.category,
        message: api.message,
        context: api.context,
        user_id: api.user_id,
        request_id: api.request_id,
        method: api.method,
        path: api.path,
        status_code: api.status_code,
        ip: api.ip,
        user_agent: api.user_agent,
        fingerprint: api.fingerprint,
        tags: api.tags.unwrap_or_default(),
        resolved_by: api.resolved_by,
    };
    Log::rehydrate(props)
}

pub fn map_log_domain_to_dto(log: &Log) -> LogDto {
    LogDto {
        id: log.id().map(ToString::to_string),
        source: log.source().to_string(),
        level: log.level().to_string(),
        category: log.category().to_string(),
        message: log.message().to_string(),
        context: log.context().map(|context| context.to_value()),
        user_id: log.user_id().map(ToString::to_string),
        request_id: log.request_id().map(str::to_string),
        method: log.method().map(|method| method.to_string()),
        path: log.path().map(str::to_string),
        status_code: log.status_code().map(|code| code.value()),
        ip: log.ip().map(str::to_string),
        user_agent: log.user_agent().map(str::to_string),
        fingerprint: log.fingerprint().map(str::to_string),
        tags: log.tags().iter().map(ToString::to_string).collect(),
        occurred_at: format_datetime(log.occurred_at()),
        resolved_at: log.resolved_at().map(format_datetime),
        resolved_by: log.resolved_by().map(ToString::to_string),
    }
}

pub fn map_log_domain_to_view(log: &Log) -> LogView {
    let dto = map_log_domain_to_dto(log);
    LogView {
        id: dto.id,
        source: dto.source,
        level: dto.level,
        category: dto.category,
        message: dto.message,
        context: dto.context,
        user_id: dto.user_id,
        request_id: dto.request_id,
        method: dto.method,
        path: dto.path,
        status_code: dto.status_code,
        ip: dto.ip,
        user_agent: dto.user_agent,
        fingerprint: dto.fingerprint,
        tags: dto.tags,
        occurred_at: dto.occurred_at,
        resolved_at: dto.resolved_at,
        resolved_by: dto.resolved_by,
    }
}
