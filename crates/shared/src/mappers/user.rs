//! User mappers
//!
//! The API and persistence shapes of a user coincide, so [`UserDto`] is the
//! same struct as [`UserApi`]. The View drops the password hash and every
//! verification field.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use starmap_domain::common::{format_datetime, parse_optional_field_datetime};
use starmap_domain::{DomainError, User, UserProps};

use super::{decode_payload, traced};

const FAMILY: &str = "user";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserApi {
    pub id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Stored password hash, never a plain password.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub role: String,
    pub verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_code_expires_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_archived: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived_at: Option<String>,
}

pub type UserDto = UserApi;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub role: String,
    pub verified: bool,
    pub is_deleted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<String>,
    pub is_archived: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived_at: Option<String>,
}

pub fn decode_user_api(payload: &Value) -> Result<UserApi, DomainError> {
    decode_payload(FAMILY, payload)
}

/// Builds a user from an inbound payload (DTO-shaped records are accepted).
pub fn map_user_api_to_domain(api: UserApi) -> Result<User, DomainError> {
    traced(FAMILY, user_props(api).and_then(User::create))
}

/// Rebuilds a persisted user.
pub fn map_user_dto_to_domain(dto: UserDto) -> Result<User, DomainError> {
    traced(FAMILY, user_props(dto).and_then(User::rehydrate))
}

fn user_props(api: UserApi) -> Result<UserProps, DomainError> {
    Ok(UserProps {
        verification_code_expires_at: parse_optional_field_datetime(
            "verification_code_expires_at",
            api.verification_code_expires_at.as_deref(),
        )?,
        deleted_at: parse_optional_field_datetime("deleted_at", api.deleted_at.as_deref())?,
        archived_at: parse_optional_field_datetime("archived_at", api.archived_at.as_deref())?,
        id: Some(api.id),
        email: api.email,
        username: api.username,
        password: api.password,
        role: Some(api.role),
        verified: Some(api.verified),
        verification_code: api.verification_code,
        is_deleted: api.is_deleted,
        is_archived: api.is_archived,
    })
}

pub fn map_user_domain_to_dto(user: &User) -> UserDto {
    UserDto {
        id: user.id().to_string(),
        email: user.email().to_string(),
        username: user.username().map(ToString::to_string),
        password: user.password().map(|hash| hash.as_str().to_string()),
        role: user.role().to_string(),
        verified: user.is_verified(),
        verification_code: user.verification_code().map(|code| code.as_str().to_string()),
        verification_code_expires_at: user.verification_code_expires_at().map(format_datetime),
        is_deleted: Some(user.is_deleted()),
        deleted_at: user.deleted_at().map(format_datetime),
        is_archived: Some(user.is_archived()),
        archived_at: user.archived_at().map(format_datetime),
    }
}

pub fn map_user_domain_to_view(user: &User) -> UserView {
    UserView {
        id: user.id().to_string(),
        email: user.email().to_string(),
        username: user.username().map(ToString::to_string),
        role: user.role().to_string(),
        verified: user.is_verified(),
        is_deleted: user.is_deleted(),
        deleted_at: user.deleted_at().map(format_datetime),
        is_archived: user.is_archived(),
        archived_at: user.archived_at().map(format_datetime),
    }
}
