//! Authentication boundary contracts
//!
//! Login and signup requests are validated with `validator` before they leave
//! the client. The authenticated-user envelope returned by the server is
//! parsed strictly: any field beyond `{user: {id, email, role, verified}}`
//! is a contract violation, so a leaked secret such as a password hash can
//! never be accepted silently.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use starmap_domain::value_objects::{Email, Role};
use starmap_domain::{DomainError, ErrorCode, User, UserProps};
use tracing::debug;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use crate::mappers::{decode_payload, traced};

const FAMILY: &str = "auth";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "must be at least 8 characters"))]
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "must be at least 8 characters"))]
    pub password: String,
    #[validate(length(min = 3, max = 25, message = "must be 3 to 25 characters"))]
    pub username: String,
}

impl LoginRequest {
    /// Validates the request, reporting failures as `PRESENTATION.INVALID_FIELD`.
    pub fn check(&self) -> Result<(), DomainError> {
        self.validate().map_err(invalid_fields)
    }
}

impl SignupRequest {
    /// Validates the request, reporting failures as `PRESENTATION.INVALID_FIELD`.
    pub fn check(&self) -> Result<(), DomainError> {
        self.validate().map_err(invalid_fields)
    }
}

fn invalid_fields(errors: ValidationErrors) -> DomainError {
    let mut fields: Vec<String> = errors.errors().keys().map(|key| key.to_string()).collect();
    fields.sort();
    let err = DomainError::invalid_field(format!("invalid fields: {}", fields.join(", ")));
    debug!(family = FAMILY, code = %err.code(), fields = ?fields, "Rejected auth request");
    err
}

/// The user as the server exposes it after login or signup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthUser {
    pub id: Uuid,
    pub email: String,
    pub role: Role,
    pub verified: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthUserEnvelope {
    pub user: AuthUser,
}

/// Parses an authenticated-user envelope.
///
/// # Errors
///
/// - `PRESENTATION.INVALID_PAYLOAD` for extra or missing fields, a malformed
///   uuid, or a role outside `{User, Admin}`
/// - `PRESENTATION.INVALID_FIELD` for a malformed email
pub fn parse_auth_user_envelope(payload: &Value) -> Result<AuthUserEnvelope, DomainError> {
    let envelope: AuthUserEnvelope = decode_payload(FAMILY, payload)?;
    traced(
        FAMILY,
        Email::parse(&envelope.user.email, ErrorCode::InvalidField).map(|_| envelope),
    )
}

impl AuthUser {
    /// Converts the accepted user into a `User` aggregate.
    pub fn into_user(self) -> Result<User, DomainError> {
        User::create(UserProps {
            id: Some(self.id.to_string()),
            email: self.email,
            role: Some(self.role.to_string()),
            verified: Some(self.verified),
            ..UserProps::default()
        })
    }
}
