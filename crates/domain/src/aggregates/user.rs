//! User aggregate - An account with its verification and soft-delete lifecycle
//!
//! # Lifecycle
//!
//! - `soft_delete` flags the account deleted; `restore` reverses it
//! - `archive` is terminal: an archived account can no longer be restored
//! - every flag is paired with the timestamp it was set at
//!
//! The password hash and the pending verification code never leave the
//! aggregate through its snapshot.

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

use crate::common::trimmed_or_none;
use crate::error::{DomainError, ErrorCode};
use crate::ids::UserId;
use crate::value_objects::{Email, PasswordHash, Role, Username, VerificationCode};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserProps {
    pub id: Option<String>,
    pub email: String,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Defaults to `User`.
    pub role: Option<String>,
    pub verified: Option<bool>,
    pub verification_code: Option<String>,
    pub verification_code_expires_at: Option<DateTime<Utc>>,
    pub is_deleted: Option<bool>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub is_archived: Option<bool>,
    pub archived_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSnapshot {
    pub id: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub role: Role,
    pub verified: bool,
    pub is_deleted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
    pub is_archived: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq)]
struct PendingVerification {
    code: VerificationCode,
    expires_at: DateTime<Utc>,
}

/// A platform user.
///
/// # Invariants
///
/// - `deleted_at` is present exactly when the user is deleted
/// - `archived_at` is present exactly when the user is archived
/// - a verification code always carries an expiry
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    id: UserId,
    email: Email,
    username: Option<Username>,
    password: Option<PasswordHash>,
    role: Role,
    verified: bool,
    pending_verification: Option<PendingVerification>,
    deleted_at: Option<DateTime<Utc>>,
    archived_at: Option<DateTime<Utc>>,
}

impl User {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Build a new user, generating an id when absent.
    pub fn create(props: UserProps) -> Result<Self, DomainError> {
        let id = match props.id.clone() {
            Some(raw) => UserId::parse(raw, ErrorCode::InvalidUserId)?,
            None => UserId::new(),
        };
        Self::build(id, props)
    }

    /// Rebuild a persisted user. The id is required and every lifecycle flag
    /// must agree with its timestamp.
    pub fn rehydrate(props: UserProps) -> Result<Self, DomainError> {
        let raw_id = props.id.clone().ok_or_else(|| {
            DomainError::new(ErrorCode::InvalidUserId, "Persisted user has no id")
        })?;
        let id = UserId::parse(raw_id, ErrorCode::InvalidUserId)?;
        Self::build(id, props)
    }

    fn build(id: UserId, props: UserProps) -> Result<Self, DomainError> {
        let deleted_at = paired_flag("deleted", props.is_deleted, props.deleted_at)?;
        let archived_at = paired_flag("archived", props.is_archived, props.archived_at)?;
        let pending_verification = match (
            trimmed_or_none(props.verification_code),
            props.verification_code_expires_at,
        ) {
            (Some(code), Some(expires_at)) => Some(PendingVerification {
                code: VerificationCode::new(&code)?,
                expires_at,
            }),
            (None, None) => None,
            _ => {
                return Err(DomainError::new(
                    ErrorCode::InvalidUserVerificationCode,
                    "Verification code and its expiry must be set together",
                ));
            }
        };

        Ok(Self {
            id,
            email: Email::new(&props.email)?,
            username: trimmed_or_none(props.username)
                .map(|raw| Username::new(&raw))
                .transpose()?,
            password: props.password.map(PasswordHash::new).transpose()?,
            role: match props.role.as_deref() {
                Some(raw) => Role::new(raw)?,
                None => Role::default(),
            },
            verified: props.verified.unwrap_or(false),
            pending_verification,
            deleted_at,
            archived_at,
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> &UserId {
        &self.id
    }

    #[inline]
    pub fn email(&self) -> &Email {
        &self.email
    }

    #[inline]
    pub fn username(&self) -> Option<&Username> {
        self.username.as_ref()
    }

    #[inline]
    pub fn password(&self) -> Option<&PasswordHash> {
        self.password.as_ref()
    }

    #[inline]
    pub fn role(&self) -> Role {
        self.role
    }

    #[inline]
    pub fn is_verified(&self) -> bool {
        self.verified
    }

    pub fn verification_code(&self) -> Option<&VerificationCode> {
        self.pending_verification.as_ref().map(|pending| &pending.code)
    }

    pub fn verification_code_expires_at(&self) -> Option<DateTime<Utc>> {
        self.pending_verification
            .as_ref()
            .map(|pending| pending.expires_at)
    }

    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    #[inline]
    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    #[inline]
    pub fn is_archived(&self) -> bool {
        self.archived_at.is_some()
    }

    #[inline]
    pub fn archived_at(&self) -> Option<DateTime<Utc>> {
        self.archived_at
    }

    // =========================================================================
    // Profile Mutations
    // =========================================================================

    /// Change the email address. A different address must be verified again,
    /// so any code issued for the old address is dropped.
    pub fn change_email(&mut self, email: &str) -> Result<(), DomainError> {
        let email = Email::new(email)?;
        if email != self.email {
            self.verified = false;
            self.pending_verification = None;
        }
        self.email = email;
        Ok(())
    }

    pub fn change_role(&mut self, role: &str) -> Result<(), DomainError> {
        self.role = Role::new(role)?;
        Ok(())
    }

    pub fn change_username(&mut self, username: &str) -> Result<(), DomainError> {
        self.username = Some(Username::new(username)?);
        Ok(())
    }

    /// Replace the stored password hash. Hashing happens outside the domain.
    pub fn change_password(&mut self, password_hash: &str) -> Result<(), DomainError> {
        self.password = Some(PasswordHash::new(password_hash)?);
        Ok(())
    }

    // =========================================================================
    // Verification
    // =========================================================================

    /// Store a new verification code, replacing any pending one.
    pub fn issue_verification_code(
        &mut self,
        code: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        self.pending_verification = Some(PendingVerification {
            code: VerificationCode::new(code)?,
            expires_at,
        });
        Ok(())
    }

    /// Verify the email with a submitted code.
    ///
    /// Fails with `USERS.VERIFICATION_FAILED` when no code is pending, the
    /// code differs, or it expired before `now`.
    pub fn verify_email(&mut self, code: &str, now: DateTime<Utc>) -> Result<(), DomainError> {
        let pending = self.pending_verification.as_ref().ok_or_else(|| {
            DomainError::new(
                ErrorCode::UserVerificationFailed,
                "No verification code is pending",
            )
        })?;
        if !pending.code.matches(code) {
            return Err(DomainError::new(
                ErrorCode::UserVerificationFailed,
                "Verification code does not match",
            ));
        }
        if now > pending.expires_at {
            return Err(DomainError::new(
                ErrorCode::UserVerificationFailed,
                "Verification code has expired",
            ));
        }
        self.mark_verified();
        Ok(())
    }

    /// Mark the email verified without a code and drop any pending code.
    pub fn mark_verified(&mut self) {
        self.verified = true;
        self.pending_verification = None;
    }

    // =========================================================================
    // Soft Delete & Archive
    // =========================================================================

    pub fn soft_delete(&mut self, now: DateTime<Utc>) -> Result<(), DomainError> {
        if self.is_deleted() {
            return Err(DomainError::new(
                ErrorCode::UserDeleteFailed,
                "User is already deleted",
            ));
        }
        self.deleted_at = Some(now);
        Ok(())
    }

    /// Undo a soft delete. Archived users cannot be restored.
    pub fn restore(&mut self) -> Result<(), DomainError> {
        if self.is_archived() {
            return Err(DomainError::new(
                ErrorCode::UserRestoreFailed,
                "Archived users cannot be restored",
            ));
        }
        if !self.is_deleted() {
            return Err(DomainError::new(
                ErrorCode::UserRestoreFailed,
                "User is not deleted",
            ));
        }
        self.deleted_at = None;
        Ok(())
    }

    pub fn archive(&mut self, now: DateTime<Utc>) -> Result<(), DomainError> {
        if self.is_archived() {
            return Err(DomainError::new(
                ErrorCode::UserArchiveFailed,
                "User is already archived",
            ));
        }
        self.archived_at = Some(now);
        Ok(())
    }

    // =========================================================================
    // Snapshot
    // =========================================================================

    pub fn to_snapshot(&self) -> UserSnapshot {
        UserSnapshot {
            id: self.id.to_string(),
            email: self.email.to_string(),
            username: self.username.as_ref().map(ToString::to_string),
            role: self.role,
            verified: self.verified,
            is_deleted: self.is_deleted(),
            deleted_at: self.deleted_at,
            is_archived: self.is_archived(),
            archived_at: self.archived_at,
        }
    }
}

/// Checks that a lifecycle flag agrees with its timestamp. An absent flag
/// counts as false.
fn paired_flag(
    label: &str,
    flag: Option<bool>,
    at: Option<DateTime<Utc>>,
) -> Result<Option<DateTime<Utc>>, DomainError> {
    match (flag.unwrap_or(false), at) {
        (true, Some(at)) => Ok(Some(at)),
        (false, None) => Ok(None),
        (true, None) => Err(DomainError::new(
            ErrorCode::InvalidUserLifecycle,
            format!("User is {label} but has no {label}_at timestamp"),
        )),
        (false, Some(_)) => Err(DomainError::new(
            ErrorCode::InvalidUserLifecycle,
            format!("User has a {label}_at timestamp but is not {label}"),
        )),
    }
}

impl Serialize for User {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_snapshot().serialize(serializer)
    }
}
