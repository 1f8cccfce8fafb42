//! Donation aggregate - A one-time or monthly donation and its payment lifecycle
//!
//! # State machine
//!
//! ```text
//! pending --activate_subscription--> active   (monthly only)
//! pending --complete_one_time------> completed (one_time only)
//! active  --renew_period-----------> active
//! active | completed --cancel------> canceled (stamps canceled_at)
//! ```

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

use crate::common::trimmed_or_none;
use crate::error::{DomainError, ErrorCode};
use crate::ids::{parse_optional, DonationId, UserId};
use crate::value_objects::{
    CurrencyCode, DonationStatus, DonationType, Money, PaymentProvider, ProviderReference,
};

#[derive(Debug, Clone, PartialEq)]
pub struct DonationProps {
    pub id: Option<String>,
    pub user_id: Option<String>,
    pub donation_type: String,
    pub amount_minor: i64,
    pub currency: String,
    /// Defaults to `pending` on create; required on rehydrate.
    pub status: Option<String>,
    /// Defaults to `stripe`.
    pub provider: Option<String>,
    pub provider_session_id: String,
    pub provider_customer_id: Option<String>,
    pub provider_subscription_id: Option<String>,
    pub current_period_start: Option<DateTime<Utc>>,
    pub current_period_end: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub canceled_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationSnapshot {
    pub id: String,
    pub user_id: Option<String>,
    pub donation_type: DonationType,
    pub amount_minor: i64,
    pub currency: String,
    pub status: DonationStatus,
    pub provider: String,
    pub provider_session_id: String,
    pub provider_customer_id: Option<String>,
    pub provider_subscription_id: Option<String>,
    pub current_period_start: Option<DateTime<Utc>>,
    pub current_period_end: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub canceled_at: Option<DateTime<Utc>>,
}

/// A donation.
///
/// # Invariants
///
/// - `active` only for monthly donations, `completed` only for one-time ones
/// - `canceled_at` is present exactly when the status is `canceled`
/// - the billing period does not end before it starts
#[derive(Debug, Clone, PartialEq)]
pub struct Donation {
    id: DonationId,
    user_id: Option<UserId>,
    donation_type: DonationType,
    amount: Money,
    currency: CurrencyCode,
    status: DonationStatus,
    provider: PaymentProvider,
    provider_session_id: ProviderReference,
    provider_customer_id: Option<ProviderReference>,
    provider_subscription_id: Option<ProviderReference>,
    current_period_start: Option<DateTime<Utc>>,
    current_period_end: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    canceled_at: Option<DateTime<Utc>>,
}

impl Donation {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Build a new donation. Status defaults to `pending` and timestamps to `now`.
    pub fn create(props: DonationProps, now: DateTime<Utc>) -> Result<Self, DomainError> {
        let id = match props.id.clone() {
            Some(raw) => DonationId::parse(raw, ErrorCode::InvalidField)?,
            None => DonationId::new(),
        };
        let status = match props.status.as_deref() {
            Some(raw) => DonationStatus::new(raw)?,
            None => DonationStatus::Pending,
        };
        let created_at = props.created_at.unwrap_or(now);
        let updated_at = props.updated_at.unwrap_or(now);
        Self::build(id, status, created_at, updated_at, props)
    }

    /// Rebuild a persisted donation. Id, status and both timestamps are required.
    pub fn rehydrate(props: DonationProps) -> Result<Self, DomainError> {
        let id = DonationId::parse(required(props.id.clone(), "id")?, ErrorCode::InvalidField)?;
        let status = DonationStatus::new(&required(props.status.clone(), "status")?)?;
        let created_at = required(props.created_at, "created_at")?;
        let updated_at = required(props.updated_at, "updated_at")?;
        Self::build(id, status, created_at, updated_at, props)
    }

    fn build(
        id: DonationId,
        status: DonationStatus,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        props: DonationProps,
    ) -> Result<Self, DomainError> {
        let provider = match trimmed_or_none(props.provider) {
            Some(raw) => PaymentProvider::new(raw)?,
            None => PaymentProvider::new(PaymentProvider::DEFAULT)?,
        };
        let donation = Self {
            id,
            user_id: parse_optional(trimmed_or_none(props.user_id), |raw| {
                UserId::parse(raw, ErrorCode::InvalidField)
            })?,
            donation_type: DonationType::new(&props.donation_type)?,
            amount: Money::new(props.amount_minor)?,
            currency: CurrencyCode::new(&props.currency)?,
            status,
            provider,
            provider_session_id: ProviderReference::new(props.provider_session_id)?,
            provider_customer_id: parse_optional(
                trimmed_or_none(props.provider_customer_id),
                ProviderReference::new,
            )?,
            provider_subscription_id: parse_optional(
                trimmed_or_none(props.provider_subscription_id),
                ProviderReference::new,
            )?,
            current_period_start: props.current_period_start,
            current_period_end: props.current_period_end,
            created_at,
            updated_at,
            canceled_at: props.canceled_at,
        };
        donation.check_consistency()?;
        Ok(donation)
    }

    /// Cross-field rules shared by both constructors.
    fn check_consistency(&self) -> Result<(), DomainError> {
        match (self.status, self.donation_type) {
            (DonationStatus::Active, DonationType::OneTime) => {
                return Err(DomainError::invalid_field(
                    "Only monthly donations can be active",
                ));
            }
            (DonationStatus::Completed, DonationType::Monthly) => {
                return Err(DomainError::invalid_field(
                    "Only one-time donations can be completed",
                ));
            }
            _ => {}
        }
        let canceled = self.status == DonationStatus::Canceled;
        if canceled != self.canceled_at.is_some() {
            return Err(DomainError::invalid_field(
                "canceled_at must be set exactly when the donation is canceled",
            ));
        }
        check_period(self.current_period_start, self.current_period_end)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> &DonationId {
        &self.id
    }

    #[inline]
    pub fn user_id(&self) -> Option<&UserId> {
        self.user_id.as_ref()
    }

    #[inline]
    pub fn donation_type(&self) -> DonationType {
        self.donation_type
    }

    #[inline]
    pub fn amount(&self) -> Money {
        self.amount
    }

    #[inline]
    pub fn currency(&self) -> &CurrencyCode {
        &self.currency
    }

    #[inline]
    pub fn status(&self) -> DonationStatus {
        self.status
    }

    #[inline]
    pub fn provider(&self) -> &PaymentProvider {
        &self.provider
    }

    #[inline]
    pub fn provider_session_id(&self) -> &ProviderReference {
        &self.provider_session_id
    }

    #[inline]
    pub fn provider_customer_id(&self) -> Option<&ProviderReference> {
        self.provider_customer_id.as_ref()
    }

    #[inline]
    pub fn provider_subscription_id(&self) -> Option<&ProviderReference> {
        self.provider_subscription_id.as_ref()
    }

    #[inline]
    pub fn current_period_start(&self) -> Option<DateTime<Utc>> {
        self.current_period_start
    }

    #[inline]
    pub fn current_period_end(&self) -> Option<DateTime<Utc>> {
        self.current_period_end
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[inline]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    #[inline]
    pub fn canceled_at(&self) -> Option<DateTime<Utc>> {
        self.canceled_at
    }

    // =========================================================================
    // State Transitions
    // =========================================================================

    /// Activate a pending monthly donation once the provider confirms the
    /// subscription.
    pub fn activate_subscription(
        &mut self,
        subscription_id: &str,
        period_start: DateTime<Utc>,
        period_end: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        if self.donation_type != DonationType::Monthly {
            return Err(DomainError::new(
                ErrorCode::DonationActivateFailed,
                "Only monthly donations can be activated",
            ));
        }
        if self.status != DonationStatus::Pending {
            return Err(DomainError::new(
                ErrorCode::DonationActivateFailed,
                format!("Cannot activate a {} donation", self.status),
            ));
        }
        let subscription_id = ProviderReference::new(subscription_id)?;
        check_period(Some(period_start), Some(period_end))?;

        self.status = DonationStatus::Active;
        self.provider_subscription_id = Some(subscription_id);
        self.current_period_start = Some(period_start);
        self.current_period_end = Some(period_end);
        self.updated_at = now;
        Ok(())
    }

    /// Mark a pending one-time donation as paid.
    pub fn complete_one_time(&mut self, now: DateTime<Utc>) -> Result<(), DomainError> {
        if self.donation_type != DonationType::OneTime {
            return Err(DomainError::new(
                ErrorCode::DonationCompleteFailed,
                "Only one-time donations can be completed",
            ));
        }
        if self.status != DonationStatus::Pending {
            return Err(DomainError::new(
                ErrorCode::DonationCompleteFailed,
                format!("Cannot complete a {} donation", self.status),
            ));
        }
        self.status = DonationStatus::Completed;
        self.updated_at = now;
        Ok(())
    }

    /// Cancel an active or completed donation.
    pub fn cancel(&mut self, now: DateTime<Utc>) -> Result<(), DomainError> {
        if !matches!(
            self.status,
            DonationStatus::Active | DonationStatus::Completed
        ) {
            return Err(DomainError::new(
                ErrorCode::DonationCancelFailed,
                format!("Cannot cancel a {} donation", self.status),
            ));
        }
        self.status = DonationStatus::Canceled;
        self.canceled_at = Some(now);
        self.updated_at = now;
        Ok(())
    }

    /// Roll an active subscription over to its next billing period.
    pub fn renew_period(
        &mut self,
        period_start: DateTime<Utc>,
        period_end: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        if self.status != DonationStatus::Active {
            return Err(DomainError::new(
                ErrorCode::DonationRenewFailed,
                format!("Cannot renew a {} donation", self.status),
            ));
        }
        check_period(Some(period_start), Some(period_end))?;

        self.current_period_start = Some(period_start);
        self.current_period_end = Some(period_end);
        self.updated_at = now;
        Ok(())
    }

    // =========================================================================
    // Snapshot
    // =========================================================================

    pub fn to_snapshot(&self) -> DonationSnapshot {
        DonationSnapshot {
            id: self.id.to_string(),
            user_id: self.user_id.as_ref().map(ToString::to_string),
            donation_type: self.donation_type,
            amount_minor: self.amount.minor_units(),
            currency: self.currency.to_string(),
            status: self.status,
            provider: self.provider.to_string(),
            provider_session_id: self.provider_session_id.to_string(),
            provider_customer_id: self.provider_customer_id.as_ref().map(ToString::to_string),
            provider_subscription_id: self
                .provider_subscription_id
                .as_ref()
                .map(ToString::to_string),
            current_period_start: self.current_period_start,
            current_period_end: self.current_period_end,
            created_at: self.created_at,
            updated_at: self.updated_at,
            canceled_at: self.canceled_at,
        }
    }
}

fn required<T>(value: Option<T>, field: &str) -> Result<T, DomainError> {
    value.ok_or_else(|| DomainError::invalid_field(format!("Persisted donation has no {field}")))
}

fn check_period(
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> Result<(), DomainError> {
    if let (Some(start), Some(end)) = (start, end) {
        if end < start {
            return Err(DomainError::invalid_field(
                "current_period_end cannot be before current_period_start",
            ));
        }
    }
    Ok(())
}

impl Serialize for Donation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_snapshot().serialize(serializer)
    }
}
