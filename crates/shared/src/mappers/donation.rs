//! Donation mappers
//!
//! API payloads describe persisted donations, so API -> domain rehydrates
//! rather than creates: status and timestamps must be present.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use starmap_domain::common::{format_datetime, parse_field_datetime, parse_optional_field_datetime};
use starmap_domain::{Donation, DonationProps, DomainError};

use super::{decode_payload, traced};

const FAMILY: &str = "donation";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DonationApi {
    pub id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    pub donation_type: String,
    pub amount_minor: i64,
    pub currency: String,
    pub status: String,
    #[serde(default)]
    pub provider: Option<String>,
    pub provider_session_id: String,
    #[serde(default)]
    pub provider_customer_id: Option<String>,
    #[serde(default)]
    pub provider_subscription_id: Option<String>,
    #[serde(default)]
    pub current_period_start: Option<String>,
    #[serde(default)]
    pub current_period_end: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub canceled_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonationDto {
    pub id: String,
    pub user_id: Option<String>,
    pub donation_type: String,
    pub amount_minor: i64,
    pub currency: String,
    pub status: String,
    pub provider: String,
    pub provider_session_id: String,
    pub provider_customer_id: Option<String>,
    pub provider_subscription_id: Option<String>,
    pub current_period_start: Option<String>,
    pub current_period_end: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub canceled_at: Option<String>,
}

/// Presentation shape. Provider references stay server-side.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationView {
    pub id: String,
    pub user_id: Option<String>,
    pub donation_type: String,
    pub amount_minor: i64,
    pub currency: String,
    pub status: String,
    pub provider: String,
    pub current_period_start: Option<String>,
    pub current_period_end: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub canceled_at: Option<String>,
}

pub fn decode_donation_api(payload: &Value) -> Result<DonationApi, DomainError> {
    decode_payload(FAMILY, payload)
}

pub fn map_donation_api_to_domain(api: DonationApi) -> Result<Donation, DomainError> {
    traced(FAMILY, donation_from_api(api))
}

fn donation_from_api(api: DonationApi) -> Result<Donation, DomainError> {
    let props = DonationProps {
        current_period_start: parse_optional_field_datetime(
            "current_period_start",
            api.current_period_start.as_deref(),
        )?,
        current_period_end: parse_optional_field_datetime(
            "current_period_end",
            api.current_period_end.as_deref(),
        )?,
        created_at: Some(parse_field_datetime("created_at", &api.created_at)?),
        updated_at: Some(parse_field_datetime("updated_at", &api.updated_at)?),
        canceled_at: parse_optional_field_datetime("canceled_at", api.canceled_at.as_deref())?,
        id: Some(api.id),
        user_id: api.user_id,
        donation_type: api.donation_type,
        amount_minor: api.amount_minor,
        currency: api.currency,
        status: Some(api.status),
        provider: api.provider,
        provider_session_id: api.provider_session_id,
        provider_customer_id: api.provider_customer_id,
        provider_subscription_id: api.provider_subscription_id,
    };
    Donation::rehydrate(props)
}

pub fn map_donation_domain_to_dto(donation: &Donation) -> DonationDto {
    DonationDto {
        id: donation.id().to_string(),
        user_id: donation.user_id().map(ToString::to_string),
        donation_type: donation.donation_type().to_string(),
        amount_minor: donation.amount().minor_units(),
        currency: donation.currency().to_string(),
        status: donation.status().to_string(),
        provider: donation.provider().to_string(),
        provider_session_id: donation.provider_session_id().to_string(),
        provider_customer_id: donation.provider_customer_id().map(ToString::to_string),
        provider_subscription_id: donation.provider_subscription_id().map(ToString::to_string),
        current_period_start: donation.current_period_start().map(format_datetime),
        current_period_end: donation.current_period_end().map(format_datetime),
        created_at: format_datetime(donation.created_at()),
        updated_at: format_datetime(donation.updated_at()),
        canceled_at: donation.canceled_at().map(format_datetime),
    }
}

pub fn map_donation_domain_to_view(donation: &Donation) -> DonationView {
    DonationView {
        id: donation.id().to_string(),
        user_id: donation.user_id().map(ToString::to_string),
        donation_type: donation.donation_type().to_string(),
        amount_minor: donation.amount().minor_units(),
        currency: donation.currency().to_string(),
        status: donation.status().to_string(),
        provider: donation.provider().to_string(),
        current_period_start: donation.current_period_start().map(format_datetime),
        current_period_end: donation.current_period_end().map(format_datetime),
        created_at: format_datetime(donation.created_at()),
        updated_at: format_datetime(donation.updated_at()),
        canceled_at: donation.canceled_at().map(format_datetime),
    }
}
