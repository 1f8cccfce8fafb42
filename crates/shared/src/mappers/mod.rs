//! Four-way mappers: API payload -> aggregate -> DTO / View
//!
//! | Shape | Convention | Direction |
//! |-------|------------|-----------|
//! | `XApi` | snake_case, strict | inbound, decoded from JSON |
//! | aggregate | - | validated in memory |
//! | `XDto` | snake_case, flattened | persistence |
//! | `XView` | camelCase | presentation, no secrets |
//!
//! API -> domain is the only fallible direction. Domain -> DTO and
//! domain -> View are infallible projections of an already valid aggregate.

use serde::de::DeserializeOwned;
use serde_json::Value;
use starmap_domain::DomainError;
use tracing::{debug, trace};

pub mod asteroid;
pub mod donation;
pub mod log;
pub mod metric;
pub mod moon;
pub mod planet;
pub mod star;
pub mod system;
pub mod user;

pub use asteroid::{
    decode_asteroid_api, map_asteroid_api_to_domain, map_asteroid_domain_to_dto,
    map_asteroid_domain_to_view, AsteroidApi, AsteroidDto, AsteroidView,
};
pub use donation::{
    decode_donation_api, map_donation_api_to_domain, map_donation_domain_to_dto,
    map_donation_domain_to_view, DonationApi, DonationDto, DonationView,
};
pub use log::{
    decode_log_api, map_log_api_to_domain, map_log_domain_to_dto, map_log_domain_to_view, LogApi,
    LogDto, LogView,
};
pub use metric::{
    decode_metric_api, map_metric_api_to_domain, map_metric_domain_to_dto,
    map_metric_domain_to_view, MetricApi, MetricDto, MetricView,
};
pub use moon::{
    decode_moon_api, map_moon_api_to_domain, map_moon_domain_to_dto, map_moon_domain_to_view,
    MoonApi, MoonDto, MoonView,
};
pub use planet::{
    decode_planet_api, map_planet_api_to_domain, map_planet_domain_to_dto,
    map_planet_domain_to_view, PlanetApi, PlanetDto, PlanetView,
};
pub use star::{
    decode_star_api, map_star_api_to_domain, map_star_domain_to_dto, map_star_domain_to_view,
    StarApi, StarDto, StarView,
};
pub use system::{
    decode_system_api, map_system_api_to_domain, map_system_domain_to_dto,
    map_system_domain_to_view, PositionView, SystemApi, SystemDto, SystemView,
};
pub use user::{
    decode_user_api, map_user_api_to_domain, map_user_domain_to_dto, map_user_domain_to_view,
    map_user_dto_to_domain, UserApi, UserDto, UserView,
};

/// Decodes a raw JSON payload into a strict API struct.
///
/// Shape violations (unknown fields, missing fields, wrong JSON types) are
/// reported as `PRESENTATION.INVALID_PAYLOAD`.
pub(crate) fn decode_payload<T>(family: &'static str, payload: &Value) -> Result<T, DomainError>
where
    T: DeserializeOwned,
{
    T::deserialize(payload).map_err(|e| {
        let err = DomainError::invalid_payload(format!("{family} payload: {e}"));
        debug!(family, code = %err.code(), error = %e, "Rejected payload shape");
        err
    })
}

/// Logs the outcome of an API -> domain mapping and passes it through.
pub(crate) fn traced<T>(
    family: &'static str,
    result: Result<T, DomainError>,
) -> Result<T, DomainError> {
    match &result {
        Ok(_) => trace!(family, "Mapped payload to aggregate"),
        Err(err) => debug!(
            family,
            code = %err.code(),
            message = err.message(),
            "Rejected payload"
        ),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;
    use starmap_domain::ErrorCode;

    #[derive(Debug, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct Probe {
        #[allow(dead_code)]
        name: String,
    }

    #[test]
    fn test_decode_reports_shape_errors_as_invalid_payload() {
        for payload in [json!({}), json!({ "name": 1 }), json!({ "name": "a", "extra": 1 })] {
            let err = decode_payload::<Probe>("probe", &payload).unwrap_err();
            assert_eq!(err.code(), ErrorCode::InvalidPayload);
            assert!(err.message().starts_with("probe payload:"));
        }
    }

    #[test]
    fn test_traced_passes_result_through() {
        let ok: Result<u8, DomainError> = Ok(1);
        assert_eq!(traced("probe", ok).unwrap(), 1);

        let err = DomainError::invalid_field("bad");
        assert_eq!(traced::<u8>("probe", Err(err.clone())).unwrap_err(), err);
    }
}
