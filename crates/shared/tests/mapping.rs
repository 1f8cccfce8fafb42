//! Integration tests for the API -> domain -> DTO/View mappers.

use serde_json::{json, Value};
use starmap_domain::ErrorCode;
use starmap_shared::mappers::*;

const SYSTEM_ID: &str = "0b6f1c8e-3f3a-4f4e-9a57-1b6b0c9f2d10";
const PLANET_ID: &str = "5f0a3d62-8d0b-4b7e-8f55-52a8f1c6b7e4";

fn system_payload() -> Value {
    json!({
        "id": SYSTEM_ID,
        "galaxy_id": "milky-way",
        "name": "Sol",
        "position_x": 1.0,
        "position_y": -2.5,
        "position_z": 3.25
    })
}

fn asteroid_payload() -> Value {
    json!({
        "id": "a1",
        "system_id": SYSTEM_ID,
        "name": "Ceres Belt",
        "type": "cluster",
        "size": "massive",
        "orbital": 3.5
    })
}

fn planet_payload() -> Value {
    json!({
        "id": PLANET_ID,
        "system_id": SYSTEM_ID,
        "name": "Terra",
        "type": "solid",
        "size": "medium",
        "orbital": 3,
        "biome": "temperate",
        "relative_mass": 1.0,
        "absolute_mass": 5.97e24,
        "relative_radius": 1.0,
        "absolute_radius": 6371.0,
        "gravity": 9.81,
        "temperature": 288.0
    })
}

fn moon_payload() -> Value {
    json!({
        "id": "m1",
        "planet_id": PLANET_ID,
        "name": "Luna",
        "size": "small",
        "orbital": 1,
        "relative_mass": 0.0123,
        "absolute_mass": 7.35e22,
        "relative_radius": 0.273,
        "absolute_radius": 1737.4,
        "gravity": 1.62,
        "temperature": 250.0
    })
}

fn star_payload() -> Value {
    json!({
        "id": "s1",
        "system_id": SYSTEM_ID,
        "name": "Helios",
        "star_type": "Yellow dwarf",
        "star_class": "G",
        "surface_temperature": 5778.0,
        "color": "yellow",
        "relative_mass": 1.0,
        "absolute_mass": 1.989e30,
        "relative_radius": 1.0,
        "absolute_radius": 696340.0,
        "gravity": 274.0,
        "is_main": true,
        "orbital": 0,
        "orbital_starter": 1
    })
}

fn to_json<T: serde::Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap()
}

mod round_trip {
    use super::*;

    #[test]
    fn test_system_dto_reproduces_api() {
        let payload = system_payload();
        let system = map_system_api_to_domain(decode_system_api(&payload).unwrap()).unwrap();
        assert_eq!(to_json(&map_system_domain_to_dto(&system)), payload);
    }

    #[test]
    fn test_asteroid_dto_reproduces_api() {
        let payload = asteroid_payload();
        let asteroid = map_asteroid_api_to_domain(decode_asteroid_api(&payload).unwrap()).unwrap();
        assert_eq!(to_json(&map_asteroid_domain_to_dto(&asteroid)), payload);
    }

    #[test]
    fn test_planet_dto_reproduces_api() {
        let payload = planet_payload();
        let planet = map_planet_api_to_domain(decode_planet_api(&payload).unwrap()).unwrap();
        assert_eq!(to_json(&map_planet_domain_to_dto(&planet)), payload);
    }

    #[test]
    fn test_moon_dto_reproduces_api() {
        let payload = moon_payload();
        let moon = map_moon_api_to_domain(decode_moon_api(&payload).unwrap()).unwrap();
        assert_eq!(to_json(&map_moon_domain_to_dto(&moon)), payload);
    }

    #[test]
    fn test_star_dto_reproduces_api() {
        let payload = star_payload();
        let star = map_star_api_to_domain(decode_star_api(&payload).unwrap()).unwrap();
        assert_eq!(to_json(&map_star_domain_to_dto(&star)), payload);
    }
}

mod views {
    use super::*;

    #[test]
    fn test_system_view_nests_position() {
        let api = decode_system_api(&system_payload()).unwrap();
        let system = map_system_api_to_domain(api).unwrap();
        let view = to_json(&map_system_domain_to_view(&system));

        assert_eq!(view["galaxyId"], "milky-way");
        assert_eq!(view["position"], json!({"x": 1.0, "y": -2.5, "z": 3.25}));
        assert!(view.get("position_x").is_none());
    }

    #[test]
    fn test_planet_view_is_camel_case() {
        let api = decode_planet_api(&planet_payload()).unwrap();
        let planet = map_planet_api_to_domain(api).unwrap();
        let view = to_json(&map_planet_domain_to_view(&planet));

        assert_eq!(view["systemId"], SYSTEM_ID);
        assert_eq!(view["type"], "solid");
        assert_eq!(view["relativeMass"], 1.0);
        assert!(view.get("relative_mass").is_none());
    }

    #[test]
    fn test_user_view_hides_secrets() {
        let payload = json!({
            "id": "u1",
            "email": "Pilot@Example.com",
            "username": "pilot_one",
            "password": "$argon2id$v=19$hash",
            "role": "User",
            "verified": false,
            "verification_code": "123456",
            "verification_code_expires_at": "2026-02-01T00:00:00.000Z"
        });
        let user = map_user_api_to_domain(decode_user_api(&payload).unwrap()).unwrap();
        let view = to_json(&map_user_domain_to_view(&user));

        assert_eq!(view["email"], "pilot@example.com");
        assert!(view.get("password").is_none());
        assert!(view.get("verificationCode").is_none());
        assert!(view.get("verificationCodeExpiresAt").is_none());

        let dto = map_user_domain_to_dto(&user);
        assert_eq!(dto.password.as_deref(), Some("$argon2id$v=19$hash"));
        assert_eq!(dto.verification_code.as_deref(), Some("123456"));
    }

    #[test]
    fn test_donation_view_hides_provider_references() {
        let payload = json!({
            "id": "d1",
            "donation_type": "monthly",
            "amount_minor": 999,
            "currency": "eur",
            "status": "active",
            "provider_session_id": "cs_test_1",
            "provider_customer_id": "cus_1",
            "provider_subscription_id": "sub_1",
            "current_period_start": "2026-02-01T00:00:00.000Z",
            "current_period_end": "2026-03-01T00:00:00.000Z",
            "created_at": "2026-02-01T00:00:00.000Z",
            "updated_at": "2026-02-01T00:00:00.000Z"
        });
        let donation = map_donation_api_to_domain(decode_donation_api(&payload).unwrap()).unwrap();

        let dto = map_donation_domain_to_dto(&donation);
        assert_eq!(dto.currency, "EUR");
        assert_eq!(dto.provider, "stripe");
        assert_eq!(dto.provider_subscription_id.as_deref(), Some("sub_1"));

        let view = to_json(&map_donation_domain_to_view(&donation));
        assert_eq!(view["amountMinor"], 999);
        assert!(view.get("providerSessionId").is_none());
        assert!(view.get("providerCustomerId").is_none());
        assert!(view.get("providerSubscriptionId").is_none());
    }
}

mod rejection {
    use super::*;

    #[test]
    fn test_unknown_field_is_invalid_payload() {
        let mut payload = system_payload();
        payload["galaxy_name"] = json!("Milky Way");

        let err = decode_system_api(&payload).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidPayload);
    }

    #[test]
    fn test_missing_field_is_invalid_payload() {
        let mut payload = moon_payload();
        payload.as_object_mut().unwrap().remove("planet_id");

        let err = decode_moon_api(&payload).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidPayload);
    }

    #[test]
    fn test_domain_error_propagates_unchanged() {
        let mut payload = planet_payload();
        payload["biome"] = json!("lava");

        let api = decode_planet_api(&payload).unwrap();
        let err = map_planet_api_to_domain(api).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidPlanetBiome);
    }

    #[test]
    fn test_whole_float_orbital_is_accepted() {
        let mut payload = planet_payload();
        payload["orbital"] = json!(2.0);

        let planet = map_planet_api_to_domain(decode_planet_api(&payload).unwrap()).unwrap();
        assert_eq!(planet.orbital(), 2);
        assert_eq!(to_json(&map_planet_domain_to_dto(&planet))["orbital"], 2);
    }

    #[test]
    fn test_fractional_orbital_uses_family_code() {
        let mut planet = planet_payload();
        planet["orbital"] = json!(2.5);
        let err = map_planet_api_to_domain(decode_planet_api(&planet).unwrap()).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidPlanetValue);

        let mut moon = moon_payload();
        moon["orbital"] = json!(2.5);
        let err = map_moon_api_to_domain(decode_moon_api(&moon).unwrap()).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidMoonOrbital);

        let mut star = star_payload();
        star["orbital_starter"] = json!(1.5);
        let err = map_star_api_to_domain(decode_star_api(&star).unwrap()).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidStarValue);
    }

    #[test]
    fn test_star_class_mismatch() {
        let mut payload = star_payload();
        payload["star_class"] = json!("B");
        payload["color"] = json!("blue-white");

        let err = map_star_api_to_domain(decode_star_api(&payload).unwrap()).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidStarClass);
    }

    #[test]
    fn test_log_bad_status_code_is_invalid_field() {
        let payload = json!({
            "id": "10",
            "source": "api",
            "level": "error",
            "category": "application",
            "message": "boom",
            "status_code": 42,
            "occurred_at": "2026-02-01T00:00:00.000Z"
        });
        let err = map_log_api_to_domain(decode_log_api(&payload).unwrap()).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidField);
    }

    #[test]
    fn test_metric_bad_timestamp_is_invalid_field() {
        let payload = json!({
            "id": "2",
            "metric_name": "GET /systems",
            "metric_type": "http",
            "source": "api",
            "duration_ms": 12.5,
            "occurred_at": "yesterday"
        });
        let err = map_metric_api_to_domain(decode_metric_api(&payload).unwrap()).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidField);
    }
}
