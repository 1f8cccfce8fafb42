//! Integration tests for the family-dispatched pipeline and the auth envelope.

use serde_json::json;
use starmap_domain::ErrorCode;
use starmap_shared::{parse_auth_user_envelope, run, Family, OutputShape};

const USER_UUID: &str = "7d444840-9dc0-11d1-b245-5ffdce74fad2";

fn envelope() -> serde_json::Value {
    json!({
        "user": {
            "id": USER_UUID,
            "email": "captain@example.com",
            "role": "Admin",
            "verified": true
        }
    })
}

mod auth_envelope {
    use super::*;

    #[test]
    fn test_accepts_exact_shape() {
        let parsed = parse_auth_user_envelope(&envelope()).unwrap();
        assert_eq!(parsed.user.email, "captain@example.com");
        assert!(parsed.user.verified);
    }

    #[test]
    fn test_rejects_leaked_password_hash() {
        let mut payload = envelope();
        payload["user"]["passwordHash"] = json!("$argon2id$v=19$secret");

        let err = parse_auth_user_envelope(&payload).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidPayload);
    }

    #[test]
    fn test_rejects_extra_top_level_field() {
        let mut payload = envelope();
        payload["token"] = json!("abc");

        let err = parse_auth_user_envelope(&payload).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidPayload);
    }

    #[test]
    fn test_rejects_unknown_role() {
        let mut payload = envelope();
        payload["user"]["role"] = json!("Owner");

        let err = parse_auth_user_envelope(&payload).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidPayload);
    }

    #[test]
    fn test_rejects_malformed_email() {
        let mut payload = envelope();
        payload["user"]["email"] = json!("not-an-email");

        let err = parse_auth_user_envelope(&payload).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidField);
    }

    #[test]
    fn test_into_user_keeps_role_and_verification() {
        let user = parse_auth_user_envelope(&envelope())
            .unwrap()
            .user
            .into_user()
            .unwrap();
        assert!(user.role().is_admin());
        assert!(user.is_verified());
        assert_eq!(user.id().as_str(), USER_UUID);
    }
}

mod dispatch {
    use super::*;

    #[test]
    fn test_asteroid_scenario_through_pipeline() {
        let mut payload = json!({
            "id": "a1",
            "system_id": "sys-1",
            "name": "Vesta Field",
            "type": "single",
            "size": "small",
            "orbital": 2.0
        });
        let err = run(Family::Asteroid, &payload, OutputShape::Dto).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidAsteroidOrbital);

        payload["orbital"] = json!(1.5);
        let out = run(Family::Asteroid, &payload, OutputShape::Dto).unwrap();
        assert_eq!(out["orbital"], 1.5);
    }

    #[test]
    fn test_view_shape_is_camel_case() {
        let payload = json!({
            "id": "m1",
            "planet_id": "p1",
            "name": "Phobos",
            "size": "dwarf",
            "orbital": 1,
            "relative_mass": 0.1,
            "absolute_mass": 1.0e16,
            "relative_radius": 0.1,
            "absolute_radius": 11.0,
            "gravity": 0.0057,
            "temperature": 233.0
        });
        let out = run(Family::Moon, &payload, OutputShape::View).unwrap();
        assert_eq!(out["planetId"], "p1");
        assert!(out.get("planet_id").is_none());
    }

    #[test]
    fn test_auth_shapes() {
        let dto = run(Family::Auth, &envelope(), OutputShape::Dto).unwrap();
        assert_eq!(dto, envelope());

        let view = run(Family::Auth, &envelope(), OutputShape::View).unwrap();
        assert_eq!(view["role"], "Admin");
        assert_eq!(view["isDeleted"], false);
    }

    #[test]
    fn test_non_object_payload() {
        let err = run(Family::Log, &json!([1, 2, 3]), OutputShape::Dto).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidPayload);
    }

    #[test]
    fn test_metric_defaults_success() {
        let payload = json!({
            "id": "2",
            "metric_name": "db.query",
            "metric_type": "db",
            "source": "postgres",
            "duration_ms": 3.2,
            "occurred_at": "2026-02-01T12:00:00.000Z"
        });
        let out = run(Family::Metric, &payload, OutputShape::Dto).unwrap();
        assert_eq!(out["id"], "2");
        assert_eq!(out["success"], true);
        assert_eq!(out["occurred_at"], "2026-02-01T12:00:00.000Z");
    }
}
