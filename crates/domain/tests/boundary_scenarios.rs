//! Cross-aggregate scenarios exercised through the public API only.

use chrono::{DateTime, Duration, TimeZone, Utc};
use starmap_domain::value_objects::{DonationStatus, Measurements, SystemPosition};
use starmap_domain::{
    Asteroid, AsteroidProps, Donation, DonationProps, ErrorCode, Star, StarProps, User, UserProps,
};

fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 15, 9, 30, 0).unwrap()
}

#[test]
fn test_asteroid_orbital_must_be_half_integer() {
    let props = AsteroidProps {
        id: None,
        system_id: "sys-1".to_string(),
        name: "Kuiper Shard".to_string(),
        asteroid_type: "single".to_string(),
        size: "big".to_string(),
        orbital: 2.0,
    };
    let err = Asteroid::create(props.clone()).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidAsteroidOrbital);
    assert_eq!(err.code().to_string(), "DOMAIN.INVALID_ASTEROID_ORBITAL");

    let asteroid = Asteroid::create(AsteroidProps {
        orbital: 1.5,
        ..props
    })
    .unwrap();
    assert_eq!(asteroid.orbital(), 1.5);
}

#[test]
fn test_yellow_dwarf_cannot_be_class_b() {
    let err = Star::create(StarProps {
        id: None,
        system_id: "sys-1".to_string(),
        name: "Pale Lamp".to_string(),
        star_type: "Yellow dwarf".to_string(),
        star_class: "B".to_string(),
        surface_temperature: 5600.0,
        color: "blue-white".to_string(),
        measurements: Measurements {
            relative_mass: 1.0,
            absolute_mass: 1.989e30,
            relative_radius: 1.0,
            absolute_radius: 696_340.0,
            gravity: 274.0,
        },
        is_main: true,
        orbital: 0.0,
        orbital_starter: 1.0,
    })
    .unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidStarClass);
}

#[test]
fn test_one_time_donation_lifecycle() {
    let props = DonationProps {
        id: None,
        user_id: None,
        donation_type: "one_time".to_string(),
        amount_minor: 0,
        currency: "usd".to_string(),
        status: None,
        provider: None,
        provider_session_id: "cs_live_42".to_string(),
        provider_customer_id: None,
        provider_subscription_id: None,
        current_period_start: None,
        current_period_end: None,
        created_at: None,
        updated_at: None,
        canceled_at: None,
    };
    assert!(Donation::create(props.clone(), epoch()).is_err());

    let mut donation = Donation::create(
        DonationProps {
            amount_minor: 500,
            ..props
        },
        epoch(),
    )
    .unwrap();
    assert_eq!(donation.status(), DonationStatus::Pending);

    donation.complete_one_time(epoch() + Duration::minutes(1)).unwrap();
    assert_eq!(donation.status(), DonationStatus::Completed);

    let canceled_at = epoch() + Duration::days(3);
    donation.cancel(canceled_at).unwrap();
    assert_eq!(donation.status(), DonationStatus::Canceled);
    assert_eq!(donation.canceled_at(), Some(canceled_at));
}

#[test]
fn test_archived_user_cannot_be_restored() {
    let mut user = User::rehydrate(UserProps {
        id: Some("u-archived".to_string()),
        email: "ghost@example.com".to_string(),
        is_deleted: Some(true),
        deleted_at: Some(epoch()),
        is_archived: Some(true),
        archived_at: Some(epoch() + Duration::days(30)),
        ..UserProps::default()
    })
    .unwrap();

    let err = user.restore().unwrap_err();
    assert_eq!(err.code(), ErrorCode::UserRestoreFailed);
    assert!(user.is_deleted());
}

#[test]
fn test_system_position_equality() {
    let a = SystemPosition::new(1.0, 2.0, 3.0).unwrap();
    assert_eq!(a, SystemPosition::new(1.0, 2.0, 3.0).unwrap());
    assert_ne!(a, SystemPosition::new(1.0, 2.0, 4.0).unwrap());
    assert_ne!(a, SystemPosition::new(0.0, 2.0, 3.0).unwrap());
    assert_ne!(a, SystemPosition::new(1.0, -2.0, 3.0).unwrap());
}
