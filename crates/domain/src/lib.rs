//! Starmap domain kernel
//!
//! Validated value objects and aggregate roots for the celestial catalogue
//! (systems, stars, planets, moons, asteroids) and the account side of the
//! platform (users, donations, logs, metrics).
//!
//! Every aggregate is built through `create` or `rehydrate`, both validating,
//! and every failure is a [`DomainError`] carrying a stable
//! [`ErrorCode`]. This crate performs no I/O and does no logging.

pub mod aggregates;
pub mod common;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use aggregates::{
    Asteroid, AsteroidProps, AsteroidSnapshot, Donation, DonationProps, DonationSnapshot, Log,
    LogProps, LogSnapshot, Metric, MetricProps, MetricSnapshot, Moon, MoonProps, MoonSnapshot,
    Planet, PlanetProps, PlanetSnapshot, Star, StarProps, StarSnapshot, System, SystemProps,
    SystemSnapshot, User, UserProps, UserSnapshot,
};
pub use error::{DomainError, ErrorCategory, ErrorCode};
pub use ids::{
    AsteroidId, DonationId, GalaxyId, LogId, MetricId, MoonId, PlanetId, StarId, SystemId, UserId,
};
