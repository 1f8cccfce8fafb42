//! Asteroid value objects

use super::{NAME_MAX_LENGTH, NAME_MIN_LENGTH};
use crate::error::{DomainError, ErrorCode};

define_text! {
    /// A validated asteroid name (trimmed, 2-100 chars)
    AsteroidName, ErrorCode::InvalidAsteroidName, "Asteroid name",
    min = NAME_MIN_LENGTH, max = NAME_MAX_LENGTH
}

closed_set! {
    /// Whether the asteroid is a lone body or a field of them
    AsteroidType, ErrorCode::InvalidAsteroidType, "Asteroid type" {
        Single => "single",
        Cluster => "cluster",
    }
}

closed_set! {
    AsteroidSize, ErrorCode::InvalidAsteroidSize, "Asteroid size" {
        Small => "small",
        Medium => "medium",
        Big => "big",
        Massive => "massive",
    }
}

/// Orbital position of an asteroid.
///
/// Asteroids sit between planetary orbitals, so the value is always a
/// positive half-integer (0.5, 1.5, 2.5, ...).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct AsteroidOrbital(f64);

impl AsteroidOrbital {
    pub fn new(value: f64) -> Result<Self, DomainError> {
        if !value.is_finite() || value <= 0.0 || value - value.floor() != 0.5 {
            return Err(DomainError::new(
                ErrorCode::InvalidAsteroidOrbital,
                format!("asteroid orbital must be a positive half-integer (e.g. 1.5), got {value}"),
            ));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}
