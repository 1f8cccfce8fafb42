//! Star system value objects

use serde::{Deserialize, Serialize};

use super::{NAME_MAX_LENGTH, NAME_MIN_LENGTH};
use crate::error::{DomainError, ErrorCode};

define_text! {
    /// A validated system name (trimmed, 2-100 chars)
    SystemName, ErrorCode::InvalidSystemName, "System name",
    min = NAME_MIN_LENGTH, max = NAME_MAX_LENGTH
}

/// Galactic coordinates of a system.
///
/// Equality is structural: two positions are equal when every coordinate is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct SystemPosition {
    x: f64,
    y: f64,
    z: f64,
}

#[derive(Deserialize)]
struct RawPosition {
    x: f64,
    y: f64,
    z: f64,
}

impl SystemPosition {
    /// Create a position, rejecting any non-finite coordinate.
    pub fn new(x: f64, y: f64, z: f64) -> Result<Self, DomainError> {
        for (axis, value) in [("x", x), ("y", y), ("z", z)] {
            if !value.is_finite() {
                return Err(DomainError::new(
                    ErrorCode::InvalidSystemPosition,
                    format!("position {axis} must be a finite number, got {value}"),
                ));
            }
        }
        Ok(Self { x, y, z })
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &SystemPosition) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

impl TryFrom<RawPosition> for SystemPosition {
    type Error = DomainError;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Self::new(raw.x, raw.y, raw.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_trimmed() {
        assert_eq!(SystemName::new("  Sys-1  ").unwrap().as_str(), "Sys-1");
    }

    #[test]
    fn test_single_character_name_is_rejected() {
        let err = SystemName::new("x").unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidSystemName);
    }

    #[test]
    fn test_name_is_idempotent() {
        let once = SystemName::new("  Sol  ").unwrap();
        let twice = SystemName::new(once.to_string()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_position_equality_is_structural() {
        let left = SystemPosition::new(1.0, 2.0, 3.0).unwrap();
        let right = SystemPosition::new(1.0, 2.0, 3.0).unwrap();
        let other = SystemPosition::new(1.0, 2.0, 4.0).unwrap();

        assert_eq!(left, right);
        assert_ne!(left, other);
    }

    #[test]
    fn test_position_rejects_non_finite() {
        let err = SystemPosition::new(f64::NAN, 2.0, 3.0).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidSystemPosition);
        assert!(SystemPosition::new(1.0, f64::INFINITY, 3.0).is_err());
        assert!(SystemPosition::new(1.0, 2.0, f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_distance() {
        let origin = SystemPosition::new(0.0, 0.0, 0.0).unwrap();
        let target = SystemPosition::new(3.0, 4.0, 0.0).unwrap();
        assert_eq!(origin.distance_to(&target), 5.0);
    }

    #[test]
    fn test_deserialize_validates() {
        let pos: SystemPosition = serde_json::from_str(r#"{"x":1,"y":2,"z":3}"#).unwrap();
        assert_eq!(pos, SystemPosition::new(1.0, 2.0, 3.0).unwrap());

        let name: Result<SystemName, _> = serde_json::from_str(r#""x""#);
        assert!(name.is_err());
    }
}
