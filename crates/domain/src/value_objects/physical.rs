//! Physical measurements shared by planets, moons and stars

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, ErrorCode};

/// Raw mass, radius and gravity figures as they arrive from a payload.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurements {
    pub relative_mass: f64,
    pub absolute_mass: f64,
    pub relative_radius: f64,
    pub absolute_radius: f64,
    pub gravity: f64,
}

/// Validated physical measurements of a celestial body.
///
/// # Invariants
///
/// - Every figure is finite
/// - Masses and radii are strictly positive
/// - Gravity is non-negative
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalProperties(Measurements);

impl PhysicalProperties {
    /// Validates raw measurements on behalf of the family owning `code`.
    pub fn new(raw: Measurements, code: ErrorCode) -> Result<Self, DomainError> {
        let positive = [
            ("relative mass", raw.relative_mass),
            ("absolute mass", raw.absolute_mass),
            ("relative radius", raw.relative_radius),
            ("absolute radius", raw.absolute_radius),
        ];
        for (label, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(DomainError::new(
                    code,
                    format!("{label} must be a positive finite number, got {value}"),
                ));
            }
        }
        if !raw.gravity.is_finite() || raw.gravity < 0.0 {
            return Err(DomainError::new(
                code,
                format!("gravity must be a non-negative finite number, got {}", raw.gravity),
            ));
        }
        Ok(Self(raw))
    }

    pub fn measurements(&self) -> Measurements {
        self.0
    }

    pub fn relative_mass(&self) -> f64 {
        self.0.relative_mass
    }

    pub fn absolute_mass(&self) -> f64 {
        self.0.absolute_mass
    }

    pub fn relative_radius(&self) -> f64 {
        self.0.relative_radius
    }

    pub fn absolute_radius(&self) -> f64 {
        self.0.absolute_radius
    }

    pub fn gravity(&self) -> f64 {
        self.0.gravity
    }
}

/// Temperature in kelvin (finite, non-negative).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Temperature(f64);

impl Temperature {
    pub fn new(kelvin: f64, code: ErrorCode) -> Result<Self, DomainError> {
        if !kelvin.is_finite() || kelvin < 0.0 {
            return Err(DomainError::new(
                code,
                format!("temperature must be a non-negative finite number of kelvin, got {kelvin}"),
            ));
        }
        Ok(Self(kelvin))
    }

    pub fn kelvin(self) -> f64 {
        self.0
    }
}

/// Integer orbital slot with a family-specific lower bound.
///
/// Clients send JSON numbers, so the raw value is a float: `2.0` is slot 2,
/// while `2.5`, non-finite values and anything below `min` are rejected
/// with the family's code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OrbitalSlot(u32);

impl OrbitalSlot {
    pub fn new(value: f64, min: u32, code: ErrorCode) -> Result<Self, DomainError> {
        let in_range = value >= f64::from(min) && value <= f64::from(u32::MAX);
        if !value.is_finite() || value.fract() != 0.0 || !in_range {
            return Err(DomainError::new(
                code,
                format!("orbital must be an integer >= {min}, got {value}"),
            ));
        }
        Ok(Self(value as u32))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}
