//! Moon aggregate - A natural satellite of a planet

use serde::{Serialize, Serializer};

use crate::error::{DomainError, ErrorCode};
use crate::ids::{MoonId, PlanetId};
use crate::value_objects::{
    Measurements, MoonName, MoonSize, OrbitalSlot, PhysicalProperties, Temperature,
};

/// Moons occupy orbital slots around their planet starting at 1.
pub const MOON_MIN_ORBITAL: u32 = 1;

#[derive(Debug, Clone, PartialEq)]
pub struct MoonProps {
    pub id: Option<String>,
    pub planet_id: String,
    pub name: String,
    pub size: String,
    pub orbital: f64,
    pub measurements: Measurements,
    pub temperature: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoonSnapshot {
    pub id: String,
    pub planet_id: String,
    pub name: String,
    pub size: MoonSize,
    pub orbital: u32,
    #[serde(flatten)]
    pub measurements: Measurements,
    pub temperature: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Moon {
    id: MoonId,
    planet_id: PlanetId,
    name: MoonName,
    size: MoonSize,
    orbital: OrbitalSlot,
    physical: PhysicalProperties,
    temperature: Temperature,
}

impl Moon {
    // =========================================================================
    // Constructors
    // =========================================================================

    pub fn create(props: MoonProps) -> Result<Self, DomainError> {
        let id = match props.id.clone() {
            Some(raw) => MoonId::parse(raw, ErrorCode::InvalidMoonValue)?,
            None => MoonId::new(),
        };
        Self::build(id, props)
    }

    pub fn rehydrate(props: MoonProps) -> Result<Self, DomainError> {
        let raw_id = props.id.clone().ok_or_else(|| {
            DomainError::new(ErrorCode::InvalidMoonValue, "Persisted moon has no id")
        })?;
        let id = MoonId::parse(raw_id, ErrorCode::InvalidMoonValue)?;
        Self::build(id, props)
    }

    fn build(id: MoonId, props: MoonProps) -> Result<Self, DomainError> {
        Ok(Self {
            id,
            planet_id: PlanetId::parse(props.planet_id, ErrorCode::InvalidMoonValue)?,
            name: MoonName::new(props.name)?,
            size: MoonSize::new(&props.size)?,
            orbital: moon_orbital(props.orbital)?,
            physical: PhysicalProperties::new(props.measurements, ErrorCode::InvalidMoonValue)?,
            temperature: Temperature::new(props.temperature, ErrorCode::InvalidMoonValue)?,
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> &MoonId {
        &self.id
    }

    #[inline]
    pub fn planet_id(&self) -> &PlanetId {
        &self.planet_id
    }

    #[inline]
    pub fn name(&self) -> &MoonName {
        &self.name
    }

    #[inline]
    pub fn size(&self) -> MoonSize {
        self.size
    }

    #[inline]
    pub fn orbital(&self) -> u32 {
        self.orbital.value()
    }

    #[inline]
    pub fn physical(&self) -> &PhysicalProperties {
        &self.physical
    }

    #[inline]
    pub fn temperature(&self) -> f64 {
        self.temperature.kelvin()
    }

    // =========================================================================
    // Mutation Methods
    // =========================================================================

    pub fn rename(&mut self, name: &str) -> Result<(), DomainError> {
        self.name = MoonName::new(name)?;
        Ok(())
    }

    pub fn change_size(&mut self, size: &str) -> Result<(), DomainError> {
        self.size = MoonSize::new(size)?;
        Ok(())
    }

    pub fn change_orbital(&mut self, orbital: f64) -> Result<(), DomainError> {
        self.orbital = moon_orbital(orbital)?;
        Ok(())
    }

    // =========================================================================
    // Snapshot
    // =========================================================================

    pub fn to_snapshot(&self) -> MoonSnapshot {
        MoonSnapshot {
            id: self.id.to_string(),
            planet_id: self.planet_id.to_string(),
            name: self.name.to_string(),
            size: self.size,
            orbital: self.orbital.value(),
            measurements: self.physical.measurements(),
            temperature: self.temperature.kelvin(),
        }
    }
}

fn moon_orbital(value: f64) -> Result<OrbitalSlot, DomainError> {
    OrbitalSlot::new(value, MOON_MIN_ORBITAL, ErrorCode::InvalidMoonOrbital)
}

impl Serialize for Moon {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_snapshot().serialize(serializer)
    }
}
