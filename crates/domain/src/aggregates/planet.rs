//! Planet aggregate - A planet orbiting within a system

use serde::{Serialize, Serializer};

use crate::error::{DomainError, ErrorCode};
use crate::ids::{PlanetId, SystemId};
use crate::value_objects::{
    Measurements, OrbitalSlot, PhysicalProperties, PlanetBiome, PlanetName, PlanetSize,
    PlanetType, Temperature,
};

/// Planets occupy orbital slots starting at 1.
pub const PLANET_MIN_ORBITAL: u32 = 1;

#[derive(Debug, Clone, PartialEq)]
pub struct PlanetProps {
    pub id: Option<String>,
    pub system_id: String,
    pub name: String,
    pub planet_type: String,
    pub size: String,
    pub orbital: f64,
    pub biome: String,
    pub measurements: Measurements,
    pub temperature: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetSnapshot {
    pub id: String,
    pub system_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub planet_type: PlanetType,
    pub size: PlanetSize,
    pub orbital: u32,
    pub biome: PlanetBiome,
    #[serde(flatten)]
    pub measurements: Measurements,
    pub temperature: f64,
}

/// A planet.
///
/// # Invariants
///
/// - `orbital` is an integer >= 1
/// - masses and radii are positive, gravity and temperature non-negative
#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    id: PlanetId,
    system_id: SystemId,
    name: PlanetName,
    planet_type: PlanetType,
    size: PlanetSize,
    orbital: OrbitalSlot,
    biome: PlanetBiome,
    physical: PhysicalProperties,
    temperature: Temperature,
}

impl Planet {
    // =========================================================================
    // Constructors
    // =========================================================================

    pub fn create(props: PlanetProps) -> Result<Self, DomainError> {
        let id = match props.id.clone() {
            Some(raw) => PlanetId::parse(raw, ErrorCode::InvalidPlanetValue)?,
            None => PlanetId::new(),
        };
        Self::build(id, props)
    }

    pub fn rehydrate(props: PlanetProps) -> Result<Self, DomainError> {
        let raw_id = props.id.clone().ok_or_else(|| {
            DomainError::new(ErrorCode::InvalidPlanetValue, "Persisted planet has no id")
        })?;
        let id = PlanetId::parse(raw_id, ErrorCode::InvalidPlanetValue)?;
        Self::build(id, props)
    }

    fn build(id: PlanetId, props: PlanetProps) -> Result<Self, DomainError> {
        Ok(Self {
            id,
            system_id: SystemId::parse(props.system_id, ErrorCode::InvalidPlanetValue)?,
            name: PlanetName::new(props.name)?,
            planet_type: PlanetType::new(&props.planet_type)?,
            size: PlanetSize::new(&props.size)?,
            orbital: planet_orbital(props.orbital)?,
            biome: PlanetBiome::new(&props.biome)?,
            physical: PhysicalProperties::new(props.measurements, ErrorCode::InvalidPlanetValue)?,
            temperature: Temperature::new(props.temperature, ErrorCode::InvalidPlanetValue)?,
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> &PlanetId {
        &self.id
    }

    #[inline]
    pub fn system_id(&self) -> &SystemId {
        &self.system_id
    }

    #[inline]
    pub fn name(&self) -> &PlanetName {
        &self.name
    }

    #[inline]
    pub fn planet_type(&self) -> PlanetType {
        self.planet_type
    }

    #[inline]
    pub fn size(&self) -> PlanetSize {
        self.size
    }

    #[inline]
    pub fn orbital(&self) -> u32 {
        self.orbital.value()
    }

    #[inline]
    pub fn biome(&self) -> PlanetBiome {
        self.biome
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
        self.name = PlanetName::new(name)?;
        Ok(())
    }

    pub fn change_type(&mut self, planet_type: &str) -> Result<(), DomainError> {
        self.planet_type = PlanetType::new(planet_type)?;
        Ok(())
    }

    pub fn change_size(&mut self, size: &str) -> Result<(), DomainError> {
        self.size = PlanetSize::new(size)?;
        Ok(())
    }

    pub fn change_orbital(&mut self, orbital: f64) -> Result<(), DomainError> {
        self.orbital = planet_orbital(orbital)?;
        Ok(())
    }

    pub fn change_biome(&mut self, biome: &str) -> Result<(), DomainError> {
        self.biome = PlanetBiome::new(biome)?;
        Ok(())
    }

    // =========================================================================
    // Snapshot
    // =========================================================================

    pub fn to_snapshot(&self) -> PlanetSnapshot {
        PlanetSnapshot {
            id: self.id.to_string(),
            system_id: self.system_id.to_string(),
            name: self.name.to_string(),
            planet_type: self.planet_type,
            size: self.size,
            orbital: self.orbital.value(),
            biome: self.biome,
            measurements: self.physical.measurements(),
            temperature: self.temperature.kelvin(),
        }
    }
}

fn planet_orbital(value: f64) -> Result<OrbitalSlot, DomainError> {
    OrbitalSlot::new(value, PLANET_MIN_ORBITAL, ErrorCode::InvalidPlanetValue)
}

impl Serialize for Planet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_snapshot().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SYSTEM_ID: &str = "11111111-1111-4111-8111-111111111111";
    const PLANET_ID: &str = "22222222-2222-4222-8222-222222222222";

    fn earth() -> Measurements {
        Measurements {
            relative_mass: 1.0,
            absolute_mass: 5.97e24,
            relative_radius: 1.0,
            absolute_radius: 6.37e6,
            gravity: 9.8,
        }
    }

    fn props() -> PlanetProps {
        PlanetProps {
            id: Some(PLANET_ID.to_string()),
            system_id: SYSTEM_ID.to_string(),
            name: "Terra-1".to_string(),
            planet_type: "solid".to_string(),
            size: "medium".to_string(),
            orbital: 2.0,
            biome: "temperate".to_string(),
            measurements: earth(),
            temperature: 288.0,
        }
    }

    mod constructor {
        use super::*;

        #[test]
        fn test_create_snapshot() {
            let planet = Planet::create(props()).unwrap();
            assert_eq!(
                planet.to_snapshot(),
                PlanetSnapshot {
                    id: PLANET_ID.to_string(),
                    system_id: SYSTEM_ID.to_string(),
                    name: "Terra-1".to_string(),
                    planet_type: PlanetType::Solid,
                    size: PlanetSize::Medium,
                    orbital: 2,
                    biome: PlanetBiome::Temperate,
                    measurements: earth(),
                    temperature: 288.0,
                }
            );
        }

        #[test]
        fn test_orbital_zero_rejected() {
            let err = Planet::create(PlanetProps { orbital: 0.0, ..props() }).unwrap_err();
            assert_eq!(err.code(), ErrorCode::InvalidPlanetValue);
        }

        #[test]
        fn test_negative_temperature_rejected() {
            let err = Planet::create(PlanetProps {
                temperature: -4.0,
                ..props()
            })
            .unwrap_err();
            assert_eq!(err.code(), ErrorCode::InvalidPlanetValue);
        }

        #[test]
        fn test_zero_radius_rejected() {
            let err = Planet::create(PlanetProps {
                measurements: Measurements {
                    relative_radius: 0.0,
                    ..earth()
                },
                ..props()
            })
            .unwrap_err();
            assert_eq!(err.code(), ErrorCode::InvalidPlanetValue);
        }
    }

    mod mutation {
        use super::*;

        #[test]
        fn test_lifecycle_mutations() {
            let mut planet = Planet::create(props()).unwrap();
            planet.rename("Terra-2").unwrap();
            planet.change_biome("ocean").unwrap();
            planet.change_orbital(3.0).unwrap();
            planet.change_type("gas").unwrap();
            planet.change_size("giant").unwrap();

            let snapshot = planet.to_snapshot();
            assert_eq!(snapshot.name, "Terra-2");
            assert_eq!(snapshot.biome, PlanetBiome::Ocean);
            assert_eq!(snapshot.orbital, 3);
            assert_eq!(snapshot.planet_type, PlanetType::Gas);
            assert_eq!(snapshot.size, PlanetSize::Giant);
        }

        #[test]
        fn test_failed_mutation_leaves_state_unchanged() {
            let mut planet = Planet::create(props()).unwrap();
            let before = planet.to_snapshot();

            assert_eq!(
                planet.change_biome("lava").unwrap_err().code(),
                ErrorCode::InvalidPlanetBiome
            );
            assert!(planet.change_orbital(-1.0).is_err());
            assert_eq!(planet.to_snapshot(), before);
        }
    }

    mod serde {
        use super::*;

        #[test]
        fn test_snapshot_is_flat_camel_case() {
            let json = serde_json::to_value(Planet::create(props()).unwrap()).unwrap();
            assert_eq!(json["type"], "solid");
            assert_eq!(json["relativeMass"], 1.0);
            assert_eq!(json["absoluteRadius"], 6.37e6);
            assert_eq!(json["temperature"], 288.0);
            assert!(json.get("measurements").is_none());
        }
    }
}
