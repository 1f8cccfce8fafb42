//! Asteroid aggregate - A lone asteroid or cluster between planetary orbits

use serde::{Serialize, Serializer};

use crate::error::{DomainError, ErrorCode};
use crate::ids::{AsteroidId, SystemId};
use crate::value_objects::{AsteroidName, AsteroidOrbital, AsteroidSize, AsteroidType};

#[derive(Debug, Clone, PartialEq)]
pub struct AsteroidProps {
    pub id: Option<String>,
    pub system_id: String,
    pub name: String,
    pub asteroid_type: String,
    pub size: String,
    pub orbital: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AsteroidSnapshot {
    pub id: String,
    pub system_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub asteroid_type: AsteroidType,
    pub size: AsteroidSize,
    pub orbital: f64,
}

/// An asteroid or asteroid cluster orbiting a system's stars.
///
/// # Invariants
///
/// - `orbital` is a positive half-integer (enforced by `AsteroidOrbital`)
#[derive(Debug, Clone, PartialEq)]
pub struct Asteroid {
    id: AsteroidId,
    system_id: SystemId,
    name: AsteroidName,
    asteroid_type: AsteroidType,
    size: AsteroidSize,
    orbital: AsteroidOrbital,
}

impl Asteroid {
    // =========================================================================
    // Constructors
    // =========================================================================

    pub fn create(props: AsteroidProps) -> Result<Self, DomainError> {
        let id = match props.id.clone() {
            Some(raw) => AsteroidId::parse(raw, ErrorCode::InvalidAsteroidValue)?,
            None => AsteroidId::new(),
        };
        Self::build(id, props)
    }

    pub fn rehydrate(props: AsteroidProps) -> Result<Self, DomainError> {
        let raw_id = props.id.clone().ok_or_else(|| {
            DomainError::new(ErrorCode::InvalidAsteroidValue, "Persisted asteroid has no id")
        })?;
        let id = AsteroidId::parse(raw_id, ErrorCode::InvalidAsteroidValue)?;
        Self::build(id, props)
    }

    fn build(id: AsteroidId, props: AsteroidProps) -> Result<Self, DomainError> {
        Ok(Self {
            id,
            system_id: SystemId::parse(props.system_id, ErrorCode::InvalidAsteroidValue)?,
            name: AsteroidName::new(props.name)?,
            asteroid_type: AsteroidType::new(&props.asteroid_type)?,
            size: AsteroidSize::new(&props.size)?,
            orbital: AsteroidOrbital::new(props.orbital)?,
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> &AsteroidId {
        &self.id
    }

    #[inline]
    pub fn system_id(&self) -> &SystemId {
        &self.system_id
    }

    #[inline]
    pub fn name(&self) -> &AsteroidName {
        &self.name
    }

    #[inline]
    pub fn asteroid_type(&self) -> AsteroidType {
        self.asteroid_type
    }

    #[inline]
    pub fn size(&self) -> AsteroidSize {
        self.size
    }

    #[inline]
    pub fn orbital(&self) -> f64 {
        self.orbital.value()
    }

    // =========================================================================
    // Mutation Methods
    // =========================================================================

    pub fn rename(&mut self, name: &str) -> Result<(), DomainError> {
        self.name = AsteroidName::new(name)?;
        Ok(())
    }

    pub fn change_type(&mut self, asteroid_type: &str) -> Result<(), DomainError> {
        self.asteroid_type = AsteroidType::new(asteroid_type)?;
        Ok(())
    }

    pub fn change_size(&mut self, size: &str) -> Result<(), DomainError> {
        self.size = AsteroidSize::new(size)?;
        Ok(())
    }

    pub fn change_orbital(&mut self, orbital: f64) -> Result<(), DomainError> {
        self.orbital = AsteroidOrbital::new(orbital)?;
        Ok(())
    }

    // =========================================================================
    // Snapshot
    // =========================================================================

    pub fn to_snapshot(&self) -> AsteroidSnapshot {
        AsteroidSnapshot {
            id: self.id.to_string(),
            system_id: self.system_id.to_string(),
            name: self.name.to_string(),
            asteroid_type: self.asteroid_type,
            size: self.size,
            orbital: self.orbital.value(),
        }
    }
}

impl Serialize for Asteroid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_snapshot().serialize(serializer)
    }
}
