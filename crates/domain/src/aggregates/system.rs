//! System aggregate - A star system placed in a galaxy

use serde::{Serialize, Serializer};

use crate::error::{DomainError, ErrorCode};
use crate::ids::{GalaxyId, SystemId};
use crate::value_objects::{SystemName, SystemPosition};

/// Raw input for [`System::create`] and [`System::rehydrate`].
#[derive(Debug, Clone, PartialEq)]
pub struct SystemProps {
    pub id: Option<String>,
    pub galaxy_id: String,
    pub name: String,
    pub position_x: f64,
    pub position_y: f64,
    pub position_z: f64,
}

/// Canonical plain snapshot of a [`System`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemSnapshot {
    pub id: String,
    pub galaxy_id: String,
    pub name: String,
    pub position: SystemPosition,
}

/// A star system.
///
/// # Invariants
///
/// - `name` is trimmed and 2-100 characters (enforced by `SystemName`)
/// - every coordinate of `position` is finite (enforced by `SystemPosition`)
#[derive(Debug, Clone, PartialEq)]
pub struct System {
    id: SystemId,
    galaxy_id: GalaxyId,
    name: SystemName,
    position: SystemPosition,
}

impl System {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Validate props and build a new system, generating an id when absent.
    pub fn create(props: SystemProps) -> Result<Self, DomainError> {
        let id = match props.id.clone() {
            Some(raw) => SystemId::parse(raw, ErrorCode::InvalidSystemValue)?,
            None => SystemId::new(),
        };
        Self::build(id, props)
    }

    /// Rebuild a persisted system. The id is required.
    pub fn rehydrate(props: SystemProps) -> Result<Self, DomainError> {
        let raw_id = props.id.clone().ok_or_else(|| {
            DomainError::new(ErrorCode::InvalidSystemValue, "Persisted system has no id")
        })?;
        let id = SystemId::parse(raw_id, ErrorCode::InvalidSystemValue)?;
        Self::build(id, props)
    }

    fn build(id: SystemId, props: SystemProps) -> Result<Self, DomainError> {
        Ok(Self {
            id,
            galaxy_id: GalaxyId::parse(props.galaxy_id, ErrorCode::InvalidSystemValue)?,
            name: SystemName::new(props.name)?,
            position: SystemPosition::new(props.position_x, props.position_y, props.position_z)?,
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> &SystemId {
        &self.id
    }

    #[inline]
    pub fn galaxy_id(&self) -> &GalaxyId {
        &self.galaxy_id
    }

    #[inline]
    pub fn name(&self) -> &SystemName {
        &self.name
    }

    #[inline]
    pub fn position(&self) -> SystemPosition {
        self.position
    }

    // =========================================================================
    // Mutation Methods
    // =========================================================================

    pub fn rename(&mut self, name: &str) -> Result<(), DomainError> {
        self.name = SystemName::new(name)?;
        Ok(())
    }

    /// Move the system to new coordinates.
    pub fn move_to(&mut self, x: f64, y: f64, z: f64) -> Result<(), DomainError> {
        self.position = SystemPosition::new(x, y, z)?;
        Ok(())
    }

    // =========================================================================
    // Snapshot
    // =========================================================================

    pub fn to_snapshot(&self) -> SystemSnapshot {
        SystemSnapshot {
            id: self.id.to_string(),
            galaxy_id: self.galaxy_id.to_string(),
            name: self.name.to_string(),
            position: self.position,
        }
    }
}

impl Serialize for System {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_snapshot().serialize(serializer)
    }
}
