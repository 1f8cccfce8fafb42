//! Star aggregate - A star of a system, with its spectral classification
//!
//! The classification (type, class and colour) is validated as a unit: the
//! class must be allowed for the type and the colour must be the one the
//! class dictates. See [`StarType::allowed_classes`] and [`StarClass::color`].

use serde::{Serialize, Serializer};

use crate::error::{DomainError, ErrorCode};
use crate::ids::{StarId, SystemId};
use crate::value_objects::{
    Measurements, OrbitalSlot, PhysicalProperties, StarClass, StarColor, StarName, StarType,
    Temperature,
};

/// Lowest slot any star may hold. Slot 0 belongs to the main star; a star
/// demoted there keeps it until it is moved, so demotion and relocation can
/// happen as two separate steps.
pub const STAR_MIN_ORBITAL: u32 = 0;
/// Bodies around a star start at slot 1 at the earliest.
pub const STAR_MIN_ORBITAL_STARTER: u32 = 1;

#[derive(Debug, Clone, PartialEq)]
pub struct StarProps {
    pub id: Option<String>,
    pub system_id: String,
    pub name: String,
    pub star_type: String,
    pub star_class: String,
    pub surface_temperature: f64,
    pub color: String,
    pub measurements: Measurements,
    pub is_main: bool,
    pub orbital: f64,
    pub orbital_starter: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StarSnapshot {
    pub id: String,
    pub system_id: String,
    pub name: String,
    pub star_type: StarType,
    pub star_class: StarClass,
    pub surface_temperature: f64,
    pub color: StarColor,
    #[serde(flatten)]
    pub measurements: Measurements,
    pub is_main: bool,
    pub orbital: u32,
    pub orbital_starter: u32,
}

/// Validated type, class and colour of a star.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Classification {
    star_type: StarType,
    star_class: StarClass,
    color: StarColor,
}

impl Classification {
    /// Class is checked against the type before colour is checked against
    /// the class.
    fn new(star_type: &str, star_class: &str, color: &str) -> Result<Self, DomainError> {
        let star_type = StarType::new(star_type)?;
        let star_class = StarClass::new(star_class)?;
        if !star_type.allows(star_class) {
            let allowed: Vec<&str> = star_type
                .allowed_classes()
                .iter()
                .map(|class| class.as_str())
                .collect();
            return Err(DomainError::new(
                ErrorCode::InvalidStarClass,
                format!(
                    "Class {star_class} is not valid for a {star_type} (allowed: {})",
                    allowed.join(", ")
                ),
            ));
        }
        let color = StarColor::new(color)?;
        if color != star_class.color() {
            return Err(DomainError::new(
                ErrorCode::InvalidStarColor,
                format!(
                    "Class {star_class} stars are {}, not {color}",
                    star_class.color()
                ),
            ));
        }
        Ok(Self {
            star_type,
            star_class,
            color,
        })
    }
}

/// A star.
///
/// # Invariants
///
/// - `star_class` is allowed for `star_type`, and `color` matches the class
/// - `surface_temperature` is strictly positive
/// - a main star sits at orbital 0
/// - `orbital_starter` >= 1
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    id: StarId,
    system_id: SystemId,
    name: StarName,
    classification: Classification,
    surface_temperature: Temperature,
    physical: PhysicalProperties,
    is_main: bool,
    orbital: OrbitalSlot,
    orbital_starter: OrbitalSlot,
}

impl Star {
    // =========================================================================
    // Constructors
    // =========================================================================

    pub fn create(props: StarProps) -> Result<Self, DomainError> {
        let id = match props.id.clone() {
            Some(raw) => StarId::parse(raw, ErrorCode::InvalidStarValue)?,
            None => StarId::new(),
        };
        Self::build(id, props)
    }

    pub fn rehydrate(props: StarProps) -> Result<Self, DomainError> {
        let raw_id = props.id.clone().ok_or_else(|| {
            DomainError::new(ErrorCode::InvalidStarValue, "Persisted star has no id")
        })?;
        let id = StarId::parse(raw_id, ErrorCode::InvalidStarValue)?;
        Self::build(id, props)
    }

    fn build(id: StarId, props: StarProps) -> Result<Self, DomainError> {
        let system_id = SystemId::parse(props.system_id, ErrorCode::InvalidStarValue)?;
        let name = StarName::new(props.name)?;
        let classification =
            Classification::new(&props.star_type, &props.star_class, &props.color)?;
        let surface_temperature = surface_temperature(props.surface_temperature)?;
        let physical = PhysicalProperties::new(props.measurements, ErrorCode::InvalidStarValue)?;
        let orbital = star_orbital(props.orbital)?;
        ensure_main_orbital(props.is_main, orbital)?;
        let orbital_starter = starter_slot(props.orbital_starter)?;

        Ok(Self {
            id,
            system_id,
            name,
            classification,
            surface_temperature,
            physical,
            is_main: props.is_main,
            orbital,
            orbital_starter,
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> &StarId {
        &self.id
    }

    #[inline]
    pub fn system_id(&self) -> &SystemId {
        &self.system_id
    }

    #[inline]
    pub fn name(&self) -> &StarName {
        &self.name
    }

    #[inline]
    pub fn star_type(&self) -> StarType {
        self.classification.star_type
    }

    #[inline]
    pub fn star_class(&self) -> StarClass {
        self.classification.star_class
    }

    #[inline]
    pub fn color(&self) -> StarColor {
        self.classification.color
    }

    #[inline]
    pub fn surface_temperature(&self) -> f64 {
        self.surface_temperature.kelvin()
    }

    #[inline]
    pub fn physical(&self) -> &PhysicalProperties {
        &self.physical
    }

    #[inline]
    pub fn is_main(&self) -> bool {
        self.is_main
    }

    #[inline]
    pub fn orbital(&self) -> u32 {
        self.orbital.value()
    }

    #[inline]
    pub fn orbital_starter(&self) -> u32 {
        self.orbital_starter.value()
    }

    // =========================================================================
    // Mutation Methods
    // =========================================================================

    pub fn rename(&mut self, name: &str) -> Result<(), DomainError> {
        self.name = StarName::new(name)?;
        Ok(())
    }

    /// Promote or demote the star. Promotion requires orbital 0.
    pub fn change_main_status(&mut self, is_main: bool) -> Result<(), DomainError> {
        ensure_main_orbital(is_main, self.orbital)?;
        self.is_main = is_main;
        Ok(())
    }

    pub fn change_orbital(&mut self, orbital: f64) -> Result<(), DomainError> {
        let orbital = star_orbital(orbital)?;
        ensure_main_orbital(self.is_main, orbital)?;
        self.orbital = orbital;
        Ok(())
    }

    pub fn change_orbital_starter(&mut self, orbital_starter: f64) -> Result<(), DomainError> {
        self.orbital_starter = starter_slot(orbital_starter)?;
        Ok(())
    }

    /// Replace type, class and colour together.
    pub fn change_classification(
        &mut self,
        star_type: &str,
        star_class: &str,
        color: &str,
    ) -> Result<(), DomainError> {
        self.classification = Classification::new(star_type, star_class, color)?;
        Ok(())
    }

    // =========================================================================
    // Snapshot
    // =========================================================================

    pub fn to_snapshot(&self) -> StarSnapshot {
        StarSnapshot {
            id: self.id.to_string(),
            system_id: self.system_id.to_string(),
            name: self.name.to_string(),
            star_type: self.classification.star_type,
            star_class: self.classification.star_class,
            surface_temperature: self.surface_temperature.kelvin(),
            color: self.classification.color,
            measurements: self.physical.measurements(),
            is_main: self.is_main,
            orbital: self.orbital.value(),
            orbital_starter: self.orbital_starter.value(),
        }
    }
}

fn surface_temperature(kelvin: f64) -> Result<Temperature, DomainError> {
    let temperature = Temperature::new(kelvin, ErrorCode::InvalidStarValue)?;
    if temperature.kelvin() == 0.0 {
        return Err(DomainError::new(
            ErrorCode::InvalidStarValue,
            "Surface temperature must be greater than 0",
        ));
    }
    Ok(temperature)
}

fn star_orbital(value: f64) -> Result<OrbitalSlot, DomainError> {
    OrbitalSlot::new(value, STAR_MIN_ORBITAL, ErrorCode::InvalidStarValue)
}

fn starter_slot(value: f64) -> Result<OrbitalSlot, DomainError> {
    OrbitalSlot::new(value, STAR_MIN_ORBITAL_STARTER, ErrorCode::InvalidStarValue)
}

fn ensure_main_orbital(is_main: bool, orbital: OrbitalSlot) -> Result<(), DomainError> {
    if is_main && orbital.value() != 0 {
        return Err(DomainError::new(
            ErrorCode::InvalidStarValue,
            format!("A main star must sit at orbital 0, got {}", orbital.value()),
        ));
    }
    Ok(())
}

impl Serialize for Star {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_snapshot().serialize(serializer)
    }
}
