//! Moon mappers

use serde::{Deserialize, Serialize};
use serde_json::Value;
use starmap_domain::value_objects::Measurements;
use starmap_domain::{DomainError, Moon, MoonProps};

use super::{decode_payload, traced};

const FAMILY: &str = "moon";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MoonApi {
    pub id: String,
    pub planet_id: String,
    pub name: String,
    pub size: String,
    pub orbital: f64,
    pub relative_mass: f64,
    pub absolute_mass: f64,
    pub relative_radius: f64,
    pub absolute_radius: f64,
    pub gravity: f64,
    pub temperature: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoonDto {
    pub id: String,
    pub planet_id: String,
    pub name: String,
    pub size: String,
    pub orbital: i64,
    pub relative_mass: f64,
    pub absolute_mass: f64,
    pub relative_radius: f64,
    pub absolute_radius: f64,
    pub gravity: f64,
    pub temperature: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoonView {
    pub id: String,
    pub planet_id: String,
    pub name: String,
    pub size: String,
    pub orbital: i64,
    pub relative_mass: f64,
    pub absolute_mass: f64,
    pub relative_radius: f64,
    pub absolute_radius: f64,
    pub gravity: f64,
    pub temperature: f64,
}

pub fn decode_moon_api(payload: &Value) -> Result<MoonApi, DomainError> {
    decode_payload(FAMILY, payload)
}

pub fn map_moon_api_to_domain(api: MoonApi) -> Result<Moon, DomainError> {
    traced(
        FAMILY,
        Moon::create(MoonProps {
            id: Some(api.id),
            planet_id: api.planet_id,
            name: api.name,
            size: api.size,
            orbital: api.orbital,
            measurements: Measurements {
                relative_mass: api.relative_mass,
                absolute_mass: api.absolute_mass,
                relative_radius: api.relative_radius,
                absolute_radius: api.absolute_radius,
                gravity: api.gravity,
            },
            temperature: api.temperature,
        }),
    )
}

pub fn map_moon_domain_to_dto(moon: &Moon) -> MoonDto {
    let physical = moon.physical();
    MoonDto {
        id: moon.id().to_string(),
        planet_id: moon.planet_id().to_string(),
        name: moon.name().to_string(),
        size: moon.size().to_string(),
        orbital: i64::from(moon.orbital()),
        relative_mass: physical.relative_mass(),
        absolute_mass: physical.absolute_mass(),
        relative_radius: physical.relative_radius(),
        absolute_radius: physical.absolute_radius(),
        gravity: physical.gravity(),
        temperature: moon.temperature(),
    }
}

pub fn map_moon_domain_to_view(moon: &Moon) -> MoonView {
    let physical = moon.physical();
    MoonView {
        id: moon.id().to_string(),
        planet_id: moon.planet_id().to_string(),
        name: moon.name().to_string(),
        size: moon.size().to_string(),
        orbital: i64::from(moon.orbital()),
        relative_mass: physical.relative_mass(),
        absolute_mass: physical.absolute_mass(),
        relative_radius: physical.relative_radius(),
        absolute_radius: physical.absolute_radius(),
        gravity: physical.gravity(),
        temperature: moon.temperature(),
    }
}
