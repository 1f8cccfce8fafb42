//! Planet mappers

use serde::{Deserialize, Serialize};
use serde_json::Value;
use starmap_domain::value_objects::Measurements;
use starmap_domain::{DomainError, Planet, PlanetProps};

use super::{decode_payload, traced};

const FAMILY: &str = "planet";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanetApi {
    pub id: String,
    pub system_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub planet_type: String,
    pub size: String,
    pub orbital: f64,
    pub biome: String,
    pub relative_mass: f64,
    pub absolute_mass: f64,
    pub relative_radius: f64,
    pub absolute_radius: f64,
    pub gravity: f64,
    pub temperature: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetDto {
    pub id: String,
    pub system_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub planet_type: String,
    pub size: String,
    pub orbital: i64,
    pub biome: String,
    pub relative_mass: f64,
    pub absolute_mass: f64,
    pub relative_radius: f64,
    pub absolute_radius: f64,
    pub gravity: f64,
    pub temperature: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetView {
    pub id: String,
    pub system_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub planet_type: String,
    pub size: String,
    pub orbital: i64,
    pub biome: String,
    pub relative_mass: f64,
    pub absolute_mass: f64,
    pub relative_radius: f64,
    pub absolute_radius: f64,
    pub gravity: f64,
    pub temperature: f64,
}

pub fn decode_planet_api(payload: &Value) -> Result<PlanetApi, DomainError> {
    decode_payload(FAMILY, payload)
}

pub fn map_planet_api_to_domain(api: PlanetApi) -> Result<Planet, DomainError> {
    traced(
        FAMILY,
        Planet::create(PlanetProps {
            id: Some(api.id),
            system_id: api.system_id,
            name: api.name,
            planet_type: api.planet_type,
            size: api.size,
            orbital: api.orbital,
            biome: api.biome,
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

pub fn map_planet_domain_to_dto(planet: &Planet) -> PlanetDto {
    let physical = planet.physical();
    PlanetDto {
        id: planet.id().to_string(),
        system_id: planet.system_id().to_string(),
        name: planet.name().to_string(),
        planet_type: planet.planet_type().to_string(),
        size: planet.size().to_string(),
        orbital: i64::from(planet.orbital()),
        biome: planet.biome().to_string(),
        relative_mass: physical.relative_mass(),
        absolute_mass: physical.absolute_mass(),
        relative_radius: physical.relative_radius(),
        absolute_radius: physical.absolute_radius(),
        gravity: physical.gravity(),
        temperature: planet.temperature(),
    }
}

pub fn map_planet_domain_to_view(planet: &Planet) -> PlanetView {
    let physical = planet.physical();
    PlanetView {
        id: planet.id().to_string(),
        system_id: planet.system_id().to_string(),
        name: planet.name().to_string(),
        planet_type: planet.planet_type().to_string(),
        size: planet.size().to_string(),
        orbital: i64::from(planet.orbital()),
        biome: planet.biome().to_string(),
        relative_mass: physical.relative_mass(),
        absolute_mass: physical.absolute_mass(),
        relative_radius: physical.relative_radius(),
        absolute_radius: physical.absolute_radius(),
        gravity: physical.gravity(),
        temperature: planet.temperature(),
    }
}
