//! Star mappers

use serde::{Deserialize, Serialize};
use serde_json::Value;
use starmap_domain::value_objects::Measurements;
use starmap_domain::{DomainError, Star, StarProps};

use super::{decode_payload, traced};

const FAMILY: &str = "star";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StarApi {
    pub id: String,
    pub system_id: String,
    pub name: String,
    pub star_type: String,
    pub star_class: String,
    pub surface_temperature: f64,
    pub color: String,
    pub relative_mass: f64,
    pub absolute_mass: f64,
    pub relative_radius: f64,
    pub absolute_radius: f64,
    pub gravity: f64,
    pub is_main: bool,
    pub orbital: f64,
    pub orbital_starter: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarDto {
    pub id: String,
    pub system_id: String,
    pub name: String,
    pub star_type: String,
    pub star_class: String,
    pub surface_temperature: f64,
    pub color: String,
    pub relative_mass: f64,
    pub absolute_mass: f64,
    pub relative_radius: f64,
    pub absolute_radius: f64,
    pub gravity: f64,
    pub is_main: bool,
    pub orbital: i64,
    pub orbital_starter: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StarView {
    pub id: String,
    pub system_id: String,
    pub name: String,
    pub star_type: String,
    pub star_class: String,
    pub surface_temperature: f64,
    pub color: String,
    pub relative_mass: f64,
    pub absolute_mass: f64,
    pub relative_radius: f64,
    pub absolute_radius: f64,
    pub gravity: f64,
    pub is_main: bool,
    pub orbital: i64,
    pub orbital_starter: i64,
}

pub fn decode_star_api(payload: &Value) -> Result<StarApi, DomainError> {
    decode_payload(FAMILY, payload)
}

pub fn map_star_api_to_domain(api: StarApi) -> Result<Star, DomainError> {
    traced(
        FAMILY,
        Star::create(StarProps {
            id: Some(api.id),
            system_id: api.system_id,
            name: api.name,
            star_type: api.star_type,
            star_class: api.star_class,
            surface_temperature: api.surface_temperature,
            color: api.color,
            measurements: Measurements {
                relative_mass: api.relative_mass,
                absolute_mass: api.absolute_mass,
                relative_radius: api.relative_radius,
                absolute_radius: api.absolute_radius,
                gravity: api.gravity,
            },
            is_main: api.is_main,
            orbital: api.orbital,
            orbital_starter: api.orbital_starter,
        }),
    )
}

pub fn map_star_domain_to_dto(star: &Star) -> StarDto {
    let physical = star.physical();
    StarDto {
        id: star.id().to_string(),
        system_id: star.system_id().to_string(),
        name: star.name().to_string(),
        star_type: star.star_type().to_string(),
        star_class: star.star_class().to_string(),
        surface_temperature: star.surface_temperature(),
        color: star.color().to_string(),
        relative_mass: physical.relative_mass(),
        absolute_mass: physical.absolute_mass(),
        relative_radius: physical.relative_radius(),
        absolute_radius: physical.absolute_radius(),
        gravity: physical.gravity(),
        is_main: star.is_main(),
        orbital: i64::from(star.orbital()),
        orbital_starter: i64::from(star.orbital_starter()),
    }
}

pub fn map_star_domain_to_view(star: &Star) -> StarView {
    let physical = star.physical();
    StarView {
        id: star.id().to_string(),
        system_id: star.system_id().to_string(),
        name: star.name().to_string(),
        star_type: star.star_type().to_string(),
        star_class: star.star_class().to_string(),
        surface_temperature: star.surface_temperature(),
        color: star.color().to_string(),
        relative_mass: physical.relative_mass(),
        absolute_mass: physical.absolute_mass(),
        relative_radius: physical.relative_radius(),
        absolute_radius: physical.absolute_radius(),
        gravity: physical.gravity(),
        is_main: star.is_main(),
        orbital: i64::from(star.orbital()),
        orbital_starter: i64::from(star.orbital_starter()),
    }
}
