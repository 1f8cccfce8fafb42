//! Asteroid mappers

use serde::{Deserialize, Serialize};
use serde_json::Value;
use starmap_domain::{Asteroid, AsteroidProps, DomainError};

use super::{decode_payload, traced};

const FAMILY: &str = "asteroid";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AsteroidApi {
    pub id: String,
    pub system_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub asteroid_type: String,
    pub size: String,
    pub orbital: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsteroidDto {
    pub id: String,
    pub system_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub asteroid_type: String,
    pub size: String,
    pub orbital: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AsteroidView {
    pub id: String,
    pub system_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub asteroid_type: String,
    pub size: String,
    pub orbital: f64,
}

pub fn decode_asteroid_api(payload: &Value) -> Result<AsteroidApi, DomainError> {
    decode_payload(FAMILY, payload)
}

pub fn map_asteroid_api_to_domain(api: AsteroidApi) -> Result<Asteroid, DomainError> {
    traced(
        FAMILY,
        Asteroid::create(AsteroidProps {
            id: Some(api.id),
            system_id: api.system_id,
            name: api.name,
            asteroid_type: api.asteroid_type,
            size: api.size,
            orbital: api.orbital,
        }),
    )
}

pub fn map_asteroid_domain_to_dto(asteroid: &Asteroid) -> AsteroidDto {
    AsteroidDto {
        id: asteroid.id().to_string(),
        system_id: asteroid.system_id().to_string(),
        name: asteroid.name().to_string(),
        asteroid_type: asteroid.asteroid_type().to_string(),
        size: asteroid.size().to_string(),
        orbital: asteroid.orbital(),
    }
}

pub fn map_asteroid_domain_to_view(asteroid: &Asteroid) -> AsteroidView {
    AsteroidView {
        id: asteroid.id().to_string(),
        system_id: asteroid.system_id().to_string(),
        name: asteroid.name().to_string(),
        asteroid_type: asteroid.asteroid_type().to_string(),
        size: asteroid.size().to_string(),
        orbital: asteroid.orbital(),
    }
}
