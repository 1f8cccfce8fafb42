//! System mappers

use serde::{Deserialize, Serialize};
use serde_json::Value;
use starmap_domain::{DomainError, System, SystemProps};

use super::{decode_payload, traced};

const FAMILY: &str = "system";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SystemApi {
    pub id: String,
    pub galaxy_id: String,
    pub name: String,
    pub position_x: f64,
    pub position_y: f64,
    pub position_z: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemDto {
    pub id: String,
    pub galaxy_id: String,
    pub name: String,
    pub position_x: f64,
    pub position_y: f64,
    pub position_z: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PositionView {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemView {
    pub id: String,
    pub galaxy_id: String,
    pub name: String,
    pub position: PositionView,
}

pub fn decode_system_api(payload: &Value) -> Result<SystemApi, DomainError> {
    decode_payload(FAMILY, payload)
}

pub fn map_system_api_to_domain(api: SystemApi) -> Result<System, DomainError> {
    traced(
        FAMILY,
        System::create(SystemProps {
            id: Some(api.id),
            galaxy_id: api.galaxy_id,
            name: api.name,
            position_x: api.position_x,
            position_y: api.position_y,
            position_z: api.position_z,
        }),
    )
}

pub fn map_system_domain_to_dto(system: &System) -> SystemDto {
    let position = system.position();
    SystemDto {
        id: system.id().to_string(),
        galaxy_id: system.galaxy_id().to_string(),
        name: system.name().to_string(),
        position_x: position.x(),
        position_y: position.y(),
        position_z: position.z(),
    }
}

pub fn map_system_domain_to_view(system: &System) -> SystemView {
    let position = system.position();
    SystemView {
        id: system.id().to_string(),
        galaxy_id: system.galaxy_id().to_string(),
        name: system.name().to_string(),
        position: PositionView {
            x: position.x(),
            y: position.y(),
            z: position.z(),
        },
    }
}
