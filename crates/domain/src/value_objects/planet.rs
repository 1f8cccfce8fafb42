//! Planet value objects

use super::{NAME_MAX_LENGTH, NAME_MIN_LENGTH};
use crate::error::ErrorCode;

define_text! {
    /// A validated planet name (trimmed, 2-100 chars)
    PlanetName, ErrorCode::InvalidPlanetValue, "Planet name",
    min = NAME_MIN_LENGTH, max = NAME_MAX_LENGTH
}

closed_set! {
    PlanetType, ErrorCode::InvalidPlanetType, "Planet type" {
        Solid => "solid",
        Gas => "gas",
    }
}

closed_set! {
    PlanetSize, ErrorCode::InvalidPlanetSize, "Planet size" {
        Tiny => "tiny",
        Small => "small",
        Medium => "medium",
        Large => "large",
        Giant => "giant",
    }
}

closed_set! {
    /// Dominant surface or atmospheric environment
    PlanetBiome, ErrorCode::InvalidPlanetBiome, "Planet biome" {
        Temperate => "temperate",
        Ocean => "ocean",
        Desert => "desert",
        Tundra => "tundra",
        Jungle => "jungle",
        Toxic => "toxic",
        Volcanic => "volcanic",
        Barren => "barren",
        Radioactive => "radioactive",
    }
}
