//! Family-dispatched decode -> map -> project

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;
use starmap_domain::DomainError;
use thiserror::Error;

use crate::auth::parse_auth_user_envelope;
use crate::mappers::*;

/// Entity family a payload belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    System,
    Asteroid,
    Planet,
    Moon,
    Star,
    Donation,
    Log,
    Metric,
    User,
    /// Authenticated-user envelope
    Auth,
}

impl Family {
    pub const ALL: &'static [Family] = &[
        Family::System,
        Family::Asteroid,
        Family::Planet,
        Family::Moon,
        Family::Star,
        Family::Donation,
        Family::Log,
        Family::Metric,
        Family::User,
        Family::Auth,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Asteroid => "asteroid",
            Self::Planet => "planet",
            Self::Moon => "moon",
            Self::Star => "star",
            Self::Donation => "donation",
            Self::Log => "log",
            Self::Metric => "metric",
            Self::User => "user",
            Self::Auth => "auth",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which projection of the aggregate to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputShape {
    #[default]
    Dto,
    View,
}

impl OutputShape {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dto => "dto",
            Self::View => "view",
        }
    }
}

impl fmt::Display for OutputShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A family or output shape name that is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error(
        "unknown family '{0}' (expected one of: system, asteroid, planet, moon, star, \
         donation, log, metric, user, auth)"
    )]
    UnknownFamily(String),
    #[error("unknown output shape '{0}' (expected 'dto' or 'view')")]
    UnknownShape(String),
}

impl FromStr for Family {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|family| family.as_str() == normalized)
            .ok_or_else(|| SelectorError::UnknownFamily(s.to_string()))
    }
}

impl FromStr for OutputShape {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dto" => Ok(Self::Dto),
            "view" => Ok(Self::View),
            _ => Err(SelectorError::UnknownShape(s.to_string())),
        }
    }
}

/// Decodes `payload` as the family's API shape, maps it to its aggregate and
/// returns the requested projection as JSON.
///
/// For [`Family::Auth`] the payload is an authenticated-user envelope; the
/// DTO shape is the accepted envelope and the View shape is the user view.
pub fn run(family: Family, payload: &Value, shape: OutputShape) -> Result<Value, DomainError> {
    match family {
        Family::System => {
            let system = map_system_api_to_domain(decode_system_api(payload)?)?;
            project(
                shape,
                || map_system_domain_to_dto(&system),
                || map_system_domain_to_view(&system),
            )
        }
        Family::Asteroid => {
            let asteroid = map_asteroid_api_to_domain(decode_asteroid_api(payload)?)?;
            project(
                shape,
                || map_asteroid_domain_to_dto(&asteroid),
                || map_asteroid_domain_to_view(&asteroid),
            )
        }
        Family::Planet => {
            let planet = map_planet_api_to_domain(decode_planet_api(payload)?)?;
            project(
                shape,
                || map_planet_domain_to_dto(&planet),
                || map_planet_domain_to_view(&planet),
            )
        }
        Family::Moon => {
            let moon = map_moon_api_to_domain(decode_moon_api(payload)?)?;
            project(
                shape,
                || map_moon_domain_to_dto(&moon),
                || map_moon_domain_to_view(&moon),
            )
        }
        Family::Star => {
            let star = map_star_api_to_domain(decode_star_api(payload)?)?;
            project(
                shape,
                || map_star_domain_to_dto(&star),
                || map_star_domain_to_view(&star),
            )
        }
        Family::Donation => {
            let donation = map_donation_api_to_domain(decode_donation_api(payload)?)?;
            project(
                shape,
                || map_donation_domain_to_dto(&donation),
                || map_donation_domain_to_view(&donation),
            )
        }
        Family::Log => {
            let log = map_log_api_to_domain(decode_log_api(payload)?)?;
            project(
                shape,
                || map_log_domain_to_dto(&log),
                || map_log_domain_to_view(&log),
            )
        }
        Family::Metric => {
            let metric = map_metric_api_to_domain(decode_metric_api(payload)?)?;
            project(
                shape,
                || map_metric_domain_to_dto(&metric),
                || map_metric_domain_to_view(&metric),
            )
        }
        Family::User => {
            let user = map_user_api_to_domain(decode_user_api(payload)?)?;
            project(
                shape,
                || map_user_domain_to_dto(&user),
                || map_user_domain_to_view(&user),
            )
        }
        Family::Auth => {
            let envelope = parse_auth_user_envelope(payload)?;
            let user = envelope.user.clone().into_user()?;
            project(shape, || envelope, || map_user_domain_to_view(&user))
        }
    }
}

fn project<D, V>(
    shape: OutputShape,
    dto: impl FnOnce() -> D,
    view: impl FnOnce() -> V,
) -> Result<Value, DomainError>
where
    D: Serialize,
    V: Serialize,
{
    let serialized = match shape {
        OutputShape::Dto => serde_json::to_value(dto()),
        OutputShape::View => serde_json::to_value(view()),
    };
    // Projections only contain string-keyed maps, so this cannot fail for
    // well-formed aggregates.
    serialized
        .map_err(|e| DomainError::invalid_payload(format!("cannot serialize projection: {e}")))
}
