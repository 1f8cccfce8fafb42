//! Value objects - Immutable, self-validating wrappers around a single field
//!
//! Every constructor normalises its input (trim, case folding where the
//! domain dictates) and rejects anything invalid with a family-specific
//! [`ErrorCode`](crate::error::ErrorCode). Serde goes through the same
//! constructors so deserialization cannot bypass validation.

#[macro_use]
mod macros;

mod asteroid;
mod context;
mod donation;
mod log;
mod metric;
mod moon;
mod physical;
mod planet;
mod star;
mod system;
mod user;

/// Shortest accepted celestial body name, in characters.
pub const NAME_MIN_LENGTH: usize = 2;
/// Longest accepted celestial body name, in characters.
pub const NAME_MAX_LENGTH: usize = 100;

// Shared building blocks
pub use context::JsonObject;
pub use physical::{Measurements, OrbitalSlot, PhysicalProperties, Temperature};

// Celestial bodies
pub use asteroid::{AsteroidName, AsteroidOrbital, AsteroidSize, AsteroidType};
pub use moon::{MoonName, MoonSize};
pub use planet::{PlanetBiome, PlanetName, PlanetSize, PlanetType};
pub use star::{StarClass, StarColor, StarName, StarType};
pub use system::{SystemName, SystemPosition};

// Accounts and payments
pub use donation::{
    CurrencyCode, DonationStatus, DonationType, Money, PaymentProvider, ProviderReference,
};
pub use user::{Email, PasswordHash, Role, Username, VerificationCode};

// Observability records
pub use log::{HttpMethod, HttpStatusCode, LogCategory, LogLevel, LogMessage, LogSource, LogTag};
pub use metric::{DurationMs, MetricName, MetricSource, MetricTags, MetricType};
