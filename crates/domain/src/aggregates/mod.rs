//! Aggregate roots - the authoritative, invariant-enforcing entities
//!
//! Each aggregate:
//! - Has a unique identity (generated by `create` unless the family's ids
//!   are assigned by storage)
//! - Keeps its fields private and exposes behavior through methods
//! - Is constructed only through `create` or `rehydrate`, both validating
//! - Validates every mutation before committing it, so a rejected mutation
//!   leaves the aggregate untouched
//! - Serializes to a canonical camelCase snapshot
//!
//! | Entry point | Input | Defaults filled |
//! |-------------|-------|-----------------|
//! | `create` | fresh props (plus `now` where time matters) | ids, statuses, flags, timestamps |
//! | `rehydrate` | persisted props, treated as untrusted | ids only where required by shape |

pub mod asteroid;
pub mod donation;
pub mod log;
pub mod metric;
pub mod moon;
pub mod planet;
pub mod star;
pub mod system;
pub mod user;

pub use asteroid::{Asteroid, AsteroidProps, AsteroidSnapshot};
pub use donation::{Donation, DonationProps, DonationSnapshot};
pub use log::{Log, LogProps, LogSnapshot};
pub use metric::{Metric, MetricProps, MetricSnapshot};
pub use moon::{Moon, MoonProps, MoonSnapshot};
pub use planet::{Planet, PlanetProps, PlanetSnapshot};
pub use star::{Star, StarProps, StarSnapshot};
pub use system::{System, SystemProps, SystemSnapshot};
pub use user::{User, UserProps, UserSnapshot};
