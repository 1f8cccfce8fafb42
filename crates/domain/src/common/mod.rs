//! Common utility functions shared across the domain and mapper crates.
//!
//! Pure functions only: no side effects, no I/O.

pub mod datetime;
pub mod string;

pub use datetime::{
    format_datetime, parse_datetime, parse_field_datetime, parse_optional_field_datetime,
};
pub use string::trimmed_or_none;
pub(crate) use string::char_len;
