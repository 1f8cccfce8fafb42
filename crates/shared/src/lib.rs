//! Starmap Shared - Boundary shapes and mappers around the domain kernel
//!
//! - [`mappers`]: per-family API, DTO and View structs and the pure
//!   functions translating between them and the domain aggregates
//! - [`auth`]: login/signup request validation and the strict
//!   authenticated-user envelope
//! - [`pipeline`]: family-dispatched "decode, map, project" used by tooling
//!
//! Mapping outcomes are traced with `tracing`; installing a subscriber is
//! left to the binary.

pub mod auth;
pub mod mappers;
pub mod pipeline;

pub use auth::{
    parse_auth_user_envelope, AuthUser, AuthUserEnvelope, LoginRequest, SignupRequest,
};
pub use pipeline::{run, Family, OutputShape, SelectorError};
