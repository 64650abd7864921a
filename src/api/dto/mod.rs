//! Data Transfer Objects for REST request/response serialization.
//!
//! Event payloads use camelCase field names to match the site frontend.

pub mod common_dto;
pub mod event_dto;

pub use common_dto::*;
pub use event_dto::*;
