//! Data Transfer Objects for REST request/response serialization.
//!
//! Domain records are serialized as-is; this module only holds query
//! parameters and list envelopes.

pub mod common_dto;
pub mod race_dto;
pub mod result_dto;

pub use common_dto::*;
pub use race_dto::*;
pub use result_dto::*;
