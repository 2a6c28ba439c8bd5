//! Type-safe identifiers for races and recorded results.
//!
//! The prediction API issues opaque string identifiers. [`RaceId`] and
//! [`ResultId`] wrap them so a race key cannot be passed where a result key
//! is expected.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Identifier of a race as issued by the prediction API
/// (e.g. `"20251110_05"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct RaceId(String);

impl RaceId {
    /// Wraps an upstream race identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for RaceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for RaceId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Identifier of a recorded race result.
///
/// Generated once by the prediction API when the result is submitted and
/// immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct ResultId(String);

impl ResultId {
    /// Wraps an upstream result identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Creates a fresh random identifier (UUID v4 string).
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResultId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
