//! History filter selecting which results to list.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::RaceResult;
use crate::error::GatewayError;

/// Which recorded results a history listing shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ResultFilter {
    /// Every result.
    #[default]
    All,
    /// Results whose pick matched.
    Hit,
    /// Results whose pick missed.
    Miss,
    /// Results with a real bet placed.
    Purchased,
}

impl ResultFilter {
    /// Returns `true` if `result` passes the filter.
    #[must_use]
    pub const fn matches(self, result: &RaceResult) -> bool {
        match self {
            Self::All => true,
            Self::Hit => result.prediction_hit,
            Self::Miss => !result.prediction_hit,
            Self::Purchased => result.was_purchased,
        }
    }
}

impl FromStr for ResultFilter {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "all" => Ok(Self::All),
            "hit" => Ok(Self::Hit),
            "miss" => Ok(Self::Miss),
            "purchased" => Ok(Self::Purchased),
            other => Err(GatewayError::InvalidRequest(format!(
                "unknown result filter: {other}"
            ))),
        }
    }
}
