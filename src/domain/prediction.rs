//! One-arrow trifecta prediction for a race.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{FinishOrder, RaceId};

/// The single trifecta pick the prediction model issued for a race.
///
/// Produced by the external model; this crate only relays it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Prediction {
    /// Upstream prediction identifier.
    pub prediction_id: String,
    /// Race the pick is for.
    pub race_id: RaceId,
    /// When the model issued the pick.
    #[serde(with = "super::timestamp")]
    #[schema(value_type = String, format = DateTime)]
    pub predicted_at: DateTime<Utc>,
    /// Picked finishing order.
    #[serde(flatten)]
    pub pick: FinishOrder,
    /// Model confidence in `[0, 1]`.
    pub confidence: f64,
    /// Version tag of the model that issued the pick.
    pub model_version: String,
}
