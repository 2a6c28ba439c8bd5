//! Recorded race outcomes and result submissions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{FinishOrder, RaceId, ResultId};
use crate::error::GatewayError;

/// Recorded outcome of one race, as returned by the prediction API.
///
/// Created at most once per race and immutable afterwards. `bet_amount` and
/// `return_amount` only carry meaning when `was_purchased` is set; every
/// accessor below treats them as zero otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RaceResult {
    /// Result identifier.
    pub result_id: ResultId,
    /// Race the outcome belongs to.
    pub race_id: RaceId,
    /// Actual finishing order.
    #[serde(flatten)]
    pub finish_order: FinishOrder,
    /// Trifecta payout per 100-unit stake, when known.
    #[serde(default, rename = "payout_trifecta")]
    pub trifecta_payout: Option<i64>,
    /// Whether the recorded pick matched `finish_order` exactly. Judged
    /// upstream.
    pub prediction_hit: bool,
    /// Whether a real bet was placed on the pick.
    #[serde(default, rename = "purchased")]
    pub was_purchased: bool,
    /// Stake, present only for purchased results.
    #[serde(default)]
    pub bet_amount: Option<i64>,
    /// Payout received, present only for purchased results.
    #[serde(default)]
    pub return_amount: Option<i64>,
    /// When the outcome was recorded.
    #[serde(with = "super::timestamp")]
    #[schema(value_type = String, format = DateTime)]
    pub recorded_at: DateTime<Utc>,
    /// Free-form note.
    #[serde(default)]
    pub memo: Option<String>,
}

impl RaceResult {
    /// Stake counted towards investment (zero unless purchased).
    #[must_use]
    pub fn investment(&self) -> i64 {
        if self.was_purchased {
            self.bet_amount.unwrap_or(0)
        } else {
            0
        }
    }

    /// Payout counted towards return (zero unless purchased).
    #[must_use]
    pub fn payback(&self) -> i64 {
        if self.was_purchased {
            self.return_amount.unwrap_or(0)
        } else {
            0
        }
    }

    /// Net result of the bet, `None` when nothing was purchased.
    #[must_use]
    pub fn balance(&self) -> Option<i64> {
        self.was_purchased
            .then(|| self.payback().saturating_sub(self.investment()))
    }
}

/// Body of a result submission forwarded to the prediction API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ResultSubmission {
    /// Race the outcome belongs to.
    pub race_id: RaceId,
    /// Actual finishing order.
    #[serde(flatten)]
    pub finish_order: FinishOrder,
    /// Trifecta payout per 100-unit stake, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payout_trifecta: Option<i64>,
    /// Whether a real bet was placed.
    #[serde(default)]
    pub purchased: bool,
    /// Stake, only with `purchased`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bet_amount: Option<i64>,
    /// Free-form note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

impl ResultSubmission {
    /// Checks the structural shape of the submission.
    ///
    /// Amount plausibility and hit judgement are left to the prediction
    /// API.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidRequest`] when the race id is blank,
    /// the finish order repeats or omits a horse, or a stake is given
    /// without `purchased`.
    pub fn validate(&self) -> Result<(), GatewayError> {
        if self.race_id.as_str().trim().is_empty() {
            return Err(GatewayError::InvalidRequest(
                "race_id must not be empty".to_string(),
            ));
        }
        if !self.finish_order.is_well_formed() {
            return Err(GatewayError::InvalidRequest(format!(
                "finish order {} must name three distinct horse numbers",
                self.finish_order
            )));
        }
        if self.bet_amount.is_some() && !self.purchased {
            return Err(GatewayError::InvalidRequest(
                "bet_amount requires purchased = true".to_string(),
            ));
        }
        Ok(())
    }
}
