//! Upstream layer: access to the external prediction API.
//!
//! [`PredictionApi`] is the fetch seam between the gateway and the system
//! that owns races, predictions and recorded results. The gateway never
//! stores any of them itself.

pub mod http;
pub mod memory;

pub use http::HttpPredictionApi;
pub use memory::InMemoryPredictionApi;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{Prediction, Race, RaceId, RaceResult, ResultSubmission};
use crate::error::GatewayError;

/// Read (and result-submission) access to the prediction API.
///
/// # Errors
///
/// Every fetch fails with [`GatewayError::Upstream`],
/// [`GatewayError::UpstreamTimeout`] or [`GatewayError::UpstreamDecode`]
/// when the prediction API cannot be used.
#[async_trait]
pub trait PredictionApi: Send + Sync + std::fmt::Debug {
    /// Short tag naming the backend, used in logs and health output.
    fn backend_tag(&self) -> &'static str;

    /// Lists races ordered by start time and race number, optionally
    /// restricted to one calendar day.
    ///
    /// # Errors
    ///
    /// Propagates upstream failures. A missing collection endpoint is an
    /// upstream failure, not an empty list.
    async fn list_races(&self, date: Option<NaiveDate>) -> Result<Vec<Race>, GatewayError>;

    /// Fetches one race card.
    ///
    /// # Errors
    ///
    /// Fails with [`GatewayError::RaceNotFound`] for unknown races.
    async fn get_race(&self, race_id: &RaceId) -> Result<Race, GatewayError>;

    /// Fetches the prediction for a race, `None` if none was issued.
    ///
    /// # Errors
    ///
    /// Propagates upstream failures.
    async fn get_prediction(&self, race_id: &RaceId) -> Result<Option<Prediction>, GatewayError>;

    /// Lists every recorded result, newest first.
    ///
    /// # Errors
    ///
    /// Propagates upstream failures.
    async fn list_results(&self) -> Result<Vec<RaceResult>, GatewayError>;

    /// Records the outcome of a race and returns the stored result, with
    /// hit judgement and payout filled in by the prediction API.
    ///
    /// # Errors
    ///
    /// Fails with [`GatewayError::RaceNotFound`] for unknown races and with
    /// [`GatewayError::SubmissionRejected`] when the prediction API refuses
    /// the submission.
    async fn submit_result(
        &self,
        submission: &ResultSubmission,
    ) -> Result<RaceResult, GatewayError>;
}
