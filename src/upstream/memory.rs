//! In-process stand-in for the prediction API.
//!
//! Holds races, predictions and results in memory and reproduces the
//! prediction API's submission rules: the race and its prediction must
//! exist, only one result is accepted per race, the hit flag compares the
//! pick against the finishing order, and a purchased hit returns
//! `bet_amount / 100 * payout_trifecta`.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use tokio::sync::RwLock;

use super::PredictionApi;
use crate::domain::{Prediction, Race, RaceId, RaceResult, ResultId, ResultSubmission};
use crate::error::GatewayError;

/// Memory-backed [`PredictionApi`].
#[derive(Debug, Default)]
pub struct InMemoryPredictionApi {
    races: RwLock<Vec<Race>>,
    predictions: RwLock<HashMap<RaceId, Prediction>>,
    results: RwLock<Vec<RaceResult>>,
}

impl InMemoryPredictionApi {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-loaded with the given records.
    #[must_use]
    pub fn seeded(races: Vec<Race>, predictions: Vec<Prediction>, results: Vec<RaceResult>) -> Self {
        Self {
            races: RwLock::new(races),
            predictions: RwLock::new(
                predictions
                    .into_iter()
                    .map(|p| (p.race_id.clone(), p))
                    .collect(),
            ),
            results: RwLock::new(results),
        }
    }

    /// Adds or replaces a race.
    pub async fn insert_race(&self, race: Race) {
        let mut races = self.races.write().await;
        races.retain(|r| r.race_id != race.race_id);
        races.push(race);
    }

    /// Adds or replaces the prediction for its race.
    pub async fn insert_prediction(&self, prediction: Prediction) {
        self.predictions
            .write()
            .await
            .insert(prediction.race_id.clone(), prediction);
    }
}

/// Payout for a purchased hit, in whole 100-unit stakes.
fn payback(hit: bool, submission: &ResultSubmission) -> i64 {
    match (hit, submission.purchased, submission.bet_amount, submission.payout_trifecta) {
        (true, true, Some(bet), Some(payout)) => (bet / 100).saturating_mul(payout),
        _ => 0,
    }
}

#[async_trait]
impl PredictionApi for InMemoryPredictionApi {
    fn backend_tag(&self) -> &'static str {
        "memory"
    }

    async fn list_races(&self, date: Option<NaiveDate>) -> Result<Vec<Race>, GatewayError> {
        let mut races: Vec<Race> = self
            .races
            .read()
            .await
            .iter()
            .filter(|r| date.is_none_or(|d| r.race_day() == d))
            .cloned()
            .collect();
        races.sort_by(|a, b| {
            a.date
                .cmp(&b.date)
                .then_with(|| a.race_number.cmp(&b.race_number))
        });
        Ok(races)
    }

    async fn get_race(&self, race_id: &RaceId) -> Result<Race, GatewayError> {
        self.races
            .read()
            .await
            .iter()
            .find(|r| &r.race_id == race_id)
            .cloned()
            .ok_or_else(|| GatewayError::RaceNotFound(race_id.clone()))
    }

    async fn get_prediction(&self, race_id: &RaceId) -> Result<Option<Prediction>, GatewayError> {
        Ok(self.predictions.read().await.get(race_id).cloned())
    }

    async fn list_results(&self) -> Result<Vec<RaceResult>, GatewayError> {
        let mut results = self.results.read().await.clone();
        results.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));
        Ok(results)
    }

    async fn submit_result(
        &self,
        submission: &ResultSubmission,
    ) -> Result<RaceResult, GatewayError> {
        let race_id = &submission.race_id;
        self.get_race(race_id).await?;

        let prediction = self.get_prediction(race_id).await?.ok_or_else(|| {
            GatewayError::SubmissionRejected {
                status: 404,
                detail: format!("no prediction for race {race_id}"),
            }
        })?;

        let mut results = self.results.write().await;
        if results.iter().any(|r| &r.race_id == race_id) {
            return Err(GatewayError::SubmissionRejected {
                status: 409,
                detail: format!("result already recorded for race {race_id}"),
            });
        }

        let hit = prediction.pick == submission.finish_order;
        let result = RaceResult {
            result_id: ResultId::generate(),
            race_id: race_id.clone(),
            finish_order: submission.finish_order,
            trifecta_payout: submission.payout_trifecta,
            prediction_hit: hit,
            was_purchased: submission.purchased,
            bet_amount: submission.bet_amount,
            return_amount: Some(payback(hit, submission)),
            recorded_at: Utc::now(),
            memo: submission.memo.clone(),
        };
        results.push(result.clone());
        Ok(result)
    }
}
