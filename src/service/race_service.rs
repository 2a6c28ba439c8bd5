//! Race service: race listings, calendar, daily card and race detail.

use std::sync::Arc;

use chrono::NaiveDate;
use futures_util::future::join_all;
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{
    CardEntry, DailyCard, Prediction, Race, RaceDay, RaceId, daily_card, group_by_day,
};
use crate::error::GatewayError;
use crate::upstream::PredictionApi;

/// A race card together with its pick.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RaceDetail {
    /// Race with entries ordered by horse number.
    pub race: Race,
    /// The one-arrow pick, if issued.
    pub prediction: Option<Prediction>,
}

/// Read-only orchestration over races and predictions.
#[derive(Debug, Clone)]
pub struct RaceService {
    api: Arc<dyn PredictionApi>,
}

impl RaceService {
    /// Creates a new `RaceService`.
    #[must_use]
    pub fn new(api: Arc<dyn PredictionApi>) -> Self {
        Self { api }
    }

    /// Lists races, optionally for one day.
    ///
    /// # Errors
    ///
    /// Propagates upstream failures.
    pub async fn list_races(&self, date: Option<NaiveDate>) -> Result<Vec<Race>, GatewayError> {
        self.api.list_races(date).await
    }

    /// Groups every known race by day, newest day first.
    ///
    /// # Errors
    ///
    /// Propagates upstream failures.
    pub async fn calendar(&self) -> Result<Vec<RaceDay>, GatewayError> {
        Ok(group_by_day(self.api.list_races(None).await?))
    }

    /// Builds the card for `date`: every race with its pick, most
    /// confident first.
    ///
    /// Predictions are fetched concurrently. A prediction that fails to
    /// load is shown as absent rather than failing the whole card.
    ///
    /// # Errors
    ///
    /// Propagates upstream failures of the race listing.
    pub async fn daily_card(&self, date: NaiveDate) -> Result<DailyCard, GatewayError> {
        let races = self.api.list_races(Some(date)).await?;
        let predictions = join_all(races.iter().map(|r| self.api.get_prediction(&r.race_id))).await;

        let entries = races
            .into_iter()
            .zip(predictions)
            .map(|(race, prediction)| {
                let prediction = prediction.unwrap_or_else(|e| {
                    tracing::warn!(race_id = %race.race_id, error = %e, "prediction unavailable");
                    None
                });
                CardEntry { race, prediction }
            })
            .collect();

        let card = daily_card(date, entries);
        tracing::debug!(%date, races = card.races.len(), pick = ?card.pick_race_id, "daily card built");
        Ok(card)
    }

    /// Fetches a race card and its pick.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::RaceNotFound`] for unknown races and
    /// propagates upstream failures.
    pub async fn race_detail(&self, race_id: &RaceId) -> Result<RaceDetail, GatewayError> {
        let (race, prediction) = tokio::join!(
            self.api.get_race(race_id),
            self.api.get_prediction(race_id)
        );
        let mut race = race?;
        race.sort_entries();
        Ok(RaceDetail {
            race,
            prediction: prediction?,
        })
    }

    /// Fetches the pick for a race.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::PredictionNotFound`] when no pick was
    /// issued.
    pub async fn prediction(&self, race_id: &RaceId) -> Result<Prediction, GatewayError> {
        self.api
            .get_prediction(race_id)
            .await?
            .ok_or_else(|| GatewayError::PredictionNotFound(race_id.clone()))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{Entry, FinishOrder, Horse};
    use crate::upstream::InMemoryPredictionApi;
    use chrono::{TimeZone, Utc};

    fn entry(race_id: &str, number: u32) -> Entry {
        Entry {
            entry_id: format!("{race_id}-{number}"),
            race_id: RaceId::new(race_id),
            horse: Horse {
                horse_id: format!("h{number}"),
                name: format!("Horse {number}"),
                age: 4,
                gender: "colt".to_string(),
            },
            gate_number: 1,
            horse_number: number,
            jockey: "Aoki".to_string(),
            weight: 55.0,
            odds: None,
            past_results: Vec::new(),
        }
    }

    fn race(id: &str, number: u32) -> Race {
        Race {
            race_id: RaceId::new(id),
            date: Utc
                .with_ymd_and_hms(2025, 11, 16, 10 + number, 0, 0)
                .single()
                .unwrap_or_default(),
            race_number: number,
            name: format!("Race {number}"),
            distance: 1500,
            track_condition: "good".to_string(),
            weather: "fine".to_string(),
            entries: vec![entry(id, 8), entry(id, 3)],
        }
    }

    fn prediction(race_id: &str, confidence: f64) -> Prediction {
        Prediction {
            prediction_id: format!("p-{race_id}"),
            race_id: RaceId::new(race_id),
            predicted_at: Utc::now(),
            pick: FinishOrder::new(3, 8, 1),
            confidence,
            model_version: "v1".to_string(),
        }
    }

    fn service() -> RaceService {
        let api = InMemoryPredictionApi::seeded(
            vec![race("r1", 1), race("r2", 2), race("r3", 3)],
            vec![prediction("r1", 0.35), prediction("r3", 0.82)],
            Vec::new(),
        );
        RaceService::new(Arc::new(api))
    }

    #[tokio::test]
    async fn daily_card_orders_by_confidence() {
        let Some(date) = NaiveDate::from_ymd_opt(2025, 11, 16) else {
            panic!("valid date");
        };
        let Ok(card) = service().daily_card(date).await else {
            panic!("card should build");
        };
        let order: Vec<&str> = card.races.iter().map(|e| e.race.race_id.as_str()).collect();
        assert_eq!(order, vec!["r3", "r1", "r2"]);
        assert_eq!(card.pick_race_id, Some(RaceId::new("r3")));
    }

    #[tokio::test]
    async fn race_detail_sorts_entries_and_attaches_prediction() {
        let Ok(detail) = service().race_detail(&RaceId::new("r1")).await else {
            panic!("detail should load");
        };
        let numbers: Vec<u32> = detail.race.entries.iter().map(|e| e.horse_number).collect();
        assert_eq!(numbers, vec![3, 8]);
        assert!(detail.prediction.is_some());
    }

    #[tokio::test]
    async fn missing_prediction_is_not_found() {
        let err = service().prediction(&RaceId::new("r2")).await;
        assert!(matches!(err, Err(GatewayError::PredictionNotFound(_))));
    }

    #[tokio::test]
    async fn unknown_race_is_not_found() {
        let err = service().race_detail(&RaceId::new("zz")).await;
        assert!(matches!(err, Err(GatewayError::RaceNotFound(_))));
    }

    #[tokio::test]
    async fn calendar_groups_all_races() {
        let Ok(days) = service().calendar().await else {
            panic!("calendar should load");
        };
        assert_eq!(days.len(), 1);
        assert!(days.iter().all(|d| d.race_count == 3));
    }
}
