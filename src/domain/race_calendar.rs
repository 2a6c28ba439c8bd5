//! Race calendar and daily card derivations.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use super::{Prediction, Race, RaceId};

/// All races run on one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RaceDay {
    /// Calendar day.
    #[schema(value_type = String, format = Date)]
    pub date: NaiveDate,
    /// Number of races on the day.
    pub race_count: usize,
    /// Races ordered by race number.
    pub races: Vec<Race>,
}

/// Groups races by calendar day, newest day first.
#[must_use]
pub fn group_by_day(races: Vec<Race>) -> Vec<RaceDay> {
    let mut days: BTreeMap<NaiveDate, Vec<Race>> = BTreeMap::new();
    for race in races {
        days.entry(race.race_day()).or_default().push(race);
    }

    days.into_iter()
        .rev()
        .map(|(date, mut races)| {
            races.sort_by_key(|r| r.race_number);
            RaceDay {
                date,
                race_count: races.len(),
                races,
            }
        })
        .collect()
}

/// A race paired with its prediction, if one was issued.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CardEntry {
    /// The race.
    pub race: Race,
    /// The one-arrow pick for the race.
    pub prediction: Option<Prediction>,
}

impl CardEntry {
    fn confidence(&self) -> f64 {
        self.prediction.as_ref().map_or(0.0, |p| p.confidence)
    }
}

/// Every race of a day, most confident pick first.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DailyCard {
    /// Calendar day.
    #[schema(value_type = String, format = Date)]
    pub date: NaiveDate,
    /// Races ordered by prediction confidence, descending.
    pub races: Vec<CardEntry>,
    /// Race holding the day's most confident pick.
    pub pick_race_id: Option<RaceId>,
}

/// Orders a day's races by prediction confidence and names the top pick.
///
/// Races without a prediction count as confidence 0 and keep their relative
/// order.
#[must_use]
pub fn daily_card(date: NaiveDate, mut races: Vec<CardEntry>) -> DailyCard {
    races.sort_by(|a, b| {
        b.confidence()
            .partial_cmp(&a.confidence())
            .unwrap_or(Ordering::Equal)
    });

    let pick_race_id = races
        .iter()
        .find(|entry| entry.prediction.is_some())
        .map(|entry| entry.race.race_id.clone());

    DailyCard {
        date,
        races,
        pick_race_id,
    }
}
