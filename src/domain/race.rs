//! Race card records as published by the prediction API.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::RaceId;

/// Basic horse profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Horse {
    /// Upstream horse identifier.
    pub horse_id: String,
    /// Registered name.
    pub name: String,
    /// Age in years.
    pub age: u32,
    /// Sex marker as published (colt, filly, gelding).
    pub gender: String,
}

/// One runner on a race card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Entry {
    /// Upstream entry identifier.
    pub entry_id: String,
    /// Race this entry belongs to.
    pub race_id: RaceId,
    /// Horse profile.
    pub horse: Horse,
    /// Gate (bracket) number.
    pub gate_number: u32,
    /// Horse number, the key used by finish orders.
    pub horse_number: u32,
    /// Jockey name.
    pub jockey: String,
    /// Carried weight in kilograms.
    pub weight: f64,
    /// Win odds, when published.
    #[serde(default)]
    pub odds: Option<f64>,
    /// Finishing positions of the most recent starts, newest first.
    #[serde(default)]
    pub past_results: Vec<u32>,
}

/// A race with its card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Race {
    /// Upstream race identifier.
    pub race_id: RaceId,
    /// Scheduled start.
    #[serde(with = "super::timestamp")]
    #[schema(value_type = String, format = DateTime)]
    pub date: DateTime<Utc>,
    /// Race number within the meeting.
    pub race_number: u32,
    /// Race name.
    pub name: String,
    /// Distance in metres.
    pub distance: u32,
    /// Going as published (firm, good, yielding, heavy).
    pub track_condition: String,
    /// Weather as published.
    pub weather: String,
    /// Runners.
    #[serde(default)]
    pub entries: Vec<Entry>,
}

impl Race {
    /// Display label, e.g. `"5R Kanazawa Sprint"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}R {}", self.race_number, self.name)
    }

    /// Calendar day the race is run on.
    #[must_use]
    pub fn race_day(&self) -> NaiveDate {
        self.date.date_naive()
    }

    /// Orders the card by horse number.
    pub fn sort_entries(&mut self) {
        self.entries.sort_by_key(|e| e.horse_number);
    }
}
