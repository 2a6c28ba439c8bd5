//! Result history rows: results annotated for display.

use std::collections::HashMap;

use serde::Serialize;
use utoipa::ToSchema;

use super::statistics::newest_first;
use super::{Race, RaceId, RaceResult, ResultFilter};

/// One row of the result history.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct HistoryEntry {
    /// The recorded result.
    #[serde(flatten)]
    pub result: RaceResult,
    /// `"{race_number}R {name}"`, or `"race {race_id}"` for unknown races.
    pub race_label: String,
    /// `return_amount - bet_amount` for purchased results.
    pub balance: Option<i64>,
}

/// Lists the results passing `filter`, newest first, labelled with their
/// race.
#[must_use]
pub fn history(results: &[RaceResult], races: &[Race], filter: ResultFilter) -> Vec<HistoryEntry> {
    let by_id: HashMap<&RaceId, &Race> = races.iter().map(|r| (&r.race_id, r)).collect();

    newest_first(results)
        .into_iter()
        .filter(|r| filter.matches(r))
        .map(|r| HistoryEntry {
            race_label: by_id
                .get(&r.race_id)
                .map_or_else(|| format!("race {}", r.race_id), |race| race.label()),
            balance: r.balance(),
            result: r.clone(),
        })
        .collect()
}
