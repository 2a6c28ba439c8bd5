//! Recent form: hit rate and average payout over a trailing window.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::statistics::newest_first;
use super::{RaceId, RaceResult, ResultId};

/// A compact line in the recent hits strip.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RecentOutcome {
    /// Result identifier.
    pub result_id: ResultId,
    /// Race identifier.
    pub race_id: RaceId,
    /// When the result was recorded.
    #[schema(value_type = String, format = DateTime)]
    pub recorded_at: DateTime<Utc>,
    /// Actual finishing order, e.g. `"7-9-1"`.
    pub finish_order: String,
    /// Whether the pick matched.
    pub prediction_hit: bool,
    /// Trifecta payout, reported for hits only.
    pub payout: Option<i64>,
}

impl From<&RaceResult> for RecentOutcome {
    fn from(r: &RaceResult) -> Self {
        Self {
            result_id: r.result_id.clone(),
            race_id: r.race_id.clone(),
            recorded_at: r.recorded_at,
            finish_order: r.finish_order.to_string(),
            prediction_hit: r.prediction_hit,
            payout: if r.prediction_hit {
                r.trifecta_payout
            } else {
                None
            },
        }
    }
}

/// Form over the trailing `window_days`.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RecentForm {
    /// Window length in days.
    pub window_days: u32,
    /// Results recorded inside the window.
    pub results_in_window: u64,
    /// Hits recorded inside the window.
    pub hits_in_window: u64,
    /// Hit percentage inside the window, 0 when empty.
    pub hit_rate: f64,
    /// Mean trifecta payout over hits with a known payout, 0 when none.
    pub average_payout: f64,
    /// Newest results regardless of the window, newest first.
    pub latest: Vec<RecentOutcome>,
}

/// Computes recent form as of `now`.
///
/// A result is inside the window when `recorded_at >= now - window_days`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn recent_form(
    results: &[RaceResult],
    now: DateTime<Utc>,
    window_days: u32,
    latest_limit: usize,
) -> RecentForm {
    let since = now - Duration::days(i64::from(window_days));

    let mut in_window = 0u64;
    let mut hits = 0u64;
    let mut payout_sum = 0i64;
    let mut payout_count = 0u64;
    for r in results.iter().filter(|r| r.recorded_at >= since) {
        in_window += 1;
        if r.prediction_hit {
            hits += 1;
            if let Some(payout) = r.trifecta_payout {
                payout_sum = payout_sum.saturating_add(payout);
                payout_count += 1;
            }
        }
    }

    let hit_rate = if in_window == 0 {
        0.0
    } else {
        hits as f64 / in_window as f64 * 100.0
    };
    let average_payout = if payout_count == 0 {
        0.0
    } else {
        payout_sum as f64 / payout_count as f64
    };

    RecentForm {
        window_days,
        results_in_window: in_window,
        hits_in_window: hits,
        hit_rate,
        average_payout,
        latest: newest_first(results)
            .into_iter()
            .take(latest_limit)
            .map(RecentOutcome::from)
            .collect(),
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::race_result::fixtures::{base_time, result};

    fn with_payout(mut r: RaceResult, payout: i64) -> RaceResult {
        r.trifecta_payout = Some(payout);
        r
    }

    #[test]
    fn window_excludes_old_results() {
        let now = base_time() + Duration::days(31);
        let results = vec![
            // 31 days before `now`: outside a 30 day window
            with_payout(result("old", true, 0), 100_000),
            with_payout(result("a", true, 2 * 24 * 60), 74_490),
            with_payout(result("b", true, 3 * 24 * 60), 12_340),
            with_payout(result("c", false, 4 * 24 * 60), 5_600),
        ];

        let form = recent_form(&results, now, 30, 3);
        assert_eq!(form.results_in_window, 3);
        assert_eq!(form.hits_in_window, 2);
        assert!((form.hit_rate - 66.666).abs() < 0.01);
        assert!((form.average_payout - 43_415.0).abs() < f64::EPSILON);

        let ids: Vec<&str> = form.latest.iter().map(|o| o.result_id.as_str()).collect();
        assert_eq!(ids, vec!["c", "b", "a"]);
        let Some(miss) = form.latest.first() else {
            panic!("latest present");
        };
        assert_eq!(miss.payout, None);
        assert_eq!(miss.finish_order, "7-9-1");
    }

    #[test]
    fn empty_window_is_zeroed() {
        let form = recent_form(&[], base_time(), 30, 3);
        assert_eq!(form.results_in_window, 0);
        assert_eq!(form.hit_rate, 0.0);
        assert_eq!(form.average_payout, 0.0);
        assert!(form.latest.is_empty());
    }

    #[test]
    fn hits_without_payout_do_not_skew_average() {
        let results = vec![
            result("a", true, 0),
            with_payout(result("b", true, 1), 20_000),
        ];
        let form = recent_form(&results, base_time(), 1, 10);
        assert_eq!(form.hits_in_window, 2);
        assert!((form.average_payout - 20_000.0).abs() < f64::EPSILON);
    }
}
