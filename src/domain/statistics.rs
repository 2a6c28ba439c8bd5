//! Statistics aggregator: hit rate, investment, return and ROI over a
//! collection of recorded results.
//!
//! Everything here is a pure function over an already fetched slice of
//! [`RaceResult`]s. Counts and sums are commutative, so input order never
//! affects the summary. Rates are percentages and are returned unrounded.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::RaceResult;

/// Summary metrics derived from a collection of results.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct StatisticsSummary {
    /// Number of recorded results.
    pub total_results: u64,
    /// Results whose pick matched the finishing order.
    pub hit_count: u64,
    /// `hit_count / total_results * 100`, 0 for no results.
    pub hit_rate: f64,
    /// Results with a real bet placed.
    pub purchased_count: u64,
    /// Purchased results that hit.
    pub purchased_hit_count: u64,
    /// `purchased_hit_count / purchased_count * 100`, 0 for no purchases.
    pub purchased_hit_rate: f64,
    /// Sum of stakes over purchased results.
    pub total_investment: i64,
    /// Sum of payouts over purchased results.
    pub total_return: i64,
    /// `total_return - total_investment`.
    pub profit: i64,
    /// `total_return / total_investment * 100`, 0 when nothing was staked.
    pub roi: f64,
}

/// Reduces `results` into a [`StatisticsSummary`].
///
/// Never fails. The empty collection yields the all-zero summary, and the
/// two rates plus ROI are 0 whenever their denominator is not positive.
/// Stakes and payouts on unpurchased results are ignored; absent amounts
/// count as zero. Negative amounts are summed as given.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn summarize<'a, I>(results: I) -> StatisticsSummary
where
    I: IntoIterator<Item = &'a RaceResult>,
{
    let mut summary = StatisticsSummary::default();

    for result in results {
        summary.total_results += 1;
        if result.prediction_hit {
            summary.hit_count += 1;
        }
        if result.was_purchased {
            summary.purchased_count += 1;
            if result.prediction_hit {
                summary.purchased_hit_count += 1;
            }
            summary.total_investment = summary.total_investment.saturating_add(result.investment());
            summary.total_return = summary.total_return.saturating_add(result.payback());
        }
    }

    summary.hit_rate = percentage(summary.hit_count, summary.total_results);
    summary.purchased_hit_rate = percentage(summary.purchased_hit_count, summary.purchased_count);
    summary.profit = summary.total_return.saturating_sub(summary.total_investment);
    summary.roi = if summary.total_investment > 0 {
        summary.total_return as f64 / summary.total_investment as f64 * 100.0
    } else {
        0.0
    };

    summary
}

#[allow(clippy::cast_precision_loss)]
fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// Outcome marker used in the recent results strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum OutcomeMark {
    /// The pick matched.
    #[serde(rename = "◯")]
    Hit,
    /// The pick missed.
    #[serde(rename = "×")]
    Miss,
}

impl From<&RaceResult> for OutcomeMark {
    fn from(result: &RaceResult) -> Self {
        if result.prediction_hit {
            Self::Hit
        } else {
            Self::Miss
        }
    }
}

/// Headline statistics shown on the results dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ResultsOverview {
    /// Aggregate metrics over every recorded result.
    #[serde(flatten)]
    pub summary: StatisticsSummary,
    /// Races known to the prediction API, predicted or not.
    pub total_races: u64,
    /// Highest known trifecta payout among recorded results.
    pub max_payout: i64,
    /// Marks of the newest results, newest first.
    pub recent_results: Vec<OutcomeMark>,
}

/// Builds the dashboard overview.
///
/// `recent_limit` caps the number of outcome marks.
#[must_use]
pub fn overview(results: &[RaceResult], total_races: usize, recent_limit: usize) -> ResultsOverview {
    let max_payout = results
        .iter()
        .map(|r| r.trifecta_payout.unwrap_or(0))
        .max()
        .unwrap_or(0);

    let recent_results = newest_first(results)
        .into_iter()
        .take(recent_limit)
        .map(OutcomeMark::from)
        .collect();

    ResultsOverview {
        summary: summarize(results),
        total_races: total_races as u64,
        max_payout,
        recent_results,
    }
}

/// Returns references to `results` ordered by `recorded_at`, newest first.
///
/// Ties keep their input order.
#[must_use]
pub fn newest_first(results: &[RaceResult]) -> Vec<&RaceResult> {
    let mut sorted: Vec<&RaceResult> = results.iter().collect();
    sorted.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));
    sorted
}
