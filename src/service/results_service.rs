//! Results service: statistics, history, recent form and submissions.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{
    HistoryEntry, RaceResult, RecentForm, ResultFilter, ResultSubmission, ResultsOverview,
    StatisticsSummary, history, overview, recent_form, summarize,
};
use crate::error::GatewayError;
use crate::upstream::PredictionApi;

/// Display limits for the derived result views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultsSettings {
    /// Outcome marks in the overview strip.
    pub recent_results_limit: usize,
    /// Trailing window for recent form, in days.
    pub recent_window_days: u32,
    /// Latest outcomes listed in recent form.
    pub recent_hits_limit: usize,
}

impl Default for ResultsSettings {
    fn default() -> Self {
        Self {
            recent_results_limit: 10,
            recent_window_days: 30,
            recent_hits_limit: 3,
        }
    }
}

/// Filtered history together with the unfiltered summary.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ResultHistory {
    /// Rows passing the filter, newest first.
    pub entries: Vec<HistoryEntry>,
    /// Statistics over every recorded result.
    pub summary: StatisticsSummary,
}

/// Orchestration over recorded results.
///
/// Each read fetches the current results from the prediction API and
/// recomputes the derived view; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct ResultsService {
    api: Arc<dyn PredictionApi>,
    settings: ResultsSettings,
}

impl ResultsService {
    /// Creates a new `ResultsService`.
    #[must_use]
    pub fn new(api: Arc<dyn PredictionApi>, settings: ResultsSettings) -> Self {
        Self { api, settings }
    }

    /// Returns the display limits in use.
    #[must_use]
    pub const fn settings(&self) -> ResultsSettings {
        self.settings
    }

    async fn results(&self) -> Result<Vec<RaceResult>, GatewayError> {
        let results = self.api.list_results().await?;
        tracing::debug!(count = results.len(), backend = self.api.backend_tag(), "results loaded");
        Ok(results)
    }

    /// Aggregate statistics over every recorded result.
    ///
    /// # Errors
    ///
    /// Propagates upstream failures.
    pub async fn summary(&self) -> Result<StatisticsSummary, GatewayError> {
        Ok(summarize(&self.results().await?))
    }

    /// Dashboard overview: summary, race count, best payout, recent marks.
    ///
    /// # Errors
    ///
    /// Propagates upstream failures.
    pub async fn overview(&self) -> Result<ResultsOverview, GatewayError> {
        let (results, races) = tokio::join!(self.api.list_results(), self.api.list_races(None));
        let (results, races) = (results?, races?);
        Ok(overview(
            &results,
            races.len(),
            self.settings.recent_results_limit,
        ))
    }

    /// History rows passing `filter`, newest first.
    ///
    /// # Errors
    ///
    /// Propagates upstream failures.
    pub async fn history(&self, filter: ResultFilter) -> Result<ResultHistory, GatewayError> {
        let (results, races) = tokio::join!(self.api.list_results(), self.api.list_races(None));
        let (results, races) = (results?, races?);
        Ok(ResultHistory {
            entries: history(&results, &races, filter),
            summary: summarize(&results),
        })
    }

    /// Recent form as of `now`.
    ///
    /// # Errors
    ///
    /// Propagates upstream failures.
    pub async fn recent_form(&self, now: DateTime<Utc>) -> Result<RecentForm, GatewayError> {
        let results = self.results().await?;
        Ok(recent_form(
            &results,
            now,
            self.settings.recent_window_days,
            self.settings.recent_hits_limit,
        ))
    }

    /// Checks and forwards a result submission.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidRequest`] for malformed submissions
    /// and propagates upstream rejections.
    pub async fn submit(&self, submission: &ResultSubmission) -> Result<RaceResult, GatewayError> {
        submission.validate()?;
        let result = self.api.submit_result(submission).await?;
        tracing::info!(
            race_id = %result.race_id,
            result_id = %result.result_id,
            hit = result.prediction_hit,
            purchased = result.was_purchased,
            "result recorded"
        );
        Ok(result)
    }
}
