//! OpenAPI document for the REST surface.

use utoipa::OpenApi;

use super::dto::{PaginationMeta, ResultHistoryResponse};
use super::handlers::{races, results, stats, system};
use crate::domain::{
    CardEntry, DailyCard, Entry, FinishOrder, HistoryEntry, Horse, OutcomeMark, Prediction, Race,
    RaceDay, RaceResult, RecentForm, RecentOutcome, ResultFilter, ResultSubmission,
    ResultsOverview, StatisticsSummary,
};
use crate::error::{ErrorBody, ErrorResponse};
use crate::service::RaceDetail;

/// Generated OpenAPI description of every gateway endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "one-arrow-gateway",
        description = "Daily trifecta picks, race cards, result history and betting statistics."
    ),
    paths(
        system::health_handler,
        races::list_races,
        races::calendar,
        races::daily,
        races::race_detail,
        races::prediction,
        results::list_results,
        results::submit_result,
        stats::overview,
        stats::summary,
        stats::recent,
    ),
    components(schemas(
        ErrorResponse,
        ErrorBody,
        Horse,
        Entry,
        Race,
        RaceDay,
        CardEntry,
        DailyCard,
        RaceDetail,
        FinishOrder,
        Prediction,
        RaceResult,
        ResultSubmission,
        ResultFilter,
        HistoryEntry,
        PaginationMeta,
        ResultHistoryResponse,
        StatisticsSummary,
        OutcomeMark,
        ResultsOverview,
        RecentOutcome,
        RecentForm,
    )),
    tags(
        (name = "System", description = "Service health"),
        (name = "Races", description = "Race cards and predictions"),
        (name = "Results", description = "Recorded outcomes"),
        (name = "Statistics", description = "Derived betting statistics"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/health",
            "/api/v1/races",
            "/api/v1/races/calendar",
            "/api/v1/races/daily/{date}",
            "/api/v1/races/{race_id}",
            "/api/v1/predictions/{race_id}",
            "/api/v1/results",
            "/api/v1/stats",
            "/api/v1/stats/summary",
            "/api/v1/stats/recent",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
