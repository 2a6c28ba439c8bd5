//! Statistics handlers.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;

use crate::app_state::AppState;
use crate::domain::{RecentForm, ResultsOverview, StatisticsSummary};
use crate::error::{ErrorResponse, GatewayError};

/// `GET /stats` — Dashboard overview.
///
/// # Errors
///
/// Propagates upstream failures.
#[utoipa::path(
    get,
    path = "/api/v1/stats",
    tag = "Statistics",
    summary = "Results overview",
    description = "Summary statistics plus total races, best trifecta payout and the newest outcome marks (◯ hit, × miss).",
    responses(
        (status = 200, description = "Overview", body = ResultsOverview),
        (status = 502, description = "Prediction API failure", body = ErrorResponse),
    )
)]
pub async fn overview(State(state): State<AppState>) -> Result<impl IntoResponse, GatewayError> {
    Ok(Json(state.results_service.overview().await?))
}

/// `GET /stats/summary` — Aggregate statistics only.
///
/// # Errors
///
/// Propagates upstream failures.
#[utoipa::path(
    get,
    path = "/api/v1/stats/summary",
    tag = "Statistics",
    summary = "Statistics summary",
    description = "Hit rate, purchased hit rate, investment, return, profit and ROI over every recorded result.",
    responses(
        (status = 200, description = "Summary", body = StatisticsSummary),
        (status = 502, description = "Prediction API failure", body = ErrorResponse),
    )
)]
pub async fn summary(State(state): State<AppState>) -> Result<impl IntoResponse, GatewayError> {
    Ok(Json(state.results_service.summary().await?))
}

/// `GET /stats/recent` — Recent form over the trailing window.
///
/// # Errors
///
/// Propagates upstream failures.
#[utoipa::path(
    get,
    path = "/api/v1/stats/recent",
    tag = "Statistics",
    summary = "Recent form",
    description = "Hit rate and average hit payout over the trailing window, plus the latest outcomes.",
    responses(
        (status = 200, description = "Recent form", body = RecentForm),
        (status = 502, description = "Prediction API failure", body = ErrorResponse),
    )
)]
pub async fn recent(State(state): State<AppState>) -> Result<impl IntoResponse, GatewayError> {
    Ok(Json(state.results_service.recent_form(Utc::now()).await?))
}

/// Statistics routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/stats", get(overview))
        .route("/stats/summary", get(summary))
        .route("/stats/recent", get(recent))
}
