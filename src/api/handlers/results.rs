//! Result handlers: history listing and result submission.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{HistoryQuery, ResultHistoryResponse};
use crate::app_state::AppState;
use crate::domain::{RaceResult, ResultFilter, ResultSubmission};
use crate::error::{ErrorResponse, GatewayError};

/// `GET /results` — Paginated result history.
///
/// # Errors
///
/// Returns [`GatewayError::InvalidRequest`] for an unknown filter and
/// propagates upstream failures.
#[utoipa::path(
    get,
    path = "/api/v1/results",
    tag = "Results",
    summary = "Result history",
    description = "Lists recorded results newest first with race label and bet balance. The summary always covers every result.",
    params(HistoryQuery),
    responses(
        (status = 200, description = "Paginated history", body = ResultHistoryResponse),
        (status = 400, description = "Unknown filter", body = ErrorResponse),
        (status = 502, description = "Prediction API failure", body = ErrorResponse),
    )
)]
pub async fn list_results(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<impl IntoResponse, GatewayError> {
    let filter: ResultFilter = query.filter.as_deref().unwrap_or_default().parse()?;
    let history = state.results_service.history(filter).await?;
    let (data, pagination) = query.pagination().paginate(history.entries);

    Ok(Json(ResultHistoryResponse {
        data,
        pagination,
        filter,
        summary: history.summary,
    }))
}

/// `POST /results` — Record the outcome of a race.
///
/// # Errors
///
/// Returns [`GatewayError::InvalidRequest`] for malformed submissions,
/// [`GatewayError::RaceNotFound`] for unknown races and
/// [`GatewayError::SubmissionRejected`] when the prediction API refuses it.
#[utoipa::path(
    post,
    path = "/api/v1/results",
    tag = "Results",
    summary = "Submit a result",
    description = "Forwards the finishing order and bet to the prediction API, which judges the hit and computes the return.",
    request_body = ResultSubmission,
    responses(
        (status = 201, description = "Result recorded", body = RaceResult),
        (status = 400, description = "Malformed submission", body = ErrorResponse),
        (status = 404, description = "Race not found", body = ErrorResponse),
        (status = 422, description = "Rejected by the prediction API", body = ErrorResponse),
        (status = 502, description = "Prediction API failure", body = ErrorResponse),
    )
)]
pub async fn submit_result(
    State(state): State<AppState>,
    Json(submission): Json<ResultSubmission>,
) -> Result<impl IntoResponse, GatewayError> {
    let result = state.results_service.submit(&submission).await?;
    Ok((StatusCode::CREATED, Json(result)))
}

/// Result routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/results", get(list_results).post(submit_result))
}
