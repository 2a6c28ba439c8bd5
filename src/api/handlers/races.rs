//! Race handlers: listing, calendar, daily card and race detail.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{RacesQuery, parse_date};
use crate::app_state::AppState;
use crate::domain::{DailyCard, Prediction, Race, RaceDay, RaceId};
use crate::error::{ErrorResponse, GatewayError};
use crate::service::RaceDetail;

/// `GET /races` — List races, optionally for a single day.
///
/// # Errors
///
/// Returns [`GatewayError::InvalidDate`] for a malformed `date` and
/// propagates upstream failures.
#[utoipa::path(
    get,
    path = "/api/v1/races",
    tag = "Races",
    summary = "List races",
    description = "Returns every race known to the prediction API ordered by start time, or only the races of `date`.",
    params(RacesQuery),
    responses(
        (status = 200, description = "Race list", body = Vec<Race>),
        (status = 400, description = "Malformed date", body = ErrorResponse),
        (status = 502, description = "Prediction API failure", body = ErrorResponse),
    )
)]
pub async fn list_races(
    State(state): State<AppState>,
    Query(query): Query<RacesQuery>,
) -> Result<impl IntoResponse, GatewayError> {
    let date = query.date.as_deref().map(parse_date).transpose()?;
    let races = state.race_service.list_races(date).await?;
    Ok(Json(races))
}

/// `GET /races/calendar` — Races grouped by day.
///
/// # Errors
///
/// Propagates upstream failures.
#[utoipa::path(
    get,
    path = "/api/v1/races/calendar",
    tag = "Races",
    summary = "Race calendar",
    description = "Groups every known race by calendar day, newest day first, races ordered by number within a day.",
    responses(
        (status = 200, description = "Race days", body = Vec<RaceDay>),
        (status = 502, description = "Prediction API failure", body = ErrorResponse),
    )
)]
pub async fn calendar(State(state): State<AppState>) -> Result<impl IntoResponse, GatewayError> {
    Ok(Json(state.race_service.calendar().await?))
}

/// `GET /races/daily/{date}` — Daily card with picks.
///
/// # Errors
///
/// Returns [`GatewayError::InvalidDate`] for a malformed date and
/// propagates upstream failures of the race listing.
#[utoipa::path(
    get,
    path = "/api/v1/races/daily/{date}",
    tag = "Races",
    summary = "Daily card",
    description = "Returns the races of one day with their picks, most confident pick first. `pick_race_id` names the race to bet on.",
    params(("date" = String, Path, description = "Day as YYYY-MM-DD")),
    responses(
        (status = 200, description = "Daily card", body = DailyCard),
        (status = 400, description = "Malformed date", body = ErrorResponse),
        (status = 502, description = "Prediction API failure", body = ErrorResponse),
    )
)]
pub async fn daily(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<impl IntoResponse, GatewayError> {
    let date = parse_date(&date)?;
    Ok(Json(state.race_service.daily_card(date).await?))
}

/// `GET /races/{race_id}` — Race card with entries and pick.
///
/// # Errors
///
/// Returns [`GatewayError::RaceNotFound`] for unknown races.
#[utoipa::path(
    get,
    path = "/api/v1/races/{race_id}",
    tag = "Races",
    summary = "Race detail",
    description = "Returns the race, its entries ordered by horse number, and the pick when one was issued.",
    params(("race_id" = String, Path, description = "Race identifier")),
    responses(
        (status = 200, description = "Race detail", body = RaceDetail),
        (status = 404, description = "Race not found", body = ErrorResponse),
        (status = 502, description = "Prediction API failure", body = ErrorResponse),
    )
)]
pub async fn race_detail(
    State(state): State<AppState>,
    Path(race_id): Path<String>,
) -> Result<impl IntoResponse, GatewayError> {
    let race_id = RaceId::new(race_id);
    Ok(Json(state.race_service.race_detail(&race_id).await?))
}

/// `GET /predictions/{race_id}` — The pick for a race.
///
/// # Errors
///
/// Returns [`GatewayError::PredictionNotFound`] when no pick was issued.
#[utoipa::path(
    get,
    path = "/api/v1/predictions/{race_id}",
    tag = "Races",
    summary = "Race prediction",
    description = "Returns the trifecta pick issued for a race.",
    params(("race_id" = String, Path, description = "Race identifier")),
    responses(
        (status = 200, description = "Prediction", body = Prediction),
        (status = 404, description = "No prediction for the race", body = ErrorResponse),
        (status = 502, description = "Prediction API failure", body = ErrorResponse),
    )
)]
pub async fn prediction(
    State(state): State<AppState>,
    Path(race_id): Path<String>,
) -> Result<impl IntoResponse, GatewayError> {
    let race_id = RaceId::new(race_id);
    Ok(Json(state.race_service.prediction(&race_id).await?))
}

/// Race routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/races", get(list_races))
        .route("/races/calendar", get(calendar))
        .route("/races/daily/{date}", get(daily))
        .route("/races/{race_id}", get(race_detail))
        .route("/predictions/{race_id}", get(prediction))
}
