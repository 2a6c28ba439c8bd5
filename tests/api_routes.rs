//! End-to-end tests of the REST surface over the in-memory prediction API.

#![allow(clippy::panic)]

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::{Value, json};
use tower::ServiceExt;

use one_arrow_gateway::api;
use one_arrow_gateway::app_state::AppState;
use one_arrow_gateway::domain::{
    FinishOrder, Prediction, Race, RaceId, RaceResult, ResultId,
};
use one_arrow_gateway::service::ResultsSettings;
use one_arrow_gateway::upstream::InMemoryPredictionApi;

fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 11, day, hour, 0, 0)
        .single()
        .unwrap_or_default()
}

fn race(id: &str, day: u32, number: u32) -> Race {
    Race {
        race_id: RaceId::new(id),
        date: at(day, 9 + number),
        race_number: number,
        name: format!("Stakes {number}"),
        distance: 1600,
        track_condition: "good".to_string(),
        weather: "fine".to_string(),
        entries: Vec::new(),
    }
}

fn prediction(race_id: &str, pick: FinishOrder, confidence: f64) -> Prediction {
    Prediction {
        prediction_id: format!("p-{race_id}"),
        race_id: RaceId::new(race_id),
        predicted_at: at(9, 8),
        pick,
        confidence,
        model_version: "v2".to_string(),
    }
}

fn recorded(race_id: &str, hit: bool, bet: i64, ret: i64, recorded_at: DateTime<Utc>) -> RaceResult {
    RaceResult {
        result_id: ResultId::new(format!("res-{race_id}")),
        race_id: RaceId::new(race_id),
        finish_order: FinishOrder::new(7, 9, 1),
        trifecta_payout: Some(5200),
        prediction_hit: hit,
        was_purchased: true,
        bet_amount: Some(bet),
        return_amount: Some(ret),
        recorded_at,
        memo: None,
    }
}

/// Day 9 holds two settled races, day 10 two open races with picks and one
/// without.
fn app() -> Router {
    let now = Utc::now();
    let store = InMemoryPredictionApi::seeded(
        vec![
            race("d9-r1", 9, 1),
            race("d9-r2", 9, 2),
            race("d10-r1", 10, 1),
            race("d10-r2", 10, 2),
            race("d10-r3", 10, 3),
        ],
        vec![
            prediction("d9-r1", FinishOrder::new(7, 9, 1), 0.8),
            prediction("d9-r2", FinishOrder::new(1, 2, 3), 0.6),
            prediction("d10-r1", FinishOrder::new(4, 5, 6), 0.55),
            prediction("d10-r2", FinishOrder::new(2, 8, 5), 0.9),
        ],
        vec![
            recorded("d9-r1", true, 100, 5200, now - Duration::hours(2)),
            recorded("d9-r2", false, 100, 0, now - Duration::hours(1)),
        ],
    );
    let state = AppState::new(Arc::new(store), ResultsSettings::default());
    api::build_router().with_state(state)
}

async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => Request::builder().method(method).uri(uri).body(Body::empty()),
    };
    let Ok(request) = request else {
        panic!("request should build");
    };
    let Ok(response) = app.oneshot(request).await else {
        panic!("router is infallible");
    };
    let status = response.status();
    let Ok(bytes) = to_bytes(response.into_body(), 1 << 20).await else {
        panic!("body should be readable");
    };
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

async fn get(uri: &str) -> (StatusCode, Value) {
    send(app(), Method::GET, uri, None).await
}

#[tokio::test]
async fn health_reports_backend() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["backend"], "memory");
}

#[tokio::test]
async fn races_can_be_filtered_by_day() {
    let (status, body) = get("/api/v1/races?date=2025-11-10").await;
    assert_eq!(status, StatusCode::OK);
    let Some(races) = body.as_array() else {
        panic!("expected an array, got {body}");
    };
    assert_eq!(races.len(), 3);

    let (status, body) = get("/api/v1/races").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(5));
}

#[tokio::test]
async fn malformed_date_is_a_bad_request() {
    let (status, body) = get("/api/v1/races?date=10-11-2025").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], 1002);

    let (status, _) = get("/api/v1/races/daily/tomorrow").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn calendar_lists_newest_day_first() {
    let (status, body) = get("/api/v1/races/calendar").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["date"], "2025-11-10");
    assert_eq!(body[0]["race_count"], 3);
    assert_eq!(body[1]["date"], "2025-11-09");
}

#[tokio::test]
async fn daily_card_puts_most_confident_pick_first() {
    let (status, body) = get("/api/v1/races/daily/2025-11-10").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pick_race_id"], "d10-r2");
    assert_eq!(body["races"][0]["race"]["race_id"], "d10-r2");
    assert_eq!(body["races"][1]["race"]["race_id"], "d10-r1");
    assert!(body["races"][2]["prediction"].is_null());
}

#[tokio::test]
async fn race_detail_and_prediction() {
    let (status, body) = get("/api/v1/races/d10-r2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["race"]["name"], "Stakes 2");
    assert_eq!(body["prediction"]["first"], 2);

    let (status, body) = get("/api/v1/predictions/d10-r2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["confidence"], 0.9);
}

#[tokio::test]
async fn missing_race_and_prediction_are_not_found() {
    let (status, body) = get("/api/v1/races/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], 2001);

    let (status, body) = get("/api/v1/predictions/d10-r3").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], 2002);
}

#[tokio::test]
async fn history_filters_and_keeps_full_summary() {
    let (status, body) = get("/api/v1/results?filter=hit").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["filter"], "hit");
    assert_eq!(body["pagination"]["total"], 1);
    assert_eq!(body["data"][0]["race_label"], "1R Stakes 1");
    assert_eq!(body["data"][0]["balance"], 5100);
    assert_eq!(body["summary"]["total_results"], 2);

    let (status, body) = get("/api/v1/results?filter=everything").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], 1001);
}

#[tokio::test]
async fn history_is_paginated_newest_first() {
    let (status, body) = get("/api/v1/results?page=1&per_page=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["total_pages"], 2);
    assert_eq!(body["data"][0]["race_id"], "d9-r2");
}

#[tokio::test]
async fn stats_endpoints_agree() {
    let (status, overview) = get("/api/v1/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(overview["total_races"], 5);
    assert_eq!(overview["max_payout"], 5200);
    assert_eq!(overview["recent_results"], json!(["×", "◯"]));
    assert_eq!(overview["hit_rate"], 50.0);

    let (status, summary) = get("/api/v1/stats/summary").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["profit"], 5000);
    assert_eq!(summary["roi"], 2600.0);
    assert_eq!(summary["total_results"], overview["total_results"]);

    let (status, recent) = get("/api/v1/stats/recent").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(recent["window_days"], 30);
    assert_eq!(recent["results_in_window"], 2);
    assert_eq!(recent["average_payout"], 5200.0);
}

#[tokio::test]
async fn submitting_a_result_updates_statistics() {
    let app = app();
    let submission = json!({
        "race_id": "d10-r2",
        "first": 2,
        "second": 8,
        "third": 5,
        "payout_trifecta": 12_340,
        "purchased": true,
        "bet_amount": 200
    });
    let (status, body) = send(app.clone(), Method::POST, "/api/v1/results", Some(submission)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["prediction_hit"], true);
    assert_eq!(body["return_amount"], 24_680);

    let (status, summary) = send(app, Method::GET, "/api/v1/stats/summary", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["total_results"], 3);
    assert_eq!(summary["hit_count"], 2);
}

#[tokio::test]
async fn invalid_and_rejected_submissions() {
    let app = app();
    let repeated = json!({ "race_id": "d10-r1", "first": 4, "second": 4, "third": 6 });
    let (status, body) = send(app.clone(), Method::POST, "/api/v1/results", Some(repeated)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], 1001);

    let unpredicted = json!({ "race_id": "d10-r3", "first": 1, "second": 2, "third": 3 });
    let (status, body) = send(app.clone(), Method::POST, "/api/v1/results", Some(unpredicted)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], 4001);

    let settled = json!({ "race_id": "d9-r1", "first": 7, "second": 9, "third": 1 });
    let (status, body) = send(app, Method::POST, "/api/v1/results", Some(settled)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["details"], "upstream status 409");
}
