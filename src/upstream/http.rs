//! HTTP client for the prediction API.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::instrument;

use super::PredictionApi;
use crate::domain::{Prediction, Race, RaceId, RaceResult, ResultSubmission};
use crate::error::GatewayError;

/// [`PredictionApi`] backed by the prediction API's REST endpoints.
#[derive(Debug, Clone)]
pub struct HttpPredictionApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpPredictionApi {
    /// Creates a client for `base_url` (e.g. `http://localhost:8000`) with
    /// a per-request `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Internal`] if the HTTP client cannot be
    /// built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Internal(format!("http client: {e}")))?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// GETs `path` and decodes the JSON body. Any non-success status,
    /// 404 included, is an upstream error.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        let response = self.http.get(self.url(path)).send().await?;
        let response = ensure_success(response, path).await?;
        Ok(response.json::<T>().await?)
    }

    /// GETs a single resource. A 404 yields `Ok(None)`.
    async fn find_json<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, GatewayError> {
        let response = self.http.get(self.url(path)).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = ensure_success(response, path).await?;
        Ok(Some(response.json::<T>().await?))
    }
}

async fn ensure_success(response: Response, path: &str) -> Result<Response, GatewayError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let detail = read_detail(response).await;
    tracing::warn!(%status, path, detail = %detail, "prediction api returned an error");
    Err(GatewayError::Upstream(format!("{status} from {path}")))
}

/// Extracts the `detail` message of an error body, falling back to the raw
/// text.
async fn read_detail(response: Response) -> String {
    let text = response.text().await.unwrap_or_default();
    serde_json::from_str::<serde_json::Value>(&text)
        .ok()
        .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(str::to_string))
        .unwrap_or(text)
}

#[async_trait]
impl PredictionApi for HttpPredictionApi {
    fn backend_tag(&self) -> &'static str {
        "http"
    }

    #[instrument(skip(self))]
    async fn list_races(&self, date: Option<NaiveDate>) -> Result<Vec<Race>, GatewayError> {
        let path = match date {
            Some(d) => format!("/api/races?date={}", d.format("%Y-%m-%d")),
            None => "/api/races".to_string(),
        };
        self.get_json::<Vec<Race>>(&path).await
    }

    #[instrument(skip(self))]
    async fn get_race(&self, race_id: &RaceId) -> Result<Race, GatewayError> {
        self.find_json(&format!("/api/races/{race_id}"))
            .await?
            .ok_or_else(|| GatewayError::RaceNotFound(race_id.clone()))
    }

    #[instrument(skip(self))]
    async fn get_prediction(&self, race_id: &RaceId) -> Result<Option<Prediction>, GatewayError> {
        self.find_json(&format!("/api/predictions/{race_id}")).await
    }

    #[instrument(skip(self))]
    async fn list_results(&self) -> Result<Vec<RaceResult>, GatewayError> {
        let results = self.get_json::<Vec<RaceResult>>("/api/results").await?;
        tracing::debug!(count = results.len(), "fetched results");
        Ok(results)
    }

    #[instrument(skip(self, submission), fields(race_id = %submission.race_id))]
    async fn submit_result(
        &self,
        submission: &ResultSubmission,
    ) -> Result<RaceResult, GatewayError> {
        // The race must exist before a result can be posted.
        self.get_race(&submission.race_id).await?;

        let response = self
            .http
            .post(self.url("/api/results"))
            .json(submission)
            .send()
            .await?;

        let status = response.status();
        if status.is_client_error() {
            let detail = read_detail(response).await;
            return Err(GatewayError::SubmissionRejected {
                status: status.as_u16(),
                detail,
            });
        }
        let response = ensure_success(response, "/api/results").await?;
        Ok(response.json::<RaceResult>().await?)
    }
}
