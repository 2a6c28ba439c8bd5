//! Gateway error types with HTTP status code mapping.
//!
//! [`GatewayError`] is the central error type for the gateway. Each variant
//! maps to a specific HTTP status code and structured JSON error response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::RaceId;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 2001,
///     "message": "race not found: 20251110_05",
///     "details": null
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code (see [`GatewayError`] code ranges).
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category            | HTTP Status                 |
/// |-----------|---------------------|-----------------------------|
/// | 1000–1999 | Validation          | 400 Bad Request             |
/// | 2000–2999 | Not Found           | 404 Not Found               |
/// | 3000–3999 | Server              | 500 Internal Server Error   |
/// | 4000–4999 | Submission rejected | 422 Unprocessable Entity    |
/// | 5000–5999 | Upstream            | 502 Bad Gateway / 504       |
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Request validation failed.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// A date parameter could not be parsed as `YYYY-MM-DD`.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// Race with the given ID is unknown to the prediction API.
    #[error("race not found: {0}")]
    RaceNotFound(RaceId),

    /// No prediction has been recorded for the race.
    #[error("prediction not found for race {0}")]
    PredictionNotFound(RaceId),

    /// The prediction API refused a result submission.
    #[error("submission rejected by prediction api ({status}): {detail}")]
    SubmissionRejected {
        /// HTTP status returned by the prediction API.
        status: u16,
        /// Detail message returned by the prediction API.
        detail: String,
    },

    /// The prediction API answered with an unexpected status or could not
    /// be reached.
    #[error("prediction api error: {0}")]
    Upstream(String),

    /// The prediction API did not answer within the configured timeout.
    #[error("prediction api timed out")]
    UpstreamTimeout,

    /// The prediction API answered with a body that does not match the
    /// expected shape.
    #[error("prediction api returned malformed data: {0}")]
    UpstreamDecode(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl GatewayError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidRequest(_) => 1001,
            Self::InvalidDate(_) => 1002,
            Self::RaceNotFound(_) => 2001,
            Self::PredictionNotFound(_) => 2002,
            Self::Internal(_) => 3000,
            Self::SubmissionRejected { .. } => 4001,
            Self::Upstream(_) => 5001,
            Self::UpstreamTimeout => 5002,
            Self::UpstreamDecode(_) => 5003,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) | Self::InvalidDate(_) => StatusCode::BAD_REQUEST,
            Self::RaceNotFound(_) | Self::PredictionNotFound(_) => StatusCode::NOT_FOUND,
            Self::SubmissionRejected { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Upstream(_) | Self::UpstreamDecode(_) => StatusCode::BAD_GATEWAY,
            Self::UpstreamTimeout => StatusCode::GATEWAY_TIMEOUT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::UpstreamTimeout
        } else if err.is_decode() {
            Self::UpstreamDecode(err.to_string())
        } else {
            Self::Upstream(err.to_string())
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::warn!(code = self.error_code(), error = %self, "request failed");
        }
        let details = match &self {
            Self::SubmissionRejected { status, .. } => Some(format!("upstream status {status}")),
            _ => None,
        };
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
                details,
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}
