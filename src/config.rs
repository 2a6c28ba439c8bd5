//! Gateway configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`).

use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use anyhow::Context;

use crate::service::ResultsSettings;

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format: {other}")),
        }
    }
}

/// Top-level gateway configuration.
///
/// Loaded once at startup via [`GatewayConfig::from_env`].
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:3000`).
    pub listen_addr: SocketAddr,

    /// Base URL of the prediction API.
    pub prediction_api_url: String,

    /// Timeout for a single prediction API request.
    pub upstream_timeout: Duration,

    /// Timeout for a whole gateway request.
    pub request_timeout: Duration,

    /// Number of outcome marks in the stats overview.
    pub recent_results_limit: usize,

    /// Trailing window for recent form, in days.
    pub recent_window_days: u32,

    /// Number of latest outcomes listed in recent form.
    pub recent_hits_limit: usize,

    /// Tracing output format.
    pub log_format: LogFormat,
}

impl GatewayConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to defaults when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` or `LOG_FORMAT` is set but cannot
    /// be parsed.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` or `LOG_FORMAT` is present but
    /// invalid.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr: SocketAddr = lookup("LISTEN_ADDR")
            .unwrap_or_else(|| "0.0.0.0:3000".to_string())
            .parse()
            .context("LISTEN_ADDR must be a socket address")?;

        let prediction_api_url = lookup("PREDICTION_API_URL")
            .unwrap_or_else(|| "http://localhost:8000".to_string());

        let log_format = match lookup("LOG_FORMAT") {
            Some(raw) => raw.parse().map_err(anyhow::Error::msg)?,
            None => LogFormat::default(),
        };

        Ok(Self {
            listen_addr,
            prediction_api_url,
            upstream_timeout: timeout_secs(&lookup, "UPSTREAM_TIMEOUT_SECS", 10),
            request_timeout: timeout_secs(&lookup, "REQUEST_TIMEOUT_SECS", 30),
            recent_results_limit: parse_or(&lookup, "RECENT_RESULTS_LIMIT", 10),
            recent_window_days: parse_or(&lookup, "RECENT_WINDOW_DAYS", 30),
            recent_hits_limit: parse_or(&lookup, "RECENT_HITS_LIMIT", 3),
            log_format,
        })
    }

    /// Display limits handed to the results service.
    #[must_use]
    pub const fn results_settings(&self) -> ResultsSettings {
        ResultsSettings {
            recent_results_limit: self.recent_results_limit,
            recent_window_days: self.recent_window_days,
            recent_hits_limit: self.recent_hits_limit,
        }
    }
}

/// Parses `key` as `T`, returning `default` on missing or invalid values.
fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key).and_then(|v| v.parse().ok()).unwrap_or(default)
}

/// Reads a timeout in whole seconds, never shorter than one second.
fn timeout_secs<F>(lookup: &F, key: &str, default: u64) -> Duration
where
    F: Fn(&str) -> Option<String>,
{
    Duration::from_secs(parse_or(lookup, key, default).max(1))
}
