//! one-arrow-gateway server entry point.
//!
//! Starts the Axum HTTP server in front of the prediction API.

use std::sync::Arc;

use axum::Router;
use axum::http::StatusCode;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use one_arrow_gateway::api;
use one_arrow_gateway::app_state::AppState;
use one_arrow_gateway::config::{GatewayConfig, LogFormat};
use one_arrow_gateway::upstream::{HttpPredictionApi, PredictionApi};

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = GatewayConfig::from_env()?;
    init_tracing(config.log_format);
    tracing::info!(
        addr = %config.listen_addr,
        upstream = %config.prediction_api_url,
        "starting one-arrow-gateway"
    );

    // Upstream client
    let prediction_api: Arc<dyn PredictionApi> = Arc::new(HttpPredictionApi::new(
        &config.prediction_api_url,
        config.upstream_timeout,
    )?);

    // Build application state
    let app_state = AppState::new(prediction_api, config.results_settings());

    // Build router
    let app = Router::new()
        .merge(api::build_router())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
