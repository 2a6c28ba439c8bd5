//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::{RaceService, ResultsService, ResultsSettings};
use crate::upstream::PredictionApi;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Race listings, calendar, daily card and detail.
    pub race_service: Arc<RaceService>,
    /// Result statistics, history and submissions.
    pub results_service: Arc<ResultsService>,
    /// Short name of the prediction API backend, reported by `/health`.
    pub backend: &'static str,
}

impl AppState {
    /// Builds both services over one prediction API handle.
    #[must_use]
    pub fn new(api: Arc<dyn PredictionApi>, settings: ResultsSettings) -> Self {
        Self {
            backend: api.backend_tag(),
            race_service: Arc::new(RaceService::new(Arc::clone(&api))),
            results_service: Arc::new(ResultsService::new(api, settings)),
        }
    }
}
