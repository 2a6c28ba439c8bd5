//! REST endpoint handlers organized by resource.

pub mod races;
pub mod results;
pub mod stats;
pub mod system;

use axum::Router;

use crate::app_state::AppState;

/// Composes all resource routes under `/api/v1`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(races::routes())
        .merge(results::routes())
        .merge(stats::routes())
}
