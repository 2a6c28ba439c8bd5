//! # one-arrow-gateway
//!
//! REST gateway for a single-pick trifecta betting service.
//!
//! Each race day the prediction API issues at most one trifecta pick per
//! race (first, second and third in exact order). This crate serves race
//! cards, the picks, the recorded outcomes and the statistics derived from
//! them. Races, predictions and results live in the prediction API; the
//! gateway reads them over HTTP and recomputes every derived view on each
//! request.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── RaceService, ResultsService (service/)
//!     ├── Statistics, history, recent form, calendar (domain/)
//!     │
//!     ├── PredictionApi (upstream/)
//!     │
//!     └── Prediction API (HTTP, JSON)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod service;
pub mod upstream;
