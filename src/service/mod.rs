//! Service layer: orchestrates upstream fetches and domain derivations.
//!
//! [`RaceService`] serves race cards and picks; [`ResultsService`] serves
//! statistics and history derived from recorded results.

pub mod race_service;
pub mod results_service;

pub use race_service::{RaceDetail, RaceService};
pub use results_service::{ResultHistory, ResultsService, ResultsSettings};
