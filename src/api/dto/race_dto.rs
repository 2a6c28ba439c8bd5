//! Race listing DTOs.

use serde::Deserialize;
use utoipa::IntoParams;

/// Query parameters for `GET /races`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RacesQuery {
    /// Restrict to one calendar day (`YYYY-MM-DD`).
    #[serde(default)]
    pub date: Option<String>,
}
