//! Result history DTOs.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::common_dto::{PaginationMeta, PaginationParams, default_page, default_per_page};
use crate::domain::{HistoryEntry, ResultFilter, StatisticsSummary};

/// Query parameters for `GET /results`.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct HistoryQuery {
    /// `all` (default), `hit`, `miss` or `purchased`.
    #[serde(default)]
    pub filter: Option<String>,
    /// Page number (1-indexed). Defaults to 1.
    #[serde(default = "default_page")]
    pub page: u32,
    /// Items per page (max 100). Defaults to 20.
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

impl HistoryQuery {
    /// Pagination part of the query.
    #[must_use]
    pub const fn pagination(&self) -> PaginationParams {
        PaginationParams {
            page: self.page,
            per_page: self.per_page,
        }
    }
}

/// Paginated history response for `GET /results`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ResultHistoryResponse {
    /// History rows on this page, newest first.
    pub data: Vec<HistoryEntry>,
    /// Pagination metadata for the filtered rows.
    pub pagination: PaginationMeta,
    /// Filter that was applied.
    pub filter: ResultFilter,
    /// Statistics over every recorded result, regardless of filter.
    pub summary: StatisticsSummary,
}
