//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Pagination parameters (`?limit=&offset=`).
///
/// Both are optional; defaults and bounds are applied by
/// [`OffspringPage::from_query`](studbook_core::pagination::OffspringPage::from_query).
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
