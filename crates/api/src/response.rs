//! Shared response body types for API handlers.
//!
//! Reads return the resource itself; these cover the remaining shapes.

use falcone_core::pagination;
use falcone_core::types::DbId;
use serde::Serialize;

/// `{ "success": true }` returned by deletes and logout.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// `{ "success": true, "id": ... }` returned by the public form endpoints.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub id: DbId,
}

impl CreatedResponse {
    pub fn new(id: DbId) -> Self {
        Self { success: true, id }
    }
}

/// Page metadata for paginated listings.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
}

impl Pagination {
    pub fn new(page: i64, limit: i64, total: i64) -> Self {
        Self {
            page,
            limit,
            total,
            total_pages: pagination::total_pages(total, limit),
        }
    }
}
