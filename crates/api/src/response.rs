//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope. Use [`DataResponse`]
//! instead of ad-hoc `serde_json::json!({ "data": ... })` to get
//! compile-time type safety and consistent serialization.

use serde::Serialize;

use scopetrack_core::paging::Page;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Envelope for paginated lists: the page of records plus the pagination
/// contract fields (total ignores LIMIT/OFFSET; pages is a ceiling).
#[derive(Debug, Serialize)]
pub struct PagedResponse<T: Serialize> {
    pub data: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
    pub pages: i64,
}

impl<T: Serialize> PagedResponse<T> {
    /// Assemble the envelope from a fetched page and its total match count.
    pub fn new(data: Vec<T>, page: Page, total: i64) -> Self {
        Self {
            data,
            total,
            page: page.page,
            per_page: page.per_page,
            pages: page.pages_for(total),
        }
    }
}
