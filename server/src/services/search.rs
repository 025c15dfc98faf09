//! Template search with pagination.

use crate::model::{Page, Template};
use crate::store::{Storage, StoreError};

/// Items per page when the caller does not ask for a limit.
pub const DEFAULT_PAGE_LIMIT: i64 = 10;

/// Upper bound on the page size a caller can request.
pub const MAX_PAGE_LIMIT: i64 = 100;

/// Normalize raw pagination parameters: page is 1-based with a floor of 1,
/// limit defaults to [`DEFAULT_PAGE_LIMIT`] and is clamped to
/// `[1, MAX_PAGE_LIMIT]`.
#[must_use]
pub fn clamp_pagination(page: Option<i64>, limit: Option<i64>) -> (i64, i64) {
    let page = page.unwrap_or(1).max(1);
    let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT).clamp(1, MAX_PAGE_LIMIT);
    (page, limit)
}

/// Case-insensitive substring search over title and description.
///
/// An empty query matches everything, which makes the endpoint double as a
/// paginated listing.
///
/// # Errors
///
/// Propagates storage failures.
pub async fn search_templates(
    storage: &dyn Storage,
    query: &str,
    page: i64,
    limit: i64,
) -> Result<Page<Template>, StoreError> {
    let offset = (page - 1) * limit;
    let (data, total) = if query.trim().is_empty() {
        storage.list_templates(offset, limit).await?
    } else {
        storage.search_templates(query.trim(), offset, limit).await?
    };
    Ok(Page { data, total, page, limit })
}

#[cfg(test)]
#[path = "search_test.rs"]
mod tests;
