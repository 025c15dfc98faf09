//! Template search route.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;

use crate::model::Page;
use crate::routes::templates::{TemplateResponse, to_responses};
use crate::services::search;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// `GET /api/search/templates?q=&page=&limit=` — paginated substring search
/// over title and description.
pub async fn search_templates(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<Page<TemplateResponse>>, StatusCode> {
    let (page, limit) = search::clamp_pagination(params.page, params.limit);
    let found = search::search_templates(state.storage.as_ref(), &params.q, page, limit)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let data = to_responses(state.storage.as_ref(), found.data).await?;
    Ok(Json(Page { data, total: found.total, page: found.page, limit: found.limit }))
}

#[cfg(test)]
#[path = "search_test.rs"]
mod tests;
