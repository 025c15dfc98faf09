//! Template routes — CRUD, likes, comments, and download/export.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{Comment, Page, Template, TemplateElement};
use crate::routes::auth::AuthUser;
use crate::services::template::{self, NewTemplate, TemplateUpdate};
use crate::services::{search, social};
use crate::state::AppState;
use crate::store::Storage;

// =============================================================================
// RESPONSES
// =============================================================================

/// A template as served on the wire: the record plus its derived social
/// state.
#[derive(Debug, Serialize)]
pub struct TemplateResponse {
    #[serde(flatten)]
    pub template: Template,
    pub likes: i64,
    pub comments: Vec<Comment>,
}

pub(crate) async fn to_response(storage: &dyn Storage, template: Template) -> Result<TemplateResponse, StatusCode> {
    let likes = social::like_count(storage, template.id)
        .await
        .map_err(social_error_to_status)?;
    let comments = storage
        .comments_for(template.id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    Ok(TemplateResponse { template, likes, comments })
}

pub(crate) async fn to_responses(
    storage: &dyn Storage,
    templates: Vec<Template>,
) -> Result<Vec<TemplateResponse>, StatusCode> {
    let mut out = Vec::with_capacity(templates.len());
    for template in templates {
        out.push(to_response(storage, template).await?);
    }
    Ok(out)
}

pub(crate) fn template_error_to_status(err: template::TemplateError) -> StatusCode {
    match err {
        template::TemplateError::NotFound(_) => StatusCode::NOT_FOUND,
        template::TemplateError::Forbidden(_) => StatusCode::FORBIDDEN,
        template::TemplateError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub(crate) fn social_error_to_status(err: social::SocialError) -> StatusCode {
    match err {
        social::SocialError::NotFound(_) => StatusCode::NOT_FOUND,
        social::SocialError::EmptyComment => StatusCode::BAD_REQUEST,
        social::SocialError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

// =============================================================================
// CRUD
// =============================================================================

#[derive(Deserialize)]
pub struct CreateTemplateBody {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub elements: Vec<TemplateElement>,
}

/// `POST /api/templates` — create a template.
pub async fn create_template(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<CreateTemplateBody>,
) -> Result<(StatusCode, Json<TemplateResponse>), StatusCode> {
    let created = template::create_template(
        state.storage.as_ref(),
        auth.user.id,
        NewTemplate { title: body.title, description: body.description, elements: body.elements },
    )
    .await
    .map_err(template_error_to_status)?;

    let response = to_response(state.storage.as_ref(), created).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[derive(Deserialize)]
pub struct ListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// `GET /api/templates` — newest-first paginated listing.
pub async fn list_templates(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<Json<Page<TemplateResponse>>, StatusCode> {
    let (page, limit) = search::clamp_pagination(params.page, params.limit);
    let listed = template::list_templates(state.storage.as_ref(), page, limit)
        .await
        .map_err(template_error_to_status)?;

    let data = to_responses(state.storage.as_ref(), listed.data).await?;
    Ok(Json(Page { data, total: listed.total, page: listed.page, limit: listed.limit }))
}

/// `GET /api/templates/mine` — the caller's templates.
pub async fn list_own_templates(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<TemplateResponse>>, StatusCode> {
    let templates = template::list_own_templates(state.storage.as_ref(), auth.user.id)
        .await
        .map_err(template_error_to_status)?;
    Ok(Json(to_responses(state.storage.as_ref(), templates).await?))
}

/// `GET /api/templates/:id` — fetch one template with likes and comments.
pub async fn get_template(
    State(state): State<AppState>,
    Path(template_id): Path<Uuid>,
) -> Result<Json<TemplateResponse>, StatusCode> {
    let found = template::get_template(state.storage.as_ref(), template_id)
        .await
        .map_err(template_error_to_status)?;
    Ok(Json(to_response(state.storage.as_ref(), found).await?))
}

#[derive(Deserialize)]
pub struct UpdateTemplateBody {
    pub title: Option<String>,
    pub description: Option<String>,
    pub elements: Option<Vec<TemplateElement>>,
}

/// `PUT /api/templates/:id` — owner-only update of title, description,
/// and elements.
pub async fn update_template(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(template_id): Path<Uuid>,
    Json(body): Json<UpdateTemplateBody>,
) -> Result<Json<TemplateResponse>, StatusCode> {
    let updated = template::update_template(
        state.storage.as_ref(),
        template_id,
        auth.user.id,
        TemplateUpdate { title: body.title, description: body.description, elements: body.elements },
    )
    .await
    .map_err(template_error_to_status)?;

    Ok(Json(to_response(state.storage.as_ref(), updated).await?))
}

/// `DELETE /api/templates/:id` — owner-only delete.
pub async fn delete_template(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(template_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    template::delete_template(state.storage.as_ref(), template_id, auth.user.id)
        .await
        .map_err(template_error_to_status)?;
    Ok(Json(serde_json::json!({ "message": "Template deleted successfully" })))
}

// =============================================================================
// SOCIAL
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeResponse {
    pub liked: bool,
    pub likes_count: i64,
}

/// `POST /api/templates/:id/like` — toggle the caller's like. The response
/// is authoritative; clients overwrite any optimistic state with it.
pub async fn like_template(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(template_id): Path<Uuid>,
) -> Result<Json<LikeResponse>, StatusCode> {
    let outcome = social::toggle_like(state.storage.as_ref(), template_id, auth.user.id)
        .await
        .map_err(social_error_to_status)?;
    Ok(Json(LikeResponse { liked: outcome.liked, likes_count: outcome.likes }))
}

#[derive(Deserialize)]
pub struct CommentBody {
    pub content: String,
}

/// `GET /api/templates/:id/comments` — list comments in insertion order.
pub async fn list_comments(
    State(state): State<AppState>,
    Path(template_id): Path<Uuid>,
) -> Result<Json<Vec<Comment>>, StatusCode> {
    let comments = social::list_comments(state.storage.as_ref(), template_id)
        .await
        .map_err(social_error_to_status)?;
    Ok(Json(comments))
}

/// `POST /api/templates/:id/comments` — add a comment.
pub async fn add_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(template_id): Path<Uuid>,
    Json(body): Json<CommentBody>,
) -> Result<(StatusCode, Json<Comment>), StatusCode> {
    let comment = social::add_comment(state.storage.as_ref(), template_id, &auth.user, &body.content)
        .await
        .map_err(social_error_to_status)?;
    Ok((StatusCode::CREATED, Json(comment)))
}

// =============================================================================
// DOWNLOAD
// =============================================================================

/// `GET /api/templates/:id/download` — the template's render contract as a
/// JSON attachment. Compositing the final image from it is the consumer's
/// job.
pub async fn download_template(
    State(state): State<AppState>,
    Path(template_id): Path<Uuid>,
) -> Result<Response, StatusCode> {
    let found = template::get_template(state.storage.as_ref(), template_id)
        .await
        .map_err(template_error_to_status)?;

    let body = serde_json::to_vec_pretty(&found).map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    let filename = format!("template-{template_id}.json");

    Ok((
        [
            (CONTENT_TYPE, "application/json; charset=utf-8"),
            (CONTENT_DISPOSITION, &format!("attachment; filename=\"{filename}\"")),
        ],
        body,
    )
        .into_response())
}

#[cfg(test)]
#[path = "templates_test.rs"]
mod tests;
