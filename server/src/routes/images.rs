//! Image upload and serving routes.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Json, Response};
use uuid::Uuid;

use crate::routes::auth::AuthUser;
use crate::services::image::{self, UploadedImage};
use crate::state::AppState;

pub(crate) fn image_error_to_status(err: image::ImageError) -> StatusCode {
    match err {
        image::ImageError::NotFound(_) => StatusCode::NOT_FOUND,
        image::ImageError::EmptyUpload => StatusCode::BAD_REQUEST,
        image::ImageError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// `POST /api/images/upload` — multipart upload; the first `file` field is
/// stored and its serving URL returned.
pub async fn upload_image(
    State(state): State<AppState>,
    _auth: AuthUser,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<UploadedImage>), StatusCode> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| StatusCode::BAD_REQUEST)?
    {
        if field.name() != Some("file") {
            continue;
        }
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_owned();
        let bytes = field.bytes().await.map_err(|_| StatusCode::BAD_REQUEST)?;

        let uploaded = image::store_image(state.storage.as_ref(), &content_type, bytes.to_vec())
            .await
            .map_err(image_error_to_status)?;
        return Ok((StatusCode::CREATED, Json(uploaded)));
    }

    Err(StatusCode::BAD_REQUEST)
}

/// `GET /api/images/:id` — serve stored image bytes with their content
/// type.
pub async fn get_image(State(state): State<AppState>, Path(image_id): Path<Uuid>) -> Result<Response, StatusCode> {
    let stored = image::fetch_image(state.storage.as_ref(), image_id)
        .await
        .map_err(image_error_to_status)?;

    Ok(([(CONTENT_TYPE, stored.content_type)], stored.bytes).into_response())
}
