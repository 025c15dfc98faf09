//! Uploaded image storage.
//!
//! Bytes go into storage as-is with their reported content type; the server
//! does not validate image format or dimensions.

use serde::Serialize;
use uuid::Uuid;

use crate::model::StoredImage;
use crate::store::{Storage, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("image not found: {0}")]
    NotFound(Uuid),
    #[error("empty upload")]
    EmptyUpload,
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

/// Wire response for a successful upload.
#[derive(Debug, Clone, Serialize)]
pub struct UploadedImage {
    pub id: Uuid,
    pub url: String,
}

/// Persist an uploaded image and mint its serving URL.
///
/// # Errors
///
/// Rejects empty uploads; propagates storage failures.
pub async fn store_image(
    storage: &dyn Storage,
    content_type: &str,
    bytes: Vec<u8>,
) -> Result<UploadedImage, ImageError> {
    if bytes.is_empty() {
        return Err(ImageError::EmptyUpload);
    }

    let image = StoredImage {
        id: Uuid::new_v4(),
        content_type: content_type.to_owned(),
        bytes,
    };
    storage.put_image(image.clone()).await?;

    tracing::info!(image_id = %image.id, size = image.bytes.len(), "image stored");
    Ok(UploadedImage { id: image.id, url: format!("/api/images/{}", image.id) })
}

/// Fetch a stored image by id.
///
/// # Errors
///
/// Returns `NotFound` for unknown ids.
pub async fn fetch_image(storage: &dyn Storage, id: Uuid) -> Result<StoredImage, ImageError> {
    storage
        .image_by_id(id)
        .await?
        .ok_or(ImageError::NotFound(id))
}

#[cfg(test)]
#[path = "image_test.rs"]
mod tests;
