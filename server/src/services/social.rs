//! Likes and comments.
//!
//! ERROR HANDLING
//! ==============
//! The like count in a toggle response is recomputed from storage after the
//! mutation, so the server answer is always the single source of truth. If
//! the storage write fails nothing is reported back and the caller's local
//! guess never diverges from a count we did not actually store.

use time::OffsetDateTime;
use uuid::Uuid;

use crate::model::{Comment, User};
use crate::store::{Storage, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum SocialError {
    #[error("template not found: {0}")]
    NotFound(Uuid),
    #[error("comment content is empty")]
    EmptyComment,
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

/// Authoritative result of a like toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeOutcome {
    /// Whether the caller likes the template after the toggle.
    pub liked: bool,
    /// Total likes after the toggle.
    pub likes: i64,
}

/// Toggle the caller's like on a template.
///
/// # Errors
///
/// Returns `NotFound` for unknown templates; propagates storage failures.
pub async fn toggle_like(storage: &dyn Storage, template_id: Uuid, user_id: Uuid) -> Result<LikeOutcome, SocialError> {
    ensure_template(storage, template_id).await?;

    let liked = if storage.delete_like(template_id, user_id).await? {
        false
    } else {
        storage.insert_like(template_id, user_id).await?;
        true
    };
    let likes = storage.like_count(template_id).await?;

    Ok(LikeOutcome { liked, likes })
}

/// Number of likes on a template.
///
/// # Errors
///
/// Propagates storage failures.
pub async fn like_count(storage: &dyn Storage, template_id: Uuid) -> Result<i64, SocialError> {
    Ok(storage.like_count(template_id).await?)
}

/// Add a comment by `user` to a template.
///
/// # Errors
///
/// Returns `NotFound` for unknown templates and `EmptyComment` when the
/// trimmed content is empty.
pub async fn add_comment(
    storage: &dyn Storage,
    template_id: Uuid,
    user: &User,
    content: &str,
) -> Result<Comment, SocialError> {
    ensure_template(storage, template_id).await?;

    let content = content.trim();
    if content.is_empty() {
        return Err(SocialError::EmptyComment);
    }

    let comment = Comment {
        id: Uuid::new_v4(),
        content: content.to_owned(),
        user_id: user.id,
        username: user.username.clone(),
        created_at: OffsetDateTime::now_utc(),
    };
    storage.add_comment(template_id, comment.clone()).await?;
    Ok(comment)
}

/// Comments on a template in insertion order.
///
/// # Errors
///
/// Returns `NotFound` for unknown templates.
pub async fn list_comments(storage: &dyn Storage, template_id: Uuid) -> Result<Vec<Comment>, SocialError> {
    ensure_template(storage, template_id).await?;
    Ok(storage.comments_for(template_id).await?)
}

async fn ensure_template(storage: &dyn Storage, template_id: Uuid) -> Result<(), SocialError> {
    if storage.template_by_id(template_id).await?.is_none() {
        return Err(SocialError::NotFound(template_id));
    }
    Ok(())
}

#[cfg(test)]
#[path = "social_test.rs"]
mod tests;
