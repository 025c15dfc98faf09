//! Storage abstraction.
//!
//! ARCHITECTURE
//! ============
//! Every persistent concern goes through the [`Storage`] trait: get/put/
//! delete/list over users, sessions, templates, comments, likes, and
//! images. Two implementations exist — [`postgres::PgStorage`] for real
//! deployments and [`memory::MemoryStore`] as the test double and the dev
//! fallback when no database is configured. Services only ever see
//! `&dyn Storage`.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::model::{Comment, Session, StoredImage, Template, UserRecord};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Backend-neutral persistence operations.
///
/// Mutations are puts (insert-or-replace) keyed by id; deletes report
/// whether a row was actually removed so callers can surface not-found.
#[async_trait]
pub trait Storage: Send + Sync {
    // --- Users ---

    async fn put_user(&self, record: UserRecord) -> Result<(), StoreError>;
    async fn user_by_id(&self, id: Uuid) -> Result<Option<UserRecord>, StoreError>;
    async fn user_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError>;
    async fn user_by_username(&self, username: &str) -> Result<Option<UserRecord>, StoreError>;

    // --- Sessions ---

    async fn put_session(&self, session: Session) -> Result<(), StoreError>;
    async fn session_by_token(&self, token: &str) -> Result<Option<Session>, StoreError>;
    async fn delete_session(&self, token: &str) -> Result<(), StoreError>;

    // --- Templates ---

    async fn put_template(&self, template: Template) -> Result<(), StoreError>;
    async fn template_by_id(&self, id: Uuid) -> Result<Option<Template>, StoreError>;
    async fn delete_template(&self, id: Uuid) -> Result<bool, StoreError>;
    /// Newest-first page of all templates plus the total count.
    async fn list_templates(&self, offset: i64, limit: i64) -> Result<(Vec<Template>, i64), StoreError>;
    /// Newest-first page of templates whose title or description contains
    /// `query` (case-insensitive), plus the total match count.
    async fn search_templates(&self, query: &str, offset: i64, limit: i64)
    -> Result<(Vec<Template>, i64), StoreError>;
    async fn templates_by_owner(&self, user_id: Uuid) -> Result<Vec<Template>, StoreError>;

    // --- Likes ---

    /// Record a like. Returns `false` when the user had already liked.
    async fn insert_like(&self, template_id: Uuid, user_id: Uuid) -> Result<bool, StoreError>;
    /// Remove a like. Returns `false` when there was none to remove.
    async fn delete_like(&self, template_id: Uuid, user_id: Uuid) -> Result<bool, StoreError>;
    async fn like_count(&self, template_id: Uuid) -> Result<i64, StoreError>;
    async fn has_liked(&self, template_id: Uuid, user_id: Uuid) -> Result<bool, StoreError>;

    // --- Comments ---

    async fn add_comment(&self, template_id: Uuid, comment: Comment) -> Result<(), StoreError>;
    /// Comments in insertion order.
    async fn comments_for(&self, template_id: Uuid) -> Result<Vec<Comment>, StoreError>;

    // --- Images ---

    async fn put_image(&self, image: StoredImage) -> Result<(), StoreError>;
    async fn image_by_id(&self, id: Uuid) -> Result<Option<StoredImage>, StoreError>;
}
