//! In-memory storage backend.
//!
//! The test double for the [`Storage`] trait, and the fallback backend when
//! `DATABASE_URL` is unset. Everything lives in hash maps behind one async
//! lock; contents are lost on shutdown.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::model::{Comment, Session, StoredImage, Template, UserRecord};
use crate::store::{Storage, StoreError};

#[derive(Default)]
struct Inner {
    users: HashMap<Uuid, UserRecord>,
    sessions: HashMap<String, Session>,
    templates: HashMap<Uuid, Template>,
    likes: HashMap<Uuid, HashSet<Uuid>>,
    comments: HashMap<Uuid, Vec<Comment>>,
    images: HashMap<Uuid, StoredImage>,
}

/// Hash-map storage guarded by a single `RwLock`.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Newest first, id as the tie-breaker so paging is deterministic.
fn sorted_newest_first(templates: impl Iterator<Item = Template>) -> Vec<Template> {
    let mut all: Vec<Template> = templates.collect();
    all.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
    all
}

fn page(all: Vec<Template>, offset: i64, limit: i64) -> (Vec<Template>, i64) {
    let total = i64::try_from(all.len()).unwrap_or(i64::MAX);
    let offset = usize::try_from(offset.max(0)).unwrap_or(0);
    let limit = usize::try_from(limit.max(0)).unwrap_or(0);
    let data = all.into_iter().skip(offset).take(limit).collect();
    (data, total)
}

fn matches_query(template: &Template, needle: &str) -> bool {
    template.title.to_lowercase().contains(needle) || template.description.to_lowercase().contains(needle)
}

#[async_trait]
impl Storage for MemoryStore {
    // --- Users ---

    async fn put_user(&self, record: UserRecord) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        inner.users.insert(record.user.id, record);
        Ok(())
    }

    async fn user_by_id(&self, id: Uuid) -> Result<Option<UserRecord>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.users.get(&id).cloned())
    }

    async fn user_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.users.values().find(|r| r.user.email == email).cloned())
    }

    async fn user_by_username(&self, username: &str) -> Result<Option<UserRecord>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .users
            .values()
            .find(|r| r.user.username == username)
            .cloned())
    }

    // --- Sessions ---

    async fn put_session(&self, session: Session) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        inner.sessions.insert(session.token.clone(), session);
        Ok(())
    }

    async fn session_by_token(&self, token: &str) -> Result<Option<Session>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.sessions.get(token).cloned())
    }

    async fn delete_session(&self, token: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        inner.sessions.remove(token);
        Ok(())
    }

    // --- Templates ---

    async fn put_template(&self, template: Template) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        inner.templates.insert(template.id, template);
        Ok(())
    }

    async fn template_by_id(&self, id: Uuid) -> Result<Option<Template>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.templates.get(&id).cloned())
    }

    async fn delete_template(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().await;
        let removed = inner.templates.remove(&id).is_some();
        if removed {
            inner.likes.remove(&id);
            inner.comments.remove(&id);
        }
        Ok(removed)
    }

    async fn list_templates(&self, offset: i64, limit: i64) -> Result<(Vec<Template>, i64), StoreError> {
        let inner = self.inner.read().await;
        let all = sorted_newest_first(inner.templates.values().cloned());
        Ok(page(all, offset, limit))
    }

    async fn search_templates(
        &self,
        query: &str,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<Template>, i64), StoreError> {
        let needle = query.to_lowercase();
        let inner = self.inner.read().await;
        let matched = sorted_newest_first(
            inner
                .templates
                .values()
                .filter(|t| matches_query(t, &needle))
                .cloned(),
        );
        Ok(page(matched, offset, limit))
    }

    async fn templates_by_owner(&self, user_id: Uuid) -> Result<Vec<Template>, StoreError> {
        let inner = self.inner.read().await;
        Ok(sorted_newest_first(
            inner
                .templates
                .values()
                .filter(|t| t.user_id == user_id)
                .cloned(),
        ))
    }

    // --- Likes ---

    async fn insert_like(&self, template_id: Uuid, user_id: Uuid) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().await;
        Ok(inner.likes.entry(template_id).or_default().insert(user_id))
    }

    async fn delete_like(&self, template_id: Uuid, user_id: Uuid) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().await;
        Ok(inner
            .likes
            .get_mut(&template_id)
            .is_some_and(|set| set.remove(&user_id)))
    }

    async fn like_count(&self, template_id: Uuid) -> Result<i64, StoreError> {
        let inner = self.inner.read().await;
        let count = inner.likes.get(&template_id).map_or(0, HashSet::len);
        Ok(i64::try_from(count).unwrap_or(i64::MAX))
    }

    async fn has_liked(&self, template_id: Uuid, user_id: Uuid) -> Result<bool, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .likes
            .get(&template_id)
            .is_some_and(|set| set.contains(&user_id)))
    }

    // --- Comments ---

    async fn add_comment(&self, template_id: Uuid, comment: Comment) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        inner.comments.entry(template_id).or_default().push(comment);
        Ok(())
    }

    async fn comments_for(&self, template_id: Uuid) -> Result<Vec<Comment>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.comments.get(&template_id).cloned().unwrap_or_default())
    }

    // --- Images ---

    async fn put_image(&self, image: StoredImage) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        inner.images.insert(image.id, image);
        Ok(())
    }

    async fn image_by_id(&self, id: Uuid) -> Result<Option<StoredImage>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.images.get(&id).cloned())
    }
}
