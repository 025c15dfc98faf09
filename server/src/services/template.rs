//! Template service — CRUD with ownership checks.
//!
//! DESIGN
//! ======
//! Reads are public; every mutation requires the caller to be the owner.
//! `id`, `created_at`, and `user_id` are fixed at creation and survive any
//! update, matching the wire contract.

use time::OffsetDateTime;
use uuid::Uuid;

use crate::model::{Page, Template, TemplateElement};
use crate::store::{Storage, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("template not found: {0}")]
    NotFound(Uuid),
    #[error("not the template owner: {0}")]
    Forbidden(Uuid),
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

/// Fields a creator supplies; everything else is assigned by the server.
#[derive(Debug, Clone)]
pub struct NewTemplate {
    pub title: String,
    pub description: String,
    pub elements: Vec<TemplateElement>,
}

/// Partial update; absent fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct TemplateUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub elements: Option<Vec<TemplateElement>>,
}

/// Create a template owned by `user_id`.
///
/// # Errors
///
/// Propagates storage failures.
pub async fn create_template(
    storage: &dyn Storage,
    user_id: Uuid,
    new: NewTemplate,
) -> Result<Template, TemplateError> {
    let template = Template {
        id: Uuid::new_v4(),
        title: new.title,
        description: new.description,
        elements: new.elements,
        created_at: OffsetDateTime::now_utc(),
        user_id,
    };
    storage.put_template(template.clone()).await?;
    tracing::info!(template_id = %template.id, owner = %user_id, "template created");
    Ok(template)
}

/// Fetch one template.
///
/// # Errors
///
/// Returns `NotFound` if the id is unknown.
pub async fn get_template(storage: &dyn Storage, id: Uuid) -> Result<Template, TemplateError> {
    storage
        .template_by_id(id)
        .await?
        .ok_or(TemplateError::NotFound(id))
}

/// Apply an owner-only partial update. The identity fields (`id`,
/// `created_at`, `user_id`) cannot change.
///
/// # Errors
///
/// Returns `NotFound` for unknown ids and `Forbidden` when `user_id` is not
/// the owner.
pub async fn update_template(
    storage: &dyn Storage,
    id: Uuid,
    user_id: Uuid,
    update: TemplateUpdate,
) -> Result<Template, TemplateError> {
    let mut template = get_template(storage, id).await?;
    if template.user_id != user_id {
        return Err(TemplateError::Forbidden(id));
    }

    if let Some(title) = update.title {
        template.title = title;
    }
    if let Some(description) = update.description {
        template.description = description;
    }
    if let Some(elements) = update.elements {
        template.elements = elements;
    }

    storage.put_template(template.clone()).await?;
    Ok(template)
}

/// Owner-only delete.
///
/// # Errors
///
/// Returns `NotFound` for unknown ids and `Forbidden` for non-owners.
pub async fn delete_template(storage: &dyn Storage, id: Uuid, user_id: Uuid) -> Result<(), TemplateError> {
    let template = get_template(storage, id).await?;
    if template.user_id != user_id {
        return Err(TemplateError::Forbidden(id));
    }
    storage.delete_template(id).await?;
    tracing::info!(template_id = %id, "template deleted");
    Ok(())
}

/// Newest-first page of all templates.
///
/// # Errors
///
/// Propagates storage failures.
pub async fn list_templates(storage: &dyn Storage, page: i64, limit: i64) -> Result<Page<Template>, TemplateError> {
    let offset = (page - 1) * limit;
    let (data, total) = storage.list_templates(offset, limit).await?;
    Ok(Page { data, total, page, limit })
}

/// All templates owned by `user_id`, newest first.
///
/// # Errors
///
/// Propagates storage failures.
pub async fn list_own_templates(storage: &dyn Storage, user_id: Uuid) -> Result<Vec<Template>, TemplateError> {
    Ok(storage.templates_by_owner(user_id).await?)
}

#[cfg(test)]
#[path = "template_test.rs"]
mod tests;
