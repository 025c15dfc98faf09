//! Domain and wire types shared across services, storage, and routes.
//!
//! Wire types serialize as camelCase JSON to match the client surface.

use editor::ElementKind;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

// =============================================================================
// USERS & SESSIONS
// =============================================================================

/// Public user profile as served on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub full_name: String,
}

/// A user row including credential material. Never serialized.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub user: User,
    pub password_salt: String,
    pub password_hash: String,
}

/// An authenticated session. Created at signin, destroyed at logout; the
/// token is the bearer credential handed to the client.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user_id: Uuid,
    pub expires_at: OffsetDateTime,
}

// =============================================================================
// TEMPLATES
// =============================================================================

/// Top-left position of an element in background pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

/// One positioned content element of a saved template.
///
/// Unlike the editor's placeholder regions, a saved element may carry its
/// content: text for `text` elements, an image URL for `image` elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateElement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(rename = "type")]
    pub kind: ElementKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub position: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

/// A stored template. Likes and comments are derived at read time and are
/// not part of the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub elements: Vec<TemplateElement>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub user_id: Uuid,
}

/// A comment on a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: Uuid,
    pub content: String,
    pub user_id: Uuid,
    pub username: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

// =============================================================================
// IMAGES & PAGINATION
// =============================================================================

/// An uploaded image blob.
#[derive(Debug, Clone)]
pub struct StoredImage {
    pub id: Uuid,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// One page of a listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
}
