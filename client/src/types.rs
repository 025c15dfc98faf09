//! Wire types for the server's JSON API.
//!
//! The client keeps its own copies of the response shapes rather than
//! importing the server crate; the contract is the JSON, not the Rust
//! types. Timestamps stay as the RFC-3339 strings the server sends.

use editor::ElementKind;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub full_name: String,
}

/// Top-left position of an element in background pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

/// One positioned content element of a template.
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

/// A template as the server serves it, social state included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub elements: Vec<TemplateElement>,
    pub created_at: String,
    pub user_id: Uuid,
    pub likes: i64,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// A comment on a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: Uuid,
    pub content: String,
    pub user_id: Uuid,
    pub username: String,
    pub created_at: String,
}

/// One page of a listing or search.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
}

/// Authoritative answer to a like toggle; overwrite any optimistic state
/// with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeResponse {
    pub liked: bool,
    pub likes_count: i64,
}

/// Response to an image upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedImage {
    pub id: Uuid,
    pub url: String,
}

/// Payload for creating a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTemplate {
    pub title: String,
    pub description: String,
    pub elements: Vec<TemplateElement>,
}

/// Payload for updating a template; absent fields keep their value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elements: Option<Vec<TemplateElement>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_parses_a_server_response() {
        let json = r#"{
            "id": "11111111-1111-1111-1111-111111111111",
            "title": "Business Card Template",
            "description": "A professional business card design",
            "elements": [
                {"type": "text", "content": "John Doe", "position": {"x": 100, "y": 100}},
                {"type": "image", "url": "https://picsum.photos/200", "position": {"x": 300, "y": 100}, "width": 200, "height": 200}
            ],
            "createdAt": "2024-03-20T10:00:00Z",
            "userId": "22222222-2222-2222-2222-222222222222",
            "likes": 42,
            "comments": [
                {"id": "33333333-3333-3333-3333-333333333333", "content": "Great design!",
                 "userId": "44444444-4444-4444-4444-444444444444", "username": "jane",
                 "createdAt": "2024-03-20T11:00:00Z"}
            ]
        }"#;

        let template: Template = serde_json::from_str(json).unwrap();
        assert_eq!(template.title, "Business Card Template");
        assert_eq!(template.likes, 42);
        assert_eq!(template.elements.len(), 2);
        assert_eq!(template.elements[0].kind, ElementKind::Text);
        assert_eq!(template.elements[1].width, Some(200));
        assert_eq!(template.comments[0].username, "jane");
    }

    #[test]
    fn template_tolerates_missing_comments() {
        let json = r#"{
            "id": "11111111-1111-1111-1111-111111111111",
            "title": "t", "description": "", "elements": [],
            "createdAt": "2024-03-20T10:00:00Z",
            "userId": "22222222-2222-2222-2222-222222222222",
            "likes": 0
        }"#;
        let template: Template = serde_json::from_str(json).unwrap();
        assert!(template.comments.is_empty());
    }

    #[test]
    fn update_payload_omits_absent_fields() {
        let update = TemplateUpdate { title: Some("New".into()), ..TemplateUpdate::default() };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({"title": "New"}));
    }

    #[test]
    fn element_serializes_kind_as_type() {
        let element = TemplateElement {
            id: None,
            kind: ElementKind::Image,
            content: None,
            url: Some("/api/images/x".into()),
            position: Position { x: 0, y: 0 },
            width: Some(100),
            height: Some(100),
        };
        let json = serde_json::to_value(&element).unwrap();
        assert_eq!(json["type"], "image");
    }
}
