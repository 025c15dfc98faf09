//! Template-configure surface: an editor session plus template metadata.
//!
//! The page flow this backs: upload a background, add image/text areas,
//! drag/resize/tweak them, then save — which means turning the editor's
//! layout snapshot into the element payload the server's template CRUD
//! accepts.

#[cfg(test)]
#[path = "configure_test.rs"]
mod configure_test;

use editor::{ConfigElement, EditorSession};

use crate::types::{NewTemplate, Position, TemplateElement, TemplateUpdate};

/// One template being configured.
#[derive(Debug, Clone, Default)]
pub struct ConfigureSession {
    pub title: String,
    pub description: String,
    /// The element layout being edited. Gesture adapters and the panel
    /// binding from the `editor` crate operate on `session.store`.
    pub session: EditorSession,
}

impl ConfigureSession {
    /// Start configuring a new template.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into(), session: EditorSession::new() }
    }

    /// The creation payload for `POST /api/templates`: metadata plus the
    /// current layout snapshot as placeholder elements.
    #[must_use]
    pub fn creation_payload(&self) -> NewTemplate {
        NewTemplate {
            title: self.title.clone(),
            description: self.description.clone(),
            elements: self.payload_elements(),
        }
    }

    /// The update payload for `PUT /api/templates/:id`, replacing the
    /// stored elements with the current layout.
    #[must_use]
    pub fn update_payload(&self) -> TemplateUpdate {
        TemplateUpdate {
            title: Some(self.title.clone()),
            description: Some(self.description.clone()),
            elements: Some(self.payload_elements()),
        }
    }

    fn payload_elements(&self) -> Vec<TemplateElement> {
        self.session
            .snapshot()
            .into_iter()
            .map(element_to_payload)
            .collect()
    }
}

/// Map one editor region to a wire element. Placeholders carry no content;
/// whoever fills the template later supplies text or an image URL.
fn element_to_payload(element: ConfigElement) -> TemplateElement {
    TemplateElement {
        id: Some(element.id),
        kind: element.kind,
        content: None,
        url: None,
        position: Position { x: element.x, y: element.y },
        width: Some(element.width),
        height: Some(element.height),
    }
}
