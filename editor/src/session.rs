//! An editing session: element store, background, and the export contract.
//!
//! One session exists per open editor. It owns the element collection and
//! selection for its lifetime and is simply dropped when the editor closes;
//! nothing here persists on its own.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::background::TemplateBackground;
use crate::element::ConfigElement;
use crate::store::ElementStore;

/// A template-configuration session.
#[derive(Debug, Clone, Default)]
pub struct EditorSession {
    /// The element collection and selection. Gesture adapters and the
    /// properties panel mutate it directly.
    pub store: ElementStore,
    background: Option<TemplateBackground>,
}

impl EditorSession {
    /// Start a session with no background and no elements.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or replace the background image.
    pub fn set_background(&mut self, background: TemplateBackground) {
        self.background = Some(background);
    }

    /// The current background, if one has been uploaded.
    #[must_use]
    pub fn background(&self) -> Option<&TemplateBackground> {
        self.background.as_ref()
    }

    /// The render contract: every element with its id, kind, position, and
    /// size, in layer order. An external renderer composites these over the
    /// background to produce the final image.
    #[must_use]
    pub fn snapshot(&self) -> Vec<ConfigElement> {
        self.store.elements().to_vec()
    }
}
