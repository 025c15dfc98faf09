//! Element types: the positioned placeholder regions of a template.

#[cfg(test)]
#[path = "element_test.rs"]
mod element_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::DEFAULT_ELEMENT_SIZE;

/// Unique identifier for a config element.
pub type ElementId = Uuid;

/// The kind of content a placeholder region will hold.
///
/// The set is closed: a template region is either an image slot or a text
/// slot, and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// A region that will be filled with an image.
    Image,
    /// A region that will be filled with text.
    Text,
}

/// A positioned, resizable placeholder region within a template.
///
/// `x` and `y` are the top-left corner in background-image pixel
/// coordinates. They are signed and unclamped: an element may sit partly or
/// wholly outside the background (bleed). `width` and `height` are positive;
/// the resize affordance keeps them within its handle bounds, but the store
/// accepts whatever the caller supplies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigElement {
    /// Stable unique identifier, assigned at creation.
    pub id: ElementId,
    /// Image or text slot.
    pub kind: ElementKind,
    /// Left edge in background pixels. May be negative.
    pub x: i32,
    /// Top edge in background pixels. May be negative.
    pub y: i32,
    /// Width in background pixels.
    pub width: u32,
    /// Height in background pixels.
    pub height: u32,
}

impl ConfigElement {
    /// Create a new element of the given kind with a fresh id at the
    /// default position and size.
    #[must_use]
    pub fn new(kind: ElementKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            x: 0,
            y: 0,
            width: DEFAULT_ELEMENT_SIZE,
            height: DEFAULT_ELEMENT_SIZE,
        }
    }
}
