//! In-memory store of config elements and the selection state.
//!
//! DESIGN
//! ======
//! Every operation is total: it either applies the mutation or is a silent
//! no-op for an unknown id. The callers are UI gesture handlers that always
//! hold an id that was valid at gesture start, and the session is
//! single-threaded, so there is nothing useful to report when an id has
//! gone missing in between.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::element::{ConfigElement, ElementId, ElementKind};

/// Insertion-ordered collection of [`ConfigElement`]s plus the single
/// selected element, if any.
///
/// Order carries no meaning beyond display order in the layer list.
#[derive(Debug, Clone, Default)]
pub struct ElementStore {
    elements: Vec<ConfigElement>,
    selected: Option<ElementId>,
}

impl ElementStore {
    /// Create an empty store with nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Mutations ---

    /// Append a new element of the given kind with default position and
    /// size, select it, and return its id.
    pub fn add(&mut self, kind: ElementKind) -> ElementId {
        let element = ConfigElement::new(kind);
        let id = element.id;
        self.elements.push(element);
        self.selected = Some(id);
        id
    }

    /// Remove the element with the given id, if present. Clears the
    /// selection when it pointed at the removed element.
    pub fn remove(&mut self, id: ElementId) {
        self.elements.retain(|e| e.id != id);
        if self.selected == Some(id) {
            self.selected = None;
        }
    }

    /// Add `(dx, dy)` to the element's current position.
    ///
    /// Positions are not clamped against the background image: an element
    /// dragged past the edge stays where the user put it (bleed is
    /// intentional, the bounds shown in the UI are a visual aid only).
    pub fn translate(&mut self, id: ElementId, dx: i32, dy: i32) {
        if let Some(e) = self.get_mut(id) {
            e.x += dx;
            e.y += dy;
        }
    }

    /// Replace the element's size with the given absolute values.
    ///
    /// Values are accepted as given; the resize affordance is responsible
    /// for enforcing its handle bounds before calling.
    pub fn resize(&mut self, id: ElementId, width: u32, height: u32) {
        if let Some(e) = self.get_mut(id) {
            e.width = width;
            e.height = height;
        }
    }

    /// Set the element's position to absolute coordinates. Unclamped, like
    /// [`ElementStore::translate`].
    pub fn set_position(&mut self, id: ElementId, x: i32, y: i32) {
        if let Some(e) = self.get_mut(id) {
            e.x = x;
            e.y = y;
        }
    }

    /// Set the element's size to absolute values.
    pub fn set_size(&mut self, id: ElementId, width: u32, height: u32) {
        if let Some(e) = self.get_mut(id) {
            e.width = width;
            e.height = height;
        }
    }

    /// Set or clear the selection. The id is not validated against the
    /// collection; `remove` is the only deletion entry point and clears a
    /// matching selection itself.
    pub fn select(&mut self, id: Option<ElementId>) {
        self.selected = id;
    }

    // --- Queries ---

    /// The id of the currently selected element, if any.
    #[must_use]
    pub fn selected(&self) -> Option<ElementId> {
        self.selected
    }

    /// The currently selected element, if any.
    #[must_use]
    pub fn selected_element(&self) -> Option<&ConfigElement> {
        self.selected.and_then(|id| self.get(id))
    }

    /// Look up an element by id.
    #[must_use]
    pub fn get(&self, id: ElementId) -> Option<&ConfigElement> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// All elements in insertion order.
    #[must_use]
    pub fn elements(&self) -> &[ConfigElement] {
        &self.elements
    }

    /// Number of elements in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the store holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn get_mut(&mut self, id: ElementId) -> Option<&mut ConfigElement> {
        self.elements.iter_mut().find(|e| e.id == id)
    }
}
