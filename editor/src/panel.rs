//! Properties-panel binding: the selected element's numeric fields as
//! editable inputs.
//!
//! Reading is a pure projection of the store and selection. Writing parses
//! the raw input and calls the matching absolute setter immediately; there
//! is no debounce and no validation against the resize handle bounds on
//! this path. Input that does not parse is rejected so the panel keeps
//! showing the previous value.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use crate::element::ElementKind;
use crate::store::ElementStore;

/// One of the four editable numeric fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    X,
    Y,
    Width,
    Height,
}

/// Snapshot of the panel inputs for the selected element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelView {
    pub kind: ElementKind,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Rejected panel input. The previous field value is retained.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("not an integer: {0:?}")]
    NotAnInteger(String),
    #[error("size must be positive")]
    NonPositiveSize,
}

/// Project the selected element into panel fields. `None` is the
/// placeholder state shown when nothing is selected.
#[must_use]
pub fn view(store: &ElementStore) -> Option<PanelView> {
    store.selected_element().map(|e| PanelView {
        kind: e.kind,
        x: e.x,
        y: e.y,
        width: e.width,
        height: e.height,
    })
}

/// Apply an edit of one field of the selected element.
///
/// A no-op when nothing is selected.
///
/// # Errors
///
/// Returns [`FieldError`] when the input does not parse as an integer, or
/// when a size field would become zero or negative; the element is left
/// unchanged either way.
pub fn edit_field(store: &mut ElementStore, field: Field, raw: &str) -> Result<(), FieldError> {
    let Some(element) = store.selected_element() else {
        return Ok(());
    };
    let id = element.id;
    let (x, y, width, height) = (element.x, element.y, element.width, element.height);

    match field {
        Field::X => store.set_position(id, parse_coord(raw)?, y),
        Field::Y => store.set_position(id, x, parse_coord(raw)?),
        Field::Width => store.set_size(id, parse_size(raw)?, height),
        Field::Height => store.set_size(id, width, parse_size(raw)?),
    }
    Ok(())
}

fn parse_coord(raw: &str) -> Result<i32, FieldError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| FieldError::NotAnInteger(raw.to_owned()))
}

fn parse_size(raw: &str) -> Result<u32, FieldError> {
    let trimmed = raw.trim();
    // A leading minus sign is an out-of-range size, not a parse failure.
    if let Some(rest) = trimmed.strip_prefix('-') {
        if rest.chars().all(|c| c.is_ascii_digit()) && !rest.is_empty() {
            return Err(FieldError::NonPositiveSize);
        }
    }
    let value = trimmed
        .parse::<u32>()
        .map_err(|_| FieldError::NotAnInteger(raw.to_owned()))?;
    if value == 0 {
        return Err(FieldError::NonPositiveSize);
    }
    Ok(value)
}
