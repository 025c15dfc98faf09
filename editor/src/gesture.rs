//! Gesture completion adapter: pointer gestures in, store mutations out.
//!
//! The drag and resize capabilities live outside this crate; each reports
//! once per completed gesture. These functions are the only points where
//! that output crosses into the data model, and they keep no state of
//! their own.

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

use crate::consts::{MAX_ELEMENT_SIZE, MIN_ELEMENT_SIZE};
use crate::element::ElementId;
use crate::store::ElementStore;

/// Apply a completed drag gesture: the element moves by the reported
/// pointer delta.
pub fn complete_drag(store: &mut ElementStore, id: ElementId, dx: i32, dy: i32) {
    store.translate(id, dx, dy);
}

/// Apply a completed resize gesture. Each axis is clamped to the resize
/// handle bounds before it reaches the store.
pub fn complete_resize(store: &mut ElementStore, id: ElementId, width: u32, height: u32) {
    store.resize(id, clamp_axis(width), clamp_axis(height));
}

fn clamp_axis(value: u32) -> u32 {
    value.clamp(MIN_ELEMENT_SIZE, MAX_ELEMENT_SIZE)
}
