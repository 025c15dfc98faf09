//! Shared numeric constants for the editor crate.

// ── Element defaults ────────────────────────────────────────────

/// Width and height of a freshly added element, in background pixels.
pub const DEFAULT_ELEMENT_SIZE: u32 = 200;

// ── Resize affordance bounds ────────────────────────────────────

/// Smallest size the resize affordance will hand to the store, per axis.
pub const MIN_ELEMENT_SIZE: u32 = 100;

/// Largest size the resize affordance will hand to the store, per axis.
pub const MAX_ELEMENT_SIZE: u32 = 800;
