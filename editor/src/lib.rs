//! Element layout model for the template-configuration canvas.
//!
//! This crate owns everything that happens between "upload a background
//! image" and "hand a finished element layout to a renderer": the ordered
//! store of placeholder regions, the single-selection state, the adapter
//! that turns completed drag/resize gestures into store mutations, and the
//! numeric-field binding behind the properties panel.
//!
//! The crate is deliberately synchronous and lock-free. One editing session
//! exists per open editor, every mutation runs to completion inside the UI
//! callback that triggered it, and unknown element ids are silent no-ops
//! rather than errors.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`session`] | An editing session: store + background + export contract |
//! | [`store`] | Insertion-ordered element store and selection state |
//! | [`element`] | [`element::ConfigElement`] and its kind |
//! | [`gesture`] | Drag/resize completion adapter with size clamping |
//! | [`panel`] | Properties-panel numeric field binding |
//! | [`background`] | Template background image as a data URL |
//! | [`consts`] | Default and limit sizes |

pub mod background;
pub mod consts;
pub mod element;
pub mod gesture;
pub mod panel;
pub mod session;
pub mod store;

pub use background::TemplateBackground;
pub use element::{ConfigElement, ElementId, ElementKind};
pub use session::EditorSession;
pub use store::ElementStore;
