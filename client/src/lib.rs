//! Client library for the Stencil template service.
//!
//! Two surfaces live here: [`api::ApiClient`], a thin REST client over the
//! server's JSON endpoints, and [`configure::ConfigureSession`], which
//! drives an [`editor::EditorSession`] and turns the finished layout into
//! a template payload ready to POST.
//!
//! Identity is explicit: [`api::AuthContext`] is created by `login`/`signup`
//! and destroyed by `logout`. Nothing is stashed in globals.

pub mod api;
pub mod configure;
pub mod types;
