//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own business logic and talk to `&dyn Storage`; route
//! handlers stay focused on protocol translation and auth plumbing.

pub mod auth;
pub mod image;
pub mod search;
pub mod session;
pub mod social;
pub mod template;
