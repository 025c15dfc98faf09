//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the storage backend behind the `Storage` trait so the same routes
//! run against Postgres in production and the in-memory store in tests.

use std::sync::Arc;

use crate::store::Storage;

/// Shared application state, injected into Axum handlers via State
/// extractor. Clone is required by Axum; the storage handle is an Arc.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
}

impl AppState {
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use crate::model::{Session, Template, User};
    use crate::services::{auth, session, template};
    use crate::store::memory::MemoryStore;
    use uuid::Uuid;

    /// Create a test `AppState` backed by the in-memory store.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(Arc::new(MemoryStore::new()))
    }

    /// Sign up a user named `{name}` with a known password and return the
    /// profile plus a live session.
    pub async fn seed_user(state: &AppState, name: &str) -> (User, Session) {
        let user = auth::signup(
            state.storage.as_ref(),
            auth::NewUser {
                email: format!("{name}@example.com"),
                username: name.to_owned(),
                full_name: format!("{name} Tester"),
                password: "hunter2!".to_owned(),
            },
        )
        .await
        .expect("seed user");
        let session = session::create_session(state.storage.as_ref(), user.id)
            .await
            .expect("seed session");
        (user, session)
    }

    /// Create a template owned by `user_id` with two placeholder elements.
    pub async fn seed_template(state: &AppState, user_id: Uuid, title: &str) -> Template {
        template::create_template(
            state.storage.as_ref(),
            user_id,
            template::NewTemplate {
                title: title.to_owned(),
                description: format!("{title} description"),
                elements: vec![
                    crate::model::TemplateElement {
                        id: None,
                        kind: editor::ElementKind::Text,
                        content: Some("John Doe".into()),
                        url: None,
                        position: crate::model::Position { x: 100, y: 100 },
                        width: Some(200),
                        height: Some(200),
                    },
                    crate::model::TemplateElement {
                        id: None,
                        kind: editor::ElementKind::Image,
                        content: None,
                        url: Some("https://picsum.photos/200".into()),
                        position: crate::model::Position { x: 300, y: 100 },
                        width: Some(200),
                        height: Some(200),
                    },
                ],
            },
        )
        .await
        .expect("seed template")
    }
}
