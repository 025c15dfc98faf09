//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the whole HTTP surface under a single Axum router: auth, template
//! CRUD, likes/comments, search, image upload, and the download/export
//! endpoint. Reads are public; mutations go through the `AuthUser`
//! extractor.

pub mod auth;
pub mod images;
pub mod search;
pub mod templates;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// The full application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/auth/signup", post(auth::signup))
        .route("/auth/signin", post(auth::signin))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::me))
        .route(
            "/api/templates",
            get(templates::list_templates).post(templates::create_template),
        )
        .route("/api/templates/mine", get(templates::list_own_templates))
        .route(
            "/api/templates/{id}",
            get(templates::get_template)
                .put(templates::update_template)
                .delete(templates::delete_template),
        )
        .route("/api/templates/{id}/like", post(templates::like_template))
        .route(
            "/api/templates/{id}/comments",
            get(templates::list_comments).post(templates::add_comment),
        )
        .route("/api/templates/{id}/download", get(templates::download_template))
        .route("/api/search/templates", get(search::search_templates))
        .route("/api/images/upload", post(images::upload_image))
        .route("/api/images/{id}", get(images::get_image))
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
