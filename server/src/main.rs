mod config;
mod model;
mod routes;
mod services;
mod state;
mod store;

use std::sync::Arc;

use crate::store::Storage;
use crate::store::memory::MemoryStore;
use crate::store::postgres::PgStorage;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    dotenvy::dotenv().ok();

    let config = config::Config::from_env().expect("invalid configuration");

    let storage: Arc<dyn Storage> = match &config.database_url {
        Some(url) => {
            let pg = PgStorage::connect(url, config.db_max_connections)
                .await
                .expect("database init failed");
            Arc::new(pg)
        }
        None => {
            tracing::warn!("DATABASE_URL not set; using in-memory storage");
            Arc::new(MemoryStore::new())
        }
    };

    let state = state::AppState::new(storage);
    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "stencil listening");
    axum::serve(listener, app).await.expect("server failed");
}
