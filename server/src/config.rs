//! Environment-driven configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! All runtime knobs arrive as environment variables (optionally from a
//! `.env` file via dotenvy). `Config` is read once at startup; nothing else
//! in the tree touches `std::env`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone)]
pub struct Config {
    /// Listen port. `PORT`, default 8000.
    pub port: u16,
    /// Postgres connection string. `DATABASE_URL`; when unset the server
    /// falls back to in-memory storage.
    pub database_url: Option<String>,
    /// Pool size for the Postgres backend. `DB_MAX_CONNECTIONS`, default 5.
    pub db_max_connections: u32,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a message when a variable is present but unparseable.
    pub fn from_env() -> Result<Self, String> {
        let port = parse_var("PORT", DEFAULT_PORT)?;
        let db_max_connections = parse_var("DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)?;
        let database_url = std::env::var("DATABASE_URL").ok().filter(|v| !v.is_empty());
        Ok(Self { port, database_url, db_max_connections })
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, default: T) -> Result<T, String> {
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().map_err(|_| format!("invalid {key}: {raw}")),
        Err(_) => Ok(default),
    }
}
