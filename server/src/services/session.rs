//! Session management.
//!
//! ARCHITECTURE
//! ============
//! A session is an explicit record with its own lifecycle: created at
//! signin, validated on every authenticated request, destroyed at logout.
//! Identity never lives in ambient global state; whoever needs it gets the
//! validated user passed in.

use std::fmt::Write;

use rand::Rng;
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use crate::model::{Session, User};
use crate::store::{Storage, StoreError};

/// How long a session token stays valid after signin.
const SESSION_TTL: Duration = Duration::days(30);

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// Create a session for the given user and persist it.
///
/// # Errors
///
/// Returns a storage error if the write fails.
pub async fn create_session(storage: &dyn Storage, user_id: Uuid) -> Result<Session, StoreError> {
    let session = Session {
        token: generate_token(),
        user_id,
        expires_at: OffsetDateTime::now_utc() + SESSION_TTL,
    };
    storage.put_session(session.clone()).await?;
    Ok(session)
}

/// Validate a session token and return the associated user.
///
/// Expired sessions are deleted on sight and report as invalid.
///
/// # Errors
///
/// Returns a storage error if a lookup or cleanup write fails.
pub async fn validate_session(storage: &dyn Storage, token: &str) -> Result<Option<User>, StoreError> {
    let Some(session) = storage.session_by_token(token).await? else {
        return Ok(None);
    };
    if session.expires_at <= OffsetDateTime::now_utc() {
        storage.delete_session(token).await?;
        return Ok(None);
    }
    Ok(storage.user_by_id(session.user_id).await?.map(|r| r.user))
}

/// Delete a session by token. Deleting an unknown token is a no-op.
///
/// # Errors
///
/// Returns a storage error if the delete fails.
pub async fn delete_session(storage: &dyn Storage, token: &str) -> Result<(), StoreError> {
    storage.delete_session(token).await
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
