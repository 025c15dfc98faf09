//! Account service — signup and signin with salted password hashes.

use rand::Rng;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::model::{Session, User, UserRecord};
use crate::services::session;
use crate::store::{Storage, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid email")]
    InvalidEmail,
    #[error("email already registered")]
    EmailTaken,
    #[error("username already taken")]
    UsernameTaken,
    #[error("invalid username or password")]
    InvalidCredentials,
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

/// Signup request payload after route-level deserialization.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub username: String,
    pub full_name: String,
    pub password: String,
}

#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    if normalized.is_empty() || !normalized.contains('@') {
        return None;
    }
    let parts = normalized.split('@').collect::<Vec<_>>();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return None;
    }
    Some(normalized)
}

/// Generate a random 16-byte hex salt.
#[must_use]
pub fn generate_salt() -> String {
    let bytes: [u8; 16] = rand::rng().random();
    session::bytes_to_hex(&bytes)
}

/// Salted SHA-256 digest of a password, as lowercase hex.
#[must_use]
pub fn hash_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    session::bytes_to_hex(&hasher.finalize())
}

/// Register a new account.
///
/// # Errors
///
/// Rejects malformed emails and duplicate email/username; propagates
/// storage failures.
pub async fn signup(storage: &dyn Storage, new_user: NewUser) -> Result<User, AuthError> {
    let email = normalize_email(&new_user.email).ok_or(AuthError::InvalidEmail)?;
    let username = new_user.username.trim().to_owned();

    if storage.user_by_email(&email).await?.is_some() {
        return Err(AuthError::EmailTaken);
    }
    if storage.user_by_username(&username).await?.is_some() {
        return Err(AuthError::UsernameTaken);
    }

    let salt = generate_salt();
    let record = UserRecord {
        user: User {
            id: Uuid::new_v4(),
            email,
            username,
            full_name: new_user.full_name.trim().to_owned(),
        },
        password_hash: hash_password(&salt, &new_user.password),
        password_salt: salt,
    };
    storage.put_user(record.clone()).await?;

    tracing::info!(user_id = %record.user.id, username = %record.user.username, "user signed up");
    Ok(record.user)
}

/// Authenticate by username (or email) and password, creating a session.
///
/// # Errors
///
/// Returns `InvalidCredentials` on unknown account or wrong password;
/// propagates storage failures.
pub async fn signin(storage: &dyn Storage, username: &str, password: &str) -> Result<(User, Session), AuthError> {
    let record = match storage.user_by_username(username.trim()).await? {
        Some(record) => Some(record),
        None => match normalize_email(username) {
            Some(email) => storage.user_by_email(&email).await?,
            None => None,
        },
    };
    let Some(record) = record else {
        return Err(AuthError::InvalidCredentials);
    };

    if hash_password(&record.password_salt, password) != record.password_hash {
        return Err(AuthError::InvalidCredentials);
    }

    let session = session::create_session(storage, record.user.id).await?;
    tracing::info!(user_id = %record.user.id, "user signed in");
    Ok((record.user, session))
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
