use super::*;
use crate::store::memory::MemoryStore;

fn new_user(email: &str, username: &str) -> NewUser {
    NewUser {
        email: email.to_owned(),
        username: username.to_owned(),
        full_name: "Test User".to_owned(),
        password: "correct horse".to_owned(),
    }
}

// =============================================================================
// normalize_email
// =============================================================================

#[test]
fn normalize_email_lowercases_and_trims() {
    assert_eq!(normalize_email("  Jane@Example.COM "), Some("jane@example.com".into()));
}

#[test]
fn normalize_email_rejects_missing_at() {
    assert_eq!(normalize_email("janeexample.com"), None);
}

#[test]
fn normalize_email_rejects_empty_parts() {
    assert_eq!(normalize_email("@example.com"), None);
    assert_eq!(normalize_email("jane@"), None);
    assert_eq!(normalize_email(""), None);
}

#[test]
fn normalize_email_rejects_double_at() {
    assert_eq!(normalize_email("a@b@c"), None);
}

// =============================================================================
// password hashing
// =============================================================================

#[test]
fn hash_password_is_deterministic_per_salt() {
    assert_eq!(hash_password("salt", "pw"), hash_password("salt", "pw"));
    assert_ne!(hash_password("salt-a", "pw"), hash_password("salt-b", "pw"));
    assert_ne!(hash_password("salt", "pw"), hash_password("salt", "other"));
}

#[test]
fn hash_password_is_sha256_hex() {
    let digest = hash_password("s", "p");
    assert_eq!(digest.len(), 64);
    assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generate_salt_is_32_hex_chars() {
    let salt = generate_salt();
    assert_eq!(salt.len(), 32);
    assert_ne!(salt, generate_salt());
}

// =============================================================================
// signup
// =============================================================================

#[tokio::test]
async fn signup_creates_account_with_normalized_email() {
    let store = MemoryStore::new();
    let user = signup(&store, new_user(" Jane@Example.com ", "jane")).await.unwrap();

    assert_eq!(user.email, "jane@example.com");
    assert_eq!(user.username, "jane");
    let stored = store.user_by_id(user.id).await.unwrap().unwrap();
    assert_ne!(stored.password_hash, "correct horse");
}

#[tokio::test]
async fn signup_rejects_duplicate_email() {
    let store = MemoryStore::new();
    signup(&store, new_user("jane@example.com", "jane")).await.unwrap();

    let err = signup(&store, new_user("jane@example.com", "janet")).await.unwrap_err();
    assert!(matches!(err, AuthError::EmailTaken));
}

#[tokio::test]
async fn signup_rejects_duplicate_username() {
    let store = MemoryStore::new();
    signup(&store, new_user("jane@example.com", "jane")).await.unwrap();

    let err = signup(&store, new_user("jane2@example.com", "jane")).await.unwrap_err();
    assert!(matches!(err, AuthError::UsernameTaken));
}

#[tokio::test]
async fn signup_rejects_invalid_email() {
    let store = MemoryStore::new();
    let err = signup(&store, new_user("not-an-email", "jane")).await.unwrap_err();
    assert!(matches!(err, AuthError::InvalidEmail));
}

// =============================================================================
// signin
// =============================================================================

#[tokio::test]
async fn signin_with_username_returns_user_and_session() {
    let store = MemoryStore::new();
    let created = signup(&store, new_user("jane@example.com", "jane")).await.unwrap();

    let (user, session) = signin(&store, "jane", "correct horse").await.unwrap();
    assert_eq!(user.id, created.id);
    assert_eq!(session.user_id, created.id);
    assert_eq!(session.token.len(), 64);
}

#[tokio::test]
async fn signin_accepts_email_in_place_of_username() {
    let store = MemoryStore::new();
    signup(&store, new_user("jane@example.com", "jane")).await.unwrap();

    let (user, _) = signin(&store, "Jane@Example.com", "correct horse").await.unwrap();
    assert_eq!(user.username, "jane");
}

#[tokio::test]
async fn signin_rejects_wrong_password() {
    let store = MemoryStore::new();
    signup(&store, new_user("jane@example.com", "jane")).await.unwrap();

    let err = signin(&store, "jane", "wrong").await.unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));
}

#[tokio::test]
async fn signin_rejects_unknown_account() {
    let store = MemoryStore::new();
    let err = signin(&store, "nobody", "whatever").await.unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));
}

#[tokio::test]
async fn signin_session_is_immediately_valid() {
    let store = MemoryStore::new();
    signup(&store, new_user("jane@example.com", "jane")).await.unwrap();

    let (user, session) = signin(&store, "jane", "correct horse").await.unwrap();
    let validated = crate::services::session::validate_session(&store, &session.token)
        .await
        .unwrap();
    assert_eq!(validated.unwrap().id, user.id);
}
