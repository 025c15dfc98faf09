use super::*;

fn user() -> User {
    User {
        id: Uuid::new_v4(),
        email: "jane@example.com".into(),
        username: "jane".into(),
        full_name: "Jane Doe".into(),
    }
}

// =============================================================================
// endpoint construction
// =============================================================================

#[test]
fn endpoint_joins_base_and_path() {
    let client = ApiClient::new("http://localhost:8000");
    assert_eq!(client.endpoint("/api/auth/me"), "http://localhost:8000/api/auth/me");
}

#[test]
fn endpoint_strips_trailing_slashes() {
    let client = ApiClient::new("http://localhost:8000///");
    assert_eq!(client.endpoint("/healthz"), "http://localhost:8000/healthz");
}

// =============================================================================
// auth context lifecycle
// =============================================================================

#[test]
fn new_client_has_no_identity() {
    let client = ApiClient::new("http://localhost:8000");
    assert!(client.auth().is_none());
    assert!(matches!(client.token(), Err(ApiError::NotSignedIn)));
}

#[test]
fn with_auth_resumes_a_session() {
    let context = AuthContext { token: "tok".into(), user: user() };
    let client = ApiClient::with_auth("http://localhost:8000", context.clone());

    assert_eq!(client.auth(), Some(&context));
    assert_eq!(client.token().unwrap(), "tok");
}

#[tokio::test]
async fn logout_without_identity_fails_fast() {
    // No session, nothing to send; the call errors before any request.
    let mut client = ApiClient::new("http://localhost:8000");
    assert!(matches!(client.logout().await, Err(ApiError::NotSignedIn)));
}

#[tokio::test]
async fn authenticated_calls_without_identity_fail_fast() {
    let client = ApiClient::new("http://localhost:8000");
    assert!(matches!(client.me().await, Err(ApiError::NotSignedIn)));
    assert!(matches!(
        client.like_template(Uuid::new_v4()).await,
        Err(ApiError::NotSignedIn)
    ));
    assert!(matches!(
        client.upload_image("a.png", "image/png", vec![1]).await,
        Err(ApiError::NotSignedIn)
    ));
}
