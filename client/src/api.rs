//! Thin REST client for the Stencil server.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures and non-success statuses surface as [`ApiError`];
//! callers decide how to degrade. Nothing here retries.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use reqwest::StatusCode;
use serde::Deserialize;
use uuid::Uuid;

use crate::types::{
    Comment, LikeResponse, NewTemplate, Page, Template, TemplateUpdate, UploadedImage, User,
};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status: {0}")]
    Status(StatusCode),
    #[error("not signed in")]
    NotSignedIn,
}

/// The caller's identity for the lifetime of a signed-in session.
///
/// Created by [`ApiClient::login`]/[`ApiClient::signup`], destroyed by
/// [`ApiClient::logout`]. Components that need identity receive this value;
/// it is never ambient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    pub token: String,
    pub user: User,
}

/// REST client bound to one server and at most one signed-in identity.
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    auth: Option<AuthContext>,
}

#[derive(Deserialize)]
struct AuthResponse {
    user: User,
    token: String,
}

impl ApiClient {
    /// Create an unauthenticated client for the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url, http: reqwest::Client::new(), auth: None }
    }

    /// Resume a previously established session.
    #[must_use]
    pub fn with_auth(base_url: impl Into<String>, auth: AuthContext) -> Self {
        let mut client = Self::new(base_url);
        client.auth = Some(auth);
        client
    }

    /// The current identity, if signed in.
    #[must_use]
    pub fn auth(&self) -> Option<&AuthContext> {
        self.auth.as_ref()
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn token(&self) -> Result<&str, ApiError> {
        self.auth
            .as_ref()
            .map(|a| a.token.as_str())
            .ok_or(ApiError::NotSignedIn)
    }

    // --- Auth ---

    /// `POST /auth/signin`. On success the client holds the new identity.
    ///
    /// # Errors
    ///
    /// `Status(401)` on bad credentials; transport errors pass through.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<&AuthContext, ApiError> {
        let response = self
            .http
            .post(self.endpoint("/auth/signin"))
            .json(&serde_json::json!({ "username": username, "password": password }))
            .send()
            .await?;
        let body: AuthResponse = ok_json(response).await?;
        Ok(self.auth.insert(AuthContext { token: body.token, user: body.user }))
    }

    /// `POST /auth/signup`. On success the client holds the new identity.
    ///
    /// # Errors
    ///
    /// `Status(400)` on duplicate email/username or malformed email.
    pub async fn signup(
        &mut self,
        email: &str,
        password: &str,
        username: &str,
        full_name: &str,
    ) -> Result<&AuthContext, ApiError> {
        let response = self
            .http
            .post(self.endpoint("/auth/signup"))
            .json(&serde_json::json!({
                "email": email,
                "username": username,
                "fullName": full_name,
                "password": password,
            }))
            .send()
            .await?;
        let body: AuthResponse = ok_json(response).await?;
        Ok(self.auth.insert(AuthContext { token: body.token, user: body.user }))
    }

    /// `POST /api/auth/logout`, then drop the local identity. The context
    /// is destroyed even when the server call fails; the token may then
    /// outlive us on the server until it expires, but the client side of
    /// the session is gone either way.
    ///
    /// # Errors
    ///
    /// Reports the server-side failure after clearing local state.
    pub async fn logout(&mut self) -> Result<(), ApiError> {
        let token = self.token()?.to_owned();
        self.auth = None;

        let response = self
            .http
            .post(self.endpoint("/api/auth/logout"))
            .bearer_auth(token)
            .send()
            .await?;
        ok_status(response)
    }

    /// `GET /api/auth/me`.
    ///
    /// # Errors
    ///
    /// `NotSignedIn` without a session; `Status(401)` when it has expired.
    pub async fn me(&self) -> Result<User, ApiError> {
        let response = self
            .http
            .get(self.endpoint("/api/auth/me"))
            .bearer_auth(self.token()?)
            .send()
            .await?;
        ok_json(response).await
    }

    // --- Templates ---

    /// `POST /api/templates`.
    ///
    /// # Errors
    ///
    /// `NotSignedIn` without a session; server-side rejections as `Status`.
    pub async fn create_template(&self, template: &NewTemplate) -> Result<Template, ApiError> {
        let response = self
            .http
            .post(self.endpoint("/api/templates"))
            .bearer_auth(self.token()?)
            .json(template)
            .send()
            .await?;
        ok_json(response).await
    }

    /// `GET /api/templates/:id`.
    ///
    /// # Errors
    ///
    /// `Status(404)` for unknown templates.
    pub async fn get_template(&self, template_id: Uuid) -> Result<Template, ApiError> {
        let response = self
            .http
            .get(self.endpoint(&format!("/api/templates/{template_id}")))
            .send()
            .await?;
        ok_json(response).await
    }

    /// `PUT /api/templates/:id`.
    ///
    /// # Errors
    ///
    /// `Status(403)` when the caller is not the owner.
    pub async fn update_template(&self, template_id: Uuid, update: &TemplateUpdate) -> Result<Template, ApiError> {
        let response = self
            .http
            .put(self.endpoint(&format!("/api/templates/{template_id}")))
            .bearer_auth(self.token()?)
            .json(update)
            .send()
            .await?;
        ok_json(response).await
    }

    /// `DELETE /api/templates/:id`.
    ///
    /// # Errors
    ///
    /// `Status(403)` when the caller is not the owner.
    pub async fn delete_template(&self, template_id: Uuid) -> Result<(), ApiError> {
        let response = self
            .http
            .delete(self.endpoint(&format!("/api/templates/{template_id}")))
            .bearer_auth(self.token()?)
            .send()
            .await?;
        ok_status(response)
    }

    // --- Social ---

    /// `POST /api/templates/:id/like` — toggle. The response is the single
    /// source of truth for both the flag and the count; overwrite any
    /// optimistic local state with it.
    ///
    /// # Errors
    ///
    /// `NotSignedIn` without a session.
    pub async fn like_template(&self, template_id: Uuid) -> Result<LikeResponse, ApiError> {
        let response = self
            .http
            .post(self.endpoint(&format!("/api/templates/{template_id}/like")))
            .bearer_auth(self.token()?)
            .send()
            .await?;
        ok_json(response).await
    }

    /// `POST /api/templates/:id/comments`.
    ///
    /// # Errors
    ///
    /// `Status(400)` for empty content.
    pub async fn comment_on_template(&self, template_id: Uuid, content: &str) -> Result<Comment, ApiError> {
        let response = self
            .http
            .post(self.endpoint(&format!("/api/templates/{template_id}/comments")))
            .bearer_auth(self.token()?)
            .json(&serde_json::json!({ "content": content }))
            .send()
            .await?;
        ok_json(response).await
    }

    // --- Search / listing ---

    /// `GET /api/search/templates?q=&page=&limit=`.
    ///
    /// # Errors
    ///
    /// Transport errors pass through.
    pub async fn search_templates(&self, query: &str, page: i64, limit: i64) -> Result<Page<Template>, ApiError> {
        let response = self
            .http
            .get(self.endpoint("/api/search/templates"))
            .query(&[("q", query)])
            .query(&[("page", page), ("limit", limit)])
            .send()
            .await?;
        ok_json(response).await
    }

    // --- Images / download ---

    /// `POST /api/images/upload` — multipart upload of one file field.
    ///
    /// # Errors
    ///
    /// `NotSignedIn` without a session; `Status(400)` for empty files.
    pub async fn upload_image(
        &self,
        filename: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadedImage, ApiError> {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(filename.to_owned())
            .mime_str(content_type)?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .http
            .post(self.endpoint("/api/images/upload"))
            .bearer_auth(self.token()?)
            .multipart(form)
            .send()
            .await?;
        ok_json(response).await
    }

    /// `GET /api/templates/:id/download` — the render contract as bytes,
    /// ready to hand to a renderer or save to disk.
    ///
    /// # Errors
    ///
    /// `Status(404)` for unknown templates.
    pub async fn download_template(&self, template_id: Uuid) -> Result<Vec<u8>, ApiError> {
        let response = self
            .http
            .get(self.endpoint(&format!("/api/templates/{template_id}/download")))
            .send()
            .await?;
        let response = require_success(response)?;
        Ok(response.bytes().await?.to_vec())
    }
}

fn require_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status(response.status()))
    }
}

fn ok_status(response: reqwest::Response) -> Result<(), ApiError> {
    require_success(response).map(|_| ())
}

async fn ok_json<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    Ok(require_success(response)?.json::<T>().await?)
}
