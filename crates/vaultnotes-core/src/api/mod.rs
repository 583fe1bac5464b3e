//! Typed HTTP client for the VaultNotes backend.
//!
//! Every operation has an explicit request/response shape; there are no ad hoc
//! payload maps. Authenticated calls take the access credential explicitly and
//! attach it as a bearer header.

use std::sync::Arc;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::auth::{AuthApi, TokenPair};
use crate::config::{normalize_base_url, ConfigError};
use crate::models::{MonthlyCount, Note, NoteId};
use crate::notes::NotesBackend;
use crate::util::compact_text;

const TOKEN_PATH: &str = "/api/token/";
const REGISTER_PATH: &str = "/api/user/register/";
const NOTES_PATH: &str = "/api/notes/";
const TOTAL_NOTES_PATH: &str = "/api/stats/notes/total/";
const TOTAL_USERS_PATH: &str = "/api/stats/users/total/";
const MONTHLY_NOTES_PATH: &str = "/api/stats/notes/monthly/";
const MONTHLY_USERS_PATH: &str = "/api/stats/users/monthly/";

/// Fallback shown when the server supplies no detail message.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred. Please try again.";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(#[from] ConfigError),
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Failed to parse JSON payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("API request failed (HTTP {status})")]
    Api {
        status: u16,
        message: Option<String>,
    },
}

impl ApiError {
    /// The message to surface to the user: the server-supplied detail when
    /// present, otherwise a generic notice.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Api {
                message: Some(message),
                ..
            } => message.clone(),
            _ => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Body for both note creation and update.
#[derive(Debug, Clone, Serialize)]
pub struct NotePayload {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
struct TotalNotesResponse {
    total_notes: u64,
}

#[derive(Debug, Deserialize)]
struct TotalUsersResponse {
    total_users: u64,
}

/// HTTP client for the VaultNotes backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    /// Builds a client for an explicit API base URL.
    pub fn new(base_url: impl AsRef<str>) -> ApiResult<Self> {
        let base_url = normalize_base_url(base_url.as_ref())?;
        let client = reqwest::Client::builder().build()?;
        Ok(Self { base_url, client })
    }

    /// Returns the base URL this client was configured with.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Exchange username/password for a token pair.
    pub async fn login(&self, request: &LoginRequest) -> ApiResult<TokenPair> {
        let response = self
            .client
            .post(self.url(TOKEN_PATH))
            .json(request)
            .send()
            .await?;
        let response = expect_success(response).await?;
        Ok(response.json::<TokenPair>().await?)
    }

    /// Create an account. Success carries no credential payload.
    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<()> {
        let response = self
            .client
            .post(self.url(REGISTER_PATH))
            .json(request)
            .send()
            .await?;
        expect_success(response).await?;
        Ok(())
    }

    /// Fetch the full note collection in server order.
    ///
    /// A malformed or empty body yields an empty collection rather than a
    /// failure; only transport and status errors propagate.
    pub async fn list_notes(&self, access: &str) -> ApiResult<Vec<Note>> {
        let response = self
            .client
            .get(self.url(NOTES_PATH))
            .bearer_auth(access)
            .send()
            .await?;
        let response = expect_success(response).await?;
        let body = response.text().await?;
        Ok(parse_note_list(&body))
    }

    pub async fn create_note(&self, access: &str, payload: &NotePayload) -> ApiResult<()> {
        let response = self
            .client
            .post(self.url(NOTES_PATH))
            .bearer_auth(access)
            .json(payload)
            .send()
            .await?;
        expect_success(response).await?;
        Ok(())
    }

    pub async fn update_note(
        &self,
        access: &str,
        id: NoteId,
        payload: &NotePayload,
    ) -> ApiResult<()> {
        let response = self
            .client
            .put(self.url(&note_update_path(id)))
            .bearer_auth(access)
            .json(payload)
            .send()
            .await?;
        expect_success(response).await?;
        Ok(())
    }

    /// Delete a note. The server signals success with 204 and nothing else.
    pub async fn delete_note(&self, access: &str, id: NoteId) -> ApiResult<()> {
        let response = self
            .client
            .delete(self.url(&note_delete_path(id)))
            .bearer_auth(access)
            .send()
            .await?;
        let status = response.status();
        if status == StatusCode::NO_CONTENT {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(api_failure(status, &body))
    }

    pub async fn total_notes(&self, access: &str) -> ApiResult<u64> {
        let payload: TotalNotesResponse = self.get_json(access, TOTAL_NOTES_PATH).await?;
        Ok(payload.total_notes)
    }

    pub async fn total_users(&self, access: &str) -> ApiResult<u64> {
        let payload: TotalUsersResponse = self.get_json(access, TOTAL_USERS_PATH).await?;
        Ok(payload.total_users)
    }

    pub async fn notes_per_month(&self, access: &str) -> ApiResult<Vec<MonthlyCount>> {
        self.get_json(access, MONTHLY_NOTES_PATH).await
    }

    pub async fn users_per_month(&self, access: &str) -> ApiResult<Vec<MonthlyCount>> {
        self.get_json(access, MONTHLY_USERS_PATH).await
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        access: &str,
        path: &str,
    ) -> ApiResult<T> {
        let response = self
            .client
            .get(self.url(path))
            .bearer_auth(access)
            .header("Accept", "application/json")
            .send()
            .await?;
        let response = expect_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

impl AuthApi for ApiClient {
    async fn login(&self, request: &LoginRequest) -> ApiResult<TokenPair> {
        Self::login(self, request).await
    }

    async fn register(&self, request: &RegisterRequest) -> ApiResult<()> {
        Self::register(self, request).await
    }
}

/// Authenticated notes backend: an [`ApiClient`] bound to an access credential.
#[derive(Debug, Clone)]
pub struct NotesApi {
    client: Arc<ApiClient>,
    access: String,
}

impl NotesApi {
    pub fn new(client: Arc<ApiClient>, access: impl Into<String>) -> Self {
        Self {
            client,
            access: access.into(),
        }
    }
}

impl NotesBackend for NotesApi {
    async fn list(&self) -> ApiResult<Vec<Note>> {
        self.client.list_notes(&self.access).await
    }

    async fn create(&self, payload: &NotePayload) -> ApiResult<()> {
        self.client.create_note(&self.access, payload).await
    }

    async fn update(&self, id: NoteId, payload: &NotePayload) -> ApiResult<()> {
        self.client.update_note(&self.access, id, payload).await
    }

    async fn delete(&self, id: NoteId) -> ApiResult<()> {
        self.client.delete_note(&self.access, id).await
    }
}

fn note_update_path(id: NoteId) -> String {
    format!("/api/notes/update/{id}/")
}

fn note_delete_path(id: NoteId) -> String {
    format!("/api/notes/delete/{id}/")
}

async fn expect_success(response: reqwest::Response) -> ApiResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(api_failure(status, &body))
}

/// Parse a list response body, substituting an empty collection for anything
/// that is not a well-formed note array.
fn parse_note_list(body: &str) -> Vec<Note> {
    match serde_json::from_str::<Vec<Note>>(body) {
        Ok(notes) => notes,
        Err(error) => {
            if !body.trim().is_empty() {
                tracing::warn!("Discarding malformed note list response: {error}");
            }
            Vec::new()
        }
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    detail: Option<String>,
    message: Option<String>,
    error: Option<String>,
}

fn api_failure(status: StatusCode, body: &str) -> ApiError {
    ApiError::Api {
        status: status.as_u16(),
        message: extract_error_message(body),
    }
}

/// Pull the server's human-readable detail out of an error body, if any.
fn extract_error_message(body: &str) -> Option<String> {
    if let Ok(payload) = serde_json::from_str::<ApiErrorBody>(body) {
        if let Some(message) = payload.detail.or(payload.message).or(payload.error) {
            let message = message.trim();
            if !message.is_empty() {
                return Some(message.to_string());
            }
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() || trimmed.starts_with('{') || trimmed.starts_with('<') {
        None
    } else {
        Some(compact_text(trimmed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn extract_error_message_prefers_detail_field() {
        let message = extract_error_message(r#"{"detail": "Invalid credentials"}"#);
        assert_eq!(message.as_deref(), Some("Invalid credentials"));
    }

    #[test]
    fn extract_error_message_falls_through_known_fields() {
        let message = extract_error_message(r#"{"message": "Too many requests"}"#);
        assert_eq!(message.as_deref(), Some("Too many requests"));
    }

    #[test]
    fn extract_error_message_ignores_html_and_empty_bodies() {
        assert_eq!(extract_error_message(""), None);
        assert_eq!(extract_error_message("<html>502</html>"), None);
        assert_eq!(extract_error_message(r#"{"unrelated": 1}"#), None);
    }

    #[test]
    fn user_message_surfaces_server_detail_verbatim() {
        let error = api_failure(
            StatusCode::UNAUTHORIZED,
            r#"{"detail": "Invalid credentials"}"#,
        );
        assert_eq!(error.user_message(), "Invalid credentials");
    }

    #[test]
    fn user_message_falls_back_to_generic_notice() {
        let error = api_failure(StatusCode::BAD_GATEWAY, "");
        assert_eq!(error.user_message(), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn parse_note_list_tolerates_malformed_bodies() {
        assert!(parse_note_list("").is_empty());
        assert!(parse_note_list("not json").is_empty());
        assert!(parse_note_list(r#"{"id": 1}"#).is_empty());

        let notes = parse_note_list(r#"[{"id": 2, "title": "b"}, {"id": 1, "title": "a"}]"#);
        assert_eq!(notes.len(), 2);
        // Server order is preserved, never re-sorted.
        assert_eq!(notes[0].id, NoteId::new(2));
    }

    #[test]
    fn note_paths_embed_the_id() {
        assert_eq!(note_update_path(NoteId::new(7)), "/api/notes/update/7/");
        assert_eq!(note_delete_path(NoteId::new(7)), "/api/notes/delete/7/");
    }

    #[test]
    fn client_rejects_invalid_base_url() {
        assert!(ApiClient::new("notes.example.com").is_err());
        let client = ApiClient::new("http://localhost:8000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
    }
}
