//! Session lifecycle: credential storage, login/registration, routing.

pub mod claims;

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::api::{ApiResult, LoginRequest, RegisterRequest};

pub use claims::{decode_claims, ClaimDecodeError, Claims, Role};

/// The bearer credential pair issued on login.
///
/// The access token authenticates every request; the refresh token is stored
/// for completeness but not consumed by this client.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

impl fmt::Debug for TokenPair {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("TokenPair")
            .field("access", &"[REDACTED]")
            .field("refresh", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("{0}")]
    Validation(&'static str),
    #[error("Another submission is already in flight")]
    Busy,
    #[error("{0}")]
    Remote(String),
    #[error("Failed to serialize session: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Secure storage error: {0}")]
    Storage(String),
}

impl SessionError {
    /// The message to show in the form's error surface.
    #[must_use]
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

pub type SessionResult<T> = Result<T, SessionError>;

/// Durable client-side storage for the credential pair.
///
/// The pair is persisted as a single value so a failed write never leaves one
/// credential behind without the other.
pub trait SessionPersistence: Clone + Send + Sync + 'static {
    fn load(&self) -> SessionResult<Option<TokenPair>>;
    fn save(&self, tokens: &TokenPair) -> SessionResult<()>;
    /// Remove both credentials; clearing an empty store is not an error.
    fn clear(&self) -> SessionResult<()>;
}

/// The remote calls the session controller depends on.
pub trait AuthApi {
    async fn login(&self, request: &LoginRequest) -> ApiResult<TokenPair>;
    async fn register(&self, request: &RegisterRequest) -> ApiResult<()>;
}

/// Which form is being submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitMode {
    Login,
    Register,
}

/// Raw form fields; `email` is only consulted for registration.
#[derive(Debug, Clone, Default)]
pub struct CredentialFields {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Where to navigate after a session operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Admin,
    Notes,
    Login,
}

/// Orchestrates login/registration, credential persistence, and the
/// post-login destination.
#[derive(Debug, Clone)]
pub struct SessionController<A: AuthApi, S: SessionPersistence> {
    api: A,
    store: S,
    busy: bool,
}

impl<A: AuthApi, S: SessionPersistence> SessionController<A, S> {
    pub fn new(api: A, store: S) -> Self {
        Self {
            api,
            store,
            busy: false,
        }
    }

    /// Whether a submission is currently in flight.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Submit the login or registration form.
    ///
    /// Validation failures reject before any remote call. On a failed remote
    /// call nothing is written to the store. The busy flag is cleared on every
    /// exit path.
    pub async fn submit(
        &mut self,
        mode: SubmitMode,
        fields: &CredentialFields,
    ) -> SessionResult<Destination> {
        if self.busy {
            return Err(SessionError::Busy);
        }
        validate_fields(mode, fields)?;

        self.busy = true;
        let outcome = self.dispatch(mode, fields).await;
        self.busy = false;
        outcome
    }

    async fn dispatch(
        &mut self,
        mode: SubmitMode,
        fields: &CredentialFields,
    ) -> SessionResult<Destination> {
        match mode {
            SubmitMode::Register => {
                let request = RegisterRequest {
                    username: fields.username.trim().to_string(),
                    email: fields.email.trim().to_string(),
                    password: fields.password.clone(),
                };
                self.api
                    .register(&request)
                    .await
                    .map_err(|error| SessionError::Remote(error.user_message()))?;
                // Registration does not imply an authenticated session.
                Ok(Destination::Login)
            }
            SubmitMode::Login => {
                let request = LoginRequest {
                    username: fields.username.trim().to_string(),
                    password: fields.password.clone(),
                };
                let tokens = self
                    .api
                    .login(&request)
                    .await
                    .map_err(|error| SessionError::Remote(error.user_message()))?;
                self.store.save(&tokens)?;
                Ok(destination_for(&tokens.access))
            }
        }
    }

    /// Clear the stored credential pair and return to the anonymous view.
    ///
    /// No remote call is made; the server session is left to expire.
    pub fn logout(&self) -> Destination {
        if let Err(error) = self.store.clear() {
            tracing::warn!("Failed to clear stored session: {error}");
        }
        Destination::Login
    }

    /// Load the persisted credential pair, if any.
    pub fn hydrate(&self) -> Option<TokenPair> {
        match self.store.load() {
            Ok(tokens) => tokens,
            Err(error) => {
                tracing::warn!("Failed to load persisted session: {error}");
                None
            }
        }
    }

    /// View-gate predicate: a non-empty access credential is present.
    ///
    /// Deliberately does not decode claims; role only matters at login time.
    pub fn is_authenticated(&self) -> bool {
        self.hydrate()
            .is_some_and(|tokens| !tokens.access.is_empty())
    }
}

/// Post-login destination from the decoded role; decode failures fail closed
/// to the regular notes view and never touch the stored credential.
fn destination_for(access: &str) -> Destination {
    match decode_claims(access) {
        Ok(Claims { role: Role::Admin }) => Destination::Admin,
        Ok(_) => Destination::Notes,
        Err(error) => {
            tracing::warn!("Could not decode access token claims: {error}");
            Destination::Notes
        }
    }
}

fn validate_fields(mode: SubmitMode, fields: &CredentialFields) -> SessionResult<()> {
    if fields.username.trim().is_empty() {
        return Err(SessionError::Validation("Username is required"));
    }
    if fields.password.trim().is_empty() {
        return Err(SessionError::Validation("Password is required"));
    }
    if mode == SubmitMode::Register && fields.email.trim().is_empty() {
        return Err(SessionError::Validation("Email is required"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;
    use std::sync::{Arc, Mutex};

    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine as _;
    use std::cell::Cell;

    use super::*;
    use crate::api::ApiError;

    #[derive(Clone, Default)]
    struct MemoryStore {
        tokens: Arc<Mutex<Option<TokenPair>>>,
    }

    impl SessionPersistence for MemoryStore {
        fn load(&self) -> SessionResult<Option<TokenPair>> {
            Ok(self.tokens.lock().unwrap().clone())
        }

        fn save(&self, tokens: &TokenPair) -> SessionResult<()> {
            *self.tokens.lock().unwrap() = Some(tokens.clone());
            Ok(())
        }

        fn clear(&self) -> SessionResult<()> {
            *self.tokens.lock().unwrap() = None;
            Ok(())
        }
    }

    struct FakeAuthApi {
        login_result: Result<TokenPair, (u16, String)>,
        register_ok: bool,
        login_calls: Rc<Cell<usize>>,
    }

    impl FakeAuthApi {
        fn logging_in_as(tokens: TokenPair) -> Self {
            Self {
                login_result: Ok(tokens),
                register_ok: true,
                login_calls: Rc::new(Cell::new(0)),
            }
        }

        fn rejecting(status: u16, detail: &str) -> Self {
            Self {
                login_result: Err((status, detail.to_string())),
                register_ok: false,
                login_calls: Rc::new(Cell::new(0)),
            }
        }
    }

    impl AuthApi for FakeAuthApi {
        async fn login(&self, _request: &LoginRequest) -> ApiResult<TokenPair> {
            self.login_calls.set(self.login_calls.get() + 1);
            match &self.login_result {
                Ok(tokens) => Ok(tokens.clone()),
                Err((status, detail)) => Err(ApiError::Api {
                    status: *status,
                    message: Some(detail.clone()),
                }),
            }
        }

        async fn register(&self, _request: &RegisterRequest) -> ApiResult<()> {
            if self.register_ok {
                Ok(())
            } else {
                Err(ApiError::Api {
                    status: 400,
                    message: Some("Registration failed".to_string()),
                })
            }
        }
    }

    fn token_with_role(role: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"role": "{role}"}}"#).as_bytes());
        format!("{header}.{payload}.sig")
    }

    fn pair_with_role(role: &str) -> TokenPair {
        TokenPair {
            access: token_with_role(role),
            refresh: "refresh-token".to_string(),
        }
    }

    fn fields() -> CredentialFields {
        CredentialFields {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "hunter2".to_string(),
        }
    }

    #[tokio::test]
    async fn admin_login_stores_tokens_and_routes_to_admin() {
        let store = MemoryStore::default();
        let mut controller =
            SessionController::new(FakeAuthApi::logging_in_as(pair_with_role("admin")), store);

        let destination = controller.submit(SubmitMode::Login, &fields()).await.unwrap();

        assert_eq!(destination, Destination::Admin);
        assert!(controller.is_authenticated());
        assert!(!controller.is_busy());
    }

    #[tokio::test]
    async fn regular_login_routes_to_notes() {
        let mut controller = SessionController::new(
            FakeAuthApi::logging_in_as(pair_with_role("member")),
            MemoryStore::default(),
        );

        let destination = controller.submit(SubmitMode::Login, &fields()).await.unwrap();
        assert_eq!(destination, Destination::Notes);
    }

    #[tokio::test]
    async fn undecodable_claims_fail_closed_but_keep_the_credential() {
        let opaque = TokenPair {
            access: "not-a-jwt".to_string(),
            refresh: "refresh".to_string(),
        };
        let mut controller = SessionController::new(
            FakeAuthApi::logging_in_as(opaque),
            MemoryStore::default(),
        );

        let destination = controller.submit(SubmitMode::Login, &fields()).await.unwrap();

        assert_eq!(destination, Destination::Notes);
        // Decode failure only affects routing; the session itself survives.
        assert!(controller.is_authenticated());
    }

    #[tokio::test]
    async fn failed_login_stores_nothing_and_surfaces_the_detail() {
        let store = MemoryStore::default();
        let mut controller = SessionController::new(
            FakeAuthApi::rejecting(401, "Invalid credentials"),
            store.clone(),
        );

        let error = controller
            .submit(SubmitMode::Login, &fields())
            .await
            .unwrap_err();

        assert_eq!(error.user_message(), "Invalid credentials");
        assert!(store.load().unwrap().is_none());
        assert!(!controller.is_busy());
    }

    #[tokio::test]
    async fn register_success_routes_to_login_without_a_session() {
        let store = MemoryStore::default();
        let mut controller = SessionController::new(
            FakeAuthApi::logging_in_as(pair_with_role("member")),
            store.clone(),
        );

        let destination = controller
            .submit(SubmitMode::Register, &fields())
            .await
            .unwrap();

        assert_eq!(destination, Destination::Login);
        assert!(store.load().unwrap().is_none());
    }

    #[tokio::test]
    async fn validation_rejects_before_any_remote_call() {
        let api = FakeAuthApi::logging_in_as(pair_with_role("member"));
        let calls = Rc::clone(&api.login_calls);
        let mut controller = SessionController::new(api, MemoryStore::default());

        let mut empty_password = fields();
        empty_password.password = "  ".to_string();
        assert!(matches!(
            controller.submit(SubmitMode::Login, &empty_password).await,
            Err(SessionError::Validation(_))
        ));

        let mut missing_email = fields();
        missing_email.email = String::new();
        assert!(matches!(
            controller
                .submit(SubmitMode::Register, &missing_email)
                .await,
            Err(SessionError::Validation(_))
        ));

        assert_eq!(calls.get(), 0);
    }

    #[tokio::test]
    async fn logout_clears_the_store() {
        let store = MemoryStore::default();
        let mut controller = SessionController::new(
            FakeAuthApi::logging_in_as(pair_with_role("member")),
            store.clone(),
        );
        controller.submit(SubmitMode::Login, &fields()).await.unwrap();
        assert!(controller.is_authenticated());

        assert_eq!(controller.logout(), Destination::Login);
        assert!(!controller.is_authenticated());
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn token_pair_debug_redacts_both_tokens() {
        let rendered = format!("{:?}", pair_with_role("admin"));
        assert!(!rendered.contains("refresh-token"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
