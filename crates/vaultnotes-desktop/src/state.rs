//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use std::sync::Arc;

use dioxus::prelude::*;

use vaultnotes_core::api::{ApiClient, NotesApi};
use vaultnotes_core::auth::{SessionController, SessionPersistence, TokenPair};
use vaultnotes_core::notes::NotesStore;

use crate::services::KeyringSessionStore;

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// API client, absent when the configured base URL is unusable
    pub api: Signal<Option<Arc<ApiClient>>>,
    /// Hydrated credential pair, if signed in
    pub session: Signal<Option<TokenPair>>,
    /// Note collection and editor state
    pub notes: Signal<NotesStore>,
    /// Current search query
    pub search_query: Signal<String>,
}

impl AppState {
    #[must_use]
    pub fn api_client(&self) -> Option<Arc<ApiClient>> {
        (self.api)()
    }

    /// View-gate predicate: a non-empty access credential is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        (self.session)().is_some_and(|tokens| !tokens.access.is_empty())
    }

    #[must_use]
    pub fn access_token(&self) -> Option<String> {
        (self.session)().map(|tokens| tokens.access)
    }

    /// Notes backend bound to the current access credential.
    #[must_use]
    pub fn notes_api(&self) -> Option<NotesApi> {
        Some(NotesApi::new(self.api_client()?, self.access_token()?))
    }

    /// Session controller over the keyring store.
    #[must_use]
    pub fn session_controller(&self) -> Option<SessionController<ApiClient, KeyringSessionStore>> {
        let api = self.api_client()?;
        Some(SessionController::new(
            (*api).clone(),
            KeyringSessionStore::default(),
        ))
    }

    /// Clear the stored credential pair and drop the in-memory session.
    pub fn logout(&mut self) {
        if let Some(controller) = self.session_controller() {
            controller.logout();
        } else if let Err(error) = KeyringSessionStore::default().clear() {
            tracing::warn!("Failed to clear stored session: {error}");
        }
        self.session.set(None);
        self.notes.set(NotesStore::new());
    }
}
