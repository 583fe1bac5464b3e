//! Main application component and routes

use std::sync::Arc;

use dioxus::prelude::*;

use vaultnotes_core::api::ApiClient;
use vaultnotes_core::auth::SessionPersistence;
use vaultnotes_core::config::ClientConfig;
use vaultnotes_core::notes::NotesStore;

use crate::services::KeyringSessionStore;
use crate::state::AppState;
use crate::views::{Admin, Home, Landing, Login, Register};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/home")]
    Home {},
    #[route("/admin")]
    Admin {},
}

/// Root application component
#[component]
pub fn App() -> Element {
    let api = use_signal(|| match ApiClient::new(&ClientConfig::from_env().api_base_url) {
        Ok(client) => Some(Arc::new(client)),
        Err(error) => {
            tracing::error!("Failed to construct API client: {error}");
            None
        }
    });

    // Hydrate the session from durable storage before the first render.
    let session = use_signal(|| match KeyringSessionStore::default().load() {
        Ok(tokens) => tokens,
        Err(error) => {
            tracing::warn!("Failed to load persisted session: {error}");
            None
        }
    });

    let notes = use_signal(NotesStore::new);
    let search_query = use_signal(String::new);

    use_context_provider(|| AppState {
        api,
        session,
        notes,
        search_query,
    });

    rsx! {
        div {
            class: "app-container",
            style: "
                min-height: 100vh;
                font-family: system-ui, -apple-system, sans-serif;
                background: #f8f9fa;
                color: #202124;
            ",
            Router::<Route> {}
        }
    }
}
