//! Authenticated notes workspace: sidebar list plus editor pane.

use dioxus::prelude::*;

use vaultnotes_core::notes::{EditorState, NotesSyncer};

use crate::app::Route;
use crate::components::{Header, NoteEditor, NoteList, SearchBar};
use crate::state::AppState;

#[component]
pub fn Home() -> Element {
    let mut state = use_context::<AppState>();
    let nav = use_navigator();

    // Gate the view: anonymous visitors are bounced to the login form.
    use_effect(move || {
        if !state.is_authenticated() {
            nav.replace(Route::Login {});
        }
    });

    // Initial collection fetch, once per mount.
    let mut loaded = use_signal(|| false);
    use_effect(move || {
        if loaded() || !state.is_authenticated() {
            return;
        }
        let Some(backend) = state.notes_api() else {
            return;
        };
        loaded.set(true);
        spawn(async move {
            let outcome = NotesSyncer::new(backend).load().await;
            state.notes.write().apply_load(outcome);
        });
    });

    if !state.is_authenticated() {
        return rsx! {
            Header {}
        };
    }

    let error_banner = {
        let store = (state.notes)();
        if *store.editor() == EditorState::Viewing {
            store.last_error().map(str::to_string)
        } else {
            None
        }
    };

    rsx! {
        Header {}
        div {
            class: "notes-layout",
            style: "
                display: flex;
                gap: 24px;
                max-width: 1080px;
                margin: 0 auto;
                padding: 24px;
                align-items: flex-start;
            ",

            div {
                class: "notes-sidebar",
                style: "width: 320px; flex-shrink: 0;",

                SearchBar {}

                button {
                    style: "
                        width: 100%;
                        margin: 12px 0;
                        padding: 10px;
                        border: none;
                        border-radius: 6px;
                        background: #1976d2;
                        color: #ffffff;
                        font-weight: 600;
                        cursor: pointer;
                    ",
                    onclick: move |_| {
                        state.notes.write().open_create();
                    },
                    "+ Create Note"
                }

                h2 {
                    style: "margin: 8px 0 12px; font-size: 16px;",
                    "My Notes"
                }

                if let Some(message) = error_banner {
                    div {
                        style: "
                            margin-bottom: 12px;
                            padding: 8px 12px;
                            border-radius: 6px;
                            background: #fdecea;
                            color: #ea4335;
                            font-size: 13px;
                        ",
                        "{message}"
                    }
                }

                NoteList {}
            }

            div {
                class: "notes-editor-pane",
                style: "flex: 1;",
                NoteEditor {}
            }
        }
    }
}
