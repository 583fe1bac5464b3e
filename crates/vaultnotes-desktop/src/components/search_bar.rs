//! Search bar component

use dioxus::prelude::*;

use crate::state::AppState;

/// Search input filtering the note list by title.
///
/// Purely local: every keystroke recomputes the projection, nothing is
/// dispatched remotely.
#[component]
pub fn SearchBar() -> Element {
    let mut state = use_context::<AppState>();

    rsx! {
        div {
            class: "search-bar",
            style: "padding: 12px 16px; border-bottom: 1px solid #dadce0;",

            input {
                r#type: "text",
                placeholder: "Search notes...",
                value: "{state.search_query}",
                oninput: move |evt| {
                    state.search_query.set(evt.value());
                },
                style: "
                    width: 100%;
                    padding: 8px 12px;
                    border: 1px solid #dadce0;
                    border-radius: 6px;
                    font-size: 14px;
                    outline: none;
                ",
            }
        }
    }
}
