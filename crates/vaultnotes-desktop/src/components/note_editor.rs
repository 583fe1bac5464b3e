//! Note editor component

use dioxus::prelude::*;

use vaultnotes_core::notes::NotesSyncer;

use crate::state::AppState;

/// Draft editor for creating a new note or editing an existing one.
///
/// A failed save keeps the draft open with an error message; the editor only
/// returns to the list view on cancel or a successful save.
#[component]
pub fn NoteEditor() -> Element {
    let mut state = use_context::<AppState>();
    let store = (state.notes)();
    let busy = store.mutation_in_flight();
    let error = store.last_error().map(str::to_string);

    let Some(draft) = store.draft() else {
        return rsx! {
            div {
                class: "editor-empty",
                style: "
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    height: 100%;
                    color: #5f6368;
                ",
                "Select a note or create a new one"
            }
        };
    };

    let heading = if draft.is_editing() {
        "Edit note"
    } else {
        "New note"
    };

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(api) = state.notes_api() else {
            return;
        };
        let draft = {
            let mut store = state.notes.write();
            let Some(draft) = store.draft().cloned() else {
                return;
            };
            if !store.begin_mutation() {
                return;
            }
            draft
        };
        spawn(async move {
            let outcome = NotesSyncer::new(api).submit(&draft).await;
            state.notes.write().apply_submit(outcome);
        });
    };

    rsx! {
        form {
            class: "document-editor",
            style: "
                display: flex;
                flex-direction: column;
                height: 100%;
                padding: 24px;
                gap: 12px;
            ",
            onsubmit: handle_save,

            div {
                style: "display: flex; align-items: center; gap: 12px;",
                h2 { style: "flex: 1; margin: 0; font-size: 18px;", "{heading}" }
                button {
                    style: "
                        padding: 8px 20px;
                        border: none;
                        border-radius: 6px;
                        background: #1a73e8;
                        color: #ffffff;
                        font-weight: 600;
                        cursor: pointer;
                    ",
                    r#type: "submit",
                    disabled: busy,
                    if busy { "Saving..." } else { "Save Note" }
                }
                button {
                    style: "
                        padding: 8px 20px;
                        border: 1px solid #dadce0;
                        border-radius: 6px;
                        background: #ffffff;
                        cursor: pointer;
                    ",
                    r#type: "button",
                    onclick: move |_| {
                        state.notes.write().cancel_draft();
                    },
                    "Close"
                }
            }

            if let Some(message) = error {
                div {
                    style: "color: #ea4335; font-size: 13px;",
                    "{message}"
                }
            }

            input {
                class: "editor-title",
                style: "
                    padding: 10px 12px;
                    border: 1px solid #dadce0;
                    border-radius: 6px;
                    font-size: 18px;
                    font-weight: 600;
                    outline: none;
                ",
                r#type: "text",
                placeholder: "Title",
                value: "{draft.title}",
                oninput: move |evt| {
                    state.notes.write().set_draft_title(evt.value());
                },
            }

            textarea {
                class: "editable-area",
                style: "
                    flex: 1;
                    padding: 12px;
                    border: 1px solid #dadce0;
                    border-radius: 6px;
                    font-size: 14px;
                    font-family: inherit;
                    resize: none;
                    outline: none;
                ",
                placeholder: "Start writing...",
                value: "{draft.content}",
                oninput: move |evt| {
                    state.notes.write().set_draft_content(evt.value());
                },
            }
        }
    }
}
