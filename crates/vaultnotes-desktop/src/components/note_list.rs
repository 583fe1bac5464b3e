//! Note list component

use dioxus::prelude::*;

use vaultnotes_core::models::NoteId;
use vaultnotes_core::notes::NotesSyncer;

use super::NoteCard;
use crate::state::AppState;

/// List of notes filtered by the current search query.
#[component]
pub fn NoteList() -> Element {
    let mut state = use_context::<AppState>();
    let store = (state.notes)();
    let query = (state.search_query)();
    let filtered = store.filtered(&query);
    let selected = store.draft().and_then(|draft| draft.target);

    let delete_note = move |id: NoteId| {
        let Some(api) = state.notes_api() else {
            return;
        };
        // One mutation at a time; a second delete while one is outstanding
        // is refused, not queued.
        if !state.notes.write().begin_mutation() {
            return;
        }
        spawn(async move {
            let outcome = NotesSyncer::new(api).delete(id).await;
            state.notes.write().apply_delete(outcome);
        });
    };

    rsx! {
        div {
            class: "note-list",
            style: "flex: 1; overflow-y: auto; background: #ffffff;",

            if filtered.is_empty() {
                div {
                    style: "padding: 20px; text-align: center; color: #5f6368;",
                    if query.is_empty() { "No notes yet" } else { "No notes match your search" }
                }
            } else {
                for note in filtered {
                    {
                        let note_id = note.id;
                        let is_selected = selected == Some(note_id);

                        rsx! {
                            NoteCard {
                                key: "{note_id}",
                                note,
                                is_selected,
                                onselect: move |id| {
                                    state.notes.write().open_edit(id);
                                },
                                ondelete: delete_note,
                            }
                        }
                    }
                }
            }
        }
    }
}
