//! Note card component

use dioxus::prelude::*;

use vaultnotes_core::models::{Note, NoteId};

/// A single note row rendered in the note list.
#[component]
pub fn NoteCard(
    note: Note,
    is_selected: bool,
    onselect: EventHandler<NoteId>,
    ondelete: EventHandler<NoteId>,
) -> Element {
    let id = note.id;
    let title = note.title_preview(40);
    let preview = note.content_preview(60);

    let border_left = if is_selected {
        "3px solid #1976d2"
    } else {
        "3px solid transparent"
    };

    rsx! {
        div {
            class: if is_selected { "note-item selected" } else { "note-item" },
            style: "
                display: flex;
                align-items: center;
                border-bottom: 1px solid #e8eaed;
                border-left: {border_left};
                cursor: pointer;
                background: #ffffff;
                padding: 12px 16px;
            ",
            onclick: move |_| onselect.call(id),

            div {
                style: "flex: 1; min-width: 0;",
                div {
                    class: "note-title",
                    style: "
                        font-weight: 500;
                        margin-bottom: 4px;
                        overflow: hidden;
                        text-overflow: ellipsis;
                        white-space: nowrap;
                    ",
                    "{title}"
                }
                div {
                    class: "note-preview",
                    style: "
                        font-size: 12px;
                        color: #5f6368;
                        overflow: hidden;
                        text-overflow: ellipsis;
                        white-space: nowrap;
                    ",
                    "{preview}"
                }
            }

            button {
                style: "
                    border: none;
                    background: none;
                    color: #ea4335;
                    font-size: 12px;
                    cursor: pointer;
                ",
                onclick: move |evt| {
                    evt.stop_propagation();
                    ondelete.call(id);
                },
                "Delete"
            }
        }
    }
}
