//! Notes store and synchronizer.
//!
//! The store holds the client's copy of the collection plus transient editor
//! state; the synchronizer issues the remote operations and produces outcomes
//! the store applies. The collection is only ever replaced wholesale from a
//! successful list response, never patched locally, so the client can never
//! display a note the server has not recorded.

use crate::api::{ApiResult, NotePayload};
use crate::models::{Note, NoteId};

/// Remote operations the synchronizer depends on.
pub trait NotesBackend {
    async fn list(&self) -> ApiResult<Vec<Note>>;
    async fn create(&self, payload: &NotePayload) -> ApiResult<()>;
    async fn update(&self, id: NoteId, payload: &NotePayload) -> ApiResult<()>;
    async fn delete(&self, id: NoteId) -> ApiResult<()>;
}

impl<B: NotesBackend> NotesBackend for &B {
    async fn list(&self) -> ApiResult<Vec<Note>> {
        (**self).list().await
    }

    async fn create(&self, payload: &NotePayload) -> ApiResult<()> {
        (**self).create(payload).await
    }

    async fn update(&self, id: NoteId, payload: &NotePayload) -> ApiResult<()> {
        (**self).update(id, payload).await
    }

    async fn delete(&self, id: NoteId) -> ApiResult<()> {
        (**self).delete(id).await
    }
}

/// An unsaved editor draft.
///
/// `target == None` means a new note is being created; `Some(id)` means the
/// note with that id is being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub target: Option<NoteId>,
    pub title: String,
    pub content: String,
}

impl Draft {
    /// Whether this draft edits an existing note rather than creating one.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.target.is_some()
    }
}

/// Editor portion of the notes state machine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditorState {
    /// Collection displayed, no draft open.
    #[default]
    Viewing,
    /// A draft is open; at most one at a time.
    Drafting(Draft),
}

/// Result of fetching the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(Vec<Note>),
    Failed(String),
}

/// Result of submitting a draft (create or update).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The mutation succeeded. `refreshed` carries the follow-up list result;
    /// `None` means the re-list itself failed and the collection keeps its
    /// last-known-good contents.
    Saved { refreshed: Option<Vec<Note>> },
    /// Validation or remote failure; the draft stays open for retry.
    Rejected(String),
}

/// Result of deleting a note from the list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted { refreshed: Option<Vec<Note>> },
    Failed(String),
}

/// Client-held copy of the note collection plus transient editor state.
#[derive(Debug, Clone, Default)]
pub struct NotesStore {
    notes: Vec<Note>,
    editor: EditorState,
    mutation_in_flight: bool,
    last_error: Option<String>,
}

impl NotesStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The collection in server order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn editor(&self) -> &EditorState {
        &self.editor
    }

    /// The open draft, if any.
    pub fn draft(&self) -> Option<&Draft> {
        match &self.editor {
            EditorState::Viewing => None,
            EditorState::Drafting(draft) => Some(draft),
        }
    }

    /// Message from the most recent failure, until the next success.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    /// Whether a create/update/delete is outstanding. While true, further
    /// mutations are refused rather than queued.
    pub fn mutation_in_flight(&self) -> bool {
        self.mutation_in_flight
    }

    /// Claim the mutation slot. Returns `false` when one is already in
    /// flight; the caller must not dispatch in that case.
    pub fn begin_mutation(&mut self) -> bool {
        if self.mutation_in_flight {
            return false;
        }
        self.mutation_in_flight = true;
        true
    }

    /// Open an empty draft for a new note, discarding any open draft.
    pub fn open_create(&mut self) {
        self.editor = EditorState::Drafting(Draft::default());
    }

    /// Open a draft pre-populated from the local copy of `id`.
    ///
    /// Returns `false` (leaving the editor untouched) when the id is not in
    /// the collection.
    pub fn open_edit(&mut self, id: NoteId) -> bool {
        let Some(note) = self.notes.iter().find(|note| note.id == id) else {
            return false;
        };
        self.editor = EditorState::Drafting(Draft {
            target: Some(id),
            title: note.title.clone(),
            content: note.content.clone(),
        });
        true
    }

    /// Discard the open draft without persisting it.
    pub fn cancel_draft(&mut self) {
        self.editor = EditorState::Viewing;
    }

    pub fn set_draft_title(&mut self, title: impl Into<String>) {
        if let EditorState::Drafting(draft) = &mut self.editor {
            draft.title = title.into();
        }
    }

    pub fn set_draft_content(&mut self, content: impl Into<String>) {
        if let EditorState::Drafting(draft) = &mut self.editor {
            draft.content = content.into();
        }
    }

    /// Apply a list outcome. Failure leaves the collection last-known-good.
    pub fn apply_load(&mut self, outcome: LoadOutcome) {
        match outcome {
            LoadOutcome::Loaded(notes) => {
                self.notes = notes;
                self.last_error = None;
            }
            LoadOutcome::Failed(message) => {
                self.last_error = Some(message);
            }
        }
    }

    /// Apply a submit outcome: close the editor on success, keep the draft on
    /// failure. Releases the mutation slot either way.
    pub fn apply_submit(&mut self, outcome: SubmitOutcome) {
        self.mutation_in_flight = false;
        match outcome {
            SubmitOutcome::Saved { refreshed } => {
                if let Some(notes) = refreshed {
                    self.notes = notes;
                }
                self.editor = EditorState::Viewing;
                self.last_error = None;
            }
            SubmitOutcome::Rejected(message) => {
                self.last_error = Some(message);
            }
        }
    }

    /// Apply a delete outcome. The collection is never trimmed optimistically;
    /// only the follow-up list changes it.
    pub fn apply_delete(&mut self, outcome: DeleteOutcome) {
        self.mutation_in_flight = false;
        match outcome {
            DeleteOutcome::Deleted { refreshed } => {
                if let Some(notes) = refreshed {
                    self.notes = notes;
                }
                self.last_error = None;
            }
            DeleteOutcome::Failed(message) => {
                self.last_error = Some(message);
            }
        }
    }

    /// Case-insensitive title filter; a pure projection that preserves server
    /// order and never dispatches remotely. An empty query returns everything.
    #[must_use]
    pub fn filtered(&self, query: &str) -> Vec<Note> {
        let query = query.to_lowercase();
        self.notes
            .iter()
            .filter(|note| query.is_empty() || note.title.to_lowercase().contains(&query))
            .cloned()
            .collect()
    }
}

/// Issues the remote operations and reconciles their outcomes.
///
/// Every successful mutation is followed by a full re-list; the client never
/// synthesizes ids or patches server-owned fields.
#[derive(Debug, Clone)]
pub struct NotesSyncer<B: NotesBackend> {
    backend: B,
}

impl<B: NotesBackend> NotesSyncer<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Fetch the collection for wholesale replacement.
    pub async fn load(&self) -> LoadOutcome {
        match self.backend.list().await {
            Ok(notes) => LoadOutcome::Loaded(notes),
            Err(error) => {
                tracing::warn!("Failed to fetch notes: {error}");
                LoadOutcome::Failed(error.user_message())
            }
        }
    }

    /// Submit a draft: create when `target` is unset, update otherwise.
    ///
    /// An empty title is rejected before anything is dispatched.
    pub async fn submit(&self, draft: &Draft) -> SubmitOutcome {
        let title = draft.title.trim();
        if title.is_empty() {
            return SubmitOutcome::Rejected("Title is required".to_string());
        }

        let payload = NotePayload {
            title: title.to_string(),
            content: draft.content.clone(),
        };
        let result = match draft.target {
            Some(id) => self.backend.update(id, &payload).await,
            None => self.backend.create(&payload).await,
        };

        match result {
            Ok(()) => SubmitOutcome::Saved {
                refreshed: self.relist().await,
            },
            Err(error) => {
                tracing::warn!("Failed to save note: {error}");
                SubmitOutcome::Rejected(error.user_message())
            }
        }
    }

    /// Delete a note by id; success is gated on the server's explicit status.
    pub async fn delete(&self, id: NoteId) -> DeleteOutcome {
        match self.backend.delete(id).await {
            Ok(()) => DeleteOutcome::Deleted {
                refreshed: self.relist().await,
            },
            Err(error) => {
                tracing::warn!("Failed to delete note {id}: {error}");
                DeleteOutcome::Failed(error.user_message())
            }
        }
    }

    async fn relist(&self) -> Option<Vec<Note>> {
        match self.backend.list().await {
            Ok(notes) => Some(notes),
            Err(error) => {
                tracing::warn!("Re-list after mutation failed: {error}");
                None
            }
        }
    }
}
