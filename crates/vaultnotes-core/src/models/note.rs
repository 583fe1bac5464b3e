//! Note model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// A unique identifier for a note, assigned by the server.
///
/// Ids are opaque to the client: they are never synthesized locally and only
/// ever come out of a list response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(i64);

impl NoteId {
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// A note as recorded by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Server-assigned identifier, immutable once created
    pub id: NoteId,
    /// Display title, always non-empty on the server
    pub title: String,
    /// Body text, may be empty
    #[serde(default)]
    pub content: String,
}

impl Note {
    /// Get the title truncated to `max_len` characters for list previews.
    #[must_use]
    pub fn title_preview(&self, max_len: usize) -> String {
        self.title.chars().take(max_len).collect()
    }

    /// Get the first line of the content truncated for list previews.
    #[must_use]
    pub fn content_preview(&self, max_len: usize) -> String {
        self.content
            .lines()
            .next()
            .unwrap_or("")
            .chars()
            .take(max_len)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn note_id_round_trips_through_display() {
        let id = NoteId::new(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!("42".parse::<NoteId>().unwrap(), id);
    }

    #[test]
    fn note_deserializes_with_missing_content() {
        let note: Note = serde_json::from_str(r#"{"id": 7, "title": "Groceries"}"#).unwrap();
        assert_eq!(note.id, NoteId::new(7));
        assert_eq!(note.title, "Groceries");
        assert_eq!(note.content, "");
    }

    #[test]
    fn previews_truncate_to_requested_length() {
        let note = Note {
            id: NoteId::new(1),
            title: "A rather long title".to_string(),
            content: "first line\nsecond line".to_string(),
        };
        assert_eq!(note.title_preview(8), "A rather");
        assert_eq!(note.content_preview(40), "first line");
    }
}
