//! Core data types for notes.
//!
//! A [`Note`] is the only persisted entity. Its id and timestamps are assigned
//! by the backend; clients only ever send a [`NoteInput`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// ID Types
// ============================================================================

/// Unique identifier for a note.
///
/// Opaque to clients: the backend decides the format and clients only compare
/// and echo it back in resource paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    /// Wraps a backend-assigned identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for NoteId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

impl From<String> for NoteId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for NoteId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for NoteId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// Core Domain Types
// ============================================================================

/// A persisted, user-authored note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Backend-assigned identifier, immutable after creation.
    pub id: NoteId,

    /// Free-text title, may be empty.
    pub title: String,

    /// Free-text body, may be empty.
    pub content: String,

    /// Set once at creation.
    #[serde(with = "crate::timestamp")]
    pub created_at: DateTime<Utc>,

    /// Set at creation and refreshed by the backend on every edit.
    #[serde(with = "crate::timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Title to show to a reader; `Untitled` when empty.
    #[must_use]
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            "Untitled"
        } else {
            &self.title
        }
    }

    /// Content to show to a reader; `No content` when empty.
    #[must_use]
    pub fn display_content(&self) -> &str {
        if self.content.is_empty() {
            "No content"
        } else {
            &self.content
        }
    }

    /// Whether the note has been edited since it was created.
    #[must_use]
    pub fn was_edited(&self) -> bool {
        self.updated_at != self.created_at
    }
}

/// Request body for creating or updating a note.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NoteInput {
    pub title: String,
    pub content: String,
}

impl NoteInput {
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// True when both fields are empty or whitespace-only.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty() && self.content.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_note() -> Note {
        let created = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        Note {
            id: NoteId::new("a1"),
            title: "Groceries".to_string(),
            content: "Milk, eggs".to_string(),
            created_at: created,
            updated_at: created,
        }
    }

    #[test]
    fn note_uses_camel_case_on_the_wire() {
        let json = serde_json::to_value(sample_note()).unwrap();
        assert_eq!(json["id"], "a1");
        assert_eq!(json["createdAt"], "2024-05-01T09:30:00Z");
        assert_eq!(json["updatedAt"], "2024-05-01T09:30:00Z");
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn note_accepts_naive_backend_timestamps() {
        let json = r#"{
            "id": "0d9f",
            "title": "",
            "content": "body",
            "createdAt": "2024-05-01T09:30:00",
            "updatedAt": "2024-05-02T10:00:00.123456"
        }"#;
        let note: Note = serde_json::from_str(json).unwrap();
        assert_eq!(note.id.as_str(), "0d9f");
        assert!(note.updated_at > note.created_at);
        assert!(note.was_edited());
    }

    #[test]
    fn note_rejects_bad_timestamp() {
        let json = r#"{"id":"x","title":"","content":"","createdAt":"soon","updatedAt":"soon"}"#;
        assert!(serde_json::from_str::<Note>(json).is_err());
    }

    #[test]
    fn display_placeholders() {
        let mut note = sample_note();
        assert_eq!(note.display_title(), "Groceries");
        note.title.clear();
        note.content.clear();
        assert_eq!(note.display_title(), "Untitled");
        assert_eq!(note.display_content(), "No content");
        assert!(!note.was_edited());
    }

    #[test]
    fn note_id_is_opaque() {
        let id: NoteId = "not-a-uuid/with slash".parse().unwrap();
        assert_eq!(id.to_string(), "not-a-uuid/with slash");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"not-a-uuid/with slash\"");
    }

    #[test]
    fn input_blank_detection() {
        assert!(NoteInput::new("", "").is_blank());
        assert!(NoteInput::new("  ", "\n\t").is_blank());
        assert!(!NoteInput::new("", "x").is_blank());
        assert!(!NoteInput::new(" t ", "").is_blank());
    }
}
