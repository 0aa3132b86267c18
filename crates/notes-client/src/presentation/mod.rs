//! Presentation state for note cards and the note composer.
//!
//! These units hold only transient draft state. Every change that must reach
//! the backend goes through [`NoteOperations`](crate::NoteOperations).

pub mod card;
pub mod composer;
pub mod text;

pub use card::{CardMode, CardView, NoteCard};
pub use composer::NoteComposer;

/// Unsaved title/content values being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub content: String,
}

impl Draft {
    /// True when both fields are empty or whitespace-only.
    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty() && self.content.trim().is_empty()
    }
}
