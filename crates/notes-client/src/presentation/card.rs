//! A single note card, switching between read and edit modes.

use chrono::{Local, NaiveDate};
use notes_core::{Note, NoteId};

use super::Draft;
use super::text::clamp;
use crate::operations::{Mutation, NoteOperations};

/// Lines of title shown in read mode.
pub const TITLE_LINES: usize = 2;

/// Lines of content shown in read mode.
pub const CONTENT_LINES: usize = 4;

/// Display mode of a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardMode {
    Read,
    Edit(Draft),
}

/// What a card shows in read mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub title: Vec<String>,
    pub content: Vec<String>,
    pub created: NaiveDate,
    /// Present only once the note has been edited.
    pub updated: Option<NaiveDate>,
}

/// Card state for one note.
#[derive(Debug, Clone)]
pub struct NoteCard {
    note: Note,
    mode: CardMode,
}

impl NoteCard {
    pub fn new(note: Note) -> Self {
        Self {
            note,
            mode: CardMode::Read,
        }
    }

    pub fn note(&self) -> &Note {
        &self.note
    }

    pub fn id(&self) -> &NoteId {
        &self.note.id
    }

    pub fn mode(&self) -> &CardMode {
        &self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, CardMode::Edit(_))
    }

    /// Current drafts while editing.
    pub fn draft(&self) -> Option<&Draft> {
        match &self.mode {
            CardMode::Edit(draft) => Some(draft),
            CardMode::Read => None,
        }
    }

    /// Read-mode rendering, lines at most `width` graphemes wide.
    pub fn view(&self, width: usize) -> CardView {
        let note = &self.note;
        CardView {
            title: clamp(note.display_title(), TITLE_LINES, width),
            content: clamp(note.display_content(), CONTENT_LINES, width),
            created: note.created_at.with_timezone(&Local).date_naive(),
            updated: note
                .was_edited()
                .then(|| note.updated_at.with_timezone(&Local).date_naive()),
        }
    }

    /// Enter edit mode with drafts seeded from the note.
    pub fn begin_edit(&mut self) {
        self.mode = CardMode::Edit(Draft {
            title: self.note.title.clone(),
            content: self.note.content.clone(),
        });
    }

    /// Returns false when not editing.
    pub fn set_title_draft(&mut self, title: impl Into<String>) -> bool {
        match &mut self.mode {
            CardMode::Edit(draft) => {
                draft.title = title.into();
                true
            }
            CardMode::Read => false,
        }
    }

    /// Returns false when not editing.
    pub fn set_content_draft(&mut self, content: impl Into<String>) -> bool {
        match &mut self.mode {
            CardMode::Edit(draft) => {
                draft.content = content.into();
                true
            }
            CardMode::Read => false,
        }
    }

    /// Drop drafts and go back to read mode.
    pub fn cancel(&mut self) {
        self.mode = CardMode::Read;
    }

    /// Send drafts as an update and go back to read mode, whatever the outcome.
    pub async fn save<O: NoteOperations>(&mut self, ops: &mut O) -> Mutation {
        let CardMode::Edit(draft) = std::mem::replace(&mut self.mode, CardMode::Read) else {
            return Mutation::Skipped;
        };

        ops.update(&self.note.id, &draft.title, &draft.content).await
    }

    pub async fn delete<O: NoteOperations>(&self, ops: &mut O) -> Mutation {
        ops.delete(&self.note.id).await
    }

    /// Rebind to a newer representation of the same note.
    pub fn refresh(&mut self, note: Note) {
        debug_assert_eq!(note.id, self.note.id);
        self.note = note;
    }
}
