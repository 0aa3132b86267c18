//! The "take a note" affordance.

use super::Draft;
use crate::operations::{Mutation, NoteOperations};

/// Collapsed trigger that expands into title/content inputs.
#[derive(Debug, Clone, Default)]
pub struct NoteComposer {
    expanded: bool,
    draft: Draft,
}

impl NoteComposer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn expand(&mut self) {
        self.expanded = true;
    }

    /// Returns false while collapsed.
    pub fn set_title(&mut self, title: impl Into<String>) -> bool {
        if self.expanded {
            self.draft.title = title.into();
        }
        self.expanded
    }

    /// Returns false while collapsed.
    pub fn set_content(&mut self, content: impl Into<String>) -> bool {
        if self.expanded {
            self.draft.content = content.into();
        }
        self.expanded
    }

    /// Save is disabled while both drafts are blank.
    pub fn can_save(&self) -> bool {
        self.expanded && !self.draft.is_blank()
    }

    /// Create a note from the drafts, then reset and collapse whatever the
    /// outcome. Does nothing while save is disabled.
    pub async fn save<O: NoteOperations>(&mut self, ops: &mut O) -> Mutation {
        if !self.can_save() {
            return Mutation::Skipped;
        }

        let draft = std::mem::take(&mut self.draft);
        self.expanded = false;
        ops.create(&draft.title, &draft.content).await
    }

    /// Reset drafts and collapse without creating anything.
    pub fn cancel(&mut self) {
        self.draft = Draft::default();
        self.expanded = false;
    }
}
