//! The operations interface presentation units talk to.

use notes_core::NoteId;

/// What a mutation request ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    /// The backend confirmed it and the local list now reflects it.
    Applied,
    /// Nothing was sent (blank input, declined confirmation).
    Skipped,
    /// The request failed; the local list is unchanged.
    Failed,
}

impl Mutation {
    pub fn is_applied(self) -> bool {
        self == Self::Applied
    }
}

/// User intents emitted by note cards and the note composer.
#[allow(async_fn_in_trait)]
pub trait NoteOperations {
    async fn create(&mut self, title: &str, content: &str) -> Mutation;

    async fn update(&mut self, id: &NoteId, title: &str, content: &str) -> Mutation;

    async fn delete(&mut self, id: &NoteId) -> Mutation;
}
