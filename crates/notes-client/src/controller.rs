//! The note board: owner of the client-side note list.
//!
//! The board is a mirror of server state. Nothing in the list changes until
//! the backend has confirmed the change, so a failed request always leaves
//! the list exactly as it was.
//!
//! ```text
//! Loading ──load ok──▶ Ready
//!    │
//!    └──load failed──▶ Error ──reload──▶ Loading
//! ```
//!
//! Create, update and delete never move the board between these states.

use std::fmt;

use notes_core::{Note, NoteId, NoteInput};

use crate::api::NotesApi;
use crate::operations::{Mutation, NoteOperations};
use crate::prompt::UserPrompt;

/// Question asked before any delete request is sent.
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this note?";

const LOAD_FAILED: &str =
    "Failed to connect to notes server. Please check your connection and try again.";
const CREATE_FAILED: &str = "Failed to create note. Please try again.";
const UPDATE_FAILED: &str = "Failed to update note. Please try again.";
const DELETE_FAILED: &str = "Failed to delete note. Please try again.";

/// Why the initial load failed, kept for display until the next reload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadFailure {
    /// Message for the user.
    pub message: String,
    /// URL the failed request went to.
    pub endpoint: String,
    /// Configured backend base URL.
    pub base_url: String,
}

impl LoadFailure {
    /// Second line of the error view.
    pub fn hint(&self) -> String {
        format!(
            "Make sure your backend server is running at {}",
            self.base_url
        )
    }
}

impl fmt::Display for LoadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.message, self.hint())
    }
}

/// Macro state of the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardState {
    Loading,
    Ready,
    Error(LoadFailure),
}

/// Controller owning the note list, its load state, and every request.
#[derive(Debug)]
pub struct NoteBoard<A, P> {
    api: A,
    prompt: P,
    notes: Vec<Note>,
    state: BoardState,
}

impl<A: NotesApi, P: UserPrompt> NoteBoard<A, P> {
    /// A board that has not fetched anything yet.
    pub fn new(api: A, prompt: P) -> Self {
        Self {
            api,
            prompt,
            notes: Vec::new(),
            state: BoardState::Loading,
        }
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// The full list, newest first.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Notes to render as cards: the list when ready, nothing otherwise.
    pub fn visible_notes(&self) -> &[Note] {
        match self.state {
            BoardState::Ready => &self.notes,
            BoardState::Loading | BoardState::Error(_) => &[],
        }
    }

    pub fn note(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| &n.id == id)
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    /// Initial fetch. Does nothing unless the board is still `Loading`.
    pub async fn load(&mut self) {
        if self.state != BoardState::Loading {
            tracing::debug!(state = ?self.state, "load skipped; board already activated");
            return;
        }

        match self.api.list_notes().await {
            Ok(notes) => {
                tracing::info!(count = notes.len(), "notes loaded");
                self.notes = notes;
                self.state = BoardState::Ready;
            }
            Err(err) => {
                let endpoint = self.api.notes_endpoint();
                tracing::error!(
                    endpoint = %endpoint,
                    status = ?err.status(),
                    error = %err,
                    "failed to load notes"
                );
                self.state = BoardState::Error(LoadFailure {
                    message: LOAD_FAILED.to_string(),
                    endpoint,
                    base_url: self.api.base_url().to_string(),
                });
            }
        }
    }

    /// Start over as if freshly activated: drop everything and load again.
    pub async fn reload(&mut self) {
        self.notes.clear();
        self.state = BoardState::Loading;
        self.load().await;
    }

    /// Create a note unless both fields are blank. The new note goes first.
    pub async fn create(&mut self, title: &str, content: &str) -> Mutation {
        let input = NoteInput::new(title, content);
        if input.is_blank() {
            return Mutation::Skipped;
        }

        match self.api.create_note(&input).await {
            Ok(note) => {
                tracing::info!(note_id = %note.id, "note created");
                self.notes.retain(|n| n.id != note.id);
                self.notes.insert(0, note);
                Mutation::Applied
            }
            Err(err) => {
                tracing::error!(status = ?err.status(), error = %err, "error creating note");
                self.prompt.alert(CREATE_FAILED);
                Mutation::Failed
            }
        }
    }

    /// Replace a note with the server's post-edit representation, in place.
    ///
    /// Racing updates to one note are not sequenced: whichever response is
    /// applied last wins.
    pub async fn update(&mut self, id: &NoteId, title: &str, content: &str) -> Mutation {
        let input = NoteInput::new(title, content);

        match self.api.update_note(id, &input).await {
            Ok(note) => {
                tracing::info!(note_id = %id, "note updated");
                if let Some(slot) = self.notes.iter_mut().find(|n| &n.id == id) {
                    *slot = note;
                }
                Mutation::Applied
            }
            Err(err) => {
                tracing::error!(
                    note_id = %id,
                    status = ?err.status(),
                    error = %err,
                    "error updating note"
                );
                self.prompt.alert(UPDATE_FAILED);
                Mutation::Failed
            }
        }
    }

    /// Delete a note after the user confirms.
    pub async fn delete(&mut self, id: &NoteId) -> Mutation {
        if !self.prompt.confirm(DELETE_CONFIRMATION) {
            tracing::debug!(note_id = %id, "delete declined");
            return Mutation::Skipped;
        }

        match self.api.delete_note(id).await {
            Ok(()) => {
                tracing::info!(note_id = %id, "note deleted");
                self.notes.retain(|n| &n.id != id);
                Mutation::Applied
            }
            Err(err) => {
                tracing::error!(
                    note_id = %id,
                    status = ?err.status(),
                    error = %err,
                    "error deleting note"
                );
                self.prompt.alert(DELETE_FAILED);
                Mutation::Failed
            }
        }
    }
}

impl<A: NotesApi, P: UserPrompt> NoteOperations for NoteBoard<A, P> {
    async fn create(&mut self, title: &str, content: &str) -> Mutation {
        NoteBoard::create(self, title, content).await
    }

    async fn update(&mut self, id: &NoteId, title: &str, content: &str) -> Mutation {
        NoteBoard::update(self, id, title, content).await
    }

    async fn delete(&mut self, id: &NoteId) -> Mutation {
        NoteBoard::delete(self, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Call, FAKE_BASE, FakeApi, ScriptedPrompt, note};

    type TestBoard = NoteBoard<FakeApi, ScriptedPrompt>;

    async fn ready_board(notes: Vec<Note>) -> TestBoard {
        let mut board = NoteBoard::new(FakeApi::with_notes(notes), ScriptedPrompt::default());
        board.load().await;
        assert_eq!(board.state(), &BoardState::Ready);
        board
    }

    // ------------------------------------------------------------------
    // Load
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn starts_loading_with_empty_list() {
        let board = NoteBoard::new(FakeApi::new(), ScriptedPrompt::default());
        assert_eq!(board.state(), &BoardState::Loading);
        assert!(board.notes().is_empty());
        assert!(board.api().calls().is_empty());
    }

    #[tokio::test]
    async fn load_keeps_server_order() {
        let board = ready_board(vec![note("2", "second", ""), note("1", "first", "")]).await;

        let ids: Vec<_> = board.notes().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
        assert_eq!(board.visible_notes().len(), 2);
    }

    #[tokio::test]
    async fn load_failure_shows_base_url_and_no_cards() {
        let mut board = NoteBoard::new(FakeApi::failing(), ScriptedPrompt::default());
        board.load().await;

        let BoardState::Error(failure) = board.state() else {
            panic!("expected error state, got {:?}", board.state());
        };
        assert!(failure.to_string().contains(FAKE_BASE));
        assert_eq!(failure.endpoint, format!("{FAKE_BASE}/api/notes"));
        assert!(board.notes().is_empty());
        assert!(board.visible_notes().is_empty());
        // load failures are shown in the view, not as an alert
        assert!(board.prompt().alerts.is_empty());
    }

    #[tokio::test]
    async fn load_does_not_retry_on_its_own() {
        let mut board = NoteBoard::new(FakeApi::failing(), ScriptedPrompt::default());
        board.load().await;
        board.api().set_failing(false);
        board.load().await;

        assert!(matches!(board.state(), BoardState::Error(_)));
        assert_eq!(board.api().calls(), vec![Call::List]);
    }

    #[tokio::test]
    async fn reload_leaves_error_state() {
        let mut board = NoteBoard::new(FakeApi::failing(), ScriptedPrompt::default());
        board.load().await;
        board.api().set_failing(false);

        board.reload().await;

        assert_eq!(board.state(), &BoardState::Ready);
        assert_eq!(board.api().calls(), vec![Call::List, Call::List]);
    }

    // ------------------------------------------------------------------
    // Create
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn create_groceries_on_empty_board() {
        let mut board = ready_board(Vec::new()).await;

        let outcome = board.create("Groceries", "Milk, eggs").await;

        assert_eq!(outcome, Mutation::Applied);
        assert_eq!(board.notes().len(), 1);
        let created = &board.notes()[0];
        assert_eq!(created.title, "Groceries");
        assert_eq!(created.content, "Milk, eggs");
        assert_eq!(created.id.as_str(), "srv-1");
    }

    #[tokio::test]
    async fn create_prepends_with_server_fields() {
        let mut board = ready_board(vec![note("1", "old", "")]).await;

        board.create("new", "").await;

        assert_eq!(board.notes().len(), 2);
        assert_eq!(board.notes()[0].title, "new");
        assert_eq!(board.notes()[0].id.as_str(), "srv-1");
        assert!(board.notes()[0].created_at > board.notes()[1].created_at);
        assert_eq!(board.notes()[1].id.as_str(), "1");
    }

    #[tokio::test]
    async fn create_blank_sends_nothing() {
        let mut board = ready_board(vec![note("1", "A", "B")]).await;
        let before = board.notes().to_vec();

        assert_eq!(board.create("", "").await, Mutation::Skipped);
        assert_eq!(board.create("   ", "\n\t ").await, Mutation::Skipped);

        assert_eq!(board.notes(), before.as_slice());
        assert_eq!(board.api().calls(), vec![Call::List]);
    }

    #[tokio::test]
    async fn create_sends_fields_as_typed() {
        let mut board = ready_board(Vec::new()).await;

        board.create("  padded ", "").await;

        assert_eq!(
            board.api().calls().last(),
            Some(&Call::Create(NoteInput::new("  padded ", "")))
        );
    }

    #[tokio::test]
    async fn create_failure_alerts_and_keeps_list() {
        let mut board = ready_board(vec![note("1", "A", "B")]).await;
        let before = board.notes().to_vec();
        board.api().set_failing(true);

        let outcome = board.create("x", "y").await;

        assert_eq!(outcome, Mutation::Failed);
        assert_eq!(board.notes(), before.as_slice());
        assert_eq!(board.prompt().alerts, vec![CREATE_FAILED.to_string()]);
        assert_eq!(board.state(), &BoardState::Ready);
    }

    // ------------------------------------------------------------------
    // Update
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn update_replaces_in_place() {
        let mut board = ready_board(vec![note("1", "A", "B")]).await;
        let original = board.notes()[0].clone();

        let outcome = board.update(&NoteId::new("1"), "A2", "B2").await;

        assert_eq!(outcome, Mutation::Applied);
        assert_eq!(board.notes().len(), 1);
        let updated = &board.notes()[0];
        assert_eq!(updated.id.as_str(), "1");
        assert_eq!(updated.title, "A2");
        assert_eq!(updated.content, "B2");
        assert!(updated.updated_at > original.updated_at);
        assert_eq!(updated.created_at, original.created_at);
    }

    #[tokio::test]
    async fn update_keeps_position() {
        let mut board = ready_board(vec![
            note("3", "c", ""),
            note("2", "b", ""),
            note("1", "a", ""),
        ])
        .await;

        board.update(&NoteId::new("2"), "b2", "").await;

        let titles: Vec<_> = board.notes().iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["c", "b2", "a"]);
    }

    #[tokio::test]
    async fn update_allows_empty_fields() {
        let mut board = ready_board(vec![note("1", "A", "B")]).await;

        assert_eq!(board.update(&NoteId::new("1"), "", "").await, Mutation::Applied);
        assert_eq!(board.notes()[0].display_title(), "Untitled");
    }

    #[tokio::test]
    async fn update_failure_alerts_and_keeps_list() {
        let mut board = ready_board(vec![note("1", "A", "B")]).await;
        let before = board.notes().to_vec();

        // unknown id: the fake answers 404
        let outcome = board.update(&NoteId::new("missing"), "x", "y").await;

        assert_eq!(outcome, Mutation::Failed);
        assert_eq!(board.notes(), before.as_slice());
        assert_eq!(board.prompt().alerts, vec![UPDATE_FAILED.to_string()]);
    }

    #[tokio::test]
    async fn last_applied_update_wins() {
        let mut board = ready_board(vec![note("1", "A", "B")]).await;
        let id = NoteId::new("1");

        board.update(&id, "first", "").await;
        board.update(&id, "second", "").await;

        assert_eq!(board.notes()[0].title, "second");
    }

    // ------------------------------------------------------------------
    // Delete
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn delete_after_confirmation() {
        let mut board = NoteBoard::new(
            FakeApi::with_notes(vec![note("2", "b", ""), note("1", "a", "")]),
            ScriptedPrompt::answering(&[true]),
        );
        board.load().await;

        let outcome = board.delete(&NoteId::new("2")).await;

        assert_eq!(outcome, Mutation::Applied);
        assert_eq!(board.notes().len(), 1);
        assert!(board.note(&NoteId::new("2")).is_none());
        assert_eq!(
            board.prompt().confirmations,
            vec![DELETE_CONFIRMATION.to_string()]
        );
    }

    #[tokio::test]
    async fn delete_declined_sends_nothing() {
        let mut board = ready_board(vec![note("1", "a", "")]).await;

        let outcome = board.delete(&NoteId::new("1")).await;

        assert_eq!(outcome, Mutation::Skipped);
        assert_eq!(board.notes().len(), 1);
        assert!(
            !board
                .api()
                .calls()
                .iter()
                .any(|c| matches!(c, Call::Delete(_)))
        );
    }

    #[tokio::test]
    async fn delete_failure_alerts_and_keeps_list() {
        let mut board = NoteBoard::new(
            FakeApi::with_notes(vec![note("1", "a", "")]),
            ScriptedPrompt::answering(&[true]),
        );
        board.load().await;
        let before = board.notes().to_vec();
        board.api().set_failing(true);

        let outcome = board.delete(&NoteId::new("1")).await;

        assert_eq!(outcome, Mutation::Failed);
        assert_eq!(board.notes(), before.as_slice());
        assert_eq!(board.prompt().alerts, vec![DELETE_FAILED.to_string()]);
    }

    // ------------------------------------------------------------------
    // State machine
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn mutations_never_change_macro_state() {
        let mut board = NoteBoard::new(FakeApi::failing(), ScriptedPrompt::answering(&[true]));
        board.load().await;
        let failed = board.state().clone();
        board.api().set_failing(false);

        board.create("t", "c").await;
        board.delete(&NoteId::new("srv-1")).await;

        assert_eq!(board.state(), &failed);
        assert!(board.visible_notes().is_empty());
    }

    #[tokio::test]
    async fn board_works_through_operations_interface() {
        async fn add_via_interface<O: NoteOperations>(ops: &mut O) -> Mutation {
            ops.create("via", "trait").await
        }

        let mut board = ready_board(Vec::new()).await;
        assert_eq!(add_via_interface(&mut board).await, Mutation::Applied);
        assert_eq!(board.notes()[0].title, "via");
    }
}
