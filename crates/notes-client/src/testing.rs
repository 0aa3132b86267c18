//! In-memory doubles for board and presentation tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use chrono::{DateTime, Duration, TimeZone, Utc};
use notes_core::{Note, NoteId, NoteInput};

use crate::api::NotesApi;
use crate::error::{ClientError, ClientResult};
use crate::prompt::UserPrompt;

pub const FAKE_BASE: &str = "http://fake.test:5000";

/// A request the fake received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Create(NoteInput),
    Update(NoteId, NoteInput),
    Delete(NoteId),
}

#[derive(Debug)]
struct FakeState {
    notes: Vec<Note>,
    calls: Vec<Call>,
    next_id: u32,
    clock: DateTime<Utc>,
    failing: bool,
}

/// Backend double: keeps notes in a vector and answers like the real server.
#[derive(Debug)]
pub struct FakeApi {
    state: Mutex<FakeState>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::with_notes(Vec::new())
    }

    pub fn with_notes(notes: Vec<Note>) -> Self {
        Self {
            state: Mutex::new(FakeState {
                notes,
                calls: Vec::new(),
                next_id: 1,
                clock: Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
                failing: false,
            }),
        }
    }

    /// Every subsequent request answers HTTP 500.
    pub fn failing() -> Self {
        let api = Self::new();
        api.set_failing(true);
        api
    }

    pub fn set_failing(&self, failing: bool) {
        self.state.lock().unwrap().failing = failing;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    fn record(&self, call: Call) -> ClientResult<std::sync::MutexGuard<'_, FakeState>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        if state.failing {
            return Err(ClientError::Server {
                status: 500,
                message: "Database error".to_string(),
            });
        }
        state.clock += Duration::minutes(1);
        Ok(state)
    }
}

/// A note as a fixture, created and updated at the same instant.
pub fn note(id: &str, title: &str, content: &str) -> Note {
    let at = Utc.with_ymd_and_hms(2023, 12, 31, 8, 0, 0).unwrap();
    Note {
        id: NoteId::new(id),
        title: title.to_string(),
        content: content.to_string(),
        created_at: at,
        updated_at: at,
    }
}

impl NotesApi for FakeApi {
    fn base_url(&self) -> &str {
        FAKE_BASE
    }

    fn notes_endpoint(&self) -> String {
        format!("{FAKE_BASE}/api/notes")
    }

    async fn list_notes(&self) -> ClientResult<Vec<Note>> {
        let state = self.record(Call::List)?;
        Ok(state.notes.clone())
    }

    async fn create_note(&self, input: &NoteInput) -> ClientResult<Note> {
        let mut state = self.record(Call::Create(input.clone()))?;
        let note = Note {
            id: NoteId::new(format!("srv-{}", state.next_id)),
            title: input.title.clone(),
            content: input.content.clone(),
            created_at: state.clock,
            updated_at: state.clock,
        };
        state.next_id += 1;
        state.notes.insert(0, note.clone());
        Ok(note)
    }

    async fn update_note(&self, id: &NoteId, input: &NoteInput) -> ClientResult<Note> {
        let mut state = self.record(Call::Update(id.clone(), input.clone()))?;
        let clock = state.clock;
        let note = state
            .notes
            .iter_mut()
            .find(|n| &n.id == id)
            .ok_or_else(|| ClientError::Server {
                status: 404,
                message: "Note not found".to_string(),
            })?;
        note.title = input.title.clone();
        note.content = input.content.clone();
        note.updated_at = clock;
        Ok(note.clone())
    }

    async fn delete_note(&self, id: &NoteId) -> ClientResult<()> {
        let mut state = self.record(Call::Delete(id.clone()))?;
        let before = state.notes.len();
        state.notes.retain(|n| &n.id != id);
        if state.notes.len() == before {
            return Err(ClientError::Server {
                status: 404,
                message: "Note not found".to_string(),
            });
        }
        Ok(())
    }
}

/// Prompt double answering confirmations from a script.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<bool>,
    pub confirmations: Vec<String>,
    pub alerts: Vec<String>,
}

impl ScriptedPrompt {
    /// Answers the given confirmations in order, then declines.
    pub fn answering(answers: &[bool]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            ..Self::default()
        }
    }
}

impl UserPrompt for ScriptedPrompt {
    fn confirm(&mut self, message: &str) -> bool {
        self.confirmations.push(message.to_string());
        self.answers.pop_front().unwrap_or(false)
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}
