//! In-memory note storage.

use std::collections::HashMap;

use chrono::{Duration, Utc};
use notes_core::{Note, NoteId, NoteInput};
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Note not found.
    #[error("note not found: {0}")]
    NoteNotFound(NoteId),
}

/// Note storage shared by all request handlers.
#[derive(Debug, Default)]
pub struct NoteStore {
    notes: RwLock<HashMap<NoteId, Note>>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All notes, most recently updated first.
    pub async fn list(&self) -> Vec<Note> {
        let notes = self.notes.read().await;
        let mut list: Vec<Note> = notes.values().cloned().collect();
        list.sort_by(|a, b| {
            b.updated_at
                .cmp(&a.updated_at)
                .then_with(|| b.created_at.cmp(&a.created_at))
                .then_with(|| a.id.cmp(&b.id))
        });
        list
    }

    /// Store a new note under a fresh UUID v4 id.
    pub async fn insert(&self, input: NoteInput) -> Note {
        let now = Utc::now();
        let note = Note {
            id: NoteId::new(Uuid::new_v4().to_string()),
            title: input.title,
            content: input.content,
            created_at: now,
            updated_at: now,
        };

        self.notes
            .write()
            .await
            .insert(note.id.clone(), note.clone());
        note
    }

    /// Replace title and content, refreshing `updated_at`.
    pub async fn update(&self, id: &NoteId, input: NoteInput) -> StoreResult<Note> {
        let mut notes = self.notes.write().await;
        let note = notes
            .get_mut(id)
            .ok_or_else(|| StoreError::NoteNotFound(id.clone()))?;

        // updated_at must move forward even within one clock tick
        let now = Utc::now().max(note.updated_at + Duration::microseconds(1));

        note.title = input.title;
        note.content = input.content;
        note.updated_at = now;
        Ok(note.clone())
    }

    pub async fn remove(&self, id: &NoteId) -> StoreResult<Note> {
        self.notes
            .write()
            .await
            .remove(id)
            .ok_or_else(|| StoreError::NoteNotFound(id.clone()))
    }

    /// Number of stored notes.
    pub async fn len(&self) -> usize {
        self.notes.read().await.len()
    }
}
