//! notes-client: everything a front end needs to drive the notes API.
//!
//! This crate provides:
//! - [`ClientConfig`]: explicit configuration (base URL, timeout, log level)
//! - [`NotesApi`] and its HTTP implementation [`HttpNotesApi`]
//! - [`NoteBoard`]: the controller owning the note list and its load state
//! - [`presentation`]: note card and note composer state machines
//!
//! # Usage
//!
//! ```rust,ignore
//! use notes_client::{ClientConfig, HttpNotesApi, NoteBoard};
//!
//! let config = ClientConfig::from_env()?;
//! let api = HttpNotesApi::new(&config)?;
//! let mut board = NoteBoard::new(api, prompt);
//! board.load().await;
//! board.create("Groceries", "Milk, eggs").await;
//! ```

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod operations;
pub mod presentation;
pub mod prompt;

#[cfg(test)]
pub(crate) mod testing;

pub use api::{HttpNotesApi, NotesApi};
pub use config::{ClientConfig, ConfigError};
pub use controller::{BoardState, LoadFailure, NoteBoard};
pub use error::{ClientError, ClientResult};
pub use operations::{Mutation, NoteOperations};
pub use prompt::UserPrompt;

// Re-export dependent crates
pub use notes_core;
