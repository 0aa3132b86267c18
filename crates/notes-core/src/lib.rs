//! notes-core: shared types for the notes client and server.
//!
//! This crate provides:
//! - The [`Note`] entity and its opaque [`NoteId`]
//! - The [`NoteInput`] `{title, content}` body used by create and update
//! - Wire timestamp handling tolerant of timezone-less ISO-8601 values
//!
//! Every type here serializes to the camelCase JSON shape served under
//! `/api/notes`.

pub mod timestamp;
pub mod types;

pub use types::{Note, NoteId, NoteInput};
