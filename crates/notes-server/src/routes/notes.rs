//! Note routes.
//!
//! - GET /api/notes - List notes, most recently updated first
//! - POST /api/notes - Create a note
//! - PUT /api/notes/{id} - Replace a note's title and content
//! - DELETE /api/notes/{id} - Delete a note

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    routing::{get, put},
};
use serde::{Deserialize, Serialize};

use notes_core::{Note, NoteId, NoteInput};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Response for DELETE /api/notes/{id}.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteNoteResponse {
    pub message: String,
}

fn note_input(payload: Result<Json<NoteInput>, JsonRejection>) -> ApiResult<NoteInput> {
    payload
        .map(|Json(input)| input)
        .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))
}

/// GET /api/notes
async fn list_notes(State(state): State<AppState>) -> Json<Vec<Note>> {
    Json(state.store().list().await)
}

/// POST /api/notes
///
/// # Response
///
/// - 201 Created: the stored note
/// - 400 Bad Request: body is not `{title, content}`
async fn create_note(
    State(state): State<AppState>,
    payload: Result<Json<NoteInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Note>)> {
    let input = note_input(payload)?;
    let note = state.store().insert(input).await;

    tracing::info!(note_id = %note.id, "note created");
    Ok((StatusCode::CREATED, Json(note)))
}

/// PUT /api/notes/{id}
///
/// # Response
///
/// - 200 OK: the note with a refreshed `updatedAt`
/// - 400 Bad Request: body is not `{title, content}`
/// - 404 Not Found: unknown id
async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<NoteId>,
    payload: Result<Json<NoteInput>, JsonRejection>,
) -> ApiResult<Json<Note>> {
    let input = note_input(payload)?;
    let note = state.store().update(&id, input).await?;

    tracing::info!(note_id = %note.id, "note updated");
    Ok(Json(note))
}

/// DELETE /api/notes/{id}
///
/// # Response
///
/// - 200 OK: `{ "message": "Note deleted successfully" }`
/// - 404 Not Found: unknown id
async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<NoteId>,
) -> ApiResult<Json<DeleteNoteResponse>> {
    state.store().remove(&id).await?;

    tracing::info!(note_id = %id, "note deleted");
    Ok(Json(DeleteNoteResponse {
        message: "Note deleted successfully".to_string(),
    }))
}

/// Build note routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/notes", get(list_notes).post(create_note))
        .route("/api/notes/{id}", put(update_note).delete(delete_note))
}
