//! Note CRUD handlers.
//!
//! Validation runs in a fixed order: id format, then required fields,
//! then existence. Validation failures never reach the store. Storage
//! failures are logged and surfaced as a generic message.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::{error, instrument};
use utoipa::ToSchema;

use crate::api::AppState;
use crate::db::{Database, DbError, Note, NoteRepository};

use super::ErrorResponse;

// =============================================================================
// DTOs
// =============================================================================

#[derive(Serialize, ToSchema)]
pub struct NoteResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Shopping list")]
    pub title: String,
    #[schema(example = "milk, eggs")]
    pub body: String,
    #[schema(example = "2025-06-01T12:00:00.000000Z")]
    pub created_at: String,
    #[schema(example = "2025-06-01T12:00:00.000000Z")]
    pub updated_at: String,
}

impl From<Note> for NoteResponse {
    fn from(n: Note) -> Self {
        Self {
            id: n.id,
            title: n.title,
            body: n.body,
            created_at: n.created_at,
            updated_at: n.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateNoteRequest {
    /// Required; rejected when missing or blank after trimming.
    #[schema(example = "Shopping list")]
    pub title: Option<String>,
    /// Optional; omitted or `null` becomes the empty string.
    #[schema(example = "milk, eggs")]
    #[serde(default)]
    pub body: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateNoteRequest {
    /// Required; rejected when missing or blank after trimming.
    #[schema(example = "Shopping list (revised)")]
    pub title: Option<String>,
    /// Full replacement: omitting the field resets the body to "".
    #[schema(example = "milk, eggs, bread")]
    #[serde(default)]
    pub body: Option<String>,
}

// =============================================================================
// Handlers
// =============================================================================

#[utoipa::path(
    get,
    path = "/api/notes",
    tag = "notes",
    responses(
        (status = 200, description = "All notes, most recently updated first", body = [NoteResponse]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_notes<D: Database + 'static>(
    State(state): State<AppState<D>>,
) -> Result<Json<Vec<NoteResponse>>, (StatusCode, Json<ErrorResponse>)> {
    let notes = state
        .db()
        .notes()
        .list()
        .await
        .map_err(|e| storage_error(e, "Failed to fetch notes"))?;

    Ok(Json(notes.into_iter().map(NoteResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/notes/{id}",
    tag = "notes",
    params(("id" = String, Path, description = "Note id (positive integer)")),
    responses(
        (status = 200, description = "Note found", body = NoteResponse),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Note not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_note<D: Database + 'static>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
) -> Result<Json<NoteResponse>, (StatusCode, Json<ErrorResponse>)> {
    let id = parse_id(&id)?;

    let note = state
        .db()
        .notes()
        .get_by_id(id)
        .await
        .map_err(|e| storage_error(e, "Failed to fetch note"))?
        .ok_or_else(not_found)?;

    Ok(Json(NoteResponse::from(note)))
}

#[utoipa::path(
    post,
    path = "/api/notes",
    tag = "notes",
    request_body = CreateNoteRequest,
    responses(
        (status = 201, description = "Note created", body = NoteResponse),
        (status = 400, description = "Missing or blank title", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_note<D: Database + 'static>(
    State(state): State<AppState<D>>,
    Json(req): Json<CreateNoteRequest>,
) -> Result<(StatusCode, Json<NoteResponse>), (StatusCode, Json<ErrorResponse>)> {
    let title = validated_title(req.title.as_deref())?;
    let body = req.body.as_deref().unwrap_or_default();

    let note = state
        .db()
        .notes()
        .insert(title, body)
        .await
        .map_err(|e| storage_error(e, "Failed to create note"))?;

    Ok((StatusCode::CREATED, Json(NoteResponse::from(note))))
}

#[utoipa::path(
    put,
    path = "/api/notes/{id}",
    tag = "notes",
    params(("id" = String, Path, description = "Note id (positive integer)")),
    request_body = UpdateNoteRequest,
    responses(
        (status = 200, description = "Note updated", body = NoteResponse),
        (status = 400, description = "Malformed id or missing title", body = ErrorResponse),
        (status = 404, description = "Note not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_note<D: Database + 'static>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateNoteRequest>,
) -> Result<Json<NoteResponse>, (StatusCode, Json<ErrorResponse>)> {
    let id = parse_id(&id)?;
    let title = validated_title(req.title.as_deref())?;
    let body = req.body.as_deref().unwrap_or_default();

    let notes = state.db().notes();
    let changed = notes
        .update(id, title, body)
        .await
        .map_err(|e| storage_error(e, "Failed to update note"))?;
    if !changed {
        return Err(not_found());
    }

    // Re-read so the response carries the store-assigned updated_at
    let note = notes
        .get_by_id(id)
        .await
        .map_err(|e| storage_error(e, "Failed to update note"))?
        .ok_or_else(not_found)?;

    Ok(Json(NoteResponse::from(note)))
}

#[utoipa::path(
    delete,
    path = "/api/notes/{id}",
    tag = "notes",
    params(("id" = String, Path, description = "Note id (positive integer)")),
    responses(
        (status = 204, description = "Note deleted"),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Note not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_note<D: Database + 'static>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    let id = parse_id(&id)?;

    let changed = state
        .db()
        .notes()
        .delete(id)
        .await
        .map_err(|e| storage_error(e, "Failed to delete note"))?;
    if !changed {
        return Err(not_found());
    }

    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Helpers
// =============================================================================

/// Parse a path segment as a positive integer id.
fn parse_id(raw: &str) -> Result<i64, (StatusCode, Json<ErrorResponse>)> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(bad_request("Invalid id")),
    }
}

/// Require a title that is non-empty after trimming.
fn validated_title(title: Option<&str>) -> Result<&str, (StatusCode, Json<ErrorResponse>)> {
    match title.map(str::trim) {
        Some(title) if !title.is_empty() => Ok(title),
        _ => Err(bad_request("Title is required")),
    }
}

fn bad_request(message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Note not found".to_string(),
        }),
    )
}

/// Map a store error to a response without leaking internal detail.
fn storage_error(e: DbError, message: &str) -> (StatusCode, Json<ErrorResponse>) {
    match e {
        DbError::Validation { .. } => bad_request("Title is required"),
        _ => {
            error!("{message}: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: message.to_string(),
                }),
            )
        }
    }
}
