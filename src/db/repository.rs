//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing the handler layer.
//! Methods return futures with an explicit `Send` bound so that
//! implementations stay usable from multi-threaded axum handlers.

use std::future::Future;

use crate::db::{DbResult, models::Note};

/// Repository for Note operations.
pub trait NoteRepository {
    /// Insert a new note and return the persisted record.
    ///
    /// The title is trimmed and must be non-empty afterwards. Sets
    /// `created_at` and `updated_at` to the same instant.
    fn insert(&self, title: &str, body: &str) -> impl Future<Output = DbResult<Note>> + Send;

    /// All notes, most recently touched first.
    fn list(&self) -> impl Future<Output = DbResult<Vec<Note>>> + Send;

    /// Look up a note by id. `None` means no such note.
    fn get_by_id(&self, id: i64) -> impl Future<Output = DbResult<Option<Note>>> + Send;

    /// Replace title and body of an existing note, refreshing
    /// `updated_at`. Returns whether a row matched the id.
    fn update(
        &self,
        id: i64,
        title: &str,
        body: &str,
    ) -> impl Future<Output = DbResult<bool>> + Send;

    /// Delete a note by id. Returns whether a row matched.
    fn delete(&self, id: i64) -> impl Future<Output = DbResult<bool>> + Send;
}

/// A database backend that can hand out repositories.
pub trait Database: Send + Sync {
    type Notes<'a>: NoteRepository + Send + Sync
    where
        Self: 'a;

    /// Apply schema migrations. Safe to call on every startup.
    fn migrate(&self) -> impl Future<Output = DbResult<()>> + Send;

    /// Access the note repository.
    fn notes(&self) -> Self::Notes<'_>;
}
