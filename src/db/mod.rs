//! Database abstraction layer.
//!
//! This module provides trait-based abstractions for data access,
//! allowing different storage backends (SQLite, in-memory, etc.)
//! to be swapped without changing the handler layer.
//!
//! # Architecture
//!
//! - `error`: Storage-agnostic error types
//! - `models`: The domain entity (Note)
//! - `repository`: Trait definitions for data access
//! - `sqlite`: SQLx-backed SQLite implementation

mod error;
mod models;
mod repository;
mod sqlite;
mod utils;

#[cfg(test)]
mod models_test;

pub use error::{DbError, DbResult};
pub use models::Note;
pub use repository::{Database, NoteRepository};
pub use sqlite::{SqliteDatabase, SqliteNoteRepository};
