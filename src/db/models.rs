//! Domain model for the notes database.

use serde::{Deserialize, Serialize};

/// A persisted note.
///
/// `id` is assigned by the store on insert and never changes. Timestamps
/// are RFC 3339 UTC strings with microsecond precision, so lexicographic
/// order equals chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub created_at: String,
    pub updated_at: String,
}
