//! SQLite NoteRepository implementation.

use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

use crate::db::utils::current_timestamp;
use crate::db::{DbError, DbResult, Note, NoteRepository};

/// SQLx-backed note repository.
pub struct SqliteNoteRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

fn note_from_row(row: &SqliteRow) -> Note {
    Note {
        id: row.get("id"),
        title: row.get("title"),
        body: row.get("body"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

fn database_error(e: sqlx::Error) -> DbError {
    DbError::Database {
        message: e.to_string(),
    }
}

/// Trim a title and reject it if nothing remains.
///
/// Enforced here as well as at the HTTP boundary: no persisted note may
/// have an empty title, whichever caller reaches the store.
fn validated_title(title: &str) -> DbResult<&str> {
    let title = title.trim();
    if title.is_empty() {
        return Err(DbError::Validation {
            message: "title must not be empty".to_string(),
        });
    }
    Ok(title)
}

impl NoteRepository for SqliteNoteRepository<'_> {
    async fn insert(&self, title: &str, body: &str) -> DbResult<Note> {
        let title = validated_title(title)?;
        let now = current_timestamp();

        let result = sqlx::query(
            r#"
            INSERT INTO notes (title, body, created_at, updated_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(title)
        .bind(body)
        .bind(&now)
        .bind(&now)
        .execute(self.pool)
        .await
        .map_err(database_error)?;

        Ok(Note {
            id: result.last_insert_rowid(),
            title: title.to_string(),
            body: body.to_string(),
            created_at: now.clone(),
            updated_at: now,
        })
    }

    async fn list(&self) -> DbResult<Vec<Note>> {
        let rows = sqlx::query(
            "SELECT id, title, body, created_at, updated_at FROM notes ORDER BY updated_at DESC",
        )
        .fetch_all(self.pool)
        .await
        .map_err(database_error)?;

        Ok(rows.iter().map(note_from_row).collect())
    }

    async fn get_by_id(&self, id: i64) -> DbResult<Option<Note>> {
        let row =
            sqlx::query("SELECT id, title, body, created_at, updated_at FROM notes WHERE id = ?")
                .bind(id)
                .fetch_optional(self.pool)
                .await
                .map_err(database_error)?;

        Ok(row.as_ref().map(note_from_row))
    }

    async fn update(&self, id: i64, title: &str, body: &str) -> DbResult<bool> {
        let title = validated_title(title)?;
        let now = current_timestamp();

        let result =
            sqlx::query("UPDATE notes SET title = ?, body = ?, updated_at = ? WHERE id = ?")
                .bind(title)
                .bind(body)
                .bind(&now)
                .bind(id)
                .execute(self.pool)
                .await
                .map_err(database_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM notes WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(database_error)?;

        Ok(result.rows_affected() > 0)
    }
}
