//! Tests for SQLite connection and migrations.

use crate::db::{Database, NoteRepository, SqliteDatabase};

#[tokio::test(flavor = "multi_thread")]
async fn migrate_creates_notes_table() {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.migrate().await.expect("Migration should succeed");

    let tables: Vec<String> =
        sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .fetch_all(db.pool())
            .await
            .expect("Query should succeed");

    // _sqlx_migrations tracks applied migrations; sqlite_sequence backs
    // AUTOINCREMENT and appears once the first row is inserted.
    for table in ["_sqlx_migrations", "notes"] {
        assert!(
            tables.iter().any(|t| t == table),
            "Missing table: {}. Found tables: {:?}",
            table,
            tables
        );
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn migrate_is_idempotent() {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");

    db.migrate().await.expect("First migration should succeed");
    db.migrate().await.expect("Second migration should succeed");

    // The schema is still usable afterwards
    db.notes()
        .insert("Still works", "")
        .await
        .expect("Insert should succeed");
}

#[tokio::test(flavor = "multi_thread")]
async fn open_creates_file_in_wal_mode() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("notes.db");

    let db = SqliteDatabase::open(&path)
        .await
        .expect("Open should create the database file");
    db.migrate().await.expect("Migration should succeed");

    assert!(path.exists());

    let mode: String = sqlx::query_scalar("PRAGMA journal_mode")
        .fetch_one(db.pool())
        .await
        .expect("Pragma query should succeed");
    assert_eq!(mode, "wal");
}

#[tokio::test(flavor = "multi_thread")]
async fn reopened_database_keeps_data() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("notes.db");

    {
        let db = SqliteDatabase::open(&path).await.unwrap();
        db.migrate().await.unwrap();
        db.notes().insert("Durable", "survives reopen").await.unwrap();
    }

    let db = SqliteDatabase::open(&path).await.unwrap();
    db.migrate().await.unwrap();

    let all = db.notes().list().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].title, "Durable");
}
