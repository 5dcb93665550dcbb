//! Jot: a notes CRUD service over a local SQLite store.
//!
//! The `db` module owns persistence behind swappable traits; the `api`
//! module maps HTTP requests onto it and serves the embedded frontend.

pub mod api;
pub mod db;
