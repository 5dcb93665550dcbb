//! SQLite implementation of the database traits.

mod connection;
mod note;

#[cfg(test)]
mod connection_test;

pub use connection::SqliteDatabase;
pub use note::SqliteNoteRepository;
