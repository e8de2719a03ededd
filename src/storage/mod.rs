//! Storage Layer - SQLite-backed persistence
//!
//! System of record is SQLite with a single table:
//! - todos(id, title, description, status)

pub mod schema;
pub mod sqlite;

pub use sqlite::SqliteStore;
