//! # todo-api - Minimal to-do CRUD service
//!
//! A small JSON-over-HTTP service for managing a list of to-do items,
//! backed by a single SQLite table.
//!
//! todo-api provides:
//! - A `todos` table created idempotently at startup
//! - Five record operations (list, get, create, update, delete)
//! - Five matching HTTP endpoints with uniform error mapping
//! - A per-request storage handle checked out by each handler

pub mod todo;
pub mod storage;
pub mod server;
pub mod config;

// Re-exports for convenient access
pub use todo::{ToDo, ToDoDraft};
pub use storage::SqliteStore;

/// Result type alias for todo-api operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for todo-api operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
