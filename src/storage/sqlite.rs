//! SQLite storage implementation

use std::path::Path;
use rusqlite::{Connection, params, OptionalExtension};
use crate::Result;
use crate::todo::{ToDo, ToDoDraft};
use super::schema;

/// SQLite-backed storage for to-do records
///
/// One instance wraps one connection. The HTTP layer opens a fresh store
/// per request, so mutating operations can take `&mut self` and use real
/// rusqlite transactions without any shared-state coordination.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    // ========== Record Operations ==========

    /// List to-dos in insertion order, skipping `skip` rows, at most `limit`
    pub fn list_todos(&self, skip: u32, limit: u32) -> Result<Vec<ToDo>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, description, status FROM todos ORDER BY id LIMIT ?1 OFFSET ?2",
        )?;

        let todos = stmt
            .query_map(params![limit, skip], |row| self.row_to_todo(row))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(todos)
    }

    /// Get a to-do by id; `None` is the not-found signal
    pub fn get_todo(&self, id: i64) -> Result<Option<ToDo>> {
        self.conn
            .query_row(
                "SELECT id, title, description, status FROM todos WHERE id = ?1",
                [id],
                |row| self.row_to_todo(row),
            )
            .optional()
            .map_err(Into::into)
    }

    /// Insert a new row and return it with the id SQLite assigned
    pub fn create_todo(&mut self, draft: &ToDoDraft) -> Result<ToDo> {
        self.conn.execute(
            "INSERT INTO todos (title, description, status) VALUES (?1, ?2, ?3)",
            params![draft.title, draft.description, draft.status],
        )?;
        let id = self.conn.last_insert_rowid();
        Ok(ToDo::from_draft(id, draft))
    }

    /// Overwrite title, description and status of an existing row
    ///
    /// Full replacement, not a partial merge: an absent description in the
    /// draft clears any stored one. Returns `None` if no row has `id`.
    pub fn update_todo(&mut self, id: i64, draft: &ToDoDraft) -> Result<Option<ToDo>> {
        let tx = self.conn.transaction()?;
        let changed = tx.execute(
            "UPDATE todos SET title = ?1, description = ?2, status = ?3 WHERE id = ?4",
            params![draft.title, draft.description, draft.status, id],
        )?;
        tx.commit()?;

        if changed == 0 {
            return Ok(None);
        }
        Ok(Some(ToDo::from_draft(id, draft)))
    }

    /// Remove a row, returning it as it was immediately before removal
    ///
    /// Returns `None` if no row has `id`. Read and delete happen in one
    /// transaction so the snapshot cannot race a concurrent writer.
    pub fn delete_todo(&mut self, id: i64) -> Result<Option<ToDo>> {
        let tx = self.conn.transaction()?;
        let todo = tx
            .query_row(
                "SELECT id, title, description, status FROM todos WHERE id = ?1",
                [id],
                |row| {
                    Ok(ToDo {
                        id: row.get(0)?,
                        title: row.get(1)?,
                        description: row.get(2)?,
                        status: row.get(3)?,
                    })
                },
            )
            .optional()?;

        if todo.is_some() {
            tx.execute("DELETE FROM todos WHERE id = ?1", [id])?;
        }
        tx.commit()?;
        Ok(todo)
    }

    /// Count all to-dos
    pub fn count_todos(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM todos", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Helper to convert a row to ToDo
    fn row_to_todo(&self, row: &rusqlite::Row) -> rusqlite::Result<ToDo> {
        Ok(ToDo {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            status: row.get(3)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_draft(title: &str) -> ToDoDraft {
        ToDoDraft {
            title: title.to_string(),
            description: Some(format!("about {title}")),
            status: "pending".to_string(),
        }
    }

    #[test]
    fn test_create_and_get() {
        let mut store = SqliteStore::open_in_memory().unwrap();

        let created = store.create_todo(&sample_draft("buy milk")).unwrap();
        assert_eq!(created.title, "buy milk");

        let retrieved = store.get_todo(created.id).unwrap().unwrap();
        assert_eq!(retrieved, created);
    }

    #[test]
    fn test_create_assigns_unique_ids() {
        let mut store = SqliteStore::open_in_memory().unwrap();

        let a = store.create_todo(&sample_draft("a")).unwrap();
        let b = store.create_todo(&sample_draft("b")).unwrap();
        let c = store.create_todo(&sample_draft("c")).unwrap();

        assert_ne!(a.id, b.id);
        assert_ne!(b.id, c.id);
        assert_ne!(a.id, c.id);
    }

    #[test]
    fn test_get_missing_is_none() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert!(store.get_todo(42).unwrap().is_none());
    }

    #[test]
    fn test_list_skip_limit() {
        let mut store = SqliteStore::open_in_memory().unwrap();

        for i in 0..5 {
            store.create_todo(&sample_draft(&format!("todo {i}"))).unwrap();
        }

        let all = store.list_todos(0, 100).unwrap();
        assert_eq!(all.len(), 5);
        assert_eq!(all[0].title, "todo 0");

        let limited = store.list_todos(0, 2).unwrap();
        assert_eq!(limited.len(), 2);

        let skipped = store.list_todos(3, 100).unwrap();
        assert_eq!(skipped.len(), 2);
        assert_eq!(skipped[0].title, "todo 3");

        let empty = store.list_todos(10, 100).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_update_overwrites_all_fields() {
        let mut store = SqliteStore::open_in_memory().unwrap();

        let created = store.create_todo(&sample_draft("original")).unwrap();
        assert!(created.description.is_some());

        let replacement = ToDoDraft {
            title: "A".to_string(),
            description: None,
            status: "done".to_string(),
        };
        let updated = store.update_todo(created.id, &replacement).unwrap().unwrap();

        assert_eq!(updated.title, "A");
        assert_eq!(updated.description, None);
        assert_eq!(updated.status, "done");

        // The stored row matches what update returned
        let stored = store.get_todo(created.id).unwrap().unwrap();
        assert_eq!(stored, updated);
    }

    #[test]
    fn test_update_missing_is_none() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let result = store.update_todo(99, &sample_draft("nope")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_delete_returns_snapshot() {
        let mut store = SqliteStore::open_in_memory().unwrap();

        let created = store.create_todo(&sample_draft("ephemeral")).unwrap();
        let deleted = store.delete_todo(created.id).unwrap().unwrap();
        assert_eq!(deleted, created);

        assert!(store.get_todo(created.id).unwrap().is_none());
        // Second delete finds nothing
        assert!(store.delete_todo(created.id).unwrap().is_none());
    }

    #[test]
    fn test_delete_does_not_reuse_ids() {
        let mut store = SqliteStore::open_in_memory().unwrap();

        let a = store.create_todo(&sample_draft("a")).unwrap();
        store.delete_todo(a.id).unwrap();
        let b = store.create_todo(&sample_draft("b")).unwrap();

        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_count() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        assert_eq!(store.count_todos().unwrap(), 0);
        store.create_todo(&sample_draft("one")).unwrap();
        assert_eq!(store.count_todos().unwrap(), 1);
    }
}
