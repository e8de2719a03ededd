//! Database schema definitions

/// SQL to create the todos table
pub const CREATE_TODOS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS todos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT,
    status TEXT NOT NULL
)
"#;

/// All schema creation statements, safe to re-run at every startup
pub fn all_schema_statements() -> Vec<&'static str> {
    vec![CREATE_TODOS_TABLE]
}
