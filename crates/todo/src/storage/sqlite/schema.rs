//! SQLite schema definitions and SQL query constants.
//!
//! This module contains all SQL statements used by the SQLite repository,
//! following the Functional Core pattern - pure data, no I/O.

/// SQL statement to create the todos table.
///
/// `AUTOINCREMENT` keeps ids monotonic: SQLite never hands out an id twice,
/// even after the highest row is gone. `created_at` is filled in by SQLite
/// as an RFC 3339 UTC timestamp with millisecond precision.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS todos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL CHECK (length(title) BETWEEN 1 AND 100),
    completed INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
);
"#;

pub const INSERT_TODO: &str = r#"
INSERT INTO todos (title, completed)
VALUES (?1, ?2)
RETURNING id, title, completed, created_at
"#;

pub const SELECT_TODOS: &str = r#"
SELECT id, title, completed, created_at
FROM todos
ORDER BY id ASC
"#;

pub const UPDATE_TODO_COMPLETED: &str = r#"
UPDATE todos
SET completed = ?2
WHERE id = ?1
RETURNING id, title, completed, created_at
"#;

pub const COUNT_TODOS: &str = r#"
SELECT COUNT(*)
FROM todos
"#;
