//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.

use chrono::{DateTime, Utc};
use rusqlite::Row;

use todo_core::todo::Todo;

/// Column index of `created_at` in every todo projection.
const CREATED_AT_COLUMN: usize = 3;

/// Convert a SQLite row to a Todo.
///
/// Expected columns: id, title, completed, created_at
pub fn row_to_todo(row: &Row) -> rusqlite::Result<Todo> {
    let id: i64 = row.get(0)?;
    let title: String = row.get(1)?;
    let completed: bool = row.get(2)?;
    let created_at: String = row.get(CREATED_AT_COLUMN)?;

    Ok(Todo {
        id,
        title,
        completed,
        created_at: parse_datetime(&created_at)?,
    })
}

/// Parse a datetime from RFC 3339 string.
fn parse_datetime(s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                CREATED_AT_COLUMN,
                rusqlite::types::Type::Text,
                Box::new(e),
            )
        })
}
