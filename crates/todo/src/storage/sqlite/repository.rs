//! SQLite repository implementation.
//!
//! Implements [`TodoRepository`] from `todo_core::storage` using SQLite.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use todo_core::storage::{RepositoryError, Result, TodoRepository};
use todo_core::todo::{NewTodo, Todo, UpdateTodoRequest};

use super::conversions::row_to_todo;
use super::error::{map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id};
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// Where a SQLite connection string points.
#[derive(Debug, Clone, PartialEq, Eq)]
enum SqliteLocation {
    Memory,
    File(PathBuf),
}

/// Resolves `sqlite://path`, `sqlite:path`, `sqlite::memory:` and bare paths.
fn parse_sqlite_url(database_url: &str) -> Option<SqliteLocation> {
    let trimmed = database_url.trim();
    let rest = trimmed
        .strip_prefix("sqlite://")
        .or_else(|| trimmed.strip_prefix("sqlite:"))
        .unwrap_or(trimmed);

    // Query parameters such as `?mode=rwc` are not supported and dropped.
    let path = rest.split('?').next().unwrap_or_default();

    match path {
        "" => None,
        ":memory:" => Some(SqliteLocation::Memory),
        _ if path.contains("://") => None,
        _ => Some(SqliteLocation::File(PathBuf::from(path))),
    }
}

/// SQLite-based repository implementation.
///
/// A single `tokio-rusqlite` connection serializes all statements on its
/// background thread, so every operation runs in its own implicit transaction.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Opens the database a connection string points at.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn connect(database_url: &str) -> Result<Self> {
        match parse_sqlite_url(database_url) {
            Some(SqliteLocation::Memory) => Self::new_in_memory().await,
            Some(SqliteLocation::File(path)) => Self::new(path).await,
            None => Err(RepositoryError::ConnectionFailed(format!(
                "Not a SQLite connection string: {database_url}"
            ))),
        }
    }

    /// Creates a new repository with a file-based database.
    pub async fn new(path: PathBuf) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        let repo = Self { conn };
        repo.init_schema().await?;

        Ok(repo)
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        let repo = Self { conn };
        repo.init_schema().await?;

        Ok(repo)
    }

    /// Initialize the database schema.
    ///
    /// Safe to call repeatedly; existing tables and rows are left alone.
    pub async fn init_schema(&self) -> Result<()> {
        self.conn
            .call(|conn| {
                conn.execute_batch(schema::CREATE_TABLES).map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }
}

#[async_trait]
impl TodoRepository for SqliteRepository {
    async fn list_todos(&self) -> Result<Vec<Todo>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_TODOS).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_todo).map_err(wrap_err)?;

                let mut todos = Vec::new();
                for row_result in rows {
                    todos.push(row_result.map_err(wrap_err)?);
                }
                Ok(todos)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn create_todo(&self, todo: &NewTodo) -> Result<Todo> {
        let title = todo.title().to_string();
        let completed = todo.completed();

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::INSERT_TODO).map_err(wrap_err)?;
                let todo = stmt
                    .query_row(rusqlite::params![title, completed], row_to_todo)
                    .map_err(wrap_err)?;
                Ok(todo)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn update_todo(&self, id: i64, update: &UpdateTodoRequest) -> Result<Todo> {
        let completed = update.completed;

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::UPDATE_TODO_COMPLETED)
                    .map_err(wrap_err)?;
                let todo = stmt
                    .query_row(rusqlite::params![id, completed], row_to_todo)
                    .map_err(wrap_err)?;
                Ok(todo)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, id))
    }

    async fn count_todos(&self) -> Result<u64> {
        self.conn
            .call(|conn| {
                let count = conn
                    .query_row(schema::COUNT_TODOS, [], |row| row.get::<_, i64>(0))
                    .map_err(wrap_err)?;
                Ok(count)
            })
            .await
            .map(|count| count.max(0) as u64)
            .map_err(map_tokio_rusqlite_error)
    }
}
