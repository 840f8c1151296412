//! PostgreSQL repository implementation.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgPool, PgPoolOptions};

use todo_core::storage::{Result, TodoRepository};
use todo_core::todo::{NewTodo, Todo, UpdateTodoRequest};

use super::error::map_sqlx_error;
use super::schema;

/// Column tuple shared by every todo projection.
type TodoRow = (i64, String, bool, DateTime<Utc>);

fn row_to_todo((id, title, completed, created_at): TodoRow) -> Todo {
    Todo {
        id,
        title,
        completed,
        created_at,
    }
}

/// PostgreSQL-based repository implementation.
pub struct PostgresRepository {
    pool: PgPool,
}

impl PostgresRepository {
    /// Connects a pool to the given connection string and creates the schema.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(5))
            .connect(database_url)
            .await
            .map_err(|e| map_sqlx_error(e, None))?;

        Self::from_pool(pool).await
    }

    /// Wraps an existing pool and creates the schema.
    pub async fn from_pool(pool: PgPool) -> Result<Self> {
        let repo = Self { pool };
        repo.init_schema().await?;
        Ok(repo)
    }

    /// Initialize the database schema.
    ///
    /// Safe to call repeatedly; existing tables and rows are left alone.
    pub async fn init_schema(&self) -> Result<()> {
        sqlx::query(schema::CREATE_TABLES)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, None))?;

        Ok(())
    }
}

#[async_trait]
impl TodoRepository for PostgresRepository {
    async fn list_todos(&self) -> Result<Vec<Todo>> {
        let rows = sqlx::query_as::<_, TodoRow>(schema::SELECT_TODOS)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, None))?;

        Ok(rows.into_iter().map(row_to_todo).collect())
    }

    async fn create_todo(&self, todo: &NewTodo) -> Result<Todo> {
        let row = sqlx::query_as::<_, TodoRow>(schema::INSERT_TODO)
            .bind(todo.title())
            .bind(todo.completed())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, None))?;

        Ok(row_to_todo(row))
    }

    async fn update_todo(&self, id: i64, update: &UpdateTodoRequest) -> Result<Todo> {
        // RowNotFound from fetch_one becomes RepositoryError::NotFound
        let row = sqlx::query_as::<_, TodoRow>(schema::UPDATE_TODO_COMPLETED)
            .bind(id)
            .bind(update.completed)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, Some(id)))?;

        Ok(row_to_todo(row))
    }

    async fn count_todos(&self) -> Result<u64> {
        let (count,): (i64,) = sqlx::query_as(schema::COUNT_TODOS)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, None))?;

        Ok(count.max(0) as u64)
    }
}
