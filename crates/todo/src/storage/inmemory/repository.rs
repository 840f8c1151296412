//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use todo_core::storage::{RepositoryError, Result, TodoRepository};
use todo_core::todo::{NewTodo, Todo, UpdateTodoRequest};

/// Rows plus the id sequence, guarded together so that id assignment and
/// insertion happen under the same write lock.
#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<i64, Todo>,
    last_id: i64,
}

/// In-memory storage backend.
///
/// Ids start at 1 and are never reused. Data is not persisted and will be
/// lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    table: Arc<RwLock<Table>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoRepository for InMemoryRepository {
    async fn list_todos(&self) -> Result<Vec<Todo>> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn create_todo(&self, todo: &NewTodo) -> Result<Todo> {
        let mut table = self.table.write().await;
        table.last_id += 1;

        let stored = Todo {
            id: table.last_id,
            title: todo.title().to_string(),
            completed: todo.completed(),
            created_at: Utc::now(),
        };
        table.rows.insert(stored.id, stored.clone());

        Ok(stored)
    }

    async fn update_todo(&self, id: i64, update: &UpdateTodoRequest) -> Result<Todo> {
        let mut table = self.table.write().await;
        let Some(existing) = table.rows.get_mut(&id) else {
            return Err(RepositoryError::todo_not_found(id));
        };

        *existing = existing.with_completed(update.completed);
        Ok(existing.clone())
    }

    async fn count_todos(&self) -> Result<u64> {
        let table = self.table.read().await;
        Ok(table.rows.len() as u64)
    }
}
