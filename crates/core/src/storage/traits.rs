use async_trait::async_trait;

use crate::todo::{NewTodo, Todo, UpdateTodoRequest};

use super::Result;

/// Storage handle for todo items.
///
/// Implementations assign `id` and `created_at` on insert. Each method is a
/// single atomic operation: either the whole write is visible or none of it is.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Lists every stored todo, ordered by ascending id.
    async fn list_todos(&self) -> Result<Vec<Todo>>;

    /// Stores a new todo and returns it with its assigned id and timestamp.
    async fn create_todo(&self, todo: &NewTodo) -> Result<Todo>;

    /// Overwrites the `completed` flag of an existing todo.
    ///
    /// Returns `RepositoryError::NotFound` if no todo has the given id.
    async fn update_todo(&self, id: i64, update: &UpdateTodoRequest) -> Result<Todo>;

    /// Counts the stored todos.
    async fn count_todos(&self) -> Result<u64>;
}
