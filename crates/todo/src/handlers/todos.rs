//! Todo API handlers.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};

use todo_core::todo::{CreateTodoRequest, Todo, UpdateTodoRequest};

use crate::handlers::ApiError;
use crate::state::AppState;

/// GET /api/todos - List all todos in insertion order.
pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = state.todo_repo.list_todos().await?;
    Ok(Json(todos))
}

/// POST /api/todos - Create a new todo.
pub async fn create_todo(
    State(state): State<AppState>,
    payload: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let Json(request) = payload?;
    let new_todo = request.validate()?;

    let todo = state.todo_repo.create_todo(&new_todo).await?;
    tracing::info!(todo_id = todo.id, title = %todo.title, "Created todo");

    Ok((StatusCode::CREATED, Json(todo)))
}

/// PUT /api/todos/{id} - Set the completion flag of a todo.
///
/// Only `completed` is applied; any other field in the body is ignored.
pub async fn update_todo(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateTodoRequest>, JsonRejection>,
) -> Result<Json<Todo>, ApiError> {
    let Path(id) = id?;
    let Json(update) = payload?;

    let todo = state.todo_repo.update_todo(id, &update).await?;
    tracing::info!(todo_id = todo.id, completed = todo.completed, "Updated todo");

    Ok(Json(todo))
}
