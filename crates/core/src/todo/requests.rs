//! API request types for todo operations.
//!
//! Following the Functional Core pattern, these are pure data types with no I/O.

use serde::{Deserialize, Serialize};

use super::error::TodoError;
use super::operations::validate_title;

/// Request payload for creating a new todo (POST /api/todos).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodoRequest {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl CreateTodoRequest {
    /// Create a new request with just a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            completed: false,
        }
    }

    /// Set the initial completion flag.
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Validates the request and turns it into a [`NewTodo`] ready for storage.
    pub fn validate(self) -> Result<NewTodo, TodoError> {
        validate_title(&self.title)?;
        Ok(NewTodo {
            title: self.title,
            completed: self.completed,
        })
    }
}

/// A validated todo that has not been stored yet.
///
/// Only obtainable through [`CreateTodoRequest::validate`], so every value
/// handed to a repository already satisfies the title constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    title: String,
    completed: bool,
}

impl NewTodo {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn completed(&self) -> bool {
        self.completed
    }
}

/// Request payload for updating a todo (PUT /api/todos/{id}).
///
/// Only `completed` is accepted. Other fields a client sends along
/// (`title`, `created_at`) are dropped during deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTodoRequest {
    pub completed: bool,
}

impl UpdateTodoRequest {
    pub fn new(completed: bool) -> Self {
        Self { completed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_defaults_completed_to_false() {
        let request: CreateTodoRequest =
            serde_json::from_str(r#"{"title":"Buy milk"}"#).unwrap();

        assert_eq!(request.title, "Buy milk");
        assert!(!request.completed);
    }

    #[test]
    fn test_create_request_accepts_explicit_completed() {
        let request: CreateTodoRequest =
            serde_json::from_str(r#"{"title":"Done already","completed":true}"#).unwrap();

        assert!(request.completed);
    }

    #[test]
    fn test_create_request_requires_title() {
        let result: Result<CreateTodoRequest, _> = serde_json::from_str(r#"{"completed":true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_produces_new_todo() {
        let new_todo = CreateTodoRequest::new("Buy milk")
            .with_completed(true)
            .validate()
            .unwrap();

        assert_eq!(new_todo.title(), "Buy milk");
        assert!(new_todo.completed());
    }

    #[test]
    fn test_validate_rejects_empty_title() {
        let result = CreateTodoRequest::new("").validate();
        assert_eq!(result, Err(TodoError::EmptyTitle));
    }

    #[test]
    fn test_update_request_ignores_immutable_fields() {
        let request: UpdateTodoRequest = serde_json::from_str(
            r#"{"completed":true,"title":"Renamed","created_at":"2020-01-01T00:00:00Z"}"#,
        )
        .unwrap();

        assert_eq!(request, UpdateTodoRequest::new(true));
    }

    #[test]
    fn test_update_request_requires_completed() {
        let result: Result<UpdateTodoRequest, _> = serde_json::from_str(r#"{}"#);
        assert!(result.is_err());
    }
}
