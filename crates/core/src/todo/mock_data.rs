//! Demo data for seeding an empty database.

use super::requests::{CreateTodoRequest, NewTodo};

/// Titles of the todos the service ships with in demo mode.
const DEMO_TITLES: [&str; 3] = ["Learn FastAPI", "Build Todo App", "Deploy to Kubernetes"];

/// Returns the demo todos, already validated and in insertion order.
///
/// # Example
///
/// ```
/// use todo_core::todo::demo_todos;
///
/// let todos = demo_todos();
/// assert_eq!(todos.len(), 3);
/// assert!(todos.iter().all(|todo| !todo.completed()));
/// ```
pub fn demo_todos() -> Vec<NewTodo> {
    DEMO_TITLES
        .iter()
        .filter_map(|title| CreateTodoRequest::new(*title).validate().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_todos_keep_declared_order() {
        let titles: Vec<String> = demo_todos()
            .iter()
            .map(|todo| todo.title().to_string())
            .collect();

        assert_eq!(
            titles,
            vec!["Learn FastAPI", "Build Todo App", "Deploy to Kubernetes"]
        );
    }

    #[test]
    fn test_every_demo_title_is_valid() {
        assert_eq!(demo_todos().len(), DEMO_TITLES.len());
    }
}
