mod error;
mod mock_data;
mod operations;
mod requests;
mod types;

pub use error::TodoError;
pub use mock_data::demo_todos;
pub use operations::{validate_title, TITLE_MAX_CHARS, TITLE_MIN_CHARS};
pub use requests::{CreateTodoRequest, NewTodo, UpdateTodoRequest};
pub use types::Todo;
