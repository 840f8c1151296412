use thiserror::Error;

/// Errors that can occur when validating a todo before it is stored.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TodoError {
    #[error("Title cannot be empty")]
    EmptyTitle,
    #[error("Title too long (max {max} characters, got {actual})")]
    TitleTooLong { max: usize, actual: usize },
    #[error("Title cannot contain NUL characters")]
    NulCharacter,
}

impl TodoError {
    /// Name of the request field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            TodoError::EmptyTitle
            | TodoError::TitleTooLong { .. }
            | TodoError::NulCharacter => "title",
        }
    }
}
