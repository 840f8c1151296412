use super::error::TodoError;

/// Shortest accepted title, in characters.
pub const TITLE_MIN_CHARS: usize = 1;

/// Longest accepted title, in characters.
pub const TITLE_MAX_CHARS: usize = 100;

/// Validates a todo title.
///
/// Length is measured in Unicode scalar values, not bytes, so a title of
/// 100 emoji is accepted. The title is not trimmed.
///
/// NUL is rejected: SQLite's `length()` stops at it and PostgreSQL text
/// columns cannot store it.
pub fn validate_title(title: &str) -> Result<(), TodoError> {
    if title.contains('\0') {
        return Err(TodoError::NulCharacter);
    }

    let len = title.chars().count();
    if len < TITLE_MIN_CHARS {
        return Err(TodoError::EmptyTitle);
    }
    if len > TITLE_MAX_CHARS {
        return Err(TodoError::TitleTooLong {
            max: TITLE_MAX_CHARS,
            actual: len,
        });
    }
    Ok(())
}
