//! PostgreSQL schema definitions and SQL query constants.

/// SQL statement to create the todos table.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS todos (
    id BIGSERIAL PRIMARY KEY,
    title VARCHAR(100) NOT NULL CHECK (char_length(title) >= 1),
    completed BOOLEAN NOT NULL DEFAULT FALSE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
)
"#;

pub const INSERT_TODO: &str = r#"
INSERT INTO todos (title, completed)
VALUES ($1, $2)
RETURNING id, title, completed, created_at
"#;

pub const SELECT_TODOS: &str = r#"
SELECT id, title, completed, created_at
FROM todos
ORDER BY id ASC
"#;

pub const UPDATE_TODO_COMPLETED: &str = r#"
UPDATE todos
SET completed = $2
WHERE id = $1
RETURNING id, title, completed, created_at
"#;

pub const COUNT_TODOS: &str = r#"
SELECT COUNT(*)
FROM todos
"#;
