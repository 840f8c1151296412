//! PostgreSQL error mapping.
//!
//! Maps `sqlx::Error` to `RepositoryError` from `todo_core::storage`.

use todo_core::storage::RepositoryError;

/// SQLSTATE class 23: integrity constraint violation.
const INTEGRITY_CONSTRAINT_CLASS: &str = "23";

/// Maps a sqlx error to a RepositoryError.
///
/// # Error Mapping
///
/// - `RowNotFound` → `RepositoryError::NotFound`
/// - Pool and I/O failures → `RepositoryError::ConnectionFailed`
/// - Constraint violations → `RepositoryError::InvalidData`
/// - Decode failures → `RepositoryError::Serialization`
/// - All other errors → `RepositoryError::QueryFailed`
pub fn map_sqlx_error(err: sqlx::Error, id: Option<i64>) -> RepositoryError {
    match &err {
        sqlx::Error::RowNotFound => RepositoryError::NotFound {
            entity_type: "Todo",
            id: id.map_or_else(|| "unknown".to_string(), |id| id.to_string()),
        },
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::WorkerCrashed => {
            RepositoryError::ConnectionFailed(format!("Database unavailable: {err}"))
        }
        sqlx::Error::Database(db_err)
            if db_err
                .code()
                .is_some_and(|code| code.starts_with(INTEGRITY_CONSTRAINT_CLASS)) =>
        {
            RepositoryError::InvalidData(db_err.message().to_string())
        }
        sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
            RepositoryError::Serialization(err.to_string())
        }
        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}
