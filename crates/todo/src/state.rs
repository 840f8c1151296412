//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. It holds the storage handle as a repository trait object
//! and the database description served by `/health`.

use std::sync::Arc;

use todo_core::health::{describe_database, DatabaseInfo};
use todo_core::storage::{Result, TodoRepository};
use todo_core::todo::demo_todos;

use crate::config::Config;

/// Shared application state.
///
/// This is cloned for each request handler. Cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    /// Storage handle for todos.
    pub todo_repo: Arc<dyn TodoRepository>,
    /// Description of the configured database, computed once at startup.
    pub database_info: Arc<DatabaseInfo>,
}

impl AppState {
    /// Creates a new AppState around a repository.
    ///
    /// The connection string is described here, off the request path, so the
    /// health endpoint only ever serves a precomputed value.
    pub fn build(todo_repo: Arc<dyn TodoRepository>, database_url: &str) -> Self {
        Self::with_database_info(todo_repo, describe_database(database_url))
    }

    /// Creates a new AppState with an explicit database description.
    pub fn with_database_info(
        todo_repo: Arc<dyn TodoRepository>,
        database_info: DatabaseInfo,
    ) -> Self {
        Self {
            todo_repo,
            database_info: Arc::new(database_info),
        }
    }

    /// Inserts the demo todos if the table is empty.
    ///
    /// Returns how many todos were inserted. Running this against a table that
    /// already has rows is a no-op, so restarts never duplicate the demo data.
    pub async fn seed_demo_data(&self) -> Result<usize> {
        if self.todo_repo.count_todos().await? > 0 {
            tracing::debug!("Todos table not empty, skipping demo data");
            return Ok(0);
        }

        let todos = demo_todos();
        for todo in &todos {
            let created = self.todo_repo.create_todo(todo).await?;
            tracing::debug!(todo_id = created.id, title = %created.title, "Seeded demo todo");
        }

        tracing::info!(count = todos.len(), "Seeded demo todos");
        Ok(todos.len())
    }
}

// ============================================================================
// Factory functions for the different storage backends
// ============================================================================

#[cfg(feature = "sqlite")]
mod sqlite {
    use super::*;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState with SQLite storage.
        pub async fn new(config: &Config) -> std::result::Result<Self, anyhow::Error> {
            let repo = Arc::new(SqliteRepository::connect(&config.database_url).await?);
            Ok(Self::build(repo, &config.database_url))
        }
    }
}

#[cfg(feature = "postgres")]
mod postgres {
    use super::*;
    use crate::storage::PostgresRepository;

    impl AppState {
        /// Creates AppState with a PostgreSQL connection pool.
        pub async fn new(config: &Config) -> std::result::Result<Self, anyhow::Error> {
            let repo = Arc::new(
                PostgresRepository::connect(
                    &config.database_url,
                    config.database_max_connections,
                )
                .await?,
            );
            Ok(Self::build(repo, &config.database_url))
        }
    }
}

#[cfg(feature = "inmemory")]
mod inmemory {
    use super::*;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage.
        /// Useful for demos without any external dependencies.
        ///
        /// `DATABASE_URL` is ignored; nothing is connected to.
        pub async fn new(_config: &Config) -> std::result::Result<Self, anyhow::Error> {
            let repo = Arc::new(InMemoryRepository::new());
            Ok(Self::with_database_info(repo, DatabaseInfo::in_memory()))
        }
    }
}

// ============================================================================
// Test support - provides Default implementation for unit tests
// ============================================================================


#[cfg(test)]
mod tests {
    use super::*;
    use todo_core::todo::CreateTodoRequest;

    #[tokio::test]
    async fn test_seed_demo_data_into_empty_table() {
        let state = AppState::default();

        let inserted = state.seed_demo_data().await.unwrap();
        let todos = state.todo_repo.list_todos().await.unwrap();

        assert_eq!(inserted, 3);
        assert_eq!(todos.len(), 3);
        assert_eq!(todos[0].title, "Learn FastAPI");
        assert!(todos.iter().all(|todo| !todo.completed));
    }

    #[tokio::test]
    async fn test_seed_demo_data_is_noop_on_second_run() {
        let state = AppState::default();

        state.seed_demo_data().await.unwrap();
        let inserted = state.seed_demo_data().await.unwrap();

        assert_eq!(inserted, 0);
        assert_eq!(state.todo_repo.count_todos().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_seed_demo_data_skips_populated_table() {
        let state = AppState::default();
        let todo = CreateTodoRequest::new("Mine").validate().unwrap();
        state.todo_repo.create_todo(&todo).await.unwrap();

        assert_eq!(state.seed_demo_data().await.unwrap(), 0);
        assert_eq!(state.todo_repo.count_todos().await.unwrap(), 1);
    }

    #[test]
    fn test_with_database_info_skips_connection_string() {
        let state = AppState::with_database_info(
            Arc::new(crate::storage::InMemoryRepository::new()),
            DatabaseInfo::in_memory(),
        );

        assert_eq!(state.database_info.kind, "in-memory");
        assert_eq!(state.database_info.host, "local");
    }

    #[cfg(feature = "inmemory")]
    #[tokio::test]
    async fn test_inmemory_backend_ignores_database_url() {
        let config = Config {
            database_url: "sqlite://todos.db".to_string(),
            database_max_connections: 5,
            seed_demo_data: false,
            request_timeout_seconds: 10,
        };

        let state = AppState::new(&config).await.unwrap();

        assert_eq!(*state.database_info, DatabaseInfo::in_memory());
    }

    #[test]
    fn test_build_describes_database_once() {
        let state = AppState::build(
            Arc::new(crate::storage::InMemoryRepository::new()),
            "postgresql://u:p@todo.abc.eu-west-1.rds.amazonaws.com/todos",
        );

        assert_eq!(state.database_info.kind, "PostgreSQL");
        assert!(state.database_info.managed);
    }
}
