//! Storage backend implementations.
//!
//! This module provides concrete implementations of the [`TodoRepository`]
//! trait defined in `todo_core::storage`. The backend used by the server is
//! selected at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `sqlite` (default): SQLite storage backend using `rusqlite` and `tokio-rusqlite`
//! - `postgres`: PostgreSQL storage backend using a `sqlx` connection pool
//! - `inmemory`: process-local storage, nothing is persisted
//!
//! These features are mutually exclusive - only one storage backend can be
//! enabled at a time.
//!
//! # Examples
//!
//! Build with SQLite (default):
//! ```bash
//! cargo build -p todo
//! ```
//!
//! Build with PostgreSQL:
//! ```bash
//! cargo build -p todo --no-default-features --features postgres
//! ```
//!
//! [`TodoRepository`]: todo_core::storage::TodoRepository

// Compile-time checks for mutual exclusivity
#[cfg(all(feature = "sqlite", feature = "postgres"))]
compile_error!(
    "Features 'sqlite' and 'postgres' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(all(feature = "sqlite", feature = "inmemory"))]
compile_error!("Cannot enable both 'sqlite' and 'inmemory' storage features");

#[cfg(all(feature = "postgres", feature = "inmemory"))]
compile_error!("Cannot enable both 'postgres' and 'inmemory' storage features");

#[cfg(not(any(feature = "sqlite", feature = "postgres", feature = "inmemory")))]
compile_error!(
    "No storage backend selected. Enable 'sqlite', 'postgres' or 'inmemory' feature. \
    Example: cargo build -p todo --features sqlite"
);

// The in-memory backend doubles as the repository for handler tests.
#[cfg(any(test, feature = "inmemory"))]
pub mod inmemory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "postgres")]
pub mod postgres;

#[cfg(any(test, feature = "inmemory"))]
pub use inmemory::InMemoryRepository;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRepository;

#[cfg(feature = "postgres")]
pub use postgres::PostgresRepository;
