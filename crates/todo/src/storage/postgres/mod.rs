//! PostgreSQL storage backend implementation.
//!
//! Uses a `sqlx` connection pool; each statement runs in its own implicit
//! transaction on whichever pooled connection is free.

mod error;
mod repository;
mod schema;

pub use repository::PostgresRepository;
