//! Functional core of the todo service.
//!
//! Pure data types, validation, storage traits and the connection-string
//! description used by the health endpoint. Nothing in this crate performs I/O.

pub mod health;
pub mod storage;
pub mod todo;
