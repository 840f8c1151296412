mod database;
mod types;

pub use database::describe_database;
pub use types::{DatabaseInfo, HealthResponse, HealthStatus};
