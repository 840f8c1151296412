use serde::{Deserialize, Serialize};

/// Liveness indicator reported by the health endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
}

/// Non-authoritative description of the storage backend.
///
/// Derived from the connection string only; it says nothing about whether
/// the database is reachable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseInfo {
    /// Database engine, e.g. `PostgreSQL` or `SQLite`.
    #[serde(rename = "type")]
    pub kind: String,
    /// True when the host belongs to a known managed database offering.
    pub managed: bool,
    /// Host name without credentials, port or database name.
    pub host: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

impl DatabaseInfo {
    /// Description of process-local storage with no connection string.
    pub fn in_memory() -> Self {
        Self {
            kind: "in-memory".to_string(),
            managed: false,
            host: "local".to_string(),
            provider: None,
        }
    }

    /// Placeholder used when the connection string cannot be described.
    pub fn unknown() -> Self {
        Self {
            kind: "unknown".to_string(),
            managed: false,
            host: "unknown".to_string(),
            provider: None,
        }
    }
}

/// Body of `/health` and `/healthz`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseInfo>,
}

impl HealthResponse {
    /// Bare liveness confirmation.
    pub const fn healthy() -> Self {
        Self {
            status: HealthStatus::Healthy,
            database: None,
        }
    }

    pub fn with_database(mut self, database: DatabaseInfo) -> Self {
        self.database = Some(database);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_health_response_has_only_status() {
        let json = serde_json::to_value(HealthResponse::healthy()).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "healthy" }));
    }

    #[test]
    fn test_health_response_with_database() {
        let response = HealthResponse::healthy().with_database(DatabaseInfo {
            kind: "PostgreSQL".to_string(),
            managed: true,
            host: "todos.abc123.us-east-1.rds.amazonaws.com".to_string(),
            provider: Some("AWS RDS".to_string()),
        });

        let json = serde_json::to_value(response).unwrap();

        assert_eq!(json["status"], "healthy");
        assert_eq!(json["database"]["type"], "PostgreSQL");
        assert_eq!(json["database"]["managed"], true);
        assert_eq!(json["database"]["provider"], "AWS RDS");
    }

    #[test]
    fn test_unknown_database_omits_provider() {
        let json = serde_json::to_value(DatabaseInfo::unknown()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "type": "unknown", "managed": false, "host": "unknown" })
        );
    }

    #[test]
    fn test_in_memory_database() {
        let json = serde_json::to_value(DatabaseInfo::in_memory()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "type": "in-memory", "managed": false, "host": "local" })
        );
    }
}
