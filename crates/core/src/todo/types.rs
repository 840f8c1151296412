use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored todo item.
///
/// `id` and `created_at` are assigned by the storage layer on insert and
/// never change afterwards. `completed` is the only field clients can mutate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Todo {
    /// Returns a copy of this todo with `completed` overwritten.
    ///
    /// Every other field is carried over untouched.
    pub fn with_completed(&self, completed: bool) -> Self {
        Self {
            completed,
            ..self.clone()
        }
    }
}
