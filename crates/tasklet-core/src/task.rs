use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Creation-timestamp identifier in Unix milliseconds. Unique within one
/// store; the store bumps past collisions, so two adds in the same
/// millisecond still get distinct ids.
pub type TaskId = i64;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,

    pub text: String,

    #[serde(default)]
    pub completed: bool,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Task {
    pub fn new(id: TaskId, text: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            text,
            completed: false,
            created_at: now,
        }
    }
}
