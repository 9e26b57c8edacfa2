use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::task::Task;

/// User identity as offered by the host shell. Every field is optional
/// in practice; a missing user only means personalization is skipped.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
}

impl UserProfile {
    pub fn display_name(&self) -> &str {
        self.first_name.trim()
    }

    /// Fallback avatar glyph when the host offers no photo.
    pub fn initial(&self) -> Option<char> {
        self.display_name().chars().next()
    }
}

pub const SNAPSHOT_ACTION: &str = "save_tasks";

/// One-way export payload handed to the host's outbound data channel.
/// Fire-and-forget: nothing downstream acknowledges it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    pub action: String,
    pub tasks: Vec<Task>,
    pub timestamp: DateTime<Utc>,
    pub user: Option<UserProfile>,
}

impl Snapshot {
    pub fn new(tasks: Vec<Task>, now: DateTime<Utc>, user: Option<UserProfile>) -> Self {
        Self {
            action: SNAPSHOT_ACTION.to_string(),
            tasks,
            timestamp: now,
            user,
        }
    }
}
