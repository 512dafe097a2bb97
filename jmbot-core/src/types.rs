//! Core types: group message event and plugin metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A group chat message as delivered by the host: sender, group, raw text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupMessageEvent {
    pub id: String,
    pub group_id: i64,
    pub user_id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl GroupMessageEvent {
    /// Builds an event stamped with the current time. The id is derived from
    /// group, sender and timestamp; hosts with real message ids set `id` directly.
    pub fn new(group_id: i64, user_id: i64, text: impl Into<String>) -> Self {
        let created_at = Utc::now();
        Self {
            id: format!("{}-{}-{}", group_id, user_id, created_at.timestamp_millis()),
            group_id,
            user_id,
            text: text.into(),
            created_at,
        }
    }
}

/// Plugin identity block: name must be globally unique within a host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginMetadata {
    pub name: String,
    pub version: String,
    pub description: String,
    pub author: String,
    /// Names of other plugins this one requires.
    pub dependencies: Vec<String>,
}
