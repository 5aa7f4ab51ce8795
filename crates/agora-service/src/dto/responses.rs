//! Response DTOs for the operation handlers

use chrono::{DateTime, Utc};
use serde::Serialize;

use agora_core::{DirectoryEntry, Message};

/// Community summary returned by the directory listing
#[derive(Debug, Clone, Serialize)]
pub struct CommunitySummaryResponse {
    pub name: String,
    pub owner: String,
}

impl From<DirectoryEntry> for CommunitySummaryResponse {
    fn from(entry: DirectoryEntry) -> Self {
        Self {
            name: entry.name,
            owner: entry.owner.to_string(),
        }
    }
}

/// One message of a community's log
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub id: String,
    pub sender: String,
    pub message_text: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Message> for MessageResponse {
    fn from(message: &Message) -> Self {
        Self {
            id: message.id.to_string(),
            sender: message.sender.to_string(),
            message_text: message.message_text.clone(),
            created_at: message.created_at,
        }
    }
}
