//! Message entity - one entry in a community's append-only log

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{CallerId, Uid};

/// Message entity
///
/// Immutable once appended; owned by exactly one community.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: Uid,
    pub sender: CallerId,
    pub message_text: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Create a new Message
    pub fn new(
        id: Uid,
        sender: CallerId,
        message_text: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            sender,
            message_text,
            created_at,
        }
    }

    /// Check if the message text is blank
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.message_text.trim().is_empty()
    }
}
