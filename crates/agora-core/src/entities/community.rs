//! Community entity - a named group with members and a message log

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::Message;
use crate::value_objects::{CallerId, Uid};

/// Community entity
///
/// `members` is an ordered sequence of usernames with no duplicates; the
/// creator is a member from creation time. `messages` is append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Community {
    pub id: Uid,
    pub owner: CallerId,
    pub name: String,
    pub members: Vec<String>,
    pub messages: Vec<Message>,
    pub created_at: DateTime<Utc>,
}

impl Community {
    /// Create a new Community with the creator as sole member
    pub fn new(
        id: Uid,
        owner: CallerId,
        name: String,
        creator_username: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            owner,
            name,
            members: vec![creator_username],
            messages: Vec::new(),
            created_at,
        }
    }

    /// Check if the given identity owns this community
    #[inline]
    pub fn is_owner(&self, caller: &CallerId) -> bool {
        self.owner == *caller
    }

    /// Check if a username is in the member list
    pub fn is_member(&self, username: &str) -> bool {
        self.members.iter().any(|member| member == username)
    }

    /// Append a member. The caller must have checked for membership first;
    /// the member list carries no duplicates.
    pub fn add_member(&mut self, username: &str) {
        self.members.push(username.to_string());
    }

    /// Remove a member, returning whether they were present
    pub fn remove_member(&mut self, username: &str) -> bool {
        let before = self.members.len();
        self.members.retain(|member| member != username);
        self.members.len() != before
    }

    /// Append a message to the log
    pub fn push_message(&mut self, message: Message) {
        self.messages.push(message);
    }
}
