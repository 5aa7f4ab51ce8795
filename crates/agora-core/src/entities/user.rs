//! User entity - a registered account, keyed by username

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::CallerId;

/// User entity
///
/// `groups_created` tracks the names of communities this user created, in
/// creation order. Users are never deleted by any exposed operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: CallerId,
    pub username: String,
    pub groups_created: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with an empty created-communities list
    pub fn new(id: CallerId, username: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            username,
            groups_created: Vec::new(),
            created_at,
        }
    }

    /// Record a community this user created
    pub fn record_created_group(&mut self, community_name: &str) {
        self.groups_created.push(community_name.to_string());
    }

    /// Drop a community from the created list, returning whether it was present
    pub fn forget_created_group(&mut self, community_name: &str) -> bool {
        let before = self.groups_created.len();
        self.groups_created.retain(|name| name != community_name);
        self.groups_created.len() != before
    }
}
