//! Directory entry - denormalized community summary for cheap listing

use serde::{Deserialize, Serialize};

use crate::value_objects::CallerId;

/// Denormalized (name, owner) summary of a community.
///
/// Created and removed together with the full `Community` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub name: String,
    pub owner: CallerId,
}

impl DirectoryEntry {
    /// Create a new DirectoryEntry
    pub fn new(name: String, owner: CallerId) -> Self {
        Self { name, owner }
    }
}
