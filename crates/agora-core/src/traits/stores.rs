//! Store ports - the interface to the three durable key-value maps
//!
//! The domain layer defines what it needs from the host's durable store;
//! the infrastructure layer provides the implementation. All three maps are
//! key-ordered and survive process restarts.

use async_trait::async_trait;

use crate::entities::{Community, DirectoryEntry, User};
use crate::error::CommunityError;

/// Result type for store operations
pub type StoreResult<T> = Result<T, CommunityError>;

// ============================================================================
// User store (key = username)
// ============================================================================

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Find a user by username
    async fn find(&self, username: &str) -> StoreResult<Option<User>>;

    /// Check if a username is already taken
    async fn exists(&self, username: &str) -> StoreResult<bool>;

    /// Insert a new user record
    async fn insert(&self, user: &User) -> StoreResult<()>;

    /// Rewrite an existing user record
    async fn update(&self, user: &User) -> StoreResult<()>;

    /// Remove a user record, returning it if present
    async fn remove(&self, username: &str) -> StoreResult<Option<User>>;
}

// ============================================================================
// Community store (key = community name)
// ============================================================================

#[async_trait]
pub trait CommunityStore: Send + Sync {
    /// Find a community by name
    async fn find(&self, name: &str) -> StoreResult<Option<Community>>;

    /// Check if a community name is already taken
    async fn exists(&self, name: &str) -> StoreResult<bool>;

    /// Insert a new community record
    async fn insert(&self, community: &Community) -> StoreResult<()>;

    /// Rewrite an existing community record
    async fn update(&self, community: &Community) -> StoreResult<()>;

    /// Remove a community record, returning it if present
    async fn remove(&self, name: &str) -> StoreResult<Option<Community>>;
}

// ============================================================================
// Directory store (key = community name, paired lifecycle with communities)
// ============================================================================

#[async_trait]
pub trait DirectoryStore: Send + Sync {
    /// Insert a directory entry
    async fn insert(&self, entry: &DirectoryEntry) -> StoreResult<()>;

    /// Remove a directory entry, returning it if present
    async fn remove(&self, name: &str) -> StoreResult<Option<DirectoryEntry>>;

    /// All entries, in ascending key (community name) order
    async fn list(&self) -> StoreResult<Vec<DirectoryEntry>>;
}
