//! Service context - dependency container for services
//!
//! Holds the three store ports and the Uid generator. Constructed once at
//! startup and passed by reference to the per-request service values; there
//! are no ambient globals.

use std::sync::Arc;

use agora_core::traits::{CommunityStore, DirectoryStore, UserStore};
use agora_core::{Uid, UidGenerator};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    user_store: Arc<dyn UserStore>,
    community_store: Arc<dyn CommunityStore>,
    directory_store: Arc<dyn DirectoryStore>,
    uid_generator: Arc<UidGenerator>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        user_store: Arc<dyn UserStore>,
        community_store: Arc<dyn CommunityStore>,
        directory_store: Arc<dyn DirectoryStore>,
        uid_generator: Arc<UidGenerator>,
    ) -> Self {
        Self {
            user_store,
            community_store,
            directory_store,
            uid_generator,
        }
    }

    /// Get the user store
    pub fn user_store(&self) -> &dyn UserStore {
        self.user_store.as_ref()
    }

    /// Get the community store
    pub fn community_store(&self) -> &dyn CommunityStore {
        self.community_store.as_ref()
    }

    /// Get the directory store
    pub fn directory_store(&self) -> &dyn DirectoryStore {
        self.directory_store.as_ref()
    }

    /// Generate a new unique identifier
    pub fn generate_id(&self) -> Uid {
        self.uid_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("stores", &"...")
            .field("uid_node", &self.uid_generator.node_id())
            .finish()
    }
}

/// Error returned when building a context with a missing dependency
#[derive(Debug, thiserror::Error)]
#[error("service context missing dependency: {0}")]
pub struct MissingDependency(&'static str);

/// Builder for creating a ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_store: Option<Arc<dyn UserStore>>,
    community_store: Option<Arc<dyn CommunityStore>>,
    directory_store: Option<Arc<dyn DirectoryStore>>,
    uid_generator: Option<Arc<UidGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_store(mut self, store: Arc<dyn UserStore>) -> Self {
        self.user_store = Some(store);
        self
    }

    pub fn community_store(mut self, store: Arc<dyn CommunityStore>) -> Self {
        self.community_store = Some(store);
        self
    }

    pub fn directory_store(mut self, store: Arc<dyn DirectoryStore>) -> Self {
        self.directory_store = Some(store);
        self
    }

    pub fn uid_generator(mut self, generator: Arc<UidGenerator>) -> Self {
        self.uid_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `MissingDependency` if any required dependency is absent
    pub fn build(self) -> Result<ServiceContext, MissingDependency> {
        Ok(ServiceContext::new(
            self.user_store.ok_or(MissingDependency("user_store"))?,
            self.community_store
                .ok_or(MissingDependency("community_store"))?,
            self.directory_store
                .ok_or(MissingDependency("directory_store"))?,
            self.uid_generator
                .ok_or(MissingDependency("uid_generator"))?,
        ))
    }
}
