//! Sled implementation of UserStore

use async_trait::async_trait;
use tracing::instrument;

use agora_core::entities::User;
use agora_core::traits::{StoreResult, UserStore};

use crate::handle::StoreHandle;

use super::{map_codec_error, map_store_error};

const TREE_NAME: &str = "users";

/// Sled implementation of UserStore, keyed by username.
#[derive(Clone)]
pub struct SledUserStore {
    tree: sled::Tree,
}

impl SledUserStore {
    /// Create a new SledUserStore over the handle's user tree
    pub fn new(handle: &StoreHandle) -> StoreResult<Self> {
        Ok(Self {
            tree: handle.tree(TREE_NAME)?,
        })
    }
}

#[async_trait]
impl UserStore for SledUserStore {
    #[instrument(skip(self))]
    async fn find(&self, username: &str) -> StoreResult<Option<User>> {
        let value = self
            .tree
            .get(username.as_bytes())
            .map_err(map_store_error)?;

        value
            .map(|bytes| serde_json::from_slice(&bytes).map_err(map_codec_error))
            .transpose()
    }

    #[instrument(skip(self))]
    async fn exists(&self, username: &str) -> StoreResult<bool> {
        self.tree
            .contains_key(username.as_bytes())
            .map_err(map_store_error)
    }

    #[instrument(skip(self, user), fields(username = %user.username))]
    async fn insert(&self, user: &User) -> StoreResult<()> {
        let bytes = serde_json::to_vec(user).map_err(map_codec_error)?;
        self.tree
            .insert(user.username.as_bytes(), bytes)
            .map_err(map_store_error)?;
        Ok(())
    }

    #[instrument(skip(self, user), fields(username = %user.username))]
    async fn update(&self, user: &User) -> StoreResult<()> {
        let bytes = serde_json::to_vec(user).map_err(map_codec_error)?;
        self.tree
            .insert(user.username.as_bytes(), bytes)
            .map_err(map_store_error)?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove(&self, username: &str) -> StoreResult<Option<User>> {
        let previous = self
            .tree
            .remove(username.as_bytes())
            .map_err(map_store_error)?;

        previous
            .map(|bytes| serde_json::from_slice(&bytes).map_err(map_codec_error))
            .transpose()
    }
}
