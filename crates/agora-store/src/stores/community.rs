//! Sled implementation of CommunityStore

use async_trait::async_trait;
use tracing::instrument;

use agora_core::entities::Community;
use agora_core::traits::{CommunityStore, StoreResult};

use crate::handle::StoreHandle;

use super::{map_codec_error, map_store_error};

const TREE_NAME: &str = "communities";

/// Sled implementation of CommunityStore, keyed by community name.
#[derive(Clone)]
pub struct SledCommunityStore {
    tree: sled::Tree,
}

impl SledCommunityStore {
    /// Create a new SledCommunityStore over the handle's community tree
    pub fn new(handle: &StoreHandle) -> StoreResult<Self> {
        Ok(Self {
            tree: handle.tree(TREE_NAME)?,
        })
    }
}

#[async_trait]
impl CommunityStore for SledCommunityStore {
    #[instrument(skip(self))]
    async fn find(&self, name: &str) -> StoreResult<Option<Community>> {
        let value = self.tree.get(name.as_bytes()).map_err(map_store_error)?;

        value
            .map(|bytes| serde_json::from_slice(&bytes).map_err(map_codec_error))
            .transpose()
    }

    #[instrument(skip(self))]
    async fn exists(&self, name: &str) -> StoreResult<bool> {
        self.tree
            .contains_key(name.as_bytes())
            .map_err(map_store_error)
    }

    #[instrument(skip(self, community), fields(name = %community.name))]
    async fn insert(&self, community: &Community) -> StoreResult<()> {
        let bytes = serde_json::to_vec(community).map_err(map_codec_error)?;
        self.tree
            .insert(community.name.as_bytes(), bytes)
            .map_err(map_store_error)?;
        Ok(())
    }

    #[instrument(skip(self, community), fields(name = %community.name))]
    async fn update(&self, community: &Community) -> StoreResult<()> {
        let bytes = serde_json::to_vec(community).map_err(map_codec_error)?;
        self.tree
            .insert(community.name.as_bytes(), bytes)
            .map_err(map_store_error)?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove(&self, name: &str) -> StoreResult<Option<Community>> {
        let previous = self.tree.remove(name.as_bytes()).map_err(map_store_error)?;

        previous
            .map(|bytes| serde_json::from_slice(&bytes).map_err(map_codec_error))
            .transpose()
    }
}
