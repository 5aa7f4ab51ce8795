//! Sled implementation of DirectoryStore

use async_trait::async_trait;
use tracing::instrument;

use agora_core::entities::DirectoryEntry;
use agora_core::traits::{DirectoryStore, StoreResult};

use crate::handle::StoreHandle;

use super::{map_codec_error, map_store_error};

const TREE_NAME: &str = "directory";

/// Sled implementation of DirectoryStore, keyed by community name.
///
/// sled iterates trees in lexicographic key order, which is exactly the
/// listing order the directory promises.
#[derive(Clone)]
pub struct SledDirectoryStore {
    tree: sled::Tree,
}

impl SledDirectoryStore {
    /// Create a new SledDirectoryStore over the handle's directory tree
    pub fn new(handle: &StoreHandle) -> StoreResult<Self> {
        Ok(Self {
            tree: handle.tree(TREE_NAME)?,
        })
    }
}

#[async_trait]
impl DirectoryStore for SledDirectoryStore {
    #[instrument(skip(self, entry), fields(name = %entry.name))]
    async fn insert(&self, entry: &DirectoryEntry) -> StoreResult<()> {
        let bytes = serde_json::to_vec(entry).map_err(map_codec_error)?;
        self.tree
            .insert(entry.name.as_bytes(), bytes)
            .map_err(map_store_error)?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove(&self, name: &str) -> StoreResult<Option<DirectoryEntry>> {
        let previous = self.tree.remove(name.as_bytes()).map_err(map_store_error)?;

        previous
            .map(|bytes| serde_json::from_slice(&bytes).map_err(map_codec_error))
            .transpose()
    }

    #[instrument(skip(self))]
    async fn list(&self) -> StoreResult<Vec<DirectoryEntry>> {
        let mut entries = Vec::new();
        for item in self.tree.iter() {
            let (_, bytes) = item.map_err(map_store_error)?;
            entries.push(serde_json::from_slice(&bytes).map_err(map_codec_error)?);
        }
        Ok(entries)
    }
}
