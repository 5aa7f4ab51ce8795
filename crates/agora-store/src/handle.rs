//! Store handle: database lifecycle and tree access
//!
//! Owns the sled database. Opened once at startup from the configured path;
//! the per-map stores each open their tree through it.

use std::path::Path;

use agora_core::StoreResult;

use crate::stores::map_store_error;

/// Handle to the underlying sled database.
#[derive(Clone)]
pub struct StoreHandle {
    db: sled::Db,
}

impl StoreHandle {
    /// Open (or create) the database at the given directory.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let db = sled::open(path).map_err(map_store_error)?;
        Ok(Self { db })
    }

    /// Open a temporary database that is deleted on drop. For tests.
    pub fn temporary() -> StoreResult<Self> {
        let db = sled::Config::new()
            .temporary(true)
            .open()
            .map_err(map_store_error)?;
        Ok(Self { db })
    }

    /// Open a named tree within the database.
    pub(crate) fn tree(&self, name: &str) -> StoreResult<sled::Tree> {
        self.db.open_tree(name).map_err(map_store_error)
    }

    /// Flush all dirty buffers to disk.
    pub fn flush(&self) -> StoreResult<()> {
        self.db.flush().map(|_| ()).map_err(map_store_error)
    }
}

impl std::fmt::Debug for StoreHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreHandle").finish_non_exhaustive()
    }
}
