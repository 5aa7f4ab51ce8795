//! Test helpers for integration tests
//!
//! Provides a backend wired against temporary sled stores, plus request
//! context construction for arbitrary callers.

use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;

use agora_common::{try_init_tracing, TracingConfig};
use agora_core::{CallerId, UidGenerator};
use agora_service::{RequestContext, ServiceContext, ServiceContextBuilder};
use agora_store::{SledCommunityStore, SledDirectoryStore, SledUserStore, StoreHandle};

/// A backend instance over temporary stores.
///
/// The underlying database is deleted when the backend is dropped.
pub struct TestBackend {
    ctx: ServiceContext,
    handle: StoreHandle,
}

impl TestBackend {
    /// Start a backend over a fresh temporary database
    pub fn start() -> Result<Self> {
        let _ = try_init_tracing(&TracingConfig::default());

        let handle = StoreHandle::temporary()?;
        let ctx = Self::wire(&handle)?;
        Ok(Self { ctx, handle })
    }

    /// Start a backend over a database at the given path.
    ///
    /// Unlike [`start`](Self::start), the database survives the backend;
    /// reopening the same path restores all three maps.
    pub fn open_at(path: &std::path::Path) -> Result<Self> {
        let _ = try_init_tracing(&TracingConfig::default());

        let handle = StoreHandle::open(path)?;
        let ctx = Self::wire(&handle)?;
        Ok(Self { ctx, handle })
    }

    fn wire(handle: &StoreHandle) -> Result<ServiceContext> {
        Ok(ServiceContextBuilder::new()
            .user_store(Arc::new(SledUserStore::new(handle)?))
            .community_store(Arc::new(SledCommunityStore::new(handle)?))
            .directory_store(Arc::new(SledDirectoryStore::new(handle)?))
            .uid_generator(Arc::new(UidGenerator::new(0)))
            .build()?)
    }

    /// The service context of this backend
    pub fn ctx(&self) -> &ServiceContext {
        &self.ctx
    }

    /// Flush the underlying database to disk
    pub fn flush(&self) -> Result<()> {
        self.handle.flush()?;
        Ok(())
    }
}

/// A request context for the given caller, stamped with the current time
pub fn request_as(caller: &str) -> RequestContext {
    RequestContext::new(CallerId::new(caller), Utc::now())
}
