//! # agora-store
//!
//! Storage layer: sled-backed implementations of the three store ports.
//!
//! Each map lives in its own sled tree inside one database. Values are
//! serde_json-encoded records; keys are the UTF-8 bytes of the username or
//! community name, so sled's lexicographic iteration yields listings in key
//! order.

mod handle;
mod stores;

pub use handle::StoreHandle;
pub use stores::{SledCommunityStore, SledDirectoryStore, SledUserStore};
