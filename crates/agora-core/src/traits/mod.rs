//! Store ports

mod stores;

pub use stores::{CommunityStore, DirectoryStore, StoreResult, UserStore};
