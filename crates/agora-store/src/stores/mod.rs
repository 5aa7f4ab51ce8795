//! Sled-backed store implementations

mod community;
mod directory;
mod error;
mod user;

pub use community::SledCommunityStore;
pub use directory::SledDirectoryStore;
pub use user::SledUserStore;

pub(crate) use error::{map_codec_error, map_store_error};
