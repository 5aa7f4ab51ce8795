//! Domain entities
//!
//! Persisted records for the three stores. All entities are serde-encoded
//! by the storage layer, so they derive `Serialize`/`Deserialize` here.

mod community;
mod directory;
mod message;
mod user;

pub use community::Community;
pub use directory::DirectoryEntry;
pub use message::Message;
pub use user::User;
