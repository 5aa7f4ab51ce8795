//! Operation services
//!
//! Business logic for the nine operations, grouped per aggregate. Each
//! service borrows the shared `ServiceContext` and validates fully before
//! its first write, so a failed precondition leaves the stores untouched.

pub mod community;
pub mod context;
pub mod membership;
pub mod message;
pub mod request;
pub mod user;

pub use community::CommunityService;
pub use context::{MissingDependency, ServiceContext, ServiceContextBuilder};
pub use membership::MembershipService;
pub use message::MessageService;
pub use request::RequestContext;
pub use user::UserService;

use agora_core::CommunityError;

/// Result type for service operations
pub type ServiceResult<T> = Result<T, CommunityError>;
