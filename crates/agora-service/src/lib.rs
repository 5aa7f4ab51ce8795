//! # agora-service
//!
//! Application layer containing the operation handlers and DTOs. One service
//! per aggregate; every operation is a single lookup-validate-mutate pass
//! against the injected stores.

pub mod dto;
pub mod services;

// Re-export the service surface at crate root
pub use services::{
    CommunityService, MembershipService, MessageService, RequestContext, ServiceContext,
    ServiceContextBuilder, ServiceResult, UserService,
};
