//! Data transfer objects for the operation handlers

mod requests;
mod responses;

pub use requests::{
    CreateCommunityRequest, DeleteCommunityRequest, ExitCommunityRequest, JoinCommunityRequest,
    ListMessagesRequest, RegisterUserRequest, RemoveUserRequest, SendMessageRequest,
};
pub use responses::{CommunitySummaryResponse, MessageResponse};
