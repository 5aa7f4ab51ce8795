//! Message service
//!
//! Handles appending to and reading a community's message log.

use tracing::{info, instrument};
use validator::Validate;

use agora_core::{CommunityError, Message};

use crate::dto::{ListMessagesRequest, MessageResponse, SendMessageRequest};

use super::context::ServiceContext;
use super::request::RequestContext;
use super::ServiceResult;

/// Message service
pub struct MessageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MessageService<'a> {
    /// Create a new MessageService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Append a message to a community's log (members only)
    ///
    /// The recorded sender is the request caller's identity; the payload
    /// names the username the membership check runs against.
    #[instrument(skip(self, request_ctx, request), fields(community = %request.community_name))]
    pub async fn send_message(
        &self,
        request_ctx: &RequestContext,
        request: SendMessageRequest,
    ) -> ServiceResult<String> {
        request
            .validate()
            .map_err(|_| CommunityError::CredentialsMissing)?;

        let mut community = self
            .ctx
            .community_store()
            .find(&request.community_name)
            .await?
            .ok_or_else(|| CommunityError::CommunityDoesNotExist(request.community_name.clone()))?;

        if !self
            .ctx
            .user_store()
            .exists(&request.sender_username)
            .await?
        {
            return Err(CommunityError::UserDoesNotExist(request.sender_username));
        }

        if !community.is_member(&request.sender_username) {
            return Err(CommunityError::NotAMemberOfGroup(request.sender_username));
        }

        let message = Message::new(
            self.ctx.generate_id(),
            request_ctx.caller.clone(),
            request.message_text,
            request_ctx.timestamp,
        );
        community.push_message(message);
        self.ctx.community_store().update(&community).await?;

        info!(community = %community.name, "message appended");

        Ok("message sent successfully".to_string())
    }

    /// Read a community's full message log, in append order (members only)
    #[instrument(skip(self, request), fields(username = %request.username, community = %request.community_name))]
    pub async fn list_messages(
        &self,
        request: ListMessagesRequest,
    ) -> ServiceResult<Vec<MessageResponse>> {
        request
            .validate()
            .map_err(|_| CommunityError::CredentialsMissing)?;

        if !self.ctx.user_store().exists(&request.username).await? {
            return Err(CommunityError::UserDoesNotExist(request.username));
        }

        let community = self
            .ctx
            .community_store()
            .find(&request.community_name)
            .await?
            .ok_or_else(|| CommunityError::CommunityDoesNotExist(request.community_name.clone()))?;

        if !community.is_member(&request.username) {
            return Err(CommunityError::NotAMemberOfGroup(request.username));
        }

        Ok(community.messages.iter().map(MessageResponse::from).collect())
    }
}
