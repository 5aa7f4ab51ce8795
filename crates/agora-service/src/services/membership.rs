//! Membership service
//!
//! Handles joining, exiting, and owner-driven removal of members.

use tracing::{info, instrument};
use validator::Validate;

use agora_core::CommunityError;

use crate::dto::{ExitCommunityRequest, JoinCommunityRequest, RemoveUserRequest};

use super::context::ServiceContext;
use super::ServiceResult;

/// Membership service
pub struct MembershipService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MembershipService<'a> {
    /// Create a new MembershipService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Add a registered user to a community's member list
    #[instrument(skip(self, request), fields(username = %request.username, community = %request.community_name))]
    pub async fn join_community(&self, request: JoinCommunityRequest) -> ServiceResult<String> {
        request
            .validate()
            .map_err(|_| CommunityError::CredentialsMissing)?;

        if !self.ctx.user_store().exists(&request.username).await? {
            return Err(CommunityError::UserDoesNotExist(request.username));
        }

        let mut community = self
            .ctx
            .community_store()
            .find(&request.community_name)
            .await?
            .ok_or_else(|| CommunityError::CommunityDoesNotExist(request.community_name.clone()))?;

        if community.is_member(&request.username) {
            return Err(CommunityError::AlreadyAMember(request.username));
        }

        community.add_member(&request.username);
        self.ctx.community_store().update(&community).await?;

        info!(username = %request.username, community = %community.name, "member joined");

        Ok(format!("successfully joined {}", community.name))
    }

    /// Remove the requesting user from a community's member list
    ///
    /// The owner may exit like any other member; the community persists
    /// and its owner identity is unchanged.
    #[instrument(skip(self, request), fields(username = %request.username, community = %request.community_name))]
    pub async fn exit_community(&self, request: ExitCommunityRequest) -> ServiceResult<String> {
        request
            .validate()
            .map_err(|_| CommunityError::CredentialsMissing)?;

        if !self.ctx.user_store().exists(&request.username).await? {
            return Err(CommunityError::UserDoesNotExist(request.username));
        }

        let mut community = self
            .ctx
            .community_store()
            .find(&request.community_name)
            .await?
            .ok_or_else(|| CommunityError::CommunityDoesNotExist(request.community_name.clone()))?;

        if !community.remove_member(&request.username) {
            return Err(CommunityError::NotAMemberOfGroup(request.username));
        }
        self.ctx.community_store().update(&community).await?;

        info!(username = %request.username, community = %community.name, "member exited");

        Ok(format!("successfully exited {}", community.name))
    }

    /// Remove a member from a community (owner only)
    ///
    /// The owner may remove any member, themselves included; a community
    /// may be left with zero members.
    #[instrument(skip(self, request), fields(username = %request.username, community = %request.community_name))]
    pub async fn remove_user(&self, request: RemoveUserRequest) -> ServiceResult<String> {
        request
            .validate()
            .map_err(|_| CommunityError::CredentialsMissing)?;
        if request.owner.is_empty() {
            return Err(CommunityError::CredentialsMissing);
        }

        let mut community = self
            .ctx
            .community_store()
            .find(&request.community_name)
            .await?
            .ok_or_else(|| CommunityError::CommunityDoesNotExist(request.community_name.clone()))?;

        if !community.is_owner(&request.owner) {
            return Err(CommunityError::OnlyOwnerCanDelete);
        }

        if !self.ctx.user_store().exists(&request.username).await? {
            return Err(CommunityError::UserDoesNotExist(request.username));
        }

        if !community.remove_member(&request.username) {
            return Err(CommunityError::NotAMemberOfGroup(request.username));
        }
        self.ctx.community_store().update(&community).await?;

        info!(username = %request.username, community = %community.name, "member removed by owner");

        Ok(format!("successfully removed {}", request.username))
    }
}
