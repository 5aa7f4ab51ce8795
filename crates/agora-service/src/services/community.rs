//! Community service
//!
//! Handles community creation, listing, and deletion. Communities and their
//! directory entries share one lifecycle: they are written and removed as a
//! pair.

use tracing::{info, instrument};
use validator::Validate;

use agora_core::{Community, CommunityError, DirectoryEntry};

use crate::dto::{CommunitySummaryResponse, CreateCommunityRequest, DeleteCommunityRequest};

use super::context::ServiceContext;
use super::request::RequestContext;
use super::ServiceResult;

/// Community service
pub struct CommunityService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommunityService<'a> {
    /// Create a new CommunityService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new community with the named creator as sole member
    ///
    /// The recorded owner is the request caller's identity, not the named
    /// creator's. Owner-gated operations later compare against the caller
    /// identity stored here.
    #[instrument(skip(self, request_ctx, request), fields(community = %request.community_name))]
    pub async fn create_community(
        &self,
        request_ctx: &RequestContext,
        request: CreateCommunityRequest,
    ) -> ServiceResult<String> {
        request
            .validate()
            .map_err(|_| CommunityError::CredentialsMissing)?;

        if self
            .ctx
            .community_store()
            .exists(&request.community_name)
            .await?
        {
            return Err(CommunityError::CommunityAlreadyExists(
                request.community_name,
            ));
        }

        let mut creator = self
            .ctx
            .user_store()
            .find(&request.creator_username)
            .await?
            .ok_or_else(|| CommunityError::UserDoesNotExist(request.creator_username.clone()))?;

        let community = Community::new(
            self.ctx.generate_id(),
            request_ctx.caller.clone(),
            request.community_name.clone(),
            request.creator_username.clone(),
            request_ctx.timestamp,
        );
        let entry = DirectoryEntry::new(request.community_name.clone(), request_ctx.caller.clone());

        self.ctx.directory_store().insert(&entry).await?;
        self.ctx.community_store().insert(&community).await?;

        creator.record_created_group(&request.community_name);
        self.ctx.user_store().update(&creator).await?;

        info!(
            community = %community.name,
            owner = %community.owner,
            "community created"
        );

        Ok(format!(
            "{} community has been created successfully",
            community.name
        ))
    }

    /// List all communities, in the directory's key order
    #[instrument(skip(self))]
    pub async fn list_communities(&self) -> ServiceResult<Vec<CommunitySummaryResponse>> {
        let entries = self.ctx.directory_store().list().await?;
        Ok(entries
            .into_iter()
            .map(CommunitySummaryResponse::from)
            .collect())
    }

    /// Delete a community (owner only)
    ///
    /// Removes the community and its directory entry together, then prunes
    /// the community name from the created-communities list of the user in
    /// member slot 0. After membership churn that user may not be the
    /// original creator.
    #[instrument(skip(self, request), fields(community = %request.community_name))]
    pub async fn delete_community(
        &self,
        request: DeleteCommunityRequest,
    ) -> ServiceResult<String> {
        request
            .validate()
            .map_err(|_| CommunityError::CredentialsMissing)?;
        if request.owner.is_empty() {
            return Err(CommunityError::CredentialsMissing);
        }

        let community = self
            .ctx
            .community_store()
            .find(&request.community_name)
            .await?
            .ok_or_else(|| CommunityError::CommunityDoesNotExist(request.community_name.clone()))?;

        if !community.is_owner(&request.owner) {
            return Err(CommunityError::OnlyOwnerCanDelete);
        }

        self.ctx
            .community_store()
            .remove(&request.community_name)
            .await?;
        self.ctx
            .directory_store()
            .remove(&request.community_name)
            .await?;

        if let Some(first_member) = community.members.first() {
            if let Some(mut user) = self.ctx.user_store().find(first_member).await? {
                if user.forget_created_group(&request.community_name) {
                    self.ctx.user_store().update(&user).await?;
                }
            }
        }

        info!(community = %request.community_name, "community deleted");

        Ok(format!(
            "{} has been deleted successfully",
            request.community_name
        ))
    }
}
