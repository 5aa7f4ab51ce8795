//! User service
//!
//! Handles user registration.

use tracing::{info, instrument};
use validator::Validate;

use agora_core::{CommunityError, User};

use crate::dto::RegisterUserRequest;

use super::context::ServiceContext;
use super::request::RequestContext;
use super::ServiceResult;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user under a globally unique username
    #[instrument(skip(self, request_ctx, request))]
    pub async fn register_user(
        &self,
        request_ctx: &RequestContext,
        request: RegisterUserRequest,
    ) -> ServiceResult<String> {
        request
            .validate()
            .map_err(|_| CommunityError::UsernameRequired)?;

        if self.ctx.user_store().exists(&request.username).await? {
            return Err(CommunityError::UserAlreadyExists(request.username));
        }

        let user = User::new(
            request_ctx.caller.clone(),
            request.username,
            request_ctx.timestamp,
        );
        self.ctx.user_store().insert(&user).await?;

        info!(username = %user.username, "user registered");

        Ok(format!(
            "user {} has been registered successfully",
            user.username
        ))
    }
}
