//! Request DTOs for the operation handlers
//!
//! All request DTOs implement `Deserialize` and, where a field is required
//! to be non-empty, `Validate`. Claimed identities arrive as opaque
//! `CallerId` values and are checked for blankness by the services.

use serde::Deserialize;
use validator::Validate;

use agora_core::CallerId;

// ============================================================================
// User Requests
// ============================================================================

/// Register a new user
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterUserRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
}

// ============================================================================
// Community Requests
// ============================================================================

/// Create a new community
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommunityRequest {
    #[validate(length(min = 1, message = "Community name is required"))]
    pub community_name: String,

    /// Username recorded as the creator and first member
    pub creator_username: String,
}

/// Delete a community (owner only)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DeleteCommunityRequest {
    #[validate(length(min = 1, message = "Community name is required"))]
    pub community_name: String,

    /// Claimed owner identity, compared against the stored owner
    pub owner: CallerId,
}

// ============================================================================
// Membership Requests
// ============================================================================

/// Join a community
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct JoinCommunityRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Community name is required"))]
    pub community_name: String,
}

/// Exit a community
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ExitCommunityRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Community name is required"))]
    pub community_name: String,
}

/// Remove a member from a community (owner only)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RemoveUserRequest {
    #[validate(length(min = 1, message = "Community name is required"))]
    pub community_name: String,

    /// Claimed owner identity, compared against the stored owner
    pub owner: CallerId,

    /// Username of the member to remove
    #[validate(length(min = 1, message = "Target username is required"))]
    pub username: String,
}

// ============================================================================
// Message Requests
// ============================================================================

/// Send a message to a community
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SendMessageRequest {
    #[validate(length(min = 1, message = "Community name is required"))]
    pub community_name: String,

    #[validate(length(min = 1, message = "Message text is required"))]
    pub message_text: String,

    /// Username the sender is registered under
    pub sender_username: String,
}

/// List all messages of a community (members only)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ListMessagesRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Community name is required"))]
    pub community_name: String,
}
