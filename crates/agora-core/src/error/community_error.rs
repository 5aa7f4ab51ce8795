//! The tagged error taxonomy for all operations
//!
//! Every handler failure is recoverable and reported as one of these tags;
//! callers branch on the tag, never on the message text.

use thiserror::Error;

/// Operation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommunityError {
    // =========================================================================
    // Missing / invalid input
    // =========================================================================
    #[error("username is required")]
    UsernameRequired,

    #[error("some credentials are missing")]
    CredentialsMissing,

    // =========================================================================
    // Not found
    // =========================================================================
    #[error("user {0} is not registered")]
    UserDoesNotExist(String),

    #[error("community {0} does not exist")]
    CommunityDoesNotExist(String),

    // =========================================================================
    // Conflict
    // =========================================================================
    #[error("username {0} is already taken")]
    UserAlreadyExists(String),

    #[error("community {0} already exists")]
    CommunityAlreadyExists(String),

    #[error("{0} is already a member of the community")]
    AlreadyAMember(String),

    // =========================================================================
    // Authorization
    // =========================================================================
    #[error("only the owner can perform this action")]
    OnlyOwnerCanDelete,

    // =========================================================================
    // Membership state
    // =========================================================================
    #[error("{0} is not a member of the community")]
    NotAMemberOfGroup(String),

    // =========================================================================
    // Infrastructure (wrapped)
    // =========================================================================
    #[error("storage error: {0}")]
    Storage(String),
}

impl CommunityError {
    /// Get an error code string for protocol responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::UsernameRequired => "USERNAME_REQUIRED",
            Self::CredentialsMissing => "CREDENTIALS_MISSING",
            Self::UserDoesNotExist(_) => "USER_DOES_NOT_EXIST",
            Self::CommunityDoesNotExist(_) => "COMMUNITY_DOES_NOT_EXIST",
            Self::UserAlreadyExists(_) => "USER_ALREADY_EXISTS",
            Self::CommunityAlreadyExists(_) => "COMMUNITY_ALREADY_EXISTS",
            Self::AlreadyAMember(_) => "ALREADY_A_MEMBER",
            Self::OnlyOwnerCanDelete => "ONLY_OWNER_CAN_DELETE",
            Self::NotAMemberOfGroup(_) => "NOT_A_MEMBER_OF_GROUP",
            Self::Storage(_) => "STORAGE_ERROR",
        }
    }

    /// Check if this is a missing/invalid input error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::UsernameRequired | Self::CredentialsMissing)
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserDoesNotExist(_) | Self::CommunityDoesNotExist(_)
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::UserAlreadyExists(_)
                | Self::CommunityAlreadyExists(_)
                | Self::AlreadyAMember(_)
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::OnlyOwnerCanDelete)
    }

    /// Check if this is a membership-state error
    pub fn is_membership(&self) -> bool {
        matches!(self, Self::NotAMemberOfGroup(_))
    }
}
