//! Test fixtures and data generators
//!
//! Provides unique usernames, community names, and request payloads so
//! tests never collide on the globally unique keys.

use std::sync::atomic::{AtomicU64, Ordering};

use agora_core::CallerId;
use agora_service::dto::{
    CreateCommunityRequest, DeleteCommunityRequest, ExitCommunityRequest, JoinCommunityRequest,
    ListMessagesRequest, RegisterUserRequest, RemoveUserRequest, SendMessageRequest,
};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// A unique username
pub fn unique_username() -> String {
    format!("testuser{}", unique_suffix())
}

/// A unique community name
pub fn unique_community_name() -> String {
    format!("community{}", unique_suffix())
}

pub fn register(username: &str) -> RegisterUserRequest {
    RegisterUserRequest {
        username: username.to_string(),
    }
}

pub fn create_community(name: &str, creator: &str) -> CreateCommunityRequest {
    CreateCommunityRequest {
        community_name: name.to_string(),
        creator_username: creator.to_string(),
    }
}

pub fn delete_community(name: &str, owner: &str) -> DeleteCommunityRequest {
    DeleteCommunityRequest {
        community_name: name.to_string(),
        owner: CallerId::new(owner),
    }
}

pub fn join(username: &str, community: &str) -> JoinCommunityRequest {
    JoinCommunityRequest {
        username: username.to_string(),
        community_name: community.to_string(),
    }
}

pub fn exit(username: &str, community: &str) -> ExitCommunityRequest {
    ExitCommunityRequest {
        username: username.to_string(),
        community_name: community.to_string(),
    }
}

pub fn remove_user(community: &str, owner: &str, target: &str) -> RemoveUserRequest {
    RemoveUserRequest {
        community_name: community.to_string(),
        owner: CallerId::new(owner),
        username: target.to_string(),
    }
}

pub fn send_message(community: &str, text: &str, sender: &str) -> SendMessageRequest {
    SendMessageRequest {
        community_name: community.to_string(),
        message_text: text.to_string(),
        sender_username: sender.to_string(),
    }
}

pub fn list_messages(username: &str, community: &str) -> ListMessagesRequest {
    ListMessagesRequest {
        username: username.to_string(),
        community_name: community.to_string(),
    }
}
