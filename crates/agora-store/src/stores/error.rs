//! Error handling utilities for the sled stores

use agora_core::CommunityError;

/// Convert a sled error to the domain error taxonomy
pub(crate) fn map_store_error(e: sled::Error) -> CommunityError {
    CommunityError::Storage(e.to_string())
}

/// Convert a value encode/decode error to the domain error taxonomy
pub(crate) fn map_codec_error(e: serde_json::Error) -> CommunityError {
    CommunityError::Storage(e.to_string())
}
