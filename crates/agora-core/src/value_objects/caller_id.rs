//! Caller identity - the opaque identifier of the requesting principal
//!
//! The hosting environment authenticates callers and hands each request an
//! unforgeable identifier. The backend never interprets it; equality is
//! exact text equality, which is also how ownership checks compare it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque caller identity supplied by the hosting environment.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CallerId(String);

impl CallerId {
    /// Wrap the textual form of a caller identity.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The textual form, as received from the host.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An identity with no text. The host should never produce one, but
    /// payload fields carrying a claimed identity may arrive blank.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CallerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for CallerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for CallerId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}
