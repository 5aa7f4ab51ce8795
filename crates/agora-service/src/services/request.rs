//! Per-request context from the hosting environment
//!
//! The host authenticates the caller and stamps the request; services never
//! read ambient identity or the wall clock for persisted data.

use chrono::{DateTime, Utc};

use agora_core::CallerId;

/// Caller identity and timestamp for one request.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub caller: CallerId,
    pub timestamp: DateTime<Utc>,
}

impl RequestContext {
    /// Create a new RequestContext
    pub fn new(caller: CallerId, timestamp: DateTime<Utc>) -> Self {
        Self { caller, timestamp }
    }
}
