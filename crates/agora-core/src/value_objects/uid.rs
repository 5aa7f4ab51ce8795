//! Uid - opaque unique identifier for communities and messages
//!
//! Structure (64-bit):
//! - Bits 63-23: milliseconds since custom epoch
//! - Bits 22-16: node id (0-127)
//! - Bits 15-0:  sequence number
//!
//! Uniqueness is the only requirement; a Uid is not a capability and not a
//! security boundary. Callers treat it as opaque.

use std::fmt;
use std::sync::atomic::{AtomicU16, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Opaque unique identifier (64-bit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Uid(i64);

impl Uid {
    /// Custom epoch: 2024-01-01 00:00:00 UTC (milliseconds)
    pub const EPOCH: i64 = 1_704_067_200_000;

    /// Create a Uid from a raw i64 value
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Check if the Uid is zero (uninitialized)
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Milliseconds since Unix epoch at generation time
    #[inline]
    pub fn timestamp_millis(&self) -> i64 {
        (self.0 >> 23) + Self::EPOCH
    }

    /// Node id of the generator that produced this Uid
    #[inline]
    pub fn node_id(&self) -> u8 {
        ((self.0 >> 16) & 0x7F) as u8
    }

    /// Parse from the decimal string representation
    pub fn parse(s: &str) -> Result<Self, UidParseError> {
        s.parse::<i64>().map(Uid).map_err(|_| UidParseError::InvalidFormat)
    }
}

/// Error when parsing a Uid from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UidParseError {
    #[error("invalid uid format")]
    InvalidFormat,
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Uid {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<Uid> for i64 {
    fn from(id: Uid) -> Self {
        id.0
    }
}

impl std::str::FromStr for Uid {
    type Err = UidParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uid::parse(s)
    }
}

// Serialize as string for JSON (JavaScript BigInt safety)
impl Serialize for Uid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for Uid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Uid::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Thread-safe Uid generator
///
/// Combines the current millisecond, a node id, and a wrapping sequence
/// counter. Two identical Uids would require one node to allocate more than
/// 65536 ids inside a single millisecond.
pub struct UidGenerator {
    node_id: u8,
    sequence: AtomicU16,
}

impl UidGenerator {
    /// Create a new generator with the given node id
    ///
    /// # Panics
    /// Panics if node_id >= 128
    pub fn new(node_id: u8) -> Self {
        assert!(node_id < 128, "node id must be < 128");
        Self {
            node_id,
            sequence: AtomicU16::new(0),
        }
    }

    /// Generate a new unique Uid
    pub fn generate(&self) -> Uid {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0);
        let seq = self.sequence.fetch_add(1, Ordering::Relaxed);

        let id = ((millis - Uid::EPOCH) << 23)
            | (i64::from(self.node_id) << 16)
            | i64::from(seq);
        Uid::new(id)
    }

    /// Node id of this generator
    pub fn node_id(&self) -> u8 {
        self.node_id
    }
}

impl Default for UidGenerator {
    fn default() -> Self {
        Self::new(0)
    }
}
