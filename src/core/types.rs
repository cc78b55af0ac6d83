/*!
 * Core Types
 * Common identifiers shared by the signal subsystem
 */

use super::errors::{SignalError, SignalResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw thread handle as passed across the integer boundary
pub type RawThreadId = i64;

/// Raw signal number as passed across the integer boundary
pub type RawSignal = i32;

/// Raw thread value meaning "not a specific thread"
pub const BROADCAST_THREAD: RawThreadId = -1;

/// Opaque thread handle
///
/// Equality is the only identity criterion. The broadcast sentinel can never
/// be wrapped in a `ThreadId`, so every value of this type names a real thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct ThreadId(RawThreadId);

impl ThreadId {
    /// Wrap a raw handle, rejecting the broadcast sentinel
    pub fn new(raw: RawThreadId) -> SignalResult<Self> {
        if raw == BROADCAST_THREAD {
            return Err(SignalError::ReservedThreadId(raw));
        }
        Ok(Self(raw))
    }

    #[inline]
    pub const fn raw(self) -> RawThreadId {
        self.0
    }
}

impl From<u32> for ThreadId {
    fn from(raw: u32) -> Self {
        Self(RawThreadId::from(raw))
    }
}

impl TryFrom<i64> for ThreadId {
    type Error = SignalError;

    fn try_from(raw: i64) -> SignalResult<Self> {
        Self::new(raw)
    }
}

impl From<ThreadId> for i64 {
    fn from(id: ThreadId) -> Self {
        id.0
    }
}

impl fmt::Display for ThreadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}
