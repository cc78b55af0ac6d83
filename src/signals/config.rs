/*!
 * Signal Controller Configuration
 *
 * Runtime configuration for pending-set reporting
 */

use crate::core::errors::{SignalError, SignalResult};
use serde::{Deserialize, Serialize};
use std::env::VarError;
use std::str::FromStr;

/// Environment variable selecting the pending scope
pub const PENDING_SCOPE_ENV: &str = "SIGNAL_PENDING_SCOPE";

/// Which sets `pending` reports
///
/// Wait and poll always consider both the thread's own set and the
/// process-wide set; this only affects the non-consuming query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PendingScope {
    /// Thread-local set only
    #[default]
    Thread,
    /// Thread-local set OR-ed with the process-wide set
    ThreadAndProcess,
}

impl FromStr for PendingScope {
    type Err = SignalError;

    fn from_str(s: &str) -> SignalResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "thread" => Ok(PendingScope::Thread),
            "thread-and-process" | "thread_and_process" => Ok(PendingScope::ThreadAndProcess),
            other => Err(SignalError::InvalidConfig(format!(
                "{}={:?}",
                PENDING_SCOPE_ENV, other
            ))),
        }
    }
}

/// Signal controller configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalConfig {
    pub pending_scope: PendingScope,
}

impl SignalConfig {
    /// `pending` reports the thread-local set only
    pub const fn posix_observed() -> Self {
        Self {
            pending_scope: PendingScope::Thread,
        }
    }

    /// `pending` also reports process-wide signals
    pub const fn unified_pending() -> Self {
        Self {
            pending_scope: PendingScope::ThreadAndProcess,
        }
    }

    /// Build from environment, falling back to defaults for unset variables
    ///
    /// Environment variables:
    /// - SIGNAL_PENDING_SCOPE: `thread` (default) or `thread-and-process`
    pub fn from_env() -> SignalResult<Self> {
        let pending_scope = match std::env::var(PENDING_SCOPE_ENV) {
            Ok(value) => value.parse()?,
            Err(VarError::NotPresent) => PendingScope::default(),
            Err(VarError::NotUnicode(raw)) => {
                return Err(SignalError::InvalidConfig(format!(
                    "{}={:?}",
                    PENDING_SCOPE_ENV, raw
                )))
            }
        };
        Ok(Self { pending_scope })
    }
}
