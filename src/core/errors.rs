/*!
 * Error Types
 * Boundary validation errors with thiserror, miette, and serde support
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Signal operation result
pub type SignalResult<T> = Result<T, SignalError>;

/// Signal errors
///
/// Controller operations themselves are total; these only surface where raw
/// integers are turned into typed values.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SignalError {
    #[error("Invalid signal: {0}")]
    #[diagnostic(
        code(signal::invalid_signal),
        help("Signal numbers must lie in 0..=31.")
    )]
    InvalidSignal(i64),

    #[error("Reserved thread id: {0}")]
    #[diagnostic(
        code(signal::reserved_thread_id),
        help("-1 denotes a process-wide delivery and cannot name a thread.")
    )]
    ReservedThreadId(i64),

    #[error("Invalid configuration: {0}")]
    #[diagnostic(
        code(signal::invalid_config),
        help("Check SIGNAL_PENDING_SCOPE; accepted values are `thread` and `thread-and-process`.")
    )]
    InvalidConfig(String),
}
