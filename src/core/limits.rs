/*!
 * Signal Limits and Constants
 *
 * Centralized location for the numeric bounds of the signal subsystem.
 */

// =============================================================================
// SIGNAL NUMBERING
// =============================================================================

/// Number of distinct signal numbers (0..=31)
/// One bit per signal in a 32-bit pending set
pub const SIGNAL_COUNT: u8 = 32;

/// Highest valid signal number
pub const MAX_SIGNAL: u8 = SIGNAL_COUNT - 1;

/// Sentinel returned by the raw poll API when nothing is deliverable
/// [LINUX-COMPAT] Mirrors the -1 convention of libc wrappers
pub const NO_SIGNAL: i32 = -1;

/// Mask with every signal bit set
pub const ALL_SIGNALS_MASK: u32 = u32::MAX;

// =============================================================================
// REGISTRY
// =============================================================================

/// Initial registry capacity
/// [PERF] Avoids rehashing for the first handful of signal-aware threads
pub const INITIAL_THREAD_CAPACITY: usize = 16;
