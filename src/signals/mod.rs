/*!
 * Signals Module
 * POSIX-style pending sets, masks, and wait/poll for signal-aware threads
 */

mod atomic_stats;
pub mod config;
mod controller;
mod internal_types;
pub mod raw;
mod selection;
pub mod traits;
pub mod types;

// Re-export public API
pub use config::{PendingScope, SignalConfig, PENDING_SCOPE_ENV};
pub use controller::SignalController;
pub use raw::RawSignalApi;
pub use traits::*;
pub use types::{DeliveryTarget, Signal, SignalSet, SignalStats, ThreadSignalSnapshot};
