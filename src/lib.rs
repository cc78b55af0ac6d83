/*!
 * Signal Delivery Library
 * In-process signal bookkeeping and delivery for threads without native signals
 */

pub mod core;
pub mod monitoring;
pub mod signals;

// Re-exports
pub use crate::core::errors::{SignalError, SignalResult};
pub use crate::core::types::{RawSignal, RawThreadId, ThreadId, BROADCAST_THREAD};
pub use monitoring::init_tracing;
pub use signals::{
    DeliveryTarget, PendingScope, RawSignalApi, Signal, SignalConfig, SignalController,
    SignalDelivery, SignalRegistry, SignalSet, SignalStats, SignalSubsystem, SignalWait,
    ThreadSignalSnapshot,
};
