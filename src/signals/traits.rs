/*!
 * Signal Traits
 * Delivery, wait, and registry abstractions
 */

use super::types::{DeliveryTarget, Signal, SignalSet};
use crate::core::types::ThreadId;

/// Signal delivery interface (OS-trap dispatcher side)
pub trait SignalDelivery: Send + Sync {
    /// Record `signal` as pending for a thread or process-wide, then wake all waiters
    fn deliver(&self, target: DeliveryTarget, signal: Signal);
}

/// Signal consumption interface (sigsuspend/sigpending wrapper side)
pub trait SignalWait: Send + Sync {
    /// Block until a signal outside `blocked` is pending, consume and return it
    fn suspend(&self, thread: ThreadId, blocked: SignalSet) -> Signal;

    /// Consume a signal outside `blocked` if one is pending, without blocking
    fn next(&self, thread: ThreadId, blocked: SignalSet) -> Option<Signal>;

    /// Pending signals for a thread (non-consuming)
    fn pending(&self, thread: ThreadId) -> SignalSet;
}

/// Per-thread state registry
pub trait SignalRegistry: Send + Sync {
    /// Ensure signal state exists for a thread (idempotent)
    fn initialize(&self, thread: ThreadId);

    /// Drop a thread's signal state on thread exit
    fn deregister(&self, thread: ThreadId) -> bool;

    /// Check whether a thread has signal state
    fn is_registered(&self, thread: ThreadId) -> bool;

    /// Number of threads with signal state
    fn thread_count(&self) -> usize;
}

/// Combined signal subsystem trait
pub trait SignalSubsystem: SignalDelivery + SignalWait + SignalRegistry + Send + Sync {}

/// Implement SignalSubsystem for types that implement all required traits
impl<T> SignalSubsystem for T where T: SignalDelivery + SignalWait + SignalRegistry + Send + Sync {}
