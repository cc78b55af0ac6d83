/*!
 * Lock-Free Signal Statistics
 * Atomic counters updated alongside the controller's critical sections
 */

use super::types::SignalStats;
use std::sync::atomic::{AtomicU64, Ordering};

/// Atomic signal statistics
///
/// # Performance
/// - Cache-line aligned to prevent false sharing with the controller lock
/// - All operations use relaxed ordering; snapshots are advisory
#[repr(C, align(64))]
pub(crate) struct AtomicSignalStats {
    signals_delivered_thread: AtomicU64,
    signals_delivered_broadcast: AtomicU64,
    signals_consumed: AtomicU64,
    polls_empty: AtomicU64,
    suspends: AtomicU64,
    wait_cycles: AtomicU64,
    threads_registered: AtomicU64,
    threads_deregistered: AtomicU64,
}

impl AtomicSignalStats {
    #[inline]
    pub const fn new() -> Self {
        Self {
            signals_delivered_thread: AtomicU64::new(0),
            signals_delivered_broadcast: AtomicU64::new(0),
            signals_consumed: AtomicU64::new(0),
            polls_empty: AtomicU64::new(0),
            suspends: AtomicU64::new(0),
            wait_cycles: AtomicU64::new(0),
            threads_registered: AtomicU64::new(0),
            threads_deregistered: AtomicU64::new(0),
        }
    }

    /// Hot path - called on every targeted delivery
    #[inline(always)]
    pub fn inc_delivered_thread(&self) {
        self.signals_delivered_thread.fetch_add(1, Ordering::Relaxed);
    }

    /// Hot path - called on every process-wide delivery
    #[inline(always)]
    pub fn inc_delivered_broadcast(&self) {
        self.signals_delivered_broadcast.fetch_add(1, Ordering::Relaxed);
    }

    #[inline(always)]
    pub fn inc_consumed(&self) {
        self.signals_consumed.fetch_add(1, Ordering::Relaxed);
    }

    #[inline(always)]
    pub fn inc_polls_empty(&self) {
        self.polls_empty.fetch_add(1, Ordering::Relaxed);
    }

    #[inline(always)]
    pub fn inc_suspends(&self) {
        self.suspends.fetch_add(1, Ordering::Relaxed);
    }

    /// Counts each park on the condition variable, spurious wakeups included
    #[inline(always)]
    pub fn inc_wait_cycles(&self) {
        self.wait_cycles.fetch_add(1, Ordering::Relaxed);
    }

    #[inline(always)]
    pub fn inc_registered(&self) {
        self.threads_registered.fetch_add(1, Ordering::Relaxed);
    }

    #[inline(always)]
    pub fn inc_deregistered(&self) {
        self.threads_deregistered.fetch_add(1, Ordering::Relaxed);
    }

    /// Get snapshot of current stats (no locks required)
    ///
    /// # Note
    /// Values may not be perfectly consistent with each other due to concurrent updates,
    /// but each individual value is accurate. This is acceptable for monitoring.
    #[inline]
    pub fn snapshot(&self) -> SignalStats {
        SignalStats {
            signals_delivered_thread: self.signals_delivered_thread.load(Ordering::Relaxed),
            signals_delivered_broadcast: self.signals_delivered_broadcast.load(Ordering::Relaxed),
            signals_consumed: self.signals_consumed.load(Ordering::Relaxed),
            polls_empty: self.polls_empty.load(Ordering::Relaxed),
            suspends: self.suspends.load(Ordering::Relaxed),
            wait_cycles: self.wait_cycles.load(Ordering::Relaxed),
            threads_registered: self.threads_registered.load(Ordering::Relaxed),
            threads_deregistered: self.threads_deregistered.load(Ordering::Relaxed),
        }
    }
}

impl Default for AtomicSignalStats {
    fn default() -> Self {
        Self::new()
    }
}
