/*!
 * Signal Controller
 * Pending-set bookkeeping and blocking delivery for signal-aware threads
 */

use super::atomic_stats::AtomicSignalStats;
use super::config::{PendingScope, SignalConfig};
use super::internal_types::{ControllerState, ThreadSignalState};
use super::traits::{SignalDelivery, SignalRegistry, SignalWait};
use super::types::{DeliveryTarget, Signal, SignalSet, SignalStats, ThreadSignalSnapshot};
use crate::core::types::ThreadId;
use crate::monitoring::span_wait;
use parking_lot::{Condvar, Mutex};
use tracing::{debug, info, trace};

/// Signal controller
///
/// One lock guards the registry and the process-wide pending set. The only
/// suspension point is the condition variable inside `suspend`, and every
/// delivery wakes all parked threads; each re-checks its own mask.
///
/// Share between threads with `Arc`.
pub struct SignalController {
    state: Mutex<ControllerState>,
    wakeup: Condvar,
    config: SignalConfig,
    stats: AtomicSignalStats,
}

impl SignalController {
    pub fn new(config: SignalConfig) -> Self {
        info!(pending_scope = ?config.pending_scope, "Signal controller initialized");
        Self {
            state: Mutex::new(ControllerState::new()),
            wakeup: Condvar::new(),
            config,
            stats: AtomicSignalStats::new(),
        }
    }

    pub fn config(&self) -> &SignalConfig {
        &self.config
    }

    /// Process-wide pending set (non-consuming)
    pub fn process_pending(&self) -> SignalSet {
        self.state.lock().process_pending
    }

    /// Copy of a thread's state; does not register the thread
    pub fn snapshot(&self, thread: ThreadId) -> Option<ThreadSignalSnapshot> {
        self.state
            .lock()
            .threads
            .get(&thread)
            .map(ThreadSignalState::snapshot)
    }

    pub fn stats(&self) -> SignalStats {
        self.stats.snapshot()
    }

    /// Deliver to a thread handle or `DeliveryTarget::Broadcast`
    #[inline]
    pub fn deliver(&self, target: impl Into<DeliveryTarget>, signal: Signal) {
        SignalDelivery::deliver(self, target.into(), signal);
    }

    /// Look up or lazily create a thread's state
    fn ensure_thread<'a>(
        &self,
        state: &'a mut ControllerState,
        thread: ThreadId,
    ) -> &'a mut ThreadSignalState {
        let (entry, created) = state.thread_mut(thread);
        if created {
            self.stats.inc_registered();
            debug!(thread = %thread, "Registered thread signal state");
        }
        entry
    }
}

impl Default for SignalController {
    fn default() -> Self {
        Self::new(SignalConfig::default())
    }
}

impl SignalDelivery for SignalController {
    fn deliver(&self, target: DeliveryTarget, signal: Signal) {
        let mut state = self.state.lock();

        match target {
            DeliveryTarget::Broadcast => {
                state.process_pending.insert(signal);
                self.stats.inc_delivered_broadcast();
            }
            DeliveryTarget::Thread(thread) => {
                self.ensure_thread(&mut state, thread).pending.insert(signal);
                self.stats.inc_delivered_thread();
            }
        }
        drop(state);

        debug!(destination = %target, signal = %signal, "Delivered signal");
        self.wakeup.notify_all();
    }
}

impl SignalWait for SignalController {
    fn suspend(&self, thread: ThreadId, blocked: SignalSet) -> Signal {
        self.stats.inc_suspends();
        let wait_span = span_wait(thread);
        let _entered = wait_span.enter();
        let mut state = self.state.lock();

        loop {
            // The entry may have been deregistered while parked
            self.ensure_thread(&mut state, thread);

            if let Some(signal) = state.take_next(thread, blocked) {
                self.stats.inc_consumed();
                wait_span.record_signal(signal);
                debug!(thread = %thread, signal = %signal, "Suspend returned signal");
                return signal;
            }

            self.stats.inc_wait_cycles();
            trace!(thread = %thread, blocked = %blocked, "No deliverable signal, parking");
            self.wakeup.wait(&mut state);
        }
    }

    fn next(&self, thread: ThreadId, blocked: SignalSet) -> Option<Signal> {
        let mut state = self.state.lock();
        self.ensure_thread(&mut state, thread);

        let taken = state.take_next(thread, blocked);
        drop(state);

        match taken {
            Some(signal) => {
                self.stats.inc_consumed();
                debug!(thread = %thread, signal = %signal, "Polled signal");
            }
            None => self.stats.inc_polls_empty(),
        }
        taken
    }

    fn pending(&self, thread: ThreadId) -> SignalSet {
        let state = self.state.lock();
        let local = state
            .threads
            .get(&thread)
            .map(|entry| entry.pending)
            .unwrap_or_default();

        match self.config.pending_scope {
            PendingScope::Thread => local,
            PendingScope::ThreadAndProcess => local | state.process_pending,
        }
    }
}

impl SignalRegistry for SignalController {
    fn initialize(&self, thread: ThreadId) {
        let mut state = self.state.lock();
        self.ensure_thread(&mut state, thread);
    }

    fn deregister(&self, thread: ThreadId) -> bool {
        let removed = self.state.lock().threads.remove(&thread);

        match removed {
            Some(entry) => {
                self.stats.inc_deregistered();
                info!(
                    thread = %thread,
                    dropped_pending = %entry.pending,
                    "Deregistered thread signal state"
                );
                true
            }
            None => false,
        }
    }

    fn is_registered(&self, thread: ThreadId) -> bool {
        self.state.lock().threads.contains_key(&thread)
    }

    fn thread_count(&self) -> usize {
        self.state.lock().threads.len()
    }
}
