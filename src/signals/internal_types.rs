/*!
 * Internal Signal Controller Types
 * State guarded by the controller lock
 */

use super::selection::{select, FairnessCursor};
use super::types::{Signal, SignalSet, ThreadSignalSnapshot};
use crate::core::limits::INITIAL_THREAD_CAPACITY;
use crate::core::types::ThreadId;
use ahash::RandomState;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Per-thread signal information
#[derive(Debug, Clone)]
pub(super) struct ThreadSignalState {
    pub thread: ThreadId,
    pub pending: SignalSet,
    pub cursor: FairnessCursor,
}

impl ThreadSignalState {
    pub fn new(thread: ThreadId) -> Self {
        Self {
            thread,
            pending: SignalSet::EMPTY,
            cursor: FairnessCursor::default(),
        }
    }

    pub fn snapshot(&self) -> ThreadSignalSnapshot {
        ThreadSignalSnapshot {
            thread: self.thread,
            pending: self.pending,
            cursor: self.cursor.position(),
        }
    }
}

/// Registry plus process-wide pending set
#[derive(Debug)]
pub(super) struct ControllerState {
    pub process_pending: SignalSet,
    pub threads: HashMap<ThreadId, ThreadSignalState, RandomState>,
}

impl ControllerState {
    pub fn new() -> Self {
        Self {
            process_pending: SignalSet::EMPTY,
            threads: HashMap::with_capacity_and_hasher(INITIAL_THREAD_CAPACITY, RandomState::new()),
        }
    }

    /// Look up a thread's state, creating it on first reference
    ///
    /// Returns the state and whether it was just created.
    pub fn thread_mut(&mut self, thread: ThreadId) -> (&mut ThreadSignalState, bool) {
        match self.threads.entry(thread) {
            Entry::Occupied(entry) => (entry.into_mut(), false),
            Entry::Vacant(entry) => (entry.insert(ThreadSignalState::new(thread)), true),
        }
    }

    /// Select, clear, and return one deliverable signal for `thread`
    ///
    /// The selected bit is cleared from both the thread's set and the
    /// process-wide set, whichever hold it.
    pub fn take_next(&mut self, thread: ThreadId, blocked: SignalSet) -> Option<Signal> {
        let process_pending = self.process_pending;
        let (state, _) = self.thread_mut(thread);
        let available = state.pending | process_pending;

        let signal = select(available, blocked, state.cursor)?;
        state.pending.remove(signal);
        state.cursor.advance_past(signal);
        self.process_pending.remove(signal);
        Some(signal)
    }
}
