/*!
 * Raw Signal API
 * Integer-level entry points for libc-style wrappers and trap dispatchers
 */

use super::controller::SignalController;
use super::traits::{SignalDelivery, SignalRegistry, SignalWait};
use super::types::{DeliveryTarget, Signal, SignalSet};
use crate::core::errors::SignalResult;
use crate::core::limits::NO_SIGNAL;
use crate::core::types::{RawSignal, RawThreadId, ThreadId};
use std::sync::Arc;
use tracing::warn;

/// Adapter translating raw handles, numbers, and masks into typed calls
///
/// Validation failures are reported instead of reaching the controller.
#[derive(Clone)]
pub struct RawSignalApi {
    controller: Arc<SignalController>,
}

impl RawSignalApi {
    pub fn new(controller: Arc<SignalController>) -> Self {
        Self { controller }
    }

    pub fn controller(&self) -> &Arc<SignalController> {
        &self.controller
    }

    pub fn initialize(&self, thread: RawThreadId) -> SignalResult<()> {
        let thread = Self::thread(thread)?;
        self.controller.initialize(thread);
        Ok(())
    }

    /// `thread == -1` delivers process-wide
    pub fn deliver(&self, thread: RawThreadId, signal: RawSignal) -> SignalResult<()> {
        let signal = Self::signal(signal)?;
        self.controller
            .deliver(DeliveryTarget::from_raw(thread), signal);
        Ok(())
    }

    pub fn suspend(&self, thread: RawThreadId, blocked: u32) -> SignalResult<RawSignal> {
        let thread = Self::thread(thread)?;
        let signal = self
            .controller
            .suspend(thread, SignalSet::from_bits(blocked));
        Ok(RawSignal::from(signal.number()))
    }

    /// Returns `-1` when nothing is deliverable
    pub fn next(&self, thread: RawThreadId, blocked: u32) -> SignalResult<RawSignal> {
        let thread = Self::thread(thread)?;
        Ok(self
            .controller
            .next(thread, SignalSet::from_bits(blocked))
            .map_or(NO_SIGNAL, |signal| RawSignal::from(signal.number())))
    }

    pub fn pending(&self, thread: RawThreadId) -> SignalResult<u32> {
        let thread = Self::thread(thread)?;
        Ok(self.controller.pending(thread).bits())
    }

    fn thread(raw: RawThreadId) -> SignalResult<ThreadId> {
        ThreadId::new(raw).inspect_err(|e| warn!(error = %e, "Rejected raw thread id"))
    }

    fn signal(raw: RawSignal) -> SignalResult<Signal> {
        Signal::new(i64::from(raw)).inspect_err(|e| warn!(error = %e, "Rejected raw signal"))
    }
}
