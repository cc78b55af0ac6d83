/*!
 * Signal Types
 * Signal numbers, pending sets, and delivery targets
 */

use crate::core::errors::{SignalError, SignalResult};
use crate::core::limits::{ALL_SIGNALS_MASK, MAX_SIGNAL, SIGNAL_COUNT};
use crate::core::types::{RawThreadId, ThreadId, BROADCAST_THREAD};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

/// Validated signal number in `0..=31`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Signal(u8);

impl Signal {
    /// Hangup detected on controlling terminal
    pub const SIGHUP: Signal = Signal(1);
    /// Interrupt from keyboard
    pub const SIGINT: Signal = Signal(2);
    /// Quit from keyboard
    pub const SIGQUIT: Signal = Signal(3);
    /// Illegal instruction
    pub const SIGILL: Signal = Signal(4);
    /// Trace/breakpoint trap
    pub const SIGTRAP: Signal = Signal(5);
    /// Abort signal
    pub const SIGABRT: Signal = Signal(6);
    /// Bus error
    pub const SIGBUS: Signal = Signal(7);
    /// Floating-point exception
    pub const SIGFPE: Signal = Signal(8);
    /// Kill signal
    pub const SIGKILL: Signal = Signal(9);
    /// User-defined signal 1
    pub const SIGUSR1: Signal = Signal(10);
    /// Invalid memory reference
    pub const SIGSEGV: Signal = Signal(11);
    /// User-defined signal 2
    pub const SIGUSR2: Signal = Signal(12);
    /// Broken pipe
    pub const SIGPIPE: Signal = Signal(13);
    /// Timer signal
    pub const SIGALRM: Signal = Signal(14);
    /// Termination signal
    pub const SIGTERM: Signal = Signal(15);
    /// Stack fault on coprocessor
    pub const SIGSTKFLT: Signal = Signal(16);
    /// Child stopped or terminated
    pub const SIGCHLD: Signal = Signal(17);
    /// Continue if stopped
    pub const SIGCONT: Signal = Signal(18);
    /// Stop process
    pub const SIGSTOP: Signal = Signal(19);
    /// Stop typed at terminal
    pub const SIGTSTP: Signal = Signal(20);
    /// Terminal input for background process
    pub const SIGTTIN: Signal = Signal(21);
    /// Terminal output for background process
    pub const SIGTTOU: Signal = Signal(22);
    /// Urgent condition on socket
    pub const SIGURG: Signal = Signal(23);
    /// CPU time limit exceeded
    pub const SIGXCPU: Signal = Signal(24);
    /// File size limit exceeded
    pub const SIGXFSZ: Signal = Signal(25);
    /// Virtual alarm clock
    pub const SIGVTALRM: Signal = Signal(26);
    /// Profiling timer expired
    pub const SIGPROF: Signal = Signal(27);
    /// Window resize signal
    pub const SIGWINCH: Signal = Signal(28);
    /// I/O now possible
    pub const SIGIO: Signal = Signal(29);
    /// Power failure
    pub const SIGPWR: Signal = Signal(30);
    /// Bad system call
    pub const SIGSYS: Signal = Signal(31);

    /// Convert from signal number
    pub fn new(n: i64) -> SignalResult<Self> {
        if (0..=i64::from(MAX_SIGNAL)).contains(&n) {
            Ok(Signal(n as u8))
        } else {
            Err(SignalError::InvalidSignal(n))
        }
    }

    /// Get signal number
    #[inline]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Single-bit mask for this signal
    #[inline]
    pub const fn bit(self) -> u32 {
        1u32 << self.0
    }

    /// Conventional name, if the number has one
    pub fn name(self) -> Option<&'static str> {
        const NAMES: [&str; SIGNAL_COUNT as usize] = [
            "", "SIGHUP", "SIGINT", "SIGQUIT", "SIGILL", "SIGTRAP", "SIGABRT", "SIGBUS",
            "SIGFPE", "SIGKILL", "SIGUSR1", "SIGSEGV", "SIGUSR2", "SIGPIPE", "SIGALRM",
            "SIGTERM", "SIGSTKFLT", "SIGCHLD", "SIGCONT", "SIGSTOP", "SIGTSTP", "SIGTTIN",
            "SIGTTOU", "SIGURG", "SIGXCPU", "SIGXFSZ", "SIGVTALRM", "SIGPROF", "SIGWINCH",
            "SIGIO", "SIGPWR", "SIGSYS",
        ];
        match NAMES[self.0 as usize] {
            "" => None,
            name => Some(name),
        }
    }

    /// Every valid signal, ascending
    pub fn all() -> impl Iterator<Item = Signal> {
        (0..SIGNAL_COUNT).map(Signal)
    }
}

impl TryFrom<u8> for Signal {
    type Error = SignalError;

    fn try_from(n: u8) -> SignalResult<Self> {
        Self::new(i64::from(n))
    }
}

impl From<Signal> for u8 {
    fn from(signal: Signal) -> Self {
        signal.0
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{}({})", name, self.0),
            None => write!(f, "SIG{}", self.0),
        }
    }
}

/// 32-bit pending/blocked set; bit `i` stands for signal `i`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignalSet(u32);

impl SignalSet {
    pub const EMPTY: SignalSet = SignalSet(0);
    pub const ALL: SignalSet = SignalSet(ALL_SIGNALS_MASK);

    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Set containing only `signal`
    #[inline]
    pub const fn single(signal: Signal) -> Self {
        Self(signal.bit())
    }

    /// Every signal except `signal`
    #[inline]
    pub const fn all_except(signal: Signal) -> Self {
        Self(!signal.bit())
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    pub const fn contains(self, signal: Signal) -> bool {
        self.0 & signal.bit() != 0
    }

    #[inline]
    pub fn insert(&mut self, signal: Signal) {
        self.0 |= signal.bit();
    }

    /// Clear `signal`, returning whether it was set
    #[inline]
    pub fn remove(&mut self, signal: Signal) -> bool {
        let was_set = self.contains(signal);
        self.0 &= !signal.bit();
        was_set
    }

    /// Members of `self` not in `other`
    #[inline]
    pub const fn without(self, other: SignalSet) -> Self {
        Self(self.0 & !other.0)
    }

    /// Members in ascending signal order
    pub fn iter(self) -> impl Iterator<Item = Signal> {
        Signal::all().filter(move |signal| self.contains(*signal))
    }
}

impl From<Signal> for SignalSet {
    fn from(signal: Signal) -> Self {
        Self::single(signal)
    }
}

impl FromIterator<Signal> for SignalSet {
    fn from_iter<I: IntoIterator<Item = Signal>>(iter: I) -> Self {
        let mut set = SignalSet::EMPTY;
        for signal in iter {
            set.insert(signal);
        }
        set
    }
}

impl BitOr for SignalSet {
    type Output = SignalSet;

    fn bitor(self, rhs: SignalSet) -> SignalSet {
        SignalSet(self.0 | rhs.0)
    }
}

impl BitOrAssign for SignalSet {
    fn bitor_assign(&mut self, rhs: SignalSet) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for SignalSet {
    type Output = SignalSet;

    fn bitand(self, rhs: SignalSet) -> SignalSet {
        SignalSet(self.0 & rhs.0)
    }
}

impl BitAndAssign for SignalSet {
    fn bitand_assign(&mut self, rhs: SignalSet) {
        self.0 &= rhs.0;
    }
}

impl Not for SignalSet {
    type Output = SignalSet;

    fn not(self) -> SignalSet {
        SignalSet(!self.0)
    }
}

impl fmt::Display for SignalSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

/// Where a delivered signal is recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeliveryTarget {
    /// Pending on one thread only
    Thread(ThreadId),
    /// Pending process-wide; consumable by any thread
    Broadcast,
}

impl DeliveryTarget {
    /// Map a raw handle, treating the sentinel as broadcast
    pub fn from_raw(raw: RawThreadId) -> Self {
        match ThreadId::new(raw) {
            Ok(thread) => DeliveryTarget::Thread(thread),
            Err(_) => DeliveryTarget::Broadcast,
        }
    }

    pub fn raw(self) -> RawThreadId {
        match self {
            DeliveryTarget::Thread(thread) => thread.raw(),
            DeliveryTarget::Broadcast => BROADCAST_THREAD,
        }
    }
}

impl From<ThreadId> for DeliveryTarget {
    fn from(thread: ThreadId) -> Self {
        DeliveryTarget::Thread(thread)
    }
}

impl fmt::Display for DeliveryTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeliveryTarget::Thread(thread) => thread.fmt(f),
            DeliveryTarget::Broadcast => f.write_str("broadcast"),
        }
    }
}

/// Copy of one thread's signal state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadSignalSnapshot {
    pub thread: ThreadId,
    pub pending: SignalSet,
    pub cursor: u8,
}

/// Signal statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalStats {
    pub signals_delivered_thread: u64,
    pub signals_delivered_broadcast: u64,
    pub signals_consumed: u64,
    pub polls_empty: u64,
    pub suspends: u64,
    pub wait_cycles: u64,
    pub threads_registered: u64,
    pub threads_deregistered: u64,
}
