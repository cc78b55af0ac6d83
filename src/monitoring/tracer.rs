/*!
 * Structured Tracing
 * Subscriber setup and wait spans using the tracing crate
 */

use crate::core::types::ThreadId;
use crate::signals::types::Signal;
use std::time::Instant;
use tracing::{debug, span, Level};
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Environment variable enabling JSON output
pub const TRACE_JSON_ENV: &str = "SIGNAL_TRACE_JSON";

/// Initialize structured tracing
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
/// - SIGNAL_TRACE_JSON: Enable JSON output (default: false)
///
/// Returns false if a global subscriber was already installed.
pub fn init_tracing() -> bool {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let use_json = std::env::var(TRACE_JSON_ENV)
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    if use_json {
        // JSON output for production/parsing
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_thread_names(true)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .try_init()
            .is_ok()
    } else {
        // Human-readable output for development
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_thread_names(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .compact(),
            )
            .try_init()
            .is_ok()
    }
}

/// Span covering one blocking wait, from entry to the returned signal
pub struct WaitSpan {
    span: tracing::Span,
    start: Instant,
}

impl WaitSpan {
    pub fn new(thread: ThreadId) -> Self {
        let span = span!(
            Level::DEBUG,
            "signal_wait",
            thread = %thread,
            signal = tracing::field::Empty,
            duration_us = tracing::field::Empty,
        );
        Self {
            span,
            start: Instant::now(),
        }
    }

    /// Enter the span for the duration of the wait
    pub fn enter(&self) -> tracing::span::Entered<'_> {
        self.span.enter()
    }

    /// Record the signal the wait returned
    pub fn record_signal(&self, signal: Signal) {
        self.span.record("signal", tracing::field::display(signal));
    }
}

impl Drop for WaitSpan {
    fn drop(&mut self) {
        let duration = self.start.elapsed();
        let _entered = self.span.enter();
        self.span.record("duration_us", duration.as_micros() as u64);
        debug!(duration_us = duration.as_micros() as u64, "signal wait completed");
    }
}

/// Helper to create a wait span
#[inline]
pub fn span_wait(thread: ThreadId) -> WaitSpan {
    WaitSpan::new(thread)
}
