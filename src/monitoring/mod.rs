/*!
 * Monitoring
 * Structured tracing setup
 */

mod tracer;

pub use tracer::{init_tracing, span_wait, WaitSpan, TRACE_JSON_ENV};
