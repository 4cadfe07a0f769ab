//! Tracing integration for parse-rail.
//!
//! This module provides utilities for emitting `tracing` events as parse
//! outcomes flow through an application, without inspecting the opaque
//! diagnostics themselves: failure events carry the diagnostic *count*, not
//! their contents.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! parse-rail = { version = "0.3", features = ["tracing"] }
//! ```

use crate::outcome::ParseOutcome;

/// Extension trait that records a parse outcome as a tracing event.
///
/// # Example
///
/// ```rust,ignore
/// use parse_rail::tracing_ext::OutcomeTraceExt;
///
/// let outcome = engine.parse(args).traced("parse_args");
/// outcome.on_failure(|errors| print_usage(errors));
/// ```
pub trait OutcomeTraceExt: Sized {
    /// Emits a debug event for a success or a warn event (with the
    /// diagnostic count) for a failure, then returns the outcome unchanged.
    fn traced(self, op: &str) -> Self;
}

impl<T, E> OutcomeTraceExt for ParseOutcome<T, E> {
    fn traced(self, op: &str) -> Self {
        match &self {
            ParseOutcome::Success(_) => {
                tracing::debug!(op, "parse succeeded");
            }
            ParseOutcome::Failure(errors) => {
                tracing::warn!(op, error_count = errors.len(), "parse failed");
            }
        }
        self
    }
}
