//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the most commonly used items for quick
//! starts. Import everything with:
//!
//! ```
//! use parse_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`outcome!`], [`failures!`]
//! - **Types**: [`ParseOutcome`], [`ErrorVec`], [`Verb2`], [`Verb3`]
//! - **Traits**: [`VerbUnion`]
//!
//! # Examples
//!
//! ```
//! use parse_rail::prelude::*;
//!
//! fn report(outcome: &ParseOutcome<u16, String>) {
//!     outcome
//!         .on_success(|port| assert!(*port > 0))
//!         .on_failure(|errors| assert!(!errors.is_empty()));
//! }
//!
//! report(&outcome!("8080".parse::<u16>().map_err(|e| e.to_string())));
//! ```

// Macros
pub use crate::{failures, outcome};

// Core types
pub use crate::outcome::{ErrorVec, ParseOutcome};
pub use crate::verb::{Verb2, Verb3};

// Traits
pub use crate::verb::VerbUnion;

#[cfg(feature = "tracing")]
pub use crate::tracing_ext::OutcomeTraceExt;
