//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `parse_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Reacting to an outcome without branching
//!
//! ```
//! use parse_rail::ParseOutcome;
//!
//! let outcome: ParseOutcome<u32, &str> = ParseOutcome::success(42);
//!
//! outcome
//!     .on_success(|port| assert_eq!(*port, 42))
//!     .on_failure(|_| unreachable!("success outcome"));
//! ```
//!
//! ## Folding into an exit code
//!
//! ```
//! use parse_rail::ParseOutcome;
//!
//! let outcome: ParseOutcome<u32, &str> = ParseOutcome::failure("unknown option --x");
//! let code = outcome.fold(|_| 0, |errors| errors.len() as i32);
//! assert_eq!(code, 1);
//! ```
//!
//! ## Dispatching on a verb (subcommand) payload
//!
//! ```
//! use parse_rail::{ParseOutcome, Verb2};
//!
//! struct AddOptions { all: bool }
//! struct CommitOptions { message: String }
//!
//! let outcome: ParseOutcome<Verb2<AddOptions, CommitOptions>, &str> =
//!     ParseOutcome::success(Verb2::Second(CommitOptions { message: "x".into() }));
//!
//! let summary = outcome.fold_verb2(
//!     |add| format!("add --all={}", add.all),
//!     |commit| format!("commit -m {}", commit.message),
//!     |errors| format!("{} error(s)", errors.len()),
//! );
//! assert_eq!(summary, "commit -m x");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

/// Conversions between ParseOutcome and core Result/Option types
pub mod convert;
/// Ergonomic macros for constructing outcomes
pub mod macros;
/// Core ParseOutcome type and its combinator set
pub mod outcome;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Verb (subcommand) unions and multi-command dispatch
pub mod verb;

/// Tracing integration - outcome event emission (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

// Re-export common types at root, but encourage using the prelude
// for application code.
pub use convert::*;
pub use outcome::{ErrorVec, ParseOutcome};
pub use verb::{Verb2, Verb3, VerbUnion};

#[cfg(feature = "tracing")]
pub use tracing_ext::OutcomeTraceExt;
