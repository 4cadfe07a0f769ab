//! The parse outcome type and its combinators.
//!
//! This module provides [`ParseOutcome`], the two-variant result produced by
//! an argument-parsing engine: either a fully constructed options value, or
//! the ordered collection of diagnostics the parse produced. The combinators
//! let callers react to either variant without testing it by hand.
//!
//! # Key Components
//!
//! - [`ParseOutcome`] - Core type holding a parsed value or accumulated errors
//! - Iterator adapters for traversing the value and the error sequence
//! - Effect hooks ([`ParseOutcome::on_success`], [`ParseOutcome::on_failure`])
//!   and the total fold ([`ParseOutcome::fold`])
//!
//! # Examples
//!
//! ```
//! use parse_rail::outcome::ParseOutcome;
//!
//! let parsed: ParseOutcome<i32, String> = ParseOutcome::Success(42);
//! assert!(parsed.is_success());
//!
//! let failed: ParseOutcome<i32, &str> = ParseOutcome::failure_many(["err1", "err2"]);
//! assert_eq!(failed.iter_errors().count(), 2);
//! ```
pub mod core;
pub mod iter;

pub use self::core::*;
pub use self::iter::*;
