//! Conversion helpers between `ParseOutcome` and core `Result` types.
//!
//! These adapters make it straightforward to bolt a parsing engine that
//! reports plain `Result`s onto the outcome combinators, or to flatten an
//! outcome back into a `Result` when handing it to code that fails fast on
//! the first diagnostic.
//!
//! # Examples
//!
//! ```
//! use parse_rail::convert::*;
//! use parse_rail::ParseOutcome;
//!
//! let result: Result<i32, &str> = Ok(42);
//! let outcome = result_to_outcome(result);
//! assert!(outcome.is_success());
//!
//! let failed = ParseOutcome::<i32, &str>::failure("unknown option --x");
//! assert_eq!(outcome_to_result(failed), Err("unknown option --x"));
//! ```

use crate::outcome::{ErrorVec, ParseOutcome};

/// Converts a `ParseOutcome` to a `Result`, taking the first diagnostic if
/// the parse failed.
///
/// # Panics
///
/// Panics if the `Failure` variant contains no diagnostics (a violation of
/// the parsing engine's contract).
///
/// # Examples
///
/// ```
/// use parse_rail::convert::outcome_to_result;
/// use parse_rail::ParseOutcome;
///
/// let ok = ParseOutcome::<i32, &str>::success(42);
/// assert_eq!(outcome_to_result(ok), Ok(42));
///
/// let bad = ParseOutcome::<i32, &str>::failure_many(["first", "second"]);
/// assert_eq!(outcome_to_result(bad), Err("first"));
/// ```
#[inline]
pub fn outcome_to_result<T, E>(outcome: ParseOutcome<T, E>) -> Result<T, E> {
    match outcome {
        ParseOutcome::Success(value) => Ok(value),
        ParseOutcome::Failure(errors) => {
            let error = errors
                .into_iter()
                .next()
                .expect("ParseOutcome::Failure must contain at least one diagnostic");
            Err(error)
        }
    }
}

/// Converts a `Result` to a `ParseOutcome` with a singleton diagnostic
/// sequence on failure.
///
/// # Examples
///
/// ```
/// use parse_rail::convert::result_to_outcome;
///
/// let outcome = result_to_outcome(Err::<i32, _>("bad value"));
/// assert_eq!(outcome.errors(), ["bad value"]);
/// ```
#[inline]
pub fn result_to_outcome<T, E>(result: Result<T, E>) -> ParseOutcome<T, E> {
    ParseOutcome::from_result(result)
}

impl<T, E> From<Result<T, E>> for ParseOutcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        Self::from_result(result)
    }
}

impl<T, E> From<ParseOutcome<T, E>> for Result<T, ErrorVec<E>> {
    #[inline]
    fn from(outcome: ParseOutcome<T, E>) -> Self {
        outcome.to_result()
    }
}
