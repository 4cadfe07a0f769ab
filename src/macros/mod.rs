//! Ergonomic macros for constructing [`ParseOutcome`](crate::ParseOutcome) values.
//!
//! - [`macro@crate::outcome`] - Wraps a `Result`-producing expression into a
//!   `ParseOutcome`, turning the error side into a singleton diagnostic
//!   sequence.
//! - [`macro@crate::failures`] - Builds a `Failure` outcome from a list of
//!   diagnostics, preserving the listed order.
//!
//! # Examples
//!
//! ```
//! use parse_rail::{failures, outcome, ParseOutcome};
//!
//! let o = outcome!(Ok::<_, &str>(42));
//! assert!(o.is_success());
//!
//! let o: ParseOutcome<(), &str> = failures!["unknown option --x", "missing value"];
//! assert_eq!(o.errors().len(), 2);
//! ```

/// Wraps a `Result`-producing expression or block into a
/// [`ParseOutcome`](crate::ParseOutcome).
///
/// # Syntax
///
/// - `outcome!(expr)` - Wraps a single `Result`-producing expression
/// - `outcome!({ ... })` - Wraps a block that produces a `Result`
///
/// # Examples
///
/// ```
/// use parse_rail::outcome;
///
/// let o = outcome!("8080".parse::<u16>());
/// assert!(o.is_success());
///
/// let o = outcome!({
///     let raw = "not-a-port";
///     raw.parse::<u16>()
/// });
/// assert!(o.is_failure());
/// ```
#[macro_export]
macro_rules! outcome {
    ($expr:expr $(,)?) => {
        $crate::outcome::ParseOutcome::from_result($expr)
    };
}

/// Builds a `Failure` outcome from the listed diagnostics, in order.
///
/// # Examples
///
/// ```
/// use parse_rail::{failures, ParseOutcome};
///
/// let o: ParseOutcome<(), &str> = failures!["first", "second"];
/// assert_eq!(o.errors(), ["first", "second"]);
/// ```
#[macro_export]
macro_rules! failures {
    ($($error:expr),+ $(,)?) => {
        $crate::outcome::ParseOutcome::failure_many([$($error),+])
    };
}
