//! Verb (subcommand) unions and multi-command dispatch.
//!
//! An argument parser configured with several subcommands produces a success
//! payload that can be any one of several concrete options types. This module
//! models that payload as a closed sum type ([`Verb2`], [`Verb3`]) constructed
//! once by the parsing engine, so that [`fold_verb2`](crate::ParseOutcome::fold_verb2)
//! and [`fold_verb3`](crate::ParseOutcome::fold_verb3) dispatch by exhaustive
//! pattern match: a success payload whose type the caller forgot to handle is
//! unrepresentable rather than a runtime fault.
//!
//! The payload type doubles as the discriminant. [`VerbUnion::get`] recovers
//! the active payload by exact runtime type identity, which backs the
//! silently-non-matching [`on_verb`](crate::ParseOutcome::on_verb) hook: a
//! success of a *sibling* verb type is a no-op, not an error.
//!
//! # Examples
//!
//! ```
//! use parse_rail::{ParseOutcome, Verb2};
//!
//! #[derive(Debug, PartialEq)]
//! struct AddOptions { all: bool }
//! #[derive(Debug, PartialEq)]
//! struct CommitOptions { message: String }
//!
//! let outcome: ParseOutcome<Verb2<AddOptions, CommitOptions>, &str> =
//!     ParseOutcome::success(Verb2::Second(CommitOptions { message: "x".into() }));
//!
//! // Fires only for the commit verb; the add handler never runs.
//! outcome.on_verb(|commit: &CommitOptions| assert_eq!(commit.message, "x"));
//! outcome.on_verb(|_add: &AddOptions| unreachable!("sibling verb"));
//! ```
use core::any::Any;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::outcome::{ErrorVec, ParseOutcome};

/// A closed union over the concrete verb payload types a parser is
/// configured with.
///
/// Implementors expose the active payload by exact runtime type identity.
/// When two variants carry the same type, the earlier-declared variant's
/// payload is the one `get` observes, which is irrelevant in practice: a
/// well-formed parser configuration uses mutually distinct verb types.
pub trait VerbUnion {
    /// Borrows the active payload if its runtime type is exactly `T`.
    fn get<T: 'static>(&self) -> Option<&T>;
}

/// Success payload for a parser configured with two verbs.
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub enum Verb2<T1, T2> {
    First(T1),
    Second(T2),
}

/// Success payload for a parser configured with three verbs.
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub enum Verb3<T1, T2, T3> {
    First(T1),
    Second(T2),
    Third(T3),
}

impl<T1: 'static, T2: 'static> VerbUnion for Verb2<T1, T2> {
    #[inline]
    fn get<T: 'static>(&self) -> Option<&T> {
        match self {
            Verb2::First(v) => (v as &dyn Any).downcast_ref(),
            Verb2::Second(v) => (v as &dyn Any).downcast_ref(),
        }
    }
}

impl<T1: 'static, T2: 'static, T3: 'static> VerbUnion for Verb3<T1, T2, T3> {
    #[inline]
    fn get<T: 'static>(&self) -> Option<&T> {
        match self {
            Verb3::First(v) => (v as &dyn Any).downcast_ref(),
            Verb3::Second(v) => (v as &dyn Any).downcast_ref(),
            Verb3::Third(v) => (v as &dyn Any).downcast_ref(),
        }
    }
}

impl<V, E> ParseOutcome<V, E>
where
    V: VerbUnion,
{
    /// Invokes `effect` iff the outcome is a success whose active verb
    /// payload has runtime type exactly `T`.
    ///
    /// A success carrying a sibling verb type is a silent non-match, as is a
    /// failure; this hook never signals an error. Returns the outcome
    /// unchanged for chaining one handler per verb.
    ///
    /// # Examples
    ///
    /// ```
    /// use parse_rail::{ParseOutcome, Verb2};
    ///
    /// struct AddOptions;
    /// struct CommitOptions;
    ///
    /// let o: ParseOutcome<Verb2<AddOptions, CommitOptions>, &str> =
    ///     ParseOutcome::success(Verb2::First(AddOptions));
    ///
    /// let mut fired = false;
    /// o.on_verb(|_: &AddOptions| fired = true);
    /// assert!(fired);
    /// ```
    #[inline]
    pub fn on_verb<T, F>(&self, effect: F) -> &Self
    where
        T: 'static,
        F: FnOnce(&T),
    {
        if let Some(payload) = self.value().and_then(|verb| verb.get::<T>()) {
            effect(payload);
        }
        self
    }
}

impl<T1, T2, E> ParseOutcome<Verb2<T1, T2>, E> {
    /// Reduces a two-verb outcome to a single value of type `R`.
    ///
    /// A success dispatches to whichever of `f1`/`f2` matches the verb the
    /// parse actually produced; a failure goes to `g` with the ordered
    /// diagnostics and performs no verb dispatch. The match over the verb
    /// union is exhaustive, so every configured verb has a handler by
    /// construction.
    ///
    /// # Examples
    ///
    /// ```
    /// use parse_rail::{ParseOutcome, Verb2};
    ///
    /// let o: ParseOutcome<Verb2<bool, u32>, &str> =
    ///     ParseOutcome::success(Verb2::Second(8080));
    /// let text = o.fold_verb2(
    ///     |flag| format!("flag {flag}"),
    ///     |port| format!("port {port}"),
    ///     |errors| format!("{} error(s)", errors.len()),
    /// );
    /// assert_eq!(text, "port 8080");
    /// ```
    #[inline]
    pub fn fold_verb2<R, F1, F2, G>(self, f1: F1, f2: F2, g: G) -> R
    where
        F1: FnOnce(T1) -> R,
        F2: FnOnce(T2) -> R,
        G: FnOnce(ErrorVec<E>) -> R,
    {
        match self {
            ParseOutcome::Success(Verb2::First(v)) => f1(v),
            ParseOutcome::Success(Verb2::Second(v)) => f2(v),
            ParseOutcome::Failure(errors) => g(errors),
        }
    }
}

impl<T1, T2, T3, E> ParseOutcome<Verb3<T1, T2, T3>, E> {
    /// Reduces a three-verb outcome to a single value of type `R`.
    ///
    /// Same contract as [`fold_verb2`](ParseOutcome::fold_verb2), with one
    /// handler per configured verb.
    #[inline]
    pub fn fold_verb3<R, F1, F2, F3, G>(self, f1: F1, f2: F2, f3: F3, g: G) -> R
    where
        F1: FnOnce(T1) -> R,
        F2: FnOnce(T2) -> R,
        F3: FnOnce(T3) -> R,
        G: FnOnce(ErrorVec<E>) -> R,
    {
        match self {
            ParseOutcome::Success(Verb3::First(v)) => f1(v),
            ParseOutcome::Success(Verb3::Second(v)) => f2(v),
            ParseOutcome::Success(Verb3::Third(v)) => f3(v),
            ParseOutcome::Failure(errors) => g(errors),
        }
    }
}
