#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

/// SmallVec-backed collection holding the ordered parse diagnostics.
///
/// Uses inline storage for up to 4 elements to avoid heap allocations for
/// the handful of errors a typical failed parse produces. Detection order is
/// preserved end-to-end; no combinator in this crate reorders it.
pub type ErrorVec<E> = SmallVec<[E; 4]>;

/// The two-variant result of running an argument parser.
///
/// `ParseOutcome<T, E>` is produced once by the parsing engine and is
/// read-only from then on: the combinators here inspect it, trigger
/// caller-supplied effects, or fold it into a derived value. They never
/// mutate it.
///
/// Unlike `Result`, the failure side always carries the *whole* ordered
/// sequence of diagnostics the parse produced, and this crate treats those
/// diagnostics as opaque: they are forwarded to failure handlers as-is,
/// never interpreted.
///
/// # Serde Support
///
/// `ParseOutcome` implements `Serialize` and `Deserialize` when `T` and `E`
/// do (requires the `serde` feature).
///
/// # Type Parameters
///
/// * `T` - The parsed options/command value type
/// * `E` - The opaque diagnostic type
///
/// # Variants
///
/// * `Success(T)` - Parsing succeeded; holds the fully constructed value
/// * `Failure(ErrorVec<E>)` - Parsing failed; holds the ordered diagnostics
///   (non-empty by the parsing engine's contract, not enforced here)
///
/// # Examples
///
/// ```
/// use parse_rail::ParseOutcome;
///
/// let ok = ParseOutcome::<i32, &str>::success(42);
/// assert!(ok.is_success());
///
/// let bad = ParseOutcome::<i32, &str>::failure("unknown option --x");
/// assert!(bad.is_failure());
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum ParseOutcome<T, E> {
    Success(T),
    Failure(ErrorVec<E>),
}

impl<T, E> ParseOutcome<T, E> {
    /// Creates a successful outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use parse_rail::ParseOutcome;
    ///
    /// let o = ParseOutcome::<i32, &str>::success(42);
    /// assert_eq!(o.into_value(), Some(42));
    /// ```
    #[must_use]
    #[inline]
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failed outcome from a single diagnostic.
    ///
    /// # Examples
    ///
    /// ```
    /// use parse_rail::ParseOutcome;
    ///
    /// let o = ParseOutcome::<(), &str>::failure("missing required option");
    /// assert!(o.is_failure());
    /// ```
    #[must_use]
    #[inline]
    pub fn failure(error: E) -> Self {
        Self::Failure(smallvec![error])
    }

    /// Creates a failed outcome from an iterator of diagnostics, preserving
    /// their order.
    ///
    /// An empty iterator produces an empty `Failure`, which violates the
    /// parsing engine's contract; this constructor does not check for it.
    ///
    /// # Examples
    ///
    /// ```
    /// use parse_rail::ParseOutcome;
    ///
    /// let o = ParseOutcome::<(), &str>::failure_many(["bad flag", "bad value"]);
    /// assert_eq!(o.into_errors().unwrap().len(), 2);
    /// ```
    #[must_use]
    #[inline]
    pub fn failure_many<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        Self::Failure(errors.into_iter().collect())
    }

    /// Returns `true` if the outcome holds a parsed value.
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if the outcome holds diagnostics.
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Borrows the parsed value, if any.
    #[must_use]
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Borrows the diagnostics as an ordered slice. Empty for a success.
    #[must_use]
    #[inline]
    pub fn errors(&self) -> &[E] {
        match self {
            Self::Success(_) => &[],
            Self::Failure(errors) => errors,
        }
    }

    /// Invokes `effect` with the parsed value if the outcome is a success;
    /// otherwise does nothing. Returns the outcome unchanged, enabling
    /// chaining several handlers against one outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use parse_rail::ParseOutcome;
    ///
    /// let o = ParseOutcome::<i32, &str>::success(7);
    /// let mut seen = None;
    /// o.on_success(|v| seen = Some(*v))
    ///     .on_failure(|_| unreachable!());
    /// assert_eq!(seen, Some(7));
    /// ```
    #[inline]
    pub fn on_success<F>(&self, effect: F) -> &Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = self {
            effect(value);
        }
        self
    }

    /// Invokes `effect` with the whole ordered diagnostic slice if the
    /// outcome is a failure; otherwise does nothing. Returns the outcome
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use parse_rail::ParseOutcome;
    ///
    /// let o = ParseOutcome::<i32, &str>::failure("unknown option --x");
    /// let mut count = 0;
    /// o.on_failure(|errors| count = errors.len());
    /// assert_eq!(count, 1);
    /// ```
    #[inline]
    pub fn on_failure<F>(&self, effect: F) -> &Self
    where
        F: FnOnce(&[E]),
    {
        if let Self::Failure(errors) = self {
            effect(errors);
        }
        self
    }

    /// Reduces either variant to a single value of type `R`.
    ///
    /// Exactly one of the two handlers runs; the fold is total over both
    /// variants and cannot fail.
    ///
    /// # Arguments
    ///
    /// * `on_success` - Handler for the parsed value
    /// * `on_failure` - Handler for the ordered diagnostics
    ///
    /// # Examples
    ///
    /// ```
    /// use parse_rail::ParseOutcome;
    ///
    /// let o = ParseOutcome::<i32, &str>::success(21);
    /// let doubled = o.fold(|v| v * 2, |_| -1);
    /// assert_eq!(doubled, 42);
    /// ```
    #[inline]
    pub fn fold<R, F, G>(self, on_success: F, on_failure: G) -> R
    where
        F: FnOnce(T) -> R,
        G: FnOnce(ErrorVec<E>) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(errors) => on_failure(errors),
        }
    }

    /// Maps the parsed value using the provided function.
    ///
    /// If the outcome is a failure, the diagnostics pass through unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use parse_rail::ParseOutcome;
    ///
    /// let o = ParseOutcome::<i32, &str>::success(21);
    /// assert_eq!(o.map(|v| v * 2).into_value(), Some(42));
    /// ```
    #[must_use]
    #[inline]
    pub fn map<U, F>(self, f: F) -> ParseOutcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => ParseOutcome::Success(f(value)),
            Self::Failure(errors) => ParseOutcome::Failure(errors),
        }
    }

    /// Maps each diagnostic while preserving the success branch and the
    /// diagnostic order.
    ///
    /// # Examples
    ///
    /// ```
    /// use parse_rail::ParseOutcome;
    ///
    /// let o = ParseOutcome::<i32, &str>::failure_many(["a", "b"]);
    /// let upper = o.map_errs(|e| e.to_uppercase());
    /// assert_eq!(upper.errors(), ["A", "B"]);
    /// ```
    #[must_use]
    #[inline]
    pub fn map_errs<F, G>(self, f: F) -> ParseOutcome<T, G>
    where
        F: Fn(E) -> G,
    {
        match self {
            Self::Success(value) => ParseOutcome::Success(value),
            Self::Failure(errors) => {
                ParseOutcome::Failure(errors.into_iter().map(f).collect())
            }
        }
    }

    /// Converts into a `Result`, carrying the whole diagnostic sequence on
    /// the error side.
    ///
    /// # Examples
    ///
    /// ```
    /// use parse_rail::ParseOutcome;
    ///
    /// let o = ParseOutcome::<i32, &str>::success(42);
    /// assert_eq!(o.to_result(), Ok(42));
    /// ```
    #[must_use]
    #[inline]
    pub fn to_result(self) -> Result<T, ErrorVec<E>> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(errors) => Err(errors),
        }
    }

    /// Wraps a plain `Result`, turning the error side into a singleton
    /// diagnostic sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use parse_rail::ParseOutcome;
    ///
    /// let o = ParseOutcome::from_result(Ok::<_, &str>(42));
    /// assert!(o.is_success());
    /// ```
    #[must_use]
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::failure(error),
        }
    }

    /// Extracts the diagnostic sequence, if any.
    #[must_use]
    #[inline]
    pub fn into_errors(self) -> Option<ErrorVec<E>> {
        match self {
            Self::Success(_) => None,
            Self::Failure(errors) => Some(errors),
        }
    }

    /// Extracts the parsed value, if any.
    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }
}
