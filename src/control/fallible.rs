//! Fallible type - a computation result that either failed or succeeded.
//!
//! This module provides the `Fallible<F, S>` type, which represents the
//! outcome of a computation as exactly one of a failure (`F`) or a
//! success (`S`). Pipelines built from [`map`](Fallible::map) and
//! [`flat_map`](Fallible::flat_map) propagate the first failure and skip
//! every later step, so error handling is written once at the end
//! instead of at every call site.
//!
//! # Examples
//!
//! ```rust
//! use fallibars::control::Fallible;
//!
//! fn checked_div(dividend: i32, divisor: i32) -> Fallible<String, i32> {
//!     if divisor == 0 {
//!         Fallible::failure("division by zero".to_string())
//!     } else {
//!         Fallible::success(dividend / divisor)
//!     }
//! }
//!
//! let result = checked_div(84, 2).map(|x| x + 1);
//! assert_eq!(result, Fallible::success(43));
//!
//! let failed = checked_div(84, 0).map(|x| x + 1);
//! assert_eq!(failed, Fallible::failure("division by zero".to_string()));
//! ```

use std::any::Any;
use std::fmt;
use std::panic::panic_any;

use super::either::Either;
use super::maybe::Maybe;
use super::unit::Unit;

/// The outcome of a computation: a failure or a success.
///
/// `Fallible<F, S>` wraps an [`Either`] with the failure on the left and
/// the success on the right, so the two projections are mutually
/// exclusive by construction: exactly one of
/// [`get_failure`](Fallible::get_failure) and
/// [`get_success`](Fallible::get_success) produces a value.
///
/// Unlike [`Either`], `Fallible` is biased: transformation operations
/// act on the success channel and leave failures untouched, which is
/// what makes failure propagation automatic.
///
/// # Type Parameters
///
/// * `F` - The type of the failure value
/// * `S` - The type of the success value
///
/// # Examples
///
/// ```rust
/// use fallibars::control::{Fallible, Maybe};
///
/// let success: Fallible<String, i32> = Fallible::success(42);
/// assert_eq!(success.get_success(), Maybe::some(42));
///
/// let failure: Fallible<String, i32> = Fallible::failure("broken".to_string());
/// assert_eq!(failure.get_success(), Maybe::none());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fallible<F, S> {
    inner: Either<F, S>,
}

impl<F, S> Fallible<F, S> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a failed outcome.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::control::Fallible;
    ///
    /// let outcome: Fallible<String, i32> = Fallible::failure("broken".to_string());
    /// assert!(outcome.is_failure());
    /// ```
    #[inline]
    pub const fn failure(value: F) -> Self {
        Self {
            inner: Either::Left(value),
        }
    }

    /// Creates a successful outcome.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::control::Fallible;
    ///
    /// let outcome: Fallible<String, i32> = Fallible::success(42);
    /// assert!(outcome.is_success());
    /// ```
    #[inline]
    pub const fn success(value: S) -> Self {
        Self {
            inner: Either::Right(value),
        }
    }

    /// Lifts a [`Maybe`] into a `Fallible`, treating absence as failure.
    ///
    /// A present value becomes a success; an absent one becomes the
    /// given failure. Also available as
    /// [`Maybe::if_none_fail`] for method-position chaining.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::control::{Fallible, Maybe};
    ///
    /// let found = Fallible::if_none_fail(Maybe::some(42), "missing");
    /// assert_eq!(found, Fallible::success(42));
    ///
    /// let lost = Fallible::if_none_fail(Maybe::<i32>::none(), "missing");
    /// assert_eq!(lost, Fallible::failure("missing"));
    /// ```
    #[inline]
    pub fn if_none_fail(maybe: Maybe<S>, failure: F) -> Self {
        maybe.fold(|| Self::failure(failure), Self::success)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::control::Fallible;
    ///
    /// let outcome: Fallible<String, i32> = Fallible::failure("broken".to_string());
    /// assert!(outcome.is_failure());
    /// assert!(!outcome.is_success());
    /// ```
    #[inline]
    pub const fn is_failure(&self) -> bool {
        self.inner.is_left()
    }

    /// Returns `true` if this is a success.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::control::Fallible;
    ///
    /// let outcome: Fallible<String, i32> = Fallible::success(42);
    /// assert!(outcome.is_success());
    /// assert!(!outcome.is_failure());
    /// ```
    #[inline]
    pub const fn is_success(&self) -> bool {
        self.inner.is_right()
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the Fallible by applying one of two functions.
    ///
    /// Runs `if_failure` on a failure and `if_success` on a success;
    /// exactly one of the two functions runs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::control::Fallible;
    ///
    /// let outcome: Fallible<String, i32> = Fallible::success(42);
    /// let message = outcome.fold(
    ///     |error| format!("failed: {}", error),
    ///     |value| format!("got {}", value),
    /// );
    /// assert_eq!(message, "got 42");
    /// ```
    #[inline]
    pub fn fold<T, G, H>(self, if_failure: G, if_success: H) -> T
    where
        G: FnOnce(F) -> T,
        H: FnOnce(S) -> T,
    {
        self.inner.fold(if_failure, if_success)
    }

    // =========================================================================
    // Maybe Projections
    // =========================================================================

    /// Projects the failure into a [`Maybe`], consuming the outcome.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::control::{Fallible, Maybe};
    ///
    /// let outcome: Fallible<String, i32> = Fallible::failure("broken".to_string());
    /// assert_eq!(outcome.get_failure(), Maybe::some("broken".to_string()));
    ///
    /// let outcome: Fallible<String, i32> = Fallible::success(42);
    /// assert_eq!(outcome.get_failure(), Maybe::none());
    /// ```
    #[inline]
    pub fn get_failure(self) -> Maybe<F> {
        self.inner.get_left()
    }

    /// Projects the success into a [`Maybe`], consuming the outcome.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::control::{Fallible, Maybe};
    ///
    /// let outcome: Fallible<String, i32> = Fallible::success(42);
    /// assert_eq!(outcome.get_success(), Maybe::some(42));
    ///
    /// let outcome: Fallible<String, i32> = Fallible::failure("broken".to_string());
    /// assert_eq!(outcome.get_success(), Maybe::none());
    /// ```
    #[inline]
    pub fn get_success(self) -> Maybe<S> {
        self.inner.get_right()
    }

    /// Converts from `&Fallible<F, S>` to `Fallible<&F, &S>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::control::{Fallible, Maybe};
    ///
    /// let outcome: Fallible<String, i32> = Fallible::success(42);
    /// assert_eq!(outcome.as_ref().get_success(), Maybe::some(&42));
    /// assert!(outcome.is_success());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Fallible<&F, &S> {
        Fallible {
            inner: self.inner.as_ref(),
        }
    }

    /// Returns a reference to the failure value if present.
    #[inline]
    pub const fn failure_ref(&self) -> Maybe<&F> {
        match &self.inner {
            Either::Left(value) => Maybe::Some(value),
            Either::Right(_) => Maybe::None,
        }
    }

    /// Returns a reference to the success value if present.
    #[inline]
    pub const fn success_ref(&self) -> Maybe<&S> {
        match &self.inner {
            Either::Left(_) => Maybe::None,
            Either::Right(value) => Maybe::Some(value),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the success value, if any.
    ///
    /// A failure passes through untouched and the function never runs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::control::Fallible;
    ///
    /// let outcome: Fallible<String, i32> = Fallible::success(21);
    /// assert_eq!(outcome.map(|x| x * 2), Fallible::success(42));
    ///
    /// let failed: Fallible<String, i32> = Fallible::failure("broken".to_string());
    /// assert_eq!(failed.map(|x| x * 2), Fallible::failure("broken".to_string()));
    /// ```
    #[inline]
    pub fn map<S2, G>(self, function: G) -> Fallible<F, S2>
    where
        G: FnOnce(S) -> S2,
    {
        match self.inner {
            Either::Left(failure) => Fallible::failure(failure),
            Either::Right(success) => Fallible::success(function(success)),
        }
    }

    /// Chains a computation that itself may fail.
    ///
    /// If this is a success, returns `function(success)`. If this is a
    /// failure, returns the failure without calling the function, so a
    /// pipeline of `flat_map` calls stops at the first failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::control::Fallible;
    ///
    /// fn require_even(x: i32) -> Fallible<String, i32> {
    ///     if x % 2 == 0 {
    ///         Fallible::success(x)
    ///     } else {
    ///         Fallible::failure(format!("{} is odd", x))
    ///     }
    /// }
    ///
    /// assert_eq!(Fallible::success(42).flat_map(require_even), Fallible::success(42));
    /// assert_eq!(
    ///     Fallible::success(7).flat_map(require_even),
    ///     Fallible::failure("7 is odd".to_string()),
    /// );
    /// ```
    #[inline]
    pub fn flat_map<S2, G>(self, function: G) -> Fallible<F, S2>
    where
        G: FnOnce(S) -> Fallible<F, S2>,
    {
        match self.inner {
            Either::Left(failure) => Fallible::failure(failure),
            Either::Right(success) => function(success),
        }
    }

    /// Alias for [`flat_map`](Self::flat_map).
    #[inline]
    pub fn and_then<S2, G>(self, function: G) -> Fallible<F, S2>
    where
        G: FnOnce(S) -> Fallible<F, S2>,
    {
        self.flat_map(function)
    }

    /// Chains a dependent computation and combines both success values.
    ///
    /// `function` receives a reference to the success value and may
    /// fail; when it succeeds with `inner`, `combine` receives the
    /// original success and `inner` and builds the result. Failure
    /// short-circuits at each step: an initial failure skips the
    /// function, and a failure from the function skips the combiner.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::control::Fallible;
    ///
    /// let result: Fallible<String, i32> = Fallible::success(42)
    ///     .flat_map_with(|x| Fallible::success(x + 1), |x, y| x + y);
    /// assert_eq!(result, Fallible::success(85));
    /// ```
    #[inline]
    pub fn flat_map_with<S2, S3, G, H>(self, function: G, combine: H) -> Fallible<F, S3>
    where
        G: FnOnce(&S) -> Fallible<F, S2>,
        H: FnOnce(S, S2) -> S3,
    {
        match self.inner {
            Either::Left(failure) => Fallible::failure(failure),
            Either::Right(success) => match function(&success).inner {
                Either::Left(failure) => Fallible::failure(failure),
                Either::Right(inner) => Fallible::success(combine(success, inner)),
            },
        }
    }

    /// Applies a function to the failure value, if any.
    ///
    /// A success passes through untouched. This is how failures from a
    /// narrower domain are widened into a caller's failure type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::control::Fallible;
    ///
    /// let outcome: Fallible<i32, String> = Fallible::failure(404);
    /// let widened = outcome.map_failure(|code| format!("status {}", code));
    /// assert_eq!(widened, Fallible::failure("status 404".to_string()));
    /// ```
    #[inline]
    pub fn map_failure<F2, G>(self, function: G) -> Fallible<F2, S>
    where
        G: FnOnce(F) -> F2,
    {
        match self.inner {
            Either::Left(failure) => Fallible::failure(function(failure)),
            Either::Right(success) => Fallible::success(success),
        }
    }

    // =========================================================================
    // Side-Effect Hooks
    // =========================================================================

    /// Runs an action on the failure value if present, then returns the
    /// outcome unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::control::Fallible;
    ///
    /// let mut log = Vec::new();
    /// let outcome: Fallible<String, i32> = Fallible::failure("broken".to_string());
    /// let outcome = outcome.on_failure(|error| log.push(error.clone()));
    /// assert!(outcome.is_failure());
    /// assert_eq!(log, vec!["broken".to_string()]);
    /// ```
    #[inline]
    pub fn on_failure<G>(self, action: G) -> Self
    where
        G: FnOnce(&F),
    {
        if let Either::Left(failure) = &self.inner {
            action(failure);
        }
        self
    }

    /// Runs an action on the success value if present, then returns the
    /// outcome unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::control::Fallible;
    ///
    /// let mut seen = Vec::new();
    /// let outcome: Fallible<String, i32> = Fallible::success(42);
    /// let outcome = outcome.on_success(|value| seen.push(*value));
    /// assert!(outcome.is_success());
    /// assert_eq!(seen, vec![42]);
    /// ```
    #[inline]
    pub fn on_success<G>(self, action: G) -> Self
    where
        G: FnOnce(&S),
    {
        if let Either::Right(success) = &self.inner {
            action(success);
        }
        self
    }

    // =========================================================================
    // Escalation
    // =========================================================================

    /// Returns the success value, or panics with a payload built from
    /// the failure.
    ///
    /// This is the deliberate escape hatch from value-level error
    /// handling back into unwinding. The payload is raised with
    /// [`panic_any`], so a panic-capturing wrapper further out (see the
    /// `function` module) can recover it as a typed failure again.
    ///
    /// # Panics
    ///
    /// Panics with `on_failure(failure)` if this is a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::control::Fallible;
    ///
    /// let outcome: Fallible<String, i32> = Fallible::success(42);
    /// assert_eq!(outcome.unwrap_or_panic(|error| error), 42);
    /// ```
    #[inline]
    pub fn unwrap_or_panic<P, G>(self, on_failure: G) -> S
    where
        P: Any + Send,
        G: FnOnce(F) -> P,
    {
        match self.inner {
            Either::Left(failure) => panic_any(on_failure(failure)),
            Either::Right(success) => success,
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Wraps an [`Either`] as a `Fallible`, reading `Left` as failure.
    #[inline]
    pub const fn from_either(either: Either<F, S>) -> Self {
        Self { inner: either }
    }

    /// Unwraps into the underlying [`Either`], with the failure on the
    /// left.
    #[inline]
    pub fn into_either(self) -> Either<F, S> {
        self.inner
    }
}

impl<F> Fallible<F, Unit> {
    /// Turns a boolean check into an outcome.
    ///
    /// A satisfied condition becomes `success(Unit)`; a violated one
    /// becomes the given failure. Useful as a guard step inside
    /// [`flat_map`](Fallible::flat_map) pipelines.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::control::{Fallible, Unit};
    ///
    /// let age = 16;
    /// let allowed = Fallible::validate(age >= 18, "too young")
    ///     .map(|Unit| "welcome");
    /// assert_eq!(allowed, Fallible::failure("too young"));
    /// ```
    #[inline]
    pub fn validate(condition: bool, failure: F) -> Self {
        if condition {
            Self::success(Unit)
        } else {
            Self::failure(failure)
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<F: fmt::Debug, S: fmt::Debug> fmt::Debug for Fallible<F, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Either::Left(value) => formatter.debug_tuple("Failure").field(value).finish(),
            Either::Right(value) => formatter.debug_tuple("Success").field(value).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<F, S> From<Result<S, F>> for Fallible<F, S> {
    /// Converts a `Result` to a `Fallible`.
    ///
    /// `Ok(s)` becomes a success and `Err(f)` becomes a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::control::Fallible;
    ///
    /// let parsed: Fallible<std::num::ParseIntError, i32> = "42".parse::<i32>().into();
    /// assert_eq!(parsed.get_success().value_or(0), 42);
    /// ```
    #[inline]
    fn from(result: Result<S, F>) -> Self {
        match result {
            Ok(value) => Self::success(value),
            Err(error) => Self::failure(error),
        }
    }
}

impl<F, S> From<Fallible<F, S>> for Result<S, F> {
    /// Converts a `Fallible` to a `Result`.
    ///
    /// A success becomes `Ok` and a failure becomes `Err`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::control::Fallible;
    ///
    /// let outcome: Fallible<String, i32> = Fallible::success(42);
    /// let result: Result<i32, String> = outcome.into();
    /// assert_eq!(result, Ok(42));
    /// ```
    #[inline]
    fn from(fallible: Fallible<F, S>) -> Self {
        match fallible.inner {
            Either::Left(error) => Err(error),
            Either::Right(value) => Ok(value),
        }
    }
}

// Static assertions to verify Fallible propagates auto traits
static_assertions::assert_impl_all!(Fallible<String, i32>: Send, Sync);
static_assertions::assert_impl_all!(Fallible<i32, i32>: Send, Sync, Copy);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_fallible_failure_construction() {
        let outcome: Fallible<String, i32> = Fallible::failure("broken".to_string());
        assert!(outcome.is_failure());
        assert!(!outcome.is_success());
    }

    #[rstest]
    fn test_fallible_success_construction() {
        let outcome: Fallible<String, i32> = Fallible::success(42);
        assert!(outcome.is_success());
        assert!(!outcome.is_failure());
    }

    #[rstest]
    fn test_projections_are_exclusive() {
        let success: Fallible<String, i32> = Fallible::success(42);
        assert_eq!(success.success_ref(), Maybe::some(&42));
        assert_eq!(success.failure_ref(), Maybe::none());
        assert_eq!(success.get_success(), Maybe::some(42));
    }

    #[rstest]
    fn test_validate_guards() {
        let passed: Fallible<&str, Unit> = Fallible::validate(true, "never");
        assert_eq!(passed, Fallible::success(Unit));

        let rejected: Fallible<&str, Unit> = Fallible::validate(false, "rejected");
        assert_eq!(rejected, Fallible::failure("rejected"));
    }

    #[rstest]
    fn test_result_conversion_roundtrip() {
        let ok: Result<i32, String> = Ok(42);
        let fallible: Fallible<String, i32> = ok.into();
        let result: Result<i32, String> = fallible.into();
        assert_eq!(result, Ok(42));
    }

    #[rstest]
    fn test_debug_format() {
        let success: Fallible<String, i32> = Fallible::success(42);
        assert_eq!(format!("{:?}", success), "Success(42)");

        let failure: Fallible<String, i32> = Fallible::failure("broken".to_string());
        assert_eq!(format!("{:?}", failure), "Failure(\"broken\")");
    }
}
