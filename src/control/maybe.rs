//! Maybe type - an optional value with explicit, total consumption.
//!
//! This module provides the `Maybe<T>` type, which represents a value that
//! is either present (`Some(T)`) or absent (`None`). Unlike a nullable
//! reference, absence is a distinct variant that every consumer must
//! handle. This is commonly used in functional programming for:
//!
//! - Lookups and parses that may produce nothing
//! - Short-circuiting pipelines of dependent computations
//! - Making "no result" impossible to confuse with a present value
//!
//! # Examples
//!
//! ```rust
//! use fallibars::control::Maybe;
//!
//! // Creating Maybe values
//! let present = Maybe::some(42);
//! let absent: Maybe<i32> = Maybe::none();
//!
//! // Pattern matching
//! match present {
//!     Maybe::Some(n) => println!("Got value: {}", n),
//!     Maybe::None => println!("Got nothing"),
//! }
//!
//! // Using fold to handle both cases
//! let description = absent.fold(
//!     || "nothing".to_string(),
//!     |n| format!("value: {}", n),
//! );
//! assert_eq!(description, "nothing");
//! ```

use std::fmt;

use super::fallible::Fallible;

/// An optional value: either present or absent.
///
/// `Maybe<T>` represents a value that is either `Some(T)` or `None`.
/// Both cases are ordinary variants of a sum type, so the compiler
/// enforces that every consumption handles absence. There is no
/// panicking accessor; values leave a `Maybe` through [`fold`],
/// [`value_or`], iteration, or the [`Option`] adapters.
///
/// `None` compares equal to `None`, `Some(a)` to `Some(b)` exactly when
/// `a == b`, and the two variants never compare equal. Hashing follows
/// the same structure, so equal values hash equally.
///
/// [`fold`]: Maybe::fold
/// [`value_or`]: Maybe::value_or
///
/// # Type Parameters
///
/// * `T` - The type of the contained value
///
/// # Examples
///
/// ```rust
/// use fallibars::control::Maybe;
///
/// let parsed: Maybe<i32> = "42".parse().ok().into();
/// assert_eq!(parsed.map(|x| x * 2), Maybe::some(84));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<T> {
    /// The absent variant, carrying no value.
    None,
    /// The present variant, carrying a value.
    Some(T),
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a present value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::control::Maybe;
    ///
    /// let value = Maybe::some(42);
    /// assert!(value.is_some());
    /// ```
    #[inline]
    pub const fn some(value: T) -> Self {
        Self::Some(value)
    }

    /// Creates an absent value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::control::Maybe;
    ///
    /// let value: Maybe<i32> = Maybe::none();
    /// assert!(value.is_none());
    /// ```
    #[inline]
    pub const fn none() -> Self {
        Self::None
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Some` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::control::Maybe;
    ///
    /// assert!(Maybe::some(42).is_some());
    /// assert!(!Maybe::<i32>::none().is_some());
    /// ```
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if this is a `None` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::control::Maybe;
    ///
    /// assert!(Maybe::<i32>::none().is_none());
    /// assert!(!Maybe::some(42).is_none());
    /// ```
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the Maybe by applying one of two functions.
    ///
    /// Runs `if_none` when the value is absent and `if_some` when it is
    /// present. Exactly one of the two functions runs, and this is the
    /// only primitive consumers need; every other consuming operation
    /// can be written in terms of it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::control::Maybe;
    ///
    /// let present = Maybe::some(42);
    /// let result = present.fold(|| 0, |x| x * 2);
    /// assert_eq!(result, 84);
    ///
    /// let absent: Maybe<i32> = Maybe::none();
    /// let result = absent.fold(|| 0, |x| x * 2);
    /// assert_eq!(result, 0);
    /// ```
    #[inline]
    pub fn fold<U, F, G>(self, if_none: F, if_some: G) -> U
    where
        F: FnOnce() -> U,
        G: FnOnce(T) -> U,
    {
        match self {
            Self::None => if_none(),
            Self::Some(value) => if_some(value),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the contained value if present.
    ///
    /// If this is `Some(v)`, returns `Some(function(v))`.
    /// If this is `None`, returns `None` without calling the function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::control::Maybe;
    ///
    /// let present = Maybe::some(21);
    /// assert_eq!(present.map(|x| x * 2), Maybe::some(42));
    ///
    /// let absent: Maybe<i32> = Maybe::none();
    /// assert_eq!(absent.map(|x| x * 2), Maybe::none());
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::None => Maybe::None,
            Self::Some(value) => Maybe::Some(function(value)),
        }
    }

    /// Chains a computation that itself may produce nothing.
    ///
    /// If this is `Some(v)`, returns `function(v)`. If this is `None`,
    /// returns `None` without calling the function, so a pipeline of
    /// `flat_map` calls stops at the first absent link.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::control::Maybe;
    ///
    /// fn half(x: i32) -> Maybe<i32> {
    ///     if x % 2 == 0 { Maybe::some(x / 2) } else { Maybe::none() }
    /// }
    ///
    /// assert_eq!(Maybe::some(84).flat_map(half), Maybe::some(42));
    /// assert_eq!(Maybe::some(7).flat_map(half), Maybe::none());
    /// assert_eq!(Maybe::none().flat_map(half), Maybe::none());
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::None => Maybe::None,
            Self::Some(value) => function(value),
        }
    }

    /// Alias for [`flat_map`](Self::flat_map).
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        self.flat_map(function)
    }

    /// Chains a dependent computation and combines both values.
    ///
    /// `function` receives a reference to the contained value and may
    /// produce nothing; when it produces `Some(inner)`, `combine`
    /// receives the original value and `inner` and builds the result.
    /// Absence short-circuits at each step: when this is `None` the
    /// function never runs, and when the function returns `None` the
    /// combiner never runs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::control::Maybe;
    ///
    /// let result = Maybe::some(42)
    ///     .flat_map_with(|x| Maybe::some(x + 1), |x, y| x + y);
    /// assert_eq!(result, Maybe::some(85));
    ///
    /// let stopped = Maybe::some(42)
    ///     .flat_map_with(|_| Maybe::<i32>::none(), |x, y| x + y);
    /// assert_eq!(stopped, Maybe::none());
    /// ```
    #[inline]
    pub fn flat_map_with<U, V, F, G>(self, function: F, combine: G) -> Maybe<V>
    where
        F: FnOnce(&T) -> Maybe<U>,
        G: FnOnce(T, U) -> V,
    {
        match self {
            Self::None => Maybe::None,
            Self::Some(value) => match function(&value) {
                Maybe::None => Maybe::None,
                Maybe::Some(inner) => Maybe::Some(combine(value, inner)),
            },
        }
    }

    /// Keeps the value only if it satisfies a predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::control::Maybe;
    ///
    /// assert_eq!(Maybe::some(42).filter(|x| x % 2 == 0), Maybe::some(42));
    /// assert_eq!(Maybe::some(7).filter(|x| x % 2 == 0), Maybe::none());
    /// assert_eq!(Maybe::<i32>::none().filter(|x| x % 2 == 0), Maybe::none());
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) => {
                if predicate(&value) {
                    Self::Some(value)
                } else {
                    Self::None
                }
            }
            Self::None => Self::None,
        }
    }

    // =========================================================================
    // Value Extraction (Consuming)
    // =========================================================================

    /// Returns the contained value, or the given default if absent.
    ///
    /// Arguments passed to `value_or` are eagerly evaluated; for a
    /// lazily evaluated fallback use [`value_or_else`](Self::value_or_else).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::control::Maybe;
    ///
    /// assert_eq!(Maybe::some(42).value_or(0), 42);
    /// assert_eq!(Maybe::none().value_or(0), 0);
    /// ```
    #[inline]
    pub fn value_or(self, default: T) -> T {
        match self {
            Self::None => default,
            Self::Some(value) => value,
        }
    }

    /// Returns the contained value, or computes a fallback if absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::control::Maybe;
    ///
    /// assert_eq!(Maybe::some(42).value_or_else(|| 0), 42);
    /// assert_eq!(Maybe::none().value_or_else(|| 0), 0);
    /// ```
    #[inline]
    pub fn value_or_else<F>(self, function: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::None => function(),
            Self::Some(value) => value,
        }
    }

    /// Returns the contained value, or `T::default()` if absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::control::Maybe;
    ///
    /// assert_eq!(Maybe::some(42).value_or_default(), 42);
    /// assert_eq!(Maybe::<i32>::none().value_or_default(), 0);
    /// ```
    #[inline]
    pub fn value_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Self::None => T::default(),
            Self::Some(value) => value,
        }
    }

    // =========================================================================
    // Reference Operations (Non-consuming)
    // =========================================================================

    /// Converts from `&Maybe<T>` to `Maybe<&T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::control::Maybe;
    ///
    /// let text = Maybe::some("hello".to_string());
    /// let length = text.as_ref().map(|s| s.len());
    /// assert_eq!(length, Maybe::some(5));
    /// assert!(text.is_some());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::None => Maybe::None,
            Self::Some(value) => Maybe::Some(value),
        }
    }

    // =========================================================================
    // Side-Effect Hooks
    // =========================================================================

    /// Runs an action on the contained value if present, then returns
    /// the Maybe unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::control::Maybe;
    ///
    /// let mut seen = Vec::new();
    /// let value = Maybe::some(42).on_some(|x| seen.push(*x));
    /// assert_eq!(value, Maybe::some(42));
    /// assert_eq!(seen, vec![42]);
    /// ```
    #[inline]
    pub fn on_some<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Some(value) = &self {
            action(value);
        }
        self
    }

    /// Runs an action if the value is absent, then returns the Maybe
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::control::Maybe;
    ///
    /// let mut called = false;
    /// let value: Maybe<i32> = Maybe::none().on_none(|| called = true);
    /// assert!(value.is_none());
    /// assert!(called);
    /// ```
    #[inline]
    pub fn on_none<F>(self, action: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_none() {
            action();
        }
        self
    }

    // =========================================================================
    // Iteration
    // =========================================================================

    /// Returns an iterator over the zero or one contained values.
    ///
    /// Each call starts a fresh traversal, so the same Maybe can be
    /// iterated any number of times.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::control::Maybe;
    ///
    /// let present = Maybe::some(42);
    /// assert_eq!(present.iter().copied().collect::<Vec<_>>(), vec![42]);
    /// assert_eq!(present.iter().count(), 1);
    ///
    /// let absent: Maybe<i32> = Maybe::none();
    /// assert_eq!(absent.iter().count(), 0);
    /// ```
    #[inline]
    pub const fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: match self {
                Self::None => None,
                Self::Some(value) => Some(value),
            },
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts an `Option` into a `Maybe`.
    ///
    /// This is the explicit boundary adapter for code that traffics in
    /// `Option`; `Some` maps to `Some` and `None` to `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::control::Maybe;
    ///
    /// assert_eq!(Maybe::from_option(Some(42)), Maybe::some(42));
    /// assert_eq!(Maybe::<i32>::from_option(None), Maybe::none());
    /// ```
    #[inline]
    pub fn from_option(option: Option<T>) -> Self {
        match option {
            None => Self::None,
            Some(value) => Self::Some(value),
        }
    }

    /// Converts the `Maybe` into an `Option`, consuming it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::control::Maybe;
    ///
    /// assert_eq!(Maybe::some(42).into_option(), Some(42));
    /// assert_eq!(Maybe::<i32>::none().into_option(), None);
    /// ```
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::None => None,
            Self::Some(value) => Some(value),
        }
    }

    /// Lifts the Maybe into a [`Fallible`], treating absence as failure.
    ///
    /// A present value becomes a success; an absent one becomes the
    /// given failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::control::{Fallible, Maybe};
    ///
    /// let found = Maybe::some(42).if_none_fail("missing");
    /// assert_eq!(found, Fallible::success(42));
    ///
    /// let absent: Maybe<i32> = Maybe::none();
    /// assert_eq!(absent.if_none_fail("missing"), Fallible::failure("missing"));
    /// ```
    #[inline]
    pub fn if_none_fail<F>(self, failure: F) -> Fallible<F, T> {
        Fallible::if_none_fail(self, failure)
    }
}

// =============================================================================
// Default Implementation
// =============================================================================

impl<T> Default for Maybe<T> {
    /// Returns [`Maybe::None`].
    ///
    /// A default-initialized `Maybe` is identical to an explicitly
    /// constructed absent value. No `T: Default` bound is required
    /// because no `T` is ever produced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::control::Maybe;
    ///
    /// let value: Maybe<i32> = Maybe::default();
    /// assert_eq!(value, Maybe::none());
    /// ```
    #[inline]
    fn default() -> Self {
        Self::None
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => formatter.write_str("None"),
            Self::Some(value) => formatter.debug_tuple("Some").field(value).finish(),
        }
    }
}

// =============================================================================
// Iterator Implementations
// =============================================================================

/// An iterator over the reference to the value of a [`Maybe`], if any.
///
/// Created by [`Maybe::iter`].
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.inner.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.inner.is_some());
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> std::iter::FusedIterator for Iter<'_, T> {}

/// An iterator over the value of a [`Maybe`], if any.
///
/// Created by the `IntoIterator` implementation on [`Maybe`].
#[derive(Clone, Debug)]
pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.inner.is_some());
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> std::iter::FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Consumes the `Maybe` into an iterator of zero or one elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::control::Maybe;
    ///
    /// let collected: Vec<i32> = Maybe::some(42).into_iter().collect();
    /// assert_eq!(collected, vec![42]);
    /// ```
    #[inline]
    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            inner: self.into_option(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    /// Converts an `Option` to a `Maybe`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::control::Maybe;
    ///
    /// let maybe: Maybe<i32> = Some(42).into();
    /// assert_eq!(maybe, Maybe::some(42));
    /// ```
    #[inline]
    fn from(option: Option<T>) -> Self {
        Self::from_option(option)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    /// Converts a `Maybe` to an `Option`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::control::Maybe;
    ///
    /// let option: Option<i32> = Maybe::some(42).into();
    /// assert_eq!(option, Some(42));
    /// ```
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

// Static assertions to verify Maybe propagates auto traits
static_assertions::assert_impl_all!(Maybe<i32>: Send, Sync, Copy);
static_assertions::assert_impl_all!(Maybe<String>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_maybe_some_construction() {
        let value = Maybe::some(42);
        assert!(value.is_some());
        assert!(!value.is_none());
    }

    #[rstest]
    fn test_maybe_none_construction() {
        let value: Maybe<i32> = Maybe::none();
        assert!(value.is_none());
        assert!(!value.is_some());
    }

    #[rstest]
    fn test_default_is_none() {
        let value: Maybe<i32> = Maybe::default();
        assert_eq!(value, Maybe::none());
    }

    #[rstest]
    fn test_option_conversion_roundtrip() {
        let present: Maybe<i32> = Some(42).into();
        let option: Option<i32> = present.into();
        assert_eq!(option, Some(42));

        let absent: Maybe<i32> = None.into();
        let option: Option<i32> = absent.into();
        assert_eq!(option, None);
    }

    #[rstest]
    fn test_iter_is_restartable() {
        let value = Maybe::some(42);
        assert_eq!(value.iter().count(), 1);
        assert_eq!(value.iter().count(), 1);
    }

    #[rstest]
    fn test_debug_format() {
        assert_eq!(format!("{:?}", Maybe::some(42)), "Some(42)");
        assert_eq!(format!("{:?}", Maybe::<i32>::none()), "None");
    }
}
