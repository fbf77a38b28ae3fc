//! Monad type class - sequencing computations within a context.
//!
//! This module provides the `Monad` trait, which extends `Applicative`
//! with the ability to sequence computations where each step can depend
//! on the result of the previous step. The context's notion of failure
//! short-circuits the sequence: once a `Maybe` is absent or a
//! `Fallible` has failed, no later step runs.
//!
//! # Laws
//!
//! All `Monad` implementations must satisfy these laws:
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fallibars::typeclass::Monad;
//! use fallibars::control::Maybe;
//!
//! fn parse_positive(s: &str) -> Maybe<i32> {
//!     Maybe::from_option(s.parse::<i32>().ok()).filter(|&n| n > 0)
//! }
//!
//! let result = Maybe::some("42")
//!     .flat_map(parse_positive)
//!     .flat_map(|n| Maybe::some(n * 2));
//! assert_eq!(result, Maybe::some(84));
//! ```

use super::applicative::Applicative;
use super::identity::Identity;

#[cfg(feature = "control")]
use crate::control::{Fallible, Maybe};

/// A type class for types that support sequencing of computations.
///
/// `Monad` extends `Applicative` with `flat_map`, which allows the
/// result of one computation to determine what computation to perform
/// next. Where `map2` combines independent computations, `flat_map`
/// chains dependent ones.
///
/// # Laws
///
/// ## Left Identity Law
///
/// ```text
/// Self::pure(a).flat_map(f) == f(a)
/// ```
///
/// ## Right Identity Law
///
/// ```text
/// m.flat_map(Self::pure) == m
/// ```
///
/// ## Associativity Law
///
/// ```text
/// m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
/// ```
///
/// # Examples
///
/// ```rust
/// use fallibars::typeclass::Monad;
/// use fallibars::control::Fallible;
///
/// let outcome: Fallible<String, i32> = Fallible::success(10);
/// let halved = outcome.flat_map(|n| {
///     if n % 2 == 0 {
///         Fallible::success(n / 2)
///     } else {
///         Fallible::failure("odd".to_string())
///     }
/// });
/// assert_eq!(halved, Fallible::success(5));
/// ```
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the result.
    ///
    /// This is the fundamental operation of the Monad type class. It
    /// takes a function that returns a new monad and "flattens" the
    /// nested result.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that takes the inner value and returns a new monad
    ///
    /// # Returns
    ///
    /// A new monad with the result of applying the function
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::typeclass::Monad;
    /// use fallibars::control::Maybe;
    ///
    /// let x = Maybe::some(5);
    /// let y = x.flat_map(|n| Maybe::some(n * 2));
    /// assert_eq!(y, Maybe::some(10));
    ///
    /// let z = Maybe::some(5);
    /// let w = z.flat_map(|n| if n > 10 { Maybe::some(n) } else { Maybe::none() });
    /// assert_eq!(w, Maybe::none());
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map` to match Rust's naming conventions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::typeclass::Monad;
    /// use fallibars::control::Maybe;
    ///
    /// let x = Maybe::some(5);
    /// let y = x.and_then(|n| Maybe::some(n * 2));
    /// assert_eq!(y, Maybe::some(10));
    /// ```
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two monadic computations, discarding the first result.
    ///
    /// If `self` carries the context's failure (absence or a failure
    /// value), the failure propagates and `next` is not returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::typeclass::Monad;
    /// use fallibars::control::Maybe;
    ///
    /// let y = Maybe::some(5).then(Maybe::some("hello"));
    /// assert_eq!(y, Maybe::some("hello"));
    ///
    /// let z: Maybe<i32> = Maybe::none();
    /// assert_eq!(z.then(Maybe::some("hello")), Maybe::none());
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

#[cfg(feature = "control")]
impl<A> Monad for Maybe<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        // Delegate to Maybe's built-in flat_map
        Self::flat_map(self, function)
    }
}

// =============================================================================
// Fallible<F, S> Implementation
// =============================================================================

#[cfg(feature = "control")]
impl<F: Clone, S> Monad for Fallible<F, S> {
    #[inline]
    fn flat_map<B, G>(self, function: G) -> Fallible<F, B>
    where
        G: FnOnce(S) -> Fallible<F, B>,
    {
        // Delegate to Fallible's built-in flat_map
        Self::flat_map(self, function)
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Monad for Identity<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> Identity<B>,
    {
        function(self.0)
    }
}
