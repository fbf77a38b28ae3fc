//! Applicative type class - applying functions within contexts.
//!
//! This module provides the `Applicative` trait, which extends `Functor`
//! with the ability to:
//!
//! - Lift pure values into the applicative context (`pure`)
//! - Combine multiple applicative values using a function (`map2`, `map3`)
//! - Create tuples of applicative values (`product`)
//!
//! `Applicative` is more powerful than `Functor` because it allows
//! combining multiple independent computations within the same context:
//! two `Maybe`s combine into a present value only when both are present,
//! two `Fallible`s only when both succeeded.
//!
//! # Laws
//!
//! All `Applicative` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! pure(compose).apply(u).apply(v).apply(w) == u.apply(v.apply(w))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fallibars::typeclass::Applicative;
//! use fallibars::control::Maybe;
//!
//! // Lifting a pure value into the Maybe context
//! let x: Maybe<i32> = <Maybe<()>>::pure(42);
//! assert_eq!(x, Maybe::some(42));
//!
//! // Combining two Maybe values
//! let a = Maybe::some(1);
//! let b = Maybe::some(2);
//! let c = a.map2(b, |x, y| x + y);
//! assert_eq!(c, Maybe::some(3));
//!
//! // Creating a tuple of values
//! let x = Maybe::some(1);
//! let y = Maybe::some("hello");
//! assert_eq!(x.product(y), Maybe::some((1, "hello")));
//! ```

use super::functor::Functor;
use super::identity::Identity;

#[cfg(feature = "control")]
use crate::control::{Fallible, Maybe};

/// A type class for types that support lifting values and combining contexts.
///
/// `Applicative` extends `Functor` with the ability to:
///
/// - Lift any value into the context using `pure`
/// - Combine multiple values in the context using `map2`
///
/// # Laws
///
/// ## Identity Law
///
/// ```text
/// pure(|x| x).apply(v) == v
/// ```
///
/// ## Homomorphism Law
///
/// ```text
/// pure(f).apply(pure(x)) == pure(f(x))
/// ```
///
/// ## Interchange Law
///
/// ```text
/// u.apply(pure(y)) == pure(|f| f(y)).apply(u)
/// ```
///
/// ## Composition Law
///
/// ```text
/// pure(compose).apply(u).apply(v).apply(w) == u.apply(v.apply(w))
/// ```
///
/// # Examples
///
/// ```rust
/// use fallibars::typeclass::Applicative;
/// use fallibars::control::Maybe;
///
/// let a = Maybe::some(3);
/// let b = Maybe::some(4);
/// let sum = a.map2(b, |x, y| x + y);
/// assert_eq!(sum, Maybe::some(7));
/// ```
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// # Arguments
    ///
    /// * `value` - The value to lift into the context
    ///
    /// # Returns
    ///
    /// The value wrapped in the applicative context
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::typeclass::Applicative;
    /// use fallibars::control::{Fallible, Maybe};
    ///
    /// let x: Maybe<i32> = <Maybe<()>>::pure(42);
    /// assert_eq!(x, Maybe::some(42));
    ///
    /// let y: Fallible<String, i32> = <Fallible<String, ()>>::pure(42);
    /// assert_eq!(y, Fallible::success(42));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// If either value carries the context's notion of failure (absence
    /// for `Maybe`, a failure for `Fallible`), the combination does too
    /// and the function never runs.
    ///
    /// # Arguments
    ///
    /// * `other` - The second applicative value
    /// * `function` - A function that takes both inner values and produces a result
    ///
    /// # Returns
    ///
    /// An applicative containing the result of applying the function
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::typeclass::Applicative;
    /// use fallibars::control::Maybe;
    ///
    /// let sum = Maybe::some(1).map2(Maybe::some(2), |x, y| x + y);
    /// assert_eq!(sum, Maybe::some(3));
    ///
    /// let stopped = Maybe::some(1).map2(Maybe::<i32>::none(), |x, y| x + y);
    /// assert_eq!(stopped, Maybe::none());
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three applicative values using a ternary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::typeclass::Applicative;
    /// use fallibars::control::Maybe;
    ///
    /// let sum = Maybe::some(1).map3(Maybe::some(2), Maybe::some(3), |x, y, z| x + y + z);
    /// assert_eq!(sum, Maybe::some(6));
    /// ```
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Combines two applicative values into a tuple.
    ///
    /// This is equivalent to `map2(other, |a, b| (a, b))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::typeclass::Applicative;
    /// use fallibars::control::Maybe;
    ///
    /// let a = Maybe::some(1);
    /// let b = Maybe::some("hello");
    /// assert_eq!(a.product(b), Maybe::some((1, "hello")));
    /// ```
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Evaluates two applicatives and returns the left value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::typeclass::Applicative;
    /// use fallibars::control::Maybe;
    ///
    /// assert_eq!(Maybe::some(1).product_left(Maybe::some(2)), Maybe::some(1));
    /// assert_eq!(Maybe::some(1).product_left(Maybe::<i32>::none()), Maybe::none());
    /// ```
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Evaluates two applicatives and returns the right value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::typeclass::Applicative;
    /// use fallibars::control::Maybe;
    ///
    /// assert_eq!(Maybe::some(1).product_right(Maybe::some(2)), Maybe::some(2));
    /// assert_eq!(Maybe::<i32>::none().product_right(Maybe::some(2)), Maybe::none());
    /// ```
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }

    /// Applies a function inside the context to a value inside the context.
    ///
    /// This method is available when `Self` contains a function type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::typeclass::Applicative;
    /// use fallibars::control::Maybe;
    ///
    /// let function: Maybe<fn(i32) -> i32> = Maybe::some(|x| x + 1);
    /// let value = Maybe::some(5);
    /// assert_eq!(function.apply(value), Maybe::some(6));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

#[cfg(feature = "control")]
impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Maybe::Some(a), Maybe::Some(b)) => Maybe::Some(function(a, b)),
            _ => Maybe::None,
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Maybe<B>, third: Maybe<C>, function: F) -> Maybe<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Maybe::Some(a), Maybe::Some(b), Maybe::Some(c)) => Maybe::Some(function(a, b, c)),
            _ => Maybe::None,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Maybe<B>) -> Maybe<Output>
    where
        A: FnOnce(B) -> Output,
    {
        match (self, other) {
            (Maybe::Some(function), Maybe::Some(b)) => Maybe::Some(function(b)),
            _ => Maybe::None,
        }
    }
}

// =============================================================================
// Fallible<F, S> Implementation
//
// The first failure wins when both sides failed.
// =============================================================================

#[cfg(feature = "control")]
impl<F: Clone, S> Applicative for Fallible<F, S> {
    #[inline]
    fn pure<B>(value: B) -> Fallible<F, B> {
        Fallible::success(value)
    }

    #[inline]
    fn map2<B, C, G>(self, other: Fallible<F, B>, function: G) -> Fallible<F, C>
    where
        G: FnOnce(S, B) -> C,
    {
        self.flat_map(|a| other.map(|b| function(a, b)))
    }

    #[inline]
    fn map3<B, C, D, G>(
        self,
        second: Fallible<F, B>,
        third: Fallible<F, C>,
        function: G,
    ) -> Fallible<F, D>
    where
        G: FnOnce(S, B, C) -> D,
    {
        self.flat_map(|a| second.flat_map(|b| third.map(|c| function(a, b, c))))
    }

    #[inline]
    fn apply<B, Output>(self, other: Fallible<F, B>) -> Fallible<F, Output>
    where
        S: FnOnce(B) -> Output,
    {
        self.flat_map(|function| other.map(function))
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Applicative for Identity<A> {
    #[inline]
    fn pure<B>(value: B) -> Identity<B> {
        Identity(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Identity<B>, function: F) -> Identity<C>
    where
        F: FnOnce(A, B) -> C,
    {
        Identity(function(self.0, other.0))
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Identity<B>,
        third: Identity<C>,
        function: F,
    ) -> Identity<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        Identity(function(self.0, second.0, third.0))
    }

    #[inline]
    fn apply<B, Output>(self, other: Identity<B>) -> Identity<Output>
    where
        A: FnOnce(B) -> Output,
    {
        Identity((self.0)(other.0))
    }
}

#[cfg(all(test, feature = "control"))]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn maybe_pure_lifts_value() {
        let x: Maybe<i32> = <Maybe<()>>::pure(42);
        assert_eq!(x, Maybe::some(42));
    }

    #[rstest]
    fn maybe_map2_requires_both_present() {
        assert_eq!(Maybe::some(1).map2(Maybe::some(2), |x, y| x + y), Maybe::some(3));
        assert_eq!(
            Maybe::some(1).map2(Maybe::<i32>::none(), |x, y| x + y),
            Maybe::none()
        );
        assert_eq!(
            Maybe::<i32>::none().map2(Maybe::some(2), |x, y| x + y),
            Maybe::none()
        );
    }

    #[rstest]
    fn maybe_map3_requires_all_present() {
        let sum = Maybe::some(1).map3(Maybe::some(2), Maybe::some(3), |x, y, z| x + y + z);
        assert_eq!(sum, Maybe::some(6));

        let stopped = Maybe::some(1).map3(Maybe::<i32>::none(), Maybe::some(3), |x, y, z| {
            x + y + z
        });
        assert_eq!(stopped, Maybe::none());
    }

    #[rstest]
    fn maybe_product_pairs_values() {
        assert_eq!(
            Maybe::some(1).product(Maybe::some("hello")),
            Maybe::some((1, "hello"))
        );
    }

    #[rstest]
    fn fallible_map2_keeps_first_failure() {
        let first: Fallible<String, i32> = Fallible::failure("first".to_string());
        let second: Fallible<String, i32> = Fallible::failure("second".to_string());
        let combined = first.map2(second, |x, y| x + y);
        assert_eq!(combined, Fallible::failure("first".to_string()));
    }

    #[rstest]
    fn fallible_map2_combines_successes() {
        let first: Fallible<String, i32> = Fallible::success(1);
        let second: Fallible<String, i32> = Fallible::success(2);
        assert_eq!(first.map2(second, |x, y| x + y), Fallible::success(3));
    }

    /// Homomorphism law: pure(f).apply(pure(x)) == pure(f(x))
    #[rstest]
    fn maybe_homomorphism_law() {
        let function = |x: i32| x + 1;
        let left: Maybe<i32> = <Maybe<()>>::pure(function).apply(<Maybe<()>>::pure(5));
        let right: Maybe<i32> = <Maybe<()>>::pure(function(5));
        assert_eq!(left, right);
    }

    /// Identity law through Identity, the reference model.
    #[rstest]
    fn identity_apply_is_application() {
        let function = Identity::new(|x: i32| x * 2);
        assert_eq!(function.apply(Identity::new(21)), Identity::new(42));
    }
}
