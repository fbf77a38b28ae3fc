//! Functor type class - mapping over container values.
//!
//! This module provides the `Functor` trait, which represents types that
//! can have a function applied to their inner value while preserving the
//! structure: an absent `Maybe` stays absent, a failed `Fallible` stays
//! failed with the same failure.
//!
//! # Laws
//!
//! All `Functor` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! Mapping the identity function over a functor should return an equivalent functor:
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! Mapping two functions in sequence should be equivalent to mapping their composition:
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fallibars::typeclass::Functor;
//! use fallibars::control::Maybe;
//!
//! let present: Maybe<i32> = Maybe::some(5);
//! let transformed: Maybe<String> = present.fmap(|n| n.to_string());
//! assert_eq!(transformed, Maybe::some("5".to_string()));
//!
//! // Absence is preserved
//! let absent: Maybe<i32> = Maybe::none();
//! let transformed: Maybe<String> = absent.fmap(|n| n.to_string());
//! assert_eq!(transformed, Maybe::none());
//! ```

use super::higher::TypeConstructor;
use super::identity::Identity;

#[cfg(feature = "control")]
use crate::control::{Fallible, Maybe};

/// A type class for types that can have a function mapped over their contents.
///
/// `Functor` represents the ability to apply a function to the value
/// inside a container while preserving the container's structure. The
/// structure-preservation is what distinguishes it from an arbitrary
/// transformation: mapping never turns presence into absence or success
/// into failure.
///
/// # Laws
///
/// ## Identity Law
///
/// Mapping the identity function returns an equivalent functor:
///
/// ```text
/// fa.fmap(|x| x) == fa
/// ```
///
/// ## Composition Law
///
/// Mapping composed functions is equivalent to mapping them in sequence:
///
/// ```text
/// fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
/// ```
///
/// # Examples
///
/// ```rust
/// use fallibars::typeclass::Functor;
/// use fallibars::control::Maybe;
///
/// let x: Maybe<i32> = Maybe::some(5);
/// let y: Maybe<String> = x.fmap(|n| n.to_string());
/// assert_eq!(y, Maybe::some("5".to_string()));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that transforms the inner value
    ///
    /// # Returns
    ///
    /// A new functor with the transformed value
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::typeclass::Functor;
    /// use fallibars::control::Maybe;
    ///
    /// let x: Maybe<i32> = Maybe::some(5);
    /// let y: Maybe<i32> = x.fmap(|n| n * 2);
    /// assert_eq!(y, Maybe::some(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B + 'static,
        B: 'static;

    /// Applies a function to a reference of the value inside the functor.
    ///
    /// This method is useful when you want to transform the functor's
    /// contents without consuming it.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that takes a reference to the inner value
    ///
    /// # Returns
    ///
    /// A new functor with the transformed value
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::typeclass::Functor;
    /// use fallibars::control::Maybe;
    ///
    /// let x: Maybe<String> = Maybe::some("hello".to_string());
    /// let y: Maybe<usize> = x.fmap_ref(|s| s.len());
    /// assert_eq!(y, Maybe::some(5));
    /// // x is still available here
    /// assert!(x.is_some());
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B + 'static,
        B: 'static;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// This is equivalent to `fmap(|_| value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::typeclass::Functor;
    /// use fallibars::control::Maybe;
    ///
    /// let x: Maybe<i32> = Maybe::some(5);
    /// assert_eq!(x.replace("replaced"), Maybe::some("replaced"));
    ///
    /// let y: Maybe<i32> = Maybe::none();
    /// assert_eq!(y.replace("replaced"), Maybe::none());
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: 'static,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    ///
    /// Useful when only the shape of the container matters.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::typeclass::Functor;
    /// use fallibars::control::Maybe;
    ///
    /// let x: Maybe<i32> = Maybe::some(5);
    /// assert_eq!(x.void(), Maybe::some(()));
    /// ```
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

#[cfg(feature = "control")]
impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

// =============================================================================
// Fallible<F, S> Implementation
// =============================================================================

#[cfg(feature = "control")]
impl<F: Clone, S> Functor for Fallible<F, S> {
    #[inline]
    fn fmap<B, G>(self, function: G) -> Fallible<F, B>
    where
        G: FnOnce(S) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, G>(&self, function: G) -> Fallible<F, B>
    where
        G: FnOnce(&S) -> B,
    {
        self.as_ref().fold(
            |failure| Fallible::failure(failure.clone()),
            |success| Fallible::success(function(success)),
        )
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Functor for Identity<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        Identity(function(self.0))
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Identity<B>
    where
        F: FnOnce(&A) -> B,
    {
        Identity(function(&self.0))
    }
}
