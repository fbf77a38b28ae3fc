//! Identity wrapper type - the identity functor.
//!
//! This module provides the `Identity` type, the simplest possible
//! wrapper around a value. It adds no behavior of its own, which makes
//! it the reference model when checking that type class implementations
//! obey their laws.

use super::TypeConstructor;

/// The identity functor - wraps a value without adding any behavior.
///
/// Every type class operation on `Identity` is plain function
/// application, so any law that fails here signals a broken law test
/// rather than a broken instance.
///
/// # Examples
///
/// ```rust
/// use fallibars::typeclass::Identity;
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.into_inner(), 42);
///
/// // Using the tuple-struct syntax
/// let wrapped = Identity(42);
/// assert_eq!(wrapped.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Identity` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> TypeConstructor for Identity<A> {
    type Inner = A;
    type WithType<B> = Identity<B>;
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}
