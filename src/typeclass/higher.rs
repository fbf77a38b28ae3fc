//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! This module provides the foundation for emulating Higher-Kinded Types
//! (HKT) in Rust using Generic Associated Types (GAT). This is what lets
//! the type class traits abstract over `Maybe<_>` and `Fallible<F, _>`
//! as type constructors rather than concrete types.
//!
//! # Background
//!
//! Rust cannot express a trait over a bare type constructor such as
//! `Maybe<_>`; every mention of a type must be fully applied. The
//! workaround is an associated type family: each container names its
//! current element type and how to rebuild itself around a new one.
//!
//! # Example
//!
//! ```rust
//! use fallibars::typeclass::TypeConstructor;
//! use fallibars::control::Maybe;
//!
//! // Maybe implements TypeConstructor
//! fn rebuild_empty<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let numbers: Maybe<i32> = Maybe::some(42);
//! let text: Maybe<String> = rebuild_empty(numbers);
//! assert_eq!(text, Maybe::none());
//! ```

#[cfg(feature = "control")]
use crate::control::{Fallible, Maybe};

/// A trait representing a type constructor.
///
/// This trait emulates Higher-Kinded Types (HKT) using Generic
/// Associated Types. It allows abstracting over type constructors like
/// `Maybe<_>` or `Fallible<F, _>` so that [`Functor`](super::Functor)
/// and its descendants can be written once for every container.
///
/// # Associated Types
///
/// - `Inner`: The type parameter this constructor is currently applied to.
/// - `WithType<B>`: The same constructor applied to a different type `B`.
///
/// # Laws
///
/// For any `F: TypeConstructor`:
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` should be
///    equivalent to `F` (up to type equality).
///
/// # Example
///
/// ```rust
/// use fallibars::typeclass::TypeConstructor;
/// use fallibars::control::Maybe;
///
/// fn example<T: TypeConstructor<Inner = i32>>() {
///     // T::WithType<String> is the same constructor holding String
/// }
///
/// example::<Maybe<i32>>();
/// ```
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For example, for `Maybe<i32>`, this would be `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// For example, for `Maybe<i32>`, `WithType<String>` would be
    /// `Maybe<String>`. For `Fallible<F, S>` the failure type rides
    /// along unchanged, exactly as an error type does in `Result`.
    ///
    /// The constraint `TypeConstructor<Inner = B>` ensures that the
    /// resulting type is itself a valid type constructor, so
    /// transformations can be chained.
    type WithType<B>: TypeConstructor<Inner = B>;
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

#[cfg(feature = "control")]
impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

// =============================================================================
// Fallible<F, S> Implementation
//
// Biased toward the success channel: rebuilding around a new type keeps
// the failure type fixed.
// =============================================================================

#[cfg(feature = "control")]
impl<F, S> TypeConstructor for Fallible<F, S> {
    type Inner = S;
    type WithType<B> = Fallible<F, B>;
}
