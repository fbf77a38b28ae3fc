//! Type class traits for functional programming abstractions.
//!
//! This module provides the fundamental type classes (traits) that form
//! the foundation of functional programming in Rust:
//!
//! - [`Functor`]: Mapping over container values
//! - [`Applicative`]: Applying functions within containers
//! - [`Monad`]: Sequencing computations with dependency
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! This library uses Generic Associated Types (GAT) to emulate HKT
//! behavior, allowing us to define traits like Functor and Monad
//! in a generic way.
//!
//! ## Foundation Types
//!
//! - [`TypeConstructor`]: Trait for emulating higher-kinded types
//! - [`Identity`]: Identity wrapper type (identity functor)
//!
//! ## Instances
//!
//! With the `control` feature enabled, `Maybe<T>` and `Fallible<F, S>`
//! implement the full hierarchy. `Fallible` is biased toward its
//! success channel, so mapping and binding leave failures untouched.
//! `Either` deliberately implements none of these traits: its sides
//! carry no convention about which one mapping should favor.
//!
//! # Examples
//!
//! ## Using Functor
//!
//! ```rust
//! use fallibars::typeclass::Functor;
//! use fallibars::control::Maybe;
//!
//! let present = Maybe::some(21);
//! assert_eq!(present.fmap(|x| x * 2), Maybe::some(42));
//! ```
//!
//! ## Using Applicative
//!
//! ```rust
//! use fallibars::typeclass::Applicative;
//! use fallibars::control::Maybe;
//!
//! // Lifting a pure value
//! let x: Maybe<i32> = <Maybe<()>>::pure(42);
//! assert_eq!(x, Maybe::some(42));
//!
//! // Combining two Maybe values
//! let sum = Maybe::some(1).map2(Maybe::some(2), |x, y| x + y);
//! assert_eq!(sum, Maybe::some(3));
//! ```
//!
//! ## Using Monad
//!
//! ```rust
//! use fallibars::typeclass::Monad;
//! use fallibars::control::Fallible;
//!
//! let outcome: Fallible<String, i32> = Fallible::success(5);
//! let chained = outcome.flat_map(|n| Fallible::success(n * 2));
//! assert_eq!(chained, Fallible::success(10));
//! ```

mod applicative;
mod functor;
mod higher;
mod identity;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use identity::Identity;
pub use monad::Monad;
