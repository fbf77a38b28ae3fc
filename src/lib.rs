//! # fallibars
//!
//! A functional programming library for Rust providing optional values,
//! fallible results, and composable function combinators.
//!
//! ## Overview
//!
//! This library aims to make the absent-or-present and failed-or-succeeded
//! distinctions first-class values that compose. It includes:
//!
//! - **Optional Values**: `Maybe<T>` with fold, map, bind, and filtering
//! - **Disjoint Unions**: `Either<L, R>` as a minimal two-case sum
//! - **Fallible Results**: `Fallible<F, S>` with failure-propagating pipelines
//! - **Panic Capture**: function wrappers that turn typed panics into failures
//! - **Type Classes**: Functor, Applicative, Monad over the core types
//! - **Function Composition**: compose!, pipe! macros and point-free combinators
//! - **Effect Builders**: `State` threading and seeded `Random` generation
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `control`: Core value types (`Maybe`, `Either`, `Fallible`, `Unit`)
//! - `compose`: Function composition utilities
//! - `function`: Panic-capturing function wrappers
//! - `sequence`: Iterator utilities built around `Maybe`
//! - `effect`: `State` and `Random` computation builders
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fallibars::prelude::*;
//!
//! let answer = Maybe::some(21).map(|x| x * 2).value_or(0);
//! assert_eq!(answer, 42);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use fallibars::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "function")]
    pub use crate::function::*;

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "function")]
pub mod function;

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "effect")]
pub mod effect;
