//! Function composition utilities.
//!
//! This module provides macros and functions for combining small functions
//! into pipelines, enabling the point-free style common in functional
//! programming.
//!
//! # Overview
//!
//! - [`compose!`]: Compose functions right-to-left (mathematical composition)
//! - [`pipe!`]: Thread a value through functions left-to-right (data flow style)
//! - [`Pipe`]: Method-position application (`value.pipe(f)`) and side-effect
//!   taps (`value.tee(action)`) for any sized type
//!
//! # Helper Functions
//!
//! - [`identity`]: Returns its argument unchanged
//! - [`constant`]: Creates a function that always returns the same value
//! - [`flip`]: Swaps the arguments of a binary function
//! - [`then`]: Composes exactly two functions left-to-right
//!
//! # Examples
//!
//! ## Function composition (right-to-left)
//!
//! ```
//! use fallibars::compose;
//!
//! fn increment(x: i32) -> i32 { x + 1 }
//! fn triple(x: i32) -> i32 { x * 3 }
//!
//! // compose!(f, g)(x) = f(g(x))
//! let composed = compose!(increment, triple);
//! assert_eq!(composed(4), 13); // increment(triple(4)) = increment(12) = 13
//! ```
//!
//! ## Pipeline (left-to-right)
//!
//! ```
//! use fallibars::pipe;
//!
//! fn increment(x: i32) -> i32 { x + 1 }
//! fn triple(x: i32) -> i32 { x * 3 }
//!
//! // pipe!(x, f, g) = g(f(x))
//! let result = pipe!(4, triple, increment);
//! assert_eq!(result, 13);
//! ```
//!
//! ## Method-position pipelines
//!
//! ```
//! use fallibars::compose::Pipe;
//!
//! fn normalize(text: &str) -> String { text.trim().to_lowercase() }
//!
//! let result = "  MIXED Case  ".pipe(normalize).pipe(|s| s.len());
//! assert_eq!(result, 10);
//! ```
//!
//! # Mathematical Background
//!
//! Function composition creates a new function by combining two functions.
//! Given `f: B -> C` and `g: A -> B`, the composition `(f . g): A -> C` is
//! defined as:
//!
//! ```text
//! (f . g)(x) = f(g(x))
//! ```
//!
//! The [`compose!`] macro implements this right-to-left composition, while
//! [`pipe!`] and [`Pipe::pipe`] implement the reverse notation reading
//! left-to-right:
//!
//! ```text
//! x |> f |> g |> h = h(g(f(x)))
//! ```
//!
//! # Laws
//!
//! ## Composition Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Left Identity**: `compose!(identity, f) == f`
//! - **Right Identity**: `compose!(f, identity) == f`
//!
//! ## Flip Laws
//!
//! - **Double Flip Identity**: `flip(flip(f)) == f`
//! - **Flip Definition**: `flip(f)(a, b) == f(b, a)`

mod compose_macro;
mod pipe_macro;
mod utils;

// Re-export helper functions
pub use utils::{Pipe, constant, flip, identity, then};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
pub use crate::pipe;
