//! Control structures for functional programming.
//!
//! This module provides the core value types that make absence and
//! failure explicit:
//!
//! - [`Maybe`]: An optional value with total, explicit consumption
//! - [`Either`]: A value that is exactly one of two types
//! - [`Fallible`]: A failed-or-succeeded computation result
//! - [`Unit`]: The zero-sized "no information" value
//!
//! # Examples
//!
//! ## Optional Values
//!
//! ```rust
//! use fallibars::control::Maybe;
//!
//! let doubled = Maybe::some(21).map(|x| x * 2);
//! assert_eq!(doubled, Maybe::some(42));
//!
//! let absent: Maybe<i32> = Maybe::none();
//! assert_eq!(absent.map(|x| x * 2), Maybe::none());
//! ```
//!
//! ## Failure Propagation
//!
//! ```rust
//! use fallibars::control::Fallible;
//!
//! fn parse(input: &str) -> Fallible<String, i32> {
//!     input.parse::<i32>().map_or_else(
//!         |_| Fallible::failure(format!("not a number: {input}")),
//!         Fallible::success,
//!     )
//! }
//!
//! let result = parse("21").map(|x| x * 2);
//! assert_eq!(result, Fallible::success(42));
//!
//! let failed = parse("twenty-one").map(|x| x * 2);
//! assert!(failed.is_failure());
//! ```

mod either;
mod fallible;
mod maybe;
mod unit;

pub use either::Either;
pub use fallible::Fallible;
pub use maybe::Maybe;
pub use unit::Unit;
