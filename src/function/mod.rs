//! Panic-capturing function wrappers.
//!
//! This module turns panics into [`Fallible`](crate::control::Fallible)
//! values at a controlled boundary. A function starts out unguarded as a
//! [`FunctionBuilder`]; attaching the first catch produces a
//! [`FallibleFunction`] whose invocations report captured panics as
//! failures instead of unwinding.
//!
//! # Overview
//!
//! - [`FunctionBuilder`]: wraps a plain `Fn(In) -> Out`; with no guard
//!   attached, every panic propagates to the caller
//! - [`FallibleFunction`]: wraps a `Fn(In) -> Fallible<F, S>`; captured
//!   panics surface as failures, everything else keeps unwinding
//! - [`CapturedPanic`]: an owned panic payload, for catch-all guards
//!
//! Guards are matched in the order they are declared. The first catch sits
//! directly around the raw function; every later catch wraps the guards
//! declared before it. A panic payload is therefore tested from the inside
//! out and resumes unwinding past each guard it does not match, while a
//! failure already produced by an earlier guard is never rewritten.
//!
//! # Examples
//!
//! ```
//! use fallibars::control::Fallible;
//! use fallibars::function::FunctionBuilder;
//! use std::panic::panic_any;
//!
//! #[derive(Debug, PartialEq)]
//! struct NotANumber(String);
//!
//! let parse = FunctionBuilder::new(|input: &str| match input.parse::<i32>() {
//!     Ok(number) => number,
//!     Err(_) => panic_any(NotANumber(input.to_string())),
//! });
//!
//! let guarded = parse.catch::<NotANumber>();
//! assert_eq!(guarded.invoke("42"), Fallible::success(42));
//! assert_eq!(
//!     guarded.invoke("oops"),
//!     Fallible::failure(NotANumber("oops".to_string()))
//! );
//! ```

mod builder;
mod captured_panic;
mod fallible_function;

pub use builder::FunctionBuilder;
pub use captured_panic::CapturedPanic;
pub use fallible_function::FallibleFunction;
