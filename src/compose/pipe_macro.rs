//! The `pipe!` macro for left-to-right function application.
//!
//! This module provides the [`pipe!`] macro which threads a value through
//! a series of functions in the order they are written.

/// Pipes a value through a series of functions from left to right.
///
/// `pipe!(x, f, g, h)` is equivalent to `h(g(f(x)))`.
///
/// The value flows through the transformations in reading order, which
/// matches the mental model of a data pipeline. Use
/// [`compose!`](crate::compose!) when you want a reusable function instead
/// of an immediate result.
///
/// # Syntax
///
/// - `pipe!(x)` - Returns `x` unchanged
/// - `pipe!(x, f)` - Returns `f(x)`
/// - `pipe!(x, f, g)` - Returns `g(f(x))`
/// - `pipe!(x, f, g, h, ...)` - Returns `...h(g(f(x)))`
///
/// # Type Requirements
///
/// Each function only needs to implement [`FnOnce`]: every step is called
/// exactly once, so closures that consume their captured environment work.
///
/// # Examples
///
/// ## Basic pipeline
///
/// ```
/// use fallibars::pipe;
///
/// fn increment(x: i32) -> i32 { x + 1 }
/// fn triple(x: i32) -> i32 { x * 3 }
///
/// // triple(4) = 12, increment(12) = 13
/// let result = pipe!(4, triple, increment);
/// assert_eq!(result, 13);
/// ```
///
/// ## Pipeline with type changes
///
/// ```
/// use fallibars::pipe;
///
/// fn words(input: &str) -> Vec<&str> {
///     input.split_whitespace().collect()
/// }
/// fn count(items: Vec<&str>) -> usize { items.len() }
///
/// let result = pipe!("the quick brown fox", words, count);
/// assert_eq!(result, 4);
/// ```
///
/// ## With consuming closures
///
/// ```
/// use fallibars::pipe;
///
/// let suffix = String::from("!");
/// let shout = move |text: String| text + &suffix;
///
/// let result = pipe!(String::from("go"), |text: String| text.to_uppercase(), shout);
/// assert_eq!(result, "GO!");
/// ```
///
/// ## Equivalence with compose
///
/// ```
/// use fallibars::{compose, pipe};
///
/// fn f(x: i32) -> i32 { x + 1 }
/// fn g(x: i32) -> i32 { x * 2 }
///
/// assert_eq!(pipe!(10, f, g), compose!(g, f)(10));
/// ```
#[macro_export]
macro_rules! pipe {
    // Value only: return as is
    ($value:expr) => {
        $value
    };

    // Single function: apply it
    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    // Multiple functions: apply left to right recursively
    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipe!($function($value), $($remaining_functions),+)
    };
}
