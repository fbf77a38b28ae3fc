//! The `compose!` macro for function composition.
//!
//! This module provides the [`compose!`] macro which composes functions
//! from right to left, following the mathematical notation.

/// Composes functions from right to left.
///
/// `compose!(f, g, h)(x)` is equivalent to `f(g(h(x)))`.
///
/// The rightmost function is applied first, matching the mathematical
/// convention for function composition. The result is a closure, so a
/// composition can be stored, passed around, and applied repeatedly.
///
/// # Laws
///
/// - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
/// - **Left Identity**: `compose!(identity, f) == f`
/// - **Right Identity**: `compose!(f, identity) == f`
///
/// # Syntax
///
/// - `compose!(f)` - Returns `f` unchanged
/// - `compose!(f, g)` - Returns `|x| f(g(x))`
/// - `compose!(f, g, h, ...)` - Composes any number of functions
///
/// # Type Requirements
///
/// All functions must implement [`Fn`], because the resulting closure may
/// be called any number of times. The output type of each function must
/// match the input type of the function to its left.
///
/// # Examples
///
/// ## Basic composition
///
/// ```
/// use fallibars::compose;
///
/// fn increment(x: i32) -> i32 { x + 1 }
/// fn triple(x: i32) -> i32 { x * 3 }
///
/// // compose!(f, g)(x) = f(g(x)) = increment(triple(4)) = 13
/// let composed = compose!(increment, triple);
/// assert_eq!(composed(4), 13);
/// ```
///
/// ## Reusing a composition
///
/// ```
/// use fallibars::compose;
///
/// fn trim(input: &str) -> &str { input.trim() }
/// fn word_count(input: &str) -> usize { input.split_whitespace().count() }
///
/// let count_trimmed = compose!(word_count, trim);
/// assert_eq!(count_trimmed("  one two  "), 2);
/// assert_eq!(count_trimmed("three"), 1);
/// ```
///
/// ## Three-function composition
///
/// ```
/// use fallibars::compose;
///
/// let halve = |x: i32| x / 2;
/// let square = |x: i32| x * x;
/// let describe = |x: i32| format!("{x}");
///
/// // describe(halve(square(6))) = describe(halve(36)) = "18"
/// let composed = compose!(describe, halve, square);
/// assert_eq!(composed(6), "18");
/// ```
///
/// ## Verifying associativity
///
/// ```
/// use fallibars::compose;
///
/// fn f(x: i32) -> i32 { x + 1 }
/// fn g(x: i32) -> i32 { x * 2 }
/// fn h(x: i32) -> i32 { x - 3 }
///
/// let left = compose!(f, compose!(g, h));
/// let right = compose!(compose!(f, g), h);
/// assert_eq!(left(10), right(10));
/// ```
#[macro_export]
macro_rules! compose {
    // Single function: identity composition
    ($function:expr) => {
        $function
    };

    // Two functions: compose!(f, g)(x) = f(g(x))
    ($outer_function:expr, $inner_function:expr $(,)?) => {{
        let outer = $outer_function;
        let inner = $inner_function;
        move |input| outer(inner(input))
    }};

    // Three or more: peel the outermost function and recurse
    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let outer = $outer_function;
        let inner_composed = $crate::compose!($($remaining_functions),+);
        move |input| outer(inner_composed(input))
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_compose_single() {
        let triple = |x: i32| x * 3;
        assert_eq!(compose!(triple)(5), 15);
    }

    #[test]
    fn test_compose_two() {
        let increment = |x: i32| x + 1;
        let triple = |x: i32| x * 3;
        // increment(triple(4)) = 13
        assert_eq!(compose!(increment, triple)(4), 13);
    }

    #[test]
    fn test_compose_applies_right_to_left() {
        let stringify = |x: i32| x.to_string();
        let double = |x: i32| x * 2;
        let length = |text: String| text.len();
        // double(50) = 100, stringify = "100", length = 3
        assert_eq!(compose!(length, stringify, double)(50), 3);
    }

    #[test]
    fn test_compose_trailing_comma() {
        let increment = |x: i32| x + 1;
        assert_eq!(compose!(increment, increment,)(0), 2);
    }
}
