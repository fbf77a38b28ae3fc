//! Helper functions (combinators) for function composition.
//!
//! This module provides fundamental combinators used throughout the crate:
//!
//! - [`identity`]: The identity function (I combinator)
//! - [`constant`]: Creates a function that always returns the same value (K combinator)
//! - [`flip`]: Swaps the arguments of a binary function (C combinator)
//! - [`then`]: Left-to-right composition of exactly two functions
//! - [`Pipe`]: Method-position application for every sized type

/// Returns the value unchanged.
///
/// The identity function is the unit element of composition:
/// `then(identity, f)` and `then(f, identity)` behave exactly like `f`.
///
/// In combinatory logic, this is known as the I combinator.
///
/// # Examples
///
/// ```
/// use fallibars::compose::identity;
///
/// assert_eq!(identity(7), 7);
/// assert_eq!(identity("unchanged"), "unchanged");
/// ```
///
/// # Use with composition
///
/// ```
/// use fallibars::compose::{identity, then};
///
/// fn double(x: i32) -> i32 { x * 2 }
///
/// let composed = then(identity, double);
/// assert_eq!(composed(5), double(5));
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring its input.
///
/// Known as the K combinator in combinatory logic. Useful whenever an API
/// wants a function but the result does not depend on the input.
///
/// # Type Parameters
///
/// * `T` - The type of the constant value (must implement [`Clone`])
/// * `U` - The input type of the returned function (ignored)
///
/// # Examples
///
/// ```
/// use fallibars::compose::constant;
///
/// let always_zero = constant::<_, &str>(0);
/// assert_eq!(always_zero("anything"), 0);
/// assert_eq!(always_zero("else"), 0);
/// ```
///
/// # Use with iterators
///
/// ```
/// use fallibars::compose::constant;
///
/// // Replace every element with a blank
/// let blanks: Vec<&str> = vec![1, 2, 3].into_iter().map(constant("")).collect();
/// assert_eq!(blanks, vec!["", "", ""]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
///
/// Given a function `f(a, b)`, returns a new function `g(b, a)` such that
/// `g(b, a) = f(a, b)`. Known as the C combinator in combinatory logic.
///
/// # Laws
///
/// - **Double flip identity**: `flip(flip(f)) == f`
/// - **Flip definition**: `flip(f)(a, b) == f(b, a)`
///
/// # Examples
///
/// ```
/// use fallibars::compose::flip;
///
/// fn repeat(text: &str, times: usize) -> String {
///     text.repeat(times)
/// }
///
/// let flipped_repeat = flip(repeat);
/// assert_eq!(flipped_repeat(3, "ab"), "ababab");
/// ```
///
/// # Double flip is identity
///
/// ```
/// use fallibars::compose::flip;
///
/// fn subtract(minuend: i32, subtrahend: i32) -> i32 {
///     minuend - subtrahend
/// }
///
/// let flipped_twice = flip(flip(subtract));
/// assert_eq!(subtract(10, 3), flipped_twice(10, 3));
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}

/// Composes two functions left to right.
///
/// `then(f, g)` returns a function that applies `f` first and `g` to its
/// result: `then(f, g)(x) == g(f(x))`. This is the named, two-function
/// form of [`pipe!`](crate::pipe!), handy where a macro invocation cannot
/// go, such as building a pipeline incrementally across statements.
///
/// # Laws
///
/// - **Associativity**: `then(then(f, g), h)` behaves like `then(f, then(g, h))`
/// - **Identity**: `then(identity, f)` and `then(f, identity)` behave like `f`
///
/// # Examples
///
/// ```
/// use fallibars::compose::then;
///
/// fn double(x: i32) -> i32 { x * 2 }
/// fn describe(x: i32) -> String { format!("got {x}") }
///
/// let pipeline = then(double, describe);
/// assert_eq!(pipeline(21), "got 42");
/// ```
#[inline]
pub fn then<A, B, C, F, G>(first: F, second: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |input| second(first(input))
}

/// Method-position function application for any sized type.
///
/// `Pipe` is blanket-implemented for every sized type, so any value can be
/// threaded through free functions with method syntax. This reads like the
/// [`pipe!`](crate::pipe!) macro but mixes naturally with other method
/// calls in a chain.
///
/// # Examples
///
/// ```
/// use fallibars::compose::Pipe;
///
/// fn double(x: i32) -> i32 { x * 2 }
///
/// let result = 21.pipe(double).pipe(|x| x + 1);
/// assert_eq!(result, 43);
/// ```
pub trait Pipe: Sized {
    /// Applies `function` to `self`, returning the result.
    ///
    /// # Examples
    ///
    /// ```
    /// use fallibars::compose::Pipe;
    ///
    /// let length = "pipeline".pipe(str::len);
    /// assert_eq!(length, 8);
    /// ```
    #[inline]
    fn pipe<Output, Function>(self, function: Function) -> Output
    where
        Function: FnOnce(Self) -> Output,
    {
        function(self)
    }

    /// Runs `action` on a reference to `self` and returns `self` unchanged.
    ///
    /// Useful for observing an intermediate value in the middle of a
    /// pipeline without breaking the chain.
    ///
    /// # Examples
    ///
    /// ```
    /// use fallibars::compose::Pipe;
    ///
    /// let mut seen = Vec::new();
    /// let result = 5.tee(|value| seen.push(*value)).pipe(|x| x * 10);
    /// assert_eq!(result, 50);
    /// assert_eq!(seen, vec![5]);
    /// ```
    #[inline]
    fn tee<Action>(self, action: Action) -> Self
    where
        Action: FnOnce(&Self),
    {
        action(&self);
        self
    }
}

impl<T> Pipe for T {}
