//! The unguarded function wrapper.

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind, resume_unwind};

use crate::control::{Fallible, Unit};

use super::captured_panic::CapturedPanic;
use super::fallible_function::FallibleFunction;

/// A wrapped function with no panic guard attached.
///
/// `FunctionBuilder<In, Out>` wraps a plain `Fn(In) -> Out`. Invoking it
/// runs the function as-is, so any panic raised inside propagates straight
/// to the caller. Attaching the first guard with
/// [`catch`](FunctionBuilder::catch) or
/// [`catch_all`](FunctionBuilder::catch_all) moves the function into a
/// [`FallibleFunction`], whose invocations surface captured panics as
/// [`Fallible`] failures instead.
///
/// # Type Parameters
///
/// - `In`: The input type of the wrapped function.
/// - `Out`: The output type of the wrapped function.
///
/// # Examples
///
/// ```
/// use fallibars::function::FunctionBuilder;
///
/// let double = FunctionBuilder::new(|x: i32| x * 2);
/// assert_eq!(double.invoke(21), 42);
/// ```
pub struct FunctionBuilder<In, Out> {
    /// The wrapped function.
    function: Box<dyn Fn(In) -> Out>,
}

impl<In: 'static, Out: 'static> FunctionBuilder<In, Out> {
    /// Wraps a plain function.
    ///
    /// # Arguments
    ///
    /// * `function` - The function to wrap.
    ///
    /// # Examples
    ///
    /// ```
    /// use fallibars::function::FunctionBuilder;
    ///
    /// let length = FunctionBuilder::new(|text: &str| text.len());
    /// assert_eq!(length.invoke("four"), 4);
    /// ```
    pub fn new<G>(function: G) -> Self
    where
        G: Fn(In) -> Out + 'static,
    {
        Self {
            function: Box::new(function),
        }
    }

    /// Calls the wrapped function with `input`.
    ///
    /// No guard is attached at this stage: a panic raised inside the
    /// function propagates to the caller unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use fallibars::function::FunctionBuilder;
    ///
    /// let negate = FunctionBuilder::new(|x: i32| -x);
    /// assert_eq!(negate.invoke(5), -5);
    /// assert_eq!(negate.invoke(-5), 5);
    /// ```
    pub fn invoke(&self, input: In) -> Out {
        (self.function)(input)
    }

    /// Attaches the first panic guard, producing a [`FallibleFunction`].
    ///
    /// Invocation now runs under [`std::panic::catch_unwind`]. A panic
    /// whose payload is exactly an `E` is captured as a failure; any other
    /// payload resumes unwinding. Successful outputs become successes.
    ///
    /// Later guards attach with [`FallibleFunction::catch`] and test
    /// payloads only after this one has declined them.
    ///
    /// # Examples
    ///
    /// ```
    /// use fallibars::control::Fallible;
    /// use fallibars::function::FunctionBuilder;
    /// use std::panic::panic_any;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct NotANumber(String);
    ///
    /// let parse = FunctionBuilder::new(|input: &str| match input.parse::<i32>() {
    ///     Ok(number) => number,
    ///     Err(_) => panic_any(NotANumber(input.to_string())),
    /// });
    ///
    /// let guarded = parse.catch::<NotANumber>();
    /// assert_eq!(guarded.invoke("42"), Fallible::success(42));
    /// assert_eq!(
    ///     guarded.invoke("oops"),
    ///     Fallible::failure(NotANumber("oops".to_string()))
    /// );
    /// ```
    pub fn catch<E>(self) -> FallibleFunction<In, E, Out>
    where
        E: Any + Send,
    {
        let function = self.function;
        FallibleFunction::new(move |input| {
            match catch_unwind(AssertUnwindSafe(|| function(input))) {
                Ok(output) => Fallible::success(output),
                Err(payload) => match payload.downcast::<E>() {
                    Ok(error) => Fallible::failure(*error),
                    Err(payload) => resume_unwind(payload),
                },
            }
        })
    }

    /// Attaches a guard that captures every panic.
    ///
    /// The failure type is [`CapturedPanic`], which owns whatever payload
    /// the panic was raised with. Invocations of the result never panic.
    ///
    /// # Examples
    ///
    /// ```
    /// use fallibars::control::Maybe;
    /// use fallibars::function::FunctionBuilder;
    ///
    /// let checked = FunctionBuilder::new(|x: i32| {
    ///     assert!(x != 0, "zero input");
    ///     100 / x
    /// });
    ///
    /// let guarded = checked.catch_all();
    /// assert_eq!(guarded.invoke(4).get_success(), Maybe::some(25));
    ///
    /// let message = guarded
    ///     .invoke(0)
    ///     .get_failure()
    ///     .and_then(|panic| panic.message().map(str::to_string));
    /// assert_eq!(message, Maybe::some("zero input".to_string()));
    /// ```
    pub fn catch_all(self) -> FallibleFunction<In, CapturedPanic, Out> {
        let function = self.function;
        FallibleFunction::new(move |input| {
            match catch_unwind(AssertUnwindSafe(|| function(input))) {
                Ok(output) => Fallible::success(output),
                Err(payload) => Fallible::failure(CapturedPanic::new(payload)),
            }
        })
    }
}

impl<Out: 'static> FunctionBuilder<Unit, Out> {
    /// Wraps a thunk as a function of [`Unit`].
    ///
    /// # Examples
    ///
    /// ```
    /// use fallibars::control::Unit;
    /// use fallibars::function::FunctionBuilder;
    ///
    /// let answer = FunctionBuilder::from_thunk(|| 42);
    /// assert_eq!(answer.invoke(Unit), 42);
    /// ```
    pub fn from_thunk<G>(thunk: G) -> Self
    where
        G: Fn() -> Out + 'static,
    {
        Self::new(move |_| thunk())
    }
}

impl FunctionBuilder<Unit, Unit> {
    /// Wraps a side-effecting action as a function from [`Unit`] to [`Unit`].
    ///
    /// # Examples
    ///
    /// ```
    /// use fallibars::control::Unit;
    /// use fallibars::function::FunctionBuilder;
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    ///
    /// let count = Rc::new(Cell::new(0));
    /// let shared = Rc::clone(&count);
    /// let bump = FunctionBuilder::from_action(move || shared.set(shared.get() + 1));
    ///
    /// assert_eq!(bump.invoke(Unit), Unit);
    /// bump.invoke(Unit);
    /// assert_eq!(count.get(), 2);
    /// ```
    pub fn from_action<G>(action: G) -> Self
    where
        G: Fn() + 'static,
    {
        Self::new(move |_| {
            action();
            Unit
        })
    }
}

// Wrapped closures are not required to be thread safe.
static_assertions::assert_not_impl_any!(FunctionBuilder<i32, i32>: Send, Sync);
