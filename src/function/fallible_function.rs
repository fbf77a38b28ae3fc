//! The guarded function wrapper.

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind, resume_unwind};

use crate::control::Fallible;

use super::captured_panic::CapturedPanic;

/// A wrapped function whose invocations report failures as values.
///
/// `FallibleFunction<In, F, S>` wraps a `Fn(In) -> Fallible<F, S>`.
/// Instances usually come from [`FunctionBuilder::catch`] or
/// [`FunctionBuilder::catch_all`], which attach the first panic guard;
/// further guards layer on with [`catch`](FallibleFunction::catch).
///
/// Guards are matched in declaration order. The first guard sits directly
/// around the raw function and sees a panic first; every later guard wraps
/// the ones declared before it and is consulted only when the payload has
/// resumed unwinding past them. A failure produced by an earlier guard is
/// an ordinary return value by the time a later guard runs, so it is never
/// rewritten.
///
/// # Type Parameters
///
/// - `In`: The input type of the wrapped function.
/// - `F`: The failure type invocations report.
/// - `S`: The success type invocations report.
///
/// [`FunctionBuilder::catch`]: super::FunctionBuilder::catch
/// [`FunctionBuilder::catch_all`]: super::FunctionBuilder::catch_all
///
/// # Examples
///
/// ```
/// use fallibars::control::Fallible;
/// use fallibars::function::FunctionBuilder;
/// use std::panic::panic_any;
///
/// #[derive(Debug, PartialEq)]
/// struct Underflow;
///
/// let decrement = FunctionBuilder::new(|value: u32| {
///     if value == 0 {
///         panic_any(Underflow);
///     }
///     value - 1
/// });
///
/// let guarded = decrement.catch::<Underflow>();
/// assert_eq!(guarded.invoke(3), Fallible::success(2));
/// assert_eq!(guarded.invoke(0), Fallible::failure(Underflow));
/// ```
pub struct FallibleFunction<In, F, S> {
    /// The wrapped fallible function.
    function: Box<dyn Fn(In) -> Fallible<F, S>>,
}

impl<In: 'static, F: 'static, S: 'static> FallibleFunction<In, F, S> {
    /// Wraps a function that already reports failures as values.
    ///
    /// # Arguments
    ///
    /// * `function` - The fallible function to wrap.
    ///
    /// # Examples
    ///
    /// ```
    /// use fallibars::control::Fallible;
    /// use fallibars::function::FallibleFunction;
    ///
    /// let parse = FallibleFunction::new(|input: &str| {
    ///     Fallible::from(input.parse::<i32>().map_err(|_| "not a number"))
    /// });
    ///
    /// assert_eq!(parse.invoke("17"), Fallible::success(17));
    /// assert_eq!(parse.invoke("x"), Fallible::failure("not a number"));
    /// ```
    pub fn new<G>(function: G) -> Self
    where
        G: Fn(In) -> Fallible<F, S> + 'static,
    {
        Self {
            function: Box::new(function),
        }
    }

    /// Calls the wrapped function with `input`.
    ///
    /// Panics whose payloads match an attached guard come back as
    /// failures; a payload no guard matches keeps unwinding.
    pub fn invoke(&self, input: In) -> Fallible<F, S> {
        (self.function)(input)
    }

    /// Attaches a further guard for payloads of type `E`.
    ///
    /// The new guard wraps every guard declared before it: a panic is
    /// tested against the earlier guards first and reaches this one only
    /// by resuming past them. `convert` folds the captured payload into
    /// the existing failure type, keeping the failure channel a single
    /// closed type however many guards are attached.
    ///
    /// # Examples
    ///
    /// ```
    /// use fallibars::control::Fallible;
    /// use fallibars::function::FunctionBuilder;
    /// use std::panic::panic_any;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct TooSmall;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct TooBig;
    ///
    /// let clamp_check = FunctionBuilder::new(|value: i32| {
    ///     if value < 0 {
    ///         panic_any(TooSmall);
    ///     }
    ///     if value > 100 {
    ///         panic_any(TooBig);
    ///     }
    ///     value
    /// });
    ///
    /// let guarded = clamp_check
    ///     .catch::<TooSmall>()
    ///     .map_failure(|_| "too small".to_string())
    ///     .catch::<TooBig>(|_| "too big".to_string());
    ///
    /// assert_eq!(guarded.invoke(50), Fallible::success(50));
    /// assert_eq!(guarded.invoke(-1), Fallible::failure("too small".to_string()));
    /// assert_eq!(guarded.invoke(200), Fallible::failure("too big".to_string()));
    /// ```
    pub fn catch<E>(self, convert: impl Fn(E) -> F + 'static) -> Self
    where
        E: Any + Send,
    {
        let function = self.function;
        Self::new(move |input| {
            match catch_unwind(AssertUnwindSafe(|| function(input))) {
                Ok(outcome) => outcome,
                Err(payload) => match payload.downcast::<E>() {
                    Ok(error) => Fallible::failure(convert(*error)),
                    Err(payload) => resume_unwind(payload),
                },
            }
        })
    }

    /// Attaches a guard that captures every remaining panic.
    ///
    /// After this guard, invocations never panic: payloads the earlier
    /// guards declined arrive here as a [`CapturedPanic`] and `convert`
    /// folds them into the failure type.
    ///
    /// # Examples
    ///
    /// ```
    /// use fallibars::control::Fallible;
    /// use fallibars::function::FunctionBuilder;
    /// use std::panic::panic_any;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct Known;
    ///
    /// let failing = FunctionBuilder::new(|trigger: bool| -> i32 {
    ///     if trigger {
    ///         panic_any(Known);
    ///     }
    ///     panic!("surprise");
    /// });
    ///
    /// let guarded = failing
    ///     .catch::<Known>()
    ///     .map_failure(|_| "known".to_string())
    ///     .catch_all(|panic| panic.message().value_or("opaque").to_string());
    ///
    /// assert_eq!(guarded.invoke(true), Fallible::failure("known".to_string()));
    /// assert_eq!(guarded.invoke(false), Fallible::failure("surprise".to_string()));
    /// ```
    pub fn catch_all<G>(self, convert: G) -> Self
    where
        G: Fn(CapturedPanic) -> F + 'static,
    {
        let function = self.function;
        Self::new(move |input| {
            match catch_unwind(AssertUnwindSafe(|| function(input))) {
                Ok(outcome) => outcome,
                Err(payload) => Fallible::failure(convert(CapturedPanic::new(payload))),
            }
        })
    }

    /// Transforms the failure type of every future invocation.
    ///
    /// Successes pass through untouched. No guard is added: a panic still
    /// unwinds through this layer to whatever guard wraps it.
    ///
    /// # Examples
    ///
    /// ```
    /// use fallibars::control::Fallible;
    /// use fallibars::function::FunctionBuilder;
    /// use std::panic::panic_any;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct Empty;
    ///
    /// let first = FunctionBuilder::new(|items: Vec<i32>| {
    ///     if items.is_empty() {
    ///         panic_any(Empty);
    ///     }
    ///     items[0]
    /// });
    ///
    /// let guarded = first.catch::<Empty>().map_failure(|Empty| "empty input");
    /// assert_eq!(guarded.invoke(vec![3, 4]), Fallible::success(3));
    /// assert_eq!(guarded.invoke(vec![]), Fallible::failure("empty input"));
    /// ```
    pub fn map_failure<F2, G>(self, transform: G) -> FallibleFunction<In, F2, S>
    where
        F2: 'static,
        G: Fn(F) -> F2 + 'static,
    {
        let function = self.function;
        FallibleFunction::new(move |input| function(input).map_failure(&transform))
    }
}

// Wrapped closures are not required to be thread safe.
static_assertions::assert_not_impl_any!(FallibleFunction<i32, String, i32>: Send, Sync);
