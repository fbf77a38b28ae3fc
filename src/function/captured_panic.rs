//! An owned panic payload.

use std::any::Any;
use std::fmt;
use std::panic::resume_unwind;

use crate::control::{Either, Maybe};

/// A panic payload captured by a catch-all guard.
///
/// Rust panics carry an arbitrary payload of type `Box<dyn Any + Send>`:
/// `panic!("text")` raises a `&str`, `panic!("{value}")` raises a
/// `String`, and [`std::panic::panic_any`] raises whatever value it is
/// given. `CapturedPanic` owns such a payload after the unwind has been
/// stopped, so handlers can read its message or recover the typed value.
///
/// # Examples
///
/// ```
/// use fallibars::control::Maybe;
/// use fallibars::function::{CapturedPanic, FunctionBuilder};
///
/// let failing = FunctionBuilder::new(|_: i32| -> i32 { panic!("wires crossed") });
/// let captured = failing.catch_all().invoke(0).get_failure();
///
/// let message = captured.and_then(|panic| panic.message().map(str::to_string));
/// assert_eq!(message, Maybe::some("wires crossed".to_string()));
/// ```
pub struct CapturedPanic {
    /// The payload the panic was raised with.
    payload: Box<dyn Any + Send>,
}

impl CapturedPanic {
    /// Wraps a raw panic payload.
    ///
    /// Besides the guards in this module, payloads also come out of
    /// [`std::panic::catch_unwind`] and `JoinHandle::join`, so external
    /// callers can wrap those results too.
    ///
    /// # Examples
    ///
    /// ```
    /// use fallibars::control::Maybe;
    /// use fallibars::function::CapturedPanic;
    ///
    /// let panic = CapturedPanic::new(Box::new("stored"));
    /// assert_eq!(panic.message(), Maybe::some("stored"));
    /// ```
    pub fn new(payload: Box<dyn Any + Send>) -> Self {
        Self { payload }
    }

    /// Reads the payload as text, when it has a textual form.
    ///
    /// `panic!` raises `&str` or `String` payloads depending on whether
    /// the message is formatted; both surface here. Payloads raised via
    /// [`std::panic::panic_any`] with any other type produce none.
    ///
    /// # Examples
    ///
    /// ```
    /// use fallibars::control::Maybe;
    /// use fallibars::function::CapturedPanic;
    ///
    /// let textual = CapturedPanic::new(Box::new(String::from("boom")));
    /// assert_eq!(textual.message(), Maybe::some("boom"));
    ///
    /// let opaque = CapturedPanic::new(Box::new(404_u16));
    /// assert_eq!(opaque.message(), Maybe::none());
    /// ```
    pub fn message(&self) -> Maybe<&str> {
        if let Some(text) = self.payload.downcast_ref::<&str>() {
            Maybe::some(*text)
        } else if let Some(text) = self.payload.downcast_ref::<String>() {
            Maybe::some(text.as_str())
        } else {
            Maybe::none()
        }
    }

    /// Recovers the typed payload, consuming the capture.
    ///
    /// Returns `Right` with the payload when it is exactly an `E`, or
    /// `Left` with the capture unchanged so another type can be tried.
    ///
    /// # Examples
    ///
    /// ```
    /// use fallibars::control::Maybe;
    /// use fallibars::function::CapturedPanic;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct Diagnostic(u32);
    ///
    /// let panic = CapturedPanic::new(Box::new(Diagnostic(7)));
    /// assert_eq!(panic.downcast::<Diagnostic>().get_right(), Maybe::some(Diagnostic(7)));
    /// ```
    pub fn downcast<E: Any>(self) -> Either<Self, E> {
        match self.payload.downcast::<E>() {
            Ok(payload) => Either::Right(*payload),
            Err(payload) => Either::Left(Self { payload }),
        }
    }

    /// Borrows the typed payload without consuming the capture.
    ///
    /// # Examples
    ///
    /// ```
    /// use fallibars::control::Maybe;
    /// use fallibars::function::CapturedPanic;
    ///
    /// let panic = CapturedPanic::new(Box::new(9_i64));
    /// assert_eq!(panic.downcast_ref::<i64>(), Maybe::some(&9));
    /// assert_eq!(panic.downcast_ref::<u8>(), Maybe::none());
    /// ```
    pub fn downcast_ref<E: Any>(&self) -> Maybe<&E> {
        Maybe::from_option(self.payload.downcast_ref::<E>())
    }

    /// Unwraps the raw payload.
    pub fn into_payload(self) -> Box<dyn Any + Send> {
        self.payload
    }

    /// Continues unwinding with the captured payload.
    ///
    /// Use this when a handler inspects a panic and decides not to absorb
    /// it after all. The panic hook does not run again.
    pub fn resume(self) -> ! {
        resume_unwind(self.payload)
    }
}

impl fmt::Debug for CapturedPanic {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Maybe::Some(text) => formatter.debug_tuple("CapturedPanic").field(&text).finish(),
            Maybe::None => formatter.write_str("CapturedPanic(..)"),
        }
    }
}

// The payload moves between threads but is not shareable.
static_assertions::assert_impl_all!(CapturedPanic: Send);
static_assertions::assert_not_impl_any!(CapturedPanic: Sync);
