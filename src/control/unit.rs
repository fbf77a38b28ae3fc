//! Unit type - the value that carries no information.
//!
//! This module provides the `Unit` type, a zero-sized struct with exactly
//! one value. It fills positions that demand a type but have nothing to
//! say, such as the success side of a validation or the input of a thunk.

/// The type with exactly one value, carrying no information.
///
/// `Unit` is the success payload of effect-only operations like
/// [`Fallible::validate`](super::Fallible::validate) and the input type
/// of wrapped thunks. It is a zero-sized struct, so passing it around
/// costs nothing, and every `Unit` equals every other `Unit`.
///
/// # Examples
///
/// ```rust
/// use fallibars::control::{Fallible, Unit};
///
/// let checked: Fallible<&str, Unit> = Fallible::validate(2 + 2 == 4, "arithmetic broke");
/// assert_eq!(checked, Fallible::success(Unit));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Debug)]
pub struct Unit;

impl From<()> for Unit {
    #[inline]
    fn from((): ()) -> Self {
        Self
    }
}

impl From<Unit> for () {
    #[inline]
    fn from(_: Unit) -> Self {}
}

// Static assertions to verify Unit is a zero-sized value
static_assertions::const_assert_eq!(std::mem::size_of::<Unit>(), 0);
static_assertions::assert_impl_all!(Unit: Send, Sync, Copy);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_unit_values_are_equal() {
        assert_eq!(Unit, Unit);
        assert_eq!(Unit::default(), Unit);
    }

    #[rstest]
    fn test_unit_converts_with_empty_tuple() {
        let unit: Unit = ().into();
        assert_eq!(unit, Unit);

        let (): () = Unit.into();
    }
}
