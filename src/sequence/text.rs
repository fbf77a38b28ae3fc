//! Text boundary helpers.

use crate::control::Maybe;

/// Converts the empty string to none and any other text to an owned some.
///
/// The empty string often stands in for missing input at the edges of a
/// program; this adapter turns that convention into an explicit
/// [`Maybe`] as early as possible. Whitespace is not trimmed.
///
/// # Examples
///
/// ```
/// use fallibars::control::Maybe;
/// use fallibars::sequence::none_if_empty;
///
/// assert_eq!(none_if_empty("reply"), Maybe::some("reply".to_string()));
/// assert_eq!(none_if_empty(""), Maybe::none());
/// assert_eq!(none_if_empty(" "), Maybe::some(" ".to_string()));
/// ```
pub fn none_if_empty(text: &str) -> Maybe<String> {
    if text.is_empty() {
        Maybe::none()
    } else {
        Maybe::some(text.to_string())
    }
}
