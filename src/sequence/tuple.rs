//! Tuple growth sugar.

/// Appends one item to a tuple, producing the next-larger tuple.
///
/// Useful when a pipeline accumulates results step by step and wants to
/// keep every intermediate value without nesting pairs.
///
/// # Examples
///
/// ```
/// use fallibars::sequence::TupleAppend;
///
/// let pair = (1, "two");
/// let triple = pair.append(3.0);
/// assert_eq!(triple, (1, "two", 3.0));
///
/// let quadruple = triple.append('4');
/// assert_eq!(quadruple, (1, "two", 3.0, '4'));
/// ```
pub trait TupleAppend<T> {
    /// The tuple type with `T` appended at the end.
    type Output;

    /// Moves `item` into the last position of the grown tuple.
    fn append(self, item: T) -> Self::Output;
}

impl<A, B, T> TupleAppend<T> for (A, B) {
    type Output = (A, B, T);

    fn append(self, item: T) -> (A, B, T) {
        (self.0, self.1, item)
    }
}

impl<A, B, C, T> TupleAppend<T> for (A, B, C) {
    type Output = (A, B, C, T);

    fn append(self, item: T) -> (A, B, C, T) {
        (self.0, self.1, self.2, item)
    }
}
