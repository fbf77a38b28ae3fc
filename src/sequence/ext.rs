//! Iterator adaptors.

use std::iter::FusedIterator;

use crate::control::Maybe;

/// Extension methods for iterators.
///
/// `SequenceExt` is blanket-implemented for every iterator. The adaptors
/// are lazy: nothing runs until the pipeline is consumed, either by a
/// collector or by [`for_each_drain`](SequenceExt::for_each_drain).
///
/// # Examples
///
/// ```
/// use fallibars::sequence::SequenceExt;
///
/// let mut log = Vec::new();
/// vec![1, 2, 3]
///     .into_iter()
///     .tap_each(|value| log.push(*value))
///     .for_each_drain();
/// assert_eq!(log, vec![1, 2, 3]);
/// ```
pub trait SequenceExt: Iterator + Sized {
    /// Prepends a single item to the iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use fallibars::sequence::SequenceExt;
    ///
    /// let items: Vec<i32> = vec![2, 3].into_iter().start_with(1).collect();
    /// assert_eq!(items, vec![1, 2, 3]);
    /// ```
    fn start_with(self, item: Self::Item) -> StartWith<Self> {
        StartWith {
            first: Some(item),
            rest: self,
        }
    }

    /// Yields overlapping (previous, current) pairs.
    ///
    /// An iterator of fewer than two elements yields nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use fallibars::sequence::SequenceExt;
    ///
    /// let pairs: Vec<(i32, i32)> = vec![1, 2, 3].into_iter().pairwise().collect();
    /// assert_eq!(pairs, vec![(1, 2), (2, 3)]);
    /// ```
    fn pairwise(self) -> Pairwise<Self>
    where
        Self::Item: Clone,
    {
        Pairwise {
            previous: None,
            inner: self,
        }
    }

    /// Zips with two other iterables into triples, stopping at the
    /// shortest.
    ///
    /// # Examples
    ///
    /// ```
    /// use fallibars::sequence::SequenceExt;
    ///
    /// let zipped: Vec<(i32, char, &str)> = vec![1, 2]
    ///     .into_iter()
    ///     .zip3(vec!['a', 'b'], vec!["x", "y"])
    ///     .collect();
    /// assert_eq!(zipped, vec![(1, 'a', "x"), (2, 'b', "y")]);
    /// ```
    fn zip3<B, C>(self, second: B, third: C) -> Zip3<Self, B::IntoIter, C::IntoIter>
    where
        B: IntoIterator,
        C: IntoIterator,
    {
        Zip3 {
            first: self,
            second: second.into_iter(),
            third: third.into_iter(),
        }
    }

    /// Zips with three other iterables into quadruples, stopping at the
    /// shortest.
    fn zip4<B, C, D>(
        self,
        second: B,
        third: C,
        fourth: D,
    ) -> Zip4<Self, B::IntoIter, C::IntoIter, D::IntoIter>
    where
        B: IntoIterator,
        C: IntoIterator,
        D: IntoIterator,
    {
        Zip4 {
            first: self,
            second: second.into_iter(),
            third: third.into_iter(),
            fourth: fourth.into_iter(),
        }
    }

    /// Runs a side effect on each element as it passes through.
    ///
    /// The action runs lazily, at the moment an element is consumed
    /// downstream, not when the adaptor is built.
    ///
    /// # Examples
    ///
    /// ```
    /// use fallibars::sequence::SequenceExt;
    ///
    /// let mut total = 0;
    /// let doubled: Vec<i32> = vec![1, 2, 3]
    ///     .into_iter()
    ///     .tap_each(|value| total += value)
    ///     .map(|value| value * 2)
    ///     .collect();
    /// assert_eq!(doubled, vec![2, 4, 6]);
    /// assert_eq!(total, 6);
    /// ```
    fn tap_each<A>(self, action: A) -> TapEach<Self, A>
    where
        A: FnMut(&Self::Item),
    {
        TapEach {
            inner: self,
            action,
        }
    }

    /// Drives the iterator to completion, discarding every element.
    ///
    /// Lazy adaptors like [`tap_each`](SequenceExt::tap_each) run their
    /// side effects only when something consumes the pipeline; this is
    /// the terminal step that does so.
    fn for_each_drain(self) {
        for _ in self {}
    }

    /// Returns the first element, or none when the iterator is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use fallibars::control::Maybe;
    /// use fallibars::sequence::SequenceExt;
    ///
    /// assert_eq!(vec![7, 8].into_iter().first_or_none(), Maybe::some(7));
    /// assert_eq!(std::iter::empty::<i32>().first_or_none(), Maybe::none());
    /// ```
    fn first_or_none(mut self) -> Maybe<Self::Item> {
        Maybe::from_option(self.next())
    }

    /// Concatenates string-like elements with a separator.
    ///
    /// # Examples
    ///
    /// ```
    /// use fallibars::sequence::SequenceExt;
    ///
    /// let joined = vec!["crisp", "dry", "cold"].into_iter().join_strings(", ");
    /// assert_eq!(joined, "crisp, dry, cold");
    /// ```
    fn join_strings(self, separator: &str) -> String
    where
        Self::Item: AsRef<str>,
    {
        let mut joined = String::new();
        for (index, item) in self.enumerate() {
            if index > 0 {
                joined.push_str(separator);
            }
            joined.push_str(item.as_ref());
        }
        joined
    }
}

impl<I: Iterator> SequenceExt for I {}

/// Iterator returned by [`SequenceExt::start_with`].
#[derive(Clone, Debug)]
pub struct StartWith<I: Iterator> {
    first: Option<I::Item>,
    rest: I,
}

impl<I: Iterator> Iterator for StartWith<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        match self.first.take() {
            Some(item) => Some(item),
            None => self.rest.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let prepended = usize::from(self.first.is_some());
        let (lower, upper) = self.rest.size_hint();
        (
            lower.saturating_add(prepended),
            upper.and_then(|bound| bound.checked_add(prepended)),
        )
    }
}

impl<I: FusedIterator> FusedIterator for StartWith<I> {}

/// Iterator returned by [`SequenceExt::pairwise`].
#[derive(Clone, Debug)]
pub struct Pairwise<I: Iterator> {
    previous: Option<I::Item>,
    inner: I,
}

impl<I> Iterator for Pairwise<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = (I::Item, I::Item);

    fn next(&mut self) -> Option<Self::Item> {
        if self.previous.is_none() {
            self.previous = self.inner.next();
        }
        let previous = self.previous.take()?;
        let current = self.inner.next()?;
        self.previous = Some(current.clone());
        Some((previous, current))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.inner.size_hint();
        if self.previous.is_some() {
            (lower, upper)
        } else {
            (
                lower.saturating_sub(1),
                upper.map(|bound| bound.saturating_sub(1)),
            )
        }
    }
}

impl<I> FusedIterator for Pairwise<I>
where
    I: FusedIterator,
    I::Item: Clone,
{
}

/// Iterator returned by [`SequenceExt::zip3`].
#[derive(Clone, Debug)]
pub struct Zip3<A, B, C> {
    first: A,
    second: B,
    third: C,
}

impl<A, B, C> Iterator for Zip3<A, B, C>
where
    A: Iterator,
    B: Iterator,
    C: Iterator,
{
    type Item = (A::Item, B::Item, C::Item);

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.first.next()?;
        let second = self.second.next()?;
        let third = self.third.next()?;
        Some((first, second, third))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (first_lower, first_upper) = self.first.size_hint();
        let (second_lower, second_upper) = self.second.size_hint();
        let (third_lower, third_upper) = self.third.size_hint();

        let lower = first_lower.min(second_lower).min(third_lower);
        let upper = [first_upper, second_upper, third_upper]
            .into_iter()
            .flatten()
            .min();
        (lower, upper)
    }
}

/// Iterator returned by [`SequenceExt::zip4`].
#[derive(Clone, Debug)]
pub struct Zip4<A, B, C, D> {
    first: A,
    second: B,
    third: C,
    fourth: D,
}

impl<A, B, C, D> Iterator for Zip4<A, B, C, D>
where
    A: Iterator,
    B: Iterator,
    C: Iterator,
    D: Iterator,
{
    type Item = (A::Item, B::Item, C::Item, D::Item);

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.first.next()?;
        let second = self.second.next()?;
        let third = self.third.next()?;
        let fourth = self.fourth.next()?;
        Some((first, second, third, fourth))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (first_lower, first_upper) = self.first.size_hint();
        let (second_lower, second_upper) = self.second.size_hint();
        let (third_lower, third_upper) = self.third.size_hint();
        let (fourth_lower, fourth_upper) = self.fourth.size_hint();

        let lower = first_lower
            .min(second_lower)
            .min(third_lower)
            .min(fourth_lower);
        let upper = [first_upper, second_upper, third_upper, fourth_upper]
            .into_iter()
            .flatten()
            .min();
        (lower, upper)
    }
}

/// Iterator returned by [`SequenceExt::tap_each`].
#[derive(Clone)]
pub struct TapEach<I, A> {
    inner: I,
    action: A,
}

impl<I, A> Iterator for TapEach<I, A>
where
    I: Iterator,
    A: FnMut(&I::Item),
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let item = self.inner.next()?;
        (self.action)(&item);
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I, A> FusedIterator for TapEach<I, A>
where
    I: FusedIterator,
    A: FnMut(&I::Item),
{
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_start_with_prepends_item() {
        let items: Vec<i32> = vec![2, 3].into_iter().start_with(1).collect();
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn test_start_with_on_empty_iterator() {
        let items: Vec<i32> = std::iter::empty().start_with(9).collect();
        assert_eq!(items, vec![9]);
    }

    #[test]
    fn test_start_with_size_hint_counts_prefix() {
        let sequence = vec![2, 3].into_iter().start_with(1);
        assert_eq!(sequence.size_hint(), (3, Some(3)));
    }

    #[test]
    fn test_pairwise_yields_overlapping_pairs() {
        let pairs: Vec<(char, char)> = "abcd".chars().pairwise().collect();
        assert_eq!(pairs, vec![('a', 'b'), ('b', 'c'), ('c', 'd')]);
    }

    #[test]
    fn test_pairwise_needs_two_elements() {
        let none: Vec<(i32, i32)> = std::iter::once(1).pairwise().collect();
        assert!(none.is_empty());

        let empty: Vec<(i32, i32)> = std::iter::empty().pairwise().collect();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_zip3_stops_at_shortest() {
        let zipped: Vec<(i32, char, &str)> = vec![1, 2, 3]
            .into_iter()
            .zip3(vec!['a', 'b'], vec!["x", "y", "z"])
            .collect();
        assert_eq!(zipped, vec![(1, 'a', "x"), (2, 'b', "y")]);
    }

    #[test]
    fn test_zip4_stops_at_shortest() {
        let zipped: Vec<(i32, i32, i32, i32)> = vec![1, 2]
            .into_iter()
            .zip4(vec![10, 20], vec![100, 200], vec![1000])
            .collect();
        assert_eq!(zipped, vec![(1, 10, 100, 1000)]);
    }

    #[test]
    fn test_tap_each_is_lazy() {
        let taps = Cell::new(0);
        let tapped = [1, 2, 3].iter().tap_each(|_| taps.set(taps.get() + 1));
        assert_eq!(taps.get(), 0);

        let collected: Vec<&i32> = tapped.collect();
        assert_eq!(taps.get(), 3);
        assert_eq!(collected, vec![&1, &2, &3]);
    }

    #[test]
    fn test_tap_each_sees_elements_in_order() {
        let mut log = Vec::new();
        vec!["one", "two"]
            .into_iter()
            .tap_each(|word| log.push(*word))
            .for_each_drain();
        assert_eq!(log, vec!["one", "two"]);
    }

    #[test]
    fn test_first_or_none() {
        assert_eq!(vec![5, 6].into_iter().first_or_none(), Maybe::some(5));
        assert_eq!(
            std::iter::empty::<i32>().first_or_none(),
            Maybe::<i32>::none()
        );
    }

    #[test]
    fn test_join_strings_with_separator() {
        let joined = vec!["a", "b", "c"].into_iter().join_strings("-");
        assert_eq!(joined, "a-b-c");
    }

    #[test]
    fn test_join_strings_edge_shapes() {
        assert_eq!(std::iter::empty::<&str>().join_strings(", "), "");
        assert_eq!(std::iter::once("solo").join_strings(", "), "solo");

        let owned = vec![String::from("x"), String::from("y")];
        assert_eq!(owned.into_iter().join_strings(""), "xy");
    }
}
