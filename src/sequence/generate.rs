//! Lazy sequence generators.

use std::iter::FusedIterator;

/// Creates an infinite iterator of repeated function applications.
///
/// The first element is `seed` itself; each following element applies
/// `propagate` to the previous one. Nothing is computed until the iterator
/// is driven, so the endless sequence is safe to build and truncate later.
///
/// # Examples
///
/// ```
/// use fallibars::sequence::unfold;
///
/// let powers: Vec<u32> = unfold(1_u32, |value| value * 2).take(5).collect();
/// assert_eq!(powers, vec![1, 2, 4, 8, 16]);
/// ```
pub fn unfold<T, F>(seed: T, propagate: F) -> Unfold<T, F>
where
    T: Clone,
    F: FnMut(&T) -> T,
{
    Unfold {
        current: seed,
        propagate,
        started: false,
    }
}

/// Iterator returned by [`unfold`].
#[derive(Clone)]
pub struct Unfold<T, F> {
    current: T,
    propagate: F,
    started: bool,
}

impl<T, F> Iterator for Unfold<T, F>
where
    T: Clone,
    F: FnMut(&T) -> T,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.started {
            self.current = (self.propagate)(&self.current);
        } else {
            self.started = true;
        }
        Some(self.current.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<T, F> FusedIterator for Unfold<T, F>
where
    T: Clone,
    F: FnMut(&T) -> T,
{
}

/// Creates an infinite iterator that yields clones of one value.
///
/// # Examples
///
/// ```
/// use fallibars::sequence::repeat_forever;
///
/// let fives: Vec<i32> = repeat_forever(5).take(3).collect();
/// assert_eq!(fives, vec![5, 5, 5]);
/// ```
pub fn repeat_forever<T: Clone>(value: T) -> RepeatForever<T> {
    RepeatForever { value }
}

/// Iterator returned by [`repeat_forever`].
#[derive(Clone, Debug)]
pub struct RepeatForever<T> {
    value: T,
}

impl<T: Clone> Iterator for RepeatForever<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        Some(self.value.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<T: Clone> FusedIterator for RepeatForever<T> {}
