//! Element-by-element sequence adapters.

use std::iter::{Fuse, FusedIterator};

/// Repeats every element of a sequence.
///
/// Returned by [`SequenceExt::repeat_each`](`crate::SequenceExt::repeat_each`).
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct RepeatEach<I>
where
    I: Iterator,
{
    iter: Fuse<I>,
    times: usize,
    current: Option<I::Item>,
    remaining: usize,
}

impl<I> RepeatEach<I>
where
    I: Iterator,
    I::Item: Clone,
{
    /// Create a sequence that yields every element of `iter` `times` times.
    ///
    /// If `times` is zero, every element is skipped.
    pub fn new(iter: I, times: usize) -> Self {
        Self {
            iter: iter.fuse(),
            times,
            current: None,
            remaining: 0,
        }
    }

    /// Return the original sequence.
    ///
    /// Any repetitions of the current element that were not yet produced are lost.
    pub fn into_inner(self) -> Fuse<I> {
        self.iter
    }
}

impl<I> Iterator for RepeatEach<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.remaining {
                0 => {
                    self.current = Some(self.iter.next()?);
                    self.remaining = self.times;
                }
                // move the element out on its last repetition
                1 => {
                    self.remaining = 0;
                    return self.current.take();
                }
                _ => {
                    self.remaining -= 1;
                    return self.current.clone();
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        (
            lower.saturating_mul(self.times).saturating_add(self.remaining),
            upper
                .and_then(|upper| upper.checked_mul(self.times))
                .and_then(|upper| upper.checked_add(self.remaining)),
        )
    }
}

impl<I> FusedIterator for RepeatEach<I>
where
    I: Iterator,
    I::Item: Clone,
{
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeats() {
        let repeated: Vec<_> = RepeatEach::new("ab".chars(), 3).collect();
        assert_eq!(repeated, ['a', 'a', 'a', 'b', 'b', 'b']);
    }

    #[test]
    fn zero_times_skips_everything() {
        let mut repeated = RepeatEach::new(0..5, 0);
        assert_eq!(repeated.next(), None);
        assert_eq!(repeated.size_hint(), (0, Some(0)));
    }

    #[test]
    fn size_hint_counts_pending_repetitions() {
        let mut repeated = RepeatEach::new(0..4, 2);
        assert_eq!(repeated.size_hint(), (8, Some(8)));
        repeated.next();
        assert_eq!(repeated.size_hint(), (7, Some(7)));
    }
}
