//! Extension trait providing the sequence adapters as methods.

use crate::{
    basic::RepeatEach,
    batch::{Batches, StrictBatches},
    combine::{Compress, Gate},
    multiplex::{sync, unsync},
    select::{Between, CountedFrom, SplitAtStart},
};
use std::iter::StepBy;

/// Extension trait for [`Iterator`] adding the adapters in this crate.
pub trait SequenceExt: Iterator {
    /// Split this sequence into `copies` independent copies for use on this thread.
    ///
    /// See [`unsync::multiplex`].
    ///
    /// ```
    /// use runnel::SequenceExt;
    ///
    /// let mut copies = "abc".chars().multiplex(2);
    /// let second: String = copies.pop().unwrap().collect();
    /// let first: String = copies.pop().unwrap().collect();
    /// assert_eq!(first, "abc");
    /// assert_eq!(second, "abc");
    /// ```
    fn multiplex(self, copies: usize) -> Vec<unsync::Branch<Self>>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        unsync::multiplex(self, copies)
    }

    /// Split this sequence into `copies` independent copies that may be sent between threads.
    ///
    /// See [`sync::multiplex`].
    fn multiplex_sync(self, copies: usize) -> Vec<sync::Branch<Self>>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        sync::multiplex(self, copies)
    }

    /// Yield every element `times` times.
    fn repeat_each(self, times: usize) -> RepeatEach<Self>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        RepeatEach::new(self, times)
    }

    /// Yield every `step`-th element, starting with the first.
    ///
    /// This is [`Iterator::step_by`].
    ///
    /// # Panics
    /// If `step` is zero.
    fn thin(self, step: usize) -> StepBy<Self>
    where
        Self: Sized,
    {
        self.step_by(step)
    }

    /// Split into batches of `size` elements, the last of which may be short.
    fn batches(self, size: usize) -> Batches<Self>
    where
        Self: Sized,
    {
        Batches::new(self, size)
    }

    /// Split into batches of exactly `size` elements, failing on a short final batch.
    fn strict_batches(self, size: usize) -> StrictBatches<Self>
    where
        Self: Sized,
    {
        StrictBatches::new(self, size)
    }

    /// Split into batches that each begin at an element satisfying `start`.
    ///
    /// ```
    /// use runnel::SequenceExt;
    ///
    /// let lines = ["# a", "1", "2", "# b", "3"];
    /// let sections: Vec<_> = lines
    ///     .into_iter()
    ///     .split_at_start(|line| line.starts_with('#'), false)
    ///     .collect();
    /// assert_eq!(sections, [vec!["1", "2"], vec!["3"]]);
    /// ```
    fn split_at_start<F>(self, start: F, keep_start: bool) -> SplitAtStart<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> bool,
    {
        SplitAtStart::new(self, start, keep_start)
    }

    /// Select batches opened by `start` and closed by `end`.
    fn between<S, E>(
        self,
        start: S,
        end: E,
        keep_start: bool,
        keep_end: bool,
    ) -> Between<Self, S, E>
    where
        Self: Sized,
        S: FnMut(&Self::Item) -> bool,
        E: FnMut(&Self::Item) -> bool,
    {
        Between::new(self, start, end, keep_start, keep_end)
    }

    /// Select batches of `size` elements opened by `start`.
    fn counted_from<F>(self, start: F, size: usize, keep_start: bool) -> CountedFrom<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> bool,
    {
        CountedFrom::new(self, start, size, keep_start)
    }

    /// Keep the elements whose paired `selector` value is `true`.
    fn compress<S>(self, selector: S) -> Compress<Self, S::IntoIter>
    where
        Self: Sized,
        S: IntoIterator<Item = bool>,
    {
        Compress::new(self, selector.into_iter())
    }

    /// Take the next element every time `gate` produces `true`.
    fn gate<S>(self, gate: S) -> Gate<Self, S::IntoIter>
    where
        Self: Sized,
        S: IntoIterator<Item = bool>,
    {
        Gate::new(self, gate.into_iter())
    }
}

impl<I> SequenceExt for I where I: Iterator {}
