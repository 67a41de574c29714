//! Batches delimited by conditions on the elements.
//!
//! Each selector is a small state machine over a fused source: it remembers whether a batch is
//! open and, where needed, the element that opens the next batch.  Elements outside of any batch
//! are skipped.

use std::iter::{Fuse, FusedIterator};

/// Batches that each begin at an element satisfying a condition.
///
/// A batch runs until the next element satisfying the condition, which opens the following batch.
/// Elements before the first opening element are skipped.  The opening element is included in its
/// batch only if requested; otherwise a batch may be empty.
///
/// Returned by [`SequenceExt::split_at_start`](`crate::SequenceExt::split_at_start`).
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct SplitAtStart<I, F>
where
    I: Iterator,
{
    iter: Fuse<I>,
    start: F,
    keep_start: bool,
    pending: Option<I::Item>,
}

impl<I, F> SplitAtStart<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item) -> bool,
{
    /// Create a selector that opens a batch at each element satisfying `start`.
    pub fn new(iter: I, start: F, keep_start: bool) -> Self {
        Self {
            iter: iter.fuse(),
            start,
            keep_start,
            pending: None,
        }
    }
}

impl<I, F> Iterator for SplitAtStart<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item) -> bool,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let opening = match self.pending.take() {
            Some(opening) => opening,
            None => {
                let start = &mut self.start;
                self.iter.by_ref().find(|element| start(element))?
            }
        };

        let mut batch = Vec::new();
        if self.keep_start {
            batch.push(opening);
        }
        for element in self.iter.by_ref() {
            if (self.start)(&element) {
                self.pending = Some(element);
                break;
            }
            batch.push(element);
        }
        Some(batch)
    }
}

impl<I, F> FusedIterator for SplitAtStart<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item) -> bool,
{
}

/// Batches opened by one condition and closed by another.
///
/// Elements between a closing element and the next opening element are skipped.  The opening and
/// closing elements are included only if requested.  If the sequence ends while a batch is open,
/// the batch is produced as it stands.
///
/// Returned by [`SequenceExt::between`](`crate::SequenceExt::between`).
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Between<I, S, E> {
    iter: Fuse<I>,
    start: S,
    end: E,
    keep_start: bool,
    keep_end: bool,
}

impl<I, S, E> Between<I, S, E>
where
    I: Iterator,
    S: FnMut(&I::Item) -> bool,
    E: FnMut(&I::Item) -> bool,
{
    /// Create a selector of batches from an element satisfying `start` to one satisfying `end`.
    pub fn new(iter: I, start: S, end: E, keep_start: bool, keep_end: bool) -> Self {
        Self {
            iter: iter.fuse(),
            start,
            end,
            keep_start,
            keep_end,
        }
    }
}

impl<I, S, E> Iterator for Between<I, S, E>
where
    I: Iterator,
    S: FnMut(&I::Item) -> bool,
    E: FnMut(&I::Item) -> bool,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = &mut self.start;
        let opening = self.iter.by_ref().find(|element| start(element))?;

        let mut batch = Vec::new();
        if self.keep_start {
            batch.push(opening);
        }
        for element in self.iter.by_ref() {
            if (self.end)(&element) {
                if self.keep_end {
                    batch.push(element);
                }
                break;
            }
            batch.push(element);
        }
        Some(batch)
    }
}

impl<I, S, E> FusedIterator for Between<I, S, E>
where
    I: Iterator,
    S: FnMut(&I::Item) -> bool,
    E: FnMut(&I::Item) -> bool,
{
}

/// Batches of a fixed size, each opened by an element satisfying a condition.
///
/// The opening element counts towards the size only if it is included.  Elements after a full
/// batch are skipped until the next opening element.  If the sequence ends while a batch is open,
/// the batch is produced as it stands.
///
/// Returned by [`SequenceExt::counted_from`](`crate::SequenceExt::counted_from`).
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct CountedFrom<I, F> {
    iter: Fuse<I>,
    start: F,
    size: usize,
    keep_start: bool,
}

impl<I, F> CountedFrom<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item) -> bool,
{
    /// Create a selector of `size`-element batches opened by elements satisfying `start`.
    pub fn new(iter: I, start: F, size: usize, keep_start: bool) -> Self {
        Self {
            iter: iter.fuse(),
            start,
            size,
            keep_start,
        }
    }
}

impl<I, F> Iterator for CountedFrom<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item) -> bool,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = &mut self.start;
        let opening = self.iter.by_ref().find(|element| start(element))?;

        let mut batch = Vec::with_capacity(self.size);
        if self.keep_start && self.size > 0 {
            batch.push(opening);
        }
        let remaining = self.size - batch.len();
        batch.extend(self.iter.by_ref().take(remaining));
        Some(batch)
    }
}

impl<I, F> FusedIterator for CountedFrom<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item) -> bool,
{
}
