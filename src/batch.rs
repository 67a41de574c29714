//! Fixed-size batching.

use crate::error::BatchError;
use std::iter::{Fuse, FusedIterator};

/// Splits a sequence into batches of a fixed size.
///
/// The final batch contains whatever is left over, and may be smaller than the others.  Returned
/// by [`SequenceExt::batches`](`crate::SequenceExt::batches`).
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Batches<I> {
    iter: Fuse<I>,
    size: usize,
}

impl<I> Batches<I>
where
    I: Iterator,
{
    /// Create a sequence of batches of `size` elements.
    ///
    /// # Panics
    /// If `size` is zero.
    pub fn new(iter: I, size: usize) -> Self {
        assert!(size > 0, "batch size must be nonzero");
        Self {
            iter: iter.fuse(),
            size,
        }
    }

    /// Return the batch size.
    pub fn size(&self) -> usize {
        self.size
    }
}

impl<I> Iterator for Batches<I>
where
    I: Iterator,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let batch: Vec<_> = self.iter.by_ref().take(self.size).collect();
        if batch.is_empty() {
            None
        } else {
            Some(batch)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        let batches = |len: usize| len.div_ceil(self.size);
        (batches(lower), upper.map(batches))
    }
}

impl<I> FusedIterator for Batches<I> where I: Iterator {}

/// Splits a sequence into batches of exactly one size.
///
/// If the sequence ends partway through a batch, the left over elements are discarded and an
/// error is produced instead.  Returned by
/// [`SequenceExt::strict_batches`](`crate::SequenceExt::strict_batches`).
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct StrictBatches<I> {
    batches: Batches<I>,
}

impl<I> StrictBatches<I>
where
    I: Iterator,
{
    /// Create a sequence of batches of exactly `size` elements.
    ///
    /// # Panics
    /// If `size` is zero.
    pub fn new(iter: I, size: usize) -> Self {
        Self {
            batches: Batches::new(iter, size),
        }
    }
}

impl<I> Iterator for StrictBatches<I>
where
    I: Iterator,
{
    type Item = Result<Vec<I::Item>, BatchError>;

    fn next(&mut self) -> Option<Self::Item> {
        let batch = self.batches.next()?;
        if batch.len() == self.batches.size() {
            Some(Ok(batch))
        } else {
            Some(Err(BatchError {
                expected: self.batches.size(),
                actual: batch.len(),
            }))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.batches.size_hint()
    }
}

impl<I> FusedIterator for StrictBatches<I> where I: Iterator {}
