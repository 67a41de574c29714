#![cfg(feature = "sampler")]
#![cfg_attr(docsrs, doc(cfg(feature = "sampler")))]
//! Stratified sampling from several class sequences.
//!
//! Each sample holds a fixed number of elements from every class, in random order.
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use runnel::sampler::class_sampler;
//!
//! let classes = vec![vec!['a'; 4].into_iter(), vec!['b'; 8].into_iter()];
//! let samples: Vec<_> = class_sampler(classes, &[1, 2], StdRng::seed_from_u64(7)).collect();
//! assert_eq!(samples.len(), 4);
//! for sample in samples {
//!     assert_eq!(sample.iter().filter(|c| **c == 'a').count(), 1);
//!     assert_eq!(sample.iter().filter(|c| **c == 'b').count(), 2);
//! }
//! ```

use crate::{
    batch::Batches,
    combine::{switch, Switch},
};
use rand::{seq::SliceRandom, Rng};
use std::iter::Flatten;

/// An endless sequence of shuffled class indices.
///
/// Every item holds `counts[k]` copies of each class index `k`, in a uniformly random order.
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct SampleIndices<R> {
    pool: Vec<usize>,
    rng: R,
}

impl<R> SampleIndices<R>
where
    R: Rng,
{
    /// Create a sequence of shuffled class indices.
    pub fn new(counts: &[usize], rng: R) -> Self {
        let pool = counts
            .iter()
            .enumerate()
            .flat_map(|(class, count)| std::iter::repeat(class).take(*count))
            .collect();
        Self { pool, rng }
    }

    /// Return the number of indices in each item.
    pub fn sample_size(&self) -> usize {
        self.pool.len()
    }
}

impl<R> Iterator for SampleIndices<R>
where
    R: Rng,
{
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut sample = self.pool.clone();
        sample.shuffle(&mut self.rng);
        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Samples produced by [`class_sampler`].
pub type ClassSampler<I, R> = Batches<Switch<I, Flatten<SampleIndices<R>>>>;

/// Draw samples holding `counts[k]` elements of `classes[k]` for every class `k`.
///
/// Elements within a sample appear in random order.  Sampling ends when a class runs out; the
/// final sample may then be incomplete.
///
/// # Panics
/// If `counts` and `classes` have different lengths, or if `counts` sums to zero.
pub fn class_sampler<I, R>(classes: Vec<I>, counts: &[usize], rng: R) -> ClassSampler<I, R>
where
    I: Iterator,
    R: Rng,
{
    assert_eq!(classes.len(), counts.len(), "every class needs a count");
    let indices = SampleIndices::new(counts, rng);
    let size = indices.sample_size();
    assert!(size > 0, "samples must contain at least one element");
    log::debug!("sampling {} classes, {} elements per sample", counts.len(), size);
    Batches::new(switch(classes, indices.flatten()), size)
}
