//! Sequences assembled from several input sequences.

use std::iter::{Fuse, FusedIterator};

/// Yields elements whose paired selector value is `true`.
///
/// An element and a selector value are always consumed together.  The sequence ends when either
/// input ends.  Returned by [`SequenceExt::compress`](`crate::SequenceExt::compress`).
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Compress<I, S> {
    iter: Fuse<I>,
    selector: Fuse<S>,
}

impl<I, S> Compress<I, S>
where
    I: Iterator,
    S: Iterator<Item = bool>,
{
    /// Create a sequence of the elements of `iter` selected by `selector`.
    pub fn new(iter: I, selector: S) -> Self {
        Self {
            iter: iter.fuse(),
            selector: selector.fuse(),
        }
    }
}

impl<I, S> Iterator for Compress<I, S>
where
    I: Iterator,
    S: Iterator<Item = bool>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let element = self.iter.next()?;
            if self.selector.next()? {
                return Some(element);
            }
        }
    }
}

impl<I, S> FusedIterator for Compress<I, S>
where
    I: Iterator,
    S: Iterator<Item = bool>,
{
}

/// Passes the next element through whenever the gate is open.
///
/// Unlike [`Compress`], the input is only consumed when the gate value is `true`, so no elements
/// are discarded.  Returned by [`SequenceExt::gate`](`crate::SequenceExt::gate`).
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Gate<I, S> {
    iter: Fuse<I>,
    gate: Fuse<S>,
}

impl<I, S> Gate<I, S>
where
    I: Iterator,
    S: Iterator<Item = bool>,
{
    /// Create a sequence that takes an element of `iter` every time `gate` produces `true`.
    pub fn new(iter: I, gate: S) -> Self {
        Self {
            iter: iter.fuse(),
            gate: gate.fuse(),
        }
    }

    /// Return the original input, with any elements not let through.
    pub fn into_inner(self) -> Fuse<I> {
        self.iter
    }
}

impl<I, S> Iterator for Gate<I, S>
where
    I: Iterator,
    S: Iterator<Item = bool>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.gate.next()? {
                return self.iter.next();
            }
        }
    }
}

impl<I, S> FusedIterator for Gate<I, S>
where
    I: Iterator,
    S: Iterator<Item = bool>,
{
}

/// Interleaves several sequences, taking one element from each in turn.
///
/// The sequence ends as soon as any input ends.
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Merge<I> {
    inputs: Vec<I>,
    turn: usize,
    done: bool,
}

/// Interleave `inputs` round-robin.
pub fn merge<I>(inputs: impl IntoIterator<Item = I>) -> Merge<I>
where
    I: Iterator,
{
    let inputs: Vec<_> = inputs.into_iter().collect();
    Merge {
        done: inputs.is_empty(),
        inputs,
        turn: 0,
    }
}

impl<I> Iterator for Merge<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let element = self.inputs[self.turn].next();
        if element.is_none() {
            self.done = true;
        }
        self.turn = (self.turn + 1) % self.inputs.len();
        element
    }
}

impl<I> FusedIterator for Merge<I> where I: Iterator {}

/// Takes each element from the input chosen by a sequence of indices.
///
/// The sequence ends when the index sequence ends or when the chosen input ends.
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Switch<I, S> {
    inputs: Vec<I>,
    switch: S,
    done: bool,
}

/// Take each element from the input in `inputs` indexed by the next value of `switch`.
///
/// # Panics
/// The returned sequence panics if `switch` produces an index out of bounds.
pub fn switch<I, S>(inputs: impl IntoIterator<Item = I>, switch: S) -> Switch<I, S>
where
    I: Iterator,
    S: Iterator<Item = usize>,
{
    Switch {
        inputs: inputs.into_iter().collect(),
        switch,
        done: false,
    }
}

impl<I, S> Switch<I, S> {
    /// Return the inputs.
    pub fn into_inner(self) -> Vec<I> {
        self.inputs
    }
}

impl<I, S> Iterator for Switch<I, S>
where
    I: Iterator,
    S: Iterator<Item = usize>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let element = match self.switch.next() {
            Some(which) => {
                let count = self.inputs.len();
                self.inputs
                    .get_mut(which)
                    .unwrap_or_else(|| panic!("switched to input `{}` of `{}`", which, count))
                    .next()
            }
            None => None,
        };
        self.done = element.is_none();
        element
    }
}

impl<I, S> FusedIterator for Switch<I, S>
where
    I: Iterator,
    S: Iterator<Item = usize>,
{
}

/// Collects the next element of every input into one bundle per round.
///
/// If some inputs end partway through a round, the bundle holding the elements gathered so far is
/// produced and the sequence ends.
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Bundle<I> {
    inputs: Vec<I>,
    done: bool,
}

/// Bundle the elements of `inputs` round by round.
pub fn bundle<I>(inputs: impl IntoIterator<Item = I>) -> Bundle<I>
where
    I: Iterator,
{
    let inputs: Vec<_> = inputs.into_iter().collect();
    Bundle {
        done: inputs.is_empty(),
        inputs,
    }
}

impl<I> Iterator for Bundle<I>
where
    I: Iterator,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut round = Vec::with_capacity(self.inputs.len());
        for input in &mut self.inputs {
            match input.next() {
                Some(element) => round.push(element),
                None => {
                    self.done = true;
                    break;
                }
            }
        }
        if round.is_empty() {
            None
        } else {
            Some(round)
        }
    }
}

impl<I> FusedIterator for Bundle<I> where I: Iterator {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compress_drops_unselected() {
        let selector = [true, false, true, true];
        let selected: Vec<_> = Compress::new(1..=6, selector.into_iter()).collect();
        assert_eq!(selected, [1, 3, 4]);
    }

    #[test]
    fn gate_keeps_unselected() {
        let mut gate = Gate::new(1..=6, [false, true, false, true].into_iter());
        assert_eq!(gate.by_ref().collect::<Vec<_>>(), [1, 2]);
        assert_eq!(gate.into_inner().collect::<Vec<_>>(), [3, 4, 5, 6]);
    }

    #[test]
    fn merge_stops_at_first_end() {
        let merged: Vec<_> = merge([vec![1, 3, 5].into_iter(), vec![2, 4].into_iter()]).collect();
        assert_eq!(merged, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn merge_nothing() {
        let mut merged = merge(Vec::<std::ops::Range<u8>>::new());
        assert_eq!(merged.next(), None);
    }

    #[test]
    fn switch_between_inputs() {
        let switched: Vec<_> = switch([0..3, 10..13], [0, 1, 1, 0, 1, 1].into_iter()).collect();
        assert_eq!(switched, [0, 10, 11, 1, 12]);
    }

    #[test]
    #[should_panic]
    fn switch_out_of_bounds() {
        let _ = switch([0..3], [1].into_iter()).next();
    }

    #[test]
    fn bundle_rounds() {
        let bundles: Vec<_> = bundle([0..3, 10..12]).collect();
        assert_eq!(bundles, [vec![0, 10], vec![1, 11], vec![2]]);

        let bundles: Vec<_> = bundle([0..2, 10..12]).collect();
        assert_eq!(bundles, [vec![0, 10], vec![1, 11]]);
    }
}
