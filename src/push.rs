//! Push-driven pipelines.
//!
//! Where the rest of the crate pulls elements from a source on demand, a [`Target`] has elements
//! pushed into it by its producer.  Targets compose: a [`Fanout`] hands every element to several
//! targets, and a [`Filter`] forwards only some of them.
//!
//! ```
//! use runnel::push::{feed, Fanout, Filter};
//!
//! let mut evens: Vec<u32> = Vec::new();
//! let mut all: Vec<u32> = Vec::new();
//! let mut fanout: Fanout<u32> = Fanout::new();
//! fanout.push(Filter::new(|x: &u32| x % 2 == 0, &mut evens));
//! fanout.push(&mut all);
//! feed(1..=5u32, &mut fanout);
//! drop(fanout);
//!
//! assert_eq!(evens, [2, 4]);
//! assert_eq!(all, [1, 2, 3, 4, 5]);
//! ```

/// A consumer of pushed elements.
pub trait Target<T> {
    /// Accept the next element.
    fn send(&mut self, item: T);
}

impl<T> Target<T> for Vec<T> {
    fn send(&mut self, item: T) {
        self.push(item)
    }
}

impl<T, G: ?Sized + Target<T>> Target<T> for &mut G {
    fn send(&mut self, item: T) {
        G::send(self, item)
    }
}

impl<T, G: ?Sized + Target<T>> Target<T> for Box<G> {
    fn send(&mut self, item: T) {
        G::send(self, item)
    }
}

/// Push every element of `iter` into `target`.
pub fn feed<I, G>(iter: I, mut target: G)
where
    I: IntoIterator,
    G: Target<I::Item>,
{
    for item in iter {
        target.send(item);
    }
}

/// Sends every element to each of several targets, in the order they were added.
pub struct Fanout<'a, T> {
    targets: Vec<Box<dyn Target<T> + 'a>>,
}

impl<'a, T> Fanout<'a, T> {
    /// Create a fanout without any targets.
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
        }
    }

    /// Add a target.
    pub fn push(&mut self, target: impl Target<T> + 'a) {
        self.targets.push(Box::new(target));
    }

    /// Return the number of targets.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Return true if there are no targets.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl<'a, T> Default for Fanout<'a, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T, G> FromIterator<G> for Fanout<'a, T>
where
    G: Target<T> + 'a,
{
    fn from_iter<It: IntoIterator<Item = G>>(targets: It) -> Self {
        let mut fanout = Self::new();
        for target in targets {
            fanout.push(target);
        }
        fanout
    }
}

impl<'a, T> Target<T> for Fanout<'a, T>
where
    T: Clone,
{
    fn send(&mut self, item: T) {
        // the last target takes the original, the others get clones
        if let Some((last, rest)) = self.targets.split_last_mut() {
            for target in rest {
                target.send(item.clone());
            }
            last.send(item);
        }
    }
}

impl<'a, T> core::fmt::Debug for Fanout<'a, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Fanout")
            .field("targets", &self.targets.len())
            .finish()
    }
}

/// Forwards elements satisfying a condition to another target.
#[derive(Clone, Debug)]
pub struct Filter<F, G> {
    condition: F,
    target: G,
}

impl<F, G> Filter<F, G> {
    /// Create a filter forwarding to `target`.
    pub fn new(condition: F, target: G) -> Self {
        Self { condition, target }
    }

    /// Return the target.
    pub fn into_inner(self) -> G {
        self.target
    }
}

impl<T, F, G> Target<T> for Filter<F, G>
where
    F: FnMut(&T) -> bool,
    G: Target<T>,
{
    fn send(&mut self, item: T) {
        if (self.condition)(&item) {
            self.target.send(item)
        }
    }
}
