//! Copies for use on a single thread.

use super::{Cursor, PotManager};
use futures::stream::Stream;
use std::{
    cell::RefCell,
    iter::FusedIterator,
    ops::Range,
    pin::Pin,
    rc::Rc,
    task::{Context, Poll},
};

/// Create `copies` independent copies of `source`.
///
/// # Panics
/// If `copies` is zero.
pub fn multiplex<I>(source: I, copies: usize) -> Vec<Branch<I>>
where
    I: Iterator,
    I::Item: Clone,
{
    let manager = Rc::new(RefCell::new(PotManager::new(source, copies)));
    (0..copies)
        .map(|id| Branch::new(manager.clone(), id))
        .collect()
}

/// Create `N` independent copies of `source`.
///
/// # Panics
/// If `N` is zero.
pub fn multiplex_array<I, const N: usize>(source: I) -> [Branch<I>; N]
where
    I: Iterator,
    I::Item: Clone,
{
    let manager = Rc::new(RefCell::new(PotManager::new(source, N)));
    std::array::from_fn(|id| Branch::new(manager.clone(), id))
}

/// One copy of a multiplexed sequence, returned by [`multiplex`].
///
/// Dropping a branch closes its copy, so the remaining copies no longer keep elements around for
/// it.
pub struct Branch<I>
where
    I: Iterator,
{
    manager: Rc<RefCell<PotManager<I>>>,
    cursor: Cursor,
}

impl<I> Branch<I>
where
    I: Iterator,
{
    fn new(manager: Rc<RefCell<PotManager<I>>>, id: usize) -> Self {
        Self {
            manager,
            cursor: Cursor::new(id),
        }
    }

    /// Return the id of this copy.
    pub fn id(&self) -> usize {
        self.cursor.id
    }

    /// Return the index of the next element this copy will produce.
    pub fn next_index(&self) -> usize {
        self.cursor.next
    }

    /// Return true if this copy has reached the end of the source.
    pub fn is_exhausted(&self) -> bool {
        self.cursor.exhausted
    }

    /// Return the number of elements read from the source by all copies.
    pub fn pulled(&self) -> usize {
        self.manager.borrow().pulled()
    }

    /// Return the number of elements currently buffered for all copies.
    pub fn buffered_len(&self) -> usize {
        self.manager.borrow().buffered_len()
    }

    /// Return the absolute indices of the buffered elements.
    pub fn buffered_range(&self) -> Range<usize> {
        self.manager.borrow().buffered_range()
    }
}

impl<I> Drop for Branch<I>
where
    I: Iterator,
{
    fn drop(&mut self) {
        if let Ok(mut manager) = self.manager.try_borrow_mut() {
            let _ = manager.close(self.cursor.id);
        }
    }
}

impl<I> Iterator for Branch<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let mut manager = self.manager.borrow_mut();
        self.cursor.advance(&mut *manager)
    }
}

impl<I> FusedIterator for Branch<I>
where
    I: Iterator,
    I::Item: Clone,
{
}

impl<I> Stream for Branch<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn poll_next(mut self: Pin<&mut Self>, _cx: &mut Context) -> Poll<Option<Self::Item>> {
        Poll::Ready(Iterator::next(&mut *self))
    }
}

impl<I> core::fmt::Debug for Branch<I>
where
    I: Iterator,
{
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Branch")
            .field("id", &self.cursor.id)
            .field("position", &self.cursor.next)
            .field("exhausted", &self.cursor.exhausted)
            .finish()
    }
}
