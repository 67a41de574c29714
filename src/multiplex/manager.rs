use super::pot::{Pot, Position};
use crate::error::FetchError;
use log::{debug, trace};
use std::ops::Range;

/// The bookkeeping behind a multiplexed sequence.
///
/// The manager owns the source and is the only thing that modifies the shared state.  Each copy
/// reads by calling [`fetch`](`Self::fetch`) with its own id and the position right after the last
/// element it was given.  After every read, elements that every live copy has already seen are
/// released.
///
/// Usually this is used through [`unsync::Branch`](`super::unsync::Branch`) or
/// [`sync::Branch`](`super::sync::Branch`), which keep track of their positions.
pub struct PotManager<I>
where
    I: Iterator,
{
    pot: Pot<I>,
}

impl<I> PotManager<I>
where
    I: Iterator,
    I::Item: Clone,
{
    /// Create a manager for `copies` copies of `source`.
    ///
    /// Nothing is read from `source` until the first fetch.
    ///
    /// # Panics
    /// If `copies` is zero.
    pub fn new(source: I, copies: usize) -> Self {
        assert!(copies > 0, "a multiplexed sequence needs at least one copy");
        Self {
            pot: Pot::new(source, copies),
        }
    }

    /// Fetch the element at `position` for copy `copy`.
    ///
    /// `position` must be exactly one past the last position fetched by this copy (or zero for
    /// its first fetch).  Returns `Ok(None)` if the source ends at `position`; in that case
    /// nothing is recorded and the same request may be repeated.
    pub fn fetch(&mut self, copy: usize, position: usize) -> Result<Option<I::Item>, FetchError> {
        let expected = match self.pot.positions.get(copy) {
            Some(current) => current.next().ok_or(FetchError::Closed { copy })?,
            None => {
                return Err(FetchError::UnknownCopy {
                    copy,
                    copies: self.copies(),
                })
            }
        };
        if position != expected {
            return Err(FetchError::OutOfSequence {
                copy,
                expected,
                requested: position,
            });
        }
        // recorded positions never pass `pulled`, so this only fires on a corrupted pot
        if position > self.pot.pulled {
            return Err(FetchError::AheadOfSource {
                requested: position,
                pulled: self.pot.pulled,
            });
        }

        let item = if position == self.pot.pulled {
            match self.pot.source.next() {
                Some(item) => {
                    trace!("copy {} pulled element {} from the source", copy, position);
                    self.pot.buffer.push_back(item.clone());
                    self.pot.pulled += 1;
                    item
                }
                None => {
                    debug!("copy {} reached the end of the source at {}", copy, position);
                    return Ok(None);
                }
            }
        } else {
            trace!("copy {} read element {} from the buffer", copy, position);
            self.pot
                .get(position)
                .cloned()
                .ok_or(FetchError::BufferMiss { index: position })?
        };

        self.pot.positions[copy] = Position::At(position);
        self.trim();
        Ok(Some(item))
    }
}

impl<I> PotManager<I>
where
    I: Iterator,
{
    /// Close copy `copy`.
    ///
    /// A closed copy no longer holds back elements it has not read yet, and any further fetch for
    /// it fails.  Closing a copy twice has no effect.
    pub fn close(&mut self, copy: usize) -> Result<(), FetchError> {
        let copies = self.copies();
        let position = self
            .pot
            .positions
            .get_mut(copy)
            .ok_or(FetchError::UnknownCopy { copy, copies })?;
        if *position != Position::Closed {
            debug!("closing copy {} at {:?}", copy, position);
            *position = Position::Closed;
            self.trim();
        }
        Ok(())
    }

    /// Release every buffered element that no live copy will request again.
    fn trim(&mut self) {
        let frontier = self.pot.frontier();
        let mut released = 0;
        while self.pot.head < frontier && self.pot.buffer.pop_front().is_some() {
            self.pot.head += 1;
            released += 1;
        }
        if released > 1 {
            debug!("released {} elements, buffer starts at {}", released, self.pot.head);
        }
    }

    /// Return the number of copies.
    pub fn copies(&self) -> usize {
        self.pot.positions.len()
    }

    /// Return the number of elements read from the source so far.
    pub fn pulled(&self) -> usize {
        self.pot.pulled
    }

    /// Return the number of buffered elements.
    pub fn buffered_len(&self) -> usize {
        self.pot.buffer.len()
    }

    /// Return the absolute indices of the buffered elements.
    pub fn buffered_range(&self) -> Range<usize> {
        self.pot.head..self.pot.pulled
    }

    /// Return the last position delivered to copy `copy`, if it exists.
    pub fn position(&self, copy: usize) -> Option<Position> {
        self.pot.positions.get(copy).copied()
    }
}

impl<I> core::fmt::Debug for PotManager<I>
where
    I: Iterator,
{
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("PotManager")
            .field("pulled", &self.pot.pulled)
            .field("buffered", &self.buffered_range())
            .field("positions", &self.pot.positions)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pull_fresh_then_serve_from_buffer() {
        let mut manager = PotManager::new(vec![10, 20, 30].into_iter(), 2);

        assert_eq!(manager.fetch(0, 0), Ok(Some(10)));
        assert_eq!(manager.pulled(), 1);
        assert_eq!(manager.buffered_range(), 0..1);

        assert_eq!(manager.fetch(1, 0), Ok(Some(10)));
        assert_eq!(manager.pulled(), 1);
        assert_eq!(manager.buffered_len(), 0);
        assert_eq!(manager.buffered_range(), 1..1);
    }

    #[test]
    fn exhaustion_leaves_state_untouched() {
        let mut manager = PotManager::new(std::iter::once('a'), 2);
        assert_eq!(manager.fetch(0, 0), Ok(Some('a')));
        assert_eq!(manager.fetch(0, 1), Ok(None));
        assert_eq!(manager.position(0), Some(Position::At(0)));
        assert_eq!(manager.pulled(), 1);

        // the same request may be repeated
        assert_eq!(manager.fetch(0, 1), Ok(None));
        assert_eq!(manager.fetch(1, 0), Ok(Some('a')));
        assert_eq!(manager.fetch(1, 1), Ok(None));
        assert_eq!(manager.buffered_len(), 0);
    }

    #[test]
    fn out_of_sequence() {
        let mut manager = PotManager::new(0..10, 2);
        assert_eq!(
            manager.fetch(0, 1),
            Err(FetchError::OutOfSequence {
                copy: 0,
                expected: 0,
                requested: 1
            })
        );
        assert_eq!(manager.fetch(0, 0), Ok(Some(0)));
        assert_eq!(
            manager.fetch(0, 0),
            Err(FetchError::OutOfSequence {
                copy: 0,
                expected: 1,
                requested: 0
            })
        );
        assert_eq!(manager.pulled(), 1);
    }

    #[test]
    fn unknown_copy() {
        let mut manager = PotManager::new(0..10, 2);
        assert_eq!(
            manager.fetch(2, 0),
            Err(FetchError::UnknownCopy { copy: 2, copies: 2 })
        );
        assert_eq!(
            manager.close(5),
            Err(FetchError::UnknownCopy { copy: 5, copies: 2 })
        );
    }

    #[test]
    fn closed_copy_releases_buffer() {
        let mut manager = PotManager::new(0..10, 2);
        for position in 0..4 {
            assert_eq!(manager.fetch(0, position), Ok(Some(position)));
        }
        assert_eq!(manager.buffered_range(), 0..4);

        manager.close(1).unwrap();
        assert_eq!(manager.buffered_len(), 0);
        assert_eq!(manager.position(1), Some(Position::Closed));
        assert_eq!(manager.fetch(1, 0), Err(FetchError::Closed { copy: 1 }));

        // closing again is harmless
        manager.close(1).unwrap();

        // a single live copy keeps nothing buffered
        assert_eq!(manager.fetch(0, 4), Ok(Some(4)));
        assert_eq!(manager.buffered_len(), 0);
    }

    #[test]
    fn buffer_miss_is_reported() {
        let mut manager = PotManager::new(0..10, 2);
        assert_eq!(manager.fetch(0, 0), Ok(Some(0)));
        // corrupt the buffer behind the manager's back
        manager.pot.buffer.clear();
        manager.pot.head = 1;
        assert_eq!(manager.fetch(1, 0), Err(FetchError::BufferMiss { index: 0 }));
    }

    #[test]
    fn ahead_of_source_is_reported() {
        let mut manager = PotManager::new(0..10, 2);
        assert_eq!(manager.fetch(0, 0), Ok(Some(0)));
        // record a position the source never reached
        manager.pot.positions[1] = Position::At(4);
        assert_eq!(
            manager.fetch(1, 5),
            Err(FetchError::AheadOfSource {
                requested: 5,
                pulled: 1
            })
        );
        assert_eq!(manager.pulled(), 1);
    }

    #[test]
    #[should_panic]
    fn no_copies() {
        let _ = PotManager::new(0..10, 0);
    }
}
