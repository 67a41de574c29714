use std::{collections::VecDeque, iter::Fuse};

/// The last position delivered to a copy.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Position {
    /// Nothing has been delivered yet.
    Before,
    /// The element at this index was the last one delivered.
    At(usize),
    /// The copy was closed and no longer holds back the buffer.
    Closed,
}

impl Position {
    /// The position this copy must request next, or `None` if it is closed.
    pub fn next(self) -> Option<usize> {
        match self {
            Self::Before => Some(0),
            Self::At(index) => Some(index + 1),
            Self::Closed => None,
        }
    }
}

// Shared state
pub(super) struct Pot<I>
where
    I: Iterator,
{
    pub(super) source: Fuse<I>, // upstream cursor, never advanced past its end
    pub(super) pulled: usize,   // number of elements taken from the source
    pub(super) head: usize,     // absolute index of the front of `buffer`
    pub(super) buffer: VecDeque<I::Item>, // elements `head..pulled`
    pub(super) positions: Vec<Position>,
}

impl<I> Pot<I>
where
    I: Iterator,
{
    pub(super) fn new(source: I, copies: usize) -> Self {
        Self {
            source: source.fuse(),
            pulled: 0,
            head: 0,
            buffer: VecDeque::new(),
            positions: vec![Position::Before; copies],
        }
    }

    /// One past the earliest position delivered to every live copy.
    ///
    /// Every index below the frontier has been read by all live copies.  With no live copies,
    /// everything pulled so far is behind the frontier.
    pub(super) fn frontier(&self) -> usize {
        self.positions
            .iter()
            .filter_map(|position| position.next())
            .min()
            .unwrap_or(self.pulled)
    }

    /// Look up a buffered element by absolute index.
    pub(super) fn get(&self, index: usize) -> Option<&I::Item> {
        index
            .checked_sub(self.head)
            .and_then(|offset| self.buffer.get(offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frontier_ignores_closed_copies() {
        let mut pot = Pot::new(0..10, 3);
        pot.pulled = 5;
        pot.positions = vec![Position::At(3), Position::Closed, Position::At(1)];
        assert_eq!(pot.frontier(), 2);

        pot.positions[2] = Position::Closed;
        assert_eq!(pot.frontier(), 4);
    }

    #[test]
    fn frontier_before_first_read() {
        let mut pot = Pot::new(0..10, 2);
        pot.pulled = 1;
        pot.positions[0] = Position::At(0);
        assert_eq!(pot.frontier(), 0);
    }

    #[test]
    fn frontier_without_live_copies() {
        let mut pot = Pot::new(0..10, 1);
        pot.pulled = 7;
        pot.positions[0] = Position::Closed;
        assert_eq!(pot.frontier(), 7);
    }

    #[test]
    fn get_is_relative_to_head() {
        let mut pot = Pot::new(0..10, 1);
        pot.head = 4;
        pot.pulled = 6;
        pot.buffer.extend([40, 50]);
        assert_eq!(pot.get(3), None);
        assert_eq!(pot.get(4), Some(&40));
        assert_eq!(pot.get(5), Some(&50));
        assert_eq!(pot.get(6), None);
    }
}
