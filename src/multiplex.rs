//! Independent copies of a single-pass sequence.
//!
//! A multiplexed sequence is read once from its source and handed out to any number of copies,
//! each of which sees every element in the original order.  Copies advance at their own pace; only
//! elements that some live copy has not yet read are kept in memory.
//!
//! Two flavours of copy are provided:
//! * [`unsync::Branch`], shared through `Rc<RefCell<_>>`, for single-threaded use.
//! * [`sync::Branch`], shared through `Arc<Mutex<_>>`, which may be sent to other threads.
//!
//! ```
//! use runnel::multiplex::unsync::multiplex_array;
//!
//! let [evens, odds] = multiplex_array(1..=6);
//! let evens: Vec<_> = evens.filter(|x| x % 2 == 0).collect();
//! let odds: Vec<_> = odds.filter(|x| x % 2 == 1).collect();
//! assert_eq!(evens, [2, 4, 6]);
//! assert_eq!(odds, [1, 3, 5]);
//! ```

mod manager;
mod pot;
pub mod sync;
pub mod unsync;

pub use manager::PotManager;
pub use pot::Position;

/// Read cursor of a single copy.
///
/// The pieces of a branch that do not depend on how the manager is shared.
#[derive(Debug)]
struct Cursor {
    id: usize,
    next: usize,
    exhausted: bool,
}

impl Cursor {
    fn new(id: usize) -> Self {
        Self {
            id,
            next: 0,
            exhausted: false,
        }
    }

    /// Produce the next element of this copy.
    ///
    /// # Panics
    /// If the manager reports a contract violation.
    fn advance<I>(&mut self, manager: &mut PotManager<I>) -> Option<I::Item>
    where
        I: Iterator,
        I::Item: Clone,
    {
        if self.exhausted {
            return None;
        }
        match manager.fetch(self.id, self.next) {
            Ok(Some(item)) => {
                self.next += 1;
                Some(item)
            }
            Ok(None) => {
                self.exhausted = true;
                None
            }
            Err(e) => panic!("{}", e),
        }
    }
}
