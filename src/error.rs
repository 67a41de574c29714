//! Errors produced by sequences.

/// Error produced by [`PotManager::fetch`](`crate::multiplex::PotManager::fetch`) when a copy
/// breaks the fetch contract.
///
/// Handles never produce these on their own; they indicate misuse of the manager or an internal
/// inconsistency, and handles panic when they see one.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FetchError {
    /// The copy id is not in `0..copies`.
    UnknownCopy { copy: usize, copies: usize },

    /// The copy was closed and may not fetch again.
    Closed { copy: usize },

    /// The copy requested something other than the position right after its last one.
    OutOfSequence {
        copy: usize,
        expected: usize,
        requested: usize,
    },

    /// The requested position is past the next element to be pulled from the source.
    AheadOfSource { requested: usize, pulled: usize },

    /// A position owed to a live copy was no longer buffered.
    BufferMiss { index: usize },
}

impl core::fmt::Display for FetchError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> Result<(), core::fmt::Error> {
        match self {
            Self::UnknownCopy { copy, copies } => {
                write!(f, "copy `{}` does not exist (have `{}` copies)", copy, copies)
            }
            Self::Closed { copy } => write!(f, "copy `{}` is closed", copy),
            Self::OutOfSequence {
                copy,
                expected,
                requested,
            } => write!(
                f,
                "copy `{}` requested position `{}` but the next position is `{}`",
                copy, requested, expected
            ),
            Self::AheadOfSource { requested, pulled } => write!(
                f,
                "position `{}` is ahead of the source, which has produced `{}` elements",
                requested, pulled
            ),
            Self::BufferMiss { index } => {
                write!(f, "element `{}` was released while still owed to a copy", index)
            }
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

/// Error produced by [`StrictBatches`](`crate::batch::StrictBatches`) when the source ends in the
/// middle of a batch.
///
/// Contains the requested batch size and the number of elements that were left over.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BatchError {
    pub expected: usize,
    pub actual: usize,
}

impl core::fmt::Display for BatchError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> Result<(), core::fmt::Error> {
        write!(
            f,
            "incomplete batch: expected `{}` elements, found `{}`",
            self.expected, self.actual
        )
    }
}

impl std::error::Error for BatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl core::convert::From<BatchError> for std::io::Error {
    fn from(e: BatchError) -> Self {
        Self::new(std::io::ErrorKind::UnexpectedEof, e)
    }
}
