//! Error types for deck operations.

use thiserror::Error;

/// Errors that can occur when reading a single element by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IndexError {
    /// Index is outside the sequence, after negative indices are resolved.
    #[error("index {index} out of range for sequence of length {len}")]
    OutOfRange {
        /// The index as passed by the caller.
        index: isize,
        /// Length of the sequence.
        len: usize,
    },
}

/// Errors that can occur during a membership probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContainsError {
    /// The probed value is not an element of the sequence's type.
    #[error("value must be of type {expected}, is type {found}")]
    WrongType {
        /// Element type of the sequence.
        expected: &'static str,
        /// Type of the value that was passed.
        found: &'static str,
    },
}

/// Errors that can occur when parsing a card, rank, or suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Input is empty.
    #[error("empty card string")]
    Empty,
    /// Rank symbol is not one of `2`..`10`, `J`, `K`, `Q`, `A`.
    #[error("unknown rank")]
    UnknownRank,
    /// Suit symbol is not one of `h`, `d`, `c`, `s`.
    #[error("unknown suit")]
    UnknownSuit,
}
