//! A fixed 52-card deck exposed as a read-only sequence, with optional
//! `no_std` support.
//!
//! The crate provides a [`Deck`] type that implements [`Sequence`]: length,
//! membership, negative indexing, clamped slicing, iteration, and display,
//! all over one immutable, construction-ordered backing list.
//!
//! # Example
//!
//! ```
//! use deckseq::{Card, Deck, Rank, Sequence, Slice, Suit};
//!
//! let deck = Deck::new();
//! assert_eq!(
//!     deck.slice(Slice::new(1, 3)),
//!     [
//!         Card::new(Rank::Two, Suit::Diamonds),
//!         Card::new(Rank::Two, Suit::Clubs),
//!     ]
//! );
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod sequence;

// Re-export main types
pub use card::{Card, CardList, DECK_SIZE, RANKS, Rank, SUITS, Suit};
pub use deck::Deck;
pub use error::{ContainsError, IndexError, ParseCardError};
pub use sequence::{Probe, Sequence, Slice, SliceIndices};
