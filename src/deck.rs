//! The fixed 52-card deck.

use alloc::string::String;
use alloc::vec::Vec;
use core::any::Any;
use core::fmt;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, CardList, DECK_SIZE, RANKS, Rank, SUITS, Suit};
use crate::sequence::{Probe, Sequence};

/// A full deck of 52 cards in rank-major order.
///
/// Cards are laid out rank by rank, cycling through the suits for each rank:
/// `2h, 2d, 2c, 2s, 3h, ...`. The deck is read-only once built; use the
/// [`Sequence`] methods to inspect it.
///
/// # Example
///
/// ```
/// use deckseq::{Card, Deck, Rank, Sequence, Suit};
///
/// let deck = Deck::new();
/// assert_eq!(deck.len(), 52);
/// assert_eq!(deck.get(3), Ok(Card::new(Rank::Two, Suit::Spades)));
/// assert_eq!(deck.get(-1), Ok(Card::new(Rank::Ace, Suit::Spades)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Ranks in construction order.
    ranks: [Rank; 13],
    /// Suits in construction order.
    suits: [Suit; 4],
    /// Cards, rank-major.
    cards: Vec<Card>,
}

impl Deck {
    /// Builds the deck.
    #[must_use]
    pub fn new() -> Self {
        let ranks = RANKS;
        let suits = SUITS;

        let mut cards = Vec::with_capacity(DECK_SIZE);
        for rank in ranks {
            for suit in suits {
                cards.push(Card::new(rank, suit));
            }
        }

        Self {
            ranks,
            suits,
            cards,
        }
    }

    /// Returns the ranks the deck was built from, in order.
    #[must_use]
    pub const fn ranks(&self) -> &[Rank] {
        &self.ranks
    }

    /// Returns the suits the deck was built from, in order.
    #[must_use]
    pub const fn suits(&self) -> &[Suit] {
        &self.suits
    }

    /// Picks one card uniformly at random.
    #[must_use]
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Card {
        self.cards[rng.random_range(0..self.cards.len())]
    }

    /// Returns a shuffled copy of the cards using the given random source.
    ///
    /// The deck itself keeps its order.
    #[must_use]
    pub fn shuffled_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Card> {
        let mut cards = self.cards.clone();
        cards.shuffle(rng);
        cards
    }

    /// Returns a shuffled copy of the cards, deterministic for a given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use deckseq::Deck;
    ///
    /// let deck = Deck::new();
    /// assert_eq!(deck.shuffled(42), deck.shuffled(42));
    /// ```
    #[must_use]
    pub fn shuffled(&self, seed: u64) -> Vec<Card> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.shuffled_with(&mut rng)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Sequence for Deck {
    type Item = Card;

    fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    fn len(&self) -> usize {
        DECK_SIZE
    }

    /// Accepts a [`Card`], a `(Rank, Suit)` pair, or a `(rank, suit)` pair of
    /// symbols. Symbols outside the rank or suit set name no card.
    fn probe(value: &dyn Any) -> Probe<Card> {
        let symbols = |rank: &str, suit: &str| {
            Card::from_symbols(rank, suit).map_or(Probe::Unrepresentable, Probe::Element)
        };

        if let Some(card) = value.downcast_ref::<Card>() {
            Probe::Element(*card)
        } else if let Some(&(rank, suit)) = value.downcast_ref::<(Rank, Suit)>() {
            Probe::Element(Card::new(rank, suit))
        } else if let Some(&(rank, suit)) = value.downcast_ref::<(&'static str, &'static str)>() {
            symbols(rank, suit)
        } else if let Some((rank, suit)) = value.downcast_ref::<(String, String)>() {
            symbols(rank.as_str(), suit.as_str())
        } else {
            Probe::Foreign
        }
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&CardList(&self.cards), f)
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
