//! Card types, symbol parsing, and rendering.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseCardError;

/// Card rank.
///
/// Variants are declared in deck order. Note that King comes before Queen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// `2`.
    Two,
    /// `3`.
    Three,
    /// `4`.
    Four,
    /// `5`.
    Five,
    /// `6`.
    Six,
    /// `7`.
    Seven,
    /// `8`.
    Eight,
    /// `9`.
    Nine,
    /// `10`.
    Ten,
    /// `J`.
    Jack,
    /// `K`.
    King,
    /// `Q`.
    Queen,
    /// `A`.
    Ace,
}

impl Rank {
    /// Returns the rank's symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::King => "K",
            Self::Queen => "Q",
            Self::Ace => "A",
        }
    }

    /// Looks up a rank by its symbol.
    ///
    /// # Example
    ///
    /// ```
    /// use deckseq::Rank;
    ///
    /// assert_eq!(Rank::from_symbol("10"), Some(Rank::Ten));
    /// assert_eq!(Rank::from_symbol("1"), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        RANKS.iter().copied().find(|rank| rank.symbol() == symbol)
    }
}

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts (`h`).
    Hearts,
    /// Diamonds (`d`).
    Diamonds,
    /// Clubs (`c`).
    Clubs,
    /// Spades (`s`).
    Spades,
}

impl Suit {
    /// Returns the suit's symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Hearts => "h",
            Self::Diamonds => "d",
            Self::Clubs => "c",
            Self::Spades => "s",
        }
    }

    /// Looks up a suit by its symbol.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        SUITS.iter().copied().find(|suit| suit.symbol() == symbol)
    }
}

/// Ranks in deck order.
pub const RANKS: [Rank; 13] = [
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::King,
    Rank::Queen,
    Rank::Ace,
];

/// Suits in deck order.
pub const SUITS: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

/// Number of cards per deck.
pub const DECK_SIZE: usize = RANKS.len() * SUITS.len();

/// A playing card.
///
/// Cards are plain values: two cards are equal when rank and suit match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Builds a card from its rank and suit symbols.
    ///
    /// # Example
    ///
    /// ```
    /// use deckseq::{Card, Rank, Suit};
    ///
    /// assert_eq!(Card::from_symbols("2", "s"), Some(Card::new(Rank::Two, Suit::Spades)));
    /// assert_eq!(Card::from_symbols("2", "a"), None);
    /// ```
    #[must_use]
    pub fn from_symbols(rank: &str, suit: &str) -> Option<Self> {
        Some(Self::new(Rank::from_symbol(rank)?, Suit::from_symbol(suit)?))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Card(rank='{}', suit='{}')",
            self.rank.symbol(),
            self.suit.symbol()
        )
    }
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s).ok_or(ParseCardError::UnknownRank)
    }
}

impl FromStr for Suit {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s).ok_or(ParseCardError::UnknownSuit)
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses a rank symbol followed by a single suit symbol, e.g. `10h` or `Qd`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (split, _) = s.char_indices().next_back().ok_or(ParseCardError::Empty)?;
        let (rank, suit) = s.split_at(split);

        Ok(Self::new(rank.parse()?, suit.parse()?))
    }
}

/// Renders a run of cards as `[Card(..), Card(..)]`.
///
/// # Example
///
/// ```
/// use deckseq::{Card, CardList, Rank, Suit};
///
/// let cards = [Card::new(Rank::Two, Suit::Diamonds)];
/// assert_eq!(CardList(&cards).to_string(), "[Card(rank='2', suit='d')]");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CardList<'a>(pub &'a [Card]);

impl fmt::Display for CardList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, card) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(card, f)?;
        }
        f.write_str("]")
    }
}
