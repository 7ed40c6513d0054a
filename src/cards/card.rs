//! Playing cards and comparison rules.
//!
//! A [`Card`] is an immutable rank/suit pair. Comparison uses one of two
//! scoring scales:
//!
//! - **Standard**: 2-10 at face value, J/Q/K all worth 10, Ace 11.
//! - **Strict**: identical, except the face cards are separated
//!   (J < Q < K, still below Ace) so that in-game comparisons only tie
//!   on genuinely equal ranks.
//!
//! Scores are integer tenths: a Standard king scores 100, a Strict king
//! 103, an ace 110 on both scales. Keeping scores integral makes the
//! ordering exact where the traditional presentation uses 10.1/10.2/10.3.
//!
//! A tied comparison with no trump suit yields [`CardComparison::Tie`],
//! the signal for the caller to escalate into a war.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Card parsing errors.
///
/// The only way to end up with an unrecognized rank or suit: card codes
/// are closed enums, so a constructed [`Card`] is always scoreable.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CardError {
    /// Unrecognized rank code.
    #[error("invalid card value: {0:?}")]
    InvalidValue(String),

    /// Unrecognized suit code.
    #[error("invalid card suit: {0:?}")]
    InvalidSuit(String),
}

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All four suits, in deck-construction order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Single-letter code (`C`, `D`, `H`, `S`).
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Suit {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "C" => Ok(Suit::Clubs),
            "D" => Ok(Suit::Diamonds),
            "H" => Ok(Suit::Hearts),
            "S" => Ok(Suit::Spades),
            _ => Err(CardError::InvalidSuit(s.to_string())),
        }
    }
}

/// Card rank, `2` through Ace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// All thirteen ranks, low to high.
    pub const ALL: [Rank; 13] = [
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
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Rank code as printed on the card (`2`..`10`, `J`, `Q`, `K`, `A`).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }

    /// Score in integer tenths under the given scale.
    ///
    /// Standard: 2-10 face value, J/Q/K = 10, A = 11 (so 20..110).
    /// Strict: J = 10.1, Q = 10.2, K = 10.3 (101/102/103), A still 110.
    #[must_use]
    pub const fn score(self, scale: ScoreScale) -> u16 {
        match (self, scale) {
            (Rank::Two, _) => 20,
            (Rank::Three, _) => 30,
            (Rank::Four, _) => 40,
            (Rank::Five, _) => 50,
            (Rank::Six, _) => 60,
            (Rank::Seven, _) => 70,
            (Rank::Eight, _) => 80,
            (Rank::Nine, _) => 90,
            (Rank::Ten, _) => 100,
            (Rank::Jack, ScoreScale::Standard) => 100,
            (Rank::Queen, ScoreScale::Standard) => 100,
            (Rank::King, ScoreScale::Standard) => 100,
            (Rank::Jack, ScoreScale::Strict) => 101,
            (Rank::Queen, ScoreScale::Strict) => 102,
            (Rank::King, ScoreScale::Strict) => 103,
            (Rank::Ace, _) => 110,
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Rank {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // 'T' (the reference tie-marker sentinel) lands here: it is not
        // a real rank and never scores.
        Rank::ALL
            .into_iter()
            .find(|r| r.code() == s)
            .ok_or_else(|| CardError::InvalidValue(s.to_string()))
    }
}

/// Which scoring table a comparison uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreScale {
    /// J/Q/K all score 10.
    Standard,
    /// Face cards are separated: J < Q < K < A.
    Strict,
}

/// An immutable playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

/// Outcome of comparing two cards.
///
/// `Tie` is the "escalate to war" signal: equal scores and no trump suit
/// to break them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardComparison {
    /// The higher of the two cards.
    Winner(Card),
    /// Scores equal and no trump resolved it.
    Tie,
}

impl Card {
    /// Create a card from rank and suit.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Score this card under the given scale.
    #[must_use]
    pub const fn score(self, scale: ScoreScale) -> u16 {
        self.rank.score(scale)
    }

    /// Compare two cards, returning the higher one.
    ///
    /// On equal scores, a card whose suit matches `trump` wins (checked
    /// left operand first, matching traditional precedence). With no
    /// trump, equal scores are a [`CardComparison::Tie`].
    ///
    /// `trump` is reserved for rule variants; the War engine always
    /// passes `None`.
    #[must_use]
    pub fn compare(self, other: Card, trump: Option<Suit>, scale: ScoreScale) -> CardComparison {
        let (s1, s2) = (self.score(scale), other.score(scale));
        if s1 > s2 {
            CardComparison::Winner(self)
        } else if s2 > s1 {
            CardComparison::Winner(other)
        } else if trump == Some(self.suit) {
            CardComparison::Winner(self)
        } else if trump == Some(other.suit) {
            CardComparison::Winner(other)
        } else {
            CardComparison::Tie
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl std::str::FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let split = s
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .ok_or_else(|| CardError::InvalidValue(s.to_string()))?;
        let (rank, suit) = s.split_at(split);
        Ok(Card::new(rank.parse()?, suit.parse()?))
    }
}
