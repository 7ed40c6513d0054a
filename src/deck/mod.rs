//! Named, ordered card collections with queue-like draw semantics.
//!
//! A [`Deck`] serves both as a player's draw pile and as the shared war
//! pile: cards are flipped from the front and added to the back, so a
//! won pile cycles to the bottom of the winner's deck.
//!
//! Combining decks is an explicit in-place [`Deck::absorb`] that drains
//! the other deck, never a value-producing concatenation. Splitting
//! consumes the source deck, so no stale handle to the pre-split deck
//! can survive.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::{Card, Rank, Suit};
use crate::core::GameRng;

/// Deck operation errors.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DeckError {
    /// Flip attempted on an empty deck.
    #[error("deck {deck:?} has no cards left")]
    Empty { deck: String },

    /// Removal of a card the deck does not hold.
    #[error("card {card} not in deck {deck:?}")]
    CardNotFound { deck: String, card: Card },
}

/// An ordered, named sequence of cards, drawn from the front.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    name: String,
    cards: VecDeque<Card>,
}

impl Deck {
    /// Create a deck from a card sequence. Front of the deck is the
    /// first element.
    #[must_use]
    pub fn new(name: impl Into<String>, cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            name: name.into(),
            cards: cards.into_iter().collect(),
        }
    }

    /// Create an empty deck.
    #[must_use]
    pub fn empty(name: impl Into<String>) -> Self {
        Self::new(name, [])
    }

    /// The full 52-card deck in suit-major order (clubs through spades,
    /// `2` through Ace within each suit).
    ///
    /// This is the only valid starting composition for a game; the
    /// 52-distinct-cards invariant is checked here.
    #[must_use]
    pub fn standard(name: impl Into<String>) -> Self {
        let mut cards = VecDeque::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push_back(Card::new(rank, suit));
            }
        }

        let distinct: FxHashSet<Card> = cards.iter().copied().collect();
        assert_eq!(distinct.len(), 52, "standard deck must hold 52 distinct cards");

        Self {
            name: name.into(),
            cards,
        }
    }

    /// Deck name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of cards currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remove and return the front card.
    pub fn flip(&mut self) -> Result<Card, DeckError> {
        self.cards.pop_front().ok_or_else(|| DeckError::Empty {
            deck: self.name.clone(),
        })
    }

    /// Append a card to the back.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Remove the first card structurally equal to `card`.
    ///
    /// Scans the whole sequence and fails only if no match exists
    /// anywhere in the deck.
    pub fn remove(&mut self, card: &Card) -> Result<(), DeckError> {
        match self.cards.iter().position(|c| c == card) {
            Some(idx) => {
                self.cards.remove(idx);
                Ok(())
            }
            None => Err(DeckError::CardNotFound {
                deck: self.name.clone(),
                card: *card,
            }),
        }
    }

    /// Remove each of the given cards in turn. The first missing card
    /// aborts with `CardNotFound`; earlier removals are not rolled back.
    pub fn remove_many(&mut self, cards: &[Card]) -> Result<(), DeckError> {
        for card in cards {
            self.remove(card)?;
        }
        Ok(())
    }

    /// Whether the deck holds a structurally equal card.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Randomize the card order in place with a uniform permutation.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(self.cards.make_contiguous());
    }

    /// Partition into two new decks: the first `floor(ratio * len)`
    /// cards go to `<name>1`, the remainder to `<name>2`.
    ///
    /// Consumes the source deck; card order is preserved across the cut.
    #[must_use]
    pub fn split(self, ratio: f64) -> (Deck, Deck) {
        let cut = (ratio * self.len() as f64).floor() as usize;
        let cut = cut.min(self.len());

        let mut front: VecDeque<Card> = self.cards;
        let back = front.split_off(cut);

        (
            Deck {
                name: format!("{}1", self.name),
                cards: front,
            },
            Deck {
                name: format!("{}2", self.name),
                cards: back,
            },
        )
    }

    /// Drain every card of `other` onto the back of this deck, in
    /// `other`'s front-to-back order. `other` is left empty but keeps
    /// its name.
    pub fn absorb(&mut self, other: &mut Deck) {
        self.cards.append(&mut other.cards);
    }

    /// Iterate the cards front to back without removing them
    /// (distinct from [`Deck::flip`]).
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::collections::vec_deque::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl std::fmt::Display for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [", self.name)?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    fn deck_of(name: &str, codes: &[&str]) -> Deck {
        Deck::new(name, codes.iter().map(|c| card(c)))
    }

    #[test]
    fn test_standard_deck_composition() {
        let deck = Deck::standard("deck");
        assert_eq!(deck.len(), 52);

        let distinct: FxHashSet<Card> = deck.iter().copied().collect();
        assert_eq!(distinct.len(), 52);

        // Suit-major order: front card is the 2 of clubs.
        assert_eq!(deck.iter().next(), Some(&card("2C")));
    }

    #[test]
    fn test_flip_is_fifo() {
        let mut deck = deck_of("d", &["2C", "3C", "4C"]);
        assert_eq!(deck.flip().unwrap(), card("2C"));
        assert_eq!(deck.flip().unwrap(), card("3C"));

        deck.add_card(card("5C"));
        assert_eq!(deck.flip().unwrap(), card("4C"));
        assert_eq!(deck.flip().unwrap(), card("5C"));
    }

    #[test]
    fn test_flip_empty_always_fails() {
        let mut deck = Deck::empty("empty");
        for _ in 0..3 {
            assert_eq!(
                deck.flip(),
                Err(DeckError::Empty {
                    deck: "empty".to_string()
                })
            );
        }
    }

    #[test]
    fn test_remove_scans_whole_sequence() {
        // The target sits at the back: a first-mismatch scan would fail.
        let mut deck = deck_of("d", &["2C", "3D", "4H", "KS"]);
        deck.remove(&card("KS")).unwrap();
        assert_eq!(deck.len(), 3);
        assert!(!deck.contains(&card("KS")));
    }

    #[test]
    fn test_remove_absent_card_fails() {
        let mut deck = deck_of("d", &["2C", "3D"]);
        let err = deck.remove(&card("AH")).unwrap_err();
        assert_eq!(
            err,
            DeckError::CardNotFound {
                deck: "d".to_string(),
                card: card("AH"),
            }
        );
        assert_eq!(deck.len(), 2);
    }

    #[test]
    fn test_remove_first_match_only() {
        let mut deck = deck_of("d", &["2C", "2C", "3D"]);
        deck.remove(&card("2C")).unwrap();
        assert_eq!(deck.len(), 2);
        assert!(deck.contains(&card("2C")));
    }

    #[test]
    fn test_remove_many() {
        let mut deck = deck_of("d", &["2C", "3D", "4H", "5S"]);
        deck.remove_many(&[card("4H"), card("2C")]).unwrap();
        assert_eq!(deck.len(), 2);

        assert!(deck.remove_many(&[card("3D"), card("AH")]).is_err());
        // The 3D was removed before the failure.
        assert!(!deck.contains(&card("3D")));
    }

    #[test]
    fn test_split_even() {
        let deck = Deck::standard("deck");
        let original: Vec<Card> = deck.iter().copied().collect();

        let (d1, d2) = deck.split(0.5);
        assert_eq!(d1.name(), "deck1");
        assert_eq!(d2.name(), "deck2");
        assert_eq!(d1.len(), 26);
        assert_eq!(d2.len(), 26);

        // Concatenating both halves in order reconstructs the original.
        let rejoined: Vec<Card> = d1.iter().chain(d2.iter()).copied().collect();
        assert_eq!(rejoined, original);
    }

    #[test]
    fn test_split_ratio_floors() {
        let deck = deck_of("d", &["2C", "3C", "4C", "5C", "6C"]);
        let (d1, d2) = deck.split(0.5);
        assert_eq!(d1.len(), 2); // floor(0.5 * 5)
        assert_eq!(d2.len(), 3);
    }

    #[test]
    fn test_absorb_moves_all_cards_in_order() {
        let mut winner = deck_of("deck1", &["2C", "3C"]);
        let mut pile = deck_of("pile", &["KH", "KS", "4D"]);

        winner.absorb(&mut pile);

        assert!(pile.is_empty());
        assert_eq!(pile.name(), "pile");
        let cards: Vec<Card> = winner.iter().copied().collect();
        assert_eq!(
            cards,
            vec![card("2C"), card("3C"), card("KH"), card("KS"), card("4D")]
        );
    }

    #[test]
    fn test_shuffle_preserves_cards() {
        let mut deck = Deck::standard("deck");
        let before: FxHashSet<Card> = deck.iter().copied().collect();

        let mut rng = GameRng::new(42);
        deck.shuffle(&mut rng);

        assert_eq!(deck.len(), 52);
        let after: FxHashSet<Card> = deck.iter().copied().collect();
        assert_eq!(before, after);

        // A 52-card identity shuffle would be astronomically unlikely.
        let ordered: Vec<Card> = Deck::standard("deck").iter().copied().collect();
        let shuffled: Vec<Card> = deck.iter().copied().collect();
        assert_ne!(ordered, shuffled);
    }

    #[test]
    fn test_iteration_is_non_destructive() {
        let deck = deck_of("d", &["2C", "3C", "4C"]);
        let first: Vec<&Card> = deck.iter().collect();
        let second: Vec<&Card> = (&deck).into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(deck.len(), 3);
    }

    #[test]
    fn test_display() {
        let deck = deck_of("pile", &["10H", "AS"]);
        assert_eq!(deck.to_string(), "pile [10H AS]");
    }

    #[test]
    fn test_serde_round_trip() {
        let deck = deck_of("d", &["2C", "KS", "10D"]);
        let json = serde_json::to_string(&deck).unwrap();
        let back: Deck = serde_json::from_str(&json).unwrap();
        assert_eq!(deck, back);
    }
}
