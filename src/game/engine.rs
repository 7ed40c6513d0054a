//! The round protocol and war escalation.
//!
//! A [`Game`] owns two player decks and the shared pile. The driver
//! calls [`Game::play_round`] until the game reports a terminal
//! outcome; [`Game::play_to_completion`] packages that loop.
//!
//! ## Round protocol
//!
//! 1. If either deck is already empty the game ends: the side still
//!    holding cards wins, both empty is a draw. Emptiness is checked
//!    before any flip; an empty deck is never discovered via a failed
//!    flip.
//! 2. Each player flips one card into the pile. The higher card on the
//!    strict scale takes the whole pile.
//! 3. A tie escalates into a war (see below).
//!
//! ## War escalation
//!
//! Wars are resolved iteratively, accumulating the pile across
//! escalations; depth is bounded by the 52-card supply, never by the
//! call stack. Each escalation stages up to four pairs (the
//! "I DE CLARE WAR!" cards), stopping early if a deck runs dry. With
//! fewer than three pairs staged, the side still holding cards wins the
//! war outright; both dry at once is a draw. Otherwise the last staged
//! pair is compared like a normal round, and a further tie starts
//! another escalation.

use smallvec::SmallVec;
use thiserror::Error;

use crate::cards::{Card, CardComparison, ScoreScale};
use crate::core::{GameResult, GameRng, Player};
use crate::deck::{Deck, DeckError};
use crate::game::report::{NullReporter, Reporter, WAR_WORDS};

use serde::{Deserialize, Serialize};

/// Engine errors.
///
/// Everything here is a caller or internal logic error, not an expected
/// gameplay condition: deck exhaustion during play is handled by the
/// protocol itself and never surfaces as an error.
#[derive(Debug, Error)]
pub enum EngineError {
    /// `play_round` called before `start`.
    #[error("game has not been started")]
    NotStarted,

    /// `start` called twice.
    #[error("game was already started")]
    AlreadyStarted,

    /// Split ratio would leave one player without cards.
    #[error("split ratio {0} leaves a player with no cards")]
    InvalidSplitRatio(f64),

    /// The driver loop ran past its safety limit without termination.
    #[error("no terminal state after {rounds} rounds")]
    RoundLimit { rounds: u64 },

    /// A deck operation failed after its pre-condition was checked.
    /// Indicates a broken engine invariant, never a normal outcome.
    #[error("deck operation failed during {op}")]
    Deck {
        op: &'static str,
        #[source]
        source: DeckError,
    },
}

/// Outcome of a single round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Round settled, game continues.
    Continuing {
        /// Who took the pile this round.
        winner: Player,
        /// Cards moved to the winner's deck (2 for a plain round, more
        /// after wars).
        cards_won: usize,
    },
    /// The round ended the game.
    GameOver(GameResult),
}

/// Builder for a [`Game`].
///
/// ```
/// use war_engine::Game;
///
/// let mut game = Game::builder().split_ratio(0.5).build(42);
/// game.start().unwrap();
/// let result = game.play_to_completion(10_000).unwrap();
/// println!("{result}");
/// ```
pub struct GameBuilder {
    split_ratio: f64,
    reporter: Box<dyn Reporter>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            split_ratio: 0.5,
            reporter: Box::new(NullReporter),
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fraction of the shuffled deck dealt to player 1 (default 0.5).
    ///
    /// Validated at `start()`: both players must end up with cards.
    pub fn split_ratio(mut self, ratio: f64) -> Self {
        self.split_ratio = ratio;
        self
    }

    /// Inject a progress reporter (default: discard everything).
    pub fn reporter(mut self, reporter: Box<dyn Reporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Build an idle game seeded for a deterministic shuffle.
    pub fn build(self, seed: u64) -> Game {
        Game {
            stock: Deck::standard("deck"),
            deck1: Deck::empty("deck1"),
            deck2: Deck::empty("deck2"),
            pile: Deck::empty("pile"),
            rng: GameRng::new(seed),
            split_ratio: self.split_ratio,
            started: false,
            rounds: 0,
            result: None,
            reporter: self.reporter,
        }
    }

    /// Build a game from a scripted deal, already started.
    ///
    /// No shuffle or split happens; the given hands become the player
    /// decks as-is. Intended for rule-variant experiments and scenario
    /// tests where specific wars must occur.
    pub fn build_with_deal(
        self,
        hand1: impl IntoIterator<Item = Card>,
        hand2: impl IntoIterator<Item = Card>,
    ) -> Game {
        Game {
            stock: Deck::empty("deck"),
            deck1: Deck::new("deck1", hand1),
            deck2: Deck::new("deck2", hand2),
            pile: Deck::empty("pile"),
            rng: GameRng::new(0),
            split_ratio: self.split_ratio,
            started: true,
            rounds: 0,
            result: None,
            reporter: self.reporter,
        }
    }
}

/// A two-player game of War.
pub struct Game {
    /// Full deck before the deal; drained by `start`.
    stock: Deck,
    deck1: Deck,
    deck2: Deck,
    pile: Deck,
    rng: GameRng,
    split_ratio: f64,
    started: bool,
    rounds: u64,
    result: Option<GameResult>,
    reporter: Box<dyn Reporter>,
}

impl Game {
    /// Start building a game.
    #[must_use]
    pub fn builder() -> GameBuilder {
        GameBuilder::new()
    }

    /// An idle game with default settings and the given shuffle seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        GameBuilder::new().build(seed)
    }

    /// Shuffle and deal: the stock is split between the two players and
    /// the game becomes playable.
    pub fn start(&mut self) -> Result<(), EngineError> {
        if self.started {
            return Err(EngineError::AlreadyStarted);
        }

        let stock_size = self.stock.len();
        let cut = (self.split_ratio * stock_size as f64).floor() as usize;
        if cut == 0 || cut >= stock_size {
            return Err(EngineError::InvalidSplitRatio(self.split_ratio));
        }

        self.stock.shuffle(&mut self.rng);
        let stock = std::mem::replace(&mut self.stock, Deck::empty("deck"));
        let (deck1, deck2) = stock.split(self.split_ratio);
        self.deck1 = deck1;
        self.deck2 = deck2;
        self.started = true;
        Ok(())
    }

    /// Play one round: flip, compare, settle the pile, escalating into
    /// wars on ties.
    ///
    /// Calling this on a finished game returns the recorded
    /// [`RoundOutcome::GameOver`] again without touching any deck.
    pub fn play_round(&mut self) -> Result<RoundOutcome, EngineError> {
        if !self.started {
            return Err(EngineError::NotStarted);
        }
        if let Some(result) = self.result {
            return Ok(RoundOutcome::GameOver(result));
        }

        // A deck that is empty before any flip decides the game; this
        // is checked up front, never discovered via a failed flip.
        if self.deck1.is_empty() || self.deck2.is_empty() {
            return Ok(RoundOutcome::GameOver(self.finish()));
        }

        self.rounds += 1;

        let c1 = self.flip_into_pile(Player::One, "round flip")?;
        let c2 = self.flip_into_pile(Player::Two, "round flip")?;
        self.reporter.reveal(self.rounds, c1, c2);

        let settled = match c1.compare(c2, None, ScoreScale::Strict) {
            CardComparison::Winner(w) if w == c1 => Some(self.award_pile(Player::One)),
            CardComparison::Winner(_) => Some(self.award_pile(Player::Two)),
            CardComparison::Tie => self.resolve_war()?,
        };

        match settled {
            Some((winner, cards_won)) => {
                if self.deck1.is_empty() || self.deck2.is_empty() {
                    Ok(RoundOutcome::GameOver(self.finish()))
                } else {
                    Ok(RoundOutcome::Continuing { winner, cards_won })
                }
            }
            // War drained both decks simultaneously.
            None => Ok(RoundOutcome::GameOver(self.finish())),
        }
    }

    /// Drive `play_round` until the game ends, up to `max_rounds`.
    pub fn play_to_completion(&mut self, max_rounds: u64) -> Result<GameResult, EngineError> {
        loop {
            if let RoundOutcome::GameOver(result) = self.play_round()? {
                return Ok(result);
            }
            if self.rounds >= max_rounds {
                return Err(EngineError::RoundLimit { rounds: self.rounds });
            }
        }
    }

    /// Whether the game has reached a terminal state.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.result.is_some()
    }

    /// Terminal result, if the game has ended.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Player 1's deck.
    #[must_use]
    pub fn deck1(&self) -> &Deck {
        &self.deck1
    }

    /// Player 2's deck.
    #[must_use]
    pub fn deck2(&self) -> &Deck {
        &self.deck2
    }

    /// The shared pile (empty between settled rounds).
    #[must_use]
    pub fn pile(&self) -> &Deck {
        &self.pile
    }

    /// Rounds played so far.
    #[must_use]
    pub fn rounds_played(&self) -> u64 {
        self.rounds
    }

    /// Total cards across stock, both decks, and the pile.
    ///
    /// 52 at every point of a standard game; scripted deals count
    /// whatever they were built with.
    #[must_use]
    pub fn cards_in_play(&self) -> usize {
        self.stock.len() + self.deck1.len() + self.deck2.len() + self.pile.len()
    }

    /// Resolve a tied round. Returns the war winner and the cards they
    /// took, or `None` when both decks drained simultaneously (draw).
    ///
    /// Iterative by design: each loop pass is one escalation, the pile
    /// accumulates across passes, and depth is bounded by the card
    /// supply.
    fn resolve_war(&mut self) -> Result<Option<(Player, usize)>, EngineError> {
        self.reporter.war_declared(self.rounds);

        loop {
            let mut staged: SmallVec<[(Card, Card); 4]> = SmallVec::new();
            while staged.len() < 4 && !self.deck1.is_empty() && !self.deck2.is_empty() {
                let c1 = self.flip_into_pile(Player::One, "war stage flip")?;
                let c2 = self.flip_into_pile(Player::Two, "war stage flip")?;
                self.reporter.war_stage(WAR_WORDS[staged.len()], c1, c2);
                staged.push((c1, c2));
            }

            if staged.len() < 3 {
                // A deck ran dry before the war could be fought out.
                // On a double drain the contested cards stay in the
                // pile, keeping the 52-card total intact.
                return Ok(if self.deck1.is_empty() && self.deck2.is_empty() {
                    None
                } else if !self.deck1.is_empty() {
                    Some(self.award_pile(Player::One))
                } else {
                    Some(self.award_pile(Player::Two))
                });
            }

            // Staging guarantees at least three pairs here.
            let (c1, c2) = staged[staged.len() - 1];

            match c1.compare(c2, None, ScoreScale::Strict) {
                CardComparison::Winner(w) if w == c1 => {
                    return Ok(Some(self.award_pile(Player::One)))
                }
                CardComparison::Winner(_) => return Ok(Some(self.award_pile(Player::Two))),
                CardComparison::Tie => continue,
            }
        }
    }

    /// Flip the front card of a player's deck into the pile.
    ///
    /// Callers check the deck is non-empty first; a failure here is an
    /// engine invariant violation and aborts with operation context.
    fn flip_into_pile(&mut self, player: Player, op: &'static str) -> Result<Card, EngineError> {
        let deck = match player {
            Player::One => &mut self.deck1,
            Player::Two => &mut self.deck2,
        };
        let card = deck
            .flip()
            .map_err(|source| EngineError::Deck { op, source })?;
        self.pile.add_card(card);
        Ok(card)
    }

    /// Move the whole pile to the winner's deck. Returns the winner and
    /// how many cards they took.
    fn award_pile(&mut self, winner: Player) -> (Player, usize) {
        let cards = self.pile.len();
        let deck = match winner {
            Player::One => &mut self.deck1,
            Player::Two => &mut self.deck2,
        };
        deck.absorb(&mut self.pile);
        self.reporter.pile_awarded(winner, cards);
        (winner, cards)
    }

    /// Record the terminal result from the current deck states.
    fn finish(&mut self) -> GameResult {
        let result = match (self.deck1.is_empty(), self.deck2.is_empty()) {
            (true, true) => GameResult::Draw,
            (true, false) => GameResult::Winner(Player::Two),
            (false, true) => GameResult::Winner(Player::One),
            // Only reachable via the pre-round check, where at least
            // one deck is known to be empty.
            (false, false) => GameResult::Draw,
        };
        self.result = Some(result);
        self.reporter.game_over(result, self.rounds);
        result
    }
}
