//! # war-engine
//!
//! A two-player simulation engine for the card game War, including the
//! "I Declare War" tie-resolution variant.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: every shuffle goes through a seeded RNG, so a
//!    full game is replayable from its seed.
//!
//! 2. **No hidden control flow**: deck exhaustion is handled by
//!    pre-condition checks in the round protocol, never by catching a
//!    failed flip. War escalation is an iterative loop, not recursion.
//!
//! 3. **Silent core**: the engine never prints; progress flows through
//!    an injectable [`Reporter`] hook.
//!
//! ## Modules
//!
//! - `core`: players, terminal results, deterministic RNG
//! - `cards`: ranks, suits, scoring scales, comparison
//! - `deck`: named FIFO card collections (player decks and the pile)
//! - `game`: round protocol, war escalation, reporting hooks
//!
//! ## Usage
//!
//! ```
//! use war_engine::{Game, RoundOutcome};
//!
//! let mut game = Game::new(42);
//! game.start().unwrap();
//!
//! let result = loop {
//!     match game.play_round().unwrap() {
//!         RoundOutcome::Continuing { .. } => continue,
//!         RoundOutcome::GameOver(result) => break result,
//!     }
//! };
//! println!("{result}");
//! ```

pub mod cards;
pub mod core;
pub mod deck;
pub mod game;

// Re-export commonly used types
pub use crate::core::{GameResult, GameRng, GameRngState, Player};

pub use crate::cards::{Card, CardComparison, CardError, Rank, ScoreScale, Suit};

pub use crate::deck::{Deck, DeckError};

pub use crate::game::{
    EngineError, Game, GameBuilder, LogReporter, NullReporter, Reporter, RoundOutcome, WAR_WORDS,
};
