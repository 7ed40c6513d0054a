//! Injectable progress reporting.
//!
//! The engine never prints. Anything a spectator would want to see --
//! card reveals, war announcements, the final result -- goes through a
//! [`Reporter`] injected at build time. The default [`NullReporter`]
//! discards everything; [`LogReporter`] forwards to the `log` crate.

use crate::cards::Card;
use crate::core::{GameResult, Player};

/// The traditional words chanted while staging war cards.
pub const WAR_WORDS: [&str; 4] = ["I", "DE", "CLARE", "WAR!"];

/// Observer hook for game progress.
///
/// All methods have empty default bodies, so implementations only
/// override the events they care about.
pub trait Reporter {
    /// One card flipped from each deck at the start of a round.
    fn reveal(&mut self, round: u64, card1: Card, card2: Card) {
        let _ = (round, card1, card2);
    }

    /// A round comparison tied and a war begins.
    fn war_declared(&mut self, round: u64) {
        let _ = round;
    }

    /// One pair of cards staged during a war, with its chant word.
    fn war_stage(&mut self, word: &str, card1: Card, card2: Card) {
        let _ = (word, card1, card2);
    }

    /// The pile was awarded to a round or war winner.
    fn pile_awarded(&mut self, winner: Player, cards: usize) {
        let _ = (winner, cards);
    }

    /// The game reached a terminal state.
    fn game_over(&mut self, result: GameResult, rounds: u64) {
        let _ = (result, rounds);
    }
}

/// Reporter that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {}

/// Reporter that emits progress via the `log` crate.
///
/// Per-round detail goes to `debug!`, war declarations and the final
/// result to `info!`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn reveal(&mut self, round: u64, card1: Card, card2: Card) {
        log::debug!("round {round}: {card1} vs. {card2}");
    }

    fn war_declared(&mut self, round: u64) {
        log::info!("round {round}: tie -- I declare war");
    }

    fn war_stage(&mut self, word: &str, card1: Card, card2: Card) {
        log::debug!("{word} {card1} {card2}");
    }

    fn pile_awarded(&mut self, winner: Player, cards: usize) {
        log::debug!("{winner} takes the pile ({cards} cards)");
    }

    fn game_over(&mut self, result: GameResult, rounds: u64) {
        log::info!("{result} after {rounds} rounds");
    }
}
