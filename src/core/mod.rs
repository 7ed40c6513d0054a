//! Core primitives: players, results, deterministic RNG.

pub mod player;
pub mod rng;

pub use player::{GameResult, Player};
pub use rng::{GameRng, GameRngState};
