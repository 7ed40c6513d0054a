//! Card types: ranks, suits, scoring scales, and comparison.

pub mod card;

pub use card::{Card, CardComparison, CardError, Rank, ScoreScale, Suit};
