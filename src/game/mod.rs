//! Game orchestration: round protocol, war escalation, reporting.

pub mod engine;
pub mod report;

pub use engine::{EngineError, Game, GameBuilder, RoundOutcome};
pub use report::{LogReporter, NullReporter, Reporter, WAR_WORDS};
