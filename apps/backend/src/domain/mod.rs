//! Domain layer: pure session state machine, scoring and turn rules.

pub mod connection;
pub mod events;
pub mod guessing;
pub mod invariants;
pub mod round_lifecycle;
pub mod rules;
pub mod scoring;
pub mod snapshot;
pub mod state;
pub mod turns;
pub mod word;

#[cfg(test)]
mod tests_scoring;
#[cfg(test)]
mod tests_snapshot;
#[cfg(test)]
mod tests_turns;

// Re-exports for ergonomics
pub use events::{GameEvent, RankEntry, ScoreLine, SkipReason};
pub use guessing::GuessOutcome;
pub use round_lifecycle::{GameResult, PlayerResult, StartParams};
pub use rules::GameRules;
pub use snapshot::{snapshot_for, GameSnapshot};
pub use state::{ConnectionState, GameState, GameStatus, PlayerId, RoomId, RoundSummary, SessionId};
pub use word::{Category, SecretWord, WordRules};
