use std::time::Duration;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 6;
pub const DEFAULT_ROUNDS: u8 = 5;
pub const MAX_INCORRECT_GUESSES: u8 = 6;
pub const MAX_HINTS: u8 = 3;

pub const TURN_TIME_SECONDS: u64 = 30;
pub const DISCONNECT_GRACE_SECONDS: u64 = 10;
pub const ROUND_SETTLE_SECONDS: u64 = 5;

pub const HINT_MAX_CHARS: usize = 100;

/// Per-game rules, fixed when the session starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRules {
    pub total_rounds: u8,
    pub max_incorrect: u8,
    pub max_hints: u8,
    pub turn_time: Duration,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            total_rounds: DEFAULT_ROUNDS,
            max_incorrect: MAX_INCORRECT_GUESSES,
            max_hints: MAX_HINTS,
            turn_time: Duration::from_secs(TURN_TIME_SECONDS),
        }
    }
}
