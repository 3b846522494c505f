//! Logical notifications produced by domain transitions.
//!
//! Events are transport-agnostic; the realtime layer decides the audience
//! and fans them out through the broadcast gateway.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::snapshot::GameSnapshot;
use crate::domain::state::{PlayerId, RoundSummary};
use crate::domain::word::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    Timeout,
    Disconnect,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreLine {
    pub player_id: PlayerId,
    pub delta: i64,
    pub score: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankEntry {
    pub rank: usize,
    pub player_id: PlayerId,
    pub score: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    WordSelectionStarted {
        round: u8,
        total_rounds: u8,
        word_master_id: PlayerId,
    },
    /// Public metadata only; the word itself stays hidden.
    WordSet {
        round: u8,
        word_length: usize,
        category: Category,
    },
    LetterResult {
        player_id: PlayerId,
        letter: char,
        correct: bool,
        revealed_positions: Vec<usize>,
        word_complete: bool,
        incorrect_budget_exhausted: bool,
    },
    WordMaskUpdate {
        masked_word: String,
        guessed_letters: Vec<char>,
        incorrect_count: u8,
        max_incorrect: u8,
    },
    ScoreUpdate {
        changes: Vec<ScoreLine>,
    },
    TurnChanged {
        current_turn: Option<PlayerId>,
        #[serde(with = "time::serde::rfc3339::option")]
        deadline: Option<OffsetDateTime>,
    },
    TurnTimerTick {
        player_id: PlayerId,
        seconds_left: u64,
    },
    TurnSkipped {
        player_id: PlayerId,
        reason: SkipReason,
    },
    HintIssued {
        hint: String,
        hints_remaining: u8,
    },
    /// Reveals the secret word.
    RoundEnded {
        summary: RoundSummary,
    },
    GameEnded {
        winner_id: Option<PlayerId>,
        ranking: Vec<RankEntry>,
    },
    GameAbandoned {
        round: u8,
    },
    PlayerDisconnected {
        player_id: PlayerId,
    },
    /// Grace period elapsed without a reconnect.
    PlayerUnavailable {
        player_id: PlayerId,
    },
    PlayerReconnected {
        player_id: PlayerId,
    },
    /// Private resync for one viewer.
    StateSync {
        snapshot: Box<GameSnapshot>,
    },
}

impl GameEvent {
    /// Wire name, matching the serde tag.
    pub fn kind(&self) -> &'static str {
        match self {
            GameEvent::WordSelectionStarted { .. } => "word_selection_started",
            GameEvent::WordSet { .. } => "word_set",
            GameEvent::LetterResult { .. } => "letter_result",
            GameEvent::WordMaskUpdate { .. } => "word_mask_update",
            GameEvent::ScoreUpdate { .. } => "score_update",
            GameEvent::TurnChanged { .. } => "turn_changed",
            GameEvent::TurnTimerTick { .. } => "turn_timer_tick",
            GameEvent::TurnSkipped { .. } => "turn_skipped",
            GameEvent::HintIssued { .. } => "hint_issued",
            GameEvent::RoundEnded { .. } => "round_ended",
            GameEvent::GameEnded { .. } => "game_ended",
            GameEvent::GameAbandoned { .. } => "game_abandoned",
            GameEvent::PlayerDisconnected { .. } => "player_disconnected",
            GameEvent::PlayerUnavailable { .. } => "player_unavailable",
            GameEvent::PlayerReconnected { .. } => "player_reconnected",
            GameEvent::StateSync { .. } => "state_sync",
        }
    }
}
