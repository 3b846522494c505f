use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::events::{GameEvent, ScoreLine};
use crate::domain::rules::GameRules;
use crate::domain::scoring::ScoreDelta;
use crate::domain::word::{Category, SecretWord};
use crate::errors::domain::{DomainError, NotFoundKind};

pub type PlayerId = i64;
pub type SessionId = Uuid;
pub type RoomId = String;

/// Session status. `GameOver` and `Abandoned` are terminal.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    /// Waiting for the word-master to supply or request a word.
    WordSelection,
    /// Guessers take turns against the secret word.
    InProgress,
    /// Round resolved; waiting out the settle delay.
    RoundEnd,
    GameOver,
    /// Every participant dropped past their grace period.
    Abandoned,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::GameOver | GameStatus::Abandoned)
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionState {
    Connected,
    /// Dropped, still inside the grace window.
    PendingDisconnect,
    Disconnected,
}

/// Per-participant game record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSlot {
    pub id: PlayerId,
    pub score: i64,
    pub connection: ConnectionState,
    pub correct_guesses: u32,
    pub wrong_guesses: u32,
    pub rounds_won: u32,
    /// Mutation sequence at which `score` was last changed (tie-break).
    pub score_reached_at: u64,
}

impl PlayerSlot {
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            score: 0,
            connection: ConnectionState::Connected,
            correct_guesses: 0,
            wrong_guesses: 0,
            rounds_won: 0,
            score_reached_at: 0,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connection == ConnectionState::Connected
    }
}

/// State that resets at the start of every round.
#[derive(Debug, Clone, Default)]
pub struct RoundState {
    pub secret: Option<SecretWord>,
    pub category: Option<Category>,
    pub correct_letters: BTreeSet<char>,
    pub incorrect_letters: BTreeSet<char>,
    /// Guessed letters in the order they were played.
    pub guess_log: Vec<char>,
    pub incorrect_count: u8,
    pub hints: Vec<String>,
    pub hints_remaining: u8,
    pub winner: Option<PlayerId>,
}

impl RoundState {
    pub fn fresh(max_hints: u8) -> Self {
        Self {
            hints_remaining: max_hints,
            ..Self::default()
        }
    }

    pub fn has_guessed(&self, letter: char) -> bool {
        self.correct_letters.contains(&letter) || self.incorrect_letters.contains(&letter)
    }

    pub fn guessed_letters(&self) -> BTreeSet<char> {
        self.correct_letters
            .union(&self.incorrect_letters)
            .copied()
            .collect()
    }

    pub fn word_length(&self) -> usize {
        self.secret.as_ref().map_or(0, SecretWord::len)
    }

    pub fn masked_word(&self) -> String {
        self.secret
            .as_ref()
            .map(|w| w.mask(&self.correct_letters))
            .unwrap_or_default()
    }
}

/// Immutable record of one completed round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub round: u8,
    pub word: String,
    pub word_master_id: PlayerId,
    pub winner_id: Option<PlayerId>,
    pub solved: bool,
}

/// Entire session container, sufficient for pure domain operations.
#[derive(Debug, Clone)]
pub struct GameState {
    pub session_id: SessionId,
    pub room_id: RoomId,
    pub rules: GameRules,
    pub status: GameStatus,
    /// 1-based.
    pub round_index: u8,
    /// Fixed for the whole game.
    pub turn_order: Vec<PlayerId>,
    pub word_master_id: PlayerId,
    pub players: BTreeMap<PlayerId, PlayerSlot>,
    pub current_turn: Option<PlayerId>,
    pub turn_deadline: Option<OffsetDateTime>,
    /// Bumped every time a turn is armed or cleared; stale timer fires
    /// carry an older value and are ignored.
    pub turn_seq: u64,
    /// Bumped on every accepted mutation.
    pub mutation_seq: u64,
    pub round: RoundState,
    pub round_history: Vec<RoundSummary>,
    pub game_winner: Option<PlayerId>,
    pub started_at: OffsetDateTime,
}

impl GameState {
    pub fn player(&self, id: PlayerId) -> Result<&PlayerSlot, DomainError> {
        self.players
            .get(&id)
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Participant, id.to_string()))
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Result<&mut PlayerSlot, DomainError> {
        self.players
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Participant, id.to_string()))
    }

    pub fn is_participant(&self, id: PlayerId) -> bool {
        self.players.contains_key(&id)
    }

    pub fn is_word_master(&self, id: PlayerId) -> bool {
        self.word_master_id == id
    }

    pub fn position_of(&self, id: PlayerId) -> Option<usize> {
        self.turn_order.iter().position(|p| *p == id)
    }

    /// Connected and not the word-master.
    pub fn is_eligible_guesser(&self, id: PlayerId) -> bool {
        id != self.word_master_id && self.players.get(&id).is_some_and(PlayerSlot::is_connected)
    }

    pub fn all_disconnected(&self) -> bool {
        self.players
            .values()
            .all(|p| p.connection == ConnectionState::Disconnected)
    }

    pub fn is_final_round(&self) -> bool {
        self.round_index >= self.rules.total_rounds
    }

    pub(crate) fn bump_mutation(&mut self) -> u64 {
        self.mutation_seq += 1;
        self.mutation_seq
    }

    /// Apply all deltas of one event and stamp when each score was reached.
    pub(crate) fn apply_deltas(&mut self, deltas: &[ScoreDelta]) -> GameEvent {
        let seq = self.mutation_seq;
        let mut changes = Vec::with_capacity(deltas.len());
        for d in deltas {
            if let Some(slot) = self.players.get_mut(&d.player_id) {
                slot.score += d.delta;
                slot.score_reached_at = seq;
                changes.push(ScoreLine {
                    player_id: d.player_id,
                    delta: d.delta,
                    score: slot.score,
                });
            }
        }
        GameEvent::ScoreUpdate { changes }
    }
}
