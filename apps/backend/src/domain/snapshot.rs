//! Per-viewer snapshot of session state.
//!
//! The secret word appears only for the word-master, and never during word
//! selection.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::state::{
    ConnectionState, GameState, GameStatus, PlayerId, RoundSummary, SessionId,
};
use crate::domain::word::Category;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerPublic {
    pub player_id: PlayerId,
    pub score: i64,
    pub connection: ConnectionState,
    pub correct_guesses: u32,
    pub wrong_guesses: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub session_id: SessionId,
    pub status: GameStatus,
    pub round: u8,
    pub total_rounds: u8,
    pub word_master_id: PlayerId,
    pub is_word_master: bool,
    pub turn_order: Vec<PlayerId>,
    pub current_turn: Option<PlayerId>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub turn_deadline: Option<OffsetDateTime>,
    pub masked_word: String,
    pub word_length: usize,
    pub category: Option<Category>,
    pub guessed_letters: Vec<char>,
    pub incorrect_count: u8,
    pub max_incorrect: u8,
    pub hints: Vec<String>,
    pub hints_remaining: u8,
    pub players: Vec<PlayerPublic>,
    pub round_winner: Option<PlayerId>,
    pub game_winner: Option<PlayerId>,
    pub round_history: Vec<RoundSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
}

pub fn snapshot_for(state: &GameState, viewer: PlayerId) -> GameSnapshot {
    let is_word_master = state.is_word_master(viewer);
    let word = if is_word_master && state.status != GameStatus::WordSelection {
        state.round.secret.as_ref().map(|w| w.as_str().to_string())
    } else {
        None
    };

    GameSnapshot {
        session_id: state.session_id,
        status: state.status,
        round: state.round_index,
        total_rounds: state.rules.total_rounds,
        word_master_id: state.word_master_id,
        is_word_master,
        turn_order: state.turn_order.clone(),
        current_turn: state.current_turn,
        turn_deadline: state.turn_deadline,
        masked_word: state.round.masked_word(),
        word_length: state.round.word_length(),
        category: state.round.category,
        guessed_letters: state.round.guess_log.clone(),
        incorrect_count: state.round.incorrect_count,
        max_incorrect: state.rules.max_incorrect,
        hints: state.round.hints.clone(),
        hints_remaining: state.round.hints_remaining,
        players: state
            .turn_order
            .iter()
            .filter_map(|id| state.players.get(id))
            .map(|p| PlayerPublic {
                player_id: p.id,
                score: p.score,
                connection: p.connection,
                correct_guesses: p.correct_guesses,
                wrong_guesses: p.wrong_guesses,
            })
            .collect(),
        round_winner: state.round.winner,
        game_winner: state.game_winner,
        round_history: state.round_history.clone(),
        word,
    }
}
