//! Round rollover, game finalization and abandonment.

use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::info;

use crate::domain::events::{GameEvent, RankEntry};
use crate::domain::rules::GameRules;
use crate::domain::state::{
    GameState, GameStatus, PlayerId, PlayerSlot, RoomId, RoundState, RoundSummary, SessionId,
};
use crate::domain::turns::clear_turn;
use crate::errors::domain::DomainError;

/// Who may start a game and with what rules.
#[derive(Debug, Clone)]
pub struct StartParams {
    pub session_id: SessionId,
    pub room_id: RoomId,
    pub participants: Vec<PlayerId>,
    pub rules: GameRules,
    pub min_players: usize,
    pub max_players: usize,
}

/// Create a session in `WordSelection` for round 1 with a shuffled turn order.
pub fn start_game<R: Rng + ?Sized>(
    params: StartParams,
    rng: &mut R,
    now: OffsetDateTime,
) -> Result<(GameState, Vec<GameEvent>), DomainError> {
    let mut turn_order = params.participants;
    turn_order.sort_unstable();
    turn_order.dedup();

    if turn_order.len() < params.min_players {
        return Err(DomainError::InsufficientPlayers {
            required: params.min_players,
            available: turn_order.len(),
        });
    }
    if turn_order.len() > params.max_players {
        return Err(DomainError::invalid_phase(format!(
            "room has {} players, at most {} allowed",
            turn_order.len(),
            params.max_players
        )));
    }

    turn_order.shuffle(rng);
    let word_master_id = turn_order[0];
    let players: BTreeMap<PlayerId, PlayerSlot> = turn_order
        .iter()
        .map(|id| (*id, PlayerSlot::new(*id)))
        .collect();

    let state = GameState {
        session_id: params.session_id,
        room_id: params.room_id,
        rules: params.rules,
        status: GameStatus::WordSelection,
        round_index: 1,
        turn_order,
        word_master_id,
        players,
        current_turn: None,
        turn_deadline: None,
        turn_seq: 0,
        mutation_seq: 0,
        round: RoundState::fresh(params.rules.max_hints),
        round_history: Vec::new(),
        game_winner: None,
        started_at: now,
    };

    info!(
        session_id = %state.session_id,
        room_id = %state.room_id,
        players = state.turn_order.len(),
        total_rounds = state.rules.total_rounds,
        "Game started"
    );

    let events = vec![word_selection_started(&state)];
    Ok((state, events))
}

fn word_selection_started(state: &GameState) -> GameEvent {
    GameEvent::WordSelectionStarted {
        round: state.round_index,
        total_rounds: state.rules.total_rounds,
        word_master_id: state.word_master_id,
    }
}

/// Close the live round and append its summary. Clears the turn.
pub(crate) fn finish_round(state: &mut GameState, winner: Option<PlayerId>) -> GameEvent {
    let solved = winner.is_some();
    if let Some(w) = winner {
        if let Some(slot) = state.players.get_mut(&w) {
            slot.rounds_won += 1;
        }
    }
    state.round.winner = winner;
    clear_turn(state);
    state.status = GameStatus::RoundEnd;

    let summary = RoundSummary {
        round: state.round_index,
        word: state
            .round
            .secret
            .as_ref()
            .map(|w| w.as_str().to_string())
            .unwrap_or_default(),
        word_master_id: state.word_master_id,
        winner_id: winner,
        solved,
    };
    state.round_history.push(summary.clone());

    info!(
        session_id = %state.session_id,
        round = state.round_index,
        solved,
        "Round ended"
    );
    GameEvent::RoundEnded { summary }
}

/// Settle delay elapsed: start the next round or finalize the game.
pub fn advance_after_settle(state: &mut GameState) -> Vec<GameEvent> {
    if state.status != GameStatus::RoundEnd {
        return Vec::new();
    }
    state.bump_mutation();

    if state.is_final_round() {
        return vec![finalize(state)];
    }

    let wm_pos = state.position_of(state.word_master_id).unwrap_or(0);
    state.word_master_id = state.turn_order[(wm_pos + 1) % state.turn_order.len()];
    state.round_index += 1;
    state.round = RoundState::fresh(state.rules.max_hints);
    state.status = GameStatus::WordSelection;

    info!(
        session_id = %state.session_id,
        round = state.round_index,
        word_master_id = state.word_master_id,
        "Next round"
    );
    vec![word_selection_started(state)]
}

/// Final ranking: score desc, then earliest to reach it, then turn order.
pub fn ranking(state: &GameState) -> Vec<RankEntry> {
    let mut order: Vec<(usize, &PlayerSlot)> = state
        .turn_order
        .iter()
        .enumerate()
        .filter_map(|(pos, id)| state.players.get(id).map(|p| (pos, p)))
        .collect();
    order.sort_by(|(pa, a), (pb, b)| {
        b.score
            .cmp(&a.score)
            .then(a.score_reached_at.cmp(&b.score_reached_at))
            .then(pa.cmp(pb))
    });
    order
        .into_iter()
        .enumerate()
        .map(|(i, (_, p))| RankEntry {
            rank: i + 1,
            player_id: p.id,
            score: p.score,
        })
        .collect()
}

fn finalize(state: &mut GameState) -> GameEvent {
    let ranking = ranking(state);
    state.game_winner = ranking.first().map(|r| r.player_id);
    clear_turn(state);
    state.status = GameStatus::GameOver;

    info!(
        session_id = %state.session_id,
        winner_id = ?state.game_winner,
        rounds = state.round_history.len(),
        "Game over"
    );
    GameEvent::GameEnded {
        winner_id: state.game_winner,
        ranking,
    }
}

/// Every participant is gone: end the session without a winner.
pub(crate) fn abandon(state: &mut GameState) -> GameEvent {
    clear_turn(state);
    state.status = GameStatus::Abandoned;
    info!(
        session_id = %state.session_id,
        round = state.round_index,
        "Game abandoned"
    );
    GameEvent::GameAbandoned {
        round: state.round_index,
    }
}

/// Per-participant figures handed to the stats collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerResult {
    pub player_id: PlayerId,
    pub score: i64,
    pub won: bool,
    pub words_guessed: u32,
    pub correct_letters: u32,
    pub wrong_guesses: u32,
    pub rounds_won: u32,
}

/// Terminal summary of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub session_id: SessionId,
    pub room_id: RoomId,
    pub status: GameStatus,
    pub winner_id: Option<PlayerId>,
    pub players: Vec<PlayerResult>,
    pub round_history: Vec<RoundSummary>,
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
}

pub fn game_result(state: &GameState) -> GameResult {
    let players = state
        .turn_order
        .iter()
        .filter_map(|id| state.players.get(id))
        .map(|p| PlayerResult {
            player_id: p.id,
            score: p.score,
            won: state.game_winner == Some(p.id),
            words_guessed: p.correct_guesses,
            correct_letters: p.correct_guesses,
            wrong_guesses: p.wrong_guesses,
            rounds_won: p.rounds_won,
        })
        .collect();
    GameResult {
        session_id: state.session_id,
        room_id: state.room_id.clone(),
        status: state.status,
        winner_id: state.game_winner,
        players,
        round_history: state.round_history.clone(),
        started_at: state.started_at,
    }
}
