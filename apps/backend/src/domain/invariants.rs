//! Structural checks that must hold after every accepted mutation.

use crate::domain::state::{ConnectionState, GameState, GameStatus};

/// First violated invariant, described.
pub fn check(state: &GameState) -> Result<(), String> {
    let round = &state.round;

    if let Some(c) = round.correct_letters.intersection(&round.incorrect_letters).next() {
        return Err(format!("letter '{c}' is both correct and incorrect"));
    }
    if round.guess_log.len() != round.correct_letters.len() + round.incorrect_letters.len() {
        return Err("guess log does not match correct and incorrect sets".into());
    }
    if usize::from(round.incorrect_count) != round.incorrect_letters.len() {
        return Err(format!(
            "incorrect count {} != {} incorrect letters",
            round.incorrect_count,
            round.incorrect_letters.len()
        ));
    }
    if round.incorrect_count > state.rules.max_incorrect {
        return Err("incorrect count exceeds budget".into());
    }
    if round.hints_remaining > state.rules.max_hints {
        return Err("hints remaining exceeds max hints".into());
    }
    if usize::from(state.rules.max_hints - round.hints_remaining) != round.hints.len() {
        return Err("hints issued does not match hints remaining".into());
    }
    if !state.turn_order.contains(&state.word_master_id) {
        return Err("word master is not in turn order".into());
    }
    if let Some(turn) = state.current_turn {
        if state.status != GameStatus::InProgress {
            return Err(format!("turn held outside of play in {:?}", state.status));
        }
        if turn == state.word_master_id {
            return Err("word master holds the turn".into());
        }
        if !state.turn_order.contains(&turn) {
            return Err(format!("turn holder {turn} is not a participant"));
        }
        let holder_present = state
            .players
            .get(&turn)
            .is_some_and(|p| p.connection != ConnectionState::Disconnected);
        if !holder_present {
            return Err(format!("turn holder {turn} is disconnected"));
        }
    }
    let completed = match state.status {
        GameStatus::WordSelection | GameStatus::InProgress | GameStatus::Abandoned => {
            state.round_index.saturating_sub(1)
        }
        GameStatus::RoundEnd | GameStatus::GameOver => state.round_index,
    };
    if state.status != GameStatus::Abandoned
        && state.round_history.len() != usize::from(completed)
    {
        return Err(format!(
            "round history has {} entries, expected {completed}",
            state.round_history.len()
        ));
    }
    if state.status == GameStatus::GameOver && state.game_winner.is_none() {
        return Err("game over without a winner".into());
    }
    Ok(())
}
