//! Score deltas for guesses, round outcomes and hints.
//!
//! Pure functions only. Callers apply every delta produced by one event in
//! the same mutation.

use crate::domain::state::PlayerId;

pub const CORRECT_LETTER: i64 = 10;
pub const WRONG_LETTER: i64 = -5;
pub const SOLVE_WORD: i64 = 50;
pub const WORD_MASTER_CONSOLATION: i64 = 10;
pub const WORD_MASTER_UNDEFEATED: i64 = 30;
pub const HINT_COST: i64 = -15;

/// One score change attributed to a participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreDelta {
    pub player_id: PlayerId,
    pub delta: i64,
}

impl ScoreDelta {
    pub const fn new(player_id: PlayerId, delta: i64) -> Self {
        Self { player_id, delta }
    }
}

/// How a round was resolved by the last guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Continues,
    Solved,
    BudgetExhausted,
}

/// Deltas for a single letter guess and whatever it resolved.
pub fn guess_deltas(
    guesser: PlayerId,
    word_master: PlayerId,
    correct: bool,
    outcome: RoundOutcome,
) -> Vec<ScoreDelta> {
    let mut deltas = vec![ScoreDelta::new(
        guesser,
        if correct { CORRECT_LETTER } else { WRONG_LETTER },
    )];
    match outcome {
        RoundOutcome::Continues => {}
        RoundOutcome::Solved => {
            deltas.push(ScoreDelta::new(guesser, SOLVE_WORD));
            deltas.push(ScoreDelta::new(word_master, WORD_MASTER_CONSOLATION));
        }
        RoundOutcome::BudgetExhausted => {
            deltas.push(ScoreDelta::new(word_master, WORD_MASTER_UNDEFEATED));
        }
    }
    deltas
}

pub fn hint_delta(word_master: PlayerId) -> ScoreDelta {
    ScoreDelta::new(word_master, HINT_COST)
}

/// Solve beats budget exhaustion when one guess triggers both.
pub fn classify(word_complete: bool, incorrect_count: u8, max_incorrect: u8) -> RoundOutcome {
    if word_complete {
        RoundOutcome::Solved
    } else if incorrect_count >= max_incorrect {
        RoundOutcome::BudgetExhausted
    } else {
        RoundOutcome::Continues
    }
}
