//! Word submission, letter guesses and hints.

use time::OffsetDateTime;
use tracing::debug;

use crate::domain::events::GameEvent;
use crate::domain::round_lifecycle::finish_round;
use crate::domain::rules::HINT_MAX_CHARS;
use crate::domain::scoring::{classify, guess_deltas, hint_delta, RoundOutcome};
use crate::domain::state::{ConnectionState, GameState, GameStatus, PlayerId, RoundState};
use crate::domain::turns::{advance_turn, begin_turn, next_eligible_after};
use crate::domain::word::{normalize_letter, Category, SecretWord};
use crate::errors::domain::{DomainError, ValidationKind};

/// What a guess did, returned to the guesser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    pub letter: char,
    pub correct: bool,
    pub revealed_positions: Vec<usize>,
    pub word_complete: bool,
    pub incorrect_budget_exhausted: bool,
}

/// Check that `caller` may set the word right now, without changing state.
pub fn ensure_can_submit(state: &GameState, caller: PlayerId) -> Result<(), DomainError> {
    state.player(caller)?;
    if !state.is_word_master(caller) {
        return Err(DomainError::NotWordMaster);
    }
    if state.status != GameStatus::WordSelection {
        return Err(DomainError::invalid_phase("not in word selection"));
    }
    let any_guesser_left = state.turn_order.iter().any(|id| {
        *id != state.word_master_id
            && state
                .players
                .get(id)
                .is_some_and(|p| p.connection != ConnectionState::Disconnected)
    });
    if !any_guesser_left {
        return Err(DomainError::NoEligiblePlayers);
    }
    Ok(())
}

/// Fix the round's secret word and hand the first turn out.
///
/// `word` must already have passed the word source's checks.
pub fn accept_word(
    state: &mut GameState,
    caller: PlayerId,
    word: SecretWord,
    category: Category,
    now: OffsetDateTime,
) -> Result<Vec<GameEvent>, DomainError> {
    ensure_can_submit(state, caller)?;
    if word.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::InvalidWord,
            "Word cannot be empty",
        ));
    }

    state.bump_mutation();
    let mask = word.blank_mask();
    let word_length = word.len();
    state.round = RoundState {
        secret: Some(word),
        category: Some(category),
        ..RoundState::fresh(state.rules.max_hints)
    };
    state.status = GameStatus::InProgress;

    let first = next_eligible_after(state, state.word_master_id);
    debug!(
        session_id = %state.session_id,
        round = state.round_index,
        word_length,
        first_turn = ?first,
        "Word set"
    );

    Ok(vec![
        GameEvent::WordSet {
            round: state.round_index,
            word_length,
            category,
        },
        GameEvent::WordMaskUpdate {
            masked_word: mask,
            guessed_letters: Vec::new(),
            incorrect_count: 0,
            max_incorrect: state.rules.max_incorrect,
        },
        begin_turn(state, first, now),
    ])
}

/// Apply a letter guess from the current turn holder.
pub fn guess_letter(
    state: &mut GameState,
    caller: PlayerId,
    raw_letter: &str,
    now: OffsetDateTime,
) -> Result<(GuessOutcome, Vec<GameEvent>), DomainError> {
    state.player(caller)?;
    if state.status != GameStatus::InProgress {
        return Err(DomainError::invalid_phase("round is not in progress"));
    }
    if state.current_turn != Some(caller) {
        return Err(DomainError::NotYourTurn);
    }
    let letter = normalize_letter(raw_letter)?;
    if state.round.has_guessed(letter) {
        return Err(DomainError::LetterAlreadyGuessed(letter));
    }
    let Some(secret) = state.round.secret.clone() else {
        return Err(DomainError::invalid_phase("no word set for this round"));
    };

    state.bump_mutation();
    state.round.guess_log.push(letter);
    let correct = secret.contains(letter);
    let revealed_positions = secret.positions(letter);
    let player = state.player_mut(caller)?;
    if correct {
        player.correct_guesses += 1;
        state.round.correct_letters.insert(letter);
    } else {
        player.wrong_guesses += 1;
        state.round.incorrect_letters.insert(letter);
        state.round.incorrect_count += 1;
    }

    let word_complete = secret.is_revealed_by(&state.round.correct_letters);
    let outcome = classify(
        word_complete,
        state.round.incorrect_count,
        state.rules.max_incorrect,
    );
    let deltas = guess_deltas(caller, state.word_master_id, correct, outcome);

    let result = GuessOutcome {
        letter,
        correct,
        revealed_positions: revealed_positions.clone(),
        word_complete,
        incorrect_budget_exhausted: outcome == RoundOutcome::BudgetExhausted,
    };

    let mut events = vec![
        GameEvent::LetterResult {
            player_id: caller,
            letter,
            correct,
            revealed_positions,
            word_complete: result.word_complete,
            incorrect_budget_exhausted: result.incorrect_budget_exhausted,
        },
        GameEvent::WordMaskUpdate {
            masked_word: state.round.masked_word(),
            guessed_letters: state.round.guess_log.clone(),
            incorrect_count: state.round.incorrect_count,
            max_incorrect: state.rules.max_incorrect,
        },
        state.apply_deltas(&deltas),
    ];

    match outcome {
        RoundOutcome::Continues => events.push(advance_turn(state, now)),
        RoundOutcome::Solved => events.push(finish_round(state, Some(caller))),
        RoundOutcome::BudgetExhausted => events.push(finish_round(state, None)),
    }

    Ok((result, events))
}

/// Word-master spends a hint.
pub fn send_hint(
    state: &mut GameState,
    caller: PlayerId,
    text: &str,
) -> Result<Vec<GameEvent>, DomainError> {
    state.player(caller)?;
    if !state.is_word_master(caller) {
        return Err(DomainError::NotWordMaster);
    }
    if state.status != GameStatus::InProgress {
        return Err(DomainError::invalid_phase("round is not in progress"));
    }
    let hint = text.trim();
    if hint.is_empty() || hint.chars().count() > HINT_MAX_CHARS {
        return Err(DomainError::validation(
            ValidationKind::InvalidHint,
            format!("Hint must be 1-{HINT_MAX_CHARS} characters"),
        ));
    }
    if state.round.hints_remaining == 0 {
        return Err(DomainError::NoHintsRemaining);
    }

    state.bump_mutation();
    state.round.hints.push(hint.to_string());
    state.round.hints_remaining -= 1;
    let score = state.apply_deltas(&[hint_delta(caller)]);

    Ok(vec![
        GameEvent::HintIssued {
            hint: hint.to_string(),
            hints_remaining: state.round.hints_remaining,
        },
        score,
    ])
}
