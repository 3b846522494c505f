use time::Duration;

use crate::domain::events::{GameEvent, SkipReason};
use crate::domain::guessing::guess_letter;
use crate::domain::invariants;
use crate::domain::state::ConnectionState;
use crate::domain::test_state_helpers::{in_progress, T0};
use crate::domain::turns::{expire_turn, next_eligible_after, turn_tick};

#[test]
fn next_eligible_skips_word_master_and_absent_players() {
    let mut state = in_progress(&[1, 2, 3, 4], "cat");
    assert_eq!(next_eligible_after(&state, 1), Some(2));
    assert_eq!(next_eligible_after(&state, 4), Some(2));

    state.players.get_mut(&3).unwrap().connection = ConnectionState::PendingDisconnect;
    assert_eq!(next_eligible_after(&state, 2), Some(4));

    state.players.get_mut(&4).unwrap().connection = ConnectionState::Disconnected;
    assert_eq!(next_eligible_after(&state, 2), Some(2), "wraps back to self");

    state.players.get_mut(&2).unwrap().connection = ConnectionState::Disconnected;
    assert_eq!(next_eligible_after(&state, 2), None);
}

#[test]
fn timeout_skips_to_next_guesser_and_rearms() {
    let mut state = in_progress(&[1, 2, 3], "cat");
    let seq = state.turn_seq;
    let fired_at = T0 + Duration::seconds(30);

    let events = expire_turn(&mut state, seq, fired_at);

    assert_eq!(
        events[0],
        GameEvent::TurnSkipped {
            player_id: 2,
            reason: SkipReason::Timeout
        }
    );
    assert_eq!(state.current_turn, Some(3));
    assert_eq!(state.turn_deadline, Some(fired_at + Duration::seconds(30)));
    assert!(state.turn_seq > seq);
    assert_eq!(state.round.guess_log.len(), 0, "skip consumes no letter");
    assert_eq!(state.players[&2].score, 0, "skip applies no score");
    invariants::check(&state).unwrap();
}

#[test]
fn stale_timer_after_guess_is_ignored() {
    let mut state = in_progress(&[1, 2, 3], "cat");
    let armed_for = state.turn_seq;

    // Guess lands first; the timer for that turn fires afterwards.
    guess_letter(&mut state, 2, "z", T0).unwrap();
    let after_guess = state.clone();
    let events = expire_turn(&mut state, armed_for, T0 + Duration::seconds(30));

    assert!(events.is_empty());
    assert_eq!(state.current_turn, after_guess.current_turn);
    assert_eq!(state.turn_seq, after_guess.turn_seq);
}

#[test]
fn guess_after_timeout_is_not_your_turn() {
    let mut state = in_progress(&[1, 2, 3], "cat");
    let seq = state.turn_seq;

    expire_turn(&mut state, seq, T0 + Duration::seconds(30));
    let err = guess_letter(&mut state, 2, "c", T0 + Duration::seconds(30)).unwrap_err();

    assert_eq!(err, crate::errors::domain::DomainError::NotYourTurn);
    assert!(state.round.guess_log.is_empty());
}

#[test]
fn tick_counts_down_to_zero() {
    let state = in_progress(&[1, 2], "cat");
    let seq = state.turn_seq;

    let tick = turn_tick(&state, seq, T0 + Duration::seconds(1)).unwrap();
    assert_eq!(
        tick,
        GameEvent::TurnTimerTick {
            player_id: 2,
            seconds_left: 29
        }
    );
    let late = turn_tick(&state, seq, T0 + Duration::seconds(31)).unwrap();
    assert!(matches!(late, GameEvent::TurnTimerTick { seconds_left: 0, .. }));
    assert!(turn_tick(&state, seq + 1, T0).is_none());
}
