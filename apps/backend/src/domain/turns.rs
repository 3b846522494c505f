//! Turn rotation, arming and timeout skips.
//!
//! The domain only records which turn is live (`turn_seq`) and its deadline.
//! Arming the actual countdown belongs to the session actor, which re-reads
//! these fields after every mutation.

use time::OffsetDateTime;

use crate::domain::events::{GameEvent, SkipReason};
use crate::domain::state::{GameState, GameStatus, PlayerId};

/// First eligible guesser strictly after `anchor` in turn order, wrapping once.
///
/// The anchor itself is considered last, so a lone eligible guesser keeps
/// the turn.
pub fn next_eligible_after(state: &GameState, anchor: PlayerId) -> Option<PlayerId> {
    let len = state.turn_order.len();
    let start = state.position_of(anchor)?;
    (1..=len)
        .map(|step| state.turn_order[(start + step) % len])
        .find(|id| state.is_eligible_guesser(*id))
}

/// Hand the turn to `player` (or pause when `None`), superseding any prior turn.
pub fn begin_turn(
    state: &mut GameState,
    player: Option<PlayerId>,
    now: OffsetDateTime,
) -> GameEvent {
    state.turn_seq += 1;
    state.current_turn = player;
    state.turn_deadline = player.map(|_| now + state.rules.turn_time);
    GameEvent::TurnChanged {
        current_turn: state.current_turn,
        deadline: state.turn_deadline,
    }
}

/// Clear the turn without handing it to anyone.
pub(crate) fn clear_turn(state: &mut GameState) {
    state.turn_seq += 1;
    state.current_turn = None;
    state.turn_deadline = None;
}

/// Move the turn to the next eligible guesser after the current one.
pub fn advance_turn(state: &mut GameState, now: OffsetDateTime) -> GameEvent {
    let anchor = state.current_turn.unwrap_or(state.word_master_id);
    let next = next_eligible_after(state, anchor);
    begin_turn(state, next, now)
}

/// Skip the current turn holder, as if they guessed nothing.
pub(crate) fn skip_current(
    state: &mut GameState,
    reason: SkipReason,
    now: OffsetDateTime,
) -> Vec<GameEvent> {
    let Some(player_id) = state.current_turn else {
        return Vec::new();
    };
    state.bump_mutation();
    vec![
        GameEvent::TurnSkipped { player_id, reason },
        advance_turn(state, now),
    ]
}

/// Turn timer fired. A fire for a superseded turn is a no-op.
pub fn expire_turn(state: &mut GameState, turn_seq: u64, now: OffsetDateTime) -> Vec<GameEvent> {
    if state.status != GameStatus::InProgress || state.turn_seq != turn_seq {
        return Vec::new();
    }
    skip_current(state, SkipReason::Timeout, now)
}

/// Countdown tick for the live turn, if `turn_seq` is still current.
pub fn turn_tick(state: &GameState, turn_seq: u64, now: OffsetDateTime) -> Option<GameEvent> {
    if state.status != GameStatus::InProgress || state.turn_seq != turn_seq {
        return None;
    }
    let player_id = state.current_turn?;
    let deadline = state.turn_deadline?;
    let remaining_ms = (deadline - now).whole_milliseconds().max(0);
    let seconds_left = u64::try_from((remaining_ms + 999) / 1000).unwrap_or(0);
    Some(GameEvent::TurnTimerTick {
        player_id,
        seconds_left,
    })
}
