//! Disconnect grace handling.
//!
//! A transport drop only marks the participant pending; the session actor
//! owns the grace timer and calls [`expire_grace`] when it fires.

use time::OffsetDateTime;
use tracing::{debug, info};

use crate::domain::events::{GameEvent, SkipReason};
use crate::domain::round_lifecycle::abandon;
use crate::domain::state::{ConnectionState, GameState, GameStatus, PlayerId};
use crate::domain::turns::{begin_turn, skip_current};
use crate::errors::domain::DomainError;

/// Result of a disconnect notification.
#[derive(Debug, Clone, PartialEq)]
pub struct DisconnectOutcome {
    /// A new grace window opened; the caller must arm a grace timer.
    pub grace_started: bool,
    pub events: Vec<GameEvent>,
}

/// Transport reported a drop. Repeats are no-ops.
pub fn mark_disconnected(
    state: &mut GameState,
    player_id: PlayerId,
) -> Result<DisconnectOutcome, DomainError> {
    let status = state.status;
    let slot = state.player_mut(player_id)?;
    if status.is_terminal() || slot.connection != ConnectionState::Connected {
        return Ok(DisconnectOutcome {
            grace_started: false,
            events: Vec::new(),
        });
    }

    slot.connection = ConnectionState::PendingDisconnect;
    state.bump_mutation();
    debug!(session_id = %state.session_id, player_id, "Player pending disconnect");

    Ok(DisconnectOutcome {
        grace_started: true,
        events: vec![GameEvent::PlayerDisconnected { player_id }],
    })
}

/// Grace window elapsed without a reconnect.
pub fn expire_grace(
    state: &mut GameState,
    player_id: PlayerId,
    now: OffsetDateTime,
) -> Vec<GameEvent> {
    if state.status.is_terminal() {
        return Vec::new();
    }
    let Some(slot) = state.players.get_mut(&player_id) else {
        return Vec::new();
    };
    if slot.connection != ConnectionState::PendingDisconnect {
        return Vec::new();
    }

    slot.connection = ConnectionState::Disconnected;
    state.bump_mutation();
    info!(session_id = %state.session_id, player_id, "Player unavailable");

    let mut events = vec![GameEvent::PlayerUnavailable { player_id }];
    if state.all_disconnected() {
        events.push(abandon(state));
    } else if state.status == GameStatus::InProgress && state.current_turn == Some(player_id) {
        events.extend(skip_current(state, SkipReason::Disconnect, now));
    }
    events
}

/// Participant is back. Already-connected is a no-op.
///
/// A paused round hands the turn to the first guesser who returns.
pub fn reconnect(
    state: &mut GameState,
    player_id: PlayerId,
    now: OffsetDateTime,
) -> Result<Vec<GameEvent>, DomainError> {
    if state.status.is_terminal() {
        return Err(DomainError::invalid_phase("game has ended"));
    }
    let slot = state.player_mut(player_id)?;
    if slot.connection == ConnectionState::Connected {
        return Ok(Vec::new());
    }

    slot.connection = ConnectionState::Connected;
    state.bump_mutation();
    info!(session_id = %state.session_id, player_id, "Player reconnected");

    let mut events = vec![GameEvent::PlayerReconnected { player_id }];
    if state.status == GameStatus::InProgress
        && state.current_turn.is_none()
        && state.is_eligible_guesser(player_id)
    {
        events.push(begin_turn(state, Some(player_id), now));
    }
    Ok(events)
}

/// The word-master dropped past grace while a word is still needed.
pub fn needs_word_on_behalf(state: &GameState) -> bool {
    state.status == GameStatus::WordSelection
        && state
            .players
            .get(&state.word_master_id)
            .is_some_and(|p| p.connection == ConnectionState::Disconnected)
}
