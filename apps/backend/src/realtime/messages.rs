//! Messages accepted by a session actor.
//!
//! Every message is handled to completion before the next is dequeued.

use actix::prelude::*;

use crate::domain::guessing::GuessOutcome;
use crate::domain::snapshot::GameSnapshot;
use crate::domain::state::PlayerId;
use crate::error::AppError;
use crate::services::words::WordChoice;

#[derive(Message, Debug, Clone)]
#[rtype(result = "Result<(), AppError>")]
pub struct SubmitWord {
    pub caller: PlayerId,
    pub choice: WordChoice,
}

#[derive(Message, Debug, Clone)]
#[rtype(result = "Result<GuessOutcome, AppError>")]
pub struct GuessLetter {
    pub caller: PlayerId,
    pub letter: String,
}

#[derive(Message, Debug, Clone)]
#[rtype(result = "Result<(), AppError>")]
pub struct SendHint {
    pub caller: PlayerId,
    pub text: String,
}

#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "Result<(), AppError>")]
pub struct PlayerDisconnected {
    pub player_id: PlayerId,
}

#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "Result<(), AppError>")]
pub struct PlayerReconnected {
    pub player_id: PlayerId,
}

/// Redacted snapshot for one viewer.
#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "Result<GameSnapshot, AppError>")]
pub struct ViewState {
    pub viewer: PlayerId,
}

/// Which timers are currently armed.
#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "Result<TimerReport, AppError>")]
pub struct InspectTimers;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TimerReport {
    /// `turn_seq` the turn timer was armed for.
    pub turn_armed_for: Option<u64>,
    pub ticking: bool,
    pub settle_armed: bool,
    pub grace: Vec<PlayerId>,
}

/// Stop the session without finalizing it.
#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "()")]
pub struct Shutdown;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TimerKind {
    Turn,
    Settle,
    Grace(PlayerId),
}

/// Self-addressed timer expiry. `seq` identifies the arming it belongs to.
#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "()")]
pub(crate) struct TimerFired {
    pub kind: TimerKind,
    pub seq: u64,
}
