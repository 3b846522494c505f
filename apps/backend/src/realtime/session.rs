//! One actor per game session.
//!
//! The actor mailbox serializes every inbound event, timer fire and
//! collaborator result for the session. Domain transitions are pure; after
//! each accepted mutation the actor publishes the produced events and
//! reconciles its timers against the new state.

use std::sync::Arc;
use std::time::Duration;

use actix::prelude::*;
use time::OffsetDateTime;
use tracing::{debug, error, info, warn};

use crate::domain::connection::{
    expire_grace, mark_disconnected, needs_word_on_behalf, reconnect,
};
use crate::domain::events::GameEvent;
use crate::domain::guessing::{
    accept_word, ensure_can_submit, guess_letter, send_hint, GuessOutcome,
};
use crate::domain::invariants;
use crate::domain::round_lifecycle::{advance_after_settle, game_result, GameResult};
use crate::domain::snapshot::{snapshot_for, GameSnapshot};
use crate::domain::state::{ConnectionState, GameState, GameStatus, PlayerId, SessionId};
use crate::domain::turns::{expire_turn, turn_tick};
use crate::domain::word::Category;
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::errors::ErrorCode;
use crate::realtime::broadcast::{Audience, Broadcaster, Outbound};
use crate::realtime::messages::{
    GuessLetter, InspectTimers, PlayerDisconnected, PlayerReconnected, SendHint, Shutdown,
    SubmitWord, TimerFired, TimerKind, TimerReport, ViewState,
};
use crate::realtime::registry::SessionIndex;
use crate::realtime::timers::SessionTimers;
use crate::services::rooms::RoomDirectory;
use crate::services::stats::StatsSink;
use crate::services::words::{ChosenWord, WordService};

/// Collaborators shared by every session.
#[derive(Clone)]
pub struct SessionDeps {
    pub words: Arc<WordService>,
    pub rooms: Arc<dyn RoomDirectory>,
    pub stats: Arc<dyn StatsSink>,
    pub broadcaster: Arc<dyn Broadcaster>,
}

/// Engine-level durations that are not part of the per-game rules.
#[derive(Debug, Clone, Copy)]
pub struct SessionTiming {
    pub tick_interval: Duration,
    pub grace_period: Duration,
    pub settle_delay: Duration,
}

/// Wall-clock anchored at session start, advanced by the runtime clock.
#[derive(Debug, Clone, Copy)]
struct SessionClock {
    epoch: OffsetDateTime,
    origin: tokio::time::Instant,
}

impl SessionClock {
    fn now(&self) -> OffsetDateTime {
        self.epoch + self.origin.elapsed()
    }
}

pub struct GameSessionActor {
    state: GameState,
    timers: SessionTimers,
    clock: SessionClock,
    timing: SessionTiming,
    deps: SessionDeps,
    index: Arc<SessionIndex>,
    initial_events: Vec<GameEvent>,
    word_on_behalf_pending: bool,
    finished: bool,
}

impl GameSessionActor {
    pub(crate) fn new(
        state: GameState,
        initial_events: Vec<GameEvent>,
        timing: SessionTiming,
        deps: SessionDeps,
        index: Arc<SessionIndex>,
    ) -> Self {
        let clock = SessionClock {
            epoch: state.started_at,
            origin: tokio::time::Instant::now(),
        };
        Self {
            state,
            timers: SessionTimers::default(),
            clock,
            timing,
            deps,
            index,
            initial_events,
            word_on_behalf_pending: false,
            finished: false,
        }
    }

    pub fn session_id(&self) -> SessionId {
        self.state.session_id
    }

    fn publish(&self, audience: Audience, event: GameEvent) {
        self.deps.broadcaster.publish(Outbound {
            session_id: self.state.session_id,
            audience,
            event,
        });
    }

    /// Publish a mutation's events, then bring timers in line with state.
    fn commit(&mut self, events: Vec<GameEvent>, ctx: &mut Context<Self>) {
        for event in events {
            self.publish(Audience::Session, event);
        }
        debug_assert!(
            invariants::check(&self.state).is_ok(),
            "session invariant broken: {:?}",
            invariants::check(&self.state)
        );
        self.reconcile(ctx);
    }

    /// Arm or release timers so they match the current state.
    fn reconcile(&mut self, ctx: &mut Context<Self>) {
        if self.state.status.is_terminal() {
            self.finish(ctx);
            return;
        }

        match (self.state.status, self.state.current_turn) {
            (GameStatus::InProgress, Some(_)) => {
                if self.timers.turn_armed_for() != Some(self.state.turn_seq) {
                    self.timers.arm_turn(
                        ctx,
                        self.state.turn_seq,
                        self.state.rules.turn_time,
                        self.timing.tick_interval,
                    );
                    debug!(
                        session_id = %self.state.session_id,
                        turn_seq = self.state.turn_seq,
                        player_id = ?self.state.current_turn,
                        "[SESSION] turn timer armed"
                    );
                }
            }
            _ => self.timers.cancel_turn(ctx),
        }

        if self.state.status == GameStatus::RoundEnd {
            if !self.timers.settle_armed() {
                self.timers.arm_settle(ctx, self.timing.settle_delay);
            }
        } else {
            self.timers.cancel_settle(ctx);
        }

        let pending: Vec<(PlayerId, ConnectionState)> = self
            .state
            .players
            .values()
            .map(|p| (p.id, p.connection))
            .collect();
        for (player_id, connection) in pending {
            let wants_grace = connection == ConnectionState::PendingDisconnect;
            if wants_grace && !self.timers.grace_armed(player_id) {
                self.timers.arm_grace(ctx, player_id, self.timing.grace_period);
            } else if !wants_grace && self.timers.grace_armed(player_id) {
                self.timers.cancel_grace(ctx, player_id);
            }
        }

        if needs_word_on_behalf(&self.state) && !self.word_on_behalf_pending {
            self.request_word_on_behalf(ctx);
        }
    }

    /// The word-master is gone during selection: pick a random word for them.
    fn request_word_on_behalf(&mut self, ctx: &mut Context<Self>) {
        self.word_on_behalf_pending = true;
        let words = self.deps.words.clone();
        let round = self.state.round_index;
        info!(
            session_id = %self.state.session_id,
            round,
            word_master_id = self.state.word_master_id,
            "[SESSION] requesting word on behalf of absent word master"
        );

        ctx.spawn(
            async move { words.random(Category::All).await }
                .into_actor(self)
                .map(move |chosen, act, ctx| {
                    act.word_on_behalf_pending = false;
                    if act.state.round_index != round {
                        return;
                    }
                    let word_master = act.state.word_master_id;
                    if let Err(err) = act.apply_word(word_master, chosen, ctx) {
                        debug!(
                            session_id = %act.state.session_id,
                            error = %err,
                            "[SESSION] word on behalf not applied"
                        );
                    }
                }),
        );
    }

    fn apply_word(
        &mut self,
        caller: PlayerId,
        chosen: ChosenWord,
        ctx: &mut Context<Self>,
    ) -> Result<(), AppError> {
        let now = self.clock.now();
        let events = accept_word(&mut self.state, caller, chosen.word, chosen.category, now)?;
        self.commit(events, ctx);
        Ok(())
    }

    pub(crate) fn on_tick(&mut self, turn_seq: u64) {
        if let Some(event) = turn_tick(&self.state, turn_seq, self.clock.now()) {
            self.publish(Audience::Session, event);
        }
    }

    /// Terminal state reached: release timers, hand off the result, stop.
    ///
    /// The mailbox stays parked until the room is released, and the index
    /// entry goes in the same step, so a room is never free in one view
    /// and busy in the other.
    fn finish(&mut self, ctx: &mut Context<Self>) {
        if self.finished {
            return;
        }
        self.finished = true;
        self.timers.cancel_all(ctx);

        let result = game_result(&self.state);
        let stats = self.deps.stats.clone();
        let rooms = self.deps.rooms.clone();
        ctx.wait(
            hand_off(result, stats, rooms)
                .into_actor(self)
                .map(|failures, act, ctx| {
                    for err in failures {
                        error!(
                            target: "ops",
                            session_id = %act.state.session_id,
                            room_id = %act.state.room_id,
                            code = %err.code(),
                            error = %err,
                            "Session hand-off failed"
                        );
                    }
                    act.index.remove(act.state.session_id);
                    ctx.stop();
                }),
        );
    }
}

/// Forward a finished session to the stats collaborator and free its room.
///
/// Every step runs even if an earlier one failed; failures come back
/// tagged with the collaborator that produced them.
async fn hand_off(
    result: GameResult,
    stats: Arc<dyn StatsSink>,
    rooms: Arc<dyn RoomDirectory>,
) -> Vec<AppError> {
    let mut failures = Vec::new();
    if result.status == GameStatus::GameOver {
        if let Err(err) = stats.record_game(&result).await {
            failures.push(AppError::upstream(
                ErrorCode::StatsSyncFailed,
                "Leaderboard update failed",
                err,
            ));
        }
    }
    if let Err(err) = stats.archive_history(&result).await {
        failures.push(AppError::upstream(
            ErrorCode::StatsSyncFailed,
            "Round history archive failed",
            err,
        ));
    }
    if let Err(err) = rooms.release(&result.room_id).await {
        failures.push(AppError::upstream(
            ErrorCode::RoomDirectoryFailed,
            "Room release failed",
            err,
        ));
    }
    failures
}

impl Actor for GameSessionActor {
    type Context = Context<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        info!(
            session_id = %self.state.session_id,
            room_id = %self.state.room_id,
            "[SESSION] started"
        );
        let events = std::mem::take(&mut self.initial_events);
        self.commit(events, ctx);
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        self.index.remove(self.state.session_id);
        info!(
            session_id = %self.state.session_id,
            status = ?self.state.status,
            "[SESSION] stopped"
        );
    }
}

impl Handler<SubmitWord> for GameSessionActor {
    type Result = ResponseActFuture<Self, Result<(), AppError>>;

    fn handle(&mut self, msg: SubmitWord, _ctx: &mut Self::Context) -> Self::Result {
        if let Err(err) = ensure_can_submit(&self.state, msg.caller) {
            return Box::pin(actix::fut::ready(Err(err.into())));
        }

        let words = self.deps.words.clone();
        let round = self.state.round_index;
        let caller = msg.caller;
        Box::pin(
            async move { words.resolve(msg.choice).await }
                .into_actor(self)
                .map(move |resolved, act, ctx| {
                    let chosen = resolved?;
                    // The lookup ran outside the mailbox; re-check before folding it in.
                    if act.state.round_index != round {
                        return Err(DomainError::invalid_phase("round moved on").into());
                    }
                    act.apply_word(caller, chosen, ctx)
                }),
        )
    }
}

impl Handler<GuessLetter> for GameSessionActor {
    type Result = Result<GuessOutcome, AppError>;

    fn handle(&mut self, msg: GuessLetter, ctx: &mut Self::Context) -> Self::Result {
        let now = self.clock.now();
        let (outcome, events) = guess_letter(&mut self.state, msg.caller, &msg.letter, now)?;
        self.commit(events, ctx);
        Ok(outcome)
    }
}

impl Handler<SendHint> for GameSessionActor {
    type Result = Result<(), AppError>;

    fn handle(&mut self, msg: SendHint, ctx: &mut Self::Context) -> Self::Result {
        let events = send_hint(&mut self.state, msg.caller, &msg.text)?;
        self.commit(events, ctx);
        Ok(())
    }
}

impl Handler<PlayerDisconnected> for GameSessionActor {
    type Result = Result<(), AppError>;

    fn handle(&mut self, msg: PlayerDisconnected, ctx: &mut Self::Context) -> Self::Result {
        let outcome = mark_disconnected(&mut self.state, msg.player_id)?;
        if outcome.grace_started {
            debug!(
                session_id = %self.state.session_id,
                player_id = msg.player_id,
                "[SESSION] grace period started"
            );
            self.commit(outcome.events, ctx);
        }
        Ok(())
    }
}

impl Handler<PlayerReconnected> for GameSessionActor {
    type Result = Result<(), AppError>;

    fn handle(&mut self, msg: PlayerReconnected, ctx: &mut Self::Context) -> Self::Result {
        let events = reconnect(&mut self.state, msg.player_id, self.clock.now())?;
        if !events.is_empty() {
            self.commit(events, ctx);
        }
        let snapshot = snapshot_for(&self.state, msg.player_id);
        self.publish(
            Audience::Participant(msg.player_id),
            GameEvent::StateSync {
                snapshot: Box::new(snapshot),
            },
        );
        Ok(())
    }
}

impl Handler<ViewState> for GameSessionActor {
    type Result = Result<GameSnapshot, AppError>;

    fn handle(&mut self, msg: ViewState, _ctx: &mut Self::Context) -> Self::Result {
        self.state.player(msg.viewer)?;
        Ok(snapshot_for(&self.state, msg.viewer))
    }
}

impl Handler<InspectTimers> for GameSessionActor {
    type Result = Result<TimerReport, AppError>;

    fn handle(&mut self, _msg: InspectTimers, _ctx: &mut Self::Context) -> Self::Result {
        Ok(self.timers.report())
    }
}

impl Handler<TimerFired> for GameSessionActor {
    type Result = ();

    fn handle(&mut self, msg: TimerFired, ctx: &mut Self::Context) -> Self::Result {
        let now = self.clock.now();
        let events = match msg.kind {
            TimerKind::Turn => {
                if !self.timers.take_turn_fire(ctx, msg.seq) {
                    return;
                }
                expire_turn(&mut self.state, msg.seq, now)
            }
            TimerKind::Settle => {
                if !self.timers.take_settle_fire(msg.seq) {
                    return;
                }
                advance_after_settle(&mut self.state)
            }
            TimerKind::Grace(player_id) => {
                if !self.timers.take_grace_fire(player_id, msg.seq) {
                    return;
                }
                expire_grace(&mut self.state, player_id, now)
            }
        };
        if events.is_empty() {
            warn!(
                session_id = %self.state.session_id,
                kind = ?msg.kind,
                "[SESSION] timer fired with nothing to do"
            );
        }
        self.commit(events, ctx);
    }
}

impl Handler<Shutdown> for GameSessionActor {
    type Result = ();

    fn handle(&mut self, _msg: Shutdown, ctx: &mut Self::Context) -> Self::Result {
        self.timers.cancel_all(ctx);
        self.finished = true;
        ctx.stop();
    }
}
