//! Timers owned by one session actor.
//!
//! Each timer kind is cancel-on-supersede: arming replaces (and cancels) the
//! previous handle of the same kind and subject. All handles live in the
//! actor's context, so they die with it.

use std::collections::HashMap;
use std::time::Duration;

use actix::prelude::*;

use crate::domain::state::PlayerId;
use crate::realtime::messages::{TimerFired, TimerKind, TimerReport};
use crate::realtime::session::GameSessionActor;

#[derive(Debug, Clone, Copy)]
struct Armed {
    handle: SpawnHandle,
    seq: u64,
}

#[derive(Debug, Default)]
pub(crate) struct SessionTimers {
    turn: Option<Armed>,
    tick: Option<SpawnHandle>,
    settle: Option<Armed>,
    grace: HashMap<PlayerId, Armed>,
    generation: u64,
}

type Ctx = Context<GameSessionActor>;

impl SessionTimers {
    fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    pub fn turn_armed_for(&self) -> Option<u64> {
        self.turn.map(|a| a.seq)
    }

    /// Arm the turn countdown for `turn_seq`, with a tick every `tick_every`.
    pub fn arm_turn(
        &mut self,
        ctx: &mut Ctx,
        turn_seq: u64,
        turn_time: Duration,
        tick_every: Duration,
    ) {
        self.cancel_turn(ctx);
        let handle = ctx.notify_later(
            TimerFired {
                kind: TimerKind::Turn,
                seq: turn_seq,
            },
            turn_time,
        );
        self.turn = Some(Armed {
            handle,
            seq: turn_seq,
        });
        self.tick = Some(ctx.run_interval(tick_every, move |act, _ctx| {
            act.on_tick(turn_seq);
        }));
    }

    pub fn cancel_turn(&mut self, ctx: &mut Ctx) {
        if let Some(armed) = self.turn.take() {
            ctx.cancel_future(armed.handle);
        }
        if let Some(handle) = self.tick.take() {
            ctx.cancel_future(handle);
        }
    }

    /// Forget the fired turn timer; returns false for a superseded fire.
    pub fn take_turn_fire(&mut self, ctx: &mut Ctx, seq: u64) -> bool {
        if self.turn_armed_for() != Some(seq) {
            return false;
        }
        self.turn = None;
        if let Some(handle) = self.tick.take() {
            ctx.cancel_future(handle);
        }
        true
    }

    pub fn settle_armed(&self) -> bool {
        self.settle.is_some()
    }

    pub fn arm_settle(&mut self, ctx: &mut Ctx, delay: Duration) {
        self.cancel_settle(ctx);
        let seq = self.next_generation();
        let handle = ctx.notify_later(
            TimerFired {
                kind: TimerKind::Settle,
                seq,
            },
            delay,
        );
        self.settle = Some(Armed { handle, seq });
    }

    pub fn cancel_settle(&mut self, ctx: &mut Ctx) {
        if let Some(armed) = self.settle.take() {
            ctx.cancel_future(armed.handle);
        }
    }

    pub fn take_settle_fire(&mut self, seq: u64) -> bool {
        match self.settle {
            Some(armed) if armed.seq == seq => {
                self.settle = None;
                true
            }
            _ => false,
        }
    }

    pub fn grace_armed(&self, player_id: PlayerId) -> bool {
        self.grace.contains_key(&player_id)
    }

    pub fn arm_grace(&mut self, ctx: &mut Ctx, player_id: PlayerId, period: Duration) {
        self.cancel_grace(ctx, player_id);
        let seq = self.next_generation();
        let handle = ctx.notify_later(
            TimerFired {
                kind: TimerKind::Grace(player_id),
                seq,
            },
            period,
        );
        self.grace.insert(player_id, Armed { handle, seq });
    }

    pub fn cancel_grace(&mut self, ctx: &mut Ctx, player_id: PlayerId) {
        if let Some(armed) = self.grace.remove(&player_id) {
            ctx.cancel_future(armed.handle);
        }
    }

    pub fn take_grace_fire(&mut self, player_id: PlayerId, seq: u64) -> bool {
        match self.grace.get(&player_id) {
            Some(armed) if armed.seq == seq => {
                self.grace.remove(&player_id);
                true
            }
            _ => false,
        }
    }

    pub fn grace_players(&self) -> Vec<PlayerId> {
        let mut players: Vec<PlayerId> = self.grace.keys().copied().collect();
        players.sort_unstable();
        players
    }

    pub fn cancel_all(&mut self, ctx: &mut Ctx) {
        self.cancel_turn(ctx);
        self.cancel_settle(ctx);
        for (_, armed) in self.grace.drain() {
            ctx.cancel_future(armed.handle);
        }
    }

    pub fn report(&self) -> TimerReport {
        TimerReport {
            turn_armed_for: self.turn_armed_for(),
            ticking: self.tick.is_some(),
            settle_armed: self.settle_armed(),
            grace: self.grace_players(),
        }
    }
}
