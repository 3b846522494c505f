//! Process-wide map of live sessions.
//!
//! Sessions are registered when a room starts a game and removed when the
//! session actor stops (game over, abandonment or shutdown). The registry
//! also routes by room and by participant so transports never need to
//! attach session state to a connection.

use std::sync::Arc;
use std::time::Duration;

use actix::prelude::*;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use parking_lot::Mutex;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use time::OffsetDateTime;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::EngineConfig;
use crate::domain::guessing::GuessOutcome;
use crate::domain::round_lifecycle::{start_game, StartParams};
use crate::domain::rules::GameRules;
use crate::domain::snapshot::GameSnapshot;
use crate::domain::state::{PlayerId, RoomId, SessionId};
use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::realtime::messages::{
    GuessLetter, InspectTimers, PlayerDisconnected, PlayerReconnected, SendHint, Shutdown,
    SubmitWord, TimerReport, ViewState,
};
use crate::realtime::session::{GameSessionActor, SessionDeps, SessionTiming};
use crate::services::rooms::RoomSettings;
use crate::services::words::WordChoice;

struct SessionEntry {
    addr: Addr<GameSessionActor>,
    room_id: RoomId,
    participants: Vec<PlayerId>,
}

/// Lookup tables shared between the registry and its session actors.
#[derive(Default)]
pub struct SessionIndex {
    sessions: DashMap<SessionId, SessionEntry>,
    by_room: DashMap<RoomId, SessionId>,
    by_participant: DashMap<PlayerId, SessionId>,
}

impl SessionIndex {
    /// Drop every index entry pointing at `session_id`.
    pub(crate) fn remove(&self, session_id: SessionId) {
        if let Some((_, entry)) = self.sessions.remove(&session_id) {
            self.by_room.remove_if(&entry.room_id, |_, sid| *sid == session_id);
            for player in entry.participants {
                self.by_participant.remove_if(&player, |_, sid| *sid == session_id);
            }
        }
    }
}

pub struct SessionRegistry {
    config: EngineConfig,
    deps: SessionDeps,
    index: Arc<SessionIndex>,
    rng: Mutex<ChaCha8Rng>,
}

impl SessionRegistry {
    pub fn new(config: EngineConfig, deps: SessionDeps) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        };
        Self {
            config,
            deps,
            index: Arc::new(SessionIndex::default()),
            rng: Mutex::new(rng),
        }
    }

    /// Merge a room's overrides into the engine defaults.
    ///
    /// Overrides get the same floor `EngineConfig::validate` applies.
    fn rules_for(&self, room_id: &str, settings: &RoomSettings) -> Result<GameRules, AppError> {
        if settings.rounds == Some(0) {
            return Err(AppError::config(format!("Room {room_id} asks for zero rounds")));
        }
        if settings.turn_time_seconds == Some(0) {
            return Err(AppError::config(format!("Room {room_id} asks for a zero turn time")));
        }
        Ok(GameRules {
            total_rounds: settings.rounds.unwrap_or(self.config.total_rounds),
            max_incorrect: self.config.max_incorrect,
            max_hints: self.config.max_hints,
            turn_time: settings
                .turn_time_seconds
                .map(Duration::from_secs)
                .unwrap_or(self.config.turn_time),
        })
    }

    /// Start a game for the room's current roster.
    pub async fn start_game(&self, room_id: &str) -> Result<SessionId, AppError> {
        let session_id = Uuid::new_v4();
        match self.index.by_room.entry(room_id.to_string()) {
            Entry::Occupied(_) => {
                return Err(DomainError::AlreadyInProgress(room_id.to_string()).into());
            }
            Entry::Vacant(slot) => {
                slot.insert(session_id);
            }
        }

        match self.launch(room_id, session_id).await {
            Ok(()) => Ok(session_id),
            Err(err) => {
                self.index
                    .by_room
                    .remove_if(room_id, |_, sid| *sid == session_id);
                Err(err)
            }
        }
    }

    async fn launch(&self, room_id: &str, session_id: SessionId) -> Result<(), AppError> {
        let roster = self.deps.rooms.roster(room_id).await?;
        let params = StartParams {
            session_id,
            room_id: roster.room_id.clone(),
            participants: roster.participants.clone(),
            rules: self.rules_for(room_id, &roster.settings)?,
            min_players: self.config.min_players,
            max_players: self.config.max_players,
        };
        let (state, events) = {
            let mut rng = self.rng.lock();
            start_game(params, &mut *rng, OffsetDateTime::now_utc())?
        };
        self.deps.rooms.mark_playing(room_id, session_id).await?;

        let participants = state.turn_order.clone();
        let timing = SessionTiming {
            tick_interval: self.config.tick_interval,
            grace_period: self.config.grace_period,
            settle_delay: self.config.settle_delay,
        };
        let addr = GameSessionActor::new(
            state,
            events,
            timing,
            self.deps.clone(),
            self.index.clone(),
        )
        .start();

        for player in &participants {
            if let Some(previous) = self.index.by_participant.insert(*player, session_id) {
                warn!(
                    player_id = player,
                    previous = %previous,
                    "Participant moved to a new session"
                );
            }
        }
        self.index.sessions.insert(
            session_id,
            SessionEntry {
                addr,
                room_id: room_id.to_string(),
                participants,
            },
        );

        info!(
            session_id = %session_id,
            room_id,
            host_id = roster.host_id,
            "Session registered"
        );
        Ok(())
    }

    pub fn addr(&self, session_id: SessionId) -> Result<Addr<GameSessionActor>, AppError> {
        self.index
            .sessions
            .get(&session_id)
            .map(|e| e.addr.clone())
            .ok_or_else(|| {
                DomainError::not_found(NotFoundKind::Session, session_id.to_string()).into()
            })
    }

    pub fn session_for_room(&self, room_id: &str) -> Option<SessionId> {
        self.index
            .by_room
            .get(room_id)
            .map(|sid| *sid)
            .filter(|sid| self.index.sessions.contains_key(sid))
    }

    pub fn session_for_participant(&self, player_id: PlayerId) -> Option<SessionId> {
        self.index.by_participant.get(&player_id).map(|sid| *sid)
    }

    pub fn active_sessions(&self) -> usize {
        self.index.sessions.len()
    }

    pub async fn submit_word(
        &self,
        session_id: SessionId,
        caller: PlayerId,
        choice: WordChoice,
    ) -> Result<(), AppError> {
        self.addr(session_id)?
            .send(SubmitWord { caller, choice })
            .await?
    }

    pub async fn guess_letter(
        &self,
        session_id: SessionId,
        caller: PlayerId,
        letter: &str,
    ) -> Result<GuessOutcome, AppError> {
        self.addr(session_id)?
            .send(GuessLetter {
                caller,
                letter: letter.to_string(),
            })
            .await?
    }

    pub async fn send_hint(
        &self,
        session_id: SessionId,
        caller: PlayerId,
        text: &str,
    ) -> Result<(), AppError> {
        self.addr(session_id)?
            .send(SendHint {
                caller,
                text: text.to_string(),
            })
            .await?
    }

    pub async fn player_disconnected(
        &self,
        session_id: SessionId,
        player_id: PlayerId,
    ) -> Result<(), AppError> {
        self.addr(session_id)?
            .send(PlayerDisconnected { player_id })
            .await?
    }

    pub async fn player_reconnected(
        &self,
        session_id: SessionId,
        player_id: PlayerId,
    ) -> Result<(), AppError> {
        self.addr(session_id)?
            .send(PlayerReconnected { player_id })
            .await?
    }

    /// Route a bare transport drop to the participant's session, if any.
    pub async fn connection_lost(
        &self,
        player_id: PlayerId,
    ) -> Result<Option<SessionId>, AppError> {
        let Some(session_id) = self.session_for_participant(player_id) else {
            return Ok(None);
        };
        self.player_disconnected(session_id, player_id).await?;
        Ok(Some(session_id))
    }

    pub async fn connection_restored(
        &self,
        player_id: PlayerId,
    ) -> Result<Option<SessionId>, AppError> {
        let Some(session_id) = self.session_for_participant(player_id) else {
            return Ok(None);
        };
        self.player_reconnected(session_id, player_id).await?;
        Ok(Some(session_id))
    }

    pub async fn view_state(
        &self,
        session_id: SessionId,
        viewer: PlayerId,
    ) -> Result<GameSnapshot, AppError> {
        self.addr(session_id)?.send(ViewState { viewer }).await?
    }

    pub async fn timers(&self, session_id: SessionId) -> Result<TimerReport, AppError> {
        self.addr(session_id)?.send(InspectTimers).await?
    }

    /// Stop every session without finalizing.
    pub fn shutdown_all(&self) {
        for entry in self.index.sessions.iter() {
            entry.addr.do_send(Shutdown);
        }
    }
}
