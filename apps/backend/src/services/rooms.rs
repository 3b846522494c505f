//! Room directory collaborator: who is in a room, and whether it is busy.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::domain::state::{PlayerId, RoomId, SessionId};
use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind};

/// Per-room overrides of the engine defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSettings {
    pub rounds: Option<u8>,
    pub turn_time_seconds: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomRoster {
    pub room_id: RoomId,
    pub host_id: PlayerId,
    pub participants: Vec<PlayerId>,
    pub settings: RoomSettings,
}

#[async_trait]
pub trait RoomDirectory: Send + Sync {
    async fn roster(&self, room_id: &str) -> Result<RoomRoster, AppError>;

    /// Flag the room as hosting `session_id`.
    async fn mark_playing(&self, room_id: &str, session_id: SessionId) -> Result<(), AppError>;

    /// The room's game ended or was abandoned; it may start another.
    async fn release(&self, room_id: &str) -> Result<(), AppError>;
}

#[derive(Debug)]
struct RoomEntry {
    roster: RoomRoster,
    playing: Option<SessionId>,
}

/// Process-local room directory.
#[derive(Debug, Default)]
pub struct InMemoryRooms {
    rooms: RwLock<HashMap<RoomId, RoomEntry>>,
}

impl InMemoryRooms {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upsert(&self, roster: RoomRoster) {
        let mut rooms = self.rooms.write();
        let playing = rooms.get(&roster.room_id).and_then(|e| e.playing);
        rooms.insert(roster.room_id.clone(), RoomEntry { roster, playing });
    }

    pub fn playing(&self, room_id: &str) -> Option<SessionId> {
        self.rooms.read().get(room_id).and_then(|e| e.playing)
    }
}

fn room_not_found(room_id: &str) -> AppError {
    DomainError::not_found(NotFoundKind::Room, room_id).into()
}

#[async_trait]
impl RoomDirectory for InMemoryRooms {
    async fn roster(&self, room_id: &str) -> Result<RoomRoster, AppError> {
        self.rooms
            .read()
            .get(room_id)
            .map(|e| e.roster.clone())
            .ok_or_else(|| room_not_found(room_id))
    }

    async fn mark_playing(&self, room_id: &str, session_id: SessionId) -> Result<(), AppError> {
        let mut rooms = self.rooms.write();
        let entry = rooms.get_mut(room_id).ok_or_else(|| room_not_found(room_id))?;
        if entry.playing.is_some() {
            return Err(DomainError::AlreadyInProgress(room_id.to_string()).into());
        }
        entry.playing = Some(session_id);
        Ok(())
    }

    async fn release(&self, room_id: &str) -> Result<(), AppError> {
        if let Some(entry) = self.rooms.write().get_mut(room_id) {
            entry.playing = None;
        }
        Ok(())
    }
}
