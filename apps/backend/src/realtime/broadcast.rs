//! Outbound notification gateway.

use actix::prelude::*;
use serde::Serialize;
use tokio::sync::mpsc;
use tracing::warn;

use crate::domain::events::GameEvent;
use crate::domain::state::{PlayerId, SessionId};

/// Who should receive an outbound event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "to", content = "player_id", rename_all = "snake_case")]
pub enum Audience {
    /// Every participant of the session.
    Session,
    /// One participant only.
    Participant(PlayerId),
}

#[derive(Message, Debug, Clone, PartialEq, Serialize)]
#[rtype(result = "()")]
pub struct Outbound {
    pub session_id: SessionId,
    pub audience: Audience,
    pub event: GameEvent,
}

/// Fan-out collaborator. Implementations must not block.
pub trait Broadcaster: Send + Sync {
    fn publish(&self, message: Outbound);
}

impl Broadcaster for Recipient<Outbound> {
    fn publish(&self, message: Outbound) {
        self.do_send(message);
    }
}

/// Forwards outbound events into an unbounded channel.
#[derive(Debug, Clone)]
pub struct ChannelBroadcaster {
    tx: mpsc::UnboundedSender<Outbound>,
}

impl ChannelBroadcaster {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Outbound>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Broadcaster for ChannelBroadcaster {
    fn publish(&self, message: Outbound) {
        if let Err(err) = self.tx.send(message) {
            warn!(
                event = err.0.event.kind(),
                session_id = %err.0.session_id,
                "[BROADCAST] receiver dropped"
            );
        }
    }
}
