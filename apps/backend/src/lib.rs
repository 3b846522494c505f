#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod realtime;
pub mod services;
pub mod telemetry;


// Re-exports for public API
pub use config::{EngineConfig, WordApiConfig};
pub use error::AppError;
pub use errors::ErrorCode;
pub use realtime::{
    Audience, Broadcaster, ChannelBroadcaster, GameSessionActor, Outbound, SessionDeps,
    SessionRegistry,
};
pub use services::{
    HttpWordSource, InMemoryRooms, LogStatsSink, RoomDirectory, StatsSink, WordChoice,
    WordService, WordSource,
};

// Prelude for test convenience
pub mod prelude {
    pub use super::domain::events::{GameEvent, SkipReason};
    pub use super::domain::state::{ConnectionState, GameStatus, PlayerId, SessionId};
    pub use super::domain::word::Category;
    pub use super::error::AppError;
    pub use super::errors::ErrorCode;
    pub use super::realtime::*;
    pub use super::services::*;
}

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
