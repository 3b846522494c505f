pub mod broadcast;
pub mod messages;
pub mod registry;
pub mod session;
mod timers;

pub use broadcast::{Audience, Broadcaster, ChannelBroadcaster, Outbound};
pub use registry::SessionRegistry;
pub use session::{GameSessionActor, SessionDeps, SessionTiming};
