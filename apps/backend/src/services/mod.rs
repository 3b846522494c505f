pub mod fallback_words;
pub mod rooms;
pub mod stats;
pub mod words;

pub use rooms::{InMemoryRooms, RoomDirectory, RoomRoster, RoomSettings};
pub use stats::{LogStatsSink, StatsSink};
pub use words::{ChosenWord, HttpWordSource, WordChoice, WordService, WordSource};
