//! Error codes reported to callers of the session engine.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings a transport
//! sends back to the originating client.

use core::fmt;

/// Centralized error codes for the session engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Lookup
    /// Session not found (or already torn down)
    SessionNotFound,
    /// Participant is not part of the session
    ParticipantNotFound,
    /// Room unknown to the room directory
    RoomNotFound,

    // Rule violations
    /// Action illegal for current session status
    InvalidPhase,
    /// Caller is not the word master
    NotWordMaster,
    /// Caller does not hold the turn
    NotYourTurn,
    /// Letter repeated within the round
    LetterAlreadyGuessed,
    /// Hint budget exhausted
    NoHintsRemaining,
    /// Fewer participants than the minimum
    InsufficientPlayers,
    /// All guessers unavailable
    NoEligiblePlayers,
    /// Room already has a running game
    AlreadyInProgress,

    // Input validation
    /// Guess is not a single letter
    InvalidLetter,
    /// Submitted word failed format or dictionary checks
    InvalidWord,
    /// Hint text empty or too long
    InvalidHint,

    // Operational
    /// Word source could not produce a word
    WordSourceUnavailable,
    /// Stats/leaderboard collaborator failed
    StatsSyncFailed,
    /// Room directory collaborator failed
    RoomDirectoryFailed,
    /// Session actor mailbox closed
    SessionClosed,
    /// Invalid engine configuration
    ConfigError,
    /// Unexpected internal failure
    InternalError,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SessionNotFound => "SESSION_NOT_FOUND",
            Self::ParticipantNotFound => "PARTICIPANT_NOT_FOUND",
            Self::RoomNotFound => "ROOM_NOT_FOUND",
            Self::InvalidPhase => "INVALID_PHASE",
            Self::NotWordMaster => "NOT_WORD_MASTER",
            Self::NotYourTurn => "NOT_YOUR_TURN",
            Self::LetterAlreadyGuessed => "LETTER_ALREADY_GUESSED",
            Self::NoHintsRemaining => "NO_HINTS_REMAINING",
            Self::InsufficientPlayers => "INSUFFICIENT_PLAYERS",
            Self::NoEligiblePlayers => "NO_ELIGIBLE_PLAYERS",
            Self::AlreadyInProgress => "ALREADY_IN_PROGRESS",
            Self::InvalidLetter => "INVALID_LETTER",
            Self::InvalidWord => "INVALID_WORD",
            Self::InvalidHint => "INVALID_HINT",
            Self::WordSourceUnavailable => "WORD_SOURCE_UNAVAILABLE",
            Self::StatsSyncFailed => "STATS_SYNC_FAILED",
            Self::RoomDirectoryFailed => "ROOM_DIRECTORY_FAILED",
            Self::SessionClosed => "SESSION_CLOSED",
            Self::ConfigError => "CONFIG_ERROR",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
