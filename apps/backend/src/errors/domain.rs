//! Domain-level error type used across the session engine.
//!
//! This error type is transport-agnostic. Actor handlers and the registry
//! return `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the provided `From<DomainError> for AppError` implementation.
//!
//! Every variant is a recoverable, caller-visible rejection: the mutation
//! that produced it left the session untouched.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Domain-level not found entities
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Session,
    Participant,
    Room,
}

/// Input validation kinds for caller-supplied values
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    InvalidLetter,
    InvalidWord,
    InvalidHint,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Unknown session, participant or room
    NotFound(NotFoundKind, String),
    /// Action is illegal for the current session status
    InvalidPhase(String),
    /// Only the word-master may perform this action
    NotWordMaster,
    /// Only the current turn holder may guess
    NotYourTurn,
    /// Letter was already guessed this round
    LetterAlreadyGuessed(char),
    /// Word-master has used every hint for the round
    NoHintsRemaining,
    /// Not enough eligible participants to start
    InsufficientPlayers { required: usize, available: usize },
    /// Every guesser is unavailable
    NoEligiblePlayers,
    /// The room already hosts an active session
    AlreadyInProgress(String),
    /// Caller-supplied value failed validation
    Validation(ValidationKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
            DomainError::InvalidPhase(d) => write!(f, "invalid phase: {d}"),
            DomainError::NotWordMaster => write!(f, "only the word master can do that"),
            DomainError::NotYourTurn => write!(f, "not your turn"),
            DomainError::LetterAlreadyGuessed(c) => write!(f, "letter '{c}' already guessed"),
            DomainError::NoHintsRemaining => write!(f, "no hints remaining"),
            DomainError::InsufficientPlayers {
                required,
                available,
            } => write!(
                f,
                "at least {required} players required, {available} available"
            ),
            DomainError::NoEligiblePlayers => write!(f, "no eligible players"),
            DomainError::AlreadyInProgress(room) => {
                write!(f, "a game is already in progress in room {room}")
            }
            DomainError::Validation(kind, d) => write!(f, "validation {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn invalid_phase(detail: impl Into<String>) -> Self {
        Self::InvalidPhase(detail.into())
    }
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
}
