use std::error::Error as StdError;

use thiserror::Error;

use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use crate::errors::ErrorCode;

type BoxedSource = Box<dyn StdError + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Rejected: {detail}")]
    Rejected { code: ErrorCode, detail: String },
    #[error("Not found: {detail}")]
    NotFound { code: ErrorCode, detail: String },
    #[error("Upstream error: {detail}")]
    Upstream {
        code: ErrorCode,
        detail: String,
        #[source]
        source: BoxedSource,
    },
    #[error("Session closed: {detail}")]
    SessionClosed { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Internal error: {detail}")]
    Internal { code: ErrorCode, detail: String },
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Rejected { code, .. } => *code,
            AppError::NotFound { code, .. } => *code,
            AppError::Upstream { code, .. } => *code,
            AppError::SessionClosed { .. } => ErrorCode::SessionClosed,
            AppError::Config { .. } => ErrorCode::ConfigError,
            AppError::Internal { code, .. } => *code,
        }
    }

    /// Caller mistakes, as opposed to collaborator or engine failures.
    pub fn is_rejection(&self) -> bool {
        matches!(self, AppError::Rejected { .. } | AppError::NotFound { .. })
    }

    pub fn rejected(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Rejected {
            code,
            detail: detail.into(),
        }
    }

    pub fn not_found(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::NotFound {
            code,
            detail: detail.into(),
        }
    }

    pub fn upstream(
        code: ErrorCode,
        detail: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self::Upstream {
            code,
            detail: detail.into(),
            source: Box::new(source),
        }
    }

    pub fn session_closed(detail: impl Into<String>) -> Self {
        Self::SessionClosed {
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            code: ErrorCode::InternalError,
            detail: detail.into(),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        let detail = err.to_string();
        match err {
            DomainError::NotFound(kind, _) => {
                let code = match kind {
                    NotFoundKind::Session => ErrorCode::SessionNotFound,
                    NotFoundKind::Participant => ErrorCode::ParticipantNotFound,
                    NotFoundKind::Room => ErrorCode::RoomNotFound,
                };
                AppError::not_found(code, detail)
            }
            DomainError::InvalidPhase(_) => AppError::rejected(ErrorCode::InvalidPhase, detail),
            DomainError::NotWordMaster => AppError::rejected(ErrorCode::NotWordMaster, detail),
            DomainError::NotYourTurn => AppError::rejected(ErrorCode::NotYourTurn, detail),
            DomainError::LetterAlreadyGuessed(_) => {
                AppError::rejected(ErrorCode::LetterAlreadyGuessed, detail)
            }
            DomainError::NoHintsRemaining => {
                AppError::rejected(ErrorCode::NoHintsRemaining, detail)
            }
            DomainError::InsufficientPlayers { .. } => {
                AppError::rejected(ErrorCode::InsufficientPlayers, detail)
            }
            DomainError::NoEligiblePlayers => {
                AppError::rejected(ErrorCode::NoEligiblePlayers, detail)
            }
            DomainError::AlreadyInProgress(_) => {
                AppError::rejected(ErrorCode::AlreadyInProgress, detail)
            }
            DomainError::Validation(kind, _) => {
                let code = match kind {
                    ValidationKind::InvalidLetter => ErrorCode::InvalidLetter,
                    ValidationKind::InvalidWord => ErrorCode::InvalidWord,
                    ValidationKind::InvalidHint => ErrorCode::InvalidHint,
                };
                AppError::rejected(code, detail)
            }
        }
    }
}

impl From<actix::MailboxError> for AppError {
    fn from(err: actix::MailboxError) -> Self {
        AppError::session_closed(format!("session mailbox unavailable: {err}"))
    }
}

impl From<std::env::VarError> for AppError {
    fn from(e: std::env::VarError) -> Self {
        AppError::config(format!("env var error: {e}"))
    }
}
