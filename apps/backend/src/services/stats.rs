//! Stats/leaderboard hand-off at the end of a session.

use async_trait::async_trait;
use tracing::info;

use crate::domain::round_lifecycle::GameResult;
use crate::error::AppError;

/// Persistence collaborator for finished sessions.
#[async_trait]
pub trait StatsSink: Send + Sync {
    /// Per-player score, games played/won and words guessed.
    async fn record_game(&self, result: &GameResult) -> Result<(), AppError>;

    /// Full round history for audit and history display.
    async fn archive_history(&self, result: &GameResult) -> Result<(), AppError>;
}

/// Sink that only logs; used when no persistence is wired.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogStatsSink;

#[async_trait]
impl StatsSink for LogStatsSink {
    async fn record_game(&self, result: &GameResult) -> Result<(), AppError> {
        for p in &result.players {
            info!(
                session_id = %result.session_id,
                player_id = p.player_id,
                score = p.score,
                won = p.won,
                words_guessed = p.words_guessed,
                "Leaderboard update"
            );
        }
        Ok(())
    }

    async fn archive_history(&self, result: &GameResult) -> Result<(), AppError> {
        info!(
            session_id = %result.session_id,
            status = ?result.status,
            rounds = result.round_history.len(),
            "Round history archived"
        );
        Ok(())
    }
}
