//! In-process collaborators with scripted behavior.

use std::collections::{HashSet, VecDeque};

use async_trait::async_trait;
use hangman_backend::domain::{GameResult, GameStatus};
use hangman_backend::{AppError, StatsSink, WordSource};
use parking_lot::Mutex;

/// Dictionary that knows every word except `unknown`, and hands out random
/// words from a queue. An empty queue behaves like an outage.
#[derive(Debug, Default)]
pub struct ScriptedWords {
    unknown: HashSet<String>,
    unreachable: bool,
    random: Mutex<VecDeque<String>>,
}

impl ScriptedWords {
    pub fn accepting() -> Self {
        Self::default()
    }

    pub fn unreachable() -> Self {
        Self {
            unreachable: true,
            ..Self::default()
        }
    }

    pub fn rejecting(words: &[&str]) -> Self {
        Self {
            unknown: words.iter().map(|w| w.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn with_random(self, words: &[&str]) -> Self {
        self.random
            .lock()
            .extend(words.iter().map(|w| w.to_string()));
        self
    }
}

#[async_trait]
impl WordSource for ScriptedWords {
    async fn is_dictionary_word(&self, word: &str) -> Result<bool, AppError> {
        if self.unreachable {
            return Err(AppError::internal("dictionary offline"));
        }
        Ok(!self.unknown.contains(word))
    }

    async fn random_word(&self) -> Result<String, AppError> {
        self.random
            .lock()
            .pop_front()
            .ok_or_else(|| AppError::internal("random word queue empty"))
    }
}

/// Remembers every hand-off; optionally fails leaderboard updates.
#[derive(Debug, Default)]
pub struct RecordingStats {
    fail_record: bool,
    recorded: Mutex<Vec<GameResult>>,
    archived: Mutex<Vec<GameResult>>,
}

impl RecordingStats {
    pub fn failing_leaderboard() -> Self {
        Self {
            fail_record: true,
            ..Self::default()
        }
    }

    pub fn recorded(&self) -> Vec<GameResult> {
        self.recorded.lock().clone()
    }

    pub fn archived(&self) -> Vec<GameResult> {
        self.archived.lock().clone()
    }

    pub fn archived_with(&self, status: GameStatus) -> usize {
        self.archived
            .lock()
            .iter()
            .filter(|r| r.status == status)
            .count()
    }
}

#[async_trait]
impl StatsSink for RecordingStats {
    async fn record_game(&self, result: &GameResult) -> Result<(), AppError> {
        self.recorded.lock().push(result.clone());
        if self.fail_record {
            return Err(AppError::internal("leaderboard store offline"));
        }
        Ok(())
    }

    async fn archive_history(&self, result: &GameResult) -> Result<(), AppError> {
        self.archived.lock().push(result.clone());
        Ok(())
    }
}
