//! External word API configuration.

use std::env;
use std::time::Duration;

use crate::error::AppError;

pub const DEFAULT_DICTIONARY_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";
pub const DEFAULT_RANDOM_WORD_API_URL: &str = "https://random-word-api.herokuapp.com/word";

/// Endpoints and timeout for the HTTP word source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordApiConfig {
    pub dictionary_url: String,
    pub random_word_url: String,
    pub timeout: Duration,
}

impl Default for WordApiConfig {
    fn default() -> Self {
        Self {
            dictionary_url: DEFAULT_DICTIONARY_API_URL.to_string(),
            random_word_url: DEFAULT_RANDOM_WORD_API_URL.to_string(),
            timeout: Duration::from_millis(5000),
        }
    }
}

impl WordApiConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();
        let timeout = match env::var("WORD_API_TIMEOUT_MS") {
            Ok(raw) => raw.trim().parse::<u64>().map(Duration::from_millis).map_err(|_| {
                AppError::config(format!("WORD_API_TIMEOUT_MS must be milliseconds, got '{raw}'"))
            })?,
            Err(_) => defaults.timeout,
        };

        Ok(Self {
            dictionary_url: env::var("DICTIONARY_API_URL").unwrap_or(defaults.dictionary_url),
            random_word_url: env::var("RANDOM_WORD_API_URL").unwrap_or(defaults.random_word_url),
            timeout,
        })
    }
}
