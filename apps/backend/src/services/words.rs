//! Word validation and random word selection.
//!
//! The engine never blocks on these calls inside a mutation: the session
//! actor resolves a word here first and folds the result in afterwards.
//! Source failures degrade (accept on format, or fall back to built-in
//! lists) instead of failing the session.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::config::{EngineConfig, WordApiConfig};
use crate::domain::word::{Category, SecretWord, WordRules};
use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::errors::ErrorCode;
use crate::services::fallback_words;

/// External dictionary and random-word provider.
#[async_trait]
pub trait WordSource: Send + Sync {
    /// `Ok(false)` means the dictionary does not know the word; `Err` means
    /// the dictionary could not be asked.
    async fn is_dictionary_word(&self, word: &str) -> Result<bool, AppError>;

    async fn random_word(&self) -> Result<String, AppError>;
}

/// What the word-master asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordChoice {
    Custom { word: String, category: Category },
    Random { category: Category },
}

/// A word ready to become a round's secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChosenWord {
    pub word: SecretWord,
    pub category: Category,
}

pub struct WordService {
    source: Arc<dyn WordSource>,
    rules: WordRules,
    rng: Mutex<ChaCha8Rng>,
}

impl WordService {
    pub fn new(source: Arc<dyn WordSource>, rules: WordRules, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        };
        Self {
            source,
            rules,
            rng: Mutex::new(rng),
        }
    }

    /// Word service using the engine's word rules and seed.
    pub fn from_config(source: Arc<dyn WordSource>, config: &EngineConfig) -> Self {
        Self::new(source, config.word_rules, config.seed)
    }

    pub fn rules(&self) -> WordRules {
        self.rules
    }

    pub async fn resolve(&self, choice: WordChoice) -> Result<ChosenWord, AppError> {
        match choice {
            WordChoice::Custom { word, category } => {
                let word = self.validate(&word).await?;
                Ok(ChosenWord {
                    word: SecretWord::new(word),
                    category,
                })
            }
            WordChoice::Random { category } => Ok(self.random(category).await),
        }
    }

    /// Normalize and check a submitted word. Accepts on format alone when
    /// the dictionary is unreachable.
    pub async fn validate(&self, raw: &str) -> Result<String, AppError> {
        let word = self.rules.normalize(raw)?;
        match self.source.is_dictionary_word(&word).await {
            Ok(true) => Ok(word),
            Ok(false) => Err(DomainError::validation(
                ValidationKind::InvalidWord,
                "Word not found in dictionary",
            )
            .into()),
            Err(err) => {
                warn!(error = %err, "Dictionary lookup failed, accepting word on format");
                Ok(word)
            }
        }
    }

    /// Random word from the source, or from the built-in list for `category`.
    pub async fn random(&self, category: Category) -> ChosenWord {
        match self.source.random_word().await {
            Ok(raw) => {
                let word = raw.trim().to_lowercase();
                if self.rules.accepts_random(&word) {
                    debug!(word_length = word.len(), "Random word from source");
                    return ChosenWord {
                        word: SecretWord::new(word),
                        category: Category::Random,
                    };
                }
                warn!(word_length = word.len(), "Random word unusable, using fallback list");
            }
            Err(err) => {
                warn!(error = %err, "Random word source failed, using fallback list");
            }
        }
        self.fallback(category)
    }

    pub fn fallback(&self, category: Category) -> ChosenWord {
        let words = fallback_words::words_for(category);
        let word = words.choose(&mut *self.rng.lock()).copied().unwrap_or("hangman");
        ChosenWord {
            word: SecretWord::new(word),
            category,
        }
    }
}

/// Dictionary and random-word HTTP APIs.
pub struct HttpWordSource {
    client: reqwest::Client,
    config: WordApiConfig,
}

impl HttpWordSource {
    pub fn new(config: WordApiConfig) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                AppError::upstream(ErrorCode::WordSourceUnavailable, "HTTP client setup failed", e)
            })?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl WordSource for HttpWordSource {
    async fn is_dictionary_word(&self, word: &str) -> Result<bool, AppError> {
        let url = format!("{}/{}", self.config.dictionary_url.trim_end_matches('/'), word);
        let response = self.client.get(&url).send().await.map_err(|e| {
            AppError::upstream(ErrorCode::WordSourceUnavailable, "Dictionary request failed", e)
        })?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        response.error_for_status().map(|_| true).map_err(|e| {
            AppError::upstream(
                ErrorCode::WordSourceUnavailable,
                format!("Dictionary returned {status}"),
                e,
            )
        })
    }

    async fn random_word(&self) -> Result<String, AppError> {
        let words: Vec<String> = self
            .client
            .get(&self.config.random_word_url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| {
                AppError::upstream(
                    ErrorCode::WordSourceUnavailable,
                    "Random word request failed",
                    e,
                )
            })?
            .json()
            .await
            .map_err(|e| {
                AppError::upstream(ErrorCode::WordSourceUnavailable, "Random word body invalid", e)
            })?;
        words
            .into_iter()
            .next()
            .ok_or_else(|| AppError::internal("Random word source returned no words"))
    }
}
