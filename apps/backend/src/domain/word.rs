//! Secret words, masking and the pluggable length/alphabet check.

use std::collections::BTreeSet;
use std::fmt;

use lazy_regex::regex_is_match;
use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, ValidationKind};

/// Word categories offered to the word-master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    All,
    Movies,
    Animals,
    Technology,
    Sports,
    Food,
    Countries,
    Science,
    /// Word drawn from the external random-word source.
    Random,
}

impl Category {
    pub const PICKABLE: [Category; 8] = [
        Category::All,
        Category::Movies,
        Category::Animals,
        Category::Technology,
        Category::Sports,
        Category::Food,
        Category::Countries,
        Category::Science,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Movies => "movies",
            Category::Animals => "animals",
            Category::Technology => "technology",
            Category::Sports => "sports",
            Category::Food => "food",
            Category::Countries => "countries",
            Category::Science => "science",
            Category::Random => "random",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Length and alphabet limits applied to candidate words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordRules {
    pub min_len: usize,
    pub max_len: usize,
    pub random_min_len: usize,
    pub random_max_len: usize,
}

impl Default for WordRules {
    fn default() -> Self {
        Self {
            min_len: 3,
            max_len: 20,
            random_min_len: 4,
            random_max_len: 15,
        }
    }
}

impl WordRules {
    /// Trim and lowercase a submitted word, then check length and alphabet.
    pub fn normalize(&self, raw: &str) -> Result<String, DomainError> {
        let word = raw.trim().to_lowercase();
        if word.len() < self.min_len {
            return Err(DomainError::validation(
                ValidationKind::InvalidWord,
                format!("Word must be at least {} characters", self.min_len),
            ));
        }
        if word.len() > self.max_len {
            return Err(DomainError::validation(
                ValidationKind::InvalidWord,
                format!("Word cannot exceed {} characters", self.max_len),
            ));
        }
        if !regex_is_match!("^[a-z]+$", &word) {
            return Err(DomainError::validation(
                ValidationKind::InvalidWord,
                "Word must contain only letters",
            ));
        }
        Ok(word)
    }

    /// Whether a word from the random source is usable as-is.
    pub fn accepts_random(&self, word: &str) -> bool {
        (self.random_min_len..=self.random_max_len).contains(&word.len())
            && regex_is_match!("^[a-z]+$", word)
    }
}

/// Parse a single guessed letter, lower-cased.
pub fn normalize_letter(raw: &str) -> Result<char, DomainError> {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Ok(c.to_ascii_lowercase()),
        _ => Err(DomainError::validation(
            ValidationKind::InvalidLetter,
            format!("Must be a single letter, got '{trimmed}'"),
        )),
    }
}

/// The hidden word for one round. Stored lower-cased.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretWord(String);

impl SecretWord {
    pub fn new(word: impl Into<String>) -> Self {
        Self(word.into().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Letter count, spaces excluded.
    pub fn len(&self) -> usize {
        self.0.chars().filter(|c| !c.is_whitespace()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, letter: char) -> bool {
        self.0.contains(letter)
    }

    /// Zero-based character positions of `letter`.
    pub fn positions(&self, letter: char) -> Vec<usize> {
        self.0
            .chars()
            .enumerate()
            .filter_map(|(i, c)| (c == letter).then_some(i))
            .collect()
    }

    pub fn distinct_letters(&self) -> BTreeSet<char> {
        self.0.chars().filter(|c| *c != ' ').collect()
    }

    /// Every distinct non-space letter is in `correct`.
    pub fn is_revealed_by(&self, correct: &BTreeSet<char>) -> bool {
        self.0.chars().filter(|c| *c != ' ').all(|c| correct.contains(&c))
    }

    /// Space-separated mask: revealed letters shown, others `_`.
    pub fn mask(&self, correct: &BTreeSet<char>) -> String {
        self.0
            .chars()
            .map(|c| {
                if c == ' ' || correct.contains(&c) {
                    c
                } else {
                    '_'
                }
            })
            .map(String::from)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Mask shown before any letter is revealed.
    pub fn blank_mask(&self) -> String {
        self.mask(&BTreeSet::new())
    }
}

// Never print the word itself in logs.
impl fmt::Debug for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretWord(len={})", self.len())
    }
}
