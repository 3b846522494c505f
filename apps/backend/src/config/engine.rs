//! Engine configuration loaded from the process environment.
//!
//! Every knob has a default matching the classic game rules; environment
//! variables override individual values. Malformed values are a
//! configuration error rather than a silent fallback.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::domain::rules;
use crate::domain::word::WordRules;
use crate::error::AppError;

/// Runtime configuration shared by every session the registry creates.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Time a guesser has before their turn is skipped.
    pub turn_time: Duration,
    /// Cadence of `turn_timer_tick` notifications.
    pub tick_interval: Duration,
    /// Window after a disconnect during which a reconnect is seamless.
    pub grace_period: Duration,
    /// Pause between round resolution and the next round (or game end).
    pub settle_delay: Duration,
    pub max_incorrect: u8,
    pub max_hints: u8,
    pub total_rounds: u8,
    pub min_players: usize,
    pub max_players: usize,
    pub word_rules: WordRules,
    /// Fixed RNG seed for turn order and fallback words (None = OS entropy).
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            turn_time: Duration::from_secs(rules::TURN_TIME_SECONDS),
            tick_interval: Duration::from_secs(1),
            grace_period: Duration::from_secs(rules::DISCONNECT_GRACE_SECONDS),
            settle_delay: Duration::from_secs(rules::ROUND_SETTLE_SECONDS),
            max_incorrect: rules::MAX_INCORRECT_GUESSES,
            max_hints: rules::MAX_HINTS,
            total_rounds: rules::DEFAULT_ROUNDS,
            min_players: rules::MIN_PLAYERS,
            max_players: rules::MAX_PLAYERS,
            word_rules: WordRules::default(),
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Build a config from defaults overridden by `HANGMAN_*` variables.
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();
        let config = Self {
            turn_time: secs_var("HANGMAN_TURN_SECONDS")?.unwrap_or(defaults.turn_time),
            tick_interval: millis_var("HANGMAN_TICK_MILLIS")?.unwrap_or(defaults.tick_interval),
            grace_period: secs_var("HANGMAN_GRACE_SECONDS")?.unwrap_or(defaults.grace_period),
            settle_delay: secs_var("HANGMAN_SETTLE_SECONDS")?.unwrap_or(defaults.settle_delay),
            max_incorrect: parse_var("HANGMAN_MAX_INCORRECT")?.unwrap_or(defaults.max_incorrect),
            max_hints: parse_var("HANGMAN_MAX_HINTS")?.unwrap_or(defaults.max_hints),
            total_rounds: parse_var("HANGMAN_ROUNDS")?.unwrap_or(defaults.total_rounds),
            min_players: parse_var("HANGMAN_MIN_PLAYERS")?.unwrap_or(defaults.min_players),
            max_players: parse_var("HANGMAN_MAX_PLAYERS")?.unwrap_or(defaults.max_players),
            word_rules: defaults.word_rules,
            seed: parse_var("HANGMAN_SEED")?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject combinations the engine cannot run with.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.turn_time.is_zero() {
            return Err(AppError::config("turn time must be greater than zero"));
        }
        if self.tick_interval.is_zero() {
            return Err(AppError::config("tick interval must be greater than zero"));
        }
        if self.max_incorrect == 0 {
            return Err(AppError::config("max incorrect guesses must be at least 1"));
        }
        if self.total_rounds == 0 {
            return Err(AppError::config("a game needs at least one round"));
        }
        if self.min_players < 2 {
            return Err(AppError::config(
                "a game needs at least two players (word master and guesser)",
            ));
        }
        if self.max_players < self.min_players {
            return Err(AppError::config(format!(
                "max players ({}) is below min players ({})",
                self.max_players, self.min_players
            )));
        }
        Ok(())
    }
}

/// Get an optional environment variable parsed as `T`.
fn parse_var<T: FromStr>(name: &str) -> Result<Option<T>, AppError> {
    match env::var(name) {
        Ok(raw) => raw.trim().parse::<T>().map(Some).map_err(|_| {
            AppError::config(format!(
                "Environment variable '{name}' has an invalid value: '{raw}'"
            ))
        }),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn secs_var(name: &str) -> Result<Option<Duration>, AppError> {
    Ok(parse_var::<u64>(name)?.map(Duration::from_secs))
}

fn millis_var(name: &str) -> Result<Option<Duration>, AppError> {
    Ok(parse_var::<u64>(name)?.map(Duration::from_millis))
}
