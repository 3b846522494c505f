//! Plays whole games against the pure domain layer.
//!
//! No actors, timers or collaborators: turn timeouts are simulated by
//! expiring the current turn directly, and the clock advances a fixed step
//! per action.

use hangman_backend::domain::guessing::{accept_word, guess_letter, send_hint};
use hangman_backend::domain::invariants;
use hangman_backend::domain::round_lifecycle::{
    advance_after_settle, game_result, start_game, GameResult, StartParams,
};
use hangman_backend::domain::state::{GameState, GameStatus, PlayerId};
use hangman_backend::domain::turns::expire_turn;
use hangman_backend::domain::{Category, GameRules, SecretWord};
use hangman_backend::services::fallback_words::words_for;
use hangman_backend::EngineConfig;
use rand::seq::IndexedRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use time::{Duration, OffsetDateTime};
use tracing::debug;
use uuid::Uuid;

use crate::strategy::Strategy;

/// Seconds of simulated time one action takes.
const STEP: Duration = Duration::seconds(2);

/// Upper bound on actions per game; a healthy game never gets close.
const MAX_ACTIONS: usize = 10_000;

#[derive(Debug, Clone, Copy)]
pub struct SimSettings {
    pub players: usize,
    pub rounds: u8,
    pub strategy: Strategy,
    /// Probability a guesser lets the turn time out.
    pub timeout_rate: f64,
    /// Probability the word-master gives a hint before a guess.
    pub hint_rate: f64,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PlayCounters {
    pub guesses: u32,
    pub timeouts: u32,
    pub hints: u32,
}

pub struct Outcome {
    pub result: GameResult,
    pub counters: PlayCounters,
}

pub struct Simulator<'a> {
    config: &'a EngineConfig,
    settings: SimSettings,
    rng: ChaCha8Rng,
}

impl<'a> Simulator<'a> {
    pub fn new(config: &'a EngineConfig, settings: SimSettings, rng: ChaCha8Rng) -> Self {
        Self {
            config,
            settings,
            rng,
        }
    }

    pub fn play(&mut self, game_no: u32) -> Result<Outcome, Box<dyn std::error::Error>> {
        let mut now = OffsetDateTime::now_utc();
        let params = StartParams {
            session_id: Uuid::new_v4(),
            room_id: format!("SIM{game_no:03}"),
            participants: (1..=self.settings.players as PlayerId).collect(),
            rules: GameRules {
                total_rounds: self.settings.rounds,
                max_incorrect: self.config.max_incorrect,
                max_hints: self.config.max_hints,
                turn_time: self.config.turn_time,
            },
            min_players: self.config.min_players,
            max_players: self.config.max_players,
        };
        let (mut state, _) = start_game(params, &mut self.rng, now)?;
        let mut counters = PlayCounters::default();

        for _ in 0..MAX_ACTIONS {
            match state.status {
                GameStatus::WordSelection => self.pick_word(&mut state, now)?,
                GameStatus::InProgress => self.take_turn(&mut state, &mut counters, now)?,
                GameStatus::RoundEnd => {
                    advance_after_settle(&mut state);
                }
                GameStatus::GameOver | GameStatus::Abandoned => break,
            }
            invariants::check(&state)?;
            now += STEP;
        }

        if !state.status.is_terminal() {
            return Err(format!("game {game_no} did not finish in {MAX_ACTIONS} actions").into());
        }
        Ok(Outcome {
            result: game_result(&state),
            counters,
        })
    }

    fn pick_word(
        &mut self,
        state: &mut GameState,
        now: OffsetDateTime,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let category = *Category::PICKABLE
            .choose(&mut self.rng)
            .ok_or("no categories")?;
        let word = *words_for(category)
            .choose(&mut self.rng)
            .ok_or("empty word list")?;
        debug!(round = state.round_index, category = %category, "Word picked");
        let master = state.word_master_id;
        accept_word(state, master, SecretWord::new(word), category, now)?;
        Ok(())
    }

    fn take_turn(
        &mut self,
        state: &mut GameState,
        counters: &mut PlayCounters,
        now: OffsetDateTime,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let player = state.current_turn.ok_or("round in progress without a turn holder")?;

        if state.round.hints_remaining > 0 && self.rng.random_bool(self.settings.hint_rate) {
            let master = state.word_master_id;
            let text = format!("hint {}", state.round.hints.len() + 1);
            send_hint(state, master, &text)?;
            counters.hints += 1;
        }

        if self.rng.random_bool(self.settings.timeout_rate) {
            expire_turn(state, state.turn_seq, now);
            counters.timeouts += 1;
            return Ok(());
        }

        let letter = self
            .settings
            .strategy
            .next_letter(&state.round, &mut self.rng)
            .ok_or("alphabet exhausted with the round still open")?;
        guess_letter(state, player, &letter.to_string(), now)?;
        counters.guesses += 1;
        Ok(())
    }
}
