//! Per-game JSON lines and the closing summary.

use std::time::Duration;

use hangman_backend::domain::state::PlayerId;
use serde::Serialize;

use crate::simulator::Outcome;

#[derive(Debug, Clone, Serialize)]
pub struct PlayerLine {
    pub player_id: PlayerId,
    pub score: i64,
    pub rounds_won: u32,
    pub correct_letters: u32,
    pub wrong_guesses: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameLine {
    pub game_no: u32,
    pub seed: u64,
    pub winner_id: Option<PlayerId>,
    pub rounds: usize,
    pub rounds_solved: usize,
    pub guesses: u32,
    pub timeouts: u32,
    pub hints: u32,
    pub players: Vec<PlayerLine>,
    pub duration_ms: f64,
}

impl GameLine {
    pub fn new(game_no: u32, seed: u64, outcome: &Outcome, elapsed: Duration) -> Self {
        let result = &outcome.result;
        Self {
            game_no,
            seed,
            winner_id: result.winner_id,
            rounds: result.round_history.len(),
            rounds_solved: result.round_history.iter().filter(|r| r.solved).count(),
            guesses: outcome.counters.guesses,
            timeouts: outcome.counters.timeouts,
            hints: outcome.counters.hints,
            players: result
                .players
                .iter()
                .map(|p| PlayerLine {
                    player_id: p.player_id,
                    score: p.score,
                    rounds_won: p.rounds_won,
                    correct_letters: p.correct_letters,
                    wrong_guesses: p.wrong_guesses,
                })
                .collect(),
            duration_ms: elapsed.as_secs_f64() * 1000.0,
        }
    }
}

#[derive(Debug, Default)]
pub struct Summary {
    pub games: u32,
    pub failed: u32,
    rounds: usize,
    solved: usize,
    guesses: u64,
    winning_score_total: i64,
}

impl Summary {
    pub fn add(&mut self, line: &GameLine) {
        self.games += 1;
        self.rounds += line.rounds;
        self.solved += line.rounds_solved;
        self.guesses += u64::from(line.guesses);
        self.winning_score_total += line
            .players
            .iter()
            .map(|p| p.score)
            .max()
            .unwrap_or(0);
    }

    pub fn print(&self, elapsed: Duration) {
        println!("\n=== Simulation Summary ===");
        println!("Games completed: {}", self.games);
        if self.failed > 0 {
            println!("Failed: {}", self.failed);
        }
        println!("Total time: {elapsed:?}");
        if self.games == 0 {
            return;
        }
        let solve_rate = if self.rounds == 0 {
            0.0
        } else {
            self.solved as f64 / self.rounds as f64 * 100.0
        };
        println!("Rounds solved: {}/{} ({solve_rate:.1}%)", self.solved, self.rounds);
        println!(
            "Average guesses per round: {:.1}",
            self.guesses as f64 / self.rounds.max(1) as f64
        );
        println!(
            "Average winning score: {:.1}",
            self.winning_score_total as f64 / f64::from(self.games)
        );
    }
}
