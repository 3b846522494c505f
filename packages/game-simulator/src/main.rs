//! Game simulator CLI - plays whole hangman games in memory with bot guessers.
//!
//! Every game runs against the pure domain layer with invariants checked
//! after each action; one JSON line per game goes to stdout.

mod report;
mod simulator;
mod strategy;

use std::time::Instant;

use clap::{Parser, ValueEnum};
use hangman_backend::telemetry::{init_tracing, LogFormat};
use hangman_backend::EngineConfig;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use report::{GameLine, Summary};
use simulator::{SimSettings, Simulator};
use strategy::Strategy;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "game-simulator")]
#[command(about = "In-memory hangman game simulator")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Participants per game (word-master included)
    #[arg(short, long, default_value = "3")]
    players: usize,

    /// Rounds per game
    #[arg(short, long, default_value = "5")]
    rounds: u8,

    /// Guessing strategy for every bot
    #[arg(long, default_value = "frequency")]
    strategy: Strategy,

    /// Chance a bot lets its turn time out (0.0-1.0)
    #[arg(long, default_value = "0.0", value_parser = parse_rate)]
    timeout_rate: f64,

    /// Chance the word-master gives a hint before each turn (0.0-1.0)
    #[arg(long, default_value = "0.0", value_parser = parse_rate)]
    hint_rate: f64,

    /// Base seed; game N uses seed + N
    #[arg(long)]
    seed: Option<u64>,

    /// Log output format (logs go to stderr)
    #[arg(long, default_value = "pretty")]
    log_format: LogFormatArg,

    /// Print a summary after the last game
    #[arg(long)]
    summary: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormatArg {
    Json,
    Pretty,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Json => LogFormat::Json,
            LogFormatArg::Pretty => LogFormat::Pretty,
        }
    }
}

fn parse_rate(raw: &str) -> Result<f64, String> {
    let rate: f64 = raw.parse().map_err(|e| format!("{e}"))?;
    if (0.0..=1.0).contains(&rate) {
        Ok(rate)
    } else {
        Err(format!("{rate} is not between 0 and 1"))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(args.log_format.into());

    let config = EngineConfig::from_env()?;
    let settings = SimSettings {
        players: args.players,
        rounds: args.rounds,
        strategy: args.strategy,
        timeout_rate: args.timeout_rate,
        hint_rate: args.hint_rate,
    };
    let base_seed = args.seed.or(config.seed).unwrap_or_else(rand::random);
    info!(
        games = args.games,
        players = args.players,
        rounds = args.rounds,
        strategy = ?args.strategy,
        base_seed,
        "Starting simulation"
    );

    let start = Instant::now();
    let mut summary = Summary::default();
    for game_no in 1..=args.games {
        let seed = base_seed.wrapping_add(u64::from(game_no));
        let game_start = Instant::now();
        let rng = ChaCha8Rng::seed_from_u64(seed);

        match Simulator::new(&config, settings, rng).play(game_no) {
            Ok(outcome) => {
                let line = GameLine::new(game_no, seed, &outcome, game_start.elapsed());
                println!("{}", serde_json::to_string(&line)?);
                summary.add(&line);
            }
            Err(e) => {
                summary.failed += 1;
                warn!(game_no, seed, error = %e, "Game failed");
            }
        }
    }

    if args.summary {
        summary.print(start.elapsed());
    }
    if summary.failed > 0 {
        return Err(format!("{} of {} games failed", summary.failed, args.games).into());
    }
    Ok(())
}
