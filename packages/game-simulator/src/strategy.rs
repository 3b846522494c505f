//! Bot guessers.

use clap::ValueEnum;
use hangman_backend::domain::state::RoundState;
use rand::seq::IndexedRandom;
use rand::Rng;

/// Letters ordered by how often they appear in English text.
const FREQUENCY_ORDER: &str = "etaoinshrdlcumwfgypbvkjxqz";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Most common unguessed letter first.
    Frequency,
    /// Any unguessed letter, uniformly.
    Random,
}

impl Strategy {
    /// Next letter to try, or `None` once the alphabet is used up.
    pub fn next_letter<R: Rng + ?Sized>(self, round: &RoundState, rng: &mut R) -> Option<char> {
        let open: Vec<char> = FREQUENCY_ORDER
            .chars()
            .filter(|c| !round.has_guessed(*c))
            .collect();
        match self {
            Strategy::Frequency => open.first().copied(),
            Strategy::Random => open.choose(rng).copied(),
        }
    }
}
