use crate::domain::scoring::{
    classify, guess_deltas, hint_delta, RoundOutcome, ScoreDelta, CORRECT_LETTER, HINT_COST,
    WRONG_LETTER,
};

#[test]
fn plain_guesses_touch_only_the_guesser() {
    assert_eq!(
        guess_deltas(2, 1, true, RoundOutcome::Continues),
        vec![ScoreDelta::new(2, CORRECT_LETTER)]
    );
    assert_eq!(
        guess_deltas(2, 1, false, RoundOutcome::Continues),
        vec![ScoreDelta::new(2, WRONG_LETTER)]
    );
}

#[test]
fn solve_stacks_bonus_and_consoles_word_master() {
    let deltas = guess_deltas(2, 1, true, RoundOutcome::Solved);
    assert_eq!(
        deltas,
        vec![
            ScoreDelta::new(2, 10),
            ScoreDelta::new(2, 50),
            ScoreDelta::new(1, 10)
        ]
    );
}

#[test]
fn exhausted_budget_rewards_word_master() {
    let deltas = guess_deltas(2, 1, false, RoundOutcome::BudgetExhausted);
    assert_eq!(deltas, vec![ScoreDelta::new(2, -5), ScoreDelta::new(1, 30)]);
}

#[test]
fn hint_costs_fifteen() {
    assert_eq!(hint_delta(1), ScoreDelta::new(1, HINT_COST));
    assert_eq!(HINT_COST, -15);
}

#[test]
fn solve_takes_priority_over_budget() {
    assert_eq!(classify(true, 6, 6), RoundOutcome::Solved);
    assert_eq!(classify(false, 6, 6), RoundOutcome::BudgetExhausted);
    assert_eq!(classify(false, 5, 6), RoundOutcome::Continues);
}
