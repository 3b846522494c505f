use crate::domain::guessing::guess_letter;
use crate::domain::rules::GameRules;
use crate::domain::snapshot::snapshot_for;
use crate::domain::state::GameStatus;
use crate::domain::test_state_helpers::{in_progress, new_session, T0};

#[test]
fn word_hidden_from_guessers() {
    let state = in_progress(&[1, 2, 3], "otter");
    let snap = snapshot_for(&state, 2);

    assert!(!snap.is_word_master);
    assert_eq!(snap.word, None);
    assert_eq!(snap.masked_word, "_ _ _ _ _");
    assert_eq!(snap.word_length, 5);
    let json = serde_json::to_string(&snap).unwrap();
    assert!(!json.contains("otter"));
}

#[test]
fn word_shown_to_word_master_in_play() {
    let state = in_progress(&[1, 2], "otter");
    let snap = snapshot_for(&state, 1);
    assert!(snap.is_word_master);
    assert_eq!(snap.word.as_deref(), Some("otter"));
}

#[test]
fn word_never_shown_during_selection() {
    let mut state = new_session(&[1, 2], GameRules::default());
    state.round.secret = Some(crate::domain::word::SecretWord::new("leak"));
    assert_eq!(state.status, GameStatus::WordSelection);
    assert_eq!(snapshot_for(&state, 1).word, None);
}

#[test]
fn snapshot_reflects_progress() {
    let mut state = in_progress(&[1, 2, 3], "otter");
    guess_letter(&mut state, 2, "t", T0).unwrap();
    guess_letter(&mut state, 3, "q", T0).unwrap();

    let snap = snapshot_for(&state, 3);
    assert_eq!(snap.masked_word, "_ t t _ _");
    assert_eq!(snap.guessed_letters, vec!['t', 'q']);
    assert_eq!(snap.incorrect_count, 1);
    assert_eq!(snap.current_turn, Some(2));
    assert_eq!(snap.players.len(), 3);
    assert_eq!(snap.players[1].score, 10);
    assert_eq!(snap.players[2].score, -5);
}
