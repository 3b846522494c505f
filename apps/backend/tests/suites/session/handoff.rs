// Game completion: final ranking, stats hand-off and room release.

use hangman_backend::domain::{GameEvent, GameStatus};

use crate::common::{advance_secs, eventually};
use crate::support::{EngineBuilder, RecordingStats};

#[actix::test]
async fn final_round_settles_into_game_over_and_hands_off() {
    tokio::time::pause();
    let mut engine = EngineBuilder::new().build();
    let game = engine.start(2, 2).await;
    let (first_master, first_guesser) = (game.word_master, game.guessers[0]);

    // Round 1: the guesser solves cleanly (80), word-master consoled (10).
    engine.set_word(&game, "cat").await;
    for letter in ["c", "a", "t"] {
        engine.guess(&game, first_guesser, letter).await.unwrap();
    }
    advance_secs(5.5).await;

    // Round 2: roles swap; one miss before solving (-5 + 80), consolation 10.
    let view = engine.view(game.session_id, first_guesser).await;
    assert_eq!(view.word_master_id, first_guesser);
    engine
        .submit(&game, first_guesser, "dog")
        .await
        .expect("second word accepted");
    for letter in ["x", "d", "o", "g"] {
        engine.guess(&game, first_master, letter).await.unwrap();
    }
    let view = engine.view(game.session_id, first_master).await;
    assert_eq!(view.status, GameStatus::RoundEnd);
    advance_secs(5.5).await;

    let ended: Vec<_> = engine
        .events
        .all()
        .iter()
        .filter_map(|m| match &m.event {
            GameEvent::GameEnded { winner_id, ranking } => Some((*winner_id, ranking.clone())),
            _ => None,
        })
        .collect();
    assert_eq!(ended.len(), 1);
    let (winner, ranking) = &ended[0];
    assert_eq!(*winner, Some(first_guesser));
    assert_eq!(ranking[0].player_id, first_guesser);
    assert_eq!(ranking[0].score, 90);
    assert_eq!(ranking[1].player_id, first_master);
    assert_eq!(ranking[1].score, 85);

    eventually("leaderboard updated", || engine.stats.recorded().len() == 1).await;
    let result = &engine.stats.recorded()[0];
    assert_eq!(result.status, GameStatus::GameOver);
    assert_eq!(result.winner_id, Some(first_guesser));
    assert_eq!(result.round_history.len(), 2);
    let champion = result
        .players
        .iter()
        .find(|p| p.player_id == first_guesser)
        .unwrap();
    assert!(champion.won);
    assert_eq!(champion.words_guessed, 3);
    assert_eq!(champion.rounds_won, 1);
    let runner_up = result
        .players
        .iter()
        .find(|p| p.player_id == first_master)
        .unwrap();
    assert!(!runner_up.won);
    assert_eq!(runner_up.wrong_guesses, 1);

    eventually("history archived", || {
        engine.stats.archived_with(GameStatus::GameOver) == 1
    })
    .await;
    eventually("room released", || engine.rooms.playing(&game.room_id).is_none()).await;
    eventually("session torn down", || engine.registry.active_sessions() == 0).await;
    assert_eq!(engine.registry.session_for_room(&game.room_id), None);
}

#[actix::test]
async fn leaderboard_failure_does_not_block_teardown() {
    tokio::time::pause();
    let engine = EngineBuilder::new()
        .with_stats(RecordingStats::failing_leaderboard())
        .build();
    let game = engine.start(2, 1).await;
    engine.set_word(&game, "cat").await;
    for letter in ["c", "a", "t"] {
        engine.guess(&game, game.guessers[0], letter).await.unwrap();
    }
    advance_secs(5.5).await;

    eventually("leaderboard attempted", || engine.stats.recorded().len() == 1).await;
    eventually("history still archived", || engine.stats.archived().len() == 1).await;
    eventually("room still released", || engine.rooms.playing(&game.room_id).is_none()).await;
    eventually("session torn down", || engine.registry.active_sessions() == 0).await;
}

#[actix::test]
async fn released_room_can_start_another_game() {
    tokio::time::pause();
    let engine = EngineBuilder::new().build();
    let game = engine.start(2, 1).await;
    engine.set_word(&game, "cat").await;
    for letter in ["c", "a", "t"] {
        engine.guess(&game, game.guessers[0], letter).await.unwrap();
    }
    advance_secs(5.5).await;
    eventually("room released", || {
        let free_in_directory = engine.rooms.playing(&game.room_id).is_none();
        let free_in_registry = engine.registry.session_for_room(&game.room_id).is_none();
        assert_eq!(free_in_directory, free_in_registry, "room views disagree");
        free_in_directory
    })
    .await;
    assert_eq!(engine.registry.active_sessions(), 0);

    // No extra wait: a room free in both views takes a new game at once.
    let again = engine.registry.start_game(&game.room_id).await.unwrap();
    assert_ne!(again, game.session_id);
    assert_eq!(engine.rooms.playing(&game.room_id), Some(again));
}
