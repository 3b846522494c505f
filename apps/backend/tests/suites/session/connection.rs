// Disconnect grace, reconnection, paused rounds and abandonment.

use hangman_backend::domain::{
    Category, ConnectionState, GameEvent, GameSnapshot, GameStatus, PlayerId, SkipReason,
};
use hangman_backend::ErrorCode;

use crate::common::{advance_secs, eventually};
use crate::support::{EngineBuilder, ScriptedWords};

fn connection_of(view: &GameSnapshot, player: PlayerId) -> ConnectionState {
    view.players
        .iter()
        .find(|p| p.player_id == player)
        .map(|p| p.connection)
        .expect("player in snapshot")
}

#[actix::test]
async fn reconnect_within_grace_keeps_the_turn() {
    tokio::time::pause();
    let mut engine = EngineBuilder::new().build();
    let game = engine.start(3, 1).await;
    let holder = game.guessers[0];
    engine.set_word(&game, "zebra").await;

    engine
        .registry
        .player_disconnected(game.session_id, holder)
        .await
        .unwrap();
    let view = engine.view(game.session_id, holder).await;
    assert_eq!(connection_of(&view, holder), ConnectionState::PendingDisconnect);
    assert_eq!(view.current_turn, Some(holder));

    advance_secs(9.0).await;
    engine
        .registry
        .player_reconnected(game.session_id, holder)
        .await
        .unwrap();
    advance_secs(2.0).await;

    assert_eq!(engine.events.skips_of(holder, SkipReason::Disconnect), 0);
    let view = engine.view(game.session_id, holder).await;
    assert_eq!(connection_of(&view, holder), ConnectionState::Connected);
    assert_eq!(view.current_turn, Some(holder));
    assert!(engine
        .registry
        .timers(game.session_id)
        .await
        .unwrap()
        .grace
        .is_empty());

    // The returning player gets a private resync.
    let private = engine.events.private_to(holder);
    assert_eq!(private.len(), 1);
    match &private[0] {
        GameEvent::StateSync { snapshot } => {
            assert_eq!(snapshot.current_turn, Some(holder));
            assert!(snapshot.word.is_none());
        }
        other => panic!("expected state sync, got {other:?}"),
    }
}

#[actix::test]
async fn grace_expiry_skips_the_disconnected_turn_holder() {
    tokio::time::pause();
    let mut engine = EngineBuilder::new().build();
    let game = engine.start(3, 1).await;
    let (holder, next) = (game.guessers[0], game.guessers[1]);
    engine.set_word(&game, "zebra").await;

    engine
        .registry
        .player_disconnected(game.session_id, holder)
        .await
        .unwrap();
    advance_secs(10.5).await;

    assert_eq!(engine.events.skips_of(holder, SkipReason::Disconnect), 1);
    assert_eq!(
        engine.events.count(|e| {
            matches!(e, GameEvent::PlayerUnavailable { player_id } if *player_id == holder)
        }),
        1
    );
    let view = engine.view(game.session_id, next).await;
    assert_eq!(view.current_turn, Some(next));
    assert_eq!(connection_of(&view, holder), ConnectionState::Disconnected);
}

#[actix::test]
async fn repeated_disconnect_reports_arm_one_grace_timer() {
    tokio::time::pause();
    let mut engine = EngineBuilder::new().build();
    let game = engine.start(3, 1).await;
    let player = game.guessers[1];
    engine.set_word(&game, "zebra").await;

    for _ in 0..3 {
        engine
            .registry
            .player_disconnected(game.session_id, player)
            .await
            .unwrap();
    }

    let report = engine.registry.timers(game.session_id).await.unwrap();
    assert_eq!(report.grace, vec![player]);
    assert_eq!(
        engine
            .events
            .count(|e| matches!(e, GameEvent::PlayerDisconnected { .. })),
        1
    );

    advance_secs(10.5).await;
    assert_eq!(
        engine
            .events
            .count(|e| matches!(e, GameEvent::PlayerUnavailable { .. })),
        1
    );
}

#[actix::test]
async fn disconnected_guesser_is_passed_over_in_rotation() {
    tokio::time::pause();
    let mut engine = EngineBuilder::new().build();
    let game = engine.start(3, 1).await;
    let (holder, absent) = (game.guessers[0], game.guessers[1]);
    engine.set_word(&game, "zebra").await;

    engine
        .registry
        .player_disconnected(game.session_id, absent)
        .await
        .unwrap();
    advance_secs(10.5).await;

    // Not their turn, so nothing is skipped.
    assert_eq!(engine.events.skips_of(absent, SkipReason::Disconnect), 0);
    engine.guess(&game, holder, "q").await.unwrap();
    let view = engine.view(game.session_id, holder).await;
    assert_eq!(view.current_turn, Some(holder));
}

#[actix::test]
async fn round_pauses_without_guessers_and_resumes_on_return() {
    tokio::time::pause();
    let mut engine = EngineBuilder::new().build();
    let game = engine.start(2, 1).await;
    let guesser = game.guessers[0];
    engine.set_word(&game, "zebra").await;

    engine
        .registry
        .player_disconnected(game.session_id, guesser)
        .await
        .unwrap();
    advance_secs(10.5).await;

    let view = engine.view(game.session_id, game.word_master).await;
    assert_eq!(view.status, GameStatus::InProgress);
    assert_eq!(view.current_turn, None);
    assert_eq!(view.turn_deadline, None);
    let report = engine.registry.timers(game.session_id).await.unwrap();
    assert_eq!(report.turn_armed_for, None);
    assert!(!report.ticking);

    // Paused rounds stay paused; no timeout fires.
    advance_secs(60.0).await;
    assert_eq!(engine.events.skips_of(guesser, SkipReason::Timeout), 0);

    engine
        .registry
        .player_reconnected(game.session_id, guesser)
        .await
        .unwrap();
    let view = engine.view(game.session_id, guesser).await;
    assert_eq!(view.current_turn, Some(guesser));
    assert!(engine
        .registry
        .timers(game.session_id)
        .await
        .unwrap()
        .turn_armed_for
        .is_some());
    engine.guess(&game, guesser, "z").await.unwrap();
}

#[actix::test]
async fn everyone_gone_abandons_without_a_leaderboard_update() {
    tokio::time::pause();
    let mut engine = EngineBuilder::new().build();
    let game = engine.start(2, 3).await;
    engine.set_word(&game, "zebra").await;

    for player in [game.word_master, game.guessers[0]] {
        engine
            .registry
            .player_disconnected(game.session_id, player)
            .await
            .unwrap();
    }
    advance_secs(10.5).await;

    assert_eq!(
        engine
            .events
            .count(|e| matches!(e, GameEvent::GameAbandoned { round: 1 })),
        1
    );
    eventually("session torn down", || engine.registry.active_sessions() == 0).await;
    eventually("history archived", || {
        engine.stats.archived_with(GameStatus::Abandoned) == 1
    })
    .await;
    assert!(engine.stats.recorded().is_empty());
    eventually("room released", || engine.rooms.playing(&game.room_id).is_none()).await;

    let err = engine
        .registry
        .view_state(game.session_id, game.word_master)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::SessionNotFound);
    assert_eq!(engine.registry.session_for_participant(game.word_master), None);
}

#[actix::test]
async fn absent_word_master_gets_a_random_word() {
    tokio::time::pause();
    let mut engine = EngineBuilder::new()
        .with_words(ScriptedWords::accepting().with_random(&["planet"]))
        .build();
    let game = engine.start(3, 2).await;

    engine
        .registry
        .player_disconnected(game.session_id, game.word_master)
        .await
        .unwrap();
    advance_secs(10.5).await;

    let view = engine.view(game.session_id, game.guessers[0]).await;
    assert_eq!(view.status, GameStatus::InProgress);
    assert_eq!(view.word_length, 6);
    assert_eq!(view.category, Some(Category::Random));
    assert_eq!(view.current_turn, Some(game.guessers[0]));
    assert_eq!(
        engine
            .events
            .count(|e| matches!(e, GameEvent::WordSet { word_length: 6, .. })),
        1
    );
}

#[actix::test]
async fn strangers_cannot_report_connection_changes() {
    tokio::time::pause();
    let engine = EngineBuilder::new().build();
    let game = engine.start(2, 1).await;

    let err = engine
        .registry
        .player_disconnected(game.session_id, -1)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::ParticipantNotFound);
    let err = engine
        .registry
        .player_reconnected(game.session_id, -1)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::ParticipantNotFound);
}
