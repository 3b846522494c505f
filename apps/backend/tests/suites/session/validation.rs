// Rejected actions: error codes and untouched state.

use hangman_backend::domain::{Category, GameStatus, PlayerId, WordRules};
use hangman_backend::{AppError, ErrorCode, WordChoice};

use crate::support::{EngineBuilder, ScriptedWords, Started, TestEngine};

#[actix::test]
async fn only_the_word_master_may_submit_during_selection() {
    tokio::time::pause();
    let engine = EngineBuilder::new().build();
    let game = engine.start(3, 1).await;

    let err = engine.submit(&game, game.guessers[0], "zebra").await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotWordMaster);
    let err = engine.submit(&game, -5, "zebra").await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::ParticipantNotFound);

    engine.set_word(&game, "zebra").await;
    let err = engine.submit(&game, game.word_master, "tiger").await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidPhase);
}

#[actix::test]
async fn malformed_or_unknown_words_are_refused() {
    tokio::time::pause();
    let engine = EngineBuilder::new()
        .with_words(ScriptedWords::rejecting(&["zzyzx"]))
        .build();
    let game = engine.start(2, 1).await;

    for bad in ["ox", "c4t", "abcdefghijklmnopqrstu", "zzyzx"] {
        let err = engine.submit(&game, game.word_master, bad).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidWord, "word {bad:?}");
    }
    let view = engine.view(game.session_id, game.word_master).await;
    assert_eq!(view.status, GameStatus::WordSelection);

    engine.set_word(&game, "  Zebra ").await;
    let view = engine.view(game.session_id, game.word_master).await;
    assert_eq!(view.word.as_deref(), Some("zebra"));
    assert_eq!(view.category, Some(Category::Animals));
}

#[actix::test]
async fn configured_word_rules_bound_submitted_words() {
    tokio::time::pause();
    let engine = EngineBuilder::new()
        .configure(|c| {
            c.word_rules = WordRules {
                min_len: 5,
                max_len: 6,
                ..WordRules::default()
            }
        })
        .build();
    let game = engine.start(2, 1).await;

    for bad in ["cat", "giraffe"] {
        let err = engine.submit(&game, game.word_master, bad).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidWord, "word {bad:?}");
    }
    engine.set_word(&game, "zebra").await;
    let view = engine.view(game.session_id, game.guessers[0]).await;
    assert_eq!(view.word_length, 5);
}

#[actix::test]
async fn unreachable_dictionary_accepts_on_format() {
    tokio::time::pause();
    let engine = EngineBuilder::new()
        .with_words(ScriptedWords::unreachable())
        .build();
    let game = engine.start(2, 1).await;

    engine.set_word(&game, "quokka").await;
    let view = engine.view(game.session_id, game.guessers[0]).await;
    assert_eq!(view.status, GameStatus::InProgress);
    assert_eq!(view.word_length, 6);
}

#[actix::test]
async fn random_choice_falls_back_to_the_category_list() {
    tokio::time::pause();
    let engine = EngineBuilder::new().build();
    let game = engine.start(2, 1).await;

    engine
        .registry
        .submit_word(
            game.session_id,
            game.word_master,
            WordChoice::Random {
                category: Category::Food,
            },
        )
        .await
        .unwrap();
    let view = engine.view(game.session_id, game.word_master).await;
    assert_eq!(view.status, GameStatus::InProgress);
    assert_eq!(view.category, Some(Category::Food));
    assert!(view.word.is_some_and(|w| !w.is_empty()));
}

#[actix::test]
async fn guesses_are_checked_before_anything_changes() {
    tokio::time::pause();
    let engine = EngineBuilder::new().build();
    let game = engine.start(3, 1).await;
    let (first, second) = (game.guessers[0], game.guessers[1]);

    let err = engine.guess(&game, first, "a").await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidPhase);
    let err = engine.guess(&game, -5, "a").await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::ParticipantNotFound);

    engine.set_word(&game, "zebra").await;
    let err = engine.guess(&game, second, "a").await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotYourTurn);
    let err = engine.guess(&game, game.word_master, "a").await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotYourTurn);
    let err = engine.guess(&game, -5, "a").await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::ParticipantNotFound);
    for bad in ["", "ab", "7", "é"] {
        let err = engine.guess(&game, first, bad).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidLetter, "letter {bad:?}");
    }

    let before = engine.view(game.session_id, first).await;
    assert!(before.guessed_letters.is_empty());
    assert_eq!(before.current_turn, Some(first));

    engine.guess(&game, first, "e").await.unwrap();
    let err = engine.guess(&game, second, "E").await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::LetterAlreadyGuessed);

    let after = engine.view(game.session_id, second).await;
    assert_eq!(after.guessed_letters, vec!['e']);
    assert_eq!(after.current_turn, Some(second));
    assert_eq!(TestEngine::score_of(&after, second), 0);
}

async fn hint(
    engine: &TestEngine,
    game: &Started,
    caller: PlayerId,
    text: &str,
) -> Result<(), AppError> {
    engine.registry.send_hint(game.session_id, caller, text).await
}

#[actix::test]
async fn hints_need_the_word_master_a_live_round_and_sane_text() {
    tokio::time::pause();
    let engine = EngineBuilder::new().build();
    let game = engine.start(2, 1).await;

    let err = hint(&engine, &game, game.word_master, "too early").await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidPhase);

    engine.set_word(&game, "zebra").await;
    let err = hint(&engine, &game, game.guessers[0], "stripes").await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotWordMaster);
    let err = hint(&engine, &game, game.word_master, "   ").await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidHint);
    let err = hint(&engine, &game, game.word_master, &"x".repeat(101))
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidHint);

    let view = engine.view(game.session_id, game.guessers[0]).await;
    assert!(view.hints.is_empty());
    assert_eq!(view.hints_remaining, 3);
    assert_eq!(TestEngine::score_of(&view, game.word_master), 0);

    hint(&engine, &game, game.word_master, &"x".repeat(100)).await.unwrap();
}

#[actix::test]
async fn secret_word_is_shown_to_the_word_master_only() {
    tokio::time::pause();
    let engine = EngineBuilder::new().build();
    let game = engine.start(3, 1).await;

    let selecting = engine.view(game.session_id, game.word_master).await;
    assert!(selecting.is_word_master);
    assert_eq!(selecting.word, None);

    engine.set_word(&game, "zebra").await;
    let master = engine.view(game.session_id, game.word_master).await;
    assert_eq!(master.word.as_deref(), Some("zebra"));
    for guesser in &game.guessers {
        let view = engine.view(game.session_id, *guesser).await;
        assert!(!view.is_word_master);
        assert_eq!(view.word, None);
        assert_eq!(view.masked_word, "_ _ _ _ _");
        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("word").is_none());
    }

    let err = engine
        .registry
        .view_state(game.session_id, -5)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::ParticipantNotFound);
}
