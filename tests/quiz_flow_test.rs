//! Integration tests for the guess/help/advance loop

use trader_quiz::core::{level_data, AdvanceOutcome, GuessOutcome, QuizError, QuizState};
use trader_quiz::engine::{Quiz, QuizConfig, QuizEvent, RecordingPresenter};
use trader_quiz::types::{Phase, ADVANCE_DELAY_MS, MAX_LEVEL};

fn mixed_case(name: &str) -> String {
    name.chars()
        .enumerate()
        .map(|(i, c)| {
            if i % 2 == 0 {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

#[test]
fn every_level_accepts_its_trader_in_any_casing() {
    let mut state = QuizState::default();
    for level in 1..=MAX_LEVEL {
        state.start(level);
        let before = state.score();
        let guess = format!("\t {} \n", mixed_case(level_data(level).name));

        let out = state.submit_guess(&guess).unwrap();
        assert!(matches!(out, GuessOutcome::Correct { .. }), "level {level}");
        assert_eq!(state.phase(), Phase::Resolved);
        assert_eq!(state.score(), before + 100);
    }
}

#[test]
fn wrong_guesses_never_move_score_or_level() {
    let mut state = QuizState::default();
    for guess in ["cryptoqueen", "CryptoKin", "CryptoKingg", "NeoTrader", "🙂"] {
        assert_eq!(state.submit_guess(guess).unwrap(), GuessOutcome::Wrong);
        assert_eq!(state.score(), 0);
        assert_eq!(state.level(), 1);
        assert!(state.is_playing());
    }
}

#[test]
fn help_resets_after_every_advance() {
    let mut state = QuizState::new(5);
    for level in 1..5 {
        assert!(state.request_help().is_ok());
        assert_eq!(state.request_help(), Err(QuizError::HelpAlreadyUsed));
        state.submit_guess(level_data(level).name).unwrap();
        assert_eq!(state.advance(), Ok(AdvanceOutcome::NextLevel(level + 1)));
        assert!(!state.help_used());
    }
}

#[test]
fn answering_the_last_level_completes_without_incrementing() {
    let mut state = QuizState::default();
    state.start(MAX_LEVEL);
    state.submit_guess("CryptoKing").unwrap();
    assert_eq!(state.advance(), Ok(AdvanceOutcome::Completed));
    assert_eq!(state.level(), MAX_LEVEL);
    assert_eq!(state.phase(), Phase::Completed);
}

#[test]
fn example_session_from_level_one() {
    let mut quiz = Quiz::new(QuizConfig::default(), RecordingPresenter::new());

    assert_eq!(quiz.submit_guess("cryptoqueen"), Ok(GuessOutcome::Wrong));
    assert_eq!(quiz.state().score(), 0);
    assert_eq!(quiz.state().level(), 1);

    assert_eq!(
        quiz.submit_guess("cryptoking"),
        Ok(GuessOutcome::Correct { name: "CryptoKing" })
    );
    assert_eq!(quiz.state().score(), 100);
    assert_eq!(quiz.state().level(), 1);

    quiz.tick(ADVANCE_DELAY_MS);
    assert_eq!(quiz.state().level(), 2);
    assert!(quiz.state().is_playing());
}

#[test]
fn guesses_during_the_advance_delay_change_nothing() {
    let mut quiz = Quiz::new(QuizConfig::default(), RecordingPresenter::new());
    quiz.submit_guess("CryptoKing").unwrap();

    for _ in 0..10 {
        quiz.tick(100);
        assert!(quiz.submit_guess("CryptoKing").is_err());
        assert!(quiz.request_help().is_err());
    }
    assert_eq!(quiz.state().score(), 100);

    quiz.tick(ADVANCE_DELAY_MS);
    assert_eq!(quiz.state().level(), 2);
    assert_eq!(quiz.state().score(), 100);
}

#[test]
fn completion_is_announced_once() {
    let config = QuizConfig {
        max_level: 2,
        ..QuizConfig::default()
    };
    let mut quiz = Quiz::new(config, RecordingPresenter::new());
    quiz.submit_guess("CryptoKing").unwrap();
    quiz.tick(ADVANCE_DELAY_MS);
    quiz.submit_guess("NeoTrader").unwrap();
    quiz.tick(ADVANCE_DELAY_MS);
    quiz.tick(ADVANCE_DELAY_MS);

    let completed = quiz
        .presenter()
        .events
        .iter()
        .filter(|e| matches!(e, QuizEvent::GameCompleted { score: 200 }))
        .count();
    assert_eq!(completed, 1);
    assert_eq!(quiz.state().level(), 2);
    assert_eq!(
        quiz.submit_guess("NeoTrader"),
        Err(QuizError::NotPlaying {
            phase: Phase::Completed
        })
    );
    assert!(quiz
        .presenter()
        .messages()
        .contains(&"Congratulations! You completed all levels!"));
}

#[test]
fn missing_input_has_its_own_message() {
    let mut quiz = Quiz::new(QuizConfig::default(), RecordingPresenter::new());
    assert_eq!(quiz.submit_guess("   "), Err(QuizError::MissingGuess));
    assert_eq!(quiz.presenter().messages(), vec!["Please enter your guess!"]);
}

#[test]
fn restart_during_delay_leaves_a_fresh_session() {
    let mut quiz = Quiz::new(QuizConfig::default(), RecordingPresenter::new());
    quiz.submit_guess("CryptoKing").unwrap();
    quiz.tick(ADVANCE_DELAY_MS - 10);
    quiz.restart();
    quiz.tick(ADVANCE_DELAY_MS);

    assert_eq!(quiz.state().level(), 1);
    assert_eq!(quiz.state().score(), 0);
    assert!(quiz.state().is_playing());
    assert!(quiz.notifications().is_empty());
}

#[test]
fn shutdown_cancels_pending_work() {
    let mut quiz = Quiz::new(QuizConfig::default(), RecordingPresenter::new());
    quiz.submit_guess("CryptoKing").unwrap();
    assert!(quiz.shutdown() >= 2);
    quiz.tick(ADVANCE_DELAY_MS * 4);
    assert_eq!(quiz.state().level(), 1);
    assert!(!quiz.wallet_shown());
}
