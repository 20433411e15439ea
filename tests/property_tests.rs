//! Property-based tests for guess evaluation and session counters.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated secrets, guesses and action sequences.

use codebreach::core::{CODE_LENGTH, Code, FeedbackRow, FixedSecret, Mark, evaluate};
use codebreach::game::{GameConfig, GameSession, GameState, MAX_ATTEMPTS, ROUND_SECONDS};
use proptest::prelude::*;
use std::time::Duration;

prop_compose! {
    fn arbitrary_code()(digits in prop::array::uniform4(0u8..=9)) -> Code {
        Code::new(digits).unwrap()
    }
}

#[derive(Debug, Clone)]
enum Action {
    Guess(Code),
    Garbage(String),
    Tick,
}

fn arbitrary_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        3 => arbitrary_code().prop_map(Action::Guess),
        1 => "[0-9a-z]{0,6}".prop_map(Action::Garbage),
        4 => Just(Action::Tick),
    ]
}

/// Session that is already active, on a runtime that never polls its timer
fn active_session(secret: Code) -> (tokio::runtime::Runtime, GameSession<FixedSecret>) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();
    let config = GameConfig::new().with_boot_delay(Duration::ZERO);
    let mut session = GameSession::new(config, FixedSecret(secret));
    {
        let _guard = runtime.enter();
        session.start();
    }
    (runtime, session)
}

proptest! {
    #[test]
    fn exact_iff_same_digit(secret in arbitrary_code(), guess in arbitrary_code()) {
        let row = FeedbackRow::calculate(&guess, &secret);
        for i in 0..CODE_LENGTH {
            prop_assert_eq!(
                row.marks()[i] == Mark::Exact,
                guess.digit_at(i) == secret.digit_at(i)
            );
        }
    }

    #[test]
    fn present_iff_misplaced_member(secret in arbitrary_code(), guess in arbitrary_code()) {
        let row = FeedbackRow::calculate(&guess, &secret);
        for i in 0..CODE_LENGTH {
            let digit = guess.digit_at(i);
            let expected = digit != secret.digit_at(i) && secret.contains(digit);
            prop_assert_eq!(row.marks()[i] == Mark::Present, expected);
        }
    }

    #[test]
    fn self_evaluation_is_solved(secret in arbitrary_code()) {
        prop_assert!(FeedbackRow::calculate(&secret, &secret).is_solved());
    }

    #[test]
    fn evaluate_matches_calculate(secret in arbitrary_code(), guess in arbitrary_code()) {
        prop_assert_eq!(
            evaluate(&secret, guess.digits()),
            Ok(FeedbackRow::calculate(&guess, &secret))
        );
    }

    #[test]
    fn evaluate_rejects_wrong_length(
        secret in arbitrary_code(),
        digits in prop::collection::vec(0u8..=9, 0..8)
    ) {
        prop_assume!(digits.len() != CODE_LENGTH);
        prop_assert!(evaluate(&secret, &digits).is_err());
    }

    #[test]
    fn parse_accepts_only_four_digits(input in "\\PC{0,6}") {
        let valid = input.trim().chars().count() == CODE_LENGTH
            && input.trim().chars().all(|c| c.is_ascii_digit());
        prop_assert_eq!(Code::parse(&input).is_ok(), valid);
    }

    #[test]
    fn counters_stay_in_bounds(
        secret in arbitrary_code(),
        actions in prop::collection::vec(arbitrary_action(), 0..120)
    ) {
        let (_runtime, mut session) = active_session(secret);

        for action in actions {
            let before = session.remaining_seconds();
            let was_active = session.state() == GameState::Active;

            match action {
                Action::Guess(guess) => {
                    let attempts = session.attempts_used();
                    let result = session.submit(guess);
                    prop_assert_eq!(result.is_ok(), was_active);
                    if was_active {
                        prop_assert_eq!(session.attempts_used(), attempts + 1);
                        if guess == secret {
                            prop_assert_eq!(session.state(), GameState::Won);
                        }
                    }
                }
                Action::Garbage(input) => {
                    let attempts = session.attempts_used();
                    if Code::parse(&input).is_err() {
                        prop_assert!(session.submit_guess(&input).is_err());
                        prop_assert_eq!(session.attempts_used(), attempts);
                    }
                }
                Action::Tick => {
                    session.tick();
                    if was_active {
                        prop_assert_eq!(session.remaining_seconds(), before - 1);
                    } else {
                        prop_assert_eq!(session.remaining_seconds(), before);
                    }
                }
            }

            prop_assert!(session.attempts_used() <= MAX_ATTEMPTS);
            prop_assert!(session.remaining_seconds() <= ROUND_SECONDS);
            prop_assert_eq!(session.history().len(), usize::from(session.attempts_used()));
            if session.remaining_seconds() == 0 || session.attempts_used() == MAX_ATTEMPTS {
                prop_assert!(session.state().is_terminal());
            }
        }
    }

    #[test]
    fn winning_guess_wins_on_any_attempt(
        secret in arbitrary_code(),
        misses in 0..MAX_ATTEMPTS
    ) {
        let (_runtime, mut session) = active_session(secret);
        let miss = Code::new(secret.digits().map(|d| (d + 1) % 10)).unwrap();

        for _ in 0..misses {
            session.submit(miss).unwrap();
        }
        session.submit(secret).unwrap();

        prop_assert_eq!(session.state(), GameState::Won);
        prop_assert_eq!(session.attempts_used(), misses + 1);
    }
}
