//! Property-based tests for the round evaluator.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated guesses and answers.

use hilo::core::{Feedback, GuessRange, RoundState, State};
use hilo::round::attempts;
use hilo::source::Scripted;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

prop_compose! {
    fn arbitrary_range()(low in -1_000i64..1_000, width in 0i64..500) -> GuessRange {
        GuessRange::new(low, low + width).unwrap()
    }
}

prop_compose! {
    fn wrong_guesses_for(answer: i64)(
        guesses in prop::collection::vec(-2_000i64..2_000, 0..20)
    ) -> Vec<i64> {
        guesses.into_iter().filter(|g| *g != answer).collect()
    }
}

proptest! {
    #[test]
    fn wrong_guess_gets_directional_hint(answer in any::<i64>(), guess in any::<i64>()) {
        prop_assume!(guess != answer);
        let expected = if guess > answer { Feedback::TooHigh } else { Feedback::TooLow };
        prop_assert_eq!(Feedback::evaluate(guess, answer), expected);
    }

    #[test]
    fn matching_guess_is_correct(answer in any::<i64>()) {
        prop_assert_eq!(Feedback::evaluate(answer, answer), Feedback::Correct);
    }

    #[test]
    fn single_step_hint_matches_comparison(answer in -100i64..100, guess in -100i64..100) {
        let range = GuessRange::new(-100, 100).unwrap();
        let mut round = attempts(range, answer, Scripted::new([guess, answer]));

        let first = round.next().unwrap().unwrap();
        prop_assert_eq!(first, Feedback::evaluate(guess, answer));
        prop_assert_eq!(round.state().is_final(), guess == answer);
    }

    #[test]
    fn correct_appears_once_and_last(
        answer in -1_000i64..1_000,
        wrong in prop::collection::vec(-2_000i64..2_000, 0..20),
        trailing in prop::collection::vec(-2_000i64..2_000, 0..5),
    ) {
        let wrong: Vec<i64> = wrong.into_iter().filter(|g| *g != answer).collect();
        let mut script = wrong.clone();
        script.push(answer);
        script.extend(trailing);

        let range = GuessRange::new(-1_000, 1_000).unwrap();
        let feedback: Vec<Feedback> = attempts(range, answer, Scripted::new(script))
            .collect::<Result<_, _>>()
            .unwrap();

        prop_assert_eq!(feedback.len(), wrong.len() + 1);
        prop_assert_eq!(feedback.iter().filter(|f| f.is_terminal()).count(), 1);
        prop_assert_eq!(feedback.last(), Some(&Feedback::Correct));
    }

    #[test]
    fn state_stays_awaiting_until_correct(guesses in wrong_guesses_for(25)) {
        let range = GuessRange::new(0, 50).unwrap();
        let mut round = attempts(range, 25, Scripted::new(guesses.clone()));

        for _ in &guesses {
            prop_assert!(round.next().unwrap().is_ok());
            prop_assert_eq!(round.state(), RoundState::AwaitingGuess);
        }
    }

    #[test]
    fn transcript_mirrors_feedback(
        answer in -50i64..50,
        guesses in prop::collection::vec(-60i64..60, 1..15),
    ) {
        let range = GuessRange::new(-50, 50).unwrap();
        let mut round = attempts(range, answer, Scripted::new(guesses));
        let feedback: Vec<Feedback> = round.by_ref().filter_map(Result::ok).collect();

        let expected: String = feedback.iter().map(|f| f.symbol()).collect();
        prop_assert_eq!(round.history().transcript(), expected);
        prop_assert_eq!(round.history().attempts(), feedback.len());
    }

    #[test]
    fn drawn_answer_is_within_range(range in arbitrary_range(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let answer = range.draw(&mut rng);
        prop_assert!(range.contains(answer));
    }

    #[test]
    fn round_state_name_matches_variant(won in any::<bool>()) {
        let state = if won { RoundState::Won } else { RoundState::AwaitingGuess };
        let expected = if won { "Won" } else { "AwaitingGuess" };
        prop_assert_eq!(state.name(), expected);
        prop_assert_eq!(state.is_final(), won);
    }
}
