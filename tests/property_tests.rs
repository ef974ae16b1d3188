//! Property-based tests for the game rules and the state machine core.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use chrono::Utc;
use mystery_number::core::{State, StateHistory, StateTransition};
use mystery_number::game::{
    parse_guess, Difficulty, GameController, GuessError, RngSource, Screen, SecretSource, EASY,
    HARD, NORMAL,
};
use proptest::prelude::*;

struct Fixed(u32);

impl SecretSource for Fixed {
    fn draw(&mut self, _max: u32) -> u32 {
        self.0
    }
}

prop_compose! {
    fn arbitrary_difficulty()(variant in 0..3u8) -> Difficulty {
        match variant {
            0 => EASY,
            1 => NORMAL,
            _ => HARD,
        }
    }
}

prop_compose! {
    fn arbitrary_screen()(variant in 0..3u8) -> Screen {
        match variant {
            0 => Screen::Menu,
            1 => Screen::Playing,
            _ => Screen::End,
        }
    }
}

prop_compose! {
    fn difficulty_and_secret()(difficulty in arbitrary_difficulty())
        (secret in 1..=difficulty.range, difficulty in Just(difficulty)) -> (Difficulty, u32) {
        (difficulty, secret)
    }
}

proptest! {
    #[test]
    fn seeded_draws_stay_in_range(seed in any::<u64>(), difficulty in arbitrary_difficulty()) {
        let mut source = RngSource::from_seed(Some(seed));
        for _ in 0..20 {
            let secret = source.draw(difficulty.range);
            prop_assert!((1..=difficulty.range).contains(&secret));
        }
    }

    #[test]
    fn in_range_numbers_parse(difficulty in arbitrary_difficulty(), n in 1u32..=500) {
        prop_assume!(n <= difficulty.range);
        prop_assert_eq!(parse_guess(&n.to_string(), difficulty.range), Ok(n));
        prop_assert_eq!(parse_guess(&format!("  {}\t", n), difficulty.range), Ok(n));
    }

    #[test]
    fn out_of_range_numbers_are_rejected(difficulty in arbitrary_difficulty(), n in -10_000i64..10_000) {
        prop_assume!(n < 1 || n > i64::from(difficulty.range));
        prop_assert_eq!(
            parse_guess(&n.to_string(), difficulty.range),
            Err(GuessError::OutOfRange { max: difficulty.range })
        );
    }

    #[test]
    fn text_with_letters_is_not_a_number(prefix in "[0-9]{0,3}", suffix in "[a-zA-Z]{1,5}") {
        let input = format!("{}{}", prefix, suffix);
        prop_assert_eq!(parse_guess(&input, 100), Err(GuessError::NotANumber));
    }

    #[test]
    fn invalid_guesses_change_nothing_but_status(
        input in prop_oneof![Just(String::new()), "[a-z]{1,4}", Just("9999".to_string()), Just("0".to_string())]
    ) {
        let mut game = GameController::new(Fixed(27)).unwrap();
        game.start_game(EASY);

        game.submit_guess(&input);

        prop_assert_eq!(game.screen(), &Screen::Playing);
        prop_assert_eq!(game.session().unwrap().attempts_used(), 0);
        prop_assert!(!game.status().is_empty());
    }

    #[test]
    fn wrong_guesses_within_budget_never_end_the_round((difficulty, secret) in difficulty_and_secret()) {
        let wrong = if secret == 1 { 2 } else { 1 };
        let mut game = GameController::new(Fixed(secret)).unwrap();
        game.start_game(difficulty);

        for used in 1..=difficulty.attempt_budget {
            game.submit_guess(&wrong.to_string());
            prop_assert_eq!(game.screen(), &Screen::Playing);
            prop_assert_eq!(game.session().unwrap().attempts_used(), used);
        }

        game.submit_guess(&wrong.to_string());
        prop_assert_eq!(game.screen(), &Screen::End);
        prop_assert_eq!(game.best_score(), None);
        let reveal = format!("The number was {}.", secret);
        prop_assert!(game.status().contains(&reveal));
    }

    #[test]
    fn hints_point_toward_the_secret((difficulty, secret) in difficulty_and_secret(), guess in 1u32..=500) {
        prop_assume!(guess <= difficulty.range && guess != secret);
        let mut game = GameController::new(Fixed(secret)).unwrap();
        game.start_game(difficulty);

        game.submit_guess(&guess.to_string());

        let expected = if guess < secret { "Go higher!" } else { "Go lower!" };
        prop_assert_eq!(game.status(), expected);
    }

    #[test]
    fn best_score_is_minimum_of_wins(wrong_counts in prop::collection::vec(0u32..10, 1..6)) {
        let mut game = GameController::new(Fixed(30)).unwrap();

        for wrong in &wrong_counts {
            game.start_game(EASY);
            for _ in 0..*wrong {
                game.submit_guess("1");
            }
            game.submit_guess("30");
            prop_assert_eq!(game.screen(), &Screen::End);
            game.play_again();
            prop_assert_eq!(game.screen(), &Screen::Menu);
        }

        let best = wrong_counts.iter().min().map(|w| w + 1);
        prop_assert_eq!(game.best_score(), best);
    }

    #[test]
    fn only_end_is_final(screen in arbitrary_screen()) {
        prop_assert_eq!(screen.is_final(), screen == Screen::End);
        prop_assert_eq!(screen.name(), format!("{:?}", screen));
    }

    #[test]
    fn history_preserves_order(
        transitions in prop::collection::vec(arbitrary_screen(), 1..10)
    ) {
        let mut history = StateHistory::new();
        let mut expected_path = vec![Screen::Menu];

        for (i, to_state) in transitions.iter().enumerate() {
            let from_state = if i == 0 {
                Screen::Menu
            } else {
                transitions[i - 1].clone()
            };

            history = history.record(StateTransition {
                from: from_state,
                to: to_state.clone(),
                timestamp: Utc::now(),
                attempt: 1,
            });
            expected_path.push(to_state.clone());
        }

        let path = history.get_path();
        prop_assert_eq!(path.len(), expected_path.len());
        for (i, state) in path.iter().enumerate() {
            prop_assert_eq!(*state, &expected_path[i]);
        }
    }

    #[test]
    fn history_roundtrip_serialization(rounds in 0usize..4) {
        let mut game = GameController::new(Fixed(5)).unwrap();
        for _ in 0..rounds {
            game.start_game(EASY);
            game.submit_guess("5");
            game.play_again();
        }

        let json = serde_json::to_string(game.history()).unwrap();
        let deserialized: StateHistory<Screen> = serde_json::from_str(&json).unwrap();

        prop_assert_eq!(deserialized.transitions().len(), rounds * 3);
        prop_assert_eq!(deserialized.get_path(), game.history().get_path());
    }
}
