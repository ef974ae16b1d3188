//! Whole-game walkthroughs driven through input events.

use mystery_number::game::{GameController, Screen, SecretSource, EASY, HARD, NORMAL};
use mystery_number::ui::{Control, InputEvent, Key, Rect};

struct Fixed(u32);

impl SecretSource for Fixed {
    fn draw(&mut self, max: u32) -> u32 {
        self.0.min(max)
    }
}

fn click(game: &mut GameController<Fixed>, rect: Rect) -> Control {
    game.handle_event(&InputEvent::PointerDown {
        x: rect.x + rect.width / 2,
        y: rect.y + rect.height / 2,
    })
}

fn pick(game: &mut GameController<Fixed>, difficulty: &str) {
    let rect = game.menu_button(difficulty).unwrap().rect();
    click(game, rect);
}

fn guess(game: &mut GameController<Fixed>, text: &str) {
    for c in text.chars() {
        game.handle_event(&InputEvent::Key(Key::Char(c)));
    }
    game.handle_event(&InputEvent::Key(Key::Enter));
}

#[test]
fn easy_round_won_on_third_guess() {
    let mut game = GameController::new(Fixed(27)).unwrap();
    pick(&mut game, "Easy");

    guess(&mut game, "10");
    assert_eq!(game.status(), "Go higher!");
    guess(&mut game, "40");
    assert_eq!(game.status(), "Go lower!");
    guess(&mut game, "27");

    assert_eq!(game.screen(), &Screen::End);
    assert_eq!(game.status(), "Correct! You found it in 3 attempts.");
    assert_eq!(game.best_score(), Some(3));
}

#[test]
fn win_on_the_last_allowed_attempt() {
    let mut game = GameController::new(Fixed(99)).unwrap();
    pick(&mut game, "Normal");

    for _ in 1..NORMAL.attempt_budget {
        guess(&mut game, "1");
    }
    assert_eq!(game.screen(), &Screen::Playing);
    guess(&mut game, "99");

    assert_eq!(game.screen(), &Screen::End);
    assert_eq!(game.status(), "Correct! You found it in 7 attempts.");
    assert_eq!(game.best_score(), Some(7));
}

#[test]
fn losing_takes_one_guess_past_the_budget() {
    let mut game = GameController::new(Fixed(321)).unwrap();
    pick(&mut game, "Hard");

    for _ in 0..HARD.attempt_budget {
        guess(&mut game, "1");
        assert_eq!(game.screen(), &Screen::Playing);
    }
    assert_eq!(game.session().unwrap().attempts_used(), 5);

    guess(&mut game, "1");

    assert_eq!(game.screen(), &Screen::End);
    assert_eq!(game.status(), "Out of attempts! The number was 321.");
    assert_eq!(game.best_score(), None);
    assert!(game.frame().contains_text("Out of attempts!"));
}

#[test]
fn best_score_keeps_the_lower_result() {
    let mut game = GameController::new(Fixed(20)).unwrap();

    pick(&mut game, "Easy");
    for g in ["1", "2", "3", "4", "20"] {
        guess(&mut game, g);
    }
    assert_eq!(game.best_score(), Some(5));
    let again = game.play_again_button().rect();
    click(&mut game, again);

    pick(&mut game, "Easy");
    for g in ["1", "2", "20"] {
        guess(&mut game, g);
    }
    assert_eq!(game.best_score(), Some(3));
    let again = game.play_again_button().rect();
    click(&mut game, again);

    pick(&mut game, "Easy");
    for g in ["1", "2", "3", "4", "5", "6", "20"] {
        guess(&mut game, g);
    }
    assert_eq!(game.best_score(), Some(3));
}

#[test]
fn play_again_returns_to_menu_and_keeps_best() {
    let mut game = GameController::new(Fixed(8)).unwrap();
    pick(&mut game, "Easy");
    guess(&mut game, "8");

    let again = game.play_again_button().rect();
    click(&mut game, again);

    assert_eq!(game.screen(), &Screen::Menu);
    assert!(game.session().is_none());
    assert_eq!(game.best_score(), Some(1));
    assert_eq!(game.status(), "");

    pick(&mut game, "Hard");
    assert_eq!(game.screen(), &Screen::Playing);
    assert_eq!(game.session().unwrap().attempts_used(), 0);
    assert_eq!(game.session().unwrap().difficulty(), &HARD);
}

#[test]
fn invalid_input_is_advisory_only() {
    let mut game = GameController::new(Fixed(27)).unwrap();
    pick(&mut game, "Easy");

    game.submit_guess("");
    assert_eq!(game.status(), "Please enter a number!");
    game.submit_guess("abc");
    assert_eq!(game.status(), "Invalid number!");
    game.submit_guess("9999");
    assert_eq!(game.status(), "Number must be between 1 and 50!");
    game.submit_guess("0");
    assert_eq!(game.status(), "Number must be between 1 and 50!");

    assert_eq!(game.screen(), &Screen::Playing);
    assert_eq!(game.session().unwrap().attempts_used(), 0);
}

#[test]
fn field_accepts_digits_only() {
    let mut game = GameController::new(Fixed(27)).unwrap();
    pick(&mut game, "Easy");

    for c in "2x7".chars() {
        game.handle_event(&InputEvent::Key(Key::Char(c)));
    }
    assert_eq!(game.field().text(), "27");

    game.handle_event(&InputEvent::Key(Key::Backspace));
    assert_eq!(game.field().text(), "2");
}

#[test]
fn clicking_away_from_field_stops_typing() {
    let mut game = GameController::new(Fixed(27)).unwrap();
    pick(&mut game, "Easy");

    game.handle_event(&InputEvent::PointerDown { x: 0, y: 0 });
    guess(&mut game, "27");

    assert_eq!(game.screen(), &Screen::Playing);
    assert_eq!(game.session().unwrap().attempts_used(), 0);

    let field = game.field().rect();
    click(&mut game, field);
    guess(&mut game, "27");
    assert_eq!(game.screen(), &Screen::End);
}

#[test]
fn check_button_submits_typed_guess() {
    let mut game = GameController::new(Fixed(27)).unwrap();
    pick(&mut game, "Easy");
    for c in "27".chars() {
        game.handle_event(&InputEvent::Key(Key::Char(c)));
    }

    let check = game.check_button().rect();
    click(&mut game, check);

    assert_eq!(game.screen(), &Screen::End);
    assert_eq!(game.best_score(), Some(1));
}

#[test]
fn end_screen_ignores_guesses_and_menu_clicks() {
    let mut game = GameController::new(Fixed(27)).unwrap();
    pick(&mut game, "Easy");
    guess(&mut game, "27");

    game.submit_guess("27");
    pick(&mut game, "Hard");

    assert_eq!(game.screen(), &Screen::End);
    assert_eq!(game.best_score(), Some(1));
}

#[test]
fn quit_is_honoured_on_every_screen() {
    let mut game = GameController::new(Fixed(27)).unwrap();
    assert_eq!(game.handle_event(&InputEvent::Quit), Control::Quit);

    pick(&mut game, "Easy");
    assert_eq!(game.handle_event(&InputEvent::Quit), Control::Quit);

    guess(&mut game, "27");
    assert_eq!(game.handle_event(&InputEvent::Quit), Control::Quit);
}

#[test]
fn history_records_every_screen_change() {
    let mut game = GameController::new(Fixed(27)).unwrap();
    pick(&mut game, "Easy");
    guess(&mut game, "10");
    guess(&mut game, "27");
    let again = game.play_again_button().rect();
    click(&mut game, again);

    let path = game.history().get_path();
    assert_eq!(
        path,
        vec![&Screen::Menu, &Screen::Playing, &Screen::End, &Screen::Menu]
    );
    assert_eq!(game.history().transitions()[1].attempt, 2);
    assert_eq!(game.difficulties().get("easy"), Some(&EASY));
}
