//! The game controller: routes input events through the screen machine and
//! describes each frame.

use crate::builder::BuildError;
use crate::core::{State, StateHistory};
use crate::game::difficulty::{Difficulty, DifficultyTable};
use crate::game::guess::parse_guess;
use crate::game::layout;
use crate::game::screen::{screen_machine, Screen};
use crate::game::secret::SecretSource;
use crate::game::session::{attempts_label, Session};
use crate::machine::{StateMachine, StepResult};
use crate::ui::{Clickable, Control, Frame, InputEvent, TextField, Tone};
use log::{debug, error, info};

/// Owns everything the game needs between frames.
///
/// Events are handled one at a time, each to completion, in the order they
/// arrive. Invalid guesses only ever change the status line.
pub struct GameController<R: SecretSource> {
    machine: StateMachine<Screen>,
    difficulties: DifficultyTable,
    menu_buttons: Vec<(Difficulty, Clickable)>,
    check_button: Clickable,
    play_again_button: Clickable,
    field: TextField,
    session: Option<Session>,
    status: String,
    status_tone: Tone,
    best_score: Option<u32>,
    source: R,
}

impl<R: SecretSource> GameController<R> {
    pub fn new(source: R) -> Result<Self, BuildError> {
        let difficulties = DifficultyTable::standard();
        let menu_buttons = difficulties
            .iter()
            .enumerate()
            .map(|(i, d)| (*d, Clickable::new(d.name, layout::difficulty_button(i))))
            .collect();

        Ok(Self {
            machine: screen_machine()?,
            difficulties,
            menu_buttons,
            check_button: Clickable::new("Check", layout::CHECK_BUTTON),
            play_again_button: Clickable::new("Play Again", layout::PLAY_AGAIN_BUTTON),
            field: TextField::new(layout::FIELD),
            session: None,
            status: String::new(),
            status_tone: Tone::Normal,
            best_score: None,
            source,
        })
    }

    pub fn screen(&self) -> &Screen {
        self.machine.current_state()
    }

    /// Whether the current round has been decided.
    pub fn round_over(&self) -> bool {
        self.machine.is_final()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Fewest attempts over all wins so far.
    pub fn best_score(&self) -> Option<u32> {
        self.best_score
    }

    pub fn difficulties(&self) -> &DifficultyTable {
        &self.difficulties
    }

    pub fn field(&self) -> &TextField {
        &self.field
    }

    pub fn history(&self) -> &StateHistory<Screen> {
        self.machine.history()
    }

    /// Menu button for the named difficulty.
    pub fn menu_button(&self, name: &str) -> Option<&Clickable> {
        self.menu_buttons
            .iter()
            .find(|(d, _)| d.name.eq_ignore_ascii_case(name))
            .map(|(_, button)| button)
    }

    pub fn check_button(&self) -> &Clickable {
        &self.check_button
    }

    pub fn play_again_button(&self) -> &Clickable {
        &self.play_again_button
    }

    /// Handle events in order, stopping at the first quit request.
    pub fn handle_events<'a, I>(&mut self, events: I) -> Control
    where
        I: IntoIterator<Item = &'a InputEvent>,
    {
        for event in events {
            if self.handle_event(event) == Control::Quit {
                return Control::Quit;
            }
        }
        Control::Continue
    }

    pub fn handle_event(&mut self, event: &InputEvent) -> Control {
        if *event == InputEvent::Quit {
            info!("quit requested on {} screen", self.screen().name());
            return Control::Quit;
        }

        match self.screen() {
            Screen::Menu => self.handle_menu_event(event),
            Screen::Playing => self.handle_playing_event(event),
            Screen::End => self.handle_end_event(event),
        }
        Control::Continue
    }

    fn handle_menu_event(&mut self, event: &InputEvent) {
        if let InputEvent::PointerDown { x, y } = *event {
            let picked = self
                .menu_buttons
                .iter()
                .find(|(_, button)| button.is_clicked(x, y))
                .map(|(difficulty, _)| *difficulty);
            if let Some(difficulty) = picked {
                self.start_game(difficulty);
            }
        }
    }

    fn handle_playing_event(&mut self, event: &InputEvent) {
        if let Some(submitted) = self.field.handle_event(event) {
            self.submit_guess(&submitted);
            return;
        }

        if let InputEvent::PointerDown { x, y } = *event {
            if self.check_button.is_clicked(x, y) {
                let input = self.field.take();
                self.field.focus();
                self.submit_guess(&input);
            }
        }
    }

    fn handle_end_event(&mut self, event: &InputEvent) {
        if let InputEvent::PointerDown { x, y } = *event {
            if self.play_again_button.is_clicked(x, y) {
                self.play_again();
            }
        }
    }

    /// Draw a secret for `difficulty` and move to the play screen.
    pub fn start_game(&mut self, difficulty: Difficulty) {
        if let Err(e) = self.machine.transition_to(Screen::Playing) {
            error!("cannot start a game: {}", e);
            return;
        }

        let session = Session::start(difficulty, &mut self.source);
        info!(
            "session {} started: {} (1-{}, {} attempts)",
            session.id(),
            difficulty.name,
            difficulty.range,
            difficulty.attempt_budget
        );

        self.session = Some(session);
        self.set_status(
            format!("Guess a number between 1 and {}", difficulty.range),
            Tone::Normal,
        );
        self.field.clear();
        self.field.focus();
    }

    /// Score `input` against the current round.
    ///
    /// Ignored unless a round is in progress.
    pub fn submit_guess(&mut self, input: &str) {
        if *self.screen() != Screen::Playing {
            debug!("guess {:?} ignored on {} screen", input, self.screen().name());
            return;
        }
        let Some(session) = self.session.as_mut() else {
            error!("playing screen without a session; guess {:?} dropped", input);
            return;
        };

        let guess = match parse_guess(input, session.difficulty().range) {
            Ok(guess) => guess,
            Err(advice) => {
                debug!("session {}: rejected {:?}: {}", session.id(), input, advice);
                self.set_status(advice.to_string(), Tone::Warning);
                return;
            }
        };

        let result = session.evaluate(guess);
        let (id, attempts) = (session.id(), session.attempts_used());
        debug!("session {}: guess {} on attempt {}", id, guess, attempts);

        match self.machine.apply(result) {
            Ok(StepResult::Transitioned(_)) => {
                let best = self.best_score.map_or(attempts, |best| best.min(attempts));
                self.best_score = Some(best);
                if let Some(session) = &self.session {
                    let message = session.win_message();
                    self.set_status(message, Tone::Success);
                }
                self.finish_round("won");
            }
            Ok(StepResult::Retry { feedback, .. }) => {
                self.set_status(feedback, Tone::Title);
            }
            Ok(StepResult::Aborted { reason, .. }) => {
                self.set_status(reason, Tone::Danger);
                self.finish_round("lost");
            }
            Err(e) => error!("session {}: {}", id, e),
        }
    }

    /// Leave the end screen for the menu, keeping the best score.
    pub fn play_again(&mut self) {
        if let Err(e) = self.machine.transition_to(Screen::Menu) {
            error!("cannot return to menu: {}", e);
            return;
        }
        self.session = None;
        self.field.clear();
        self.set_status(String::new(), Tone::Normal);
    }

    fn finish_round(&self, outcome: &str) {
        if let Some(session) = &self.session {
            info!(
                "session {} {} after {} in {:.1}s (best: {:?})",
                session.id(),
                outcome,
                attempts_label(session.attempts_used()),
                session.elapsed().as_secs_f32(),
                self.best_score
            );
        }
        match serde_json::to_string(self.machine.history()) {
            Ok(json) => debug!("transition history: {}", json),
            Err(e) => debug!("transition history not serializable: {}", e),
        }
    }

    fn set_status(&mut self, message: String, tone: Tone) {
        self.status = message;
        self.status_tone = tone;
    }

    /// Describe what should be on screen right now.
    pub fn frame(&self) -> Frame {
        let mut frame = Frame::new();
        match self.screen() {
            Screen::Menu => self.draw_menu(&mut frame),
            Screen::Playing => self.draw_playing(&mut frame),
            Screen::End => self.draw_end(&mut frame),
        }
        frame
    }

    fn draw_menu(&self, frame: &mut Frame) {
        let title = "Mystery Number";
        frame.text(layout::centered(title), layout::TITLE_ROW, title, Tone::Title);
        let subtitle = "Choose a difficulty";
        frame.text(
            layout::centered(subtitle),
            layout::SUBTITLE_ROW,
            subtitle,
            Tone::Normal,
        );

        for (difficulty, button) in &self.menu_buttons {
            frame.button(button.rect(), button.label());
            let detail = format!(
                "1-{}, {} tries",
                difficulty.range, difficulty.attempt_budget
            );
            let rect = button.rect();
            frame.text(rect.x + rect.width + 2, rect.y + 1, detail, Tone::Normal);
        }

        let hint = "Click a difficulty. Esc quits.";
        frame.text(layout::centered(hint), layout::HINT_ROW, hint, Tone::Normal);
    }

    fn draw_playing(&self, frame: &mut Frame) {
        if let Some(session) = &self.session {
            let difficulty = session.difficulty();
            let header = format!("Difficulty: {}", difficulty.name);
            frame.text(layout::centered(&header), layout::HEADER_ROW, header, Tone::Title);
            let attempts = format!(
                "Attempts: {}/{}",
                session.attempts_used(),
                difficulty.attempt_budget
            );
            frame.text(
                layout::centered(&attempts),
                layout::ATTEMPTS_ROW,
                attempts,
                Tone::Normal,
            );
        }

        let prompt = "Type a guess, then Enter or Check";
        frame.text(layout::centered(prompt), layout::PROMPT_ROW, prompt, Tone::Normal);
        frame.field(self.field.rect(), self.field.text(), self.field.is_active());
        frame.button(self.check_button.rect(), self.check_button.label());

        if !self.status.is_empty() {
            frame.text(
                layout::centered(&self.status),
                layout::STATUS_ROW,
                self.status.clone(),
                self.status_tone,
            );
        }
    }

    fn draw_end(&self, frame: &mut Frame) {
        frame.text(
            layout::centered(&self.status),
            layout::RESULT_ROW,
            self.status.clone(),
            self.status_tone,
        );

        if let Some(best) = self.best_score {
            let line = format!("Best score: {}", attempts_label(best));
            frame.text(layout::centered(&line), layout::BEST_SCORE_ROW, line, Tone::Normal);
        }

        frame.button(self.play_again_button.rect(), self.play_again_button.label());
    }
}
