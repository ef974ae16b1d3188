//! Single-line numeric input field.

use super::clickable::Rect;
use super::event::{InputEvent, Key};

/// Digit-only text buffer with a focus flag.
///
/// Only semantic-free filtering happens here; range and emptiness checks
/// belong to the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextField {
    rect: Rect,
    text: String,
    active: bool,
}

impl TextField {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            text: String::new(),
            active: false,
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn focus(&mut self) {
        self.active = true;
    }

    /// Return the buffer and leave the field empty.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.text)
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Feed one event to the field.
    ///
    /// Returns the submitted text when Enter is pressed while focused.
    pub fn handle_event(&mut self, event: &InputEvent) -> Option<String> {
        match *event {
            InputEvent::PointerDown { x, y } => {
                self.active = self.rect.contains(x, y);
                None
            }
            InputEvent::Key(_) if !self.active => None,
            InputEvent::Key(Key::Enter) => Some(self.take()),
            InputEvent::Key(Key::Backspace) => {
                self.text.pop();
                None
            }
            InputEvent::Key(Key::Char(c)) => {
                if c.is_ascii_digit() {
                    self.text.push(c);
                }
                None
            }
            InputEvent::Quit => None,
        }
    }
}
