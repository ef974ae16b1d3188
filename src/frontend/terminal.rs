//! Crossterm backend.

use crate::app::Backend;
use crate::ui::{DrawCommand, Frame, InputEvent, Key, Rect, Tone};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, execute, queue};
use log::{debug, warn};
use std::io::{self, Stdout, Write};
use std::time::Duration;

const WHITE: Color = Color::Rgb {
    r: 235,
    g: 235,
    b: 235,
};
const GRAY: Color = Color::Rgb {
    r: 140,
    g: 140,
    b: 140,
};
const BLUE: Color = Color::Rgb {
    r: 90,
    g: 160,
    b: 255,
};
const RED: Color = Color::Rgb {
    r: 235,
    g: 80,
    b: 80,
};
const GREEN: Color = Color::Rgb {
    r: 90,
    g: 210,
    b: 110,
};
const YELLOW: Color = Color::Rgb {
    r: 240,
    g: 200,
    b: 80,
};

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Normal => WHITE,
        Tone::Title => BLUE,
        Tone::Warning => YELLOW,
        Tone::Success => GREEN,
        Tone::Danger => RED,
    }
}

/// Translate a crossterm event into a game event.
///
/// Only key presses count; repeats and releases are dropped. Esc and
/// Ctrl-C quit.
pub fn map_event(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) => match code {
            KeyCode::Esc => Some(InputEvent::Quit),
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                Some(InputEvent::Quit)
            }
            KeyCode::Enter => Some(InputEvent::Key(Key::Enter)),
            KeyCode::Backspace => Some(InputEvent::Key(Key::Backspace)),
            KeyCode::Char(c) => Some(InputEvent::Key(Key::Char(c))),
            _ => None,
        },
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => Some(InputEvent::PointerDown { x: column, y: row }),
        _ => None,
    }
}

/// Raw-mode alternate screen with mouse capture.
///
/// Call [`Terminal::end`] to restore the terminal; dropping does it too,
/// ignoring errors.
pub struct Terminal {
    out: Stdout,
    active: bool,
}

impl Terminal {
    pub fn begin() -> io::Result<Self> {
        let mut out = io::stdout();
        execute!(
            out,
            EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide,
            Clear(ClearType::All)
        )?;
        terminal::enable_raw_mode()?;
        debug!("terminal initialised: {:?}", terminal::size().ok());

        Ok(Self { out, active: true })
    }

    pub fn end(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        queue!(
            self.out,
            ResetColor,
            Clear(ClearType::All),
            cursor::Show,
            DisableMouseCapture,
            LeaveAlternateScreen
        )?;
        self.out.flush()?;
        terminal::disable_raw_mode()
    }

    fn draw_text(&mut self, x: u16, y: u16, text: &str, color: Color) -> io::Result<()> {
        queue!(
            self.out,
            cursor::MoveTo(x, y),
            SetForegroundColor(color),
            Print(text)
        )
    }

    fn draw_box(&mut self, rect: Rect, inner: &str, color: Color) -> io::Result<()> {
        if rect.width < 2 || rect.height < 2 {
            return Ok(());
        }
        let span = usize::from(rect.width - 2);
        let edge = format!("+{}+", "-".repeat(span));
        let blank = format!("|{}|", " ".repeat(span));
        let label: String = inner.chars().take(span).collect();
        let pad = (span - label.chars().count()) / 2;
        let middle = format!(
            "|{:pad$}{}{:rest$}|",
            "",
            label,
            "",
            pad = pad,
            rest = span - pad - label.chars().count()
        );

        let bottom = rect.y + rect.height - 1;
        let mid = rect.y + rect.height / 2;
        for row in rect.y..=bottom {
            let line = if row == rect.y || row == bottom {
                &edge
            } else if row == mid {
                &middle
            } else {
                &blank
            };
            self.draw_text(rect.x, row, line, color)?;
        }
        Ok(())
    }
}

impl Backend for Terminal {
    fn poll_events(&mut self) -> io::Result<Vec<InputEvent>> {
        let mut events = Vec::new();
        while event::poll(Duration::ZERO)? {
            if let Some(mapped) = map_event(event::read()?) {
                events.push(mapped);
            }
        }
        Ok(events)
    }

    fn present(&mut self, frame: &Frame) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All))?;
        for command in frame.commands() {
            match command {
                DrawCommand::Text { x, y, text, tone } => {
                    self.draw_text(*x, *y, text, tone_color(*tone))?
                }
                DrawCommand::Button { rect, label } => self.draw_box(*rect, label, WHITE)?,
                DrawCommand::Field { rect, text, active } => {
                    let (shown, color) = if *active {
                        (format!("{}_", text), BLUE)
                    } else {
                        (text.clone(), GRAY)
                    };
                    self.draw_box(*rect, &shown, color)?
                }
            }
        }
        queue!(self.out, ResetColor)?;
        self.out.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        if let Err(e) = self.end() {
            warn!("failed to restore terminal: {}", e);
        }
    }
}
