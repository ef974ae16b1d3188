//! Backend-neutral description of one frame.

use super::clickable::Rect;

/// Colour role of a piece of text; the backend picks the actual colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Normal,
    Title,
    Warning,
    Success,
    Danger,
}

/// One primitive painted onto the surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawCommand {
    Text {
        x: u16,
        y: u16,
        text: String,
        tone: Tone,
    },
    Button {
        rect: Rect,
        label: String,
    },
    Field {
        rect: Rect,
        text: String,
        active: bool,
    },
}

/// Ordered draw list for a frame; later commands paint over earlier ones.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    commands: Vec<DrawCommand>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&mut self, x: u16, y: u16, text: impl Into<String>, tone: Tone) {
        self.commands.push(DrawCommand::Text {
            x,
            y,
            text: text.into(),
            tone,
        });
    }

    pub fn button(&mut self, rect: Rect, label: impl Into<String>) {
        self.commands.push(DrawCommand::Button {
            rect,
            label: label.into(),
        });
    }

    pub fn field(&mut self, rect: Rect, text: impl Into<String>, active: bool) {
        self.commands.push(DrawCommand::Field {
            rect,
            text: text.into(),
            active,
        });
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// All text drawn this frame, including button labels and field contents.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().map(|command| match command {
            DrawCommand::Text { text, .. } => text.as_str(),
            DrawCommand::Button { label, .. } => label.as_str(),
            DrawCommand::Field { text, .. } => text.as_str(),
        })
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().any(|text| text.contains(needle))
    }
}
