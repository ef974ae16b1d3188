//! Input events delivered to the controller once per frame.

/// Keys the game distinguishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Enter,
    Backspace,
    Char(char),
}

/// One input event, in arrival order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// Primary pointer pressed at a cell
    PointerDown { x: u16, y: u16 },
    Key(Key),
    /// The player asked to leave the game
    Quit,
}

/// What the frame loop should do after an event has been handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}
