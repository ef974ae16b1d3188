//! Widgets and the per-frame input/output vocabulary.
//!
//! Nothing here knows about a real terminal: events come in as
//! [`InputEvent`] values and frames go out as [`Frame`] draw lists.

pub mod clickable;
pub mod draw;
pub mod event;
pub mod text_field;

pub use clickable::{Clickable, Rect};
pub use draw::{DrawCommand, Frame, Tone};
pub use event::{Control, InputEvent, Key};
pub use text_field::TextField;
