//! Real terminal I/O.

pub mod terminal;

pub use terminal::{map_event, Terminal};
