//! Screen rectangles and labelled buttons.

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in terminal cells.
///
/// Covers columns `x..x + width` and rows `y..y + height`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        let (x, y) = (u32::from(x), u32::from(y));
        let (left, top) = (u32::from(self.x), u32::from(self.y));
        x >= left
            && y >= top
            && x < left + u32::from(self.width)
            && y < top + u32::from(self.height)
    }
}

/// A labelled rectangle that can be hit-tested.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Clickable {
    rect: Rect,
    label: String,
}

impl Clickable {
    pub fn new(label: impl Into<String>, rect: Rect) -> Self {
        Self {
            rect,
            label: label.into(),
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the point `(x, y)` lies inside the button.
    pub fn is_clicked(&self, x: u16, y: u16) -> bool {
        self.rect.contains(x, y)
    }
}
