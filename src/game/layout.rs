//! Where things sit on the screen, in terminal cells.

use crate::ui::Rect;

/// Width of the play area.
pub const WIDTH: u16 = 60;
/// Height of the play area.
pub const HEIGHT: u16 = 22;

pub const TITLE_ROW: u16 = 2;
pub const SUBTITLE_ROW: u16 = 4;
pub const HINT_ROW: u16 = 20;

const BUTTON_WIDTH: u16 = 20;
const BUTTON_HEIGHT: u16 = 3;
const BUTTON_X: u16 = (WIDTH - BUTTON_WIDTH) / 2;

/// Menu button for the `index`-th difficulty preset.
pub fn difficulty_button(index: usize) -> Rect {
    let y = 6 + 4 * index as u16;
    Rect::new(BUTTON_X, y, BUTTON_WIDTH, BUTTON_HEIGHT)
}

pub const HEADER_ROW: u16 = 1;
pub const ATTEMPTS_ROW: u16 = 2;
pub const PROMPT_ROW: u16 = 5;
pub const FIELD: Rect = Rect::new(BUTTON_X, 7, BUTTON_WIDTH, BUTTON_HEIGHT);
pub const CHECK_BUTTON: Rect = Rect::new((WIDTH - 12) / 2, 11, 12, BUTTON_HEIGHT);
pub const STATUS_ROW: u16 = 16;

pub const RESULT_ROW: u16 = 6;
pub const BEST_SCORE_ROW: u16 = 9;
pub const PLAY_AGAIN_BUTTON: Rect = Rect::new(BUTTON_X, 12, BUTTON_WIDTH, BUTTON_HEIGHT);

/// Column that centres `text` in the play area.
pub fn centered(text: &str) -> u16 {
    let len = u16::try_from(text.chars().count()).unwrap_or(WIDTH);
    WIDTH.saturating_sub(len) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widgets_do_not_overlap() {
        let rects = [
            difficulty_button(0),
            difficulty_button(1),
            difficulty_button(2),
        ];
        for (i, a) in rects.iter().enumerate() {
            for b in &rects[i + 1..] {
                assert!(a.y + a.height <= b.y);
            }
        }
        assert!(FIELD.y + FIELD.height <= CHECK_BUTTON.y);
        assert!(CHECK_BUTTON.y + CHECK_BUTTON.height <= STATUS_ROW);
    }

    #[test]
    fn everything_fits_in_the_play_area() {
        for rect in [difficulty_button(2), FIELD, CHECK_BUTTON, PLAY_AGAIN_BUTTON] {
            assert!(rect.x + rect.width <= WIDTH);
            assert!(rect.y + rect.height <= HEIGHT);
        }
    }

    #[test]
    fn centered_handles_long_text() {
        assert_eq!(centered("abcd"), 28);
        assert_eq!(centered(&"x".repeat(100)), 0);
    }
}
