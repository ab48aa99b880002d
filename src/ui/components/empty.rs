//! Empty state renderer, drawn where the list would be.

use crate::ui::helpers::{centered_line, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the message one row below `row` and the dimmed subtitle under
/// it. Returns the next free row.
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    position_cursor(row + 1, 1);
    print!(
        "{}{}{}",
        Theme::fg(&theme.colors.empty_state_fg),
        centered_line(&empty.message, cols),
        Theme::reset()
    );

    position_cursor(row + 2, 1);
    print!(
        "{}{}{}{}",
        Theme::dim(),
        Theme::fg(&theme.colors.text_dim),
        centered_line(&empty.subtitle, cols),
        Theme::reset()
    );

    row + 3
}
