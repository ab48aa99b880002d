//! Footer component renderer.

use crate::ui::helpers::{centered_line, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the dimmed keybinding hints, centred and cut to the pane width.
/// Returns the next free row.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let hints: String = footer.keybindings.chars().take(cols).collect();

    position_cursor(row, 1);
    print!(
        "{}{}{}",
        Theme::fg(&theme.colors.text_dim),
        centered_line(&hints, cols),
        Theme::reset()
    );
    row + 1
}
