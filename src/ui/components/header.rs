//! Header component renderer.

use crate::ui::helpers::{centered_line, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the centred, bold title bar. Returns the next free row.
///
/// ```text
/// [left padding] Basket (3/3) [right padding]
/// ```
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let background = theme.colors.header_bg.as_deref().map(Theme::bg).unwrap_or_default();

    position_cursor(row, 1);
    print!(
        "{}{}{background}{}{}",
        Theme::bold(),
        Theme::fg(&theme.colors.header_fg),
        centered_line(&header.title, cols),
        Theme::reset()
    );
    row + 1
}
