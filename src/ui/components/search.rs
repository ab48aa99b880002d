//! Search bar component renderer.
//!
//! The search box is always visible. An empty query shows a dimmed
//! placeholder instead.

use crate::ui::helpers::{char_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Blank columns on each side of the box.
const SEARCH_BOX_MARGIN: usize = 5;

const PLACEHOLDER: &str = "Search...";

/// Renders the three-line search box. Returns the next free row.
///
/// ```text
/// [margin] ┌──────────────────┐ [margin]
/// [margin] │ query            │ [margin]
/// [margin] └──────────────────┘ [margin]
/// ```
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let inner_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2 + 2);
    let margin = " ".repeat(SEARCH_BOX_MARGIN);
    let border = Theme::fg(&theme.colors.search_bar_border);
    let rule = "─".repeat(inner_width);

    let (text, color) = if search.query.is_empty() {
        (PLACEHOLDER, &theme.colors.text_dim)
    } else {
        (search.query.as_str(), &theme.colors.text_normal)
    };
    let content: String = format!(" {text}").chars().take(inner_width).collect();
    let padding = " ".repeat(inner_width.saturating_sub(char_width(&content)));

    let lines = [
        format!("{border}┌{rule}┐"),
        format!("{border}│{}{content}{padding}{border}│", Theme::fg(color)),
        format!("{border}└{rule}┘"),
    ];
    for (offset, line) in lines.iter().enumerate() {
        position_cursor(row + offset, 1);
        print!("{margin}{line}{}", Theme::reset());
    }

    row + lines.len()
}
