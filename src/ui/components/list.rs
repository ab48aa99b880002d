//! Item list renderer.
//!
//! Two columns: the item name (with the matched substring highlighted) and
//! the short id. The selected row gets the selection colors across the full
//! pane width.

use crate::ui::helpers::{self, char_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

/// Width of the name column including its trailing gap.
const NAME_COLUMN: usize = 42;

/// Renders the `NAME` / `ID` column headers. Returns the next free row.
pub fn render_list_headers(row: usize, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("  {:<width$}{}", "NAME", "ID", width = NAME_COLUMN);
    print!("{}", Theme::reset());
    row + 1
}

/// Renders every display item, one per row. Returns the next free row.
pub fn render_list_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    items
        .iter()
        .fold(row, |current, item| render_list_row(current, item, theme, cols))
}

fn render_list_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
        print!("> ");
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("  ");
    }

    if item.highlight_ranges.is_empty() {
        print!("{}", item.name);
    } else {
        helpers::render_highlighted_text(&item.name, &item.highlight_ranges, theme, item.is_selected);
    }

    let name_len = char_width(&item.name);
    print!("{}", " ".repeat(NAME_COLUMN.saturating_sub(name_len)));

    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{}", item.key);

    let line_len = 2 + NAME_COLUMN.max(name_len) + item.key.len();
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}
